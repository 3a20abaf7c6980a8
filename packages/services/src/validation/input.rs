use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

/// Read access to the parameters of an incoming request
pub trait ParamSource {
    /// `None` when the request does not carry `name` at all
    fn get_param(&self, name: &str) -> Option<&str>;
}

impl ParamSource for HashMap<String, String> {
    fn get_param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn get_param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ParamSource for IndexMap<String, String> {
    fn get_param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<P: ParamSource + ?Sized> ParamSource for &P {
    fn get_param(&self, name: &str) -> Option<&str> {
        (**self).get_param(name)
    }
}
