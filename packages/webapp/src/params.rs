use services::validation::ParamSource;
use std::collections::HashMap;

/// Parameters of a form submission: the parsed body wins over the query
/// string when both carry the same name
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    body: HashMap<String, String>,
    query: HashMap<String, String>,
}

impl RequestParams {
    pub fn new(body: HashMap<String, String>, query: HashMap<String, String>) -> Self {
        Self { body, query }
    }
}

impl ParamSource for RequestParams {
    fn get_param(&self, name: &str) -> Option<&str> {
        self.body
            .get(name)
            .or_else(|| self.query.get(name))
            .map(String::as_str)
    }
}
