use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use services::session::add_flash;
use services::validation::{stored_errors, FieldRules, Rule, ValidationErrorsExt};
use std::collections::HashMap;

use crate::container::AppContainer;
use crate::errors::AppError;
use crate::params::RequestParams;
use crate::sessions::SessionCookie;

pub const REGISTERED_MESSAGE: &str = "Registration successful";

pub fn registration_rules() -> FieldRules {
    FieldRules::new()
        .rule("name", Rule::new().required().max_length(255))
        .rule("email", Rule::new().required().email())
        .rule("password", Rule::new().required().password())
}

/// Shows the errors left in the session by the last submission
pub(super) async fn show_form(
    req: HttpRequest,
    container: web::Data<AppContainer>,
) -> HttpResponse {
    let cookie = SessionCookie::from_request(&req);
    let errors = stored_errors(&container.sessions().handle(cookie.id));

    let mut response = HttpResponse::Ok();
    cookie.attach(&mut response);
    response.json(json!({ "errors": errors }))
}

pub(super) async fn submit_form(
    req: HttpRequest,
    container: web::Data<AppContainer>,
    query: web::Query<HashMap<String, String>>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let cookie = SessionCookie::from_request(&req);
    let params = RequestParams::new(form.into_inner(), query.into_inner());
    let display_details = container.config().display_error_details;

    let mut validator = container.validator_for(cookie.id);
    let fails = validator
        .validate(&params, registration_rules())
        .map_err(|fault| AppError::internal(fault, display_details))?
        .fails();

    let location = if fails {
        tracing::warn!(
            session_id = %cookie.id,
            errors = %validator.errors().to_string_list(),
            "registration rejected"
        );
        "/register"
    } else {
        let mut session = validator.into_session();
        add_flash(&mut session, REGISTERED_MESSAGE)
            .map_err(|e| AppError::internal(e, display_details))?;
        tracing::info!(session_id = %cookie.id, "registration accepted");
        "/"
    };

    let mut response = HttpResponse::SeeOther();
    response.insert_header((header::LOCATION, location));
    cookie.attach(&mut response);
    Ok(response.finish())
}
