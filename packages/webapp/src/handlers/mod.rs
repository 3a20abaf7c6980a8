pub mod register;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use services::session::take_flash;

use crate::container::AppContainer;
use crate::sessions::SessionCookie;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::resource("/register")
                .route(web::get().to(register::show_form))
                .route(web::post().to(register::submit_form)),
        )
        .default_service(web::to(not_found));
}

/// Landing page; shows, and thereby clears, any pending flash messages
async fn index(req: HttpRequest, container: web::Data<AppContainer>) -> HttpResponse {
    let cookie = SessionCookie::from_request(&req);
    let flash = take_flash(&mut container.sessions().handle(cookie.id));

    HttpResponse::Ok().json(json!({
        "app": container.config().app_name,
        "flash": flash,
    }))
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    tracing::info!(path = %req.path(), "no route matched");
    HttpResponse::NotFound().json(json!({
        "error": "Not Found",
        "path": req.path(),
    }))
}
