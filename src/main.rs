mod setup;

use actix_web::{web, App, HttpServer};
use setup::{load_config, set_up_tracing};
use tracing_actix_web::TracingLogger;
use webapp::{handlers, AppContainer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    set_up_tracing(&config);

    let address = config.bind_address();
    let container = AppContainer::new(config);
    tracing::info!(
        app = %container.config().app_name,
        host = %address.0,
        port = address.1,
        "starting server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(container.clone()))
            .configure(handlers::configure)
    })
    .bind(address)?
    .run()
    .await
}
