//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list))
                .route(web::post().to(posts::create)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::put().to(posts::replace))
                .route(web::delete().to(posts::delete)),
        );
}

/// Malformed bodies get a problem document instead of actix's plain text.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
