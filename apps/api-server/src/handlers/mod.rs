//! HTTP handlers and route configuration.
//!
//! Handlers are the request/response mapper: they turn request bodies, path
//! segments and query strings into domain inputs, call the services and wrap
//! the results in the shared envelopes.

mod health;
mod params;
mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::AppError;

/// Malformed JSON bodies get the same `{error}` envelope as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request data: {err}")).into()
    })
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create))
                .route("", web::get().to(posts::list))
                .route("/{id}", web::get().to(posts::retrieve))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::patch().to(posts::partial_update))
                .route("/{id}", web::delete().to(posts::destroy)),
        )
        .service(
            web::scope("/users")
                .route("", web::post().to(users::create))
                .route("", web::get().to(users::list))
                .route("/{id}", web::get().to(users::retrieve))
                .route("/{id}", web::put().to(users::update))
                .route("/{id}", web::patch().to(users::partial_update))
                .route("/{id}", web::delete().to(users::destroy)),
        );
}
