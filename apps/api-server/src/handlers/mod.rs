//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_config, path_config};

/// Configure all application routes, accepting JSON bodies up to `max_body_bytes`.
pub fn configure_routes(max_body_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(json_config(max_body_bytes))
            .app_data(path_config())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health::health_check))
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::post().to(posts::create_post))
                                    .route(web::get().to(posts::list_posts)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::get().to(posts::get_post))
                                    .route(web::put().to(posts::update_post))
                                    .route(web::delete().to(posts::delete_post)),
                            ),
                    ),
            );
    }
}
