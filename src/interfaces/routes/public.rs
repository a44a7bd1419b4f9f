use actix_web::web;

use crate::handlers::{contact, home, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(home::landing))
    )
    .service(
        web::resource("/contact")
            .route(web::post().to(contact::submit_contact))
    )
    .service(
        web::resource("/health")
            .route(web::get().to(system::health_check))
    )
    .service(
        web::resource("/robots.txt")
            .route(web::get().to(system::robots_txt))
    );
}
