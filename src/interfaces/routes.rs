use actix_web::web;

use crate::handlers::{assets, system};

mod admin;
mod form_error;
mod public;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::config_routes)
        .configure(admin::config_routes)
        .configure(form_error::config_routes);

    // Last, so named routes win over file names.
    cfg.service(
        web::resource("/{filename}")
            .route(web::get().to(assets::public_file))
    );

    cfg.default_service(web::to(system::not_found));
}
