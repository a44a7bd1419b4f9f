use actix_web::web;

use crate::{
    handlers::{auth, dashboard, messages, projects, skills},
    middlewares::session_guard::SessionGuard,
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(SessionGuard)
            .service(
                web::resource("")
                    .route(web::get().to(dashboard::dashboard))
            )
            .service(
                web::resource("/login")
                    .route(web::get().to(auth::login_page))
                    .route(web::post().to(auth::login))
            )
            .service(
                web::resource("/logout")
                    .route(web::post().to(auth::logout))
            )
            .service(
                web::resource("/projects/new")
                    .route(web::get().to(projects::new_project_page))
                    .route(web::post().to(projects::create_project))
            )
            .service(
                web::resource("/projects/edit/{project_id}")
                    .route(web::get().to(projects::edit_project_page))
                    .route(web::post().to(projects::update_project))
            )
            .service(
                web::resource("/projects/{project_id}/delete")
                    .route(web::get().to(projects::confirm_delete_project))
                    .route(web::post().to(projects::delete_project))
            )
            .service(
                web::resource("/skills/new")
                    .route(web::get().to(skills::new_skill_page))
                    .route(web::post().to(skills::create_skill))
            )
            .service(
                web::resource("/skills/edit/{skill_id}")
                    .route(web::get().to(skills::edit_skill_page))
                    .route(web::post().to(skills::update_skill))
            )
            .service(
                web::resource("/skills/{skill_id}/delete")
                    .route(web::get().to(skills::confirm_delete_skill))
                    .route(web::post().to(skills::delete_skill))
            )
            .service(
                web::resource("/messages")
                    .route(web::get().to(messages::list_messages))
            )
            .service(
                web::resource("/messages/{message_id}/toggle")
                    .route(web::post().to(messages::toggle_read))
            )
            .service(
                web::resource("/messages/{message_id}/delete")
                    .route(web::get().to(messages::confirm_delete_message))
                    .route(web::post().to(messages::delete_message))
            )
    );
}
