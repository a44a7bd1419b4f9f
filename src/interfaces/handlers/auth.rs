use actix_web::{http::{header, StatusCode}, web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::{
    constants::{ADMIN_HOME_PATH, LOGIN_PATH},
    entities::session::LoginForm,
    errors::AppError,
    use_cases::extractors::AdminSession,
    views::{cookies::{session_cookie, session_removal, Flash}, Page},
    AppState,
};

#[instrument(skip(req))]
pub async fn login_page(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Page::new("admin/login.html", &req).render()
}

#[instrument(skip(req, state, form))]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match state.auth_handler.login(&form).await {
        Ok(session) => {
            let cookie = session_cookie(
                &session.access_token,
                session.expires_in,
                state.config.is_production(),
            );

            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, ADMIN_HOME_PATH))
                .cookie(cookie)
                .cookie(Flash::success("Login successful!").cookie())
                .finish())
        }
        Err(e) => Page::new("admin/login.html", &req)
            .insert("email", &form.email)
            .notice(Flash::error(e.to_string()))
            .status(StatusCode::UNAUTHORIZED)
            .render(),
    }
}

#[instrument(skip(state, session), fields(user_id = %session.0.id))]
pub async fn logout(state: web::Data<AppState>, session: AdminSession) -> HttpResponse {
    state.auth_handler.logout(&session.0.token).await;

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LOGIN_PATH))
        .cookie(session_removal())
        .cookie(Flash::success("Logged out successfully").cookie())
        .finish()
}
