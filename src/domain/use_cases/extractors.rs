use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use crate::{entities::session::SessionUser, errors::AuthError};

/// Extractor for the signed-in admin placed in request extensions by the
/// session guard. Without one the request is redirected to the login page.
/// Usage: Add `session: AdminSession` as a parameter to your handler function.
#[derive(Debug)]
pub struct AdminSession(pub SessionUser);

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SessionUser>() {
            Some(user) => ready(Ok(AdminSession(user.clone()))),
            None => ready(Err(AuthError::MissingSession.into())),
        }
    }
}
