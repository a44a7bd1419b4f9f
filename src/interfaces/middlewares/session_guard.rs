use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web, Error, HttpMessage, ResponseError,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    constants::{LOGIN_PATH, LOGOUT_PATH},
    errors::AppError,
    views::cookies::session_token,
    AppState,
};

/// Gates everything under `/admin`. The login page passes through; any other
/// request needs a live session, and writes additionally need admin membership.
pub struct SessionGuard;

impl<S> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct SessionGuardService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for SessionGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if is_public_route(req.path()) {
                return service.call(req).await;
            }

            let state = req.app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    tracing::error!("AppState missing in session guard");
                    AppError::InternalError("Application state missing".to_string())
                })?;

            let user = match state.auth_handler.current_user(session_token(req.request())).await {
                Ok(user) => user,
                Err(e) => {
                    tracing::info!(path = %req.path(), reason = %e, "Redirecting request without a session");
                    return Ok(req.into_response(e.error_response()));
                }
            };

            if requires_admin(req.method(), req.path()) {
                if let Err(e) = state.auth_handler.ensure_admin(&user).await {
                    tracing::warn!(path = %req.path(), "Admin write rejected");
                    return Ok(req.into_response(e.error_response()));
                }
            }

            req.extensions_mut().insert(user);
            service.call(req).await
        })
    }
}

fn is_public_route(path: &str) -> bool {
    path == LOGIN_PATH
}

fn requires_admin(method: &Method, path: &str) -> bool {
    !matches!(*method, Method::GET | Method::HEAD) && path != LOGOUT_PATH
}
