use actix_web::{
    error::UrlencodedError,
    http::{header::ContentType, StatusCode},
    web, HttpResponse, ResponseError,
};

use crate::views::render_error_page;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        FormError::from(err).into()
    }));
}

#[derive(Debug)]
pub struct FormError {
    message: String,
    status: StatusCode,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for FormError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status)
            .insert_header(ContentType::html())
            .body(render_error_page(self.status, &self.message))
    }
}

impl From<UrlencodedError> for FormError {
    fn from(err: UrlencodedError) -> Self {
        tracing::debug!(error = %err, "Rejected form payload");

        let status = match err {
            UrlencodedError::Overflow { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UrlencodedError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };

        FormError {
            message: format!("Form error: {}", err),
            status,
        }
    }
}
