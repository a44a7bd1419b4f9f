use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header, header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

use crate::{constants::{ADMIN_HOME_PATH, LOGIN_PATH}, views::cookies::{Flash, session_removal}};

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    NotFound(String),
    InvalidInput(String),
    Store(StoreError),
    UnauthorizedAccess,
    ForbiddenAccess,
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::Store(err) => write!(f, "{}", err),
            AppError::UnauthorizedAccess => write!(f, "Unauthorized access"),
            AppError::ForbiddenAccess => write!(f, "Forbidden access"),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::InternalError(_) => "Something went wrong. Please try again later.".to_string(),
            _ => self.to_string(),
        };

        let body = crate::views::render_error_page(self.status_code(), &message);
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::BAD_GATEWAY,
            AppError::UnauthorizedAccess => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenAccess => StatusCode::FORBIDDEN,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(field_errors)
    }
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        self.error_response()
    }

    /// Text shown to the user in a transient notice.
    pub fn notice(&self) -> String {
        match self {
            AppError::Store(err) => err.message(),
            AppError::ValidationError(errors) => errors.iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join(", "),
            AppError::NotFound(msg) | AppError::InvalidInput(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        tracing::error!(error = ?err, "Template rendering failed");
        AppError::InternalError(format!("Template error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// Failures raised by the hosted content store client.
#[derive(Debug, Display)]
pub enum StoreError {
    #[display("Content store unreachable: {_0}")]
    Transport(String),

    #[display("{message}")]
    Api { status: u16, message: String },

    #[display("Unexpected content store response: {_0}")]
    Decode(String),

    #[display("Row not found")]
    NotFound,

    #[display("Invalid content store URL: {_0}")]
    InvalidUrl(String),
}

impl std::error::Error for StoreError {}

impl StoreError {
    /// The store's own wording, surfaced verbatim to admins.
    pub fn message(&self) -> String {
        match self {
            StoreError::Api { message, .. } => message.clone(),
            _ => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for StoreError {
    fn from(err: url::ParseError) -> Self {
        StoreError::InvalidUrl(err.to_string())
    }
}

#[derive(Debug, Display, PartialEq)]
pub enum AuthError {
    #[display("Invalid credentials")]
    InvalidCredentials,

    #[display("Please login to access admin panel")]
    MissingSession,

    #[display("Session lookup failed: {_0}")]
    SessionLookup(String),

    #[display("Admin access required")]
    Forbidden,
}

impl std::error::Error for AuthError {}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AuthError::Forbidden => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, ADMIN_HOME_PATH))
                .cookie(Flash::error(self.to_string()).cookie())
                .finish(),
            _ => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .cookie(Flash::error(AuthError::MissingSession.to_string()).cookie())
                .cookie(session_removal())
                .finish(),
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
