use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::errors::AppError;

macro_rules! template {
    ($name:literal) => {
        ($name, include_str!(concat!("../../../templates/", $name)))
    };
}

static TEMPLATES: Lazy<Result<Tera, tera::Error>> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        template!("base.html"),
        template!("error.html"),
        template!("landing.html"),
        template!("admin/base.html"),
        template!("admin/login.html"),
        template!("admin/dashboard.html"),
        template!("admin/project_form.html"),
        template!("admin/skill_form.html"),
        template!("admin/confirm_delete.html"),
        template!("admin/messages.html"),
        template!("admin/saved.html"),
    ])?;
    Ok(tera)
});

/// Parses every embedded template. Called once at startup so a broken
/// template stops the server instead of the first request.
pub fn init() -> Result<(), AppError> {
    engine().map(|_| ())
}

pub fn render(name: &str, context: &Context) -> Result<String, AppError> {
    Ok(engine()?.render(name, context)?)
}

fn engine() -> Result<&'static Tera, AppError> {
    TEMPLATES
        .as_ref()
        .map_err(|e| AppError::InternalError(format!("Templates failed to load: {:?}", e)))
}
