pub mod cookies;
pub mod format;
pub mod sections;
pub mod templates;
pub mod typewriter;

use actix_web::{
    http::{header, header::ContentType, StatusCode},
    web, HttpRequest, HttpResponse,
};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tera::Context;

use crate::{
    constants::{ADMIN_HOME_PATH, FLASH_COOKIE},
    errors::AppError,
    views::cookies::{flash_removal, Flash},
    AppState,
};

const OWNER: &str = "Jery Cevin";

/// Page metadata shared by every template. Absolute URLs come from `site_url`.
#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub owner: &'static str,
    pub title: String,
    pub description: &'static str,
    pub keywords: &'static str,
    pub url: String,
    pub og_image: String,
    pub year: i32,
}

impl SiteMeta {
    pub fn new(site_url: &str) -> Self {
        let url = site_url.trim_end_matches('/').to_string();
        SiteMeta {
            owner: OWNER,
            title: format!("{} - Portfolio", OWNER),
            description: "Professional Portfolio of Jery Cevin - Data Scientist, Web Developer, Mechanical Programmer & Game Developer",
            keywords: "Jery Cevin, Data Science, Web Development, Game Development, Mechanical Programming",
            og_image: format!("{}/cevin.jpeg", url),
            url,
            year: Utc::now().year(),
        }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        SiteMeta::new("http://localhost:8080")
    }
}

/// A template render in progress. Picks up the pending flash notice from the
/// request and clears its cookie once the page is shown.
pub struct Page {
    template: &'static str,
    context: Context,
    status: StatusCode,
    notices: Vec<Flash>,
    consumed_flash: bool,
}

impl Page {
    pub fn new(template: &'static str, req: &HttpRequest) -> Self {
        let site = req
            .app_data::<web::Data<AppState>>()
            .map(|state| SiteMeta::new(&state.config.site_url))
            .unwrap_or_default();

        let mut context = Context::new();
        context.insert("site", &site);

        Page {
            template,
            context,
            status: StatusCode::OK,
            notices: Flash::from_request(req).into_iter().collect(),
            consumed_flash: req.cookie(FLASH_COOKIE).is_some(),
        }
    }

    pub fn insert<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.context.insert(key, value);
        self
    }

    pub fn notice(mut self, flash: Flash) -> Self {
        self.notices.push(flash);
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn render(mut self) -> Result<HttpResponse, AppError> {
        self.context.insert("notices", &self.notices);
        let body = templates::render(self.template, &self.context)?;

        let mut builder = HttpResponse::build(self.status);
        builder.insert_header(ContentType::html());
        if self.consumed_flash {
            builder.cookie(flash_removal());
        }
        Ok(builder.body(body))
    }
}

/// 303 to `location`, carrying a notice for the next page.
pub fn see_other(location: &str, flash: Option<Flash>) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    if let Some(flash) = flash {
        builder.cookie(flash.cookie());
    }
    builder.finish()
}

/// Interstitial shown after a successful save; it moves on to the dashboard
/// after `delay_ms`.
pub fn saved_page(req: &HttpRequest, message: &str, delay_ms: u64) -> Result<HttpResponse, AppError> {
    Page::new("admin/saved.html", req)
        .insert("message", message)
        .insert("target", ADMIN_HOME_PATH)
        .insert("delay_ms", &delay_ms)
        .insert("delay_secs", &delay_ms.div_ceil(1000))
        .notice(Flash::success(message))
        .render()
}

pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let mut ctx = Context::new();
    ctx.insert("status", &status.as_u16());
    ctx.insert("reason", status.canonical_reason().unwrap_or("Error"));
    ctx.insert("message", message);

    templates::render("error.html", &ctx).unwrap_or_else(|_| {
        format!(
            "<!doctype html><title>{}</title><p>{}</p>",
            status,
            tera::escape_html(message)
        )
    })
}
