use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::contact_message::ContactForm,
    errors::AppError,
    samples::{or_samples, sample_projects, sample_skills},
    views::{
        cookies::Flash,
        sections::{filter_buttons, group_skills, project_cards, ProjectFilter},
        typewriter::Typewriter,
        Page,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct LandingQuery {
    pub filter: Option<String>,
}

#[instrument(skip(req, state, query))]
pub async fn landing(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<LandingQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = ProjectFilter::parse(query.filter.as_deref());
    LandingPage::new(filter).render(&req, &state).await
}

/// Everything the landing page needs besides the store reads.
pub struct LandingPage<'a> {
    filter: ProjectFilter,
    contact: Option<&'a ContactForm>,
    notice: Option<Flash>,
    status: StatusCode,
}

impl<'a> LandingPage<'a> {
    pub fn new(filter: ProjectFilter) -> Self {
        LandingPage { filter, contact: None, notice: None, status: StatusCode::OK }
    }

    /// Re-render after a failed submission, keeping what the visitor typed.
    pub fn with_contact(contact: &'a ContactForm, notice: Flash, status: StatusCode) -> Self {
        LandingPage {
            filter: ProjectFilter::All,
            contact: Some(contact),
            notice: Some(notice),
            status,
        }
    }

    pub async fn render(self, req: &HttpRequest, state: &AppState) -> Result<HttpResponse, AppError> {
        let projects = state.project_handler.list_projects().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load projects, showing samples");
            Vec::new()
        });
        let skills = state.skill_handler.list_skills().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load skills, showing samples");
            Vec::new()
        });

        let projects = or_samples(projects, sample_projects);
        let skills = or_samples(skills, sample_skills);
        let typewriter = Typewriter::hero();
        let empty = ContactForm::default();

        let mut page = Page::new("landing.html", req)
            .insert("typewriter", &serde_json::json!({
                "initial": typewriter.initial_text(),
                "frames": typewriter.frames(),
            }))
            .insert("skill_groups", &group_skills(&skills))
            .insert("project_cards", &project_cards(&projects, self.filter))
            .insert("filter_buttons", &filter_buttons(self.filter))
            .insert("contact", self.contact.unwrap_or(&empty))
            .status(self.status);

        if let Some(notice) = self.notice {
            page = page.notice(notice);
        }

        page.render()
    }
}
