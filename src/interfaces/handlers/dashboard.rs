use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    errors::AppError,
    use_cases::{dashboard::load_dashboard, extractors::AdminSession},
    views::{
        format::unread_badge,
        sections::{project_cards, skill_rows, ProjectFilter},
        Page,
    },
    AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Projects,
    Skills,
    Settings,
}

impl Tab {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("skills") => Tab::Skills,
            Some("settings") => Tab::Settings,
            _ => Tab::Projects,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Projects => "projects",
            Tab::Skills => "skills",
            Tab::Settings => "settings",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
}

/// Every visit re-fetches; the page reloads itself when the window regains focus.
#[instrument(skip(req, state, session, query))]
pub async fn dashboard(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let tab = Tab::parse(query.tab.as_deref());
    let data = load_dashboard(
        &state.project_handler,
        &state.skill_handler,
        &state.contact_handler,
        &session.0,
    )
    .await;

    Page::new("admin/dashboard.html", &req)
        .insert("user_email", session.0.display_email())
        .insert("tab", tab.as_str())
        .insert("projects", &project_cards(&data.projects, ProjectFilter::All))
        .insert("skills", &skill_rows(&data.skills))
        .insert("unread_messages", &data.unread_messages)
        .insert("unread_badge", &unread_badge(data.unread_messages))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tabs_fall_back_to_projects() {
        assert_eq!(Tab::parse(Some("skills")), Tab::Skills);
        assert_eq!(Tab::parse(Some("nope")), Tab::Projects);
        assert_eq!(Tab::parse(None), Tab::Projects);
    }
}
