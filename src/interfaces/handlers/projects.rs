use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::instrument;

use crate::{
    constants::ADMIN_HOME_PATH,
    entities::{
        confirmation::{ConfirmForm, DeleteOutcome},
        project::{ProjectCategory, ProjectForm},
    },
    errors::AppError,
    use_cases::extractors::AdminSession,
    views::{cookies::Flash, saved_page, see_other, Page},
    AppState,
};

const NEW_PROJECT_PATH: &str = "/admin/projects/new";

#[derive(Serialize)]
struct CategoryOption {
    value: &'static str,
    label: &'static str,
}

fn category_options() -> Vec<CategoryOption> {
    ProjectCategory::ALL
        .iter()
        .map(|c| CategoryOption { value: c.as_str(), label: c.label() })
        .collect()
}

fn edit_path(id: &str) -> String {
    format!("/admin/projects/edit/{}", id)
}

fn form_page(req: &HttpRequest, session: &AdminSession, action: &str, form: &ProjectForm) -> Page {
    Page::new("admin/project_form.html", req)
        .insert("user_email", session.0.display_email())
        .insert("editing", &(action != NEW_PROJECT_PATH))
        .insert("action", action)
        .insert("categories", &category_options())
        .insert("form", form)
        .insert("loading", &false)
}

#[instrument(skip(req, session))]
pub async fn new_project_page(req: HttpRequest, session: AdminSession) -> Result<HttpResponse, AppError> {
    form_page(&req, &session, NEW_PROJECT_PATH, &ProjectForm::default()).render()
}

#[instrument(skip(req, state, session, form))]
pub async fn create_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    form: web::Form<ProjectForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match state.project_handler.create_project(form.clone(), &session.0).await {
        Ok(_) => saved_page(&req, "Project added successfully!", state.config.redirect_delay_ms),
        Err(e) => form_page(&req, &session, NEW_PROJECT_PATH, &form)
            .notice(Flash::error(format!("Error: {}", e.notice())))
            .status(e.status_code())
            .render(),
    }
}

/// A failed fetch leaves the editor in its loading state with an error notice.
#[instrument(skip(req, state, session))]
pub async fn edit_project_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let action = edit_path(&project_id);

    match state.project_handler.get_project(&project_id).await {
        Ok(project) => form_page(&req, &session, &action, &ProjectForm::from(&project)).render(),
        Err(e) => {
            tracing::warn!(error = %e, "Error loading project");
            form_page(&req, &session, &action, &ProjectForm::default())
                .insert("loading", &true)
                .notice(Flash::error("Error loading project"))
                .render()
        }
    }
}

#[instrument(skip(req, state, session, form))]
pub async fn update_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    project_id: web::Path<String>,
    form: web::Form<ProjectForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match state.project_handler.update_project(&project_id, form.clone(), &session.0).await {
        Ok(_) => saved_page(&req, "Project updated successfully!", state.config.redirect_delay_ms),
        Err(e) => form_page(&req, &session, &edit_path(&project_id), &form)
            .notice(Flash::error(format!("Error: {}", e.notice())))
            .status(e.status_code())
            .render(),
    }
}

#[instrument(skip(req, state, session))]
pub async fn confirm_delete_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project = state.project_handler.get_project(&project_id).await?;

    Page::new("admin/confirm_delete.html", &req)
        .insert("user_email", session.0.display_email())
        .insert("kind", "project")
        .insert("item", &project.title)
        .insert("action", &format!("/admin/projects/{}/delete", project.id))
        .render()
}

#[instrument(skip(state, session, form))]
pub async fn delete_project(
    state: web::Data<AppState>,
    session: AdminSession,
    project_id: web::Path<String>,
    form: web::Form<ConfirmForm>,
) -> HttpResponse {
    match state.project_handler.delete_project(&project_id, form.is_confirmed(), &session.0).await {
        Ok(DeleteOutcome::Deleted) => {
            see_other(ADMIN_HOME_PATH, Some(Flash::success("Project deleted successfully")))
        }
        Ok(DeleteOutcome::Cancelled) => see_other(ADMIN_HOME_PATH, None),
        Err(e) => {
            tracing::warn!(error = %e, "Error deleting project");
            see_other(ADMIN_HOME_PATH, Some(Flash::error("Error deleting project")))
        }
    }
}
