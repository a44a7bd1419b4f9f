use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use tracing::instrument;

use crate::{
    entities::{
        confirmation::{ConfirmForm, DeleteOutcome},
        skill::SkillForm,
    },
    errors::AppError,
    use_cases::extractors::AdminSession,
    views::{cookies::Flash, saved_page, see_other, Page},
    AppState,
};

const NEW_SKILL_PATH: &str = "/admin/skills/new";
const SKILLS_TAB: &str = "/admin?tab=skills";
const SUGGESTED_CATEGORIES: [&str; 5] = [
    "Programming Languages",
    "Web Development",
    "Game Development",
    "Database",
    "Machine Learning",
];

fn edit_path(id: &str) -> String {
    format!("/admin/skills/edit/{}", id)
}

fn form_page(req: &HttpRequest, session: &AdminSession, action: &str, form: &SkillForm) -> Page {
    Page::new("admin/skill_form.html", req)
        .insert("user_email", session.0.display_email())
        .insert("editing", &(action != NEW_SKILL_PATH))
        .insert("action", action)
        .insert("categories", &SUGGESTED_CATEGORIES)
        .insert("form", form)
        .insert("loading", &false)
}

#[instrument(skip(req, session))]
pub async fn new_skill_page(req: HttpRequest, session: AdminSession) -> Result<HttpResponse, AppError> {
    form_page(&req, &session, NEW_SKILL_PATH, &SkillForm::default()).render()
}

#[instrument(skip(req, state, session, form))]
pub async fn create_skill(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    form: web::Form<SkillForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match state.skill_handler.create_skill(form.clone(), &session.0).await {
        Ok(_) => saved_page(&req, "Skill added successfully!", state.config.redirect_delay_ms),
        Err(e) => form_page(&req, &session, NEW_SKILL_PATH, &form)
            .notice(Flash::error(format!("Error: {}", e.notice())))
            .status(e.status_code())
            .render(),
    }
}

#[instrument(skip(req, state, session))]
pub async fn edit_skill_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    skill_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let action = edit_path(&skill_id);

    match state.skill_handler.get_skill(&skill_id).await {
        Ok(skill) => form_page(&req, &session, &action, &SkillForm::from(&skill)).render(),
        Err(e) => {
            tracing::warn!(error = %e, "Error loading skill");
            form_page(&req, &session, &action, &SkillForm::default())
                .insert("loading", &true)
                .notice(Flash::error("Error loading skill"))
                .render()
        }
    }
}

#[instrument(skip(req, state, session, form))]
pub async fn update_skill(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    skill_id: web::Path<String>,
    form: web::Form<SkillForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match state.skill_handler.update_skill(&skill_id, form.clone(), &session.0).await {
        Ok(_) => saved_page(&req, "Skill updated successfully!", state.config.redirect_delay_ms),
        Err(e) => form_page(&req, &session, &edit_path(&skill_id), &form)
            .notice(Flash::error(format!("Error: {}", e.notice())))
            .status(e.status_code())
            .render(),
    }
}

#[instrument(skip(req, state, session))]
pub async fn confirm_delete_skill(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
    skill_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let skill = state.skill_handler.get_skill(&skill_id).await?;

    Page::new("admin/confirm_delete.html", &req)
        .insert("user_email", session.0.display_email())
        .insert("kind", "skill")
        .insert("item", &skill.name)
        .insert("action", &format!("/admin/skills/{}/delete", skill.id))
        .render()
}

#[instrument(skip(state, session, form))]
pub async fn delete_skill(
    state: web::Data<AppState>,
    session: AdminSession,
    skill_id: web::Path<String>,
    form: web::Form<ConfirmForm>,
) -> HttpResponse {
    match state.skill_handler.delete_skill(&skill_id, form.is_confirmed(), &session.0).await {
        Ok(DeleteOutcome::Deleted) => {
            see_other(SKILLS_TAB, Some(Flash::success("Skill deleted successfully")))
        }
        Ok(DeleteOutcome::Cancelled) => see_other(SKILLS_TAB, None),
        Err(e) => {
            tracing::warn!(error = %e, "Error deleting skill");
            see_other(SKILLS_TAB, Some(Flash::error("Error deleting skill")))
        }
    }
}
