use actix_web::{web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::{
    entities::{
        confirmation::{ConfirmForm, DeleteOutcome},
        contact_message::{MessageList, ToggleReadForm},
    },
    errors::AppError,
    use_cases::extractors::AdminSession,
    views::{cookies::Flash, sections::MessageView, see_other, Page},
    AppState,
};

const MESSAGES_PATH: &str = "/admin/messages";

#[instrument(skip(req, state, session))]
pub async fn list_messages(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: AdminSession,
) -> Result<HttpResponse, AppError> {
    let (list, notice) = match state.contact_handler.list_messages(&session.0).await {
        Ok(list) => (list, None),
        Err(e) => {
            tracing::warn!(error = %e, "Gagal memuat pesan");
            (MessageList::from(Vec::new()), Some(Flash::error("Gagal memuat pesan")))
        }
    };

    let views: Vec<MessageView> = list.messages.iter().map(MessageView::from).collect();

    let mut page = Page::new("admin/messages.html", &req)
        .insert("user_email", session.0.display_email())
        .insert("messages", &views)
        .insert("total", &list.total)
        .insert("unread", &list.unread);

    if let Some(notice) = notice {
        page = page.notice(notice);
    }

    page.render()
}

#[instrument(skip(state, session, form))]
pub async fn toggle_read(
    state: web::Data<AppState>,
    session: AdminSession,
    message_id: web::Path<String>,
    form: web::Form<ToggleReadForm>,
) -> HttpResponse {
    let flash = match state.contact_handler.toggle_read(&message_id, form.read, &session.0).await {
        Ok(true) => Flash::success("Ditandai sudah dibaca"),
        Ok(false) => Flash::success("Ditandai belum dibaca"),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to update read status");
            Flash::error("Gagal mengupdate status pesan")
        }
    };

    see_other(MESSAGES_PATH, Some(flash))
}

#[instrument(skip(req, session))]
pub async fn confirm_delete_message(
    req: HttpRequest,
    session: AdminSession,
    message_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Page::new("admin/confirm_delete.html", &req)
        .insert("user_email", session.0.display_email())
        .insert("kind", "message")
        .insert("item", "this message")
        .insert("action", &format!("/admin/messages/{}/delete", message_id))
        .render()
}

#[instrument(skip(state, session, form))]
pub async fn delete_message(
    state: web::Data<AppState>,
    session: AdminSession,
    message_id: web::Path<String>,
    form: web::Form<ConfirmForm>,
) -> HttpResponse {
    match state.contact_handler.delete_message(&message_id, form.is_confirmed(), &session.0).await {
        Ok(DeleteOutcome::Deleted) => see_other(MESSAGES_PATH, Some(Flash::success("Pesan berhasil dihapus"))),
        Ok(DeleteOutcome::Cancelled) => see_other(MESSAGES_PATH, None),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to delete message");
            see_other(MESSAGES_PATH, Some(Flash::error("Gagal menghapus pesan")))
        }
    }
}
