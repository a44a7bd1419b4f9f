use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use tracing::instrument;

use crate::{
    entities::contact_message::ContactForm,
    errors::AppError,
    handlers::home::LandingPage,
    views::{cookies::Flash, see_other},
    AppState,
};

pub const CONTACT_SENT: &str = "Pesan berhasil dikirim! Terima kasih sudah menghubungi saya.";
pub const CONTACT_FAILED: &str = "Gagal mengirim pesan. Silakan coba lagi.";

#[instrument(skip(req, state, form))]
pub async fn submit_contact(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match state.contact_handler.submit_message(form.clone()).await {
        Ok(()) => Ok(see_other("/#contact", Some(Flash::success(CONTACT_SENT)))),
        Err(e) => {
            tracing::warn!(error = %e, "Contact message not stored");
            LandingPage::with_contact(&form, Flash::error(CONTACT_FAILED), e.status_code())
                .render(&req, &state)
                .await
        }
    }
}
