use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    HttpRequest,
};
use serde::{Deserialize, Serialize};

use crate::{constants::{FLASH_COOKIE, SESSION_COOKIE}, entities::session::AccessToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// A transient notice carried to the next rendered page in a cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash { level: FlashLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Flash { level: FlashLevel::Error, message: message.into() }
    }

    pub fn cookie(&self) -> Cookie<'static> {
        let json = serde_json::to_string(self).unwrap_or_default();
        Cookie::build(FLASH_COOKIE, urlencoding::encode(&json).into_owned())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// Reads the pending notice, if any. Malformed cookies are ignored.
    pub fn from_request(req: &HttpRequest) -> Option<Flash> {
        let cookie = req.cookie(FLASH_COOKIE)?;
        let json = urlencoding::decode(cookie.value()).ok()?;
        serde_json::from_str(&json).ok()
    }
}

pub fn flash_removal() -> Cookie<'static> {
    removal(FLASH_COOKIE)
}

pub fn session_cookie(token: &AccessToken, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.as_str().to_string())
        .path("/admin")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age_secs.max(0)))
        .finish()
}

pub fn session_token(req: &HttpRequest) -> Option<AccessToken> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .map(AccessToken::new)
}

pub fn session_removal() -> Cookie<'static> {
    let mut cookie = removal(SESSION_COOKIE);
    cookie.set_path("/admin");
    cookie
}

fn removal(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn flash_survives_the_cookie_round_trip() {
        let flash = Flash::success("Pesan berhasil dikirim! Terima kasih sudah menghubungi saya.");
        let req = TestRequest::default().cookie(flash.cookie()).to_http_request();
        assert_eq!(Flash::from_request(&req), Some(flash));
    }

    #[test]
    fn garbage_flash_cookie_is_ignored() {
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE, "%7Bnot-json"))
            .to_http_request();
        assert_eq!(Flash::from_request(&req), None);
    }

    #[test]
    fn empty_session_cookie_is_no_session() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, ""))
            .to_http_request();
        assert!(session_token(&req).is_none());
    }

    #[test]
    fn session_token_is_read_from_its_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "live-token"))
            .to_http_request();
        assert_eq!(session_token(&req).map(|t| t.as_str().to_string()).as_deref(), Some("live-token"));
    }

    #[test]
    fn session_token_is_read_through_the_service_request() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "guarded"))
            .to_srv_request();
        assert!(session_token(req.request()).is_some());
    }
}
