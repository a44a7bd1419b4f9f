use validator::Validate;

use crate::entities::session::{AccessToken, AuthSession, LoginForm, SessionUser};
use crate::errors::AuthError;
use crate::repositories::{admin_user::AdminUserRepository, session::SessionProvider};

pub struct AuthHandler<S, A>
where
    S: SessionProvider,
    A: AdminUserRepository,
{
    pub session_provider: S,
    pub admin_repo: A,
}

impl<S, A> AuthHandler<S, A>
where
    S: SessionProvider,
    A: AdminUserRepository,
{
    pub fn new(session_provider: S, admin_repo: A) -> Self {
        AuthHandler {
            session_provider,
            admin_repo,
        }
    }

    /// Password sign-in. Every failure collapses into `InvalidCredentials`.
    pub async fn login(&self, request: &LoginForm) -> Result<AuthSession, AuthError> {
        request.validate().map_err(|_| AuthError::InvalidCredentials)?;

        let session = self.session_provider
            .sign_in(request.email.trim(), &request.password)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Sign-in rejected");
                AuthError::InvalidCredentials
            })?;

        tracing::info!(user_id = %session.user.id, "Admin logged in successfully");
        Ok(session)
    }

    pub async fn logout(&self, token: &AccessToken) {
        if let Err(e) = self.session_provider.sign_out(token).await {
            tracing::warn!(error = %e, "Sign-out at the content store failed");
        }
    }

    /// Resolves the user behind a session token. Any lookup error counts as signed out.
    pub async fn current_user(&self, token: Option<AccessToken>) -> Result<SessionUser, AuthError> {
        let token = token.ok_or(AuthError::MissingSession)?;

        let user = self.session_provider
            .current_user(&token)
            .await
            .map_err(|e| AuthError::SessionLookup(e.to_string()))?;

        Ok(SessionUser::new(user, token))
    }

    /// Requires an `admin_users` row. Lookup errors deny.
    pub async fn ensure_admin(&self, user: &SessionUser) -> Result<(), AuthError> {
        match self.admin_repo.is_admin(&user.id, &user.token).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::warn!(user_id = %user.id, "User is not listed in admin_users");
                Err(AuthError::Forbidden)
            }
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Admin membership lookup failed");
                Err(AuthError::Forbidden)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::session::AuthUser,
        errors::StoreError,
        repositories::{admin_user::MockAdminUserRepository, session::MockSessionProvider},
    };
    use uuid::Uuid;

    fn login_form(password: &str) -> LoginForm {
        LoginForm {
            email: "admin@example.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let mut provider = MockSessionProvider::new();
        provider.expect_sign_in()
            .returning(|email, _| {
                let message = if email == "admin@example.com" { "Invalid login credentials" } else { "User not found" };
                Err(StoreError::Api { status: 400, message: message.into() })
            });

        let handler = AuthHandler::new(provider, MockAdminUserRepository::new());

        let err = handler.login(&login_form("wrong")).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);

        let unknown = LoginForm { email: "ghost@example.com".into(), password: "x".into() };
        assert_eq!(handler.login(&unknown).await.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn empty_password_is_rejected_without_calling_the_provider() {
        let mut provider = MockSessionProvider::new();
        provider.expect_sign_in().times(0);

        let handler = AuthHandler::new(provider, MockAdminUserRepository::new());
        assert_eq!(handler.login(&login_form("")).await.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn missing_token_is_not_authenticated() {
        let mut provider = MockSessionProvider::new();
        provider.expect_current_user().times(0);

        let handler = AuthHandler::new(provider, MockAdminUserRepository::new());
        assert_eq!(handler.current_user(None).await.unwrap_err(), AuthError::MissingSession);
    }

    #[tokio::test]
    async fn lookup_errors_fail_closed() {
        let mut provider = MockSessionProvider::new();
        provider.expect_current_user()
            .returning(|_| Err(StoreError::Transport("timeout".into())));

        let handler = AuthHandler::new(provider, MockAdminUserRepository::new());
        let result = handler.current_user(Some(AccessToken::new("stale"))).await;
        assert!(matches!(result, Err(AuthError::SessionLookup(_))));
    }

    #[tokio::test]
    async fn current_user_keeps_the_token() {
        let id = Uuid::new_v4();
        let mut provider = MockSessionProvider::new();
        provider.expect_current_user()
            .returning(move |_| Ok(AuthUser { id, email: Some("admin@example.com".into()) }));

        let handler = AuthHandler::new(provider, MockAdminUserRepository::new());
        let user = handler.current_user(Some(AccessToken::new("live"))).await.unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.token.as_str(), "live");
    }

    #[tokio::test]
    async fn admin_membership_errors_deny() {
        let mut admins = MockAdminUserRepository::new();
        admins.expect_is_admin()
            .returning(|_, _| Err(StoreError::Api { status: 500, message: "boom".into() }));

        let handler = AuthHandler::new(MockSessionProvider::new(), admins);
        let user = SessionUser { id: Uuid::new_v4(), email: None, token: AccessToken::new("t") };
        assert_eq!(handler.ensure_admin(&user).await.unwrap_err(), AuthError::Forbidden);
    }
}
