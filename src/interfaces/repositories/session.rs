use async_trait::async_trait;

use crate::{
    entities::session::{AccessToken, AuthSession, AuthUser},
    errors::StoreError,
    repositories::rest_repo::RestSessionRepo,
    store::client::StoreClient,
};

/// The content store's session mechanism. Credentials never touch our storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, StoreError>;
    async fn current_user(&self, token: &AccessToken) -> Result<AuthUser, StoreError>;
    async fn sign_out(&self, token: &AccessToken) -> Result<(), StoreError>;
}

impl RestSessionRepo {
    pub fn new(client: StoreClient) -> Self {
        RestSessionRepo { client }
    }
}

#[async_trait]
impl SessionProvider for RestSessionRepo {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, StoreError> {
        self.client.sign_in_with_password(email, password).await
    }

    async fn current_user(&self, token: &AccessToken) -> Result<AuthUser, StoreError> {
        self.client.get_user(token).await
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), StoreError> {
        self.client.sign_out(token).await
    }
}
