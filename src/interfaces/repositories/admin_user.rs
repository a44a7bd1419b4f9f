use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    constants::ADMIN_USERS_TABLE,
    entities::session::AccessToken,
    errors::StoreError,
    repositories::rest_repo::RestAdminUserRepo,
    store::{client::StoreClient, query::Query},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Whether `admin_users` holds a row for the user.
    async fn is_admin(&self, user_id: &Uuid, token: &AccessToken) -> Result<bool, StoreError>;
}

impl RestAdminUserRepo {
    pub fn new(client: StoreClient) -> Self {
        RestAdminUserRepo { client }
    }
}

#[async_trait]
impl AdminUserRepository for RestAdminUserRepo {
    async fn is_admin(&self, user_id: &Uuid, token: &AccessToken) -> Result<bool, StoreError> {
        let query = Query::table_rows(ADMIN_USERS_TABLE).eq("user_id", user_id);
        let count = self.client.count(&query, Some(token)).await?;
        Ok(count > 0)
    }
}
