use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    constants::CONTACT_MESSAGES_TABLE,
    entities::{contact_message::{ContactMessage, NewContactMessage, ReadStatusUpdate}, session::AccessToken},
    errors::StoreError,
    repositories::rest_repo::RestContactMessageRepo,
    store::{client::StoreClient, query::{Order, Query}},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Public write path; anonymous visitors cannot read the row back.
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<(), StoreError>;
    /// Newest first
    async fn list_contact_messages(&self, token: &AccessToken) -> Result<Vec<ContactMessage>, StoreError>;
    async fn count_unread_messages(&self, token: &AccessToken) -> Result<u64, StoreError>;
    async fn set_read_status(&self, id: &Uuid, read: bool, token: &AccessToken) -> Result<(), StoreError>;
    async fn delete_contact_message(&self, id: &Uuid, token: &AccessToken) -> Result<(), StoreError>;
}

impl RestContactMessageRepo {
    pub fn new(client: StoreClient) -> Self {
        RestContactMessageRepo { client }
    }
}

#[async_trait]
impl ContactMessageRepository for RestContactMessageRepo {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<(), StoreError> {
        self.client.insert_minimal(CONTACT_MESSAGES_TABLE, std::slice::from_ref(msg), None).await
    }

    async fn list_contact_messages(&self, token: &AccessToken) -> Result<Vec<ContactMessage>, StoreError> {
        let query = Query::table_rows(CONTACT_MESSAGES_TABLE).order("created_at", Order::Descending);
        self.client.select(&query, Some(token)).await
    }

    async fn count_unread_messages(&self, token: &AccessToken) -> Result<u64, StoreError> {
        let query = Query::table_rows(CONTACT_MESSAGES_TABLE).eq("read", false);
        self.client.count(&query, Some(token)).await
    }

    async fn set_read_status(&self, id: &Uuid, read: bool, token: &AccessToken) -> Result<(), StoreError> {
        let query = Query::table_rows(CONTACT_MESSAGES_TABLE).eq("id", id);
        self.client
            .update::<_, ContactMessage>(&query, &ReadStatusUpdate { read }, Some(token))
            .await
            .map(|_| ())
    }

    async fn delete_contact_message(&self, id: &Uuid, token: &AccessToken) -> Result<(), StoreError> {
        let query = Query::table_rows(CONTACT_MESSAGES_TABLE).eq("id", id);
        self.client.delete(&query, Some(token)).await
    }
}
