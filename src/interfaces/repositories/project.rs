use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    constants::PROJECTS_TABLE,
    entities::{project::{Project, ProjectChanges}, session::AccessToken},
    errors::StoreError,
    repositories::rest_repo::RestProjectRepo,
    store::{client::StoreClient, query::{Order, Query}},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, ascending by `order_index`
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, StoreError>;
    async fn create_project(&self, project: &ProjectChanges, token: &AccessToken) -> Result<Project, StoreError>;
    async fn update_project(&self, id: &Uuid, project: &ProjectChanges, token: &AccessToken) -> Result<Project, StoreError>;
    async fn delete_project(&self, id: &Uuid, token: &AccessToken) -> Result<(), StoreError>;
}

impl RestProjectRepo {
    pub fn new(client: StoreClient) -> Self {
        RestProjectRepo { client }
    }
}

#[async_trait]
impl ProjectRepository for RestProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let query = Query::table_rows(PROJECTS_TABLE).order("order_index", Order::Ascending);
        self.client.select(&query, None).await
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, StoreError> {
        let query = Query::table_rows(PROJECTS_TABLE).eq("id", id);
        self.client.select_single(&query, None).await
    }

    async fn create_project(&self, project: &ProjectChanges, token: &AccessToken) -> Result<Project, StoreError> {
        self.client.insert(PROJECTS_TABLE, project, Some(token)).await
    }

    async fn update_project(&self, id: &Uuid, project: &ProjectChanges, token: &AccessToken) -> Result<Project, StoreError> {
        let query = Query::table_rows(PROJECTS_TABLE).eq("id", id);
        let mut rows = self.client.update(&query, project, Some(token)).await?;
        rows.pop().ok_or(StoreError::NotFound)
    }

    async fn delete_project(&self, id: &Uuid, token: &AccessToken) -> Result<(), StoreError> {
        let query = Query::table_rows(PROJECTS_TABLE).eq("id", id);
        self.client.delete(&query, Some(token)).await
    }
}
