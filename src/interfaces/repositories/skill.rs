use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    constants::SKILLS_TABLE,
    entities::{session::AccessToken, skill::{Skill, SkillChanges}},
    errors::StoreError,
    repositories::rest_repo::RestSkillRepo,
    store::{client::StoreClient, query::{Order, Query}},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// All skills, ascending by `category`
    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError>;
    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, StoreError>;
    async fn create_skill(&self, skill: &SkillChanges, token: &AccessToken) -> Result<Skill, StoreError>;
    async fn update_skill(&self, id: &Uuid, skill: &SkillChanges, token: &AccessToken) -> Result<Skill, StoreError>;
    async fn delete_skill(&self, id: &Uuid, token: &AccessToken) -> Result<(), StoreError>;
}

impl RestSkillRepo {
    pub fn new(client: StoreClient) -> Self {
        RestSkillRepo { client }
    }
}

#[async_trait]
impl SkillRepository for RestSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError> {
        let query = Query::table_rows(SKILLS_TABLE).order("category", Order::Ascending);
        self.client.select(&query, None).await
    }

    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, StoreError> {
        let query = Query::table_rows(SKILLS_TABLE).eq("id", id);
        self.client.select_single(&query, None).await
    }

    async fn create_skill(&self, skill: &SkillChanges, token: &AccessToken) -> Result<Skill, StoreError> {
        self.client.insert(SKILLS_TABLE, skill, Some(token)).await
    }

    async fn update_skill(&self, id: &Uuid, skill: &SkillChanges, token: &AccessToken) -> Result<Skill, StoreError> {
        let query = Query::table_rows(SKILLS_TABLE).eq("id", id);
        let mut rows = self.client.update(&query, skill, Some(token)).await?;
        rows.pop().ok_or(StoreError::NotFound)
    }

    async fn delete_skill(&self, id: &Uuid, token: &AccessToken) -> Result<(), StoreError> {
        let query = Query::table_rows(SKILLS_TABLE).eq("id", id);
        self.client.delete(&query, Some(token)).await
    }
}
