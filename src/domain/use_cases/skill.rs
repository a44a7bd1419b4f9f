use crate::{
    entities::{
        confirmation::DeleteOutcome,
        session::SessionUser,
        skill::{Skill, SkillChanges, SkillForm},
    },
    errors::{AppError, StoreError},
    repositories::skill::SkillRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    /// Lists skills as the store orders them (by category)
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.skill_repo.list_skills().await?)
    }

    pub async fn get_skill(&self, id: &str) -> Result<Skill, AppError> {
        let valid_id = valid_uuid(id)?;

        self.skill_repo.get_skill_by_id(&valid_id).await
            .map_err(|e| match e {
                StoreError::NotFound => AppError::NotFound("Skill not found".to_string()),
                _ => e.into(),
            })
    }

    pub async fn create_skill(&self, form: SkillForm, session: &SessionUser) -> Result<Skill, AppError> {
        let changes = SkillChanges::try_from(form)?;

        let skill = self.skill_repo.create_skill(&changes, &session.token).await?;

        tracing::info!(skill_id = %skill.id, "Skill created");
        Ok(skill)
    }

    pub async fn update_skill(
        &self,
        id: &str,
        form: SkillForm,
        session: &SessionUser,
    ) -> Result<Skill, AppError> {
        let valid_id = valid_uuid(id)?;
        let changes = SkillChanges::try_from(form)?;

        let skill = self.skill_repo.update_skill(&valid_id, &changes, &session.token).await?;

        tracing::info!(skill_id = %skill.id, "Skill updated");
        Ok(skill)
    }

    pub async fn delete_skill(
        &self,
        id: &str,
        confirmed: bool,
        session: &SessionUser,
    ) -> Result<DeleteOutcome, AppError> {
        let valid_id = valid_uuid(id)?;

        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.skill_repo.delete_skill(&valid_id, &session.token).await?;

        tracing::info!(skill_id = %valid_id, "Skill deleted");
        Ok(DeleteOutcome::Deleted)
    }
}
