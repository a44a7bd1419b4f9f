use crate::{
    entities::{
        confirmation::DeleteOutcome,
        project::{Project, ProjectChanges, ProjectForm},
        session::SessionUser,
    },
    errors::{AppError, StoreError},
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every project in display order (ascending `order_index`, ties keep store order)
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut projects = self.project_repo.list_projects().await?;
        projects.sort_by_key(|p| p.order_index);
        Ok(projects)
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;

        self.project_repo.get_project_by_id(&valid_id).await
            .map_err(|e| match e {
                StoreError::NotFound => AppError::NotFound("Project not found".to_string()),
                _ => e.into(),
            })
    }

    pub async fn create_project(&self, form: ProjectForm, session: &SessionUser) -> Result<Project, AppError> {
        let changes = ProjectChanges::try_from(form)?;

        let project = self.project_repo.create_project(&changes, &session.token).await?;

        tracing::info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    pub async fn update_project(
        &self,
        id: &str,
        form: ProjectForm,
        session: &SessionUser,
    ) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;
        let changes = ProjectChanges::try_from(form)?;

        let project = self.project_repo.update_project(&valid_id, &changes, &session.token).await?;

        tracing::info!(project_id = %project.id, "Project updated");
        Ok(project)
    }

    /// Deletes only once the prompt has been confirmed
    pub async fn delete_project(
        &self,
        id: &str,
        confirmed: bool,
        session: &SessionUser,
    ) -> Result<DeleteOutcome, AppError> {
        let valid_id = valid_uuid(id)?;

        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.project_repo.delete_project(&valid_id, &session.token).await?;

        tracing::info!(project_id = %valid_id, "Project deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{project::ProjectCategory, session::AccessToken},
        repositories::project::MockProjectRepository,
    };
    use uuid::Uuid;

    fn session() -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            email: Some("admin@example.com".into()),
            token: AccessToken::new("user-token"),
        }
    }

    fn project(title: &str, order_index: i32) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: title.into(),
            description: "desc".into(),
            image_url: None,
            tech_stack: vec!["Rust".into()],
            demo_url: None,
            github_url: None,
            category: ProjectCategory::Web,
            featured: false,
            order_index,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn projects_come_back_in_order_index_order() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .returning(|| Ok(vec![project("c", 3), project("a", 1), project("b", 1), project("z", -2)]));

        let handler = ProjectHandler::new(repo);
        let titles: Vec<_> = handler.list_projects().await.unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["z", "a", "b", "c"]);
    }

    #[tokio::test]
    async fn create_persists_the_parsed_tech_stack() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create_project()
            .withf(|changes, token| {
                changes.tech_stack == vec!["React", "TypeScript", "Node.js"] && token.as_str() == "user-token"
            })
            .times(1)
            .returning(|_, _| Ok(project("new", 0)));

        let form = ProjectForm {
            title: "Portfolio".into(),
            description: "This site".into(),
            tech_stack: "React, TypeScript, Node.js".into(),
            ..Default::default()
        };

        let handler = ProjectHandler::new(repo);
        assert!(handler.create_project(form, &session()).await.is_ok());
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_store() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create_project().times(0);

        let handler = ProjectHandler::new(repo);
        let err = handler.create_project(ProjectForm::default(), &session()).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn unconfirmed_delete_leaves_the_store_alone() {
        let mut repo = MockProjectRepository::new();
        repo.expect_delete_project().times(0);

        let handler = ProjectHandler::new(repo);
        let outcome = handler
            .delete_project(&Uuid::new_v4().to_string(), false, &session())
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
    }

    #[tokio::test]
    async fn confirmed_delete_is_issued_once() {
        let id = Uuid::new_v4();
        let mut repo = MockProjectRepository::new();
        repo.expect_delete_project()
            .withf(move |target, _| *target == id)
            .times(1)
            .returning(|_, _| Ok(()));

        let handler = ProjectHandler::new(repo);
        let outcome = handler.delete_project(&id.to_string(), true, &session()).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
    }

    #[tokio::test]
    async fn missing_row_maps_to_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_project_by_id().returning(|_| Err(StoreError::NotFound));

        let handler = ProjectHandler::new(repo);
        let err = handler.get_project(&Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn store_write_errors_pass_through_verbatim() {
        let mut repo = MockProjectRepository::new();
        repo.expect_update_project().returning(|_, _, _| {
            Err(StoreError::Api { status: 401, message: "JWT expired".into() })
        });

        let form = ProjectForm {
            title: "t".into(),
            description: "d".into(),
            tech_stack: "Rust".into(),
            ..Default::default()
        };

        let handler = ProjectHandler::new(repo);
        let err = handler
            .update_project(&Uuid::new_v4().to_string(), form, &session())
            .await
            .unwrap_err();
        assert_eq!(err.notice(), "JWT expired");
    }
}
