use serde::Serialize;

use crate::{
    entities::{project::Project, session::SessionUser, skill::Skill},
    repositories::{contact_message::ContactMessageRepository, project::ProjectRepository, skill::SkillRepository},
    use_cases::{contact::ContactHandler, project::ProjectHandler, skill::SkillHandler},
};

#[derive(Debug, Default, Serialize)]
pub struct DashboardData {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub unread_messages: u64,
}

/// Loads the three independent dashboard reads concurrently. A failed read is
/// logged and leaves its part empty; the others still render.
pub async fn load_dashboard<P, S, C>(
    projects: &ProjectHandler<P>,
    skills: &SkillHandler<S>,
    contact: &ContactHandler<C>,
    session: &SessionUser,
) -> DashboardData
where
    P: ProjectRepository,
    S: SkillRepository,
    C: ContactMessageRepository,
{
    let (projects, skills, unread) = tokio::join!(
        projects.list_projects(),
        skills.list_skills(),
        contact.count_unread(session),
    );

    DashboardData {
        projects: projects.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load projects for dashboard");
            Vec::new()
        }),
        skills: skills.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load skills for dashboard");
            Vec::new()
        }),
        unread_messages: unread.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to count unread messages");
            0
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{project::ProjectCategory, session::AccessToken},
        errors::StoreError,
        repositories::{
            contact_message::MockContactMessageRepository,
            project::MockProjectRepository,
            skill::MockSkillRepository,
        },
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn one_failed_read_does_not_blank_the_others() {
        let mut projects = MockProjectRepository::new();
        projects.expect_list_projects().returning(|| {
            Ok(vec![Project {
                id: Uuid::new_v4(),
                title: "Only".into(),
                description: "d".into(),
                image_url: None,
                tech_stack: vec!["Rust".into()],
                demo_url: None,
                github_url: None,
                category: ProjectCategory::Game,
                featured: false,
                order_index: 0,
                created_at: None,
            }])
        });

        let mut skills = MockSkillRepository::new();
        skills.expect_list_skills()
            .returning(|| Err(StoreError::Transport("reset".into())));

        let mut contact = MockContactMessageRepository::new();
        contact.expect_count_unread_messages().returning(|_| Ok(12));

        let session = SessionUser { id: Uuid::new_v4(), email: None, token: AccessToken::new("t") };
        let data = load_dashboard(
            &ProjectHandler::new(projects),
            &SkillHandler::new(skills),
            &ContactHandler::new(contact),
            &session,
        )
        .await;

        assert_eq!(data.projects.len(), 1);
        assert!(data.skills.is_empty());
        assert_eq!(data.unread_messages, 12);
    }
}
