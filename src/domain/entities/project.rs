use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{errors::{AppError, FieldError}, utils::form_fields::{join_tech_stack, non_blank, optional_text, split_tech_stack}};

// ───── Category ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    DataScience,
    #[default]
    Web,
    Game,
    Mechanical,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::DataScience,
        ProjectCategory::Web,
        ProjectCategory::Game,
        ProjectCategory::Mechanical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::DataScience => "data-science",
            ProjectCategory::Web => "web",
            ProjectCategory::Game => "game",
            ProjectCategory::Mechanical => "mechanical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::DataScience => "Data Science",
            ProjectCategory::Web => "Web Development",
            ProjectCategory::Game => "Game Development",
            ProjectCategory::Mechanical => "Mechanical Programming",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown project category: {}", s)))
    }
}

// ───── Store Models ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Column values written on insert and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectChanges {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub category: ProjectCategory,
    pub featured: bool,
    pub order_index: i32,
}

// ───── Form Input & Validation ──────────────────────────────────────

/// The project editor form. `tech_stack` is the comma separated view of the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProjectForm {
    #[validate(custom(function = "non_blank", message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "non_blank", message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    #[validate(custom(function = "non_blank", message = "Tech stack is required"))]
    pub tech_stack: String,

    #[serde(default)]
    pub demo_url: String,

    #[serde(default)]
    pub github_url: String,

    #[serde(default)]
    pub category: ProjectCategory,

    /// Checkbox: present (any value) when ticked.
    #[serde(default)]
    pub featured: Option<String>,

    #[serde(default)]
    pub order_index: String,
}

impl ProjectForm {
    pub fn is_featured(&self) -> bool {
        self.featured.is_some()
    }
}

impl TryFrom<ProjectForm> for ProjectChanges {
    type Error = AppError;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let tech_stack = split_tech_stack(&form.tech_stack);
        if tech_stack.is_empty() {
            return Err(AppError::ValidationError(vec![FieldError {
                field: "tech_stack".into(),
                message: "Tech stack needs at least one entry".into(),
            }]));
        }

        let order_index = match form.order_index.trim() {
            "" => 0,
            raw => raw.parse::<i32>().map_err(|_| {
                AppError::ValidationError(vec![FieldError {
                    field: "order_index".into(),
                    message: "Order index must be a whole number".into(),
                }])
            })?,
        };

        let featured = form.is_featured();
        Ok(ProjectChanges {
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            image_url: optional_text(&form.image_url),
            tech_stack,
            demo_url: optional_text(&form.demo_url),
            github_url: optional_text(&form.github_url),
            category: form.category,
            featured,
            order_index,
        })
    }
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        ProjectForm {
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone().unwrap_or_default(),
            tech_stack: join_tech_stack(&project.tech_stack),
            demo_url: project.demo_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            category: project.category,
            featured: project.featured.then(|| "on".to_string()),
            order_index: project.order_index.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProjectForm {
        ProjectForm {
            title: "Prediksi Harga Mobil".into(),
            description: "Used car price regression".into(),
            tech_stack: "React, TypeScript, Node.js".into(),
            category: ProjectCategory::DataScience,
            order_index: "3".into(),
            ..Default::default()
        }
    }

    #[test]
    fn tech_stack_text_becomes_trimmed_list() {
        let changes = ProjectChanges::try_from(form()).unwrap();
        assert_eq!(changes.tech_stack, vec!["React", "TypeScript", "Node.js"]);
        assert_eq!(changes.order_index, 3);
        assert_eq!(changes.image_url, None);
        assert!(!changes.featured);
    }

    #[test]
    fn tech_stack_of_only_commas_is_rejected() {
        let mut input = form();
        input.tech_stack = " , ,".into();
        let err = ProjectChanges::try_from(input).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut input = form();
        input.title = "   ".into();
        let err = ProjectChanges::try_from(input).unwrap_err();
        assert_eq!(err.notice(), "Title is required");
    }

    #[test]
    fn non_numeric_order_index_is_rejected() {
        let mut input = form();
        input.order_index = "first".into();
        assert!(ProjectChanges::try_from(input).is_err());
    }

    #[test]
    fn categories_use_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&ProjectCategory::DataScience).unwrap();
        assert_eq!(json, "\"data-science\"");
        assert_eq!("mechanical".parse::<ProjectCategory>().unwrap(), ProjectCategory::Mechanical);
        assert!("mobile".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn edit_form_joins_the_stored_list() {
        let project = Project {
            id: Uuid::new_v4(),
            title: "Unity Card Game".into(),
            description: "Card game".into(),
            image_url: None,
            tech_stack: vec!["Unity".into(), "C#".into()],
            demo_url: Some("https://example.com".into()),
            github_url: None,
            category: ProjectCategory::Game,
            featured: true,
            order_index: 2,
            created_at: None,
        };

        let form = ProjectForm::from(&project);
        assert_eq!(form.tech_stack, "Unity, C#");
        assert!(form.is_featured());

        let changes = ProjectChanges::try_from(form).unwrap();
        assert_eq!(changes.tech_stack, project.tech_stack);
        assert_eq!(changes.demo_url, project.demo_url);
    }
}
