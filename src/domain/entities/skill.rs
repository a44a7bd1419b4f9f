use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{errors::AppError, utils::form_fields::{non_blank, optional_text}};

pub const MAX_LEVEL: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    /// Free text; skills are grouped by it for display.
    pub category: String,
    pub level: i32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Skill {
    /// Level as a bar width, clamped to 0..=100.
    pub fn percent(&self) -> i32 {
        self.level.clamp(0, MAX_LEVEL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillChanges {
    pub name: String,
    pub category: String,
    pub level: i32,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SkillForm {
    #[validate(custom(function = "non_blank", message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "non_blank", message = "Category is required"))]
    pub category: String,

    #[validate(range(min = 0, max = 100, message = "Level must be between 0 and 100"))]
    pub level: i32,

    #[serde(default)]
    pub icon: String,
}

impl Default for SkillForm {
    fn default() -> Self {
        SkillForm {
            name: String::new(),
            category: String::new(),
            level: 50,
            icon: String::new(),
        }
    }
}

impl TryFrom<SkillForm> for SkillChanges {
    type Error = AppError;

    fn try_from(form: SkillForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(SkillChanges {
            name: form.name.trim().to_string(),
            category: form.category.trim().to_string(),
            level: form.level,
            icon: optional_text(&form.icon),
        })
    }
}

impl From<&Skill> for SkillForm {
    fn from(skill: &Skill) -> Self {
        SkillForm {
            name: skill.name.clone(),
            category: skill.category.clone(),
            level: skill.level,
            icon: skill.icon.clone().unwrap_or_default(),
        }
    }
}
