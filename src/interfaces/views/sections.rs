//! View models for the landing page sections and admin tables.

use serde::Serialize;
use uuid::Uuid;

use crate::{
    entities::{contact_message::ContactMessage, project::{Project, ProjectCategory}, skill::Skill},
    views::format::{bar_width, format_date_id},
};

#[derive(Debug, Serialize)]
pub struct SkillBar {
    pub name: String,
    pub level: i32,
    pub width: String,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillBar>,
}

/// Groups skills by category, keeping categories in first-seen order.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let bar = SkillBar {
            name: skill.name.clone(),
            level: skill.percent(),
            width: bar_width(skill.level),
            icon: skill.icon.clone(),
        };

        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(bar),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![bar],
            }),
        }
    }

    groups
}

/// A skill as listed in the admin table.
#[derive(Debug, Serialize)]
pub struct SkillRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub level: i32,
    pub width: String,
}

pub fn skill_rows(skills: &[Skill]) -> Vec<SkillRow> {
    skills
        .iter()
        .map(|s| SkillRow {
            id: s.id,
            name: s.name.clone(),
            category: s.category.clone(),
            level: s.level,
            width: bar_width(s.level),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    const BUTTONS: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Category(ProjectCategory::DataScience),
        ProjectFilter::Category(ProjectCategory::Web),
        ProjectFilter::Category(ProjectCategory::Game),
    ];

    /// Unknown or missing values select every project.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse::<ProjectCategory>().ok())
            .map(ProjectFilter::Category)
            .unwrap_or_default()
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "Semua Proyek",
            ProjectFilter::Category(c) => c.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.category == *c,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterButton {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub fn filter_buttons(active: ProjectFilter) -> Vec<FilterButton> {
    ProjectFilter::BUTTONS
        .iter()
        .map(|f| FilterButton { key: f.key(), label: f.label(), active: *f == active })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ProjectCard {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub initials: String,
    pub image_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub category: &'static str,
    pub category_label: &'static str,
    pub featured: bool,
    pub order_index: i32,
    pub hidden: bool,
}

/// Cards in the order given; those outside the filter are marked hidden so
/// the page can switch filters without another request.
pub fn project_cards(projects: &[Project], filter: ProjectFilter) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|p| ProjectCard {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            initials: initials(&p.title),
            image_url: p.image_url.clone(),
            tech_stack: p.tech_stack.clone(),
            demo_url: p.demo_url.clone(),
            github_url: p.github_url.clone(),
            category: p.category.as_str(),
            category_label: p.category.label(),
            featured: p.featured,
            order_index: p.order_index,
            hidden: !filter.matches(p),
        })
        .collect()
}

/// First two letters of the title, uppercased.
pub fn initials(title: &str) -> String {
    title.trim().chars().take(2).flat_map(char::to_uppercase).collect()
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub received: String,
}

impl From<&ContactMessage> for MessageView {
    fn from(m: &ContactMessage) -> Self {
        MessageView {
            id: m.id,
            name: m.name.clone(),
            email: m.email.clone(),
            message: m.message.clone(),
            read: m.read,
            received: format_date_id(&m.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{sample_projects, sample_skills};

    fn skill(name: &str, category: &str, level: i32) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            level,
            icon: None,
            created_at: None,
        }
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let skills = vec![
            skill("Unity", "Game", 80),
            skill("Django", "Web", 90),
            skill("Godot", "Game", 60),
        ];

        let groups = group_skills(&skills);
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, ["Game", "Web"]);
        assert_eq!(groups[0].skills.len(), 2);
        assert_eq!(groups[0].skills[1].name, "Godot");
    }

    #[test]
    fn bars_are_clamped() {
        let groups = group_skills(&[skill("Over", "X", 140)]);
        assert_eq!(groups[0].skills[0].width, "100%");
        assert_eq!(groups[0].skills[0].level, 100);
    }

    #[test]
    fn sample_skills_form_five_groups() {
        assert_eq!(group_skills(&sample_skills()).len(), 5);
    }

    #[test]
    fn filter_hides_other_categories() {
        let filter = ProjectFilter::parse(Some("game"));
        let cards = project_cards(&sample_projects(), filter);
        let visible: Vec<_> = cards.iter().filter(|c| !c.hidden).map(|c| c.title.as_str()).collect();
        assert_eq!(visible, ["Unity Card Game"]);
    }

    #[test]
    fn unknown_filter_shows_everything() {
        assert_eq!(ProjectFilter::parse(Some("cooking")), ProjectFilter::All);
        assert_eq!(ProjectFilter::parse(None), ProjectFilter::All);
        assert!(project_cards(&sample_projects(), ProjectFilter::All).iter().all(|c| !c.hidden));
    }

    #[test]
    fn exactly_one_button_is_active() {
        let buttons = filter_buttons(ProjectFilter::Category(ProjectCategory::Web));
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
        assert_eq!(buttons[0].label, "Semua Proyek");
    }

    #[test]
    fn initials_take_two_letters() {
        assert_eq!(initials("portfolio"), "PO");
        assert_eq!(initials("x"), "X");
    }
}
