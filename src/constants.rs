use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const SESSION_COOKIE: &str = "sb-access-token";
pub const FLASH_COOKIE: &str = "flash";

pub const ADMIN_HOME_PATH: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";
pub const LOGOUT_PATH: &str = "/admin/logout";

// Content store tables
pub const PROJECTS_TABLE: &str = "projects";
pub const SKILLS_TABLE: &str = "skills";
pub const CONTACT_MESSAGES_TABLE: &str = "contact_messages";
pub const ADMIN_USERS_TABLE: &str = "admin_users";
