pub mod assets;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod messages;
pub mod projects;
pub mod skills;
pub mod system;
