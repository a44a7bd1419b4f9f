pub mod admin_user;
pub mod contact_message;
pub mod project;
pub mod rest_repo;
pub mod session;
pub mod skill;
