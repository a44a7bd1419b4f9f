pub mod confirmation;
pub mod contact_message;
pub mod project;
pub mod session;
pub mod skill;
