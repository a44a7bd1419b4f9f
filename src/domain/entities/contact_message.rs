use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{errors::AppError, utils::form_fields::non_blank};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(custom(function = "non_blank", message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(custom(function = "non_blank", message = "Message is required"))]
    pub message: String,
}

/// Row written by the public contact form; `read` is left to the store default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<ContactForm> for NewContactMessage {
    type Error = AppError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewContactMessage {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReadStatusUpdate {
    pub read: bool,
}

/// Form posted by the read/unread toggle, carrying the status the admin saw.
#[derive(Debug, Deserialize)]
pub struct ToggleReadForm {
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageList {
    pub messages: Vec<ContactMessage>,
    pub total: usize,
    pub unread: usize,
}

impl From<Vec<ContactMessage>> for MessageList {
    fn from(messages: Vec<ContactMessage>) -> Self {
        let unread = messages.iter().filter(|m| !m.read).count();
        MessageList {
            total: messages.len(),
            unread,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_email_is_rejected() {
        let form = ContactForm {
            name: "Jery".into(),
            email: "not-an-email".into(),
            message: "Halo".into(),
        };
        assert!(NewContactMessage::try_from(form).is_err());
    }

    #[test]
    fn unread_count_is_derived_from_the_list() {
        let message = |read| ContactMessage {
            id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@example.com".into(),
            message: "hi".into(),
            read,
            created_at: Utc::now(),
        };

        let list = MessageList::from(vec![message(false), message(true), message(false)]);
        assert_eq!(list.total, 3);
        assert_eq!(list.unread, 2);
    }
}
