use crate::{
    entities::{
        confirmation::DeleteOutcome,
        contact_message::{ContactForm, MessageList, NewContactMessage},
        session::SessionUser,
    },
    errors::AppError,
    repositories::contact_message::ContactMessageRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Handles a message from the public contact form
    pub async fn submit_message(&self, form: ContactForm) -> Result<(), AppError> {
        let new_msg = NewContactMessage::try_from(form)?;

        self.contact_repo.create_contact_message(&new_msg).await?;

        tracing::info!("Contact message received");
        Ok(())
    }

    /// All messages, newest first, with counts derived from the fetched list
    pub async fn list_messages(&self, session: &SessionUser) -> Result<MessageList, AppError> {
        let messages = self.contact_repo.list_contact_messages(&session.token).await?;
        Ok(MessageList::from(messages))
    }

    pub async fn count_unread(&self, session: &SessionUser) -> Result<u64, AppError> {
        Ok(self.contact_repo.count_unread_messages(&session.token).await?)
    }

    /// Flips the read flag the admin saw and returns the new value
    pub async fn toggle_read(
        &self,
        id: &str,
        current: bool,
        session: &SessionUser,
    ) -> Result<bool, AppError> {
        let valid_id = valid_uuid(id)?;
        let read = !current;

        self.contact_repo.set_read_status(&valid_id, read, &session.token).await?;

        Ok(read)
    }

    pub async fn delete_message(
        &self,
        id: &str,
        confirmed: bool,
        session: &SessionUser,
    ) -> Result<DeleteOutcome, AppError> {
        let valid_id = valid_uuid(id)?;

        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.contact_repo.delete_contact_message(&valid_id, &session.token).await?;

        tracing::info!(message_id = %valid_id, "Contact message deleted");
        Ok(DeleteOutcome::Deleted)
    }
}
