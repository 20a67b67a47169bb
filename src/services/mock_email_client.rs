use crate::domain::{EmailClient, EmailClientError, EmailMessage};

/// Email client that records messages instead of delivering them. Transport
/// is out of scope for this service; tests read the outbox to drive the
/// activation and 2FA flows.
#[derive(Default)]
pub struct MockEmailClient {
    outbox: Vec<EmailMessage>,
    pub fail_sending: bool,
}

impl MockEmailClient {
    pub fn outbox(&self) -> &[EmailMessage] {
        &self.outbox
    }

    pub fn last_message(&self) -> Option<&EmailMessage> {
        self.outbox.last()
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send(&mut self, message: EmailMessage) -> Result<(), EmailClientError> {
        if self.fail_sending {
            return Err(EmailClientError::Send("mock transport unavailable".to_string()));
        }
        log::info!(
            "email to {}: {}",
            message.recipient.as_ref(),
            message.subject
        );
        self.outbox.push(message);
        Ok(())
    }
}
