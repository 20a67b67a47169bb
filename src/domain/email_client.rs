use super::Email;

#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub recipient: Email,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EmailClientError {
    #[error("failed to send email: {0}")]
    Send(String),
}

// This trait represents the interface all concrete email clients should implement
#[async_trait::async_trait]
pub trait EmailClient: Send + Sync {
    async fn send(&mut self, message: EmailMessage) -> Result<(), EmailClientError>;
}
