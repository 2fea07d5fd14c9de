//! Email module.
//!
//! This module contains the representation of the outgoing email
//! message.

use lettre::{
    address::AddressError,
    message::{header::ContentType, Mailbox},
    Message,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("cannot parse sender address {1:?}")]
    ParseSenderAddrError(#[source] AddressError, String),
    #[error("cannot parse recipient address {1:?}")]
    ParseRecipientAddrError(#[source] AddressError, String),
    #[error("cannot build email")]
    BuildEmailError(#[source] lettre::error::Error),
}

/// Represents the single outgoing email of an invocation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Represents the sender address, which is the authenticated
    /// identity.
    pub from: String,
    /// Represents the recipient address.
    pub to: String,
    /// Represents the subject line.
    pub subject: String,
    /// Represents the plain-text body.
    pub body: String,
}

impl OutgoingMessage {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Builds the sendable message from the raw fields, taken
    /// verbatim. Addresses are only parsed here, by the transport
    /// library itself.
    pub fn into_sendable_msg(&self) -> Result<Message, EmailError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|err| EmailError::ParseSenderAddrError(err, self.from.clone()))?;
        let to: Mailbox = self
            .to
            .parse()
            .map_err(|err| EmailError::ParseRecipientAddrError(err, self.to.clone()))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())
            .map_err(EmailError::BuildEmailError)
    }
}
