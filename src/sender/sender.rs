//! Sender module.
//!
//! This module contains the sender interface.

use std::result;
use thiserror::Error;

use crate::{EmailError, OutgoingMessage, SmtpConfig, SmtpError};

/// Represents the single failure category of a dispatch: building the
/// message and talking to the provider are reported the same way.
#[derive(Debug, Error)]
pub enum SenderError {
    #[error(transparent)]
    EmailError(#[from] EmailError),
    #[error(transparent)]
    SmtpError(#[from] SmtpError),
}

pub type Result<T> = result::Result<T, SenderError>;

pub trait Sender {
    fn send(&mut self, email: &OutgoingMessage) -> Result<()>;
}

/// Dispatches the one email of an invocation. The message is built
/// from the three raw inputs and sent from the authenticated login
/// identity.
pub fn dispatch(
    sender: &mut dyn Sender,
    config: &SmtpConfig,
    to: impl Into<String>,
    subject: impl Into<String>,
    body: impl Into<String>,
) -> Result<()> {
    let email = OutgoingMessage::new(config.login.as_str(), to, subject, body);
    sender.send(&email)
}
