//! SMTP module.
//!
//! This module contains the representation of the SMTP email sender.

use lettre::{self, transport::smtp::SmtpTransport, Transport};
use log::{debug, info};
use thiserror::Error;

use crate::{sender, OutgoingMessage, Sender, SmtpConfig};

#[derive(Debug, Error)]
pub enum SmtpError {
    #[error("cannot build smtp transport relay")]
    BuildTransportRelayError(#[source] lettre::transport::smtp::Error),
    #[error("cannot send email")]
    SendError(#[source] lettre::transport::smtp::Error),
}

pub struct Smtp<'a> {
    config: &'a SmtpConfig,
    transport: Option<SmtpTransport>,
}

impl<'a> Smtp<'a> {
    pub fn new(config: &'a SmtpConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    fn transport(&mut self) -> Result<&SmtpTransport, SmtpError> {
        if let Some(ref transport) = self.transport {
            Ok(transport)
        } else {
            debug!(
                "building smtp transport for {}:{}",
                self.config.host, self.config.port
            );

            let builder = if self.config.ssl() {
                SmtpTransport::relay(&self.config.host)
                    .map_err(SmtpError::BuildTransportRelayError)?
            } else {
                SmtpTransport::builder_dangerous(&self.config.host)
            };

            self.transport = Some(
                builder
                    .port(self.config.port)
                    .credentials(self.config.credentials())
                    .build(),
            );

            Ok(self.transport.as_ref().unwrap())
        }
    }
}

impl<'a> Sender for Smtp<'a> {
    fn send(&mut self, email: &OutgoingMessage) -> sender::Result<()> {
        let msg = email.into_sendable_msg()?;

        self.transport()?.send(&msg).map_err(SmtpError::SendError)?;
        info!("email sent to {}", email.to);

        Ok(())
    }
}
