//! SMTP config module.
//!
//! This module contains the representation of the SMTP email sender
//! configuration and its environment source.

use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use serde::Deserialize;
use std::env;

/// Represents the mail provider host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
/// Represents the mail provider submission port (implicit TLS).
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Represents the environment variable holding the SMTP login.
pub const LOGIN_ENV_VAR: &str = "GMAIL_USER";
/// Represents the environment variable holding the SMTP password.
pub const PASSWD_ENV_VAR: &str = "GMAIL_PASS";

/// Represents the SMTP sender config.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct SmtpConfig {
    /// Represents the SMTP server host.
    pub host: String,
    /// Represents the SMTP server port.
    pub port: u16,
    /// Enables SSL (implicit TLS), on by default.
    pub ssl: Option<bool>,
    /// Represents the SMTP server login, also used as the sender
    /// identity.
    pub login: String,
    /// Represents the SMTP password.
    pub passwd: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.into(),
            port: DEFAULT_SMTP_PORT,
            ssl: None,
            login: String::new(),
            passwd: String::new(),
        }
    }
}

impl SmtpConfig {
    /// Builds the config of the fixed provider, with credentials taken
    /// once from the environment. A missing variable resolves to an
    /// empty string and is rejected later by the provider rather than
    /// checked here.
    pub fn from_env() -> Self {
        Self {
            login: env::var(LOGIN_ENV_VAR).unwrap_or_default(),
            passwd: env::var(PASSWD_ENV_VAR).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Builds the SMTP sender credentials.
    pub fn credentials(&self) -> SmtpCredentials {
        SmtpCredentials::new(self.login.clone(), self.passwd.clone())
    }

    pub fn ssl(&self) -> bool {
        self.ssl.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn read_credentials_from_environment() {
        env::set_var(LOGIN_ENV_VAR, "bot@gmail.com");
        env::set_var(PASSWD_ENV_VAR, "app-password");

        let config = SmtpConfig::from_env();

        assert_eq!("bot@gmail.com", config.login);
        assert_eq!("app-password", config.passwd);
        assert_eq!(DEFAULT_SMTP_HOST, config.host);
        assert_eq!(DEFAULT_SMTP_PORT, config.port);
        assert!(config.ssl());

        env::remove_var(LOGIN_ENV_VAR);
        env::remove_var(PASSWD_ENV_VAR);
    }

    #[test]
    #[serial]
    fn default_to_empty_credentials() {
        env::remove_var(LOGIN_ENV_VAR);
        env::remove_var(PASSWD_ENV_VAR);

        let config = SmtpConfig::from_env();

        assert_eq!("", config.login);
        assert_eq!("", config.passwd);
    }

    #[test]
    fn deserialize_config() {
        let config: SmtpConfig = serde_json::from_str(
            r#"{"host":"localhost","port":3025,"ssl":false,"login":"alice@localhost","passwd":"password"}"#,
        )
        .unwrap();

        assert_eq!("localhost", config.host);
        assert_eq!(3025, config.port);
        assert!(!config.ssl());

        let config: SmtpConfig = serde_json::from_str(
            r#"{"host":"smtp.gmail.com","port":465,"login":"bot@gmail.com","passwd":"secret"}"#,
        )
        .unwrap();

        assert_eq!(None, config.ssl);
        assert!(config.ssl());
    }
}
