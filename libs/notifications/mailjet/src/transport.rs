//! Mailjet API transport identity.
//!
//! The transport owns the endpoint configuration and hands messages to the
//! payload builder. Sending the request body is left to the HTTP layer of the
//! surrounding mailer.

use crate::error::MailjetResult;
use crate::models::{Envelope, Message};
use crate::payload::{Payload, build_payload};
use core_config::{ConfigError, FromEnv, env_or_default};
use std::fmt;
use tracing::instrument;

/// Production API host
pub const DEFAULT_HOST: &str = "api.mailjet.com";

/// Mailjet transport configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailjetConfig {
    /// API host, without scheme.
    pub host: String,
}

impl MailjetConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl Default for MailjetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl FromEnv for MailjetConfig {
    /// Reads `MAILJET_HOST`, defaulting to the production host.
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("MAILJET_HOST", DEFAULT_HOST);
        let host = host.trim();
        if host.is_empty() {
            return Err(ConfigError::ParseError {
                key: "MAILJET_HOST".to_string(),
                details: "host must not be empty".to_string(),
            });
        }

        Ok(Self::new(host))
    }
}

/// Transport for Mailjet's Send API v3.1.
#[derive(Debug, Clone, Default)]
pub struct MailjetApiTransport {
    config: MailjetConfig,
}

impl MailjetApiTransport {
    pub fn new(config: MailjetConfig) -> Self {
        Self { config }
    }

    /// Point the transport at another API host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// URL the payload is posted to
    pub fn endpoint_url(&self) -> String {
        format!("https://{}/v3.1/send", self.config.host)
    }

    /// Build the request body for `message`.
    #[instrument(skip_all, fields(transport = %self, subject = %message.subject))]
    pub fn payload(&self, message: &Message, envelope: &Envelope) -> MailjetResult<Payload> {
        build_payload(message, envelope)
    }
}

impl fmt::Display for MailjetApiTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mailjet+api://{}", self.config.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    #[test]
    fn test_transport_to_string() {
        let transport = MailjetApiTransport::default();
        assert_eq!(transport.to_string(), "mailjet+api://api.mailjet.com");

        let transport = MailjetApiTransport::default().with_host("example.com");
        assert_eq!(transport.to_string(), "mailjet+api://example.com");
    }

    #[test]
    fn test_endpoint_url() {
        let transport = MailjetApiTransport::new(MailjetConfig::new("example.com"));
        assert_eq!(transport.host(), "example.com");
        assert_eq!(transport.endpoint_url(), "https://example.com/v3.1/send");
    }

    #[test]
    fn test_config_from_env_default() {
        temp_env::with_var_unset("MAILJET_HOST", || {
            let config = MailjetConfig::from_env().unwrap();
            assert_eq!(config, MailjetConfig::default());
            assert_eq!(config.host, "api.mailjet.com");
        });
    }

    #[test]
    fn test_config_from_env_custom_host() {
        temp_env::with_var("MAILJET_HOST", Some(" eu.mailjet.example "), || {
            let config = MailjetConfig::from_env().unwrap();
            assert_eq!(config.host, "eu.mailjet.example");
        });
    }

    #[test]
    fn test_config_from_env_rejects_blank_host() {
        temp_env::with_var("MAILJET_HOST", Some("  "), || {
            let err = MailjetConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MAILJET_HOST"));
        });
    }

    #[test]
    fn test_payload_delegates_to_builder() {
        let transport = MailjetApiTransport::default();
        let message = Message::new("Hello").with_header("X-Mailjet-Prio", "3");
        let envelope = Envelope::new("foo@example.com", vec![Address::new("bar@example.com")]);

        let payload = transport.payload(&message, &envelope).unwrap();
        let sent = payload.message().unwrap();
        assert_eq!(sent.subject, "Hello");
        assert_eq!(sent.properties["Priority"], 3);
    }
}
