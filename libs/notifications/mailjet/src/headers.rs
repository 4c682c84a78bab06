//! Mailjet-specific headers.
//!
//! These headers are control metadata for Mailjet rather than real message
//! headers. The payload builder strips them from `Headers` and places their
//! value under a dedicated message property, coerced to the type the Send API
//! expects.

use crate::error::{MailjetError, MailjetResult};
use serde_json::Value;

/// How a raw header value is turned into a payload value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Bool,
    Int,
    /// JSON object string embedded as a native object
    Json,
    String,
}

impl Coercion {
    /// Convert a raw header value. `name` is only used for error reporting.
    pub fn apply(self, name: &str, raw: &str) -> MailjetResult<Value> {
        match self {
            Coercion::Bool => Ok(Value::Bool(parse_bool(raw))),
            Coercion::Int => raw
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| MailjetError::invalid_header(name, format!("expected an integer: {}", e))),
            Coercion::Json => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => Ok(Value::Object(map)),
                Ok(_) => Err(MailjetError::invalid_header(name, "expected a JSON object")),
                Err(e) => Err(MailjetError::invalid_header(name, format!("invalid JSON: {}", e))),
            },
            Coercion::String => Ok(Value::String(raw.to_string())),
        }
    }
}

fn parse_bool(raw: &str) -> bool {
    let raw = raw.trim();
    !(raw.is_empty()
        || ["0", "false", "no", "off"]
            .iter()
            .any(|falsy| raw.eq_ignore_ascii_case(falsy)))
}

/// Headers that map onto dedicated Send API message properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedHeader {
    TemplateLanguage,
    TemplateId,
    TemplateErrorReporting,
    TemplateErrorDeliver,
    Variables,
    CustomId,
    EventPayload,
    CustomCampaign,
    DeduplicateCampaign,
    Priority,
    TrackClick,
    TrackOpen,
}

impl ReservedHeader {
    pub const ALL: [ReservedHeader; 12] = [
        ReservedHeader::TemplateLanguage,
        ReservedHeader::TemplateId,
        ReservedHeader::TemplateErrorReporting,
        ReservedHeader::TemplateErrorDeliver,
        ReservedHeader::Variables,
        ReservedHeader::CustomId,
        ReservedHeader::EventPayload,
        ReservedHeader::CustomCampaign,
        ReservedHeader::DeduplicateCampaign,
        ReservedHeader::Priority,
        ReservedHeader::TrackClick,
        ReservedHeader::TrackOpen,
    ];

    /// Find the reserved header matching `name`, ignoring ASCII case.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|reserved| reserved.header_name().eq_ignore_ascii_case(name))
    }

    /// Canonical header name
    pub fn header_name(self) -> &'static str {
        match self {
            ReservedHeader::TemplateLanguage => "X-MJ-TemplateLanguage",
            ReservedHeader::TemplateId => "X-MJ-TemplateID",
            ReservedHeader::TemplateErrorReporting => "X-MJ-TemplateErrorReporting",
            ReservedHeader::TemplateErrorDeliver => "X-MJ-TemplateErrorDeliver",
            ReservedHeader::Variables => "X-MJ-Vars",
            ReservedHeader::CustomId => "X-MJ-CustomID",
            ReservedHeader::EventPayload => "X-MJ-EventPayload",
            ReservedHeader::CustomCampaign => "X-Mailjet-Campaign",
            ReservedHeader::DeduplicateCampaign => "X-Mailjet-DeduplicateCampaign",
            ReservedHeader::Priority => "X-Mailjet-Prio",
            ReservedHeader::TrackClick => "X-Mailjet-TrackClick",
            ReservedHeader::TrackOpen => "X-Mailjet-TrackOpen",
        }
    }

    /// Message property the value is written to
    pub fn field(self) -> &'static str {
        match self {
            ReservedHeader::TemplateLanguage => "TemplateLanguage",
            ReservedHeader::TemplateId => "TemplateID",
            ReservedHeader::TemplateErrorReporting => "TemplateErrorReporting",
            ReservedHeader::TemplateErrorDeliver => "TemplateErrorDeliver",
            ReservedHeader::Variables => "Variables",
            ReservedHeader::CustomId => "CustomID",
            ReservedHeader::EventPayload => "EventPayload",
            ReservedHeader::CustomCampaign => "CustomCampaign",
            ReservedHeader::DeduplicateCampaign => "DeduplicateCampaign",
            ReservedHeader::Priority => "Priority",
            ReservedHeader::TrackClick => "TrackClick",
            ReservedHeader::TrackOpen => "TrackOpen",
        }
    }

    pub fn coercion(self) -> Coercion {
        match self {
            ReservedHeader::TemplateLanguage
            | ReservedHeader::TemplateErrorDeliver
            | ReservedHeader::DeduplicateCampaign => Coercion::Bool,
            ReservedHeader::Priority => Coercion::Int,
            ReservedHeader::Variables => Coercion::Json,
            ReservedHeader::TemplateId
            | ReservedHeader::TemplateErrorReporting
            | ReservedHeader::CustomId
            | ReservedHeader::EventPayload
            | ReservedHeader::CustomCampaign
            | ReservedHeader::TrackClick
            | ReservedHeader::TrackOpen => Coercion::String,
        }
    }
}
