//! Send API v3.1 payload.
//!
//! [`build_payload`] translates a [`Message`] and its [`Envelope`] into the
//! request body of `POST /v3.1/send`. Field names follow Mailjet's wire
//! contract exactly, hence the PascalCase renames.

use crate::error::{MailjetError, MailjetResult};
use crate::headers::ReservedHeader;
use crate::models::{Address, Attachment, Envelope, Message};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Request body for the Send API. Always carries exactly one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload {
    #[serde(rename = "Messages")]
    pub messages: Vec<PayloadMessage>,
}

impl Payload {
    /// The translated message
    pub fn message(&self) -> Option<&PayloadMessage> {
        self.messages.first()
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> MailjetResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayloadMessage {
    pub from: PayloadAddress,
    pub to: Vec<PayloadAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<PayloadAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<PayloadAddress>,
    pub subject: String,
    pub attachments: Vec<PayloadAttachment>,
    pub inlined_attachments: Vec<PayloadAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<PayloadAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_part: Option<String>,
    #[serde(rename = "HTMLPart", skip_serializing_if = "Option::is_none")]
    pub html_part: Option<String>,
    /// Custom headers that are not Mailjet control headers
    pub headers: Map<String, Value>,
    /// Properties set through Mailjet headers (`TemplateID`, `Variables`, ...)
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayloadAddress {
    pub email: String,
    pub name: String,
}

impl PayloadAddress {
    fn from_address(address: &Address) -> Self {
        Self {
            email: address.email.clone(),
            name: address.name().to_string(),
        }
    }

    // Mailjet drops the display name of envelope recipients.
    fn recipient(address: &Address) -> Self {
        Self {
            email: address.email.clone(),
            name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayloadAttachment {
    pub content_type: String,
    pub filename: String,
    pub base64_content: String,
    #[serde(rename = "ContentID", skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl PayloadAttachment {
    fn attached(attachment: &Attachment) -> Self {
        Self {
            content_type: attachment.content_type.clone(),
            filename: attachment.filename.clone(),
            base64_content: BASE64.encode(&attachment.content),
            content_id: None,
        }
    }

    fn inlined(attachment: &Attachment) -> Self {
        Self {
            content_id: Some(attachment.content_id().to_string()),
            ..Self::attached(attachment)
        }
    }
}

/// Build the Send API payload for `message`, delivered to `envelope`.
///
/// Mailjet control headers (see [`ReservedHeader`]) are removed from
/// `Headers` and written to their message property instead. Fails when the
/// message has more than one Reply-To address or when a control header value
/// cannot be coerced.
pub fn build_payload(message: &Message, envelope: &Envelope) -> MailjetResult<Payload> {
    let reply_to = match message.reply_to.as_slice() {
        [] => None,
        [address] => Some(PayloadAddress::from_address(address)),
        many => {
            return Err(MailjetError::InvalidArgument(format!(
                "Mailjet's API only supports one Reply-To email, {} given.",
                many.len()
            )));
        }
    };

    // Cc and Bcc addresses are part of the envelope too; list them only once.
    let to = envelope
        .recipients
        .iter()
        .filter(|recipient| {
            !message
                .cc
                .iter()
                .chain(&message.bcc)
                .any(|copied| copied.email == recipient.email)
        })
        .map(PayloadAddress::recipient)
        .collect::<Vec<_>>();

    let mut headers = Map::new();
    let mut properties = Map::new();
    for header in &message.headers {
        match ReservedHeader::lookup(&header.name) {
            Some(reserved) => {
                let value = reserved.coercion().apply(&header.name, &header.value)?;
                debug!(
                    header = %header.name,
                    field = reserved.field(),
                    "Routing Mailjet header to message property"
                );
                properties.insert(reserved.field().to_string(), value);
            }
            None => {
                headers.insert(header.name.clone(), Value::String(header.value.clone()));
            }
        }
    }

    debug!(
        to_count = to.len(),
        cc_count = message.cc.len(),
        bcc_count = message.bcc.len(),
        attachment_count = message.attachments.len(),
        inline_count = message.inline_attachments.len(),
        has_reply_to = reply_to.is_some(),
        "Built Mailjet payload"
    );

    Ok(Payload {
        messages: vec![PayloadMessage {
            from: PayloadAddress::from_address(&envelope.sender),
            to,
            cc: message.cc.iter().map(PayloadAddress::from_address).collect(),
            bcc: message.bcc.iter().map(PayloadAddress::from_address).collect(),
            subject: message.subject.clone(),
            attachments: message
                .attachments
                .iter()
                .map(PayloadAttachment::attached)
                .collect(),
            inlined_attachments: message
                .inline_attachments
                .iter()
                .map(PayloadAttachment::inlined)
                .collect(),
            reply_to,
            text_part: message.text_body.clone(),
            html_part: message.html_body.clone(),
            headers,
            properties,
        }],
    })
}
