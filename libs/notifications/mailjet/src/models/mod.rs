//! Message and envelope models consumed by the payload builder.

use serde::{Deserialize, Serialize};

/// A mailbox: an email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Email address
    pub email: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Address {
    /// Create an address without a display name
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, or an empty string when none was given
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl From<&str> for Address {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

/// The addresses actually used for transmission.
///
/// These may differ from the From/To headers displayed in the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub sender: Address,
    pub recipients: Vec<Address>,
}

impl Envelope {
    pub fn new(sender: impl Into<Address>, recipients: Vec<Address>) -> Self {
        Self {
            sender: sender.into(),
            recipients,
        }
    }
}

/// A custom message header, name kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A file attached to the message, either regular or inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name presented to the recipient
    pub filename: String,
    /// MIME type, e.g. `application/pdf`
    pub content_type: String,
    /// Raw bytes; base64 encoded in JSON documents
    #[serde(with = "base64_content")]
    pub content: Vec<u8>,
    /// Content-ID used by inline attachments (`cid:` references)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl Attachment {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            content: content.into(),
            content_id: None,
        }
    }

    /// Set an explicit Content-ID
    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    /// Content-ID for inline use, falling back to the file name
    pub fn content_id(&self) -> &str {
        self.content_id.as_deref().unwrap_or(&self.filename)
    }
}

/// An email message to be handed to the Mailjet transport
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Email subject
    #[serde(default)]
    pub subject: String,
    /// Plain text body
    #[serde(default)]
    pub text_body: Option<String>,
    /// HTML body
    #[serde(default)]
    pub html_body: Option<String>,
    /// Custom headers, in insertion order
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Reply-To addresses
    #[serde(default)]
    pub reply_to: Vec<Address>,
    /// CC recipients
    #[serde(default)]
    pub cc: Vec<Address>,
    /// BCC recipients
    #[serde(default)]
    pub bcc: Vec<Address>,
    /// Regular attachments
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Inline attachments referenced from the HTML body by Content-ID
    #[serde(default)]
    pub inline_attachments: Vec<Attachment>,
}

impl Message {
    /// Create a new message with the given subject
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Default::default()
        }
    }

    /// Append a custom header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Add a Reply-To address
    pub fn with_reply_to(mut self, address: impl Into<Address>) -> Self {
        self.reply_to.push(address.into());
        self
    }

    /// Add a CC recipient
    pub fn with_cc(mut self, address: impl Into<Address>) -> Self {
        self.cc.push(address.into());
        self
    }

    /// Add a BCC recipient
    pub fn with_bcc(mut self, address: impl Into<Address>) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Set plain text body
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_body = Some(text.into());
        self
    }

    /// Set HTML body
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }

    /// Attach a file
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Embed a file referenced from the HTML body
    pub fn with_inline_attachment(mut self, attachment: Attachment) -> Self {
        self.inline_attachments.push(attachment);
        self
    }
}

mod base64_content {
    use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64.decode(encoded.as_bytes()).map_err(D::Error::custom)
    }
}
