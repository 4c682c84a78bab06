//! Mailjet transport for the notifications stack
//!
//! Translates an outgoing message into the JSON body of Mailjet's Send API
//! v3.1 (`POST /v3.1/send`).
//!
//! ## Components
//!
//! - **Models**: `Message`, `Envelope`, `Address`, `Attachment`
//! - **Payload**: `build_payload` and the serializable `Payload` tree
//! - **Headers**: `ReservedHeader`, the Mailjet control headers (`X-MJ-*`,
//!   `X-Mailjet-*`) routed to dedicated message properties
//! - **Transport**: `MailjetApiTransport`, host configuration and identifier
//!
//! ## Usage
//!
//! ```ignore
//! use mailjet::{Address, Envelope, MailjetApiTransport, Message};
//!
//! let message = Message::new("Your invoice")
//!     .with_header("X-MJ-TemplateID", "12345")
//!     .with_header("X-MJ-Vars", r#"{"amount": "42.00"}"#);
//! let envelope = Envelope::new(
//!     Address::new("billing@example.com").with_name("Billing"),
//!     vec![Address::new("customer@example.com")],
//! );
//!
//! let body = MailjetApiTransport::default()
//!     .payload(&message, &envelope)?
//!     .to_json()?;
//! ```

pub mod error;
pub mod headers;
pub mod models;
pub mod payload;
pub mod transport;

pub use error::{MailjetError, MailjetResult};
pub use headers::{Coercion, ReservedHeader};
pub use models::{Address, Attachment, Envelope, Header, Message};
pub use payload::{Payload, PayloadAddress, PayloadAttachment, PayloadMessage, build_payload};
pub use transport::{DEFAULT_HOST, MailjetApiTransport, MailjetConfig};
