//! Client library for posting events to a changelog server.
//!
//! The crate exposes a single synchronous [`Client`]. Each call to
//! [`Client::send`] assembles a JSON event from a fixed set of fields plus
//! any caller-supplied extras, POSTs it to the configured endpoint, and
//! returns the server's status and body as an [`EventResponse`]. There is no
//! retry logic, no batching, and no background thread; one call means one
//! HTTP request.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use changelog_client::Client;
//!
//! # fn main() -> Result<(), changelog_client::ClientError> {
//! let mut client = Client::new("https://changelog.example.com", "8080", "", "deploys", "WARNING");
//! client.use_basic_auth("deploy-bot", "hunter2");
//! client.add_extra_fields(HashMap::from([(
//!     "environment".to_owned(),
//!     "production".to_owned(),
//! )]));
//!
//! let response = client.send("rolled out v1.2.3")?;
//! println!("{} {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod severity;

pub use client::{
    Client, DEFAULT_CATEGORY, DEFAULT_ENDPOINT, DEFAULT_HOST, DEFAULT_SEVERITY, EventResponse,
};
pub use error::ClientError;
pub use severity::Severity;
