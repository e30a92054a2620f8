//! The changelog client: configuration, defaults, and payload assembly.
//!
//! [`Client`] holds the target configuration (host, port, endpoint,
//! category, severity), optional Basic auth credentials, and the extra
//! header/field mappings. Payloads are ordinary `HashMap<String, String>`
//! values so that caller-supplied extras can overwrite the fixed keys with
//! last-write-wins semantics. The HTTP send path lives in
//! [`transport`](self::transport).
//!
//! Mutators take `&mut self` while [`Client::send`](crate::Client::send)
//! takes `&self`, so the borrow checker enforces the intended concurrency
//! contract: any number of concurrent sends, but no reconfiguration while a
//! send is in flight.

mod transport;


use std::collections::HashMap;

use chrono::Utc;
use ureq::{Agent, AgentBuilder};

use crate::severity::Severity;

/// Host used when construction receives an empty host.
pub const DEFAULT_HOST: &str = "http://localhost";
/// Endpoint path used when construction receives an empty endpoint.
pub const DEFAULT_ENDPOINT: &str = "/api/events";
/// Category used when construction receives an empty category.
pub const DEFAULT_CATEGORY: &str = "misc";
/// Severity name used when construction receives an empty severity.
pub const DEFAULT_SEVERITY: &str = "INFO";

/// `User-Agent` sent with every outgoing request.
pub(crate) const USER_AGENT: &str = concat!("changelog-client/", env!("CARGO_PKG_VERSION"));

/// Outcome of a completed [`Client::send`].
///
/// Any HTTP status counts as completed; interpreting non-2xx statuses is
/// left to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventResponse {
    /// HTTP status code returned by the changelog server.
    pub status: u16,
    /// Response body, read in full.
    pub body: String,
}

/// Synchronous client posting events to a changelog server.
///
/// One instance is constructed once via [`Client::new`], optionally
/// reconfigured through the mutators, and reused for any number of
/// [`send`](Client::send) calls.
pub struct Client {
    host: String,
    port: String,
    endpoint: String,
    category: String,
    severity: String,
    auth_user: String,
    auth_password: String,
    extra_headers: HashMap<String, String>,
    extra_fields: HashMap<String, String>,
    agent: Agent,
}

fn default_if_empty(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}

impl Client {
    /// Construct a client for the given target.
    ///
    /// Empty arguments fall back to [`DEFAULT_HOST`], [`DEFAULT_ENDPOINT`],
    /// [`DEFAULT_CATEGORY`], and [`DEFAULT_SEVERITY`]. `port` has no
    /// default; an empty port omits the port segment from the target URL.
    /// Defaulting happens exactly once, here. Construction never fails.
    pub fn new(host: &str, port: &str, endpoint: &str, category: &str, severity: &str) -> Self {
        Self {
            host: default_if_empty(host, DEFAULT_HOST),
            port: port.to_owned(),
            endpoint: default_if_empty(endpoint, DEFAULT_ENDPOINT),
            category: default_if_empty(category, DEFAULT_CATEGORY),
            severity: default_if_empty(severity, DEFAULT_SEVERITY),
            auth_user: String::new(),
            auth_password: String::new(),
            extra_headers: HashMap::new(),
            extra_fields: HashMap::new(),
            agent: AgentBuilder::new().user_agent(USER_AGENT).build(),
        }
    }

    /// Merge `headers` into the headers attached to every outgoing request.
    ///
    /// Colliding keys are overwritten by the new values; keys absent from
    /// the argument are untouched. There is no removal operation.
    pub fn add_extra_headers(&mut self, headers: HashMap<String, String>) {
        self.extra_headers.extend(headers);
    }

    /// Merge `fields` into the extra payload fields with the same
    /// overwrite-on-collision semantics as [`add_extra_headers`].
    ///
    /// Extras are overlaid onto every payload and win over the fixed keys
    /// (`criticality`, `unix_timestamp`, `category`, `description`) if a
    /// caller chooses colliding names.
    ///
    /// [`add_extra_headers`]: Client::add_extra_headers
    pub fn add_extra_fields(&mut self, fields: HashMap<String, String>) {
        self.extra_fields.extend(fields);
    }

    /// Set HTTP Basic auth credentials for subsequent sends.
    ///
    /// Overwrites unconditionally. Credentials are only attached when both
    /// user and password are non-empty, so passing an empty string for
    /// either disables auth.
    pub fn use_basic_auth(&mut self, username: &str, password: &str) {
        self.auth_user = username.to_owned();
        self.auth_password = password.to_owned();
    }

    /// Target URL for the next request: `{host}[:{port}]{endpoint}`.
    ///
    /// No well-formedness checks; a malformed result surfaces as
    /// [`ClientError::Request`](crate::ClientError::Request) from `send`.
    pub(crate) fn build_url(&self) -> String {
        if self.port.is_empty() {
            format!("{}{}", self.host, self.endpoint)
        } else {
            format!("{}:{}{}", self.host, self.port, self.endpoint)
        }
    }

    /// Assemble the payload mapping for one event.
    ///
    /// The fixed keys are written first, then every extra field is overlaid
    /// so extras take precedence on collision. Reads the wall clock; all
    /// other inputs come from the configuration and `message`.
    pub(crate) fn build_message(&self, message: &str) -> HashMap<String, String> {
        let mut fields = HashMap::from([
            (
                "criticality".to_owned(),
                Severity::code_for(&self.severity).to_string(),
            ),
            (
                "unix_timestamp".to_owned(),
                Utc::now().timestamp().to_string(),
            ),
            ("category".to_owned(), self.category.clone()),
            ("description".to_owned(), message.to_owned()),
        ]);
        for (key, value) in &self.extra_fields {
            fields.insert(key.clone(), value.clone());
        }
        fields
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("endpoint", &self.endpoint)
            .field("category", &self.category)
            .field("severity", &self.severity)
            .field("extra_headers", &self.extra_headers)
            .field("extra_fields", &self.extra_fields)
            .finish()
    }
}
