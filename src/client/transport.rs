//! The HTTP send path.
//!
//! One POST per call over the client's `ureq::Agent`. No timeouts are
//! configured beyond ureq's defaults, nothing is retried, and the response
//! status is reported rather than interpreted. ureq signals non-2xx
//! responses as errors; this layer folds those back into successful
//! [`EventResponse`] values and leaves status interpretation to the caller.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use log::debug;
use ureq::ErrorKind;

use super::{Client, EventResponse};
use crate::error::ClientError;

impl Client {
    /// Post one event with the given description to the changelog server.
    ///
    /// Builds the payload mapping, serialises it to JSON, and issues a POST
    /// to the configured target with `Content-Type: application/json`, the
    /// client `User-Agent`, every extra header, and Basic auth when both
    /// credentials are set.
    ///
    /// # Errors
    ///
    /// * [`ClientError::Encoding`] - the payload could not be serialised.
    /// * [`ClientError::Request`] - the target URL is malformed.
    /// * [`ClientError::Transport`] - the request could not be completed
    ///   (DNS failure, connection refused, timeout).
    /// * [`ClientError::Body`] - a response arrived but reading its body
    ///   failed.
    pub fn send(&self, message: &str) -> Result<EventResponse, ClientError> {
        let fields = self.build_message(message);
        let payload = serde_json::to_string(&fields)?;
        let url = self.build_url();
        debug!("posting event to {url}");

        let mut request = self.agent.post(&url).set("Content-Type", "application/json");
        for (key, value) in &self.extra_headers {
            request = request.set(key, value);
        }
        if let Some(auth) = self.basic_auth_value() {
            request = request.set("Authorization", &auth);
        }

        let response = match request.send_string(&payload) {
            Ok(response) => response,
            // Any received status counts as a completed send.
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err))
                if matches!(err.kind(), ErrorKind::InvalidUrl | ErrorKind::UnknownScheme) =>
            {
                return Err(ClientError::Request { url, source: err });
            }
            Err(ureq::Error::Transport(err)) => return Err(ClientError::Transport(err)),
        };

        let status = response.status();
        let body = response.into_string()?;
        debug!("changelog server answered {status}");
        Ok(EventResponse { status, body })
    }

    /// `Authorization` header value, present only when both credentials are
    /// non-empty (RFC 7617).
    fn basic_auth_value(&self) -> Option<String> {
        if self.auth_user.is_empty() || self.auth_password.is_empty() {
            return None;
        }
        let credentials = format!("{}:{}", self.auth_user, self.auth_password);
        Some(format!(
            "Basic {}",
            BASE64_STANDARD.encode(credentials.as_bytes())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_auth_value_encodes_credentials() {
        let mut client = Client::new("", "", "", "", "");
        client.use_basic_auth("user", "pass");
        // "user:pass" base64 encoded is "dXNlcjpwYXNz"
        assert_eq!(
            client.basic_auth_value().as_deref(),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn basic_auth_value_requires_both_credentials() {
        let mut client = Client::new("", "", "", "", "");
        assert_eq!(client.basic_auth_value(), None);

        client.use_basic_auth("user", "");
        assert_eq!(client.basic_auth_value(), None);

        client.use_basic_auth("", "pass");
        assert_eq!(client.basic_auth_value(), None);
    }

    #[test]
    fn basic_auth_value_can_be_disabled_again() {
        let mut client = Client::new("", "", "", "", "");
        client.use_basic_auth("user", "pass");
        assert!(client.basic_auth_value().is_some());

        client.use_basic_auth("", "");
        assert_eq!(client.basic_auth_value(), None);
    }
}
