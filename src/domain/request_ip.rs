//! Best-effort client IP extraction for `subscribe` calls.
//!
//! UniSender wants the end user's IP in the `request_ip` field. When the
//! integrating application sits behind a proxy, the address may only be
//! available in forwarded headers, which are trivially spoofable. This is a
//! convenience, not a security control.

use std::sync::LazyLock;

use regex::Regex;

// Dotted quad with each octet in 0..=255.
static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([0-9]|[0-9][0-9]|[01][0-9][0-9]|2[0-4][0-9]|25[0-5])(\.([0-9]|[0-9][0-9]|[01][0-9][0-9]|2[0-4][0-9]|25[0-5])){3}",
    )
    .unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Inbound request metadata the integrating application has on hand.
///
/// Field priority mirrors the classic PHP superglobals: `REMOTE_ADDR`, then
/// `X-Forwarded-For`, then `Client-IP`.
pub struct RequestContext {
    /// Peer address of the inbound connection.
    pub remote_addr: Option<String>,
    /// Raw `X-Forwarded-For` header value, if any.
    pub forwarded_for: Option<String>,
    /// Raw `Client-IP` header value, if any.
    pub client_ip: Option<String>,
}

impl RequestContext {
    fn best_source(&self) -> Option<&str> {
        [&self.remote_addr, &self.forwarded_for, &self.client_ip]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }
}

/// Extract the first IPv4 dotted quad from the highest-priority source.
///
/// Returns an empty string when no source is present or none contains a
/// well-formed IPv4 address.
pub fn detect_client_ip(context: &RequestContext) -> String {
    let Some(raw) = context.best_source() else {
        return String::new();
    };

    IPV4.find(raw)
        .map(|found| found.as_str().to_owned())
        .unwrap_or_default()
}
