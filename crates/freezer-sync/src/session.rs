//! Opaque remote-store credential.

/// Credential for the user's remote store.
///
/// Token acquisition, expiry, and refresh are the host's business; the
/// adapter only formats the `Authorization` header from whatever the
/// host hands over.
#[derive(Debug, Clone)]
pub struct DriveSession {
    token_type: String,
    access_token: String,
}

impl DriveSession {
    pub fn new(token_type: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            token_type: token_type.into(),
            access_token: access_token.into(),
        }
    }

    /// Convenience constructor for the common `Bearer` token type.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self::new("Bearer", access_token)
    }

    /// Value for the `Authorization` header: `<token_type> <access_token>`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header_format() {
        let session = DriveSession::bearer("ya29.token");
        assert_eq!(session.authorization(), "Bearer ya29.token");

        let mac = DriveSession::new("MAC", "abc");
        assert_eq!(mac.authorization(), "MAC abc");
    }
}
