use serde::{Deserialize, Serialize};

/// Bearer token issued at login.
///
/// The inner value never shows up in `Debug` or `Display` output, so the
/// token can sit inside state snapshots that get logged.
/// Use `expose()` when the raw value is needed for a request header.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the raw token.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(••••••••)")
    }
}

impl std::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_hide_the_value() {
        let token = AuthToken::new("super-secret");
        assert!(!format!("{:?}", token).contains("super-secret"));
        assert!(!token.to_string().contains("super-secret"));
        assert_eq!(token.expose(), "super-secret");
    }

    #[test]
    fn serializes_as_plain_string() {
        let token = AuthToken::new("tok");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"tok\"");
        let back: AuthToken = serde_json::from_str("\"tok\"").unwrap();
        assert_eq!(back, token);
    }
}
