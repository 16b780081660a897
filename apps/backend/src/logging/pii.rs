use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Compiled redaction patterns. Every pattern is a literal known to compile.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Compact JWS: three base64url segments joined by dots
    pub fn jwt() -> &'static Regex {
        static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\beyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*").unwrap()
        });
        &JWT_REGEX
    }

    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Opaque base64 or base64url runs of 16+ characters (secrets, hashes, signatures)
    pub fn opaque_token() -> &'static Regex {
        static OPAQUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/_-]{16,}={0,2}").unwrap()
        });
        &OPAQUE_REGEX
    }

    /// bcrypt hashes, e.g. `$2b$12$...`
    pub fn bcrypt_hash() -> &'static Regex {
        static BCRYPT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\$2[abxy]?\$\d{2}\$[./A-Za-z0-9]{53}").unwrap()
        });
        &BCRYPT_REGEX
    }
}

/// Mask credentials and personal data in free text before it is logged.
///
/// Tokens and hashes are removed outright; emails keep their first character
/// and domain (`a***@example.com`).
pub fn redact(input: &str) -> String {
    let out = PiiRegexRegistry::jwt().replace_all(input, "[REDACTED_JWT]");
    let out = PiiRegexRegistry::bcrypt_hash().replace_all(&out, "[REDACTED_HASH]");
    let out = PiiRegexRegistry::email().replace_all(&out, |caps: &regex::Captures| {
        let email = &caps[0];
        match email.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => email.to_string(),
        }
    });
    PiiRegexRegistry::opaque_token()
        .replace_all(&out, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts on format, for use in `tracing` fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_redaction() {
        assert_eq!(redact("user@example.com"), "u***@example.com");
        assert_eq!(redact("x@y.z"), "x***@y.z");
        assert_eq!(
            redact("from ann@example.com to bob@test.org"),
            "from a***@example.com to b***@test.org"
        );
    }

    #[test]
    fn test_jwt_redaction() {
        let token = "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9.eyJpZCI6NDJ9.c2lnbmF0dXJl_-";
        assert_eq!(
            redact(&format!("Bearer {token}")),
            "Bearer [REDACTED_JWT]"
        );
    }

    #[test]
    fn test_bcrypt_hash_redaction() {
        let hash = "$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";
        assert_eq!(redact(&format!("hash={hash}")), "hash=[REDACTED_HASH]");
    }

    #[test]
    fn test_opaque_token_redaction() {
        assert_eq!(
            redact("secret a1b2c3d4e5f678901234567890123456"),
            "secret [REDACTED_TOKEN]"
        );
        assert_eq!(redact("short123"), "short123");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let text = "signature mismatch";
        assert_eq!(redact(text), text);
        assert_eq!(redact(""), "");
        assert_eq!(format!("{}", Redacted("token has expired")), "token has expired");
    }

    #[test]
    fn test_wrapper_redacts_debug_too() {
        assert_eq!(format!("{:?}", Redacted("admin@test.org")), "a***@test.org");
    }
}
