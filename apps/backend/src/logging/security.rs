//! Security events, emitted under a stable `event` field so they can be
//! filtered out of the general log stream.

use tracing::warn;

use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A login attempt that did not produce a token.
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Login failed"
    );
}

/// A request turned away by the authentication gate.
pub fn auth_rejected(code: ErrorCode, reason: Option<&str>, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_REJECTED",
        %trace_id,
        %code,
        reason = %Redacted(reason.unwrap_or_default()),
        path,
        "Authentication rejected"
    );
}
