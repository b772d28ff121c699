//! Error surfacing
//!
//! Every gateway failure ends up here. Permission problems open a modal
//! pointing the user at an access request; everything else is a transient
//! notification.

/// Substrings marking a permission failure (matched case-insensitively)
pub const PERMISSION_KEYWORDS: [&str; 3] = ["permission", "forbidden", "权限"];

pub const PERMISSION_TITLE: &str = "Insufficient permissions";
pub const PERMISSION_CONTENT: &str =
    "You do not have access to this feature. Please request access from an administrator.";
pub const PERMISSION_ACTION: &str = "Request access";

/// How a failure is shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReport {
    /// Modal directing the user to request access
    PermissionDenied { message: String },
    /// Short-lived notification
    Notify(String),
}

impl ErrorReport {
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        if is_permission_message(&message) {
            ErrorReport::PermissionDenied { message }
        } else {
            ErrorReport::Notify(message)
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ErrorReport::PermissionDenied { message } => message,
            ErrorReport::Notify(message) => message,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ErrorReport::PermissionDenied { .. })
    }
}

pub fn is_permission_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    PERMISSION_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Sink for error reports
pub trait Reporter {
    fn report(&self, report: ErrorReport);
}

impl<F> Reporter for F
where
    F: Fn(ErrorReport),
{
    fn report(&self, report: ErrorReport) {
        self(report)
    }
}

/// Reporter that only logs; used by headless callers
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, report: ErrorReport) {
        match &report {
            ErrorReport::PermissionDenied { message } => {
                tracing::warn!(%message, "{}", PERMISSION_TITLE)
            }
            ErrorReport::Notify(message) => tracing::warn!(%message, "Request failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_classify_permission_keywords() {
        assert!(ErrorReport::classify("Permission denied").is_permission_denied());
        assert!(ErrorReport::classify("403 FORBIDDEN").is_permission_denied());
        assert!(ErrorReport::classify("没有权限").is_permission_denied());
        assert_eq!(
            ErrorReport::classify("Operation failed"),
            ErrorReport::Notify("Operation failed".to_string())
        );
    }

    #[test]
    fn test_closure_reporter() {
        let seen = RefCell::new(Vec::new());
        let reporter = |r: ErrorReport| seen.borrow_mut().push(r);

        reporter.report(ErrorReport::classify("timeout"));
        assert_eq!(seen.borrow()[0].message(), "timeout");
    }
}
