use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// Notificación efímera, consumida una sola vez por la superficie de toasts
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NotificationEvent {
    pub severity: Severity,
    pub title: String,
    pub body: String,
    pub ttl_ms: u32,
}
