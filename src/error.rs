// ============================================================================
// ERRORES OPERACIONALES
// ============================================================================
// Red, backend, respuestas mal formadas y storage. Se muestran siempre por el
// canal de notificaciones, nunca en el mapa de errores de campo.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request build error: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// El backend respondió pero rechazó la operación
    #[error("{0}")]
    Rejected(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Título corto para el toast
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Request(_) | ApiError::Network(_) | ApiError::Timeout(_) => "Network error",
            ApiError::Http { .. } => "Server error",
            ApiError::Parse(_) | ApiError::MalformedResponse(_) => "Unexpected response",
            ApiError::Rejected(_) => "Request failed",
            ApiError::Storage(_) => "Storage error",
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::Http { status: 500, message: "boom".into() };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(err.title(), "Server error");
    }

    #[test]
    fn malformed_and_parse_share_a_title() {
        assert_eq!(
            ApiError::MalformedResponse("missing user".into()).title(),
            ApiError::Parse("eof".into()).title()
        );
    }
}
