use serde::{Deserialize, Serialize};

/// Valores por defecto (mismos que `.env.example`)
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5050";
const DEFAULT_TIMEOUT_SECONDS: u32 = 30;
const DEFAULT_NOTIFICATION_TTL_MS: u32 = 3000;
const DEFAULT_SESSION_STORAGE_KEY: &str = "token";
const DEFAULT_MAX_COPY_COUNT: u32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// 0 desactiva el timeout de red
    pub network_timeout_seconds: u32,
    pub notification_ttl_ms: u32,
    pub session_storage_key: String,
    pub max_copy_count: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_string(),
            max_copy_count: DEFAULT_MAX_COPY_COUNT,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL" => option_env!("BACKEND_URL"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "NETWORK_TIMEOUT_SECONDS" => option_env!("NETWORK_TIMEOUT_SECONDS"),
            "NOTIFICATION_TTL_MS" => option_env!("NOTIFICATION_TTL_MS"),
            "SESSION_STORAGE_KEY" => option_env!("SESSION_STORAGE_KEY"),
            "MAX_COPY_COUNT" => option_env!("MAX_COPY_COUNT"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de una función de búsqueda de claves.
    /// Valores ausentes o mal formados caen al valor por defecto.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        Self {
            backend_url: lookup("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            network_timeout_seconds: lookup("NETWORK_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.network_timeout_seconds),
            notification_ttl_ms: lookup("NOTIFICATION_TTL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.notification_ttl_ms),
            session_storage_key: lookup("SESSION_STORAGE_KEY")
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            max_copy_count: lookup("MAX_COPY_COUNT")
                .and_then(|v| v.parse().ok())
                .filter(|n: &u32| *n >= 1)
                .unwrap_or(defaults.max_copy_count),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Timeout de red en milisegundos, `None` si está desactivado
    pub fn network_timeout_ms(&self) -> Option<u32> {
        match self.network_timeout_seconds {
            0 => None,
            secs => Some(secs.saturating_mul(1000)),
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.backend_url, "http://127.0.0.1:5050");
        assert_eq!(config.notification_ttl_ms, 3000);
        assert_eq!(config.session_storage_key, "token");
        assert_eq!(config.max_copy_count, 3);
        assert_eq!(config.network_timeout_ms(), Some(30_000));
    }

    #[test]
    fn values_are_parsed_and_bad_values_ignored() {
        let env: HashMap<&str, &str> = [
            ("BACKEND_URL", "https://cars.example.com/"),
            ("ENVIRONMENT", "production"),
            ("NETWORK_TIMEOUT_SECONDS", "0"),
            ("NOTIFICATION_TTL_MS", "not-a-number"),
            ("MAX_COPY_COUNT", "0"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|key| env.get(key).copied());
        assert_eq!(config.backend_url, "https://cars.example.com");
        assert_eq!(config.environment, "production");
        assert_eq!(config.network_timeout_ms(), None);
        assert_eq!(config.notification_ttl_ms, 3000);
        assert_eq!(config.max_copy_count, 3);
    }
}
