use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_MOCK_USER_ID: &str = "user123";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Delay applied to every mock service call, in milliseconds.
    pub mock_latency_ms: u64,
    /// The single user all mock data is keyed by.
    pub mock_user_id: String,
    /// Offset of the clinic's zone from UTC, in minutes. The availability
    /// rules read day-of-month in this zone.
    pub clinic_utc_offset_minutes: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            mock_latency_ms: 300,
            mock_user_id: DEFAULT_MOCK_USER_ID.to_string(),
            clinic_utc_offset_minutes: -300,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| {
                    warn!("HOST not set, using default");
                    defaults.host.clone()
                }),
            port: parse_var("PORT", defaults.port),
            mock_latency_ms: parse_var("MOCK_LATENCY_MS", defaults.mock_latency_ms),
            mock_user_id: env::var("MOCK_USER_ID")
                .unwrap_or_else(|_| {
                    warn!("MOCK_USER_ID not set, using default");
                    defaults.mock_user_id.clone()
                }),
            clinic_utc_offset_minutes: parse_var(
                "CLINIC_UTC_OFFSET_MINUTES",
                defaults.clinic_utc_offset_minutes,
            ),
        };

        if !config.is_configured() {
            warn!("Application configuration incomplete or out of range");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
            && !self.mock_user_id.is_empty()
            && self.clinic_utc_offset_minutes.abs() < 24 * 60
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}
