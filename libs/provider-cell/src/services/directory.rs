use async_trait::async_trait;
use tracing::debug;

use shared_config::AppConfig;
use shared_utils::simulate_latency;

use crate::models::{Provider, ProviderError};

/// Read side of the provider catalogue.
///
/// The portal only ships the static, in-process directory below; the trait
/// marks where a remote lookup (with real failure modes) would plug in.
#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    async fn list_providers(&self) -> Result<Vec<Provider>, ProviderError>;

    async fn find_provider(&self, provider_id: &str) -> Result<Option<Provider>, ProviderError>;
}

pub fn seed_providers() -> Vec<Provider> {
    vec![
        Provider::new("1", "Dr. Evelyn Reed", "Cardiologist"),
        Provider::new("2", "Dr. Marcus Chen", "Dermatologist"),
        Provider::new("3", "Dr. Priya Nair", "General Practitioner"),
    ]
}

pub struct StaticProviderDirectory {
    providers: Vec<Provider>,
    latency_ms: u64,
}

impl StaticProviderDirectory {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            providers: seed_providers(),
            latency_ms: config.mock_latency_ms,
        }
    }

    pub fn with_providers(providers: Vec<Provider>) -> Self {
        Self {
            providers,
            latency_ms: 0,
        }
    }
}

#[async_trait]
impl ProviderDirectory for StaticProviderDirectory {
    async fn list_providers(&self) -> Result<Vec<Provider>, ProviderError> {
        debug!("Listing {} providers", self.providers.len());
        simulate_latency(self.latency_ms).await;

        Ok(self.providers.clone())
    }

    async fn find_provider(&self, provider_id: &str) -> Result<Option<Provider>, ProviderError> {
        debug!("Looking up provider: {}", provider_id);
        simulate_latency(self.latency_ms).await;

        Ok(self.providers.iter().find(|p| p.id == provider_id).cloned())
    }
}
