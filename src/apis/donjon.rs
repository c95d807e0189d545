use crate::constants::{DONJON_API, DONJON_ENDPOINT_ENV, DONJON_SPELL_ENDPOINT};
use crate::error::{Result, ScraperError};
use crate::types::{DonjonSpell, SpellApi};
use tracing::{debug, instrument};

/// Client for the Donjon 5e spell lookup API.
pub struct DonjonClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for DonjonClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DonjonClient {
    pub fn new() -> Self {
        let base_url = std::env::var(DONJON_ENDPOINT_ENV)
            .unwrap_or_else(|_| DONJON_SPELL_ENDPOINT.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build the lookup URL for a spell name. Donjon keys spells by name and
    /// accepts `+` for spaces in the query string.
    fn spell_url(&self, name: &str) -> String {
        format!("{}?name={}", self.base_url, name.replace(' ', "+"))
    }
}

#[async_trait::async_trait]
impl SpellApi for DonjonClient {
    fn api_name(&self) -> &'static str {
        DONJON_API
    }

    #[instrument(skip(self))]
    async fn get_spell(&self, name: &str) -> Result<DonjonSpell> {
        let url = self.spell_url(name);
        debug!("Requesting {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Api {
                message: format!("request returned code {}", status.as_u16()),
            });
        }

        let spell: DonjonSpell = response.json().await?;
        debug!("Fetched raw record for {}", name);
        Ok(spell)
    }
}
