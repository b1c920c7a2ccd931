use reqwest::Client;

use crate::config::Config;
use crate::data_models::SearchResultItem;
use crate::error::SearchError;
use crate::provider::GoogleSearch;
use crate::scrapper::{Scrapper, USER_AGENT};

/// Runs a provider query and, on request, enriches each hit with page text.
/// Holds no per-request state, so one instance is shared by every handler.
pub struct Searcher {
    config: Config,
    provider: GoogleSearch,
    scrapper: Scrapper,
}

impl Searcher {
    pub fn new(config: Config) -> reqwest::Result<Searcher> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let provider = GoogleSearch::new(client, config.search_api_url.clone());
        let scrapper = Scrapper::new(config.fetch_timeout)?;
        Ok(Searcher {
            config,
            provider,
            scrapper,
        })
    }

    pub async fn search(
        &self,
        query: &str,
        lang_code: &str,
        num: u8,
        full_text: bool,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        let credentials = self.config.credentials().inspect_err(|e| {
            tracing::error!("{e}");
        })?;

        let mut results = self
            .provider
            .search(credentials, query, lang_code, num)
            .await
            .inspect_err(|e| tracing::error!("{e}"))?;

        tracing::info!(query, count = results.len(), "provider returned results");

        if full_text {
            self.scrapper.enrich(&mut results).await;
        }
        Ok(results)
    }
}
