//! Google Custom Search JSON API client.

use reqwest::Client;
use serde::Deserialize;

use crate::config::Credentials;
use crate::data_models::SearchResultItem;
use crate::error::SearchError;

/// Raw provider response. Every attribute is optional upstream.
#[derive(Debug, Deserialize)]
pub struct GoogleResponse {
    pub items: Option<Vec<GoogleItem>>,
}

#[derive(Debug, Deserialize)]
pub struct GoogleItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

impl From<GoogleItem> for SearchResultItem {
    fn from(item: GoogleItem) -> Self {
        SearchResultItem::new(
            item.title.unwrap_or_default(),
            item.link.unwrap_or_default(),
            item.snippet.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    message: String,
}

pub struct GoogleSearch {
    client: Client,
    api_url: String,
}

impl GoogleSearch {
    pub fn new(client: Client, api_url: impl Into<String>) -> GoogleSearch {
        GoogleSearch {
            client,
            api_url: api_url.into(),
        }
    }

    /// Runs one query scoped to the configured engine, restricted to `lang_code`.
    pub async fn search(
        &self,
        credentials: Credentials<'_>,
        query: &str,
        lang_code: &str,
        num: u8,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        let lr = format!("lang_{lang_code}");
        let num_param = num.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("key", credentials.api_key),
                ("cx", credentials.cse_id),
                ("q", query),
                ("lr", lr.as_str()),
                ("num", num_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await;
            return Err(SearchError::Provider(upstream_message(status.as_u16(), body)));
        }

        let data: GoogleResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Provider(format!("invalid response body: {e}")))?;

        Ok(data
            .items
            .unwrap_or_default()
            .into_iter()
            .take(num as usize)
            .map(SearchResultItem::from)
            .collect())
    }
}

fn upstream_message<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> String {
    let body = match body {
        Ok(body) => body,
        Err(e) => return format!("HTTP {status} (failed to read error body: {e})"),
    };
    match serde_json::from_str::<GoogleErrorBody>(&body) {
        Ok(parsed) => format!("HTTP {status}: {}", parsed.error.message),
        Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
        Err(_) => format!("HTTP {status}: {}", body.trim()),
    }
}
