use once_cell::sync::Lazy;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use scraper::{Html, Selector};
use std::time::Duration;

use crate::data_models::SearchResultItem;
use crate::error::FetchError;

pub const MAX_FULL_TEXT_CHARS: usize = 1000;
pub const USER_AGENT: &str = concat!("cse-search/", env!("CARGO_PKG_VERSION"));

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("static selector must parse"));

/// Fetches linked pages and pulls their paragraph text.
pub struct Scrapper {
    client: Client,
}

impl Scrapper {
    pub fn new(timeout: Duration) -> reqwest::Result<Scrapper> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Scrapper { client })
    }

    /// Fills `full_text` on every item, one page at a time, in ranking order.
    /// A failing page only affects its own item.
    pub async fn enrich(&self, items: &mut [SearchResultItem]) {
        for item in items.iter_mut() {
            let text = match self.fetch_text(&item.link).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(link = %item.link, "full text fetch failed: {e}");
                    truncate_chars(&format!("Error fetching full text: {e}"), MAX_FULL_TEXT_CHARS)
                }
            };
            item.full_text = Some(text);
        }
    }

    pub async fn fetch_text(&self, link: &str) -> Result<String, FetchError> {
        if link.trim().is_empty() {
            return Err(FetchError::MissingLink);
        }
        let url = Url::parse(link).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme {}",
                url.scheme()
            )));
        }

        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        if let Some(content_type) = res.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default().to_ascii_lowercase();
            if !content_type.contains("html") {
                return Err(FetchError::NotHtml(content_type));
            }
        }
        let body = res.text().await?;

        let text = extract_paragraph_text(&body, MAX_FULL_TEXT_CHARS);
        tracing::debug!(link, chars = text.chars().count(), "extracted full text");
        Ok(text)
    }
}

/// Concatenates the text of every `<p>` element, collapsing whitespace.
pub fn extract_paragraph_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);
    let text = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    truncate_chars(&text, max_chars)
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
