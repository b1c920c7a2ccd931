use serde::{Deserialize, Serialize};

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResultItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl SearchResultItem {
    pub fn new(title: String, link: String, snippet: String) -> SearchResultItem {
        SearchResultItem {
            title,
            link,
            snippet,
            full_text: None, // populated by the scrapper when requested.
        }
    }
}

/// Body returned by `POST /search/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ResponseEnvelope {
    NoResults {
        message: String,
        results: Vec<SearchResultItem>,
    },
    Results {
        results: Vec<SearchResultItem>,
    },
}

impl ResponseEnvelope {
    pub fn from_results(results: Vec<SearchResultItem>) -> ResponseEnvelope {
        if results.is_empty() {
            ResponseEnvelope::NoResults {
                message: NO_RESULTS_MESSAGE.to_string(),
                results,
            }
        } else {
            ResponseEnvelope::Results { results }
        }
    }
}
