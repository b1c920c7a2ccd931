use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const DEFAULT_LANG_CODE: &str = "en";
pub const MIN_NUM: i64 = 1;
pub const MAX_NUM: i64 = 10;

/// Inbound body as sent by the caller, before constraints are checked.
#[derive(Debug, Deserialize, Default)]
pub struct RawSearchRequest {
    pub query: Option<String>,
    pub lang_code: Option<String>,
    pub num: Option<i64>,
    pub full_text: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub lang_code: String,
    pub num: u8,
    pub full_text: bool,
}

impl TryFrom<RawSearchRequest> for SearchRequest {
    type Error = ValidationError;

    fn try_from(raw: RawSearchRequest) -> Result<Self, Self::Error> {
        let query = raw.query.ok_or(ValidationError::MissingField("query"))?;
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        let num = raw.num.ok_or(ValidationError::MissingField("num"))?;
        if !(MIN_NUM..=MAX_NUM).contains(&num) {
            return Err(ValidationError::NumOutOfRange(num));
        }

        let full_text = raw
            .full_text
            .ok_or(ValidationError::MissingField("full_text"))?;

        let lang_code = raw
            .lang_code
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANG_CODE.to_string());

        Ok(SearchRequest {
            query,
            lang_code,
            num: num as u8,
            full_text,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
