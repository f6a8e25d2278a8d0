//! Wikipedia opensearch client
//!
//! The opensearch response is `[query, [titles], [descriptions], [urls]]`;
//! the titles are the suggestions.

use serde_json::Value;

use super::SourceError;

#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: reqwest::Client,
    endpoint: String,
    limit: usize,
}

impl WikipediaClient {
    pub fn new(endpoint: String, limit: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            limit,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self, query: &str) -> Result<Vec<String>, SourceError> {
        let limit = self.limit.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "opensearch"),
                ("format", "json"),
                ("search", query),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                code: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        let mut suggestions = parse_opensearch(&body)?;
        suggestions.truncate(self.limit);
        Ok(suggestions)
    }
}

/// Extract the suggestion titles from an opensearch response body
pub fn parse_opensearch(body: &Value) -> Result<Vec<String>, SourceError> {
    let titles = body
        .as_array()
        .and_then(|parts| parts.get(1))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            SourceError::Parse("expected [query, [titles], ...] opensearch array".to_string())
        })?;

    titles
        .iter()
        .map(|title| {
            title
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| SourceError::Parse(format!("non-string suggestion: {}", title)))
        })
        .collect()
}
