use thiserror::Error;

/// Jina reader endpoint: `https://r.jina.ai/<url>` returns the page as
/// clean, LLM-friendly text.
const READER_PREFIX: &str = "https://r.jina.ai/";
/// Jina search endpoint: `https://s.jina.ai/<question>` searches the web
/// and returns the results in the same format.
const SEARCH_PREFIX: &str = "https://s.jina.ai/";

#[derive(Debug, Error)]
pub enum JinaError {
    #[error("error creating request: {0}")]
    BuildRequest(#[source] reqwest::Error),
    #[error("error sending request: {0}")]
    Send(#[source] reqwest::Error),
    #[error("error reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}

pub struct JinaClient {
    http: reqwest::Client,
    reader_prefix: String,
    search_prefix: String,
    api_key: Option<String>,
}

impl JinaClient {
    pub fn new(api_key: Option<String>) -> JinaClient {
        Self::with_prefixes(READER_PREFIX.into(), SEARCH_PREFIX.into(), api_key)
    }

    /// Build a client against non-default endpoints. Used by tests and for
    /// self-hosted reader deployments.
    pub fn with_prefixes(
        reader_prefix: String,
        search_prefix: String,
        api_key: Option<String>,
    ) -> JinaClient {
        JinaClient {
            http: reqwest::Client::new(),
            reader_prefix,
            search_prefix,
            api_key,
        }
    }

    /// Fetch the main content of a webpage as text.
    pub async fn scrape_url(&self, url: &str) -> Result<String, JinaError> {
        self.request(self.reader_url(url)).await
    }

    /// Search the web for an answer to a free-form question.
    pub async fn scrape_question(&self, question: &str) -> Result<String, JinaError> {
        self.request(self.search_url(question)).await
    }

    // The Jina endpoints take the payload verbatim in the path, so the
    // target is plain concatenation with no escaping of our own.
    fn reader_url(&self, url: &str) -> String {
        format!("{}{}", self.reader_prefix, url)
    }

    fn search_url(&self, question: &str) -> String {
        format!("{}{}", self.search_prefix, question)
    }

    async fn request(&self, target: String) -> Result<String, JinaError> {
        tracing::debug!("forwarding GET to {target}");

        let mut req = self.http.get(&target);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_builder() {
                JinaError::BuildRequest(e)
            } else {
                JinaError::Send(e)
            }
        })?;

        // The body passes through as-is, error pages included. Jina reports
        // its own failures as readable text, which is what the caller wants.
        resp.text().await.map_err(JinaError::ReadBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_url_is_exact_concatenation() {
        let client = JinaClient::new(None);
        assert_eq!(
            client.reader_url("https://example.com"),
            "https://r.jina.ai/https://example.com"
        );
    }

    #[test]
    fn test_search_url_keeps_spaces_unescaped() {
        let client = JinaClient::new(None);
        assert_eq!(
            client.search_url("What is the capital of France?"),
            "https://s.jina.ai/What is the capital of France?"
        );
    }

    #[test]
    fn test_custom_prefixes() {
        let client = JinaClient::with_prefixes(
            "http://127.0.0.1:9/read/".into(),
            "http://127.0.0.1:9/search/".into(),
            None,
        );
        assert_eq!(client.reader_url("a"), "http://127.0.0.1:9/read/a");
        assert_eq!(client.search_url("b"), "http://127.0.0.1:9/search/b");
    }
}
