//! Single-request HTTP probes.
//!
//! A probe issues exactly one GET against a [`Target`] and compares either the
//! status code or the trimmed body with an expected literal. Failures are
//! reported in the [`ProbeResult`], never raised; there are no retries.

use reqwest::{StatusCode, Url};

use crate::error::QuestionError;

/// The server being graded: scheme plus host (and port).
///
/// Any path, query or fragment of the submitted URL is discarded; every
/// question supplies its own path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    base: Url,
}

impl Target {
    /// Parse a submitted base URL.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::MalformedUrl`] if the URL does not parse, is
    /// not `http`/`https`, or has no host.
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        let malformed = |reason: String| QuestionError::MalformedUrl {
            url: raw.to_string(),
            reason,
        };

        let mut base = Url::parse(raw.trim()).map_err(|e| malformed(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(malformed(format!("unsupported scheme '{}'", base.scheme())));
        }
        if base.host_str().is_none_or(str::is_empty) {
            return Err(malformed(String::from("missing host")));
        }

        base.set_path("/");
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    /// Absolute URL for `path` with `query` pairs form-encoded.
    #[must_use]
    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    /// `scheme://host[:port]` without a trailing slash.
    #[must_use]
    pub fn origin(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }
}

/// What a probe compares the response against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Status code must match exactly.
    Status(StatusCode),
    /// Body, with surrounding whitespace trimmed, must match exactly.
    Body(String),
}

/// Outcome of one probe.
#[derive(Debug)]
pub struct ProbeResult {
    pub passed: bool,
    /// Annotation explaining a failure that was not a mismatch.
    pub error: Option<QuestionError>,
}

impl ProbeResult {
    const fn compared(passed: bool) -> Self {
        Self {
            passed,
            error: None,
        }
    }

    pub(crate) const fn errored(error: QuestionError) -> Self {
        Self {
            passed: false,
            error: Some(error),
        }
    }
}

/// HTTP client shared by every probe in a process.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    http: reqwest::Client,
}

impl ProbeClient {
    /// Create a client with a fixed per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::Client`] if the TLS backend or resolver cannot
    /// be initialised.
    pub fn new(timeout: std::time::Duration, user_agent: &str) -> Result<Self, QuestionError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(QuestionError::Client)?;
        Ok(Self { http })
    }

    /// Issue one GET to `url` and check it against `expectation`.
    pub async fn probe(&self, url: Url, expectation: &Expectation) -> ProbeResult {
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => return ProbeResult::errored(QuestionError::Transport(e)),
        };

        match expectation {
            Expectation::Status(expected) => ProbeResult::compared(response.status() == *expected),
            Expectation::Body(expected) => match response.bytes().await {
                Ok(body) => ProbeResult::compared(body.trim_ascii() == expected.as_bytes()),
                Err(e) => ProbeResult::errored(QuestionError::BodyRead(e)),
            },
        }
    }
}
