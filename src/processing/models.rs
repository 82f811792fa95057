// Processing outcome types, serialized as-is by the HTTP API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal status of one article.
///
/// `ParsingError` is also what an unsupported news site gets: the name is
/// kept for compatibility with existing API consumers even though nothing
/// failed to parse in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    Ok,
    FetchError,
    ParsingError,
    Timeout,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Ok => "OK",
            ProcessingStatus::FetchError => "FETCH_ERROR",
            ProcessingStatus::ParsingError => "PARSING_ERROR",
            ProcessingStatus::Timeout => "TIMEOUT",
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of processing one URL.
///
/// Word count and jaundice rate are either both present (status `OK`) or
/// both absent. Fields are private so the only way to build an outcome is
/// through the constructors below, which keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingOutcome {
    url: String,
    #[serde(rename = "words")]
    word_count: Option<usize>,
    jaundice_rate: Option<f64>,
    status: ProcessingStatus,
}

impl ProcessingOutcome {
    /// The pessimistic starting state: nothing fetched yet.
    pub fn pending(url: &str) -> Self {
        Self {
            url: url.to_string(),
            word_count: None,
            jaundice_rate: None,
            status: ProcessingStatus::FetchError,
        }
    }

    /// Finish with a failure status, clearing any metrics.
    pub fn fail(self, status: ProcessingStatus) -> Self {
        debug_assert_ne!(status, ProcessingStatus::Ok, "failure outcome with OK status");
        Self {
            word_count: None,
            jaundice_rate: None,
            status,
            ..self
        }
    }

    /// Finish successfully.
    pub fn succeed(self, word_count: usize, jaundice_rate: f64) -> Self {
        Self {
            word_count: Some(word_count),
            jaundice_rate: Some(jaundice_rate),
            status: ProcessingStatus::Ok,
            ..self
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn word_count(&self) -> Option<usize> {
        self.word_count
    }

    pub fn jaundice_rate(&self) -> Option<f64> {
        self.jaundice_rate
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status == ProcessingStatus::Ok
    }
}
