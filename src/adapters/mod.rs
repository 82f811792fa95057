// Site sanitizers — turn a news site's raw HTML into article text.
//
// Each supported site gets a Sanitizer implementation registered under its
// hostname. The article pipeline refuses URLs whose hostname has no
// registered sanitizer before it ever fetches them.

use std::collections::HashMap;
use std::sync::Arc;

pub mod html_tools;
pub mod inosmi;

/// Source-specific HTML → text extraction.
///
/// Sanitizers are best-effort and never fail: markup they do not recognize
/// simply yields less (possibly empty) text.
pub trait Sanitizer: Send + Sync {
    /// Extract the article from `html`, as plain text when `plaintext` is
    /// set, otherwise as reduced HTML.
    fn sanitize(&self, html: &str, plaintext: bool) -> String;
}

/// Hostname → sanitizer lookup.
#[derive(Clone)]
pub struct SanitizerRegistry {
    by_host: HashMap<String, Arc<dyn Sanitizer>>,
}

impl SanitizerRegistry {
    /// A registry with no supported sites.
    pub fn empty() -> Self {
        Self {
            by_host: HashMap::new(),
        }
    }

    /// Register `sanitizer` for an exact hostname (case-insensitive).
    pub fn with(mut self, host: &str, sanitizer: Arc<dyn Sanitizer>) -> Self {
        self.by_host.insert(host.to_ascii_lowercase(), sanitizer);
        self
    }

    pub fn get(&self, host: &str) -> Option<&dyn Sanitizer> {
        self.by_host
            .get(&host.to_ascii_lowercase())
            .map(|s| s.as_ref())
    }

    pub fn is_supported(&self, host: &str) -> bool {
        self.get(host).is_some()
    }

    /// Supported hostnames, sorted.
    pub fn hosts(&self) -> Vec<&str> {
        let mut hosts: Vec<&str> = self.by_host.keys().map(String::as_str).collect();
        hosts.sort_unstable();
        hosts
    }
}

impl Default for SanitizerRegistry {
    fn default() -> Self {
        Self::empty().with(inosmi::HOST, Arc::new(inosmi::InosmiSanitizer))
    }
}
