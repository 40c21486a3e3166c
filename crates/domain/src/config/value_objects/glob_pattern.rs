use globset::{Glob, GlobBuilder, GlobMatcher};
use modern_cli_shared_kernel::{DomainError, DomainResult};

/// Single-level glob matched against entry names; `*` never crosses a `/`.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub const MATCH_ALL: &'static str = "*";

    pub fn new(pattern: &str) -> DomainResult<Self> {
        let glob: Glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                details: e.kind().to_string(),
                source: Some(Box::new(e)),
            })?;
        Ok(Self {
            original: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn match_all() -> Self {
        Self::new(Self::MATCH_ALL).unwrap_or_else(|_| unreachable!("`*` is a valid glob"))
    }

    pub fn matches(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}

impl Default for GlobPattern {
    fn default() -> Self {
        Self::match_all()
    }
}
