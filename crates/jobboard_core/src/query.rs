use std::fmt;
use std::str::FromStr;

use crate::PaginationInfo;

/// Shortest non-empty location filter that may be searched.
pub const MIN_LOCATION_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Please enter at least 3 characters to search")]
    TooShort { chars: usize },
}

/// Checks an already-trimmed location filter. Empty means "all locations".
pub fn validate_location(trimmed: &str) -> Result<(), LocationError> {
    let chars = trimmed.chars().count();
    if chars > 0 && chars < MIN_LOCATION_CHARS {
        return Err(LocationError::TooShort { chars });
    }
    Ok(())
}

/// User-controlled search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    location_filter: String,
    current_page: i64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            location_filter: String::new(),
            current_page: 1,
        }
    }
}

impl QueryState {
    pub fn location_filter(&self) -> &str {
        &self.location_filter
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Gate for issuing a fetch with the current parameters.
    pub fn is_fetchable(&self) -> bool {
        validate_location(&self.location_filter).is_ok()
    }

    pub(crate) fn set_location(&mut self, trimmed: String) {
        self.location_filter = trimmed;
        self.current_page = 1;
    }

    pub(crate) fn set_page(&mut self, page: i64) {
        self.current_page = page;
    }
}

/// How `change_page` treats page numbers outside `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePolicy {
    /// Clamp into the bounds of the pagination block currently shown.
    #[default]
    Clamp,
    /// Forward the requested page unchanged and let the service decide.
    Passthrough,
}

impl PagePolicy {
    pub fn resolve(self, requested: i64, pagination: &PaginationInfo) -> i64 {
        match self {
            PagePolicy::Clamp => requested.clamp(1, i64::from(pagination.last_page())),
            PagePolicy::Passthrough => requested,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page policy {0:?} (expected \"clamp\" or \"passthrough\")")]
pub struct PagePolicyError(pub String);

impl FromStr for PagePolicy {
    type Err = PagePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(PagePolicy::Clamp),
            "passthrough" => Ok(PagePolicy::Passthrough),
            _ => Err(PagePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for PagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagePolicy::Clamp => write!(f, "clamp"),
            PagePolicy::Passthrough => write!(f, "passthrough"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_locations_are_rejected() {
        assert_eq!(
            validate_location("NY"),
            Err(LocationError::TooShort { chars: 2 })
        );
        assert!(validate_location("").is_ok());
        assert!(validate_location("Pune").is_ok());
        // Counted in characters, not bytes.
        assert!(validate_location("Köl").is_ok());
    }

    #[test]
    fn validation_message_matches_banner_text() {
        let err = validate_location("a").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter at least 3 characters to search"
        );
    }

    #[test]
    fn clamp_uses_total_pages() {
        let pagination = PaginationInfo {
            current_page: 2,
            total_pages: 4,
            total_jobs: 80,
            has_next: true,
            has_prev: true,
        };
        assert_eq!(PagePolicy::Clamp.resolve(0, &pagination), 1);
        assert_eq!(PagePolicy::Clamp.resolve(9, &pagination), 4);
        assert_eq!(PagePolicy::Clamp.resolve(3, &pagination), 3);
        assert_eq!(PagePolicy::Passthrough.resolve(-2, &pagination), -2);
        assert_eq!(PagePolicy::Passthrough.resolve(9, &pagination), 9);
    }

    #[test]
    fn page_policy_parses_case_insensitively() {
        assert_eq!("Clamp".parse::<PagePolicy>(), Ok(PagePolicy::Clamp));
        assert_eq!(
            " passthrough ".parse::<PagePolicy>(),
            Ok(PagePolicy::Passthrough)
        );
        assert!("bounded".parse::<PagePolicy>().is_err());
    }
}
