use serde::{Deserialize, Deserializer, Serialize};

/// A single job posting as returned by the listing service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO-8601 timestamp, kept as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_exp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_exp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Position of a fetched page within the whole result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_jobs: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_jobs: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

impl PaginationInfo {
    /// True when the navigation flags agree with the page numbers.
    pub fn is_consistent(&self) -> bool {
        self.has_prev == (self.current_page > 1)
            && self.has_next == (self.current_page < self.total_pages)
    }

    /// Highest page number navigation may target; never below 1.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }
}

/// One page of jobs in service order, plus its pagination block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: PaginationInfo,
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PageResult {
    /// Wraps `jobs` as the only page of a result set.
    pub fn single_page(jobs: Vec<Job>) -> Self {
        let pagination = PaginationInfo {
            total_jobs: jobs.len() as u64,
            ..PaginationInfo::default()
        };
        Self { jobs, pagination }
    }
}
