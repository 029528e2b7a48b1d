use std::fmt::Write;

use chrono::{DateTime, Utc};
use jobboard_core::{Job, PaginationInfo, ViewState};
use jobboard_engine::DEFAULT_PAGE_SIZE;

use super::format::{days_ago, format_date};

const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn render(view: &ViewState, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    if let Some(message) = &view.validation_error {
        let _ = writeln!(out, "! {message}");
    }
    if let Some(message) = &view.fetch_error {
        let _ = writeln!(out, "x {message}");
    }

    render_list(&mut out, view, now);
    if let Some(footer) = pagination_footer(&view.pagination) {
        let _ = writeln!(out, "{RULE}\n{footer}");
    }
    let _ = writeln!(out, "{RULE}");
    render_details(&mut out, view.selected_job.as_ref(), now);
    out
}

fn render_list(out: &mut String, view: &ViewState, now: DateTime<Utc>) {
    if view.loading {
        let _ = writeln!(out, "Loading jobs...");
        return;
    }
    if view.jobs.is_empty() {
        if view.location_filter.is_empty() {
            let _ = writeln!(out, "No jobs available");
        } else {
            let _ = writeln!(out, "No jobs found for \"{}\"", view.location_filter);
        }
        return;
    }

    let selected_id = view.selected_job.as_ref().map(|job| job.job_id.as_str());
    for (index, job) in view.jobs.iter().enumerate() {
        let marker = if Some(job.job_id.as_str()) == selected_id {
            '>'
        } else {
            ' '
        };
        let _ = writeln!(out, "{marker} {:>2}. {} - {}", index + 1, job.title, job.company);
        let _ = writeln!(
            out,
            "      {} | {} | {}",
            job.location,
            days_ago(job.posted_date_time.as_deref(), now),
            job.source.as_deref().unwrap_or("-")
        );
    }
}

/// `None` when everything fits on one page.
fn pagination_footer(pagination: &PaginationInfo) -> Option<String> {
    if pagination.total_pages <= 1 {
        return None;
    }
    let page_size = u64::from(DEFAULT_PAGE_SIZE);
    let current = u64::from(pagination.current_page.max(1));
    let first = current.saturating_sub(1) * page_size + 1;
    let last = (current * page_size).min(pagination.total_jobs);
    Some(format!(
        "Showing {first} to {last} of {} jobs    [{} / {}]",
        pagination.total_jobs, pagination.current_page, pagination.total_pages
    ))
}

fn render_details(out: &mut String, job: Option<&Job>, now: DateTime<Utc>) {
    let Some(job) = job else {
        let _ = writeln!(out, "Select a job to view details");
        return;
    };

    let _ = writeln!(out, "{}", job.title);
    let _ = writeln!(out, "  Company:     {}", job.company);
    let _ = writeln!(out, "  Location:    {}", job.location);
    let _ = writeln!(
        out,
        "  Posted:      {} ({})",
        format_date(job.posted_date_time.as_deref()),
        days_ago(job.posted_date_time.as_deref(), now)
    );

    let fields = [
        ("Type", job.employment_type.clone()),
        ("Experience", experience(job)),
        ("Seniority", job.seniority_level.clone()),
        ("Country", job.country.clone()),
        ("Company size", job.company_type.clone()),
        ("Source", job.source.clone()),
        ("Company page", job.company_url.clone()),
        ("Apply", job.job_link.clone()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(out, "  {:<12} {}", format!("{label}:"), value);
        }
    }

    if let Some(description) = &job.description {
        let _ = writeln!(out, "\n  {description}");
    }
}

fn experience(job: &Job) -> Option<String> {
    match (&job.experience, job.min_exp, job.max_exp) {
        (Some(text), _, _) => Some(text.clone()),
        (None, Some(min), Some(max)) => Some(format!("{min}-{max} years")),
        (None, Some(min), None) => Some(format!("{min}+ years")),
        _ => None,
    }
}
