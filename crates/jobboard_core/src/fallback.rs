use crate::{Job, PageResult};

/// Source of the content shown when the listing service cannot be reached.
pub trait FallbackJobs: Send {
    fn fallback_page(&self) -> PageResult;
}

/// Two fixed sample postings, shown as a single page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleJobs;

impl FallbackJobs for SampleJobs {
    fn fallback_page(&self) -> PageResult {
        PageResult::single_page(sample_jobs())
    }
}

fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            job_id: "33411379".to_string(),
            title: "SAP Project Manager".to_string(),
            company: "Executive Softway Guild India Private Limited".to_string(),
            location: "Hyderabad, Bengaluru".to_string(),
            job_link: Some("https://www.foundit.in/job/33411379".to_string()),
            employment_type: Some("Permanent Job".to_string()),
            experience: Some("10-20 Years".to_string()),
            source: Some("foundit".to_string()),
            country: Some("India".to_string()),
            posted_date_time: Some("2024-12-23T07:22:17.710Z".to_string()),
            company_image_url: Some(
                "https://media.foundit.in/trex/search/public/images/companyLogoDefault.png"
                    .to_string(),
            ),
            min_exp: Some(10.0),
            max_exp: Some(20.0),
            description: Some(
                "Looking for experienced SAP Project Manager to lead implementation projects. \
                 Must have strong leadership skills and experience with SAP modules."
                    .to_string(),
            ),
            ..Job::default()
        },
        Job {
            job_id: "4106589701".to_string(),
            title: "System Engineer".to_string(),
            company: "SystematizeHA".to_string(),
            location: "Bengaluru, Karnataka, India".to_string(),
            job_link: Some(
                "https://in.linkedin.com/jobs/view/system-engineer-at-systematizeha-4106589701"
                    .to_string(),
            ),
            seniority_level: Some("Entry level".to_string()),
            employment_type: Some("Full time".to_string()),
            source: Some("linkedin".to_string()),
            experience: Some("0-2 years".to_string()),
            company_url: Some("https://in.linkedin.com/company/systematizeha".to_string()),
            company_image_url: Some(
                "https://media.licdn.com/dms/image/v2/D560BAQEwuLkARUZIdQ/company-logo_100_100/company-logo_100_100/0/1718879848585"
                    .to_string(),
            ),
            posted_date_time: Some("2024-12-23T07:16:54.134Z".to_string()),
            min_exp: Some(6.0),
            max_exp: Some(8.0),
            country: Some("India".to_string()),
            company_type: Some("medium".to_string()),
            description: Some(
                "Entry-level System Engineer position. Great opportunity for fresh graduates \
                 to start their career in IT infrastructure and system administration."
                    .to_string(),
            ),
        },
    ]
}
