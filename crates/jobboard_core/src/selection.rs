use crate::Job;

/// Picks the selected job after the job list has been replaced.
///
/// Keeps the previous selection when a job with the same id is present in
/// `jobs` (returning the new entry), falls back to the first job otherwise,
/// and selects nothing when `jobs` is empty.
pub fn reselect<'a>(jobs: &'a [Job], previous: Option<&str>) -> Option<&'a Job> {
    previous
        .and_then(|id| jobs.iter().find(|job| job.job_id == id))
        .or_else(|| jobs.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, title: &str) -> Job {
        Job {
            job_id: id.to_string(),
            title: title.to_string(),
            ..Job::default()
        }
    }

    #[test]
    fn keeps_matching_entry_from_new_list() {
        let jobs = vec![job("a", "first"), job("b", "updated title")];
        let picked = reselect(&jobs, Some("b")).unwrap();
        assert_eq!(picked.title, "updated title");
        assert!(std::ptr::eq(picked, &jobs[1]));
    }

    #[test]
    fn falls_back_to_first_entry() {
        let jobs = vec![job("x", "x"), job("y", "y")];
        assert_eq!(reselect(&jobs, Some("gone")).unwrap().job_id, "x");
        assert_eq!(reselect(&jobs, None).unwrap().job_id, "x");
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert!(reselect(&[], Some("a")).is_none());
    }
}
