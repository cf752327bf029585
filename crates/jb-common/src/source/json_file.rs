use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{validate_job, JobSource, ProfileSource, SourceError};
use crate::{CandidateProfile, JobPosting};

/// JSON ファイルから求人配列・プロフィールを読む
#[derive(Debug, Clone, Default)]
pub struct JsonFileSource {
    pub jobs_path: Option<PathBuf>,
    pub profile_path: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new(jobs_path: Option<PathBuf>, profile_path: Option<PathBuf>) -> Self {
        Self {
            jobs_path,
            profile_path,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl JobSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json_file"
    }

    #[instrument(skip(self), fields(path = ?self.jobs_path))]
    fn load_jobs(&self) -> Result<Vec<JobPosting>, SourceError> {
        let Some(path) = &self.jobs_path else {
            return Ok(Vec::new());
        };

        let jobs: Vec<JobPosting> = read_json(path)?;
        for job in &jobs {
            validate_job(job)?;
        }
        debug!(count = jobs.len(), "loaded jobs from file");
        Ok(jobs)
    }
}

impl ProfileSource for JsonFileSource {
    fn load_profile(&self) -> Result<CandidateProfile, SourceError> {
        let path = self
            .profile_path
            .as_ref()
            .ok_or_else(|| SourceError::MissingProfile("json_file".into()))?;
        read_json(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JobId, JobStatus};

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("jb-common-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_jobs_with_mixed_ids() {
        let path = write_temp(
            "jobs.json",
            r#"[
                {"id": 1, "title": "QA Engineer", "company": "Quality Systems",
                 "location": "Naka, Nagoya, Aichi", "tags": ["Jest"], "status": "active",
                 "posted_date": "2024-01-08", "salary_min": 450, "salary_max": 650,
                 "industry": "Manufacturing", "job_category": "QA Engineer"},
                {"id": "ext-9", "title": "Designer", "company": "Design Studio",
                 "location": "Remote", "status": "draft", "posted_date": "2024-01-13",
                 "salary_min": 450, "salary_max": 650, "industry": "IT",
                 "job_category": "UI/UX Designer", "age_min": 22, "age_max": 35,
                 "is_favorite": true}
            ]"#,
        );

        let source = JsonFileSource::new(Some(path.clone()), None);
        let jobs = source.load_jobs().unwrap();
        fs::remove_file(path).ok();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].id, JobId::Text("ext-9".into()));
        assert_eq!(jobs[1].status, JobStatus::Draft);
        assert!(jobs[1].is_favorite);
        assert!(jobs[0].age_min.is_none());
    }

    #[test]
    fn rejects_inverted_salary() {
        let path = write_temp(
            "inverted.json",
            r#"[{"id": 3, "title": "x", "company": "y", "location": "z",
                 "status": "closed", "posted_date": "2024-01-01",
                 "salary_min": 900, "salary_max": 100,
                 "industry": "IT", "job_category": "QA Engineer"}]"#,
        );

        let err = JsonFileSource::new(Some(path.clone()), None)
            .load_jobs()
            .unwrap_err();
        fs::remove_file(path).ok();

        assert!(matches!(err, SourceError::InvalidRecord { id: JobId::Int(3), .. }));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let path = write_temp("broken.json", "{not json");
        let err = JsonFileSource::new(Some(path.clone()), None)
            .load_jobs()
            .unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_profile_path_is_an_error() {
        let err = JsonFileSource::default().load_profile().unwrap_err();
        assert!(matches!(err, SourceError::MissingProfile(_)));
    }
}
