pub mod fixtures;
pub mod json_file;

use std::path::PathBuf;

use crate::{CandidateProfile, JobId, JobPosting};

pub use fixtures::FixtureSource;
pub use json_file::JsonFileSource;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid job {id}: {reason}")]
    InvalidRecord { id: JobId, reason: String },
    #[error("no candidate profile available from {0}")]
    MissingProfile(String),
}

/// 求人レコードの供給元（モック/ファイル/将来のバックエンド）
pub trait JobSource {
    fn name(&self) -> &'static str;
    fn load_jobs(&self) -> Result<Vec<JobPosting>, SourceError>;
}

/// 候補者プロフィールの供給元
pub trait ProfileSource {
    fn load_profile(&self) -> Result<CandidateProfile, SourceError>;
}

/// 取り込み時の形状チェック。マッチング側は整形済みレコードを前提にする
pub fn validate_job(job: &JobPosting) -> Result<(), SourceError> {
    if job.salary_min > job.salary_max {
        return Err(SourceError::InvalidRecord {
            id: job.id.clone(),
            reason: format!(
                "salary_min {} exceeds salary_max {}",
                job.salary_min, job.salary_max
            ),
        });
    }

    if let (Some(min), Some(max)) = (job.age_min, job.age_max) {
        if min > max {
            return Err(SourceError::InvalidRecord {
                id: job.id.clone(),
                reason: format!("age_min {min} exceeds age_max {max}"),
            });
        }
    }

    Ok(())
}
