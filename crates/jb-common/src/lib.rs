pub mod board;
pub mod config;
pub mod listing;
pub mod logging;
pub mod matching;
pub mod profile;
pub mod recommend;
pub mod source;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// 求人ID。モックは数値、バックエンド由来は文字列のことがある
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Int(i64),
    Text(String),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Int(id) => write!(f, "{id}"),
            JobId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for JobId {
    fn from(value: i64) -> Self {
        JobId::Int(value)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        JobId::Text(value.to_string())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum JobStatus {
    Active,
    Closed,
    Draft,
}

/// 閉区間 [low, high]。JSON 上は `[low, high]` の2要素配列
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct IntRange {
    pub low: i64,
    pub high: i64,
}

impl IntRange {
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// 境界を含む区間の重なり判定
    pub fn overlaps(&self, low: i64, high: i64) -> bool {
        low <= self.high && high >= self.low
    }
}

impl From<(i64, i64)> for IntRange {
    fn from((low, high): (i64, i64)) -> Self {
        Self { low, high }
    }
}

impl From<IntRange> for (i64, i64) {
    fn from(range: IntRange) -> Self {
        (range.low, range.high)
    }
}

// Commonly used data models for matching functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: JobStatus,
    pub posted_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_label: Option<String>,
    pub salary_min: i64,
    pub salary_max: i64,
    pub industry: String,
    pub job_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<i32>,
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    pub desired_salary: IntRange,
    #[serde(default)]
    pub desired_job_categories: Vec<String>,
    #[serde(default)]
    pub desired_industries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl CandidateProfile {
    pub fn has_skill(&self, tag: &str) -> bool {
        self.skills.iter().any(|skill| skill == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_boundary_inclusive() {
        let query = IntRange::new(800, 900);
        assert!(query.overlaps(500, 800));
        assert!(IntRange::new(300, 500).overlaps(500, 800));
        assert!(!IntRange::new(900, 1000).overlaps(500, 800));
    }

    #[test]
    fn job_id_accepts_numbers_and_strings() {
        let numeric: JobId = serde_json::from_str("7").unwrap();
        let text: JobId = serde_json::from_str("\"job-7\"").unwrap();

        assert_eq!(numeric, JobId::Int(7));
        assert_eq!(text, JobId::Text("job-7".into()));
        assert_eq!(numeric.to_string(), "7");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<JobStatus>().unwrap(), JobStatus::Active);
        assert_eq!(JobStatus::Draft.as_ref(), "draft");
        assert!("archived".parse::<JobStatus>().is_err());
    }

    #[test]
    fn profile_salary_reads_as_pair() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{"skills":["React"],"desired_salary":[500,800]}"#,
        )
        .unwrap();

        assert_eq!(profile.desired_salary, IntRange::new(500, 800));
        assert!(profile.desired_job_categories.is_empty());
        assert!(profile.has_skill("React"));
        assert!(!profile.has_skill("react"));
    }
}
