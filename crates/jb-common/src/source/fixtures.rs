use std::path::PathBuf;

use super::{validate_job, JobSource, ProfileSource, SourceError};
use crate::{CandidateProfile, JobPosting};

const JOBS_JSON: &str = include_str!("../../fixtures/jobs.json");
const PROFILE_JSON: &str = include_str!("../../fixtures/profile.json");

/// 検索サイドバーの職種候補
pub const JOB_CATEGORIES: &[&str] = &[
    "Frontend Engineer",
    "Backend Engineer",
    "Full Stack Engineer",
    "UI/UX Designer",
    "Product Manager",
    "DevOps Engineer",
    "Data Scientist",
    "QA Engineer",
];

/// 検索サイドバーの業界候補
pub const INDUSTRIES: &[&str] = &[
    "IT",
    "Finance",
    "Manufacturing",
    "Retail",
    "Healthcare",
    "Education",
    "Real Estate",
    "Consulting",
];

/// 検索サイドバーの勤務地候補（最後の "Remote" は常に一致する特例）
pub const LOCATIONS: &[&str] = &[
    "Tokyo", "Osaka", "Kanagawa", "Aichi", "Fukuoka", "Kyoto", "Hyogo", "Remote",
];

pub const ALL_TAGS: &[&str] = &[
    "React",
    "TypeScript",
    "Next.js",
    "Tailwind CSS",
    "Node.js",
    "PostgreSQL",
    "AWS",
    "Figma",
    "Design Systems",
    "Prototyping",
    "User Research",
    "Python",
    "Django",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Terraform",
    "Strategy",
    "Analytics",
    "Agile",
    "Roadmap",
    "Vue.js",
    "Angular",
    "GraphQL",
    "Machine Learning",
    "TensorFlow",
    "SQL",
    "Selenium",
    "Jest",
    "Cypress",
    "API Testing",
];

/// バンドル済みのモック求人8件とモック候補者
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

fn parse_error(name: &str, source: serde_json::Error) -> SourceError {
    SourceError::Parse {
        path: PathBuf::from("fixtures").join(name),
        source,
    }
}

impl JobSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixtures"
    }

    fn load_jobs(&self) -> Result<Vec<JobPosting>, SourceError> {
        let jobs: Vec<JobPosting> =
            serde_json::from_str(JOBS_JSON).map_err(|err| parse_error("jobs.json", err))?;
        for job in &jobs {
            validate_job(job)?;
        }
        Ok(jobs)
    }
}

impl ProfileSource for FixtureSource {
    fn load_profile(&self) -> Result<CandidateProfile, SourceError> {
        serde_json::from_str(PROFILE_JSON).map_err(|err| parse_error("profile.json", err))
    }
}
