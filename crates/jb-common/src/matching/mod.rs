pub mod filter;
pub mod location;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use filter::{filter_jobs, matches, FilterCriteria, StatusFilter};
pub use scoring::{score, MatchReason, MatchResult, ScoreBreakdown};
