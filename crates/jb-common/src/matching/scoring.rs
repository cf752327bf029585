use std::fmt;

use serde::{Serialize, Serializer};

use super::{
    skills::check_job_skills,
    weights::{Weights, MATCH_WEIGHTS},
};
use crate::{CandidateProfile, JobPosting};

/// 一致した観点ごとの理由。並び順は skills → job category → industry → salary で固定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    SkillsMatched(usize),
    JobCategoryMatched,
    IndustryMatched,
    SalaryMatched,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::SkillsMatched(count) => write!(f, "{count} skill(s) matched"),
            MatchReason::JobCategoryMatched => f.write_str("job category matched"),
            MatchReason::IndustryMatched => f.write_str("industry matched"),
            MatchReason::SalaryMatched => f.write_str("desired salary range matched"),
        }
    }
}

impl Serialize for MatchReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 観点別の獲得点（丸め前）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub job_category: f64,
    pub industry: f64,
    pub salary: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.skills + self.job_category + self.industry + self.salary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// 0〜100 の整数
    pub score: u8,
    pub reasons: Vec<MatchReason>,
    pub breakdown: ScoreBreakdown,
    /// プロフィールのスキルに含まれる求人タグ（求人タグ順）
    pub matched_skills: Vec<String>,
}

impl MatchResult {
    pub fn reason_texts(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

/// 候補者プロフィールと求人の相性スコアを計算する
///
/// 毎回計算し直す純粋関数。配点は `MATCH_WEIGHTS`（合計100）。
pub fn score(profile: &CandidateProfile, job: &JobPosting) -> MatchResult {
    score_with_weights(profile, job, &MATCH_WEIGHTS)
}

fn score_with_weights(profile: &CandidateProfile, job: &JobPosting, weights: &Weights) -> MatchResult {
    let mut reasons = Vec::with_capacity(4);
    let mut breakdown = ScoreBreakdown::default();

    // スキル: 一致タグ数 / 求人タグ総数 で按分
    let skills = check_job_skills(&job.tags, profile);
    if skills.matched_count() > 0 {
        breakdown.skills = skills.match_percentage * weights.skills;
        reasons.push(MatchReason::SkillsMatched(skills.matched_count()));
    }

    if profile
        .desired_job_categories
        .iter()
        .any(|c| *c == job.job_category)
    {
        breakdown.job_category = weights.job_category;
        reasons.push(MatchReason::JobCategoryMatched);
    }

    if profile.desired_industries.iter().any(|i| *i == job.industry) {
        breakdown.industry = weights.industry;
        reasons.push(MatchReason::IndustryMatched);
    }

    if profile.desired_salary.overlaps(job.salary_min, job.salary_max) {
        breakdown.salary = weights.salary;
        reasons.push(MatchReason::SalaryMatched);
    }

    let score = breakdown.total().round().clamp(0.0, 100.0) as u8;

    MatchResult {
        score,
        reasons,
        breakdown,
        matched_skills: skills.matched_skills,
    }
}
