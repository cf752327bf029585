use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::{location::location_matches, skills::any_tag_selected};
use crate::{IntRange, JobPosting, JobStatus};

/// 検索サイドバー初期値（年齢）
pub const DEFAULT_AGE_RANGE: IntRange = IntRange::new(20, 65);
/// 検索サイドバー初期値（年収）
pub const DEFAULT_SALARY_RANGE: IntRange = IntRange::new(300, 1500);

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Closed,
    Draft,
}

impl StatusFilter {
    pub fn accepts(&self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == JobStatus::Active,
            StatusFilter::Closed => status == JobStatus::Closed,
            StatusFilter::Draft => status == JobStatus::Draft,
        }
    }
}

impl From<JobStatus> for StatusFilter {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Active => StatusFilter::Active,
            JobStatus::Closed => StatusFilter::Closed,
            JobStatus::Draft => StatusFilter::Draft,
        }
    }
}

/// 一覧画面の検索条件（再描画ごとに作り直される一時状態）
///
/// 空文字・空配列・`None` はいずれも「制約なし」。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub keyword: String,
    pub company_name: String,
    pub job_category: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub age_range: Option<IntRange>,
    pub salary_range: Option<IntRange>,
    pub selected_tags: Vec<String>,
    pub status_filter: StatusFilter,
}

impl FilterCriteria {
    /// 一覧画面を開いた直後の状態（年齢 20〜65、年収 300〜1500）
    pub fn sidebar_defaults() -> Self {
        Self {
            age_range: Some(DEFAULT_AGE_RANGE),
            salary_range: Some(DEFAULT_SALARY_RANGE),
            ..Self::default()
        }
    }

    /// 「クリア」ボタン相当。サイドバー初期値に戻す
    pub fn clear(&mut self) {
        *self = Self::sidebar_defaults();
    }

    /// 選択済みなら外し、未選択なら末尾に追加する。追加した場合 true
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.iter().any(|t| t == tag) {
            self.remove_tag(tag);
            false
        } else {
            self.selected_tags.push(tag.to_string());
            true
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.selected_tags.retain(|t| t != tag);
    }
}

fn selection(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn keyword_matches(job: &JobPosting, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }

    let needle = keyword.to_lowercase();
    job.title.to_lowercase().contains(&needle)
        || job
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

fn company_matches(job: &JobPosting, company_name: &str) -> bool {
    company_name.is_empty() || job.company.to_lowercase().contains(&company_name.to_lowercase())
}

/// 年齢レンジの重なり判定。求人側に年齢情報がなければ常に一致
///
/// 片側だけ欠けている場合はその側を無制限として扱う。
fn age_matches(job: &JobPosting, range: Option<IntRange>) -> bool {
    let Some(range) = range else {
        return true;
    };

    match (job.age_min, job.age_max) {
        (None, None) => true,
        (min, max) => range.overlaps(
            min.map_or(i64::MIN, i64::from),
            max.map_or(i64::MAX, i64::from),
        ),
    }
}

fn salary_matches(job: &JobPosting, range: Option<IntRange>) -> bool {
    range.map_or(true, |range| range.overlaps(job.salary_min, job.salary_max))
}

/// 求人が検索条件をすべて満たすか（AND 条件）
///
/// 純粋関数。ソートやページングは呼び出し側で行う。
pub fn matches(job: &JobPosting, criteria: &FilterCriteria) -> bool {
    keyword_matches(job, &criteria.keyword)
        && company_matches(job, &criteria.company_name)
        && selection(&criteria.job_category).map_or(true, |c| job.job_category == c)
        && selection(&criteria.industry).map_or(true, |i| job.industry == i)
        && location_matches(&job.location, selection(&criteria.location))
        && age_matches(job, criteria.age_range)
        && salary_matches(job, criteria.salary_range)
        && any_tag_selected(&job.tags, &criteria.selected_tags)
        && criteria.status_filter.accepts(job.status)
}

/// コレクション全体に `matches` を適用する（元の並び順を保持）
pub fn filter_jobs<'a>(jobs: &'a [JobPosting], criteria: &FilterCriteria) -> Vec<&'a JobPosting> {
    jobs.iter().filter(|job| matches(job, criteria)).collect()
}
