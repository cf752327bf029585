use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    config::BoardConfig,
    listing::{paginate, Page},
    matching::filter::{filter_jobs, FilterCriteria},
    recommend::{recommend, Recommendations},
    source::{JobSource, SourceError},
    CandidateProfile, JobId, JobPosting, JobStatus,
};

/// ステータス別件数（検索サイドバー・採用担当ダッシュボード用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub active: usize,
    pub closed: usize,
    pub draft: usize,
}

impl StatusCounts {
    pub fn from_jobs(jobs: &[JobPosting]) -> Self {
        jobs.iter().fold(Self::default(), |mut counts, job| {
            counts.all += 1;
            match job.status {
                JobStatus::Active => counts.active += 1,
                JobStatus::Closed => counts.closed += 1,
                JobStatus::Draft => counts.draft += 1,
            }
            counts
        })
    }
}

/// 求人一覧・お気に入り・検索条件を保持する状態コンテナ
///
/// マッチング関数は状態を持たず、ここから渡されるスナップショットだけを読む。
#[derive(Debug, Clone)]
pub struct JobBoard {
    jobs: Vec<JobPosting>,
    criteria: FilterCriteria,
    page: usize,
    config: BoardConfig,
}

impl JobBoard {
    pub fn new(jobs: Vec<JobPosting>, config: BoardConfig) -> Self {
        Self {
            jobs,
            criteria: FilterCriteria::sidebar_defaults(),
            page: 1,
            config,
        }
    }

    pub fn from_source(source: &dyn JobSource, config: BoardConfig) -> Result<Self, SourceError> {
        let jobs = source.load_jobs()?;
        info!(source = source.name(), jobs = jobs.len(), "loaded job board");
        Ok(Self::new(jobs, config))
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// 検索条件を差し替える。条件が変わったら1ページ目に戻す
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.page = 1;
        }
        self.criteria = criteria;
    }

    /// 検索条件をその場で編集する（編集後にページをリセット）
    pub fn update_criteria(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        let mut criteria = self.criteria.clone();
        edit(&mut criteria);
        self.set_criteria(criteria);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// 検索条件で絞り込み、現在のページを切り出す
    #[instrument(skip(self), fields(page = self.page))]
    pub fn listing(&self) -> Page<&JobPosting> {
        let filtered = filter_jobs(&self.jobs, &self.criteria);
        debug!(matched = filtered.len(), total = self.jobs.len(), "filtered listing");
        paginate(filtered, self.page, self.config.page_size)
    }

    /// お気に入りを反転し、新しい値を返す。該当IDがなければ None
    #[instrument(skip(self))]
    pub fn toggle_favorite(&mut self, id: &JobId) -> Option<bool> {
        let job = self.jobs.iter_mut().find(|job| &job.id == id)?;
        job.is_favorite = !job.is_favorite;
        debug!(is_favorite = job.is_favorite, "toggled favorite");
        Some(job.is_favorite)
    }

    #[instrument(skip(self, profile))]
    pub fn recommendations(&self, profile: &CandidateProfile) -> Recommendations<'_> {
        let buckets = recommend(profile, &self.jobs, &self.config);
        debug!(
            recommended = buckets.recommended.len(),
            favorites = buckets.favorites.len(),
            recent = buckets.recent.len(),
            "bucketed recommendations"
        );
        buckets
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::from_jobs(&self.jobs)
    }
}
