use serde::Serialize;

use crate::{
    config::BoardConfig,
    matching::scoring::{score, MatchResult},
    CandidateProfile, JobPosting,
};

/// 求人カードに並べるタグの最大数
pub const TAG_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewTag {
    pub tag: String,
    /// プロフィールのスキルに含まれる（強調表示）
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagPreview {
    pub visible: Vec<PreviewTag>,
    /// "+N" 表示用
    pub hidden_count: usize,
}

pub fn tag_preview(job: &JobPosting, profile: &CandidateProfile) -> TagPreview {
    let visible = job
        .tags
        .iter()
        .take(TAG_PREVIEW_LIMIT)
        .map(|tag| PreviewTag {
            tag: tag.clone(),
            matched: profile.has_skill(tag),
        })
        .collect();

    TagPreview {
        visible,
        hidden_count: job.tags.len().saturating_sub(TAG_PREVIEW_LIMIT),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedJob<'a> {
    pub job: &'a JobPosting,
    pub result: MatchResult,
    pub high_match: bool,
    pub tags: TagPreview,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations<'a> {
    pub recommended: Vec<RecommendedJob<'a>>,
    pub favorites: Vec<RecommendedJob<'a>>,
    pub recent: Vec<RecommendedJob<'a>>,
}

/// 全求人をスコアリングし、おすすめ・お気に入り・新着に振り分ける
///
/// - recommended: スコアが閾値以上。スコア降順、同点は元の並び順（安定ソート）
/// - favorites: お気に入り登録済み。元の並び順
/// - recent: 掲載日の降順（安定ソート）で先頭 `recent_limit` 件
pub fn recommend<'a>(
    profile: &CandidateProfile,
    jobs: &'a [JobPosting],
    config: &BoardConfig,
) -> Recommendations<'a> {
    let scored: Vec<RecommendedJob<'a>> = jobs
        .iter()
        .map(|job| {
            let result = score(profile, job);
            RecommendedJob {
                job,
                high_match: result.score >= config.high_match_threshold,
                result,
                tags: tag_preview(job, profile),
            }
        })
        .collect();

    let mut recommended: Vec<_> = scored
        .iter()
        .filter(|entry| entry.result.score >= config.recommend_threshold)
        .cloned()
        .collect();
    recommended.sort_by(|a, b| b.result.score.cmp(&a.result.score));

    let favorites: Vec<_> = scored
        .iter()
        .filter(|entry| entry.job.is_favorite)
        .cloned()
        .collect();

    let mut recent = scored;
    recent.sort_by(|a, b| b.job.posted_date.cmp(&a.job.posted_date));
    recent.truncate(config.recent_limit);

    Recommendations {
        recommended,
        favorites,
        recent,
    }
}
