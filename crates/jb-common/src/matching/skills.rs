use crate::CandidateProfile;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    pub matched_skills: Vec<String>,
    pub total_tags: usize,
    pub match_percentage: f64,
}

impl SkillMatchResult {
    pub fn matched_count(&self) -> usize {
        self.matched_skills.len()
    }
}

/// 求人タグのうちプロフィールのスキルに含まれるものを数える
///
/// 完全一致（大文字小文字を区別）。タグが空なら一致率は 0（ゼロ除算しない）。
/// matched_skills は求人タグの並び順を保つ。
pub fn check_job_skills(job_tags: &[String], profile: &CandidateProfile) -> SkillMatchResult {
    let matched_skills: Vec<String> = job_tags
        .iter()
        .filter(|tag| profile.has_skill(tag))
        .cloned()
        .collect();

    let match_percentage = if job_tags.is_empty() {
        0.0
    } else {
        matched_skills.len() as f64 / job_tags.len() as f64
    };

    SkillMatchResult {
        matched_skills,
        total_tags: job_tags.len(),
        match_percentage,
    }
}

/// 選択タグのいずれかが求人タグに含まれるか（OR 条件）。選択なしなら制約なし
pub fn any_tag_selected(job_tags: &[String], selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|tag| job_tags.contains(tag))
}
