use crate::CandidateProfile;

const COMPLETENESS_MAX_POINTS: u32 = 10;

/// 空文字でなければ入力済み（空白だけでも数える）
fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// プロフィール完成度（%）
///
/// 氏名・メール・電話・所在地・職種・自己紹介が各1点、スキル2点、希望職種・希望業界が各1点の計10点。
pub fn profile_completeness(profile: &CandidateProfile) -> u8 {
    let personal = [
        &profile.name,
        &profile.email,
        &profile.phone,
        &profile.location,
        &profile.job_title,
        &profile.bio,
    ];

    let mut points = personal.iter().filter(|v| filled(v)).count() as u32;
    if !profile.skills.is_empty() {
        points += 2;
    }
    if !profile.desired_job_categories.is_empty() {
        points += 1;
    }
    if !profile.desired_industries.is_empty() {
        points += 1;
    }

    (f64::from(points) / f64::from(COMPLETENESS_MAX_POINTS) * 100.0).round() as u8
}
