/// リモート選択時は勤務地に関係なく常に一致させる
pub const REMOTE_LOCATION: &str = "Remote";

/// 勤務地フィルタ判定
///
/// 選択値が未設定/空なら制約なし。`REMOTE_LOCATION` は部分一致ではなく特例として扱う。
/// 求人側の勤務地に "Remote" を含むかどうかは判定に影響しない。
pub fn location_matches(job_location: &str, selected: Option<&str>) -> bool {
    match selected {
        None | Some("") => true,
        Some(REMOTE_LOCATION) => true,
        Some(selected) => job_location.contains(selected),
    }
}
