/// マッチスコアの配点（合計100点、正規化なし）
/// → スキル重視、職種・業界は二値、年収は区間が重なれば満点
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 40.0,
    job_category: 25.0,
    industry: 20.0,
    salary: 15.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub job_category: f64,
    pub industry: f64,
    pub salary: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.job_category + self.industry + self.salary
    }
}
