use std::env;

use serde::Serialize;

/// おすすめタブに載せる最低スコア
pub const RECOMMEND_THRESHOLD: u8 = 60;
/// 「高マッチ」バッジを出すスコア（表示専用、絞り込みには使わない）
pub const HIGH_MATCH_THRESHOLD: u8 = 80;

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardConfig {
    /// 一覧1ページあたりの件数
    pub page_size: usize,
    /// 新着タブの最大件数
    pub recent_limit: usize,
    pub recommend_threshold: u8,
    pub high_match_threshold: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            recent_limit: DEFAULT_RECENT_LIMIT,
            recommend_threshold: RECOMMEND_THRESHOLD,
            high_match_threshold: HIGH_MATCH_THRESHOLD,
        }
    }
}

impl BoardConfig {
    /// `JB_PAGE_SIZE` / `JB_RECENT_LIMIT` で件数を上書きする。閾値は固定
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &'static str| -> Result<Option<usize>, ConfigError> {
            lookup(name)
                .map(|raw| parse_positive(name, &raw))
                .transpose()
        };

        let config = Self {
            page_size: read("JB_PAGE_SIZE")?.unwrap_or(DEFAULT_PAGE_SIZE),
            recent_limit: read("JB_RECENT_LIMIT")?.unwrap_or(DEFAULT_RECENT_LIMIT),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, ConfigError> {
        self.page_size = page_size;
        self.validate()?;
        Ok(self)
    }

    pub fn with_recent_limit(mut self, recent_limit: usize) -> Result<Self, ConfigError> {
        self.recent_limit = recent_limit;
        self.validate()?;
        Ok(self)
    }

    /// 件数はどちらも 1 以上
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("page_size", self.page_size),
            ("recent_limit", self.recent_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_listing_page() {
        let config = BoardConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.recent_limit, 10);
        assert_eq!(config.recommend_threshold, 60);
        assert_eq!(config.high_match_threshold, 80);
    }

    #[test]
    fn parses_positive_values_only() {
        assert_eq!(parse_positive("JB_PAGE_SIZE", " 12 "), Ok(12));
        assert!(parse_positive("JB_PAGE_SIZE", "0").is_err());
        assert_eq!(
            parse_positive("JB_PAGE_SIZE", "six"),
            Err(ConfigError::InvalidValue {
                name: "JB_PAGE_SIZE",
                value: "six".into(),
            })
        );
    }

    #[test]
    fn zero_recent_limit_is_rejected_on_every_path() {
        let from_setter = BoardConfig::default().with_recent_limit(0);
        let from_vars = BoardConfig::from_lookup(|name| {
            (name == "JB_RECENT_LIMIT").then(|| "0".to_string())
        });

        assert!(from_setter.is_err());
        assert!(from_vars.is_err());

        let hand_built = BoardConfig {
            recent_limit: 0,
            ..BoardConfig::default()
        };
        assert_eq!(
            hand_built.with_page_size(6),
            Err(ConfigError::InvalidValue {
                name: "recent_limit",
                value: "0".into(),
            })
        );
    }

    #[test]
    fn lookup_overrides_counts_and_keeps_thresholds() {
        let config = BoardConfig::from_lookup(|name| match name {
            "JB_PAGE_SIZE" => Some("12".into()),
            "JB_RECENT_LIMIT" => Some("4".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.page_size, 12);
        assert_eq!(config.recent_limit, 4);
        assert_eq!(config.recommend_threshold, RECOMMEND_THRESHOLD);

        let untouched = BoardConfig::from_lookup(|_| None).unwrap();
        assert_eq!(untouched, BoardConfig::default());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(BoardConfig::default().with_page_size(0).is_err());
        assert_eq!(
            BoardConfig::default().with_page_size(3).unwrap().page_size,
            3
        );
    }
}
