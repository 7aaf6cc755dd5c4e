//! Translation completion per locale.

use crate::api::{self, LocaleStats, TranslationApi};
use crate::error::Result;

/// Completion of one locale
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleStatus {
    pub locale_code: String,
    /// Percent translated, rounded to two decimals
    pub percent: f64,
    /// The locale has no strings at all
    pub empty: bool,
}

impl LocaleStatus {
    pub fn from_stats(locale_code: String, stats: LocaleStats) -> Self {
        Self {
            locale_code,
            percent: percent_translated(stats),
            empty: stats.count_strings == 0,
        }
    }

    /// Percentage formatted with two decimals, e.g. `75.00`
    pub fn percent_display(&self) -> String {
        format!("{:.2}", self.percent)
    }
}

/// `(count_strings - count_strings_to_translate) * 100 / count_strings`,
/// rounded to two decimals. A locale without strings is fully translated.
pub fn percent_translated(stats: LocaleStats) -> f64 {
    if stats.count_strings == 0 {
        return 100.0;
    }
    let translated = stats
        .count_strings
        .saturating_sub(stats.count_strings_to_translate);
    let percent = translated as f64 * 100.0 / stats.count_strings as f64;
    (percent * 100.0).round() / 100.0
}

/// Fetch statistics and compute completion for every locale, in response order.
pub async fn project_status(api: &dyn TranslationApi) -> Result<Vec<LocaleStatus>> {
    let stats = api::fetch_stats(api).await?;
    Ok(stats
        .into_iter()
        .map(|(locale, stats)| LocaleStatus::from_stats(locale, stats))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(count_strings: u64, count_strings_to_translate: u64) -> LocaleStats {
        LocaleStats {
            count_strings,
            count_strings_to_translate,
        }
    }

    #[test]
    fn test_percent_translated() {
        assert_eq!(percent_translated(stats(100, 25)), 75.0);
        assert_eq!(percent_translated(stats(100, 0)), 100.0);
        assert_eq!(percent_translated(stats(100, 100)), 0.0);
    }

    #[test]
    fn test_percent_rounds_to_two_decimals() {
        assert_eq!(percent_translated(stats(3, 1)), 66.67);
        assert_eq!(percent_translated(stats(7, 2)), 71.43);
    }

    #[test]
    fn test_zero_strings_is_complete() {
        let status = LocaleStatus::from_stats("it".into(), stats(0, 0));
        assert_eq!(status.percent, 100.0);
        assert!(status.empty);
    }

    #[test]
    fn test_more_to_translate_than_strings_clamps() {
        assert_eq!(percent_translated(stats(10, 12)), 0.0);
    }

    #[test]
    fn test_percent_display() {
        let status = LocaleStatus::from_stats("en".into(), stats(100, 25));
        assert_eq!(status.percent_display(), "75.00");
    }
}
