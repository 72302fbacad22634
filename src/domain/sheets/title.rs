use std::{collections::BTreeSet, fmt::Formatter, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;

/// Date format used as the base of every sheet title, e.g. `18 Oct 2026`.
pub const TITLE_DATE_FORMAT: &str = "%d %b %Y";

static SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)$").expect("suffix regex should compile"));

/// Title of a dated sheet: `base` alone when `suffix` is 0, `base (suffix)` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTitle {
    base: String,
    suffix: u32,
}

impl SheetTitle {
    pub fn new(base: impl Into<String>, suffix: u32) -> Self {
        SheetTitle {
            base: base.into(),
            suffix,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        SheetTitle::new(date.format(TITLE_DATE_FORMAT).to_string(), 0)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn suffix(&self) -> u32 {
        self.suffix
    }

    /// A1 reference of the sheet's first cell, e.g. `'18 Oct 2026 (1)'!A1`.
    pub fn top_left_range(&self) -> String {
        format!("'{}'!A1", self.to_string().replace('\'', "''"))
    }

    /// Suffix carried by `title` if it belongs to this title's day.
    ///
    /// `Some(0)` for the bare base title, `Some(n)` when the remainder ends in
    /// `(n)` (so `base-draft (9)` counts as 9), `None` for anything else.
    pub fn same_day_suffix(&self, title: &str) -> Option<u32> {
        let remainder = title.strip_prefix(self.base.as_str())?;
        if remainder.is_empty() {
            return Some(0);
        }

        SUFFIX_REGEX
            .captures(remainder)
            .and_then(|captures| captures.get(1))
            .and_then(|n| n.as_str().parse::<u32>().ok())
    }
}

impl std::fmt::Display for SheetTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.suffix {
            0 => write!(f, "{}", self.base),
            n => write!(f, "{} ({})", self.base, n),
        }
    }
}

/// Picks a title for a new sheet created on `today` that does not collide
/// with any same-day title in `existing_titles`.
pub fn allocate<I, S>(today: NaiveDate, existing_titles: I) -> SheetTitle
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let base = SheetTitle::for_date(today);

    let taken = existing_titles
        .into_iter()
        .filter_map(|title| {
            let title = title.as_ref();
            let suffix = base.same_day_suffix(title);
            if suffix.is_none() && title.starts_with(base.base()) {
                log::debug!("Ignoring title '{}': not a '{}' duplicate", title, base);
            }
            suffix
        })
        .collect::<BTreeSet<u32>>();

    let Some(&max) = taken.last() else {
        return base;
    };

    // Past u32::MAX, fall back to the lowest free suffix.
    let suffix = max
        .checked_add(1)
        .or_else(|| (1..u32::MAX).find(|n| !taken.contains(n)))
        .unwrap_or(u32::MAX);

    SheetTitle::new(base.base, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_base_title_format() {
        assert_eq!(SheetTitle::for_date(today()).to_string(), "18 Oct 2026");
        let early = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(SheetTitle::for_date(early).to_string(), "05 Mar 2024");
    }

    #[test]
    fn test_no_existing_titles() {
        let title = allocate(today(), Vec::<String>::new());
        assert_eq!(title.to_string(), "18 Oct 2026");
        assert_eq!(title.suffix(), 0);
    }

    #[test]
    fn test_unrelated_titles_keep_base() {
        let title = allocate(today(), ["Sheet1", "17 Oct 2026", "17 Oct 2026 (4)"]);
        assert_eq!(title.to_string(), "18 Oct 2026");
    }

    #[test]
    fn test_base_taken() {
        let title = allocate(today(), ["Sheet1", "18 Oct 2026"]);
        assert_eq!(title.to_string(), "18 Oct 2026 (1)");
    }

    #[test]
    fn test_increments_past_highest_suffix() {
        let title = allocate(today(), ["18 Oct 2026", "18 Oct 2026 (1)", "18 Oct 2026 (2)"]);
        assert_eq!(title.to_string(), "18 Oct 2026 (3)");
    }

    #[test]
    fn test_gaps_use_max() {
        let title = allocate(today(), ["18 Oct 2026 (7)", "18 Oct 2026 (2)"]);
        assert_eq!(title.to_string(), "18 Oct 2026 (8)");
    }

    #[test]
    fn test_ties_on_max() {
        let title = allocate(today(), ["18 Oct 2026 (2)", "18 Oct 2026 (2)", "18 Oct 2026"]);
        assert_eq!(title.to_string(), "18 Oct 2026 (3)");
    }

    #[test]
    fn test_malformed_suffix_is_ignored() {
        let title = allocate(today(), ["18 Oct 2026-draft"]);
        assert_eq!(title.to_string(), "18 Oct 2026");

        let title = allocate(today(), ["18 Oct 2026", "18 Oct 2026-draft", "18 Oct 2026 (x)"]);
        assert_eq!(title.to_string(), "18 Oct 2026 (1)");

        let title = allocate(today(), ["18 Oct 2026 (1)", "18 Oct 2026 (3) old"]);
        assert_eq!(title.to_string(), "18 Oct 2026 (2)");
    }

    #[test]
    fn test_trailing_suffix_after_other_text_counts() {
        let title = allocate(today(), ["18 Oct 2026 (1)", "18 Oct 2026-draft (9)"]);
        assert_eq!(title.to_string(), "18 Oct 2026 (10)");
    }

    #[test]
    fn test_suffix_overflowing_u32_is_ignored() {
        let title = allocate(today(), ["18 Oct 2026 (99999999999)"]);
        assert_eq!(title.to_string(), "18 Oct 2026");
    }

    #[test]
    fn test_max_suffix_does_not_collide() {
        let title = allocate(today(), ["18 Oct 2026 (4294967295)"]);
        assert_eq!(title.to_string(), "18 Oct 2026 (1)");

        let title = allocate(
            today(),
            ["18 Oct 2026", "18 Oct 2026 (1)", "18 Oct 2026 (4294967295)"],
        );
        assert_eq!(title.to_string(), "18 Oct 2026 (2)");
    }

    #[test]
    fn test_same_day_suffix() {
        let base = SheetTitle::for_date(today());
        assert_eq!(base.same_day_suffix("18 Oct 2026"), Some(0));
        assert_eq!(base.same_day_suffix("18 Oct 2026 (12)"), Some(12));
        assert_eq!(base.same_day_suffix("18 Oct 2026(3)"), Some(3));
        assert_eq!(base.same_day_suffix("18 Oct 2026-draft (9)"), Some(9));
        assert_eq!(base.same_day_suffix("18 Oct 2026 (3) old"), None);
        assert_eq!(base.same_day_suffix("18 Oct 2026-draft"), None);
        assert_eq!(base.same_day_suffix("Sheet1"), None);
    }

    #[test]
    fn test_top_left_range() {
        assert_eq!(
            SheetTitle::new("18 Oct 2026", 1).top_left_range(),
            "'18 Oct 2026 (1)'!A1"
        );
        assert_eq!(SheetTitle::new("Bob's", 0).top_left_range(), "'Bob''s'!A1");
    }

    #[test]
    fn test_allocated_title_is_unique() {
        let existing = ["18 Oct 2026", "18 Oct 2026 (1)", "18 Oct 2026 (3)"];
        let title = allocate(today(), existing).to_string();
        assert!(!existing.contains(&title.as_str()));
    }
}
