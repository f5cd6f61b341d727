//! Which archive folders are old enough to delete.
//!
//! Pure decisions over folder names and a supplied "now"; no filesystem
//! access happens here.

use chrono::Datelike;
use dirlog_core::{BucketParseError, MonthBucket, distance};

use crate::store::ArchiveFolder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetentionDecision {
    /// Younger than the window. `age` is negative for future buckets.
    Keep { bucket: MonthBucket, age: i64 },
    Expire { bucket: MonthBucket, age: i64 },
    /// Not a bucket name; never deleted.
    Unparseable(BucketParseError),
}

impl RetentionDecision {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expire { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    months_to_keep: u32,
}

impl RetentionPolicy {
    pub fn new(months_to_keep: u32) -> Self {
        Self { months_to_keep }
    }

    pub fn months_to_keep(&self) -> u32 {
        self.months_to_keep
    }

    /// A bucket expires once `months_to_keep` month boundaries have passed
    /// since it, measured against `current`.
    pub fn classify(&self, name: &str, current: MonthBucket) -> RetentionDecision {
        match MonthBucket::parse(name) {
            Ok(bucket) => {
                let age = distance(bucket, current);
                if age >= i64::from(self.months_to_keep) {
                    RetentionDecision::Expire { bucket, age }
                } else {
                    RetentionDecision::Keep { bucket, age }
                }
            }
            Err(e) => RetentionDecision::Unparseable(e),
        }
    }

    pub fn expired_folders(
        &self,
        folders: &[ArchiveFolder],
        now: &impl Datelike,
    ) -> Vec<ArchiveFolder> {
        let current = MonthBucket::current(now);
        folders
            .iter()
            .filter(|folder| self.classify(&folder.name, current).is_expired())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::path::PathBuf;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn folders(names: &[&str]) -> Vec<ArchiveFolder> {
        names
            .iter()
            .map(|name| ArchiveFolder {
                name: name.to_string(),
                path: PathBuf::from("/archive").join(name),
            })
            .collect()
    }

    fn expired_names(policy: RetentionPolicy, names: &[&str], now: NaiveDateTime) -> Vec<String> {
        policy
            .expired_folders(&folders(names), &now)
            .into_iter()
            .map(|f| f.name)
            .collect()
    }

    #[test]
    fn test_boundary_at_exactly_months_to_keep() {
        let expired = expired_names(
            RetentionPolicy::new(3),
            &["December_2024", "January_2025", "March_2025"],
            at(2025, 3, 15),
        );
        assert_eq!(expired, vec!["December_2024"]);
    }

    #[test]
    fn test_age_ignores_day_of_month() {
        let policy = RetentionPolicy::new(1);
        assert!(expired_names(policy, &["January_2025"], at(2025, 1, 31)).is_empty());
        assert_eq!(
            expired_names(policy, &["January_2025"], at(2025, 2, 1)),
            vec!["January_2025"]
        );
    }

    #[test]
    fn test_malformed_names_are_never_expired() {
        let expired = expired_names(
            RetentionPolicy::new(1),
            &["notamonth_name", "March_25AB", "March_1999_copy", "backup"],
            at(2025, 3, 1),
        );
        assert!(expired.is_empty());
    }

    #[test]
    fn test_future_bucket_is_kept() {
        let policy = RetentionPolicy::new(3);
        let current = MonthBucket::new(2025, 3).unwrap();
        assert_eq!(
            policy.classify("June_2026", current),
            RetentionDecision::Keep {
                bucket: MonthBucket::new(2026, 6).unwrap(),
                age: -15,
            }
        );
    }

    #[test]
    fn test_yearly_window() {
        let expired = expired_names(
            RetentionPolicy::new(12),
            &["March_2024", "April_2024", "February_2024"],
            at(2025, 3, 1),
        );
        assert_eq!(expired, vec!["March_2024", "February_2024"]);
    }

    #[test]
    fn test_classify_reports_parse_error() {
        let current = MonthBucket::new(2025, 3).unwrap();
        let decision = RetentionPolicy::new(3).classify("notamonth_name", current);
        assert!(matches!(
            decision,
            RetentionDecision::Unparseable(BucketParseError::UnknownMonth { .. })
        ));
        assert!(!decision.is_expired());
    }
}
