/// Why an archive folder name could not be read back as a month bucket.
///
/// Always recoverable: callers skip the folder and never delete it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BucketParseError {
    #[error("'{0}' has no '_' separator between month and year")]
    MissingSeparator(String),

    #[error("'{0}' has more than one '_' separator")]
    ExtraSeparator(String),

    #[error("'{name}': '{month}' is not a full English month name")]
    UnknownMonth { name: String, month: String },

    #[error("'{name}': year '{year}' is not a 4-digit number")]
    InvalidYear { name: String, year: String },

    #[error("Month number {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    #[error("Year {0} is outside 0..=9999")]
    YearOutOfRange(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_separator() {
        let err = BucketParseError::MissingSeparator("notes".into());
        assert_eq!(
            err.to_string(),
            "'notes' has no '_' separator between month and year"
        );
    }

    #[test]
    fn test_display_unknown_month() {
        let err = BucketParseError::UnknownMonth {
            name: "notamonth_name".into(),
            month: "notamonth".into(),
        };
        assert_eq!(
            err.to_string(),
            "'notamonth_name': 'notamonth' is not a full English month name"
        );
    }

    #[test]
    fn test_display_invalid_year() {
        let err = BucketParseError::InvalidYear {
            name: "March_25AB".into(),
            year: "25AB".into(),
        };
        assert_eq!(
            err.to_string(),
            "'March_25AB': year '25AB' is not a 4-digit number"
        );
    }

    #[test]
    fn test_display_month_out_of_range() {
        let err = BucketParseError::MonthOutOfRange(13);
        assert_eq!(err.to_string(), "Month number 13 is outside 1..=12");
    }

    #[test]
    fn test_display_year_out_of_range() {
        let err = BucketParseError::YearOutOfRange(10000);
        assert_eq!(err.to_string(), "Year 10000 is outside 0..=9999");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BucketParseError>();
    }
}
