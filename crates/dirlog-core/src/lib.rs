//! Shared types for dirlog: month buckets, parse errors and CLI enums.

pub mod bucket;
pub mod error;
pub mod types;

pub use bucket::{BUCKET_SEPARATOR, MonthBucket, distance};
pub use error::BucketParseError;
pub use types::{ListingScope, OutputFormat, SnapshotNaming};
