use chrono::NaiveDate;

pub const NIGHTLY_TAG: &str = "nightly";

/// Returns everything before the first hyphen, or the whole string if there is none.
pub fn base_version(version: &str) -> &str {
    version
        .split_once('-')
        .map(|(base, _)| base)
        .unwrap_or(version)
}

/// Builds `{base}-nightly.{YYYYMMDD}`, dropping any existing pre-release suffix.
pub fn nightly_version(version: &str, date: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        base_version(version),
        NIGHTLY_TAG,
        date.format("%Y%m%d")
    )
}
