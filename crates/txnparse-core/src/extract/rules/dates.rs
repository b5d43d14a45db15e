//! Date normalization for the supported statement date shapes.

use chrono::NaiveDate;

use super::patterns::{DATE_DAY_MONTH_NAME, DATE_ISO_YMD, DATE_SLASH_DMY};
use crate::error::NormalizeError;

/// Standard three-letter month abbreviations, January first.
const MONTH_ABBREVS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Parse a date substring in one of the three supported shapes.
///
/// Shapes are tried in priority order: `D Month YYYY`, then `D/M/YYYY`,
/// then `YYYY-MM-DD`. Slash dates are always read day-first; there is no
/// month/day swap heuristic. Out-of-range components (month 13, day 32)
/// are errors, never rolled over.
pub fn parse_date(input: &str) -> Result<NaiveDate, NormalizeError> {
    let err = || NormalizeError::Date(input.to_string());

    if let Some(caps) = DATE_DAY_MONTH_NAME.captures(input) {
        let day: u32 = caps[1].parse().map_err(|_| err())?;
        let month = month_from_token(&caps[2]).ok_or_else(err)?;
        let year: i32 = caps[3].parse().map_err(|_| err())?;
        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err);
    }

    if let Some(caps) = DATE_SLASH_DMY.captures(input) {
        let day: u32 = caps[1].parse().map_err(|_| err())?;
        let month: u32 = caps[2].parse().map_err(|_| err())?;
        let year: i32 = caps[3].parse().map_err(|_| err())?;
        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err);
    }

    if let Some(caps) = DATE_ISO_YMD.captures(input) {
        let year: i32 = caps[1].parse().map_err(|_| err())?;
        let month: u32 = caps[2].parse().map_err(|_| err())?;
        let day: u32 = caps[3].parse().map_err(|_| err())?;
        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err);
    }

    Err(err())
}

/// Resolve a month-name token by its first three letters, case-insensitively.
fn month_from_token(token: &str) -> Option<u32> {
    let lower = token.to_lowercase();
    let prefix = lower.get(..3)?;
    MONTH_ABBREVS
        .iter()
        .position(|abbrev| *abbrev == prefix)
        .map(|idx| idx as u32 + 1)
}
