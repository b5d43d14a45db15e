//! Shared normalizers and the compiled pattern set.

pub mod amounts;
pub mod confidence;
pub mod dates;
pub mod patterns;

pub use amounts::{parse_amount, signed_by_keyword};
pub use confidence::{weighted_score, FieldPresence, FULL_CONFIDENCE};
pub use dates::parse_date;
