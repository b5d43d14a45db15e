//! Confidence scoring for extracted transactions.

/// Score reported by every extractor that found all of its mandatory fields.
pub const FULL_CONFIDENCE: u8 = 100;

/// Which fields an extraction found, as input to the weighted score.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldPresence {
    pub date: bool,
    pub description: bool,
    pub amount: bool,
    pub balance: bool,
    /// Length of the extracted description in characters.
    pub description_len: usize,
}

/// Weighted 0-100 confidence derived from field presence.
///
/// Date, description, and amount contribute 30 points each and a balance
/// 10, with a penalty for very short descriptions. No extractor currently
/// calls this - every successful extraction reports [`FULL_CONFIDENCE`] -
/// but the formula stays callable so a future format can opt into graded
/// scoring without changing the established contract of the existing ones.
pub fn weighted_score(fields: &FieldPresence) -> u8 {
    let mut score: i32 = 0;

    if fields.date {
        score += 30;
    }
    if fields.description {
        score += 30;
    }
    if fields.amount {
        score += 30;
    }
    if fields.balance {
        score += 10;
    }

    if fields.description_len < 5 {
        score -= 15;
    } else if fields.description_len < 10 {
        score -= 5;
    }

    score.clamp(0, 100) as u8
}
