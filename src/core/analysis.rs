// src/core/analysis.rs — Parse sentiment and qualification replies

use serde::Serialize;

use crate::util::truncate_chars;

/// Score recorded when the reply is not a bare 1-5 integer.
pub const NEUTRAL_SENTIMENT: u8 = 3;

/// Max characters of reason written to the decisions log.
pub const MAX_REASON_CHARS: usize = 100;

const QUALIFIED: &str = "QUALIFIED";
const NOT_QUALIFIED: &str = "NOT_QUALIFIED";
const NOT_PREFIX: &str = "NOT_";

/// Parse a sentiment reply. Anything that is not an integer in 1..=5 is neutral.
pub fn parse_sentiment(reply: &str) -> u8 {
    match reply.trim().parse::<i64>() {
        Ok(n) if (1..=5).contains(&n) => n as u8,
        _ => NEUTRAL_SENTIMENT,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub qualified: bool,
    /// Reply with the verdict token removed, trimmed and truncated.
    pub reason: String,
}

/// Parse a qualification reply.
///
/// A standalone `QUALIFIED` token anywhere wins, so a reply carrying both
/// `NOT_QUALIFIED` and `QUALIFIED` is recorded as qualified. A reply with
/// neither token is not qualified.
pub fn parse_decision(reply: &str) -> Decision {
    let upper = reply.to_uppercase();
    let qualified = has_standalone_qualified(&upper);

    let token = if qualified { QUALIFIED } else { NOT_QUALIFIED };
    let stripped = reply.replace(token, "");
    let reason = truncate_chars(stripped.trim(), MAX_REASON_CHARS).to_string();

    Decision { qualified, reason }
}

/// True if some occurrence of `QUALIFIED` is not the tail of `NOT_QUALIFIED`.
fn has_standalone_qualified(upper: &str) -> bool {
    upper
        .match_indices(QUALIFIED)
        .any(|(idx, _)| !upper[..idx].ends_with(NOT_PREFIX))
}
