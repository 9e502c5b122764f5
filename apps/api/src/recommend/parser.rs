//! Parsing of the advisor model's free-text reply into structured records.
//!
//! The model is asked (see `llm_client::prompts`) to answer in repeated
//! `Domain:` blocks, each with a `Reason:` line and `-` suggestion lines.
//! Models drift, so the parser is deliberately lenient: it keys on the
//! literal markers and ignores anything it does not recognize. It never
//! fails; a reply with no `Domain:` marker at all parses to an empty list.

use serde::{Deserialize, Serialize};

/// One recommended internship domain, as parsed from the model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain: String,
    /// Empty when the block carried no `Reason:` line.
    pub reason: String,
    /// Empty when the block carried no `-` suggestion lines.
    pub improvements: Vec<String>,
}

/// Parses a raw model reply into ordered [`Recommendation`]s.
///
/// The reply is split on the literal `Domain:` marker; text before the first
/// marker is discarded. Within each fragment, the first non-empty line
/// (trimmed) is the domain. The remaining non-empty lines are scanned in
/// order: a line starting with `Reason:` sets the reason (last one wins;
/// the check runs on the line as-is, so an indented `  Reason:` does not
/// count), and a line whose trimmed form starts with `-` contributes an
/// improvement with that single dash stripped. Everything else is ignored.
///
/// Every fragment produces a record, even a degenerate one, so the output
/// length always equals the number of `Domain:` markers in the input.
pub fn parse_recommendations(reply: &str) -> Vec<Recommendation> {
    let mut records = Vec::new();

    let mut fragments = reply.split("Domain:");
    // Preamble before the first marker (or the whole reply when there is
    // no marker) is not a record.
    fragments.next();

    for fragment in fragments {
        let lines: Vec<&str> = fragment
            .trim()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        let domain = lines
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default();

        let mut reason = String::new();
        let mut improvements = Vec::new();

        for line in lines.iter().skip(1) {
            if let Some(rest) = line.strip_prefix("Reason:") {
                reason = rest.trim().to_string();
            } else if let Some(rest) = line.trim().strip_prefix('-') {
                improvements.push(rest.trim().to_string());
            }
        }

        records.push(Recommendation {
            domain,
            reason,
            improvements,
        });
    }

    records
}
