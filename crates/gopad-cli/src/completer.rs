use gopad_lsp_core::{CompletionCandidate, HoverResult};
use serde::Serialize;

/// Serializable view of a core completion candidate
#[derive(Clone, Debug, Serialize)]
pub struct CompletionEntry {
    pub label: String,
    pub kind: String,
    pub detail: Option<String>,
    pub insert_text: String,
    pub is_snippet: bool,
    pub start: usize,
    pub end: usize,
}

impl From<&CompletionCandidate> for CompletionEntry {
    fn from(candidate: &CompletionCandidate) -> Self {
        CompletionEntry {
            label: candidate.label.clone(),
            kind: candidate.kind.as_str().to_string(),
            detail: candidate.detail.clone(),
            insert_text: candidate.insert_text.clone(),
            is_snippet: candidate.is_snippet(),
            start: candidate.range.start,
            end: candidate.range.end,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct HoverEntry {
    pub contents: Vec<String>,
}

impl From<HoverResult> for HoverEntry {
    fn from(result: HoverResult) -> Self {
        HoverEntry {
            contents: result.contents,
        }
    }
}

const MAX_RANKED: usize = 15;

/// Re-rank candidates against the partial word the user typed, the way an
/// editor would. An empty word keeps the engine's order untouched.
pub fn rank<'a>(candidates: &'a [CompletionCandidate], word: &str) -> Vec<&'a CompletionCandidate> {
    if word.is_empty() {
        return candidates.iter().collect();
    }

    let word_lower = word.to_lowercase();
    let mut matches: Vec<(f64, &CompletionCandidate)> = candidates
        .iter()
        .filter_map(|item| {
            let label_lower = item.label.to_lowercase();
            // Prefix match gets highest priority
            if label_lower.starts_with(&word_lower) {
                Some((1.0, item))
            } else {
                // Fuzzy match for typos
                let score = strsim::jaro_winkler(&label_lower, &word_lower);
                if score > 0.7 {
                    Some((score * 0.8, item))
                } else {
                    None
                }
            }
        })
        .collect();

    // Stable, so ties keep registry order
    matches.sort_by(|a, b| b.0.total_cmp(&a.0));

    matches
        .into_iter()
        .take(MAX_RANKED)
        .map(|(_, c)| c)
        .collect()
}

/// The text a candidate's range covers on `line`
pub fn typed_word(line: &str, candidates: &[CompletionCandidate]) -> String {
    candidates
        .first()
        .map(|c| {
            line.chars()
                .skip(c.range.start)
                .take(c.range.end - c.range.start)
                .collect()
        })
        .unwrap_or_default()
}
