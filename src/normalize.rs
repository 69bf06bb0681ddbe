use std::sync::LazyLock;

use regex::Regex;

/// Body text Reddit substitutes for removed comments.
pub const DELETED_SENTINEL: &str = "[deleted]";

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\B#\S+").expect("hashtag regex"));
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+").expect("url regex"));
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word regex"));

/// Clean a raw post body into the canonical matching form, or `None` when the
/// post should be dropped from the corpus (deleted sentinel, empty result).
///
/// Hashtag and URL stripping run before the word-character collapse; the
/// collapse would otherwise keep their inner tokens. `@handle` mentions lose
/// their `@` in the collapse and survive as plain tokens, matching the
/// reference behavior.
pub fn normalize(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    if lowered == DELETED_SENTINEL {
        return None;
    }

    let stripped = HASHTAG.replace_all(&lowered, "");
    let stripped = URL.replace_all(&stripped, "");

    let cleaned = WORD
        .find_iter(&stripped)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
