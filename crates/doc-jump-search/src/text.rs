//! Query and corpus text normalization

/// Normalize a string for matching: lower-case, replace every character
/// that is not a lowercase letter, digit or whitespace with a space,
/// collapse whitespace runs and trim.
///
/// Total and deterministic; empty input yields an empty string. The output
/// is already normalized, so `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    for ch in s.chars().flat_map(char::to_lowercase) {
        let keep = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        if keep {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            // Whitespace and punctuation both collapse to a single separator
            pending_space = true;
        }
    }

    out
}

/// Tokenize a string: normalize, then split on single spaces.
///
/// An empty or whitespace/punctuation-only input yields an empty vector.
pub fn tokenize(s: &str) -> Vec<String> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized.split(' ').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips() {
        assert_eq!(normalize("Fire-Safety (v2)!"), "fire safety v2");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  lock   out \t tag  out "), "lock out tag out");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "Safety Induction",
            "  PPE & Gloves -- 100% required!  ",
            "Ünïcode Çhars",
            "a\tb\nc",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("Machine Safety"), vec!["machine", "safety"]);
    }

    #[test]
    fn test_tokenize_empty_yields_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t ").is_empty());
        assert!(tokenize("?!.").is_empty());
    }
}
