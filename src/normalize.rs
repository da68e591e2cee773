//! Merchant display-name cleanup.
//!
//! Statement text extraction drops spacing in merchant fields, producing
//! merges like `AmazonIndia` or `MissRUCHIKAPANDE`. This module turns
//! those into stable display names. Pure string work, no external state,
//! deterministic: the analytics engine groups merchants by the output of
//! [`normalize_merchant`], so the same raw text must always normalize the
//! same way.

/// Honorific/title tokens kept as standalone words.
const HONORIFICS: &[&str] = &["Mr", "Mrs", "Ms", "Miss", "Dr", "Shri", "Smt"];

/// Characters treated as formatting artifacts rather than name content.
fn is_artifact(c: char) -> bool {
    c.is_whitespace() || matches!(c, '_' | '*' | '|' | '·' | '•')
}

/// Separator punctuation trimmed from the ends of the final name.
fn is_edge_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | ',' | '.' | ':' | ';')
}

/// Clean up a raw merchant string into a display name.
///
/// Steps: insert a word boundary before any uppercase letter immediately
/// preceded by a lowercase letter, collapse artifact runs to single
/// spaces, trim edge separators, and keep recognized honorifics as
/// standalone words. An honorific followed by one unbroken all-caps run
/// is a concatenated person name and gets a word split as well:
///
/// ```
/// use statement_analyser::normalize::normalize_merchant;
///
/// assert_eq!(normalize_merchant("MissRUCHIKAPANDE"), "Miss RUCHIKA PANDE");
/// assert_eq!(normalize_merchant("AmazonIndia"), "Amazon India");
/// ```
pub fn normalize_merchant(raw: &str) -> String {
    // Case-transition boundaries.
    let mut spaced = String::with_capacity(raw.len() + 8);
    let mut prev: Option<char> = None;
    for ch in raw.chars() {
        if let Some(p) = prev {
            if ch.is_uppercase() && p.is_lowercase() {
                spaced.push(' ');
            }
        }
        spaced.push(if is_artifact(ch) { ' ' } else { ch });
        prev = Some(ch);
    }

    let trimmed = spaced
        .trim_matches(is_edge_separator)
        .split_whitespace()
        .collect::<Vec<_>>();

    let mut words: Vec<String> = Vec::with_capacity(trimmed.len() + 1);
    for (i, tok) in trimmed.iter().enumerate() {
        let bare = tok.trim_end_matches('.');
        let after_honorific = i > 0
            && HONORIFICS
                .iter()
                .any(|h| trimmed[i - 1].trim_end_matches('.') == *h);
        if after_honorific && is_caps_run(bare) {
            split_caps_run(bare, &mut words);
        } else if HONORIFICS.contains(&bare) {
            words.push(bare.to_string());
        } else {
            words.push((*tok).to_string());
        }
    }

    words.join(" ")
}

/// True for an unbroken uppercase-alphabetic token long enough to hold
/// two name words.
fn is_caps_run(tok: &str) -> bool {
    tok.len() >= 8 && tok.chars().all(|c| c.is_ascii_uppercase())
}

/// Split a concatenated all-caps person name into words.
///
/// An all-caps run carries no case boundary, so the split keys off the
/// trailing `A` that ends most Indian given names: break after an interior
/// `A` when both halves are at least four letters (RUCHIKA|PANDE,
/// PRIYA|SHARMA). Runs with no such point are kept whole.
fn split_caps_run(run: &str, out: &mut Vec<String>) {
    let bytes = run.as_bytes();
    for i in 4..=bytes.len().saturating_sub(4) {
        if bytes[i - 1] == b'A' {
            out.push(run[..i].to_string());
            let rest = &run[i..];
            if is_caps_run(rest) {
                split_caps_run(rest, out);
            } else {
                out.push(rest.to_string());
            }
            return;
        }
    }
    out.push(run.to_string());
}
