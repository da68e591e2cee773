//! Statement document input.
//!
//! The pipeline consumes pages as a lazy, finite, non-restartable
//! sequence: any `Iterator<Item = Result<String>>` works as a page
//! source. PDF decryption and text extraction belong to an external
//! document-reading collaborator; an implementation wrapping one maps a
//! wrong or missing password to [`Error::Authentication`] and a corrupt
//! document to [`Error::UnreadableDocument`].
//!
//! [`TextPages`] is the bundled source for already-extracted text, where
//! pages are separated by form feeds (`\x0c`, the convention used by text
//! extraction tools).

use std::io::BufRead;

use crate::error::{Error, Result};

/// Form-feed page separator emitted by text extraction tools.
const PAGE_SEPARATOR: u8 = 0x0c;

/// Lazy page source over extracted statement text.
///
/// Yields one `String` per form-feed-separated chunk; a trailing empty
/// chunk is dropped. Input that is not valid UTF-8 surfaces as
/// [`Error::UnreadableDocument`].
pub struct TextPages<R: BufRead> {
    reader: R,
    done: bool,
}

impl<R: BufRead> TextPages<R> {
    pub fn new(reader: R) -> Self {
        TextPages {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for TextPages<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(PAGE_SEPARATOR, &mut buf) {
            Err(e) => {
                self.done = true;
                Some(Err(Error::Io(e)))
            }
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if buf.last() == Some(&PAGE_SEPARATOR) {
                    buf.pop();
                } else {
                    // No separator read means end of input.
                    self.done = true;
                }
                if self.done && buf.iter().all(|b| b.is_ascii_whitespace()) {
                    return None;
                }
                match String::from_utf8(buf) {
                    Ok(page) => Some(Ok(page)),
                    Err(e) => {
                        self.done = true;
                        Some(Err(Error::UnreadableDocument(e.to_string())))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_pages(input: &[u8]) -> Vec<String> {
        TextPages::new(input)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(collect_pages(b"just one page"), vec!["just one page"]);
    }

    #[test]
    fn test_form_feed_separated_pages() {
        let pages = collect_pages(b"page one\x0cpage two\x0cpage three");
        assert_eq!(pages, vec!["page one", "page two", "page three"]);
    }

    #[test]
    fn test_trailing_separator_yields_no_empty_page() {
        let pages = collect_pages(b"page one\x0cpage two\x0c");
        assert_eq!(pages, vec!["page one", "page two"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect_pages(b"").is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let result: Result<Vec<_>> = TextPages::new(&b"ok\x0c\xff\xfe"[..]).collect();
        assert!(matches!(result, Err(Error::UnreadableDocument(_))));
    }
}
