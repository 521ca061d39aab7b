//! Lossless text splitting under a token budget.
//!
//! Token counts are estimated at four characters per token; no external
//! tokenizer is involved. The splitter takes the largest prefix that fits the
//! budget and cuts it at the latest natural boundary inside that window,
//! preferring paragraph breaks, then sentence ends, then whitespace, before
//! falling back to a hard cut at the character budget.

use super::TextChunk;
use crate::error::{Result, TtsError};

/// Estimated characters per token.
const CHARS_PER_TOKEN: usize = 4;

/// Estimate the token count of a piece of text.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

/// Split text into chunks whose estimated token counts stay within
/// `max_tokens`.
///
/// Empty input yields zero chunks. Concatenating the returned chunks in
/// index order reproduces `text` exactly; no characters are dropped or
/// duplicated.
pub fn split_text(text: &str, max_tokens: usize) -> Result<Vec<TextChunk>> {
    if max_tokens == 0 {
        return Err(TtsError::Chunking("max_tokens must be positive".to_string()));
    }

    let max_chars = max_tokens.saturating_mul(CHARS_PER_TOKEN);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let cut = split_point(rest, max_chars);
        let (head, tail) = rest.split_at(cut);
        chunks.push(TextChunk::new(chunks.len(), head.to_string()));
        rest = tail;
    }

    debug_assert!(chunks.iter().all(|c| c.estimated_tokens() <= max_tokens));
    Ok(chunks)
}

/// Byte offset at which to cut `text`, at most `max_chars` characters in.
///
/// Always a char boundary, always > 0 for non-empty input. Boundary
/// separators stay attached to the preceding chunk so splitting is lossless.
fn split_point(text: &str, max_chars: usize) -> usize {
    // Byte offset of the character just past the budget; text within budget
    // needs no split at all.
    let window_end = match text.char_indices().nth(max_chars) {
        Some((offset, _)) => offset,
        None => return text.len(),
    };
    let window = &text[..window_end];

    // Latest paragraph break in the window.
    if let Some(pos) = window.rfind("\n\n") {
        return pos + 2;
    }

    if let Some(cut) = sentence_cut(window) {
        return cut;
    }

    if let Some(cut) = whitespace_cut(window) {
        return cut;
    }

    // No natural boundary at all, e.g. one unbroken run of characters.
    window_end
}

/// Latest sentence boundary in the window: `.`, `!` or `?` followed by an
/// ASCII whitespace character, or a lone newline. The cut lands after the
/// trailing whitespace.
fn sentence_cut(window: &str) -> Option<usize> {
    let bytes = window.as_bytes();
    let mut best = None;

    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'.' | b'!' | b'?' => {
                if let Some(next) = bytes.get(i + 1) {
                    if next.is_ascii_whitespace() {
                        best = Some(i + 2);
                    }
                }
            }
            b'\n' => best = Some(i + 1),
            _ => {}
        }
    }

    best
}

/// Latest whitespace character in the window; the cut lands after it.
fn whitespace_cut(window: &str) -> Option<usize> {
    window
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rebuild(chunks: &[TextChunk]) -> String {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunks = split_text("", 100).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = split_text("short text", 1000).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].text, "short text");
    }

    #[test]
    fn test_input_at_boundary_not_split() {
        // 8 chars is exactly 2 tokens
        let chunks = split_text("abcdefgh", 2).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "abcdefgh");
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        let err = split_text("anything", 0).unwrap_err();
        assert!(matches!(err, TtsError::Chunking(_)));
    }

    #[test]
    fn test_indices_contiguous() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = split_text(text, 2).unwrap();
        assert!(chunks.len() > 1);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn test_reconstruction_exact() {
        let text = "First paragraph here.\n\nSecond paragraph. With two sentences!\n\nThird one?  Trailing spaces and\na line break.";
        for max_tokens in [1, 2, 5, 10, 100] {
            let chunks = split_text(text, max_tokens).unwrap();
            assert_eq!(rebuild(&chunks), text, "max_tokens = {}", max_tokens);
        }
    }

    #[test]
    fn test_prefers_paragraph_break() {
        // Budget of 10 tokens = 40 chars; the paragraph break sits inside
        // the window, so the first chunk ends right after it.
        let text = "Alpha beta gamma.\n\nDelta epsilon zeta eta theta iota kappa.";
        let chunks = split_text(text, 10).unwrap();
        assert_eq!(chunks[0].text, "Alpha beta gamma.\n\n");
    }

    #[test]
    fn test_prefers_sentence_over_whitespace() {
        let text = "One sentence here. Another goes on and on and on for a while longer.";
        let chunks = split_text(text, 10).unwrap();
        assert_eq!(chunks[0].text, "One sentence here. ");
    }

    #[test]
    fn test_whitespace_split() {
        let chunks = split_text("ab cd ef", 1).unwrap();
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["ab ", "cd ", "ef"]);
    }

    #[test]
    fn test_hard_split_without_whitespace() {
        let text = "x".repeat(25);
        let chunks = split_text(&text, 2).unwrap();
        assert_eq!(chunks.len(), 4);
        for chunk in &chunks {
            assert!(chunk.estimated_tokens() <= 2);
        }
        assert_eq!(rebuild(&chunks), text);
    }

    #[test]
    fn test_bound_holds_on_multibyte_input() {
        let text = "héllo wörld ".repeat(20);
        let chunks = split_text(&text, 3).unwrap();
        for chunk in &chunks {
            assert!(chunk.estimated_tokens() <= 3);
        }
        assert_eq!(rebuild(&chunks), text);
    }

    #[test]
    fn test_estimate_tokens() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abc"), 1);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
    }

    proptest! {
        #[test]
        fn prop_chunks_reconstruct_input(text in ".*", max_tokens in 1usize..64) {
            let chunks = split_text(&text, max_tokens).unwrap();
            prop_assert_eq!(&rebuild(&chunks), &text);
            for chunk in &chunks {
                prop_assert!(chunk.estimated_tokens() <= max_tokens);
            }
        }
    }
}
