/// Chunk size used by map-reduce summarization.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// One segment of a chunked document. `start`/`end` are byte offsets into
/// the source text; chunks partition the source with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Split `text` into ordered chunks of at most `chunk_size` bytes, preferring
/// to break at a paragraph boundary (double newline), then at a sentence
/// boundary (period + space, cut one byte past the period). A candidate
/// boundary is only accepted in the second half of the window, so no chunk
/// degenerates to a tiny fragment. The final chunk takes whatever remains.
///
/// Concatenating the chunks in order always reconstructs `text` exactly.
/// Hard cuts are clamped to UTF-8 character boundaries.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<Chunk> {
    assert!(chunk_size > 0, "chunk_size must be positive");

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = floor_char_boundary(text, start.saturating_add(chunk_size));

        if end < text.len() {
            let window = &text[start..end];
            let midpoint = start + chunk_size / 2;
            if let Some(brk) = window
                .rfind("\n\n")
                .map(|p| start + p)
                .filter(|&p| p > midpoint)
            {
                end = brk;
            } else if let Some(brk) = window
                .rfind(". ")
                .map(|p| start + p)
                .filter(|&p| p > midpoint)
            {
                end = brk + 1;
            }
        }

        // A chunk_size smaller than one multibyte character would stall at
        // the same boundary; force at least one character of progress.
        if end <= start {
            end = ceil_char_boundary(text, start + 1);
        }

        chunks.push(Chunk {
            start,
            end,
            text: text[start..end].to_string(),
        });
        start = end;
    }

    chunks
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while i < text.len() && !text.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_reconstructs(text: &str, chunks: &[Chunk]) {
        let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(rebuilt, text, "chunks must reconstruct the source exactly");
        let mut expected_start = 0;
        for chunk in chunks {
            assert_eq!(chunk.start, expected_start, "gap or overlap at {expected_start}");
            assert_eq!(chunk.end - chunk.start, chunk.text.len());
            expected_start = chunk.end;
        }
        assert_eq!(expected_start, text.len());
    }

    #[test]
    fn short_text_yields_single_chunk() {
        let text = "A short document that fits in one chunk.";
        let chunks = chunk_text(text, 10_000);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert_reconstructs(text, &chunks);
    }

    #[test]
    fn text_exactly_chunk_size_yields_single_chunk() {
        let text = "a".repeat(100);
        let chunks = chunk_text(&text, 100);
        assert_eq!(chunks.len(), 1);
        assert_reconstructs(&text, &chunks);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", 100).is_empty());
    }

    #[test]
    fn prefers_paragraph_break_past_midpoint() {
        let text = format!("{}\n\n{}", "a".repeat(60), "b".repeat(100));
        let chunks = chunk_text(&text, 100);
        assert_eq!(chunks[0].end, 60, "boundary should land at the paragraph break");
        assert_eq!(chunks[0].text, "a".repeat(60));
        assert!(chunks[1].text.starts_with("\n\n"));
        assert_reconstructs(&text, &chunks);
    }

    #[test]
    fn falls_back_to_sentence_break() {
        let text = format!("{}. {}", "x".repeat(69), "y".repeat(100));
        let chunks = chunk_text(&text, 100);
        // One byte past the period: the period stays, the space moves on.
        assert_eq!(chunks[0].end, 70);
        assert!(chunks[0].text.ends_with('.'));
        assert!(chunks[1].text.starts_with(' '));
        assert_reconstructs(&text, &chunks);
    }

    #[test]
    fn rejects_boundaries_in_first_half_of_window() {
        let text = format!("{}\n\n{}. {}", "a".repeat(10), "b".repeat(8), "c".repeat(200));
        let chunks = chunk_text(&text, 100);
        // Both candidate breaks sit before the midpoint, so the cut is hard.
        assert_eq!(chunks[0].end, 100);
        assert_reconstructs(&text, &chunks);
    }

    #[test]
    fn hard_cut_clamps_to_char_boundary() {
        // 2-byte characters: a hard cut at an odd byte offset must back up.
        let text = "é".repeat(80);
        let chunks = chunk_text(&text, 101);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.text.len() <= 101);
        }
        assert_reconstructs(&text, &chunks);
    }

    #[test]
    fn long_document_reconstructs() {
        let paragraph = "Machine learning is a subset of artificial intelligence. \
                         It focuses on teaching computers to learn from data.\n\n";
        let text = paragraph.repeat(400);
        let chunks = chunk_text(&text, DEFAULT_CHUNK_SIZE);
        assert!(chunks.len() > 1);
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.text.len() <= DEFAULT_CHUNK_SIZE);
            assert!(chunk.text.len() > DEFAULT_CHUNK_SIZE / 2);
        }
        assert_reconstructs(&text, &chunks);
    }
}
