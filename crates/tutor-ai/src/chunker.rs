//! Splits long assistant replies into display-sized pieces.
//!
//! Cuts land just after the rightmost sentence marker inside each window of
//! `max_len` characters. A window without a usable marker is cut hard just
//! after the char at index `max_len`, so a hard-cut piece holds `max_len + 1`
//! chars. Lengths are counted in `char`s, not bytes.

/// Sentence-ending markers: period, Arabic comma, question marks, exclamation.
pub const SENTENCE_MARKERS: [char; 5] = ['.', '\u{060C}', '?', '\u{061F}', '!'];

pub const DEFAULT_CHUNK_SIZE: usize = 600;

/// Iterator over the chunks of a text. Cloning it restarts from the same point.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    max_len: usize,
}

impl<'a> Chunks<'a> {
    /// A `max_len` of zero is treated as one.
    pub fn new(text: &'a str, max_len: usize) -> Self {
        Self {
            rest: text.trim(),
            max_len: max_len.max(1),
        }
    }

    /// Byte offset just past the cut for the current window.
    fn cut(&self) -> usize {
        let window = self.rest.char_indices().take(self.max_len).skip(1);
        let marker = window
            .filter(|(_, ch)| SENTENCE_MARKERS.contains(ch))
            .last()
            .map(|(pos, ch)| pos + ch.len_utf8());

        marker.unwrap_or_else(|| {
            self.rest
                .char_indices()
                .nth(self.max_len + 1)
                .map_or(self.rest.len(), |(pos, _)| pos)
        })
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        if self.rest.chars().nth(self.max_len).is_none() {
            let last = self.rest;
            self.rest = "";
            return Some(last);
        }

        let (head, tail) = self.rest.split_at(self.cut());
        self.rest = tail.trim_start();
        Some(head.trim_end())
    }
}

/// Split `text` into trimmed, non-empty chunks. Marker-aligned chunks hold at
/// most `max_len` chars; hard-cut chunks hold at most `max_len + 1`.
pub fn chunk(text: &str, max_len: usize) -> Vec<String> {
    Chunks::new(text, max_len).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(chunk("", 10).is_empty());
        assert!(chunk("   \n\t ", 10).is_empty());
    }

    #[test]
    fn short_input_is_one_trimmed_chunk() {
        assert_eq!(chunk("  Hello there.  ", 600), vec!["Hello there."]);
        assert_eq!(chunk("exactly10!", 10), vec!["exactly10!"]);
    }

    #[test]
    fn cuts_at_each_marker() {
        assert_eq!(chunk("A. B? C! D", 3), vec!["A.", "B?", "C!", "D"]);
    }

    #[test]
    fn prefers_rightmost_marker_in_window() {
        let text = "One. Two. Three is long";
        assert_eq!(chunk(text, 13), vec!["One. Two.", "Three is long"]);
    }

    #[test]
    fn hard_cut_without_marker() {
        assert_eq!(chunk("abcdefghij", 4), vec!["abcde", "fghij"]);
        assert_eq!(chunk("abcdefghijk", 4), vec!["abcde", "fghij", "k"]);
    }

    #[test]
    fn hard_cut_keeps_char_at_max_len() {
        // 601 chars without a marker: the cut keeps index 600, leaving nothing.
        let text = "x".repeat(601);
        let pieces = chunk(&text, 600);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].chars().count(), 601);

        let text = "y".repeat(602);
        let pieces = chunk(&text, 600);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].chars().count(), 601);
        assert_eq!(pieces[1], "y");
    }

    #[test]
    fn marker_at_window_start_is_ignored() {
        // The only marker sits at index 0, so the window is cut hard.
        assert_eq!(chunk(".abcdef", 3), vec![".abc", "def"]);
    }

    #[test]
    fn arabic_markers_and_multibyte_text() {
        let text = "مرحبا، كيف حالك؟ أنا بخير.";
        let chunks = chunk(text, 12);
        assert_eq!(chunks, vec!["مرحبا،", "كيف حالك؟", "أنا بخير."]);
    }

    #[test]
    fn chunks_stay_within_one_past_max_len() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                    Sed do eiusmod tempor incididunt ut labore! Et dolore magna? \
                    Aliqua ut enim ad minim veniam quis nostrud exercitation";
        for max_len in [1, 2, 5, 17, 40, 600] {
            for piece in chunk(text, max_len) {
                assert!(piece.chars().count() <= max_len + 1, "{piece:?} > {max_len} + 1");
                assert!(!piece.is_empty());
            }
        }
    }

    #[test]
    fn reconstructs_original_modulo_whitespace() {
        let text = "  First sentence. Second one?   Third!\nFourth without end  ";
        for max_len in [1, 3, 8, 20, 100] {
            let joined: String = chunk(text, max_len).concat();
            assert_eq!(squash(&joined), squash(text));
        }
    }

    #[test]
    fn non_final_chunks_end_at_markers_when_available() {
        let text = "Alpha beta. Gamma delta? Epsilon zeta! Eta theta.";
        let chunks = chunk(text, 20);
        for piece in &chunks[..chunks.len() - 1] {
            let last = piece.chars().last().unwrap();
            assert!(SENTENCE_MARKERS.contains(&last), "{piece:?}");
        }
    }

    #[test]
    fn deterministic_and_restartable() {
        let text = "Uno. Dos. Tres. Cuatro. Cinco.";
        let iter = Chunks::new(text, 10);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(first, chunk(text, 10));
    }

    #[test]
    fn zero_max_len_behaves_like_one() {
        assert_eq!(chunk("abc", 0), vec!["ab", "c"]);
        assert_eq!(chunk("abc", 0), chunk("abc", 1));
    }

    #[test]
    fn default_size_keeps_moderate_reply_whole() {
        let reply = "Sentence. ".repeat(50);
        assert_eq!(chunk(&reply, DEFAULT_CHUNK_SIZE).len(), 1);
    }
}
