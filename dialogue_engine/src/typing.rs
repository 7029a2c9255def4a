//! Typewriter reveal for resolved body text.
//!
//! Sessions only ever hand out complete strings. A presentation driver that
//! wants the letter-by-letter effect wraps the body in a [`TypingSequence`]
//! and pulls one frame per tick.

/// Lazy sequence of growing prefixes of a string.
///
/// Prefixes always end on a `char` boundary. The last item is the full text.
/// The sequence can be restarted or skipped to the end at any time.
#[derive(Debug, Clone)]
pub struct TypingSequence<'a> {
    text: &'a str,
    chars_per_step: usize,
    /// Byte offset of the end of the last yielded prefix.
    position: usize,
}

impl<'a> TypingSequence<'a> {
    /// Reveal `text` one character per step.
    pub fn new(text: &'a str) -> Self {
        Self::with_step(text, 1)
    }

    /// Reveal `text` `chars_per_step` characters at a time (at least one).
    pub fn with_step(text: &'a str, chars_per_step: usize) -> Self {
        Self {
            text,
            chars_per_step: chars_per_step.max(1),
            position: 0,
        }
    }

    /// Go back to an empty reveal.
    pub fn restart(&mut self) {
        self.position = 0;
    }

    /// Reveal everything at once, e.g. when the player clicks through.
    pub fn skip_to_end(&mut self) -> &'a str {
        self.position = self.text.len();
        self.text
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.text.len()
    }

    /// The currently revealed prefix.
    pub fn revealed(&self) -> &'a str {
        &self.text[..self.position]
    }
}

impl<'a> Iterator for TypingSequence<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let rest = &self.text[self.position..];
        let advance = rest
            .char_indices()
            .nth(self.chars_per_step)
            .map_or(rest.len(), |(offset, _)| offset);

        self.position += advance;
        Some(self.revealed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_char_by_char() {
        let frames: Vec<_> = TypingSequence::new("Olá").collect();
        assert_eq!(frames, vec!["O", "Ol", "Olá"]);
    }

    #[test]
    fn test_step_size() {
        let frames: Vec<_> = TypingSequence::with_step("Peace be", 3).collect();
        assert_eq!(frames, vec!["Pea", "Peace ", "Peace be"]);
    }

    #[test]
    fn test_restart_and_skip() {
        let mut typing = TypingSequence::new("Amen");
        typing.next();
        typing.next();
        assert_eq!(typing.revealed(), "Am");

        assert_eq!(typing.skip_to_end(), "Amen");
        assert!(typing.is_finished());
        assert_eq!(typing.next(), None);

        typing.restart();
        assert_eq!(typing.next(), Some("A"));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert_eq!(TypingSequence::new("").count(), 0);
        assert_eq!(TypingSequence::with_step("hi", 0).count(), 2);
    }
}
