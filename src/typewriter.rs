//! Progressive reveal counters for the typing animation.
//!
//! A [`Typewriter`] only counts; it never owns the text. Strings are measured
//! in `char`s so a partial reveal always lands on a UTF-8 boundary.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typewriter {
    cursor: usize,
    len: usize,
}

impl Typewriter {
    pub fn for_text(text: &str) -> Self {
        Self::with_len(text.chars().count())
    }

    pub fn with_len(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.len
    }

    /// Reveals one more unit. Returns `false` once everything is shown.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn revealed<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.cursor) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    pub fn revealed_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.cursor.min(items.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntroLine {
    Welcome,
    Title,
    Description,
}

/// The three intro lines, typed strictly one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroSequence {
    welcome: Typewriter,
    title: Typewriter,
    description: Typewriter,
}

impl IntroSequence {
    pub fn new(welcome: &str, title: &str, description: &str) -> Self {
        Self {
            welcome: Typewriter::for_text(welcome),
            title: Typewriter::for_text(title),
            description: Typewriter::for_text(description),
        }
    }

    /// The line currently being typed, or `None` once all three are done.
    pub fn active_line(&self) -> Option<IntroLine> {
        if !self.welcome.is_complete() {
            Some(IntroLine::Welcome)
        } else if !self.title.is_complete() {
            Some(IntroLine::Title)
        } else if !self.description.is_complete() {
            Some(IntroLine::Description)
        } else {
            None
        }
    }

    pub fn line(&self, line: IntroLine) -> &Typewriter {
        match line {
            IntroLine::Welcome => &self.welcome,
            IntroLine::Title => &self.title,
            IntroLine::Description => &self.description,
        }
    }

    pub fn advance(&mut self) -> bool {
        match self.active_line() {
            Some(IntroLine::Welcome) => self.welcome.advance(),
            Some(IntroLine::Title) => self.title.advance(),
            Some(IntroLine::Description) => self.description.advance(),
            None => false,
        }
    }

    /// Total characters revealed across all three lines.
    pub fn progress(&self) -> usize {
        self.welcome.cursor() + self.title.cursor() + self.description.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_length() {
        let mut typewriter = Typewriter::for_text("abc");

        assert!(typewriter.advance());
        assert!(typewriter.advance());
        assert!(typewriter.advance());
        assert!(!typewriter.advance());
        assert_eq!(typewriter.cursor(), 3);
        assert!(typewriter.is_complete());
    }

    #[test]
    fn revealed_respects_multibyte_boundaries() {
        let text = "é→x";
        let mut typewriter = Typewriter::for_text(text);
        assert_eq!(typewriter.len(), 3);

        typewriter.advance();
        assert_eq!(typewriter.revealed(text), "é");
        typewriter.advance();
        assert_eq!(typewriter.revealed(text), "é→");
        typewriter.advance();
        assert_eq!(typewriter.revealed(text), text);
    }

    #[test]
    fn revealed_items_never_overruns_slice() {
        let items = [1, 2];
        let mut typewriter = Typewriter::with_len(5);
        for _ in 0..5 {
            typewriter.advance();
        }
        assert_eq!(typewriter.revealed_items(&items), &[1, 2]);
    }

    #[test]
    fn empty_text_starts_complete() {
        let typewriter = Typewriter::for_text("");
        assert!(typewriter.is_complete());
        assert_eq!(typewriter.revealed(""), "");
    }

    #[test]
    fn intro_lines_type_in_order() {
        let mut intro = IntroSequence::new("ab", "c", "de");

        assert_eq!(intro.active_line(), Some(IntroLine::Welcome));
        intro.advance();
        assert_eq!(intro.line(IntroLine::Title).cursor(), 0);
        intro.advance();
        assert_eq!(intro.active_line(), Some(IntroLine::Title));
        intro.advance();
        assert_eq!(intro.active_line(), Some(IntroLine::Description));
        assert_eq!(intro.line(IntroLine::Description).cursor(), 0);
        intro.advance();
        intro.advance();
        assert_eq!(intro.active_line(), None);
        assert!(!intro.advance());
        assert_eq!(intro.progress(), 5);
    }

    #[test]
    fn empty_title_is_skipped() {
        let mut intro = IntroSequence::new("a", "", "b");
        intro.advance();
        assert_eq!(intro.active_line(), Some(IntroLine::Description));
    }
}
