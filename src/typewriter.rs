use crate::constants::{DELETE_DELAY_MS, TYPE_DELAY_MS, WORD_GAP_MS, WORD_HOLD_MS};

/// Types each word one character at a time, holds it, deletes it, then
/// moves on to the next word (wrapping around).
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    word: usize,
    shown: usize, // characters, not bytes
    deleting: bool,
}

/// What to display now and how long to wait before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterStep {
    pub text: String,
    pub delay_ms: u32,
}

impl Typewriter {
    /// `None` when there is no non-empty word to type.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            word: 0,
            shown: 0,
            deleting: false,
        })
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word]
    }

    pub fn step(&mut self) -> TypewriterStep {
        let len = self.current_word().chars().count();
        let delay_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                WORD_GAP_MS
            } else {
                DELETE_DELAY_MS
            }
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                WORD_HOLD_MS
            } else {
                TYPE_DELAY_MS
            }
        };
        let text = char_prefix(self.current_word(), self.shown).to_string();
        if !self.deleting && self.shown == 0 {
            self.word = (self.word + 1) % self.words.len();
        }
        TypewriterStep { text, delay_ms }
    }
}

fn char_prefix(s: &str, chars: usize) -> &str {
    let end = s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i);
    &s[..end]
}
