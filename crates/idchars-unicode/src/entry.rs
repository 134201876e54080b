//! Everything a reference table row shows about a character.
use crate::{
    class::{classify, CharClass},
    names::char_name,
    normalize::{divergence, Divergence},
};

/// A character resolved against the Unicode databases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharEntry {
    pub ch: char,
    pub class: CharClass,
    pub name: Option<String>,
    pub divergence: Option<Divergence>,
}

impl CharEntry {
    pub fn new(ch: char) -> Self {
        Self { ch, class: classify(ch), name: char_name(ch), divergence: divergence(ch) }
    }

    /// The code point of the character.
    pub fn code(&self) -> u32 {
        self.ch as u32
    }
}
