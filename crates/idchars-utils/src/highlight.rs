//! Terminal highlighting for log prefixes and diagnostic reports.
use std::ops::BitOr;

/// Reset sequence appended after every highlighted message.
const RESET: &str = "\u{001b}[0m";

/// Variants of highlighter colour that can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Yellow,
    Blue,
    Magenta,
}

/// Colour modifiers specifying if the colour should also
/// apply a text effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Bold,
}

impl BitOr<Modifier> for Colour {
    type Output = Decoration;

    fn bitor(self, rhs: Modifier) -> Self::Output {
        Decoration { colour: self, modifier: rhs }
    }
}

impl BitOr<Colour> for Modifier {
    type Output = Decoration;

    fn bitor(self, rhs: Colour) -> Self::Output {
        Decoration { colour: rhs, modifier: self }
    }
}

/// Anything that knows which ANSI escape sequence to emit before the
/// highlighted text.
pub trait Highlighter {
    fn escape_code(&self) -> String;
}

impl Highlighter for Colour {
    fn escape_code(&self) -> String {
        match self {
            Colour::Red => "\u{001b}[31;1m",
            Colour::Yellow => "\u{001b}[33;1m",
            Colour::Blue => "\u{001b}[34;1m",
            Colour::Magenta => "\u{001b}[35;1m",
        }
        .to_owned()
    }
}

impl Highlighter for Modifier {
    fn escape_code(&self) -> String {
        match self {
            Modifier::Bold => "\u{001b}[1m",
        }
        .to_owned()
    }
}

/// The union of a colour and a text modifier, produced by `Colour | Modifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub colour: Colour,
    pub modifier: Modifier,
}

impl Highlighter for Decoration {
    fn escape_code(&self) -> String {
        let mut code = self.colour.escape_code();
        code.push_str(&self.modifier.escape_code());
        code
    }
}

/// Wrap `message` in the escape code of `highlighter`, resetting the effect at
/// the end of the message.
pub fn highlight(highlighter: impl Highlighter, message: impl ToString) -> String {
    let mut output = highlighter.escape_code();
    output.push_str(&message.to_string());
    output.push_str(RESET);
    output
}

/// Remove every ANSI escape sequence produced by [highlight] from `message`.
///
/// Used when rendered diagnostics are compared against recorded output.
pub fn strip_highlighting(message: &str) -> String {
    let mut output = String::with_capacity(message.len());
    let mut chars = message.chars();

    while let Some(ch) = chars.next() {
        if ch == '\u{001b}' {
            // Skip the `[...m` tail of the sequence.
            for tail in chars.by_ref() {
                if tail == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}
