use std::fmt;

use serde::{Deserialize, Serialize};

/// A decimal digit, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// One cell value of the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// A decimal digit `0..=9`.
    Digit(Digit),
    /// `#`, opens the digits of an order.
    Separator,
    /// `B`, the end of the tape.
    Blank,
    /// `*`, a digit whose order has already been scheduled.
    Mark,
    /// Any character outside the alphabet. No rule of the standard table
    /// reads it, so reaching one is an invalid transition.
    Foreign(char),
}

/// Number of table columns: ten digits, `#`, `B`, `*` and one shared
/// column for foreign characters.
pub(crate) const SYMBOL_COUNT: usize = 14;

impl Symbol {
    /// All ten digit symbols in ascending order.
    pub fn digits() -> impl Iterator<Item = Symbol> {
        (0..=9).map(|d| Symbol::Digit(Digit(d)))
    }

    /// The digit symbol for `value`, or `None` above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Symbol::Digit)
    }

    pub fn from_char(c: char) -> Self {
        match c {
            '0'..='9' => Symbol::Digit(Digit(c as u8 - b'0')),
            '#' => Symbol::Separator,
            'B' => Symbol::Blank,
            '*' => Symbol::Mark,
            other => Symbol::Foreign(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit(d) => char::from(b'0' + d.value()),
            Symbol::Separator => '#',
            Symbol::Blank => 'B',
            Symbol::Mark => '*',
            Symbol::Foreign(c) => c,
        }
    }

    pub fn digit_value(self) -> Option<u8> {
        match self {
            Symbol::Digit(d) => Some(d.value()),
            _ => None,
        }
    }

    pub fn is_digit(self) -> bool {
        matches!(self, Symbol::Digit(_))
    }

    pub fn is_foreign(self) -> bool {
        matches!(self, Symbol::Foreign(_))
    }

    // Digits occupy slots 0..=9.
    pub(crate) fn index(self) -> usize {
        match self {
            Symbol::Digit(d) => usize::from(d.value()),
            Symbol::Separator => 10,
            Symbol::Blank => 11,
            Symbol::Mark => 12,
            Symbol::Foreign(_) => 13,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Head movement applied after a cell is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "L"),
            Direction::Right => write!(f, "R"),
        }
    }
}
