use std::fmt;

use crate::error::SchedulerError;

use super::symbol::Symbol;

/// Fixed-length sequence of symbol cells. Cells are overwritten in place,
/// the tape never grows or shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Symbol>,
}

impl Tape {
    /// Encodes orders as `#<digits>` each, followed by a single `B`.
    pub fn encode(orders: &[u64]) -> Self {
        let mut cells = Vec::new();
        for order in orders {
            cells.push(Symbol::Separator);
            cells.extend(order.to_string().chars().map(Symbol::from_char));
        }
        cells.push(Symbol::Blank);
        Self { cells }
    }

    /// Builds a tape from its textual form, e.g. `#50#100B`.
    ///
    /// Characters outside the alphabet become [`Symbol::Foreign`] cells; they
    /// only fail a run if the head reaches them.
    pub fn parse(raw: &str) -> Self {
        Self {
            cells: raw.chars().map(Symbol::from_char).collect(),
        }
    }

    pub fn read(&self, position: usize) -> Option<Symbol> {
        self.cells.get(position).copied()
    }

    /// Overwrites a cell and returns its previous symbol.
    pub fn write(&mut self, position: usize, symbol: Symbol) -> Result<Symbol, SchedulerError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(SchedulerError::CellOutOfRange { position, len })?;
        Ok(std::mem::replace(cell, symbol))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_orders() {
        let tape = Tape::encode(&[50, 100, 7]);
        assert_eq!(tape.to_string(), "#50#100#7B");
        assert_eq!(tape.len(), 10);
    }

    #[test]
    fn encode_empty_is_single_blank() {
        let tape = Tape::encode(&[]);
        assert_eq!(tape.to_string(), "B");
        assert_eq!(tape.cells(), &[Symbol::Blank]);
    }

    #[test]
    fn parse_matches_encode() {
        let parsed = Tape::parse("#50#100B");
        assert_eq!(parsed, Tape::encode(&[50, 100]));
    }

    #[test]
    fn parse_keeps_foreign_cells() {
        let tape = Tape::parse("#5x0B");
        assert_eq!(tape.len(), 5);
        assert_eq!(tape.read(2), Some(Symbol::Foreign('x')));
        assert_eq!(tape.to_string(), "#5x0B");
    }

    #[test]
    fn write_overwrites_in_place() {
        let mut tape = Tape::encode(&[42]);
        let previous = tape.write(1, Symbol::Mark).unwrap();
        assert_eq!(previous, Symbol::digit(4).unwrap());
        assert_eq!(tape.to_string(), "#*2B");
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.read(1), Some(Symbol::Mark));
        assert_eq!(tape.read(4), None);
    }

    #[test]
    fn write_past_the_end_is_an_error() {
        let mut tape = Tape::encode(&[42]);
        let err = tape.write(4, Symbol::Mark).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::CellOutOfRange {
                position: 4,
                len: 4
            }
        ));
        assert_eq!(tape.to_string(), "#42B");
    }
}
