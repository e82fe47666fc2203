use std::fmt;

use serde::{Deserialize, Serialize};

use super::symbol::{Direction, SYMBOL_COUNT, Symbol};

/// The five states of the order-intake tape automaton.
///
/// A run flows: START → READ ⇄ MARK → NEXT → READ … → FINAL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Start,
    Read,
    Mark,
    Next,
    Final,
}

const STATE_COUNT: usize = 5;

impl State {
    pub const ALL: [State; STATE_COUNT] = [
        State::Start,
        State::Read,
        State::Mark,
        State::Next,
        State::Final,
    ];

    /// The state every run begins in.
    pub fn initial() -> Self {
        State::Start
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, State::Final)
    }

    fn index(self) -> usize {
        match self {
            State::Start => 0,
            State::Read => 1,
            State::Mark => 2,
            State::Next => 3,
            State::Final => 4,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Start => write!(f, "START"),
            State::Read => write!(f, "READ"),
            State::Mark => write!(f, "MARK"),
            State::Next => write!(f, "NEXT"),
            State::Final => write!(f, "FINAL"),
        }
    }
}

/// What the automaton does after reading a symbol in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub next_state: State,
    pub write_symbol: Symbol,
    pub direction: Direction,
}

/// Immutable `(state, symbol) → transition` mapping.
///
/// Built once, then handed to an [`Engine`](super::Engine). Lookups are a
/// direct index into a fixed `state × symbol` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    rules: [[Option<Transition>; SYMBOL_COUNT]; STATE_COUNT],
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self {
            rules: [[None; SYMBOL_COUNT]; STATE_COUNT],
        }
    }
}

impl TransitionTable {
    /// Creates an empty table. Every lookup misses until rules are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rule for `(state, read)`.
    pub fn with_rule(
        mut self,
        state: State,
        read: Symbol,
        next_state: State,
        write_symbol: Symbol,
        direction: Direction,
    ) -> Self {
        self.rules[state.index()][read.index()] = Some(Transition {
            next_state,
            write_symbol,
            direction,
        });
        self
    }

    /// The order-intake table:
    ///
    /// - START: `B` → FINAL; `#` or digit → READ, moving right.
    /// - READ: digits loop right; `#` or `B` → MARK, moving left.
    /// - MARK: digits are overwritten with `*` moving left; `#` → NEXT, right.
    /// - NEXT: skips `*` right; digit or `#` → READ; `B` → FINAL.
    pub fn standard() -> Self {
        use Direction::{Left, Right};
        use State::{Final, Mark, Next, Read, Start};
        use Symbol::{Blank, Separator};

        let mut table = Self::new()
            .with_rule(Start, Blank, Final, Blank, Right)
            .with_rule(Start, Separator, Read, Separator, Right)
            .with_rule(Read, Separator, Mark, Separator, Left)
            .with_rule(Read, Blank, Mark, Blank, Left)
            .with_rule(Mark, Separator, Next, Separator, Right)
            .with_rule(Next, Separator, Read, Separator, Right)
            .with_rule(Next, Blank, Final, Blank, Right)
            .with_rule(Next, Symbol::Mark, Next, Symbol::Mark, Right);

        for digit in Symbol::digits() {
            table = table
                .with_rule(Start, digit, Read, digit, Right)
                .with_rule(Read, digit, Read, digit, Right)
                .with_rule(Mark, digit, Mark, Symbol::Mark, Left)
                .with_rule(Next, digit, Read, digit, Right);
        }

        table
    }

    pub fn get(&self, state: State, symbol: Symbol) -> Option<&Transition> {
        self.rules[state.index()][symbol.index()].as_ref()
    }

    /// Every rule over the alphabet, grouped by state in declaration order.
    pub fn rules(&self) -> Vec<(State, Symbol, Transition)> {
        let symbols: Vec<Symbol> = Symbol::digits()
            .chain([Symbol::Separator, Symbol::Blank, Symbol::Mark])
            .collect();

        State::ALL
            .iter()
            .flat_map(|&state| {
                symbols
                    .iter()
                    .filter_map(move |&symbol| self.get(state, symbol).map(|t| (state, symbol, *t)))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.iter().flatten().filter(|r| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_initial_and_only_final_is_terminal() {
        assert_eq!(State::initial(), State::Start);
        let terminal: Vec<State> = State::ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![State::Final]);
    }

    #[test]
    fn state_display() {
        assert_eq!(State::Start.to_string(), "START");
        assert_eq!(State::Read.to_string(), "READ");
        assert_eq!(State::Mark.to_string(), "MARK");
        assert_eq!(State::Next.to_string(), "NEXT");
        assert_eq!(State::Final.to_string(), "FINAL");
    }

    #[test]
    fn standard_table_rule_count() {
        // START 12, READ 12, MARK 11, NEXT 13
        let table = TransitionTable::standard();
        assert_eq!(table.len(), 48);
        assert_eq!(table.rules().len(), 48);
    }

    #[test]
    fn mark_rewrites_digits_moving_left() {
        let table = TransitionTable::standard();
        let t = table.get(State::Mark, Symbol::digit(4).unwrap()).unwrap();
        assert_eq!(t.next_state, State::Mark);
        assert_eq!(t.write_symbol, Symbol::Mark);
        assert_eq!(t.direction, Direction::Left);
    }

    #[test]
    fn read_hands_off_to_mark_on_separator_or_blank() {
        let table = TransitionTable::standard();
        for symbol in [Symbol::Separator, Symbol::Blank] {
            let t = table.get(State::Read, symbol).unwrap();
            assert_eq!(t.next_state, State::Mark);
            assert_eq!(t.write_symbol, symbol);
            assert_eq!(t.direction, Direction::Left);
        }
    }

    #[test]
    fn undefined_pairs_miss() {
        let table = TransitionTable::standard();
        assert!(table.get(State::Start, Symbol::Mark).is_none());
        assert!(table.get(State::Read, Symbol::Mark).is_none());
        assert!(table.get(State::Mark, Symbol::Blank).is_none());
        for symbol in Symbol::digits() {
            assert!(table.get(State::Final, symbol).is_none());
        }
        for state in State::ALL {
            assert!(table.get(state, Symbol::Foreign('x')).is_none());
        }
    }

    #[test]
    fn empty_table_has_no_rules() {
        let table = TransitionTable::new();
        assert!(table.is_empty());
        assert!(table.rules().is_empty());
    }

    #[test]
    fn with_rule_replaces_existing_entry() {
        let table = TransitionTable::new()
            .with_rule(State::Start, Symbol::Blank, State::Final, Symbol::Blank, Direction::Right)
            .with_rule(State::Start, Symbol::Blank, State::Read, Symbol::Mark, Direction::Left);
        assert_eq!(table.len(), 1);
        let t = table.get(State::Start, Symbol::Blank).unwrap();
        assert_eq!(t.next_state, State::Read);
        assert_eq!(t.write_symbol, Symbol::Mark);
    }
}
