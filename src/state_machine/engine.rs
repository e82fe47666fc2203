use tracing::debug;

use crate::error::SchedulerError;

use super::extract::{OrderExtractor, OrderSink};
use super::state::{State, TransitionTable};
use super::tape::Tape;

/// Counters for one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Transitions applied before reaching FINAL.
    pub steps: u64,
    /// Orders handed to the sink.
    pub orders: usize,
}

/// Drives a [`Tape`] through a [`TransitionTable`] until FINAL.
///
/// The table is fixed at construction; head, state and the digit buffer are
/// reset at the start of every run.
#[derive(Debug, Clone)]
pub struct Engine {
    table: TransitionTable,
    state: State,
    head: isize,
    extractor: OrderExtractor,
}

impl Engine {
    pub fn new(table: TransitionTable) -> Self {
        Self {
            table,
            state: State::initial(),
            head: 0,
            extractor: OrderExtractor::new(),
        }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn head(&self) -> isize {
        self.head
    }

    pub fn reset(&mut self) {
        self.state = State::initial();
        self.head = 0;
        self.extractor.clear();
    }

    /// Applies a single transition.
    ///
    /// Reads the cell under the head, looks up `(state, symbol)`, lets the
    /// extractor observe the pair, then writes, switches state and moves.
    /// Returns the order committed during this step, if any.
    pub fn step(
        &mut self,
        tape: &mut Tape,
        sink: &mut impl OrderSink,
    ) -> Result<Option<u64>, SchedulerError> {
        let (position, symbol) = usize::try_from(self.head)
            .ok()
            .and_then(|p| tape.read(p).map(|s| (p, s)))
            .ok_or(SchedulerError::HeadOutOfBounds {
                state: self.state,
                position: self.head,
            })?;

        let transition = *self
            .table
            .get(self.state, symbol)
            .ok_or(SchedulerError::InvalidTransition {
                state: self.state,
                symbol,
            })?;

        let committed = self.extractor.observe(self.state, symbol, sink)?;

        tape.write(position, transition.write_symbol)?;
        self.state = transition.next_state;
        self.head += transition.direction.offset();

        debug!(
            state = %self.state,
            symbol = %symbol,
            position = self.head,
            "step"
        );

        Ok(committed)
    }

    /// Runs from START until FINAL, mutating `tape` in place and sending
    /// every completed order to `sink`.
    ///
    /// There is no step limit; the standard table always terminates on a
    /// well-formed tape.
    pub fn run(
        &mut self,
        tape: &mut Tape,
        sink: &mut impl OrderSink,
    ) -> Result<RunStats, SchedulerError> {
        self.reset();
        let mut stats = RunStats::default();

        while !self.state.is_terminal() {
            if self.step(tape, sink)?.is_some() {
                stats.orders += 1;
            }
            stats.steps += 1;
        }

        Ok(stats)
    }
}
