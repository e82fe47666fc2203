use crate::error::SchedulerError;

use super::state::State;
use super::symbol::Symbol;

/// Receives each order value the automaton finishes reading.
pub trait OrderSink {
    fn submit(&mut self, order_size: u64);
}

impl OrderSink for Vec<u64> {
    fn submit(&mut self, order_size: u64) {
        self.push(order_size);
    }
}

/// Turns the digits seen in READ into one order value, committed the first
/// time MARK is entered with digits pending.
#[derive(Debug, Clone, Default)]
pub struct OrderExtractor {
    pending: Option<u64>,
}

impl OrderExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one `(state, symbol)` observation, taken before the transition
    /// is applied. Returns the order handed to `sink`, if any.
    pub fn observe(
        &mut self,
        state: State,
        symbol: Symbol,
        sink: &mut impl OrderSink,
    ) -> Result<Option<u64>, SchedulerError> {
        match (state, symbol) {
            (State::Read, Symbol::Digit(d)) => {
                let value = self
                    .pending
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(d.value())))
                    .ok_or_else(|| {
                        SchedulerError::InvalidConfiguration(format!(
                            "order size on tape exceeds {}",
                            u64::MAX
                        ))
                    })?;
                self.pending = Some(value);
                Ok(None)
            }
            (State::Mark, _) => match self.pending.take() {
                Some(0) => Err(SchedulerError::InvalidConfiguration(
                    "order size must be a positive integer, got 0".into(),
                )),
                Some(order_size) => {
                    sink.submit(order_size);
                    Ok(Some(order_size))
                }
                None => Ok(None),
            },
            _ => Ok(None),
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
