use tracing::info;

use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::report::Schedule;
use crate::scheduler::GreedyScheduler;
use crate::state_machine::{Engine, RunStats, Tape, TransitionTable};

/// Feeds order tapes through the automaton and into the greedy scheduler.
///
/// Machine loads carry over between calls until [`reset`](Self::reset).
pub struct OrderOrchestrator {
    engine: Engine,
    scheduler: GreedyScheduler,
    last_tape: Option<Tape>,
    last_stats: Option<RunStats>,
}

impl OrderOrchestrator {
    /// Builds the standard transition table and a scheduler from `config`.
    pub fn new(config: &SchedulerConfig) -> Result<Self, SchedulerError> {
        Self::with_table(config, TransitionTable::standard())
    }

    pub fn with_table(
        config: &SchedulerConfig,
        table: TransitionTable,
    ) -> Result<Self, SchedulerError> {
        let scheduler = GreedyScheduler::new(config.num_machines, config.production_rate)?;
        Ok(Self {
            engine: Engine::new(table),
            scheduler,
            last_tape: None,
            last_stats: None,
        })
    }

    /// Encodes `orders` onto a tape and schedules every order on it.
    ///
    /// Zero-sized orders are rejected before the tape is built.
    pub fn process_orders(&mut self, orders: &[u64]) -> Result<Schedule, SchedulerError> {
        if let Some(pos) = orders.iter().position(|&o| o == 0) {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "order #{} has size 0; order sizes must be positive integers",
                pos + 1
            )));
        }
        self.process_tape(Tape::encode(orders))
    }

    /// Runs an already-built tape. Machine loads only change if the run
    /// reaches FINAL.
    pub fn process_tape(&mut self, mut tape: Tape) -> Result<Schedule, SchedulerError> {
        info!(cells = tape.len(), "Starting order processing...");

        let mut working = self.scheduler.clone();
        let stats = self.engine.run(&mut tape, &mut working)?;

        self.scheduler = working;
        self.last_tape = Some(tape);
        self.last_stats = Some(stats);

        info!(steps = stats.steps, orders = stats.orders, "Order processing complete.");
        Ok(Schedule::from_loads(self.scheduler.loads()))
    }

    /// Tape contents after the last successful run.
    pub fn final_tape(&self) -> Option<&Tape> {
        self.last_tape.as_ref()
    }

    pub fn last_stats(&self) -> Option<RunStats> {
        self.last_stats
    }

    pub fn table(&self) -> &TransitionTable {
        self.engine.table()
    }

    pub fn schedule(&self) -> Schedule {
        Schedule::from_loads(self.scheduler.loads())
    }

    /// Clears machine loads so the next run starts from zero.
    pub fn reset(&mut self) {
        self.scheduler.reset();
        self.last_tape = None;
        self.last_stats = None;
    }
}
