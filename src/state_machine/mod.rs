mod engine;
mod extract;
mod state;
mod symbol;
mod tape;

pub use engine::{Engine, RunStats};
pub use extract::{OrderExtractor, OrderSink};
pub use state::{State, Transition, TransitionTable};
pub use symbol::{Digit, Direction, Symbol};
pub use tape::Tape;
