pub mod classifier;
pub mod context;
pub mod state;

pub use classifier::{classify, DisplayText};
pub use context::{OutcomeContext, SharedOutcome};
pub use state::TerminalState;
