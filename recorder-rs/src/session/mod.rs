mod files;
mod manager;

pub use manager::{SessionHandle, SessionManager, TickOutcome};
