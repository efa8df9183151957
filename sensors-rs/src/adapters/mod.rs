pub mod replay;
pub mod simulated;

pub use replay::ReplaySource;
pub use simulated::SimulatedSource;
