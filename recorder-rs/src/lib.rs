//! # Crate recorder-rs
//!
//! ## recorder-rs
//!
//! The `recorder-rs` crate records accelerometer, gyroscope and magnetometer samples into
//! append-only text files for a bounded duration.
//!
//! A recording session:
//! - creates one `<yyyy-MM-dd HH:mm:ss.SSS> <acc|gyr|mag>.txt` file per sensor,
//! - appends one `timestamp,x,y,z` line per incoming sample of that sensor,
//! - counts down once per tick and releases every file when the countdown reaches zero,
//!   when it is stopped, or when a file operation fails.
//!
//! The recorder never touches a user interface. Live values, countdown fields and the
//! enabled state of the start controls are published as [`models::events::SessionEvent`]s
//! that any front end can subscribe to.

pub mod adapters;
pub mod constants;
pub mod models;
pub mod ports;
pub mod services;
pub mod session;

pub use models::config::RecorderConfig;
pub use models::duration::{DurationField, SessionDuration};
pub use models::errors::RecorderError;
pub use models::events::{CountdownDisplay, EndReason, SessionEvent};
pub use services::RecorderService;
pub use session::{SessionHandle, SessionManager, TickOutcome};
