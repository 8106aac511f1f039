//! Command handlers that delegate to `AppCore`.
//!
//! Each handler is a thin `execute(ctx, ...)` wrapper: call the core, then
//! format the result for the terminal.

pub mod export;
pub mod history;
pub mod serve;
pub mod translate;
