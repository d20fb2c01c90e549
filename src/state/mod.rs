//! Shared client-side state.
//!
//! The session lives in an `RwSignal<SessionState>` provided via context
//! from `App`, so pages and components read one injected instance instead
//! of ambient globals.

pub mod session;
