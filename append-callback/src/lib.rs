//! Append Callback Library
//!
//! A small library demonstrating a callback passed as an argument and invoked
//! after the outer function mutates a caller-owned sequence.
//!
//! # Architecture
//!
//! - [`Sequence`] holds permissive [`Value`]s (text and numbers side by side)
//! - [`append_then_call`] pushes the literal `100`, then invokes the callback
//! - [`Appender`] does the same with a configured literal
//!
//! Everything runs synchronously on the caller's stack. The callback has
//! completed by the time the outer function returns.
//!
//! The library does NOT:
//! - Choose or name callbacks
//! - Render or print sequences to a stream
//! - Read configuration files
//!
//! Those live in the application layer (append-callback-cli).
//!
//! # Example Usage
//!
//! ```
//! use append_callback::{AppendConfig, Appender, Sequence};
//! use std::rc::Rc;
//!
//! let shared = Sequence::from_iter(["Juan", "Karla"]).into_shared();
//! let appender = Appender::new(AppendConfig::new().with_literal(7));
//!
//! let seen = Rc::clone(&shared);
//! appender.append_then_call(&shared, move || {
//!     println!("{}", seen.borrow()); // [ 'Juan', 'Karla', 7 ]
//! });
//! ```

// Public modules
pub mod append;
pub mod config;
pub mod sequence;
pub mod types;

// Re-export main types for convenience
pub use append::{append_then_call, Appender};
pub use config::{AppendConfig, DEFAULT_LITERAL};
pub use sequence::{Sequence, SharedSequence};
pub use types::{CallbackError, Result, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
