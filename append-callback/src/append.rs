//! Append-then-call API
//!
//! This module provides the primary interface of the library: push a literal
//! onto a caller-owned sequence, then hand control to a callback before
//! returning.

use crate::config::AppendConfig;
use crate::sequence::{Sequence, SharedSequence};
use crate::types::{CallbackError, Result};

/// Append the default literal (`100`) to `sequence`, then invoke `callback`
///
/// The mutable borrow is released before the callback runs, so a callback
/// that captured the same [`SharedSequence`] sees the appended element.
///
/// # Example
/// ```
/// use append_callback::{append_then_call, Sequence};
/// use std::rc::Rc;
///
/// let names: Sequence = ["Juan", "Karla", "Ricardo", "Pedro"].into_iter().collect();
/// let shared = names.into_shared();
///
/// let seen = Rc::clone(&shared);
/// append_then_call(&shared, move || {
///     println!("{}", seen.borrow());
/// });
///
/// assert_eq!(shared.borrow().len(), 5);
/// ```
pub fn append_then_call(sequence: &SharedSequence, callback: impl FnOnce()) {
    Appender::default().append_then_call(sequence, callback);
}

/// Appends a configured literal and invokes callbacks
#[derive(Debug, Clone, Default)]
pub struct Appender {
    config: AppendConfig,
}

impl Appender {
    /// Create a new appender
    pub fn new(config: AppendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppendConfig {
        &self.config
    }

    /// Append the configured literal, then invoke `callback` exactly once
    pub fn append_then_call(&self, sequence: &SharedSequence, callback: impl FnOnce()) {
        self.push_literal(&mut sequence.borrow_mut());
        callback();
    }

    /// Borrowing variant: the callback receives the mutated sequence
    /// instead of capturing it
    pub fn append_then_notify(&self, sequence: &mut Sequence, callback: impl FnOnce(&Sequence)) {
        self.push_literal(sequence);
        callback(sequence);
    }

    /// Dynamic entry point for callbacks resolved at runtime
    ///
    /// A missing callback is rejected before the sequence is touched.
    ///
    /// # Errors
    /// * [`CallbackError::NotInvocable`] if `callback` is `None`
    pub fn try_append_then_call(
        &self,
        sequence: &SharedSequence,
        callback: Option<Box<dyn FnOnce()>>,
    ) -> Result<()> {
        let callback = callback.ok_or_else(|| {
            CallbackError::NotInvocable("no callback was provided".to_string())
        })?;

        self.append_then_call(sequence, callback);
        Ok(())
    }

    fn push_literal(&self, sequence: &mut Sequence) {
        let before = sequence.len();
        sequence.push(self.config.literal.clone());
        log::debug!(
            "Appended {} (length {} -> {})",
            self.config.literal,
            before,
            sequence.len()
        );
    }
}
