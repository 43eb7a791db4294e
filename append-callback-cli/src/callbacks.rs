//! Named callbacks
//!
//! Maps the callback names accepted on the command line and in config.toml
//! to zero-argument closures that capture the shared sequence.

use append_callback::SharedSequence;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::report::{self, OutputFormat};

/// Names accepted by [`resolve`]
pub const CALLBACK_NAMES: &[&str] = &["print", "json", "log", "silent"];

/// Resolve a callback by name
///
/// * `print` - write the sequence to `out` in `format`
/// * `json` - write the sequence to `out` as JSON
/// * `log` - emit the sequence at info level
/// * `silent` - do nothing
///
/// Returns `None` for unknown names.
pub fn resolve<W: Write + 'static>(
    name: &str,
    sequence: &SharedSequence,
    format: OutputFormat,
    out: &Rc<RefCell<W>>,
) -> Option<Box<dyn FnOnce()>> {
    let sequence = Rc::clone(sequence);
    let out = Rc::clone(out);

    let callback: Box<dyn FnOnce()> = match name {
        "print" => Box::new(move || write_line(&out, &report::render(&sequence.borrow(), format))),
        "json" => Box::new(move || {
            write_line(&out, &report::render(&sequence.borrow(), OutputFormat::Json))
        }),
        "log" => Box::new(move || {
            log::info!("Sequence: {}", report::render(&sequence.borrow(), format))
        }),
        "silent" => Box::new(|| {}),
        other => {
            log::warn!(
                "Unknown callback '{}' (expected one of: {})",
                other,
                CALLBACK_NAMES.join(", ")
            );
            return None;
        }
    };

    log::debug!("Resolved callback '{}'", name);
    Some(callback)
}

fn write_line<W: Write>(out: &Rc<RefCell<W>>, line: &str) {
    let mut out = out.borrow_mut();
    if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
        log::error!("Callback failed to write output: {}", e);
    }
}
