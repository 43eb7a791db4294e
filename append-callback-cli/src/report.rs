//! Sequence rendering for callback output

use append_callback::Sequence;
use serde::{Deserialize, Serialize};

/// How a callback renders the sequence it observes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[ 'Juan', 'Karla', 100 ]`
    #[default]
    Console,
    /// `["Juan","Karla",100]`
    Json,
}

/// Render a sequence in the given format
pub fn render(sequence: &Sequence, format: OutputFormat) -> String {
    match format {
        OutputFormat::Console => sequence.to_string(),
        // A sequence only holds strings, numbers and booleans
        OutputFormat::Json => serde_json::to_string(sequence)
            .unwrap_or_else(|e| format!("<unserializable sequence: {}>", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use append_callback::Value;

    #[test]
    fn test_render_formats() {
        let seq: Sequence = vec![Value::from("Juan"), Value::from(100)].into();
        assert_eq!(render(&seq, OutputFormat::Console), "[ 'Juan', 100 ]");
        assert_eq!(render(&seq, OutputFormat::Json), r#"["Juan",100]"#);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Sequence::new(), OutputFormat::Console), "[]");
        assert_eq!(render(&Sequence::new(), OutputFormat::Json), "[]");
    }
}
