//! Output rendering for `--output`.
//!
//! Structured formats (`json`, `json-compact`, `yaml`) serialize the
//! underlying data with serde; `table` goes through a `Tabled` row type
//! and `plain` emits one identifier per line for scripting.

use std::io::{self, IsTerminal, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

/// True when colored status markers should be emitted.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
    }
}

/// Render a listing in the selected format.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => Table::new(data.iter().map(to_row))
            .with(Style::rounded())
            .to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).expect("listing serializes to JSON")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).expect("listing serializes to JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(data).expect("listing serializes to YAML"),
        OutputFormat::Plain => {
            let ids: Vec<String> = data.iter().map(id_fn).collect();
            ids.join("\n")
        }
    }
}

/// Write rendered output to stdout unless quiet mode is on.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
