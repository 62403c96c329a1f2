//! Rendering, CSV export and JSON serialization for CLI output.

use std::{path::Path, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use sift_frame::{CountTable, Frame, Value, write_csv};

use crate::cli::args::OutputArgs;

/// ANSI escape sequences for terminal styling.
mod colors {
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[0m";
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Dimmed text.
    pub const DIM: &str = "\x1b[2m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// JSON shape of a frame: column names plus row-major cells.
///
/// Report frames may repeat a column name (spacers), so rows are arrays, not objects.
#[derive(Serialize)]
struct JsonFrame<'a> {
    /// Column names in order.
    columns: Vec<&'a str>,
    /// One array of cells per row.
    rows: Vec<Vec<&'a Value>>,
}

impl<'a> JsonFrame<'a> {
    /// Borrows `frame` in row-major form.
    fn new(frame: &'a Frame) -> Self {
        let rows = (0..frame.num_rows())
            .map(|i| {
                frame
                    .columns()
                    .iter()
                    .filter_map(|c| c.get(i))
                    .collect()
            })
            .collect();
        Self {
            columns: frame.column_names(),
            rows,
        }
    }
}

/// Emits a frame: CSV to `--output`, JSON with `--json`, otherwise a table on stdout.
pub fn emit_frame(frame: &Frame, output: &OutputArgs) -> Result<(), ExitCode> {
    if let Some(path) = &output.output {
        return export_csv(frame, path);
    }
    if output.json {
        return print_json(&JsonFrame::new(frame));
    }
    print_table(frame);
    Ok(())
}

/// Emits a count table; JSON keeps the typed rows, other modes render its frame.
pub fn emit_counts<K>(table: &CountTable<K>, output: &OutputArgs) -> Result<(), ExitCode>
where
    K: Clone + Into<Value> + Serialize,
{
    if output.json && output.output.is_none() {
        return print_json(table);
    }
    emit_frame(&table.to_frame(), output)
}

/// Pretty-prints any serializable value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), ExitCode> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}

/// Writes `frame` to `path` as CSV and reports where it went.
fn export_csv(frame: &Frame, path: &Path) -> Result<(), ExitCode> {
    write_csv(frame, path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })?;
    eprintln!("Wrote {} rows to {}", frame.num_rows(), path.display());
    Ok(())
}

/// Prints `frame` as a table, or a dim note when it has no rows.
pub fn print_table(frame: &Frame) {
    if frame.num_rows() == 0 {
        println!("{}", dim("No rows."));
        return;
    }
    println!("{}", render_table(frame));
}

/// Lays `frame` out as a comfy-table with a header row.
fn render_table(frame: &Frame) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(frame.column_names());
    for i in 0..frame.num_rows() {
        table.add_row(
            frame
                .columns()
                .iter()
                .map(|c| Cell::new(c.get(i).map(Value::render).unwrap_or_default())),
        );
    }
    table
}
