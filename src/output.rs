//! Output formatting for search results

use crate::query::results::SearchResult;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Longest text shown per result line, in characters
const TEXT_PREVIEW_CHARS: usize = 120;

/// Print results as `score  id  text` lines
pub fn print_results(results: &[SearchResult], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_results(&mut stdout, results)
}

/// Write results to any color-capable writer
pub fn write_results<W: WriteColor>(out: &mut W, results: &[SearchResult]) -> io::Result<()> {
    let id_width = results.iter().map(|r| r.id.chars().count()).max().unwrap_or(0);

    for result in results {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>6.2}", result.score)?;
        out.reset()?;
        write!(out, "  ")?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{:<width$}", result.id, width = id_width)?;
        out.reset()?;

        writeln!(out, "  {}", preview(&result.text))?;
    }

    Ok(())
}

/// Print results as a JSON array
pub fn print_json(results: &[SearchResult]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, results)?;
    writeln!(lock)
}

/// Single-line preview: newlines flattened, long text cut at a char boundary
fn preview(text: &str) -> String {
    let mut line: String = text
        .chars()
        .take(TEXT_PREVIEW_CHARS)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if text.chars().nth(TEXT_PREVIEW_CHARS).is_some() {
        line.push_str("...");
    }
    line
}
