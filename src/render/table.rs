use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::matrix::ScoreMatrix;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Per-column label cap: share the terminal width across all columns, with
/// a floor so narrow terminals still show something readable.
fn label_cap(matrix: &ScoreMatrix) -> usize {
    let columns = matrix.criteria().len() + 1;
    get_terminal_width()
        .map(|w| (w / columns).saturating_sub(2).max(8))
        .unwrap_or(24)
}

/// Format the matrix as an aligned text table: one header row of criteria,
/// one row per option, two-decimal cells right-aligned per column.
///
/// Reads the matrix only through its ordered accessors.
pub fn format_table(matrix: &ScoreMatrix, use_colors: bool) -> String {
    if matrix.criteria().is_empty() {
        return "No criteria scored yet.".to_string();
    }

    let cap = label_cap(matrix);
    let separator = "  ";

    let option_labels: Vec<String> = matrix
        .options()
        .iter()
        .map(|opt| truncate_label(opt, cap))
        .collect();
    let headers: Vec<String> = matrix
        .criteria()
        .iter()
        .map(|cri| truncate_label(cri, cap))
        .collect();

    // each criterion column is as wide as its header or its widest cell
    let option_width = option_labels
        .iter()
        .map(|l| l.chars().count())
        .chain(["Option".len()])
        .max()
        .unwrap_or(6);
    let cell_texts: Vec<Vec<String>> = matrix
        .options()
        .iter()
        .map(|opt| {
            matrix
                .criteria()
                .iter()
                .map(|cri| format!("{:.2}", matrix.cell(opt, cri)))
                .collect()
        })
        .collect();
    let column_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cell_texts
                .iter()
                .map(|row| row[col].len())
                .chain([header.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(matrix.options().len() + 1);

    let mut header_cells = vec![format!("{:<option_width$}", "Option")];
    for (header, &width) in headers.iter().zip(&column_widths) {
        header_cells.push(format!("{:>width$}", header));
    }
    let header_line = header_cells.join(separator);
    if use_colors {
        lines.push(header_line.bold().to_string());
    } else {
        lines.push(header_line);
    }

    for (label, row) in option_labels.iter().zip(&cell_texts) {
        let mut cells = Vec::with_capacity(row.len() + 1);
        // pad before coloring so escape codes don't count against the width
        let padded = format!("{:<option_width$}", label);
        if use_colors {
            cells.push(padded.cyan().to_string());
        } else {
            cells.push(padded);
        }
        for (text, &width) in row.iter().zip(&column_widths) {
            cells.push(format!("{:>width$}", text));
        }
        lines.push(cells.join(separator));
    }

    lines.join("\n")
}
