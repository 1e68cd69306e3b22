use owo_colors::OwoColorize;

use crate::matrix::{MatrixError, ScoreMatrix};

const BAR_WIDTH: usize = 24;
const LABEL_CAP: usize = 20;

/// One labeled `█`/`░` bar per option for a single criterion.
///
/// Bars are scaled against the matrix-global extrema rather than the
/// column's own, so charts of different criteria are directly comparable.
/// A matrix whose scores are all equal draws full bars; the degenerate
/// range is rescale's error, not the renderer's.
pub fn format_bar_chart(
    matrix: &ScoreMatrix,
    criterion: &str,
    use_colors: bool,
) -> Result<String, MatrixError> {
    if !matrix.has_criterion(criterion) {
        return Err(MatrixError::InvalidCriterion(criterion.to_string()));
    }
    let mn = matrix.min_score()?;
    let range = matrix.max_score()? - mn;

    let labels: Vec<String> = matrix
        .options()
        .iter()
        .map(|opt| truncate_label(opt, LABEL_CAP))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let lines: Vec<String> = matrix
        .options()
        .iter()
        .zip(&labels)
        .map(|(opt, label)| {
            let val = matrix.cell(opt, criterion);
            let ratio = if range > 0.0 { (val - mn) / range } else { 1.0 };
            format!(
                "{:<label_width$}  {} {:>7.2}",
                label,
                score_bar(ratio, BAR_WIDTH, use_colors),
                val
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

/// A chart section per criterion, in first-seen order, separated by blank
/// lines. Fails with [`MatrixError::NoCriteria`] on an unscored matrix.
pub fn format_bar_charts(matrix: &ScoreMatrix, use_colors: bool) -> Result<String, MatrixError> {
    if matrix.criteria().is_empty() {
        return Err(MatrixError::NoCriteria);
    }
    let mut sections = Vec::with_capacity(matrix.criteria().len());
    for cri in matrix.criteria() {
        let heading = if use_colors {
            cri.bold().to_string()
        } else {
            cri.clone()
        };
        sections.push(format!("{}\n{}", heading, format_bar_chart(matrix, cri, use_colors)?));
    }
    Ok(sections.join("\n\n"))
}

fn score_bar(ratio: f64, width: usize, use_colors: bool) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    if !use_colors {
        return format!("{}{}", filled_str, empty_str);
    }

    // traffic-light buckets by position within the matrix range
    let colored = if ratio >= 0.7 {
        filled_str.green().to_string()
    } else if ratio >= 0.4 {
        filled_str.yellow().to_string()
    } else {
        filled_str.red().to_string()
    };
    format!("{}{}", colored, empty_str.dimmed())
}

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
