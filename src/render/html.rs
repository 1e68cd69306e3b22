use crate::matrix::ScoreMatrix;

/// Render the matrix as a static HTML table, criteria across, options down.
///
/// Labels are HTML-escaped; values render at two decimals. Reads the matrix
/// only through its ordered accessors.
pub fn format_html(matrix: &ScoreMatrix) -> String {
    let mut html = String::from("<table>\n  <thead>\n    <tr><th>Option</th>");
    for cri in matrix.criteria() {
        html.push_str("<th>");
        html.push_str(&escape(cri));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");
    for opt in matrix.options() {
        html.push_str("    <tr><td>");
        html.push_str(&escape(opt));
        html.push_str("</td>");
        for cri in matrix.criteria() {
            html.push_str(&format!("<td>{:.2}</td>", matrix.cell(opt, cri)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");
    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn travel() -> ScoreMatrix {
        let mut m = ScoreMatrix::new(["Car", "Bus", "Train"]);
        m.set_score("Car", "Fuel", -1.0).unwrap();
        m.set_score("Train", "Price", 1.0).unwrap();
        m
    }

    #[test]
    fn test_format_html_structure() {
        let html = format_html(&travel());
        assert!(html.starts_with("<table>"));
        assert!(html.contains("<thead>"));
        assert!(html.contains("<tbody>"));
        assert!(html.trim_end().ends_with("</table>"));
    }

    #[test]
    fn test_format_html_cells() {
        let html = format_html(&travel());
        assert!(html.contains("<th>Fuel</th><th>Price</th>"));
        assert!(html.contains("<td>Car</td><td>-1.00</td><td>0.00</td>"));
        assert!(html.contains("<td>Train</td><td>0.00</td><td>1.00</td>"));
    }

    #[test]
    fn test_format_html_escapes_labels() {
        let mut m = ScoreMatrix::new(["A<B"]);
        m.set_score("A<B", "R&D \"score\"", 1.0).unwrap();
        let html = format_html(&m);
        assert!(html.contains("<td>A&lt;B</td>"));
        assert!(html.contains("<th>R&amp;D &quot;score&quot;</th>"));
        assert!(!html.contains("A<B"));
    }

    #[test]
    fn test_format_html_no_criteria() {
        let m = ScoreMatrix::new(["Car"]);
        let html = format_html(&m);
        // still a well-formed table with just the option column
        assert!(html.contains("<tr><th>Option</th></tr>"));
        assert!(html.contains("<tr><td>Car</td></tr>"));
    }
}
