//! Markdown table output.

/// Markdown output formatter
pub struct MarkdownOutput;

impl MarkdownOutput {
    /// Pipe table. Columns listed in `right` get a right-aligned separator.
    pub fn table(headers: &[&str], rows: &[Vec<String>], right: &[usize]) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(format!("| {} |", headers.join(" | ")));

        let separator: Vec<&str> = (0..headers.len())
            .map(|i| if right.contains(&i) { "---:" } else { "---" })
            .collect();
        lines.push(format!("|{}|", separator.join("|")));

        for row in rows {
            let cells: Vec<String> = row.iter().map(|c| c.replace('|', "\\|")).collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }
        lines.join("\n")
    }

    /// Second-level heading followed by a blank line.
    pub fn section(title: &str, body: &str) -> String {
        format!("## {}\n\n{}\n", title, body)
    }
}
