//! Elastic ASCII table rendering for stdout display.

use std::fmt::Write as _;

pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(widths.len()) {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    append_row(&mut output, headers, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat((*w).max(3))).collect();
    append_row(&mut output, &separator, &widths);
    for row in rows {
        append_row(&mut output, row, &widths);
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn append_row(output: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            line.push_str("  ");
        }
        let sanitized: String = cell
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .collect();
        line.push_str(&sanitized);
        let width = widths.get(idx).copied().unwrap_or(0).max(3);
        let padding = width.saturating_sub(sanitized.chars().count());
        line.push_str(&" ".repeat(padding));
    }
    let _ = writeln!(output, "{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let rendered = render_table(
            &strings(&["Name", "Age"]),
            &[strings(&["Ada Lovelace", "36"]), strings(&["Bob", "5"])],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name          Age");
        assert!(lines[1].starts_with("----"));
        assert_eq!(lines[2], "Ada Lovelace  36");
        assert_eq!(lines[3], "Bob           5");
    }

    #[test]
    fn control_characters_are_flattened_to_spaces() {
        let rendered = render_table(&strings(&["h"]), &[strings(&["a\nb"])]);
        assert!(rendered.contains("a b"));
    }
}
