//! Bordered fixed-width tables for list output
//!
//! ```text
//! +-----+-------+
//! | Id  | IaaS  |
//! +-----+-------+
//! | id1 | iaas1 |
//! +-----+-------+
//! ```
//!
//! Cells may hold several lines separated by `\n`; the row grows to the
//! tallest cell and the other cells are padded with blanks.

use std::fmt;

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    line_separator: bool,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            line_separator: false,
        }
    }

    /// Draw a border between every row, not just after the last one
    #[must_use]
    pub fn with_line_separator(mut self, enabled: bool) -> Self {
        self.line_separator = enabled;
        self
    }

    /// Append a row; missing cells render empty, extra cells are dropped
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = row.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                let widest = cell.split('\n').map(UnicodeWidthStr::width).max().unwrap_or(0);
                *width = (*width).max(widest);
            }
        }
        widths
    }

    fn border(widths: &[usize], out: &mut String) {
        out.push('+');
        for width in widths {
            out.push_str(&"-".repeat(width + 2));
            out.push('+');
        }
        out.push('\n');
    }

    fn line(widths: &[usize], cells: &[&str], out: &mut String) {
        out.push('|');
        for (width, cell) in widths.iter().zip(cells) {
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(width.saturating_sub(cell.width())));
            out.push_str(" |");
        }
        out.push('\n');
    }

    fn row(widths: &[usize], row: &[String], out: &mut String) {
        let lines: Vec<Vec<&str>> = row.iter().map(|cell| cell.split('\n').collect()).collect();
        let height = lines.iter().map(Vec::len).max().unwrap_or(1);
        for index in 0..height {
            let cells: Vec<&str> = lines
                .iter()
                .map(|cell| cell.get(index).copied().unwrap_or(""))
                .collect();
            Self::line(widths, &cells, out);
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        Self::border(&widths, &mut out);
        let headers: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        Self::line(&widths, &headers, &mut out);
        Self::border(&widths, &mut out);

        for row in &self.rows {
            Self::row(&widths, row, &mut out);
            if self.line_separator {
                Self::border(&widths, &mut out);
            }
        }
        if !self.line_separator && !self.rows.is_empty() {
            Self::border(&widths, &mut out);
        }

        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render `key=value` pairs one per line, sorted by key
pub fn key_value_lines<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_cells_with_separators() {
        let mut table = Table::new(["Id", "IaaS", "Address", "Creation Params"]).with_line_separator(true);
        table.add_row(["id1", "iaas1", "addr1", "param1=value1"]);
        table.add_row(["id2", "iaas2", "addr2", "param1=value1\nparam2=value2"]);

        let expected = "\
+-----+-------+---------+-----------------+
| Id  | IaaS  | Address | Creation Params |
+-----+-------+---------+-----------------+
| id1 | iaas1 | addr1   | param1=value1   |
+-----+-------+---------+-----------------+
| id2 | iaas2 | addr2   | param1=value1   |
|     |       |         | param2=value2   |
+-----+-------+---------+-----------------+
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_without_separators() {
        let mut table = Table::new(["Name", "Type"]);
        table.add_row(["hipache", "hipache"]);
        table.add_row(["galeb-production", "galeb"]);

        let expected = "\
+------------------+---------+
| Name             | Type    |
+------------------+---------+
| hipache          | hipache |
| galeb-production | galeb   |
+------------------+---------+
";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = Table::new(["Pool", "Kind"]);
        assert!(table.is_empty());
        assert_eq!(
            table.render(),
            "+------+------+\n| Pool | Kind |\n+------+------+\n"
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(["A", "B"]);
        table.add_row(["x"]);
        assert_eq!(table.render(), "+---+---+\n| A | B |\n+---+---+\n| x |   |\n+---+---+\n");
    }

    #[test]
    fn test_wide_characters() {
        let mut table = Table::new(["Name"]);
        table.add_row(["日本"]);
        assert_eq!(table.render(), "+------+\n| Name |\n+------+\n| 日本 |\n+------+\n");
    }

    #[test]
    fn test_key_value_lines_sorted() {
        let lines = key_value_lines([("type", "m1.small"), ("region", "us-east-1")]);
        assert_eq!(lines, "region=us-east-1\ntype=m1.small");
        assert_eq!(key_value_lines(std::iter::empty()), "");
    }
}
