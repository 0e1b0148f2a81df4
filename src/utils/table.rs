//! Table rendering utilities for CLI outputs.

use crate::models::query_result::{Cell, QueryResult};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{bold, pad_right, truncate};
use unicode_width::UnicodeWidthStr;

/// Widest a single column may grow before its cells are cut.
pub const MAX_COLUMN_WIDTH: usize = 40;

const NULL_MARK: &str = "None";

pub struct Column {
    pub header: String,
    pub width: usize,
}

/// Rendered rows; `None` marks a NULL cell.
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(headers: &[String]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.clone(),
                width: UnicodeWidthStr::width(h.as_str()).min(MAX_COLUMN_WIDTH),
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Option<String>>) {
        for (col, value) in self.columns.iter_mut().zip(&row) {
            let text = value.as_deref().unwrap_or(NULL_MARK);
            col.width = col
                .width
                .max(UnicodeWidthStr::width(text))
                .min(MAX_COLUMN_WIDTH);
        }
        self.rows.push(row);
    }

    pub fn from_result(result: &QueryResult) -> Self {
        let mut table = Table::new(&result.columns);
        for row in &result.rows {
            table.add_row(row.iter().map(cell_text).collect());
        }
        table
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let index_w = self.rows.len().saturating_sub(1).to_string().len();
        out.push_str(&" ".repeat(index_w + 1));
        for col in &self.columns {
            let h = pad_right(&truncate(&col.header, col.width), col.width);
            out.push_str(&bold(&h));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("{GREY}{:>index_w$}{RESET} ", i));
            for (col, value) in self.columns.iter().zip(row) {
                match value {
                    Some(text) => {
                        out.push_str(&pad_right(&truncate(text, col.width), col.width));
                        out.push_str("  ");
                    }
                    None => {
                        let v = pad_right(&truncate(NULL_MARK, col.width), col.width);
                        out.push_str(&format!("{GREY}{v}{RESET}  "));
                    }
                }
            }
            out.push('\n');
        }

        out
    }
}

fn cell_text(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Null => None,
        Cell::Real(f) => Some(format!("{:.4}", f)),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_and_values() {
        let mut r = QueryResult::new(vec!["violation".into(), "count".into()]);
        r.rows.push(vec![Cell::Text("Speeding".into()), Cell::Integer(3)]);
        r.rows.push(vec![Cell::Null, Cell::Real(1.5)]);

        let out = Table::from_result(&r).render();
        assert!(out.contains("violation"));
        assert!(out.contains("Speeding"));
        assert!(out.contains("1.5000"));
        assert!(out.contains(NULL_MARK));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn long_cells_are_cut() {
        let mut t = Table::new(&["x".to_string()]);
        t.add_row(vec![Some("y".repeat(100))]);
        assert_eq!(t.columns[0].width, MAX_COLUMN_WIDTH);
        assert!(t.render().contains('…'));
    }

    #[test]
    fn only_null_cells_are_greyed() {
        let mut r = QueryResult::new(vec!["a".into(), "b".into()]);
        r.rows.push(vec![Cell::Text("None".into()), Cell::Null]);

        let t = Table::from_result(&r);
        assert_eq!(t.rows[0], vec![Some("None".to_string()), None]);

        let out = t.render();
        assert_eq!(out.matches(GREY).count(), 2, "index column and the NULL cell");
        assert!(out.contains(&format!("{GREY}None{RESET}")));
    }
}
