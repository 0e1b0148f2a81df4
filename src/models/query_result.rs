//! Ad-hoc tabular result of a dashboard query.
//! The shape is whatever the SQL returned; nothing here knows the schema.

use regex::Regex;
use rusqlite::types::ValueRef;
use serde_json::{Map, Number, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(i) => Some(*i as f64),
            Cell::Real(f) => Some(*f),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Integer(i) => Value::from(*i),
            Cell::Real(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Blob(b) => Value::Array(b.iter().map(|x| Value::from(*x)).collect()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Real(x) => write!(f, "{}", x),
            Cell::Text(s) => f.write_str(s),
            Cell::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<ValueRef<'_>> for Cell {
    fn from(v: ValueRef<'_>) -> Self {
        match v {
            ValueRef::Null => Cell::Null,
            ValueRef::Integer(i) => Cell::Integer(i),
            ValueRef::Real(f) => Cell::Real(f),
            ValueRef::Text(t) => Cell::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Cell::Blob(b.to_vec()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().filter_map(|r| r.get(idx)).collect())
    }

    /// Counts of each distinct non-null value, most frequent first.
    /// Equal counts keep the order in which the values first appeared.
    pub fn value_counts(&self, name: &str) -> Option<Vec<(String, usize)>> {
        let cells = self.column(name)?;

        let mut order: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for cell in cells.into_iter().filter(|c| !c.is_null()) {
            let key = cell.to_string();
            match index.get(&key) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(key.clone(), order.len());
                    order.push((key, 1));
                }
            }
        }

        order.sort_by(|a, b| b.1.cmp(&a.1));
        Some(order)
    }

    pub fn distinct_count(&self, name: &str) -> Option<usize> {
        let cells = self.column(name)?;
        let set: HashSet<String> = cells
            .into_iter()
            .filter(|c| !c.is_null())
            .map(|c| c.to_string())
            .collect();
        Some(set.len())
    }

    /// Rows whose text value in `name` matches `pattern`. Non-text cells never match.
    pub fn count_matching(&self, name: &str, pattern: &Regex) -> Option<usize> {
        let cells = self.column(name)?;
        Some(
            cells
                .into_iter()
                .filter_map(|c| c.as_text())
                .filter(|s| pattern.is_match(s))
                .count(),
        )
    }

    /// `[{column: value, ...}, ...]`
    pub fn to_json_records(&self) -> Value {
        let records = self
            .rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (col, cell) in self.columns.iter().zip(row) {
                    obj.insert(col.clone(), cell.to_json());
                }
                Value::Object(obj)
            })
            .collect();
        Value::Array(records)
    }
}
