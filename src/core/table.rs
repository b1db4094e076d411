//! Normalized view of the tabular JSON returned by Check_MK views.
//!
//! The payload is an array of arrays: the first row names the columns, every
//! following row holds one service with values in the same positions.

use serde_json::Value;

use super::status::Status;
use crate::error::{CheckError, Result};

pub const COL_DESCRIPTION: &str = "service_description";
pub const COL_STATE: &str = "service_state";
pub const COL_OUTPUT: &str = "svc_plugin_output";
pub const COL_PERFOMETER: &str = "perfometer";
pub const COL_STATE_AGE: &str = "svc_state_age";
pub const COL_CHECK_AGE: &str = "svc_check_age";

/// Resolved column positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub description: usize,
    pub state: usize,
    pub output: Option<usize>,
    pub perfometer: Option<usize>,
    pub state_age: Option<usize>,
    pub check_age: Option<usize>,
}

impl Columns {
    fn resolve(header: &[String]) -> Result<Self> {
        let find = |name: &str| header.iter().position(|column| column == name);
        let required = |name: &str| {
            find(name).ok_or_else(|| CheckError::schema(format!("missing column '{}'", name)))
        };

        Ok(Self {
            description: required(COL_DESCRIPTION)?,
            state: required(COL_STATE)?,
            output: find(COL_OUTPUT),
            perfometer: find(COL_PERFOMETER),
            state_age: find(COL_STATE_AGE),
            check_age: find(COL_CHECK_AGE),
        })
    }
}

/// One service row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub title: String,
    pub state_label: String,
    pub output: String,
    pub perfometer: String,
    pub state_age: String,
    pub check_age: String,
}

impl ServiceRecord {
    pub fn status(&self) -> Status {
        Status::from_state_label(&self.state_label)
    }
}

#[derive(Debug, Clone)]
pub struct ServiceTable {
    columns: Columns,
    rows: Vec<Vec<Value>>,
}

impl ServiceTable {
    /// Parse a raw response body
    pub fn from_json_str(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(mut rows) = value else {
            return Err(CheckError::schema("response is not a JSON array"));
        };
        if rows.is_empty() {
            return Err(CheckError::schema("response is an empty array"));
        }

        let header = parse_header(rows.remove(0))?;
        let columns = Columns::resolve(&header)?;

        let mut table_rows = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let Value::Array(cells) = row else {
                return Err(CheckError::schema(format!("row {} is not an array", index + 1)));
            };
            if cells.len() != header.len() {
                return Err(CheckError::schema(format!(
                    "row {} has {} columns, header has {}",
                    index + 1,
                    cells.len(),
                    header.len()
                )));
            }
            table_rows.push(cells);
        }

        Ok(Self {
            columns,
            rows: table_rows,
        })
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    /// Number of data rows, header excluded
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the rows as records, in table order
    pub fn records(&self) -> impl Iterator<Item = ServiceRecord> + '_ {
        self.rows.iter().map(move |row| self.record(row))
    }

    fn record(&self, row: &[Value]) -> ServiceRecord {
        let cell = |index: Option<usize>| index.map(|i| cell_text(&row[i])).unwrap_or_default();

        ServiceRecord {
            title: cell(Some(self.columns.description)).trim().to_string(),
            state_label: cell(Some(self.columns.state)),
            output: decode_entities(&cell(self.columns.output)),
            perfometer: cell(self.columns.perfometer),
            state_age: cell(self.columns.state_age),
            check_age: cell(self.columns.check_age),
        }
    }
}

fn parse_header(value: Value) -> Result<Vec<String>> {
    let Value::Array(names) = value else {
        return Err(CheckError::schema("header row is not an array"));
    };
    names
        .into_iter()
        .map(|name| match name {
            Value::String(name) => Ok(name),
            other => Err(CheckError::schema(format!(
                "header contains a non-string column name: {}",
                other
            ))),
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Decode the HTML entities Check_MK escapes in plugin output
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
