use csv::{ReaderBuilder, StringRecord};
use std::time::Instant;
use tracing::info;

use crate::error::{ReportError, Result};

pub const PATH_COLUMN: usize = 0;
pub const TIMESTAMP_COLUMN: usize = 1;
pub const USER_AGENT_COLUMN: usize = 2;

/// One comma-separated record of the access log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the fetched text.
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn field(&self, column: usize) -> Result<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or(ReportError::RowShape {
                line: self.line,
                column,
                found: self.fields.len(),
            })
    }

    pub fn path(&self) -> Result<&str> {
        self.field(PATH_COLUMN)
    }

    pub fn timestamp(&self) -> Result<&str> {
        self.field(TIMESTAMP_COLUMN)
    }

    pub fn user_agent(&self) -> Result<&str> {
        self.field(USER_AGENT_COLUMN)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
impl From<Vec<Vec<&str>>> for Dataset {
    fn from(records: Vec<Vec<&str>>) -> Self {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(idx, fields)| {
                Row::new(idx + 1, fields.into_iter().map(str::to_string).collect())
            })
            .collect();
        Self { rows }
    }
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A final terminator does not
/// start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(&['\n', '\r'][..]) {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

fn parse_fields(line_number: usize, line: &str) -> Result<Vec<String>> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|source| ReportError::Csv {
            line: line_number,
            source,
        })?;

    Ok(record.iter().map(str::to_string).collect())
}

/// Parses `text` line by line as standard CSV, so quoted fields may hold
/// commas. An empty line becomes a row without fields.
pub fn parse_rows(text: &str) -> Result<Dataset> {
    let start_time = Instant::now();

    let rows = split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| Ok(Row::new(idx + 1, parse_fields(idx + 1, line)?)))
        .collect::<Result<Vec<Row>>>()?;

    info!(
        action = "complete",
        component = "csv_parse",
        row_count = rows.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Parsed access log rows"
    );

    Ok(Dataset { rows })
}
