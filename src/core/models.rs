//! Core data models for tabular documents.

use serde::{Deserialize, Serialize};

#[cfg(feature = "json-input")]
use std::path::Path;

#[cfg(feature = "json-input")]
use crate::error::{Result, RowpackError};

/// One record: an ordered sequence of opaque field strings.
///
/// Rows in the same document may have different lengths.
pub type Row = Vec<String>;

/// An ordered sequence of rows, in the exact order they are written.
///
/// Serializes as a plain JSON array of arrays of strings.
///
/// # Example
///
/// ```rust
/// use rowpack::Document;
///
/// let doc = Document::new()
///     .with_row(["Name", "Age"])
///     .with_row(["John Doe", "30"]);
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.rows()[1][0], "John Doe");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    rows: Vec<Row>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from already-built rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The built-in document written when no input is given.
    pub fn sample() -> Self {
        Self::new()
            .with_row(["Name", "Age", "Occupation"])
            .with_row(["John Doe", "30", "Developer"])
            .with_row(["Jane Doe", "29", "Designer"])
    }

    /// Builder-style method to append a row.
    #[must_use]
    pub fn with_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(row);
        self
    }

    /// Appends a row.
    pub fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Parses a document from a JSON array of arrays of strings.
    ///
    /// Malformed JSON yields [`RowpackError::Json`]; well-formed JSON of the
    /// wrong shape yields [`RowpackError::InvalidDocument`] naming the first
    /// offending position (1-based).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rowpack::Document;
    ///
    /// let doc = Document::from_json_str(r#"[["a", "b"], ["c"]]"#).unwrap();
    /// assert_eq!(doc.len(), 2);
    ///
    /// let err = Document::from_json_str(r#"[["a", 1]]"#).unwrap_err();
    /// assert!(err.is_invalid_document());
    /// ```
    #[cfg(feature = "json-input")]
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::from_json_value(value)
    }

    /// Reads and parses a JSON document from a file.
    #[cfg(feature = "json-input")]
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading document from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "json-input")]
    fn from_json_value(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        let Value::Array(raw_rows) = value else {
            return Err(RowpackError::invalid_document(
                "expected a JSON array of rows",
            ));
        };

        let mut rows = Vec::with_capacity(raw_rows.len());
        for (row_idx, raw_row) in raw_rows.into_iter().enumerate() {
            let Value::Array(raw_fields) = raw_row else {
                return Err(RowpackError::invalid_document(format!(
                    "row {} is not an array",
                    row_idx + 1
                )));
            };

            let mut row = Vec::with_capacity(raw_fields.len());
            for (field_idx, raw_field) in raw_fields.into_iter().enumerate() {
                match raw_field {
                    Value::String(s) => row.push(s),
                    other => {
                        return Err(RowpackError::invalid_document(format!(
                            "row {}, field {} is not a string (got {})",
                            row_idx + 1,
                            field_idx + 1,
                            other
                        )));
                    }
                }
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }
}

impl From<Vec<Row>> for Document {
    fn from(rows: Vec<Row>) -> Self {
        Self::from_rows(rows)
    }
}

impl FromIterator<Row> for Document {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for Document {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
