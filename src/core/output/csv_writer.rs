//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::WriterConfig;
use crate::core::models::Document;
use crate::error::Result;

/// Streams rows into a caller-owned sink as comma-separated text.
///
/// # Format
/// - Delimiter: `,`
/// - Quote: `"`, doubled inside quoted fields
/// - A field is quoted only if it contains `,`, `"`, `\r` or `\n`
/// - Rows end with `\r\n` unless the config says otherwise
/// - A row with no content (no fields, or one empty field) is written as `""`
///
/// The writer borrows the sink for one session. Bytes are buffered
/// internally; call [`flush`](RowWriter::flush) before releasing the sink.
///
/// # Example
///
/// ```rust
/// use rowpack::core::output::RowWriter;
/// use rowpack::config::WriterConfig;
///
/// let mut sink = Vec::new();
/// {
///     let mut writer = RowWriter::new(&mut sink, &WriterConfig::new());
///     writer.write(["Name", "Age", "Occupation"])?;
///     writer.write(["John Doe", "30", "Developer"])?;
///     writer.flush()?;
/// }
/// assert_eq!(sink, b"Name,Age,Occupation\r\nJohn Doe,30,Developer\r\n");
/// # Ok::<(), rowpack::RowpackError>(())
/// ```
pub struct RowWriter<'a, W: Write> {
    inner: csv::Writer<&'a mut W>,
    rows_written: usize,
}

impl<'a, W: Write> RowWriter<'a, W> {
    /// Binds a new writer to `sink`.
    pub fn new(sink: &'a mut W, config: &WriterConfig) -> Self {
        let inner = csv::WriterBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .double_quote(true)
            .quote_style(csv::QuoteStyle::Necessary)
            .flexible(true)
            .terminator(config.terminator.to_csv())
            .buffer_capacity(config.effective_buffer_capacity())
            .from_writer(sink);

        Self {
            inner,
            rows_written: 0,
        }
    }

    /// Serializes one row and appends it to the buffer.
    pub fn write<I, T>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.inner.write_record(row)?;
        self.rows_written += 1;
        log::trace!("Wrote row {}", self.rows_written);
        Ok(())
    }

    /// Writes every row of `document` in order, stopping at the first failure.
    pub fn write_all(&mut self, document: &Document) -> Result<()> {
        for row in document {
            self.write(row)?;
        }
        Ok(())
    }

    /// Forces buffered bytes into the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Number of rows serialized in this session.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }
}

/// Writes a document to a CSV file, creating or truncating it.
///
/// The file is closed when this function returns, on success and on every
/// error path. If it cannot be created, nothing is written.
pub fn write_csv(
    document: &Document,
    output_path: impl AsRef<Path>,
    config: &WriterConfig,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let mut file = File::create(output_path)?;
    log::debug!(
        "Writing {} rows to {} ({} terminator)",
        document.len(),
        output_path.display(),
        config.terminator
    );

    let mut writer = RowWriter::new(&mut file, config);
    writer.write_all(document)?;
    writer.flush()?;
    log::debug!("Flushed {} rows", writer.rows_written());

    Ok(())
}

/// Converts a document to a CSV string.
///
/// # Example
///
/// ```rust
/// use rowpack::core::output::to_csv;
/// use rowpack::config::WriterConfig;
/// use rowpack::Document;
///
/// let doc = Document::new().with_row(["Doe, Jane", r#"He said "hi""#]);
/// let csv = to_csv(&doc, &WriterConfig::new())?;
/// assert_eq!(csv, "\"Doe, Jane\",\"He said \"\"hi\"\"\"\r\n");
/// # Ok::<(), rowpack::RowpackError>(())
/// ```
pub fn to_csv(document: &Document, config: &WriterConfig) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = RowWriter::new(&mut buffer, config);
        writer.write_all(document)?;
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineTerminator;
    use std::io;

    fn render(rows: &[&[&str]]) -> String {
        let mut sink = Vec::new();
        {
            let mut writer = RowWriter::new(&mut sink, &WriterConfig::new());
            for row in rows {
                writer.write(row.iter()).unwrap();
            }
            writer.flush().unwrap();
        }
        String::from_utf8(sink).unwrap()
    }

    /// Sink that accepts `budget` bytes, then fails every call.
    struct FailingSink {
        budget: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_header_and_record() {
        let out = render(&[
            &["Name", "Age", "Occupation"],
            &["John Doe", "30", "Developer"],
        ]);
        assert_eq!(out, "Name,Age,Occupation\r\nJohn Doe,30,Developer\r\n");
    }

    #[test]
    fn test_plain_field_verbatim() {
        assert_eq!(render(&[&["plain text 123"]]), "plain text 123\r\n");
    }

    #[test]
    fn test_quote_doubling() {
        assert_eq!(
            render(&[&[r#"He said "hi""#]]),
            "\"He said \"\"hi\"\"\"\r\n"
        );
    }

    #[test]
    fn test_comma_field_quoted() {
        assert_eq!(render(&[&["Doe, Jane", "x"]]), "\"Doe, Jane\",x\r\n");
    }

    #[test]
    fn test_line_breaks_quoted() {
        assert_eq!(render(&[&["a\nb"]]), "\"a\nb\"\r\n");
        assert_eq!(render(&[&["a\rb"]]), "\"a\rb\"\r\n");
    }

    #[test]
    fn test_leading_space_not_quoted() {
        assert_eq!(render(&[&[" padded ", "\ttab"]]), " padded ,\ttab\r\n");
    }

    #[test]
    fn test_variable_row_lengths() {
        let out = render(&[&["a", "b", "c"], &["d"], &["e", "f"]]);
        assert_eq!(out, "a,b,c\r\nd\r\ne,f\r\n");
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(render(&[&["", ""]]), ",\r\n");
        assert_eq!(render(&[&[""]]), "\"\"\r\n");
        assert_eq!(render(&[&[]]), "\"\"\r\n");
    }

    #[test]
    fn test_zero_rows_zero_bytes() {
        assert_eq!(render(&[]), "");
        assert_eq!(to_csv(&Document::new(), &WriterConfig::new()).unwrap(), "");
    }

    #[test]
    fn test_lf_terminator() {
        let config = WriterConfig::new().with_terminator(LineTerminator::Lf);
        let doc = Document::new().with_row(["a", "b"]).with_row(["c"]);
        assert_eq!(to_csv(&doc, &config).unwrap(), "a,b\nc\n");
    }

    #[test]
    fn test_rows_written() {
        let mut sink = Vec::new();
        let mut writer = RowWriter::new(&mut sink, &WriterConfig::new());
        assert_eq!(writer.rows_written(), 0);
        writer.write_all(&Document::sample()).unwrap();
        assert_eq!(writer.rows_written(), 3);
    }

    #[test]
    fn test_small_buffer_still_complete() {
        let config = WriterConfig::new().with_buffer_capacity(1);
        let out = to_csv(&Document::sample(), &config).unwrap();
        assert_eq!(
            out,
            "Name,Age,Occupation\r\nJohn Doe,30,Developer\r\nJane Doe,29,Designer\r\n"
        );
    }

    #[test]
    fn test_failing_sink_surfaces_io_error() {
        let mut sink = FailingSink { budget: 5 };
        let config = WriterConfig::new().with_buffer_capacity(16);
        let mut writer = RowWriter::new(&mut sink, &config);

        let result = writer
            .write(["Name", "Age", "Occupation"])
            .and_then(|()| writer.flush());
        let err = result.unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_flush_error_surfaces() {
        let mut sink = FailingSink { budget: 0 };
        let mut writer = RowWriter::new(&mut sink, &WriterConfig::new());

        // Fits in the internal buffer, so only flush touches the sink.
        writer.write(["a"]).unwrap();
        assert!(writer.flush().unwrap_err().is_io());
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&Document::sample(), &path, &WriterConfig::new()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Name,Age,Occupation\r\n"));
        assert!(content.ends_with("Jane Doe,29,Designer\r\n"));
    }

    #[test]
    fn test_write_csv_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.csv");

        let err = write_csv(&Document::sample(), &path, &WriterConfig::new()).unwrap_err();
        assert!(err.is_io());
        assert!(!path.exists());
    }
}
