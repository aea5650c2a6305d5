//! Delimited-record reader.
//!
//! `.csv` files are split on commas. Anything else is split on tab or `|`,
//! and both may appear in the same file. The first non-blank line is the
//! header row; every following line becomes one [`DelimitedRecord`].

use crate::domain::model::DelimitedRecord;
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    TabOrPipe,
}

impl Delimiter {
    pub fn for_file_name(file_name: &str) -> Self {
        let is_csv = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            Delimiter::Comma
        } else {
            Delimiter::TabOrPipe
        }
    }

    fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::TabOrPipe => b'\t',
        }
    }
}

/// Byte source that folds `|` into `\t` for tab/pipe files.
///
/// Both bytes are ASCII, so the rewrite never touches a UTF-8 sequence.
pub struct DelimitedSource<R> {
    inner: R,
    delimiter: Delimiter,
}

impl<R: Read> Read for DelimitedSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        if self.delimiter == Delimiter::TabOrPipe {
            buf[..n]
                .iter_mut()
                .filter(|b| **b == b'|')
                .for_each(|b| *b = b'\t');
        }
        Ok(n)
    }
}

/// Lazy, single-pass iterator over the records of one delimited file.
pub struct RecordReader<R: Read> {
    rows: csv::StringRecordsIntoIter<DelimitedSource<R>>,
    headers: Option<Vec<String>>,
    delimiter: Delimiter,
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R, file_name: &str) -> Self {
        let delimiter = Delimiter::for_file_name(file_name);
        let rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter.byte())
            .quoting(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(DelimitedSource {
                inner: source,
                delimiter,
            })
            .into_records();

        Self {
            rows,
            headers: None,
            delimiter,
        }
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Header names once the first line has been consumed.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<DelimitedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = match self.rows.next()? {
                Ok(row) => row,
                Err(e) => return Some(Err(e.into())),
            };

            // 只有空白的行（trim 後剩一個空欄位）視為空行
            if row.len() == 1 && row[0].is_empty() {
                continue;
            }

            if let Some(headers) = &self.headers {
                let values: Vec<&str> = row.iter().collect();
                return Some(Ok(DelimitedRecord::from_pairs(
                    headers.as_slice(),
                    values.as_slice(),
                )));
            }

            let headers: Vec<String> = row.iter().map(|h| h.trim().to_string()).collect();
            tracing::debug!("Header row: {:?}", headers);
            self.headers = Some(headers);
        }
    }
}

/// Reads every record of an in-memory file.
pub fn read_records(data: &[u8], file_name: &str) -> Result<Vec<DelimitedRecord>> {
    RecordReader::new(data, file_name).collect()
}
