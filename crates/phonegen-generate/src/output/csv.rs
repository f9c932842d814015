use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::GenerationError;
use crate::generator::PhoneNumber;
use crate::output::atomic::{StagedFile, write_atomic_with};

/// Sole column of the output file.
pub const HEADER: &str = "Phone Number";

/// Write numbers as a single-column CSV with a header row.
///
/// Any existing file at `path` is replaced; on failure it is left as it was.
/// Returns the number of bytes written.
pub fn write_phone_numbers_csv(
    path: &Path,
    numbers: &[PhoneNumber],
) -> Result<u64, GenerationError> {
    write_atomic_with(path, |tmp_path| write_csv_file(tmp_path, numbers))
}

/// Write numbers next to `path` without replacing it yet.
///
/// Returns the staged file and the number of bytes written.
pub fn stage_phone_numbers_csv(
    path: &Path,
    numbers: &[PhoneNumber],
) -> Result<(StagedFile, u64), GenerationError> {
    StagedFile::stage(path, |tmp_path| write_csv_file(tmp_path, numbers))
}

/// Read a file produced by [`write_phone_numbers_csv`], header excluded.
pub fn read_phone_numbers_csv(path: &Path) -> Result<Vec<String>, GenerationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers = reader.headers()?;
    if headers.len() != 1 || &headers[0] != HEADER {
        return Err(GenerationError::UnexpectedHeader {
            path: path.to_path_buf(),
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    reader
        .records()
        .map(|record| -> Result<String, GenerationError> {
            let record = record?;
            Ok(record.get(0).unwrap_or_default().to_string())
        })
        .collect()
}

fn write_csv_file(path: &Path, numbers: &[PhoneNumber]) -> Result<u64, GenerationError> {
    let counting = CountingWriter::new(BufWriter::new(File::create(path)?));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record([HEADER])?;
    for number in numbers {
        writer.write_record([number.as_str()])?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    let bytes = counting.bytes_written();
    let file = counting
        .into_inner()
        .into_inner()
        .map_err(|err| err.into_error())?;
    file.sync_all()?;
    Ok(bytes)
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
