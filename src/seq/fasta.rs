// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Lines, Write};
use std::mem;
use std::path::Path;

use log::debug;

use crate::clean::NormalizedRecord;
use crate::errors::CleanError;
use crate::seq::record::SeqRecord;

/// Lazy iterator over the records of a FastA stream.
///
/// Records are yielded in file order. Blank lines and ';' comment lines before the first header
/// are skipped; any other text there is an error, after which the iterator is exhausted.
pub struct FastaRecords<R: BufRead> {
    lines: Lines<R>,
    line_num: usize,
    header: Option<String>,
    sequence: String,
    done: bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        FastaRecords {
            lines: reader.lines(),
            line_num: 0,
            header: None,
            sequence: String::new(),
            done: false,
        }
    }

    fn take_record(&mut self, header: String) -> SeqRecord {
        SeqRecord {
            header,
            sequence: mem::take(&mut self.sequence),
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<SeqRecord, CleanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                None => {
                    self.done = true;
                    let header = self.header.take()?;
                    return Some(Ok(self.take_record(header)));
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                Some(Ok(line)) => line,
            };
            self.line_num += 1;
            let l = line.trim_end();

            if let Some(hdr) = l.strip_prefix('>') {
                if let Some(prev) = self.header.replace(String::from(hdr)) {
                    return Some(Ok(self.take_record(prev)));
                }
            } else if self.header.is_none() {
                if l.trim_start().is_empty() || l.starts_with(';') {
                    continue;
                }
                self.done = true;
                return Some(Err(CleanError::Format(format!(
                    "line {}: sequence data before first header",
                    self.line_num
                ))));
            } else {
                // append line to current record's sequence
                self.sequence
                    .extend(l.chars().filter(|c| !c.is_whitespace()));
            }
        }
    }
}

/// Opens `path` for lazy reading. Collect into a [`SeqFile`](crate::seq::file::SeqFile) to hold the whole file.
pub fn open_fasta_file<P: AsRef<Path>>(path: P) -> Result<FastaRecords<BufReader<File>>, CleanError> {
    let file = File::open(path)?;
    Ok(FastaRecords::new(BufReader::new(file)))
}

/// Writes records as two-line FastA: `>name`, then the whole sequence on a single line. Lines
/// are never wrapped.
pub fn write_fasta_2line<W: Write>(writer: &mut W, records: &[NormalizedRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes `records` to it in two-line FastA.
pub fn write_fasta_file<P: AsRef<Path>>(
    path: P,
    records: &[NormalizedRecord],
) -> Result<(), CleanError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_fasta_2line(&mut writer, records)?;
    writer.flush()?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
