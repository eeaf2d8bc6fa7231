// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

//! Name-based deduplication and sequence normalization of germline records.
//!
//! Each record's name is the second `|`-delimited field of its header (e.g. `IGHA1*01` in
//! `J00220|IGHA1*01|Homo_sapiens|F|...`). The first record seen under a name is kept; later
//! records with the same name are dropped and reported as [`Duplicate`]s, each pointing back at
//! the header of the record that claimed the name first.

use std::{
    collections::HashMap,
    fmt,
    io::{self, Write},
};

use log::{debug, warn};

use crate::errors::CleanError;
use crate::seq::record::SeqRecord;

/// Gap character stripped from sequences.
pub const GAP: char = '.';

/// Field separator in headers.
pub const FIELD_SEP: char = '|';

/// A retained record. `name` doubles as the record's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub name: String,
    pub description: String,
    pub sequence: String,
}

impl NormalizedRecord {
    /// The view that is written out: the description is just the name.
    pub fn primary(name: &str, sequence: &str) -> Self {
        NormalizedRecord {
            name: String::from(name),
            description: String::from(name),
            sequence: String::from(sequence),
        }
    }

    /// The view that keeps the original header, for tracing duplicates back to their source.
    pub fn traced(name: &str, description: &str, sequence: &str) -> Self {
        NormalizedRecord {
            name: String::from(name),
            description: String::from(description),
            sequence: String::from(sequence),
        }
    }
}

// Two-line FastA block, without the final newline. Only the name goes on the header line.
impl fmt::Display for NormalizedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.name, self.sequence)
    }
}

/// A record dropped because its name had already been claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub name: String,
    pub description: String,
    pub original_description: String,
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Duplicate sequence name found: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(
            f,
            "Duplicate of sequence with name {} and description: {}",
            self.name, self.original_description
        )?;
        write!(f, "Skipping duplicate sequence.")
    }
}

/// Result of one normalization pass.
#[derive(Debug, Default)]
pub struct CleanOutcome {
    pub records_read: usize,
    /// Retained records in first-appearance order; this is what gets written.
    pub primary: Vec<NormalizedRecord>,
    /// Same records as `primary`, index for index, with their original headers.
    pub traced: Vec<NormalizedRecord>,
    pub duplicates: Vec<Duplicate>,
}

/// Returns the name field of a header, or `None` if the header has no `|`.
pub fn canonical_name(header: &str) -> Option<&str> {
    header.split(FIELD_SEP).nth(1)
}

/// Removes gaps and upper-cases the remaining residues.
pub fn clean_sequence(sequence: &str) -> String {
    sequence
        .chars()
        .filter(|&c| c != GAP)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Single-pass, first-wins deduplicator. Feed records in input order with [`Normalizer::push`],
/// then call [`Normalizer::finish`].
#[derive(Debug, Default)]
pub struct Normalizer {
    // name -> index into outcome.traced
    seen: HashMap<String, usize>,
    outcome: CleanOutcome,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the next record. Returns the [`Duplicate`] it was recorded as, if its name had
    /// already been claimed.
    pub fn push(&mut self, record: &SeqRecord) -> Result<Option<&Duplicate>, CleanError> {
        self.outcome.records_read += 1;
        let name = canonical_name(&record.header).ok_or_else(|| CleanError::MalformedHeader {
            record: self.outcome.records_read,
            header: record.header.clone(),
        })?;

        match self.seen.get(name) {
            Some(&idx) => {
                let original = &self.outcome.traced[idx];
                warn!(
                    "Skipping duplicate of {} (first seen as '{}')",
                    name, original.description
                );
                self.outcome.duplicates.push(Duplicate {
                    name: String::from(name),
                    description: record.header.clone(),
                    original_description: original.description.clone(),
                });
                Ok(self.outcome.duplicates.last())
            }
            None => {
                debug!("Keeping {}", name);
                let sequence = clean_sequence(&record.sequence);
                self.seen.insert(String::from(name), self.outcome.traced.len());
                self.outcome
                    .primary
                    .push(NormalizedRecord::primary(name, &sequence));
                self.outcome
                    .traced
                    .push(NormalizedRecord::traced(name, &record.header, &sequence));
                Ok(None)
            }
        }
    }

    pub fn finish(self) -> CleanOutcome {
        self.outcome
    }
}

/// Deduplicates and normalizes a stream of records, stopping at the first error.
///
/// Each duplicate is written to `report` as soon as it is found, so the report covers every
/// duplicate that preceded a failing record.
pub fn normalize<I, W>(records: I, report: &mut W) -> Result<CleanOutcome, CleanError>
where
    I: IntoIterator<Item = Result<SeqRecord, CleanError>>,
    W: Write,
{
    let mut normalizer = Normalizer::new();
    for record in records {
        if let Some(dup) = normalizer.push(&record?)? {
            write_duplicate(report, dup)?;
        }
    }
    Ok(normalizer.finish())
}

/// Writes one duplicate block followed by a blank line, and flushes.
pub fn write_duplicate<W: Write>(writer: &mut W, duplicate: &Duplicate) -> io::Result<()> {
    writeln!(writer, "{}\n", duplicate)?;
    writer.flush()
}
