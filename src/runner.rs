// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    io::{stdout, Write},
    path::PathBuf,
};

use log::info;

use clap::Parser;

use crate::clean::{normalize, CleanOutcome};
use crate::errors::CleanError;
use crate::seq::fasta::{open_fasta_file, write_fasta_file};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Input germline FastA file ('|'-delimited headers, name in the second field)
    in_file: PathBuf,

    /// Output FastA file (overwritten)
    out_file: PathBuf,
}

/// Where to read from and where to write to.
#[derive(Debug, Clone)]
pub struct CleanParams {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl From<Cli> for CleanParams {
    fn from(cli: Cli) -> Self {
        CleanParams {
            input: cli.in_file,
            output: cli.out_file,
        }
    }
}

/// Reads `params.input`, deduplicates and normalizes its records, reporting each duplicate to
/// `report` as it is found, then writes the retained records to `params.output`.
///
/// The output file is only touched once the whole input has been processed, so a malformed
/// input never produces (or clobbers) an output file.
pub fn clean_file<W: Write>(params: &CleanParams, report: &mut W) -> Result<CleanOutcome, CleanError> {
    info!("Reading {}", params.input.display());
    let outcome = normalize(open_fasta_file(&params.input)?, report)?;

    write_fasta_file(&params.output, &outcome.primary)?;
    info!(
        "Read {} records, wrote {} to {}, skipped {} duplicates",
        outcome.records_read,
        outcome.primary.len(),
        params.output.display(),
        outcome.duplicates.len()
    );
    Ok(outcome)
}

pub fn run() -> Result<(), CleanError> {
    env_logger::init();
    info!("Starting log");

    let params = CleanParams::from(Cli::parse());
    clean_file(&params, &mut stdout().lock())?;
    Ok(())
}
