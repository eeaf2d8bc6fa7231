// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use imgtclean::{
    clean::CleanOutcome,
    errors::CleanError,
    runner::{clean_file, CleanParams},
};

pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

// Outcome of cleaning one file into a scratch directory. The directory lives as long as this
// struct.
#[allow(dead_code)]
pub struct Rig {
    pub dir: TempDir,
    pub output: PathBuf,
    pub result: Result<CleanOutcome, CleanError>,
    pub report: String,
}

#[allow(dead_code)]
impl Rig {
    pub fn output_text(&self) -> String {
        std::fs::read_to_string(&self.output).expect("read output")
    }
}

#[allow(dead_code)]
pub fn clean_into_tempdir(input: &Path) -> Rig {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("out.fasta");
    let params = CleanParams {
        input: input.to_path_buf(),
        output: output.clone(),
    };
    let mut report: Vec<u8> = Vec::new();
    let result = clean_file(&params, &mut report);
    Rig {
        dir,
        output,
        result,
        report: String::from_utf8(report).expect("utf8 report"),
    }
}

#[allow(dead_code)]
pub fn clean_data_file(name: &str) -> Rig {
    clean_into_tempdir(&data_path(name))
}
