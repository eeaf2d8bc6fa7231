// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::process;

fn main() {
    if let Err(e) = imgtclean::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
