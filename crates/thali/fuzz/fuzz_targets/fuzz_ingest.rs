//! Fuzz target for listings ingestion.
//!
//! This fuzzer tests that the CSV/TSV ingestor:
//! 1. Never panics on malformed input
//! 2. Handles all delimiter combinations
//! 3. Doesn't allocate unbounded memory

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use thali::Ingestor;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    // Write to temp file for ingestion
    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let path = temp_file.path();

            // Try ingesting with auto-detection
            let ingestor = Ingestor::new();
            let _ = ingestor.ingest_file(path);
        }
    }
});
