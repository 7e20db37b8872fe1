//! Fuzz target for snapshot deserialization and validation.
//!
//! Any JSON that parses into a Dataset must survive the full check pass
//! without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use thali::{Dataset, ValidationEngine};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(dataset) = serde_json::from_str::<Dataset>(text) {
        let engine = ValidationEngine::new();
        let _ = engine.validate(&dataset);
        let _ = dataset.key_metrics();
    }
});
