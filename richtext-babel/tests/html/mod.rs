//! HTML conversion tests
//!
//! Import, export and round trips through the conversion engine.

mod export;
mod import;
mod roundtrip;
