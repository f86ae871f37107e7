//! Single test binary entry point.
//!
//! All integration tests are compiled into one binary to keep link time
//! down.
//!
//! Structure:
//! - unit: Single-component tests (parsing, cleaning, building, settings)
//! - integration: Upload-to-download workflows through a `Session`

mod unit;
