//! Unit tests for hierviz.

mod builder_tests;
mod csv_parser_tests;
mod preparer_tests;
mod settings_tests;
mod snapshot_tests;
