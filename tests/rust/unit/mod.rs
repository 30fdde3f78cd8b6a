//! Unit tests - public API of the mapper, exercised the way a storage layer uses it
//!
//! These tests need no database: they check the strings and bind slices a
//! caller would hand to one.

mod config_tests;
mod subset_tests;
