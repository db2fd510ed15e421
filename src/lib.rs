//! lsbstego - hide short text messages in PNG images
//!
//! Command-line front end for `lsb_core`: PNG I/O, configuration and
//! reporting. This library exposes modules for integration testing.

pub mod error;
pub mod imaging;
pub mod models;
pub mod services;
