use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Display;

/// A pure analysis over decoded input text. Reports render themselves as
/// the fixed multi-line text via `Display` and as JSON via `Serialize`.
pub trait Analyzer {
    type Report: Display + Serialize;

    fn name(&self) -> &'static str;

    fn run(&self, input: &str) -> Result<Self::Report>;
}

/// Supplies decoded UTF-8 text to an analyzer. Transport decoding beyond
/// UTF-8 validation (e.g. Base64) happens outside this crate.
pub trait InputSource {
    fn read_input(&self, spec: &str) -> Result<String>;
}
