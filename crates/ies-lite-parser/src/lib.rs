// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IES-Lite Parser - Single-pass parser for IES LM-63 photometric files
//!
//! This crate turns an ordered sequence of text lines into a validated
//! [`PhotometricModel`]. The caller is responsible for splitting a source
//! file into lines (no file I/O happens here); the parser performs one
//! forward pass with no backtracking and fails fast with a descriptive
//! error on any structural, format, or numeric violation.
//!
//! # Example
//!
//! ```
//! let lines = [
//!     "IESNA:LM-63-2002",
//!     "[MANUFAC] Acme Lighting",
//!     "TILT=NONE",
//!     "1 1000 1 1 1 1 2 0 0 0 1 1 100 0 0 0",
//! ];
//! let model = ies_lite_parser::parse(&lines).unwrap();
//! assert_eq!(model.lumens_per_lamp, 1000.0);
//! ```

mod parser;
mod scanner;
mod stream;

pub use parser::FORMAT_MARKER;
pub use scanner::{find_tilt_line, parse_keyword_line, parse_tilt_directive, TiltDirective};
pub use stream::ValueStream;

use ies_lite_model::{PhotometricModel, Result};

/// Parser configuration
///
/// `ignore_header_and_keyword` skips the format-marker check on line 0 and
/// all keyword extraction; the TILT line is still required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseSettings {
    /// Skip header validation and keyword parsing
    pub ignore_header_and_keyword: bool,
}

impl ParseSettings {
    /// Create settings with everything enabled (the strict default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to skip header validation and keyword parsing
    pub fn with_ignore_header_and_keyword(mut self, enabled: bool) -> Self {
        self.ignore_header_and_keyword = enabled;
        self
    }
}

/// Parse IES file lines with default settings
pub fn parse(lines: &[&str]) -> Result<PhotometricModel> {
    parser::parse_lines(lines, &ParseSettings::default())
}

/// Parse IES file lines with explicit settings
pub fn parse_with(lines: &[&str], settings: &ParseSettings) -> Result<PhotometricModel> {
    parser::parse_lines(lines, settings)
}

/// Parse a whole file's content, splitting it into lines first
///
/// Convenience wrapper for callers holding the file as one string; splits on
/// line terminators (`\n`, with any trailing `\r` trimmed) and parses with
/// default settings.
pub fn parse_str(content: &str) -> Result<PhotometricModel> {
    let lines: Vec<&str> = content.lines().collect();
    parse(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_str_splits_lines_including_crlf() {
        let content = "IESNA:LM-63-2002\r\nTILT=NONE\r\n1 1000 1 1 1 1 2 0 0 0 1 1 100 0 0 0\r\n";
        let model = parse_str(content).unwrap();
        assert_eq!(model.number_of_lamps, 1);
        assert_eq!(model.vertical_angles(), &[0.0]);
    }

    #[test]
    fn settings_builder_toggles_flag() {
        assert!(!ParseSettings::new().ignore_header_and_keyword);
        assert!(
            ParseSettings::new()
                .with_ignore_header_and_keyword(true)
                .ignore_header_and_keyword
        );
    }
}
