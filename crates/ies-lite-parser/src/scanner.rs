// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line scanning for the structured part of an LM-63 file
//!
//! Locates the TILT directive, extracts `[KEYWORD] value` lines, and decodes
//! the TILT line itself. Byte searching goes through `memchr`.

use ies_lite_model::{IesError, Result};
use memchr::{memchr, memmem};

/// Literal token that marks the TILT directive line
pub const TILT_FLAG: &str = "TILT";

const TILT_NONE: &str = "NONE";
const TILT_INCLUDE: &str = "INCLUDE";

/// Decoded TILT directive, before any inline payload has been parsed
///
/// `Include` is a placeholder here: the angle/factor block lives in the
/// value stream and is attached to the model later.
#[derive(Clone, PartialEq, Debug)]
pub enum TiltDirective {
    None,
    Include,
    File(String),
}

/// Find the first line containing the literal `TILT` token
///
/// The scan starts at line 0 and is unconditional: a file without a TILT
/// line is structurally invalid even when keyword parsing is skipped.
pub fn find_tilt_line(lines: &[&str]) -> Option<usize> {
    let finder = memmem::Finder::new(TILT_FLAG);
    lines
        .iter()
        .position(|line| finder.find(line.as_bytes()).is_some())
}

/// Extract a `[KEYWORD] value` pair from a header-block line
///
/// Returns `None` for lines without a bracketed keyword (those are silently
/// skipped) and for empty bracket spans. The value is everything after the
/// closing bracket, trimmed.
pub fn parse_keyword_line(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let open = memchr(b'[', bytes)?;
    let close = memchr(b']', bytes)?;
    if close <= open + 1 {
        return None;
    }

    let keyword = &line[open + 1..close];
    let value = line[close + 1..].trim();
    Some((keyword, value))
}

/// Decode the TILT directive line
///
/// Takes the substring after the first `=`, trimmed. `NONE` and `INCLUDE`
/// map to their variants; any other non-empty value is an external tilt
/// file name. A missing `=` or empty value is a structural failure.
pub fn parse_tilt_directive(line: &str) -> Result<TiltDirective> {
    let eq = memchr(b'=', line.as_bytes())
        .ok_or_else(|| IesError::structural("TILT type is invalid."))?;

    let value = line[eq + 1..].trim();
    match value {
        TILT_NONE => Ok(TiltDirective::None),
        TILT_INCLUDE => Ok(TiltDirective::Include),
        "" => Err(IesError::structural("TILT type is invalid.")),
        name => Ok(TiltDirective::File(name.to_string())),
    }
}
