// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The value stream: whitespace-tokenized numeric content after the TILT line
//!
//! All lines following the TILT directive collapse into one flat, ordered
//! token sequence that the parser consumes positionally. Number parsing goes
//! through `lexical-core` with invariant formatting (decimal point, no
//! locale separators).

use ies_lite_model::{IesError, Result};

/// Flat token sequence with a forward-only cursor
///
/// Tokens are split on spaces and tabs, empty entries discarded, line order
/// preserved. Checkpoints verify the remaining count *before* consuming.
pub struct ValueStream<'a> {
    tokens: Vec<&'a str>,
    cursor: usize,
}

impl<'a> ValueStream<'a> {
    /// Tokenize the given lines into one flat stream
    pub fn from_lines(lines: &[&'a str]) -> Self {
        let tokens = lines
            .iter()
            .flat_map(|line| line.split([' ', '\t']))
            .filter(|token| !token.is_empty())
            .collect();

        Self { tokens, cursor: 0 }
    }

    /// Number of tokens not yet consumed
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    /// Checkpoint: fail with the given structural message unless at least
    /// `count` tokens remain
    pub fn require(&self, count: usize, message: &str) -> Result<()> {
        if self.remaining() < count {
            return Err(IesError::structural(message));
        }
        Ok(())
    }

    fn next_token(&mut self, field: &'static str) -> Result<&'a str> {
        let token = self
            .tokens
            .get(self.cursor)
            .copied()
            .ok_or_else(|| IesError::structural(format!("Missing {field} value.")))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Consume one token as a strict integer
    pub fn take_i32(&mut self, field: &'static str) -> Result<i32> {
        let token = self.next_token(field)?;
        lexical_core::parse::<i32>(token.as_bytes())
            .map_err(|_| IesError::numeric(field, token))
    }

    /// Consume one token as a double
    pub fn take_f64(&mut self, field: &'static str) -> Result<f64> {
        let token = self.next_token(field)?;
        lexical_core::parse::<f64>(token.as_bytes())
            .map_err(|_| IesError::numeric(field, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_across_lines_in_order() {
        let stream = ValueStream::from_lines(&["1  1000", "\t1 1", "", "  2  "]);
        assert_eq!(stream.remaining(), 5);
    }

    #[test]
    fn takes_typed_values_positionally() {
        let mut stream = ValueStream::from_lines(&["1 1000.5 -90"]);
        assert_eq!(stream.take_i32("number of lamps").unwrap(), 1);
        assert_eq!(stream.take_f64("lumens per lamp").unwrap(), 1000.5);
        assert_eq!(stream.take_f64("vertical angle").unwrap(), -90.0);
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn integer_parsing_is_strict() {
        let mut stream = ValueStream::from_lines(&["1.5"]);
        let err = stream.take_i32("photometric type").unwrap_err();
        assert_eq!(
            err,
            IesError::NumericParse {
                field: "photometric type",
                token: "1.5".to_string()
            }
        );
    }

    #[test]
    fn numeric_error_carries_offending_token() {
        let mut stream = ValueStream::from_lines(&["abc"]);
        let err = stream.take_f64("lumens per lamp").unwrap_err();
        assert_eq!(err.to_string(), "Invalid lumens per lamp value: 'abc'");
    }

    #[test]
    fn require_checks_before_consuming() {
        let stream = ValueStream::from_lines(&["1 2 3"]);
        assert!(stream.require(3, "too few").is_ok());
        let err = stream.require(4, "Angle Intensity data count is invalid.").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Angle Intensity data count is invalid."
        );
    }
}
