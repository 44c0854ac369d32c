// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for IES LM-63 photometric data
//!
//! Defines the tilt directive variants, the photometric type codes, and the
//! inline tilt data block carried by `TILT=INCLUDE` files.

use crate::{IesError, Result};
use serde::{Deserialize, Serialize};

/// Angle tolerance (degrees) for type-dependent boundary checks
pub const ANGLE_TOLERANCE: f64 = 0.1;

/// Photometric type classification
///
/// Governs the angular coordinate convention and which range-validation
/// rules apply to the vertical angle sequence. Type C (code 1) is the common
/// case for architectural luminaires; every other code takes the Type A/B
/// rules, matching LM-63 practice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PhotometricType {
    /// Type C (code 1)
    TypeC,
    /// Type B (code 2)
    TypeB,
    /// Type A (code 3)
    TypeA,
}

impl PhotometricType {
    /// Interpret a raw LM-63 type code; unknown codes fall back to Type A/B
    /// validation rules, so anything that is not 1 maps to `TypeB`/`TypeA`
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => PhotometricType::TypeC,
            3 => PhotometricType::TypeA,
            _ => PhotometricType::TypeB,
        }
    }

    /// The LM-63 integer code for this type
    pub fn code(self) -> i32 {
        match self {
            PhotometricType::TypeC => 1,
            PhotometricType::TypeB => 2,
            PhotometricType::TypeA => 3,
        }
    }
}

/// TILT directive of a luminaire
///
/// Exactly one variant is active at a time. `Include` carries the inline
/// angle/multiplying-factor block parsed from the value stream; `File`
/// carries the name of an external tilt file (not resolved here).
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum Tilt {
    /// `TILT=NONE` - lamp output does not vary with tilt
    #[default]
    None,
    /// `TILT=INCLUDE` - tilt data follows inline in the file
    Include(TiltInfo),
    /// `TILT=<filename>` - tilt data lives in a separate file
    File(String),
}

/// Inline tilt data: lamp-to-luminaire geometry plus paired
/// angle/multiplying-factor sequences of a fixed length
///
/// The length is fixed once via [`TiltInfo::set_tilt_angle_count`]; both
/// sequences are then written positionally with indexed setters.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TiltInfo {
    /// Lamp-to-luminaire geometry code
    pub lamp_to_luminaire_geometry: i32,
    angles: Vec<f64>,
    multiplying_factors: Vec<f64>,
}

impl TiltInfo {
    /// Create an empty tilt block with no angle count fixed yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tilt angles, zero until the count has been set
    pub fn tilt_angle_count(&self) -> usize {
        self.angles.len()
    }

    /// Fix the number of tilt angles and allocate both sequences
    ///
    /// The count can only be set once; a second call or a count below 1 is
    /// rejected without mutating state.
    pub fn set_tilt_angle_count(&mut self, count: usize) -> Result<()> {
        if count < 1 {
            return Err(IesError::bounds(
                "Number of tilt angles should be at least 1.",
            ));
        }
        if !self.angles.is_empty() {
            return Err(IesError::bounds(
                "Number of tilt angles has already been set.",
            ));
        }

        self.angles = vec![0.0; count];
        self.multiplying_factors = vec![0.0; count];
        Ok(())
    }

    /// Store a tilt angle at the given index
    pub fn set_angle(&mut self, index: usize, value: f64) -> Result<()> {
        if index >= self.angles.len() {
            return Err(IesError::bounds(format!(
                "Tilt angle index {} is out of range (count is {}).",
                index,
                self.angles.len()
            )));
        }

        self.angles[index] = value;
        Ok(())
    }

    /// Store a multiplying factor at the given index
    pub fn set_multiplying_factor(&mut self, index: usize, value: f64) -> Result<()> {
        if index >= self.multiplying_factors.len() {
            return Err(IesError::bounds(format!(
                "Multiplying factor index {} is out of range (count is {}).",
                index,
                self.multiplying_factors.len()
            )));
        }

        self.multiplying_factors[index] = value;
        Ok(())
    }

    /// Tilt angles, in file order
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Multiplying factors, paired positionally with the angles
    pub fn multiplying_factors(&self) -> &[f64] {
        &self.multiplying_factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photometric_type_codes_round_trip() {
        assert_eq!(PhotometricType::from_code(1), PhotometricType::TypeC);
        assert_eq!(PhotometricType::from_code(2), PhotometricType::TypeB);
        assert_eq!(PhotometricType::from_code(3), PhotometricType::TypeA);
        // Unknown codes take the Type A/B validation branch
        assert_eq!(PhotometricType::from_code(7), PhotometricType::TypeB);
        assert_eq!(PhotometricType::TypeC.code(), 1);
    }

    #[test]
    fn tilt_angle_count_is_settable_once() {
        let mut info = TiltInfo::new();
        info.set_tilt_angle_count(2).unwrap();
        assert_eq!(info.tilt_angle_count(), 2);
        assert!(info.set_tilt_angle_count(3).is_err());
        assert_eq!(info.tilt_angle_count(), 2);
    }

    #[test]
    fn tilt_angle_count_rejects_zero() {
        let mut info = TiltInfo::new();
        assert!(info.set_tilt_angle_count(0).is_err());
        assert_eq!(info.tilt_angle_count(), 0);
    }

    // Writes land at the passed-in index, one slot per call. Pins the
    // indexed-assignment contract for positional tilt data.
    #[test]
    fn tilt_writes_are_indexed() {
        let mut info = TiltInfo::new();
        info.set_tilt_angle_count(3).unwrap();
        info.set_angle(0, 10.0).unwrap();
        info.set_angle(1, 20.0).unwrap();
        info.set_angle(2, 30.0).unwrap();
        info.set_multiplying_factor(0, 0.5).unwrap();
        info.set_multiplying_factor(2, 0.9).unwrap();

        assert_eq!(info.angles(), &[10.0, 20.0, 30.0]);
        assert_eq!(info.multiplying_factors(), &[0.5, 0.0, 0.9]);
    }

    #[test]
    fn tilt_writes_out_of_range_are_rejected() {
        let mut info = TiltInfo::new();
        info.set_tilt_angle_count(1).unwrap();
        assert!(info.set_angle(1, 5.0).is_err());
        assert!(info.set_multiplying_factor(1, 5.0).is_err());
        // No count fixed yet: every index is out of range
        let mut empty = TiltInfo::new();
        assert!(empty.set_angle(0, 1.0).is_err());
    }
}
