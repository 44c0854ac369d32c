// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PhotometricModel - the queryable in-memory model of one IES LM-63 file
//!
//! Owns the keyword metadata, the tilt directive, the 13 required scalar
//! fields, and the angle/intensity grid. Constructed empty by the parser and
//! populated strictly in file order; the validated setters remain available
//! for programmatic editing after construction.

use crate::{IesError, PhotometricType, Result, Tilt, ANGLE_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parsed photometric data for a single luminaire
///
/// The intensity grid is stored row-major by horizontal angle: one row per
/// horizontal angle, one raw candela value per vertical angle within a row.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PhotometricModel {
    format_header: String,
    keywords: HashMap<String, String>,
    tilt: Tilt,

    /// Number of lamps
    pub number_of_lamps: i32,
    /// Rated lumens per lamp
    pub lumens_per_lamp: f64,
    /// Multiplier applied to all candela values
    pub candela_multiplier: f64,
    /// Declared length of the vertical angle sequence
    pub number_of_vertical_angles: i32,
    /// Declared length of the horizontal angle sequence
    pub number_of_horizontal_angles: i32,
    /// Photometric type code (1 = Type C, 2 = Type B, 3 = Type A)
    pub photometric_type: i32,
    /// Units type code (1 = feet, 2 = meters)
    pub units_type: i32,
    /// Luminous opening width
    pub width: f64,
    /// Luminous opening length
    pub length: f64,
    /// Luminous opening height
    pub height: f64,
    /// Ballast factor
    pub ballast_factor: f64,
    /// Reserved for future use by the standard
    pub future_use: f64,
    /// Input watts
    pub input_watts: f64,

    vertical_angles: Vec<f64>,
    horizontal_angles: Vec<f64>,
    intensity: Vec<Vec<f64>>,
}

impl Default for PhotometricModel {
    fn default() -> Self {
        Self {
            format_header: String::new(),
            keywords: HashMap::new(),
            tilt: Tilt::None,
            number_of_lamps: 1,
            lumens_per_lamp: 0.0,
            candela_multiplier: 1.0,
            number_of_vertical_angles: 1,
            number_of_horizontal_angles: 1,
            photometric_type: 1,
            units_type: 2,
            width: 0.0,
            length: 0.0,
            height: 0.0,
            ballast_factor: 1.0,
            future_use: 1.0,
            input_watts: 0.0,
            vertical_angles: vec![0.0],
            horizontal_angles: vec![0.0],
            intensity: vec![vec![0.0]],
        }
    }
}

impl PhotometricModel {
    /// Create an empty model carrying the file's format header line
    pub fn new(format_header: impl Into<String>) -> Self {
        Self {
            format_header: format_header.into(),
            ..Self::default()
        }
    }

    /// The first line of the file (immutable after construction)
    pub fn format_header(&self) -> &str {
        &self.format_header
    }

    // ========================================================================
    // Keywords
    // ========================================================================

    /// Look up a keyword value; `None` if absent or no keywords were recorded
    pub fn keyword(&self, keyword: &str) -> Option<&str> {
        self.keywords.get(keyword).map(String::as_str)
    }

    /// Insert or overwrite a keyword (last write wins)
    pub fn set_keyword(&mut self, keyword: impl Into<String>, value: impl Into<String>) {
        self.keywords.insert(keyword.into(), value.into());
    }

    /// Remove a keyword; a no-op if it was never set
    pub fn remove_keyword(&mut self, keyword: &str) {
        self.keywords.remove(keyword);
    }

    /// All recorded keywords
    pub fn keywords(&self) -> &HashMap<String, String> {
        &self.keywords
    }

    // ========================================================================
    // Tilt
    // ========================================================================

    /// The active tilt directive
    pub fn tilt(&self) -> &Tilt {
        &self.tilt
    }

    /// Replace the tilt directive, re-validating the variant payload
    ///
    /// `Include` requires a tilt block whose angle count has been fixed;
    /// `File` requires a non-empty filename. A rejected call leaves the
    /// previous directive in place.
    pub fn set_tilt(&mut self, tilt: Tilt) -> Result<()> {
        match &tilt {
            Tilt::None => {}
            Tilt::Include(info) => {
                if info.tilt_angle_count() == 0 {
                    return Err(IesError::bounds(
                        "Included tilt information has no angle data.",
                    ));
                }
            }
            Tilt::File(name) => {
                if name.trim().is_empty() {
                    return Err(IesError::bounds("Tilt file name should not be empty."));
                }
            }
        }

        self.tilt = tilt;
        Ok(())
    }

    // ========================================================================
    // Angles
    // ========================================================================

    /// Vertical angles in degrees, in file order
    pub fn vertical_angles(&self) -> &[f64] {
        &self.vertical_angles
    }

    /// Horizontal angles in degrees, in file order
    pub fn horizontal_angles(&self) -> &[f64] {
        &self.horizontal_angles
    }

    /// Replace the vertical angle sequence, enforcing the LM-63 invariants
    ///
    /// The sequence must be non-empty and strictly ascending. Boundary values
    /// depend on the model's photometric type: Type C starts at 0 or 90 and
    /// ends at 90 or 180; Type A/B starts at 0 or -90 and ends at 90, all
    /// within a 0.1 degree tolerance. Violations reject the call with no
    /// partial mutation.
    pub fn set_vertical_angles(&mut self, angles: Vec<f64>) -> Result<()> {
        if angles.is_empty() {
            return Err(IesError::bounds("Vertical angles should not be empty."));
        }

        for pair in angles.windows(2) {
            if pair[0] >= pair[1] {
                return Err(IesError::bounds(
                    "The vertical angles should be an ascending order array.",
                ));
            }
        }

        let first = angles[0];
        let last = angles[angles.len() - 1];
        match PhotometricType::from_code(self.photometric_type) {
            PhotometricType::TypeC => {
                if !(first == 0.0 || (first - 90.0).abs() <= ANGLE_TOLERANCE) {
                    return Err(IesError::bounds(
                        "The first vertical angle for Type C should be 0 or 90.",
                    ));
                }
                if !((last - 90.0).abs() < ANGLE_TOLERANCE
                    || (last - 180.0).abs() < ANGLE_TOLERANCE)
                {
                    return Err(IesError::bounds(
                        "The last vertical angle for Type C should be 90 or 180.",
                    ));
                }
            }
            PhotometricType::TypeA | PhotometricType::TypeB => {
                if !(first == 0.0 || (first + 90.0).abs() <= ANGLE_TOLERANCE) {
                    return Err(IesError::bounds(
                        "The first vertical angle for Type A and B should be 0 or -90.",
                    ));
                }
                if (last - 90.0).abs() >= ANGLE_TOLERANCE {
                    return Err(IesError::bounds(
                        "The last vertical angle for Type A and B should be 90.",
                    ));
                }
            }
        }

        self.vertical_angles = angles;
        Ok(())
    }

    /// Replace the vertical angle sequence without validation
    ///
    /// Used by the parser, which has already range-checked the sequence
    /// length via the declared field counts.
    pub fn set_vertical_angles_unchecked(&mut self, angles: Vec<f64>) {
        self.vertical_angles = angles;
    }

    /// Replace the horizontal angle sequence
    ///
    /// Validation here is intentionally minimal (non-empty only): LM-63
    /// horizontal ranges depend on lateral symmetry conventions that this
    /// model does not track. Known relaxation, kept permissive on purpose.
    pub fn set_horizontal_angles(&mut self, angles: Vec<f64>) -> Result<()> {
        if angles.is_empty() {
            return Err(IesError::bounds("Horizontal angles should not be empty."));
        }

        self.horizontal_angles = angles;
        Ok(())
    }

    /// Replace the horizontal angle sequence without validation
    pub fn set_horizontal_angles_unchecked(&mut self, angles: Vec<f64>) {
        self.horizontal_angles = angles;
    }

    // ========================================================================
    // Intensity grid
    // ========================================================================

    /// Raw candela value with both indices clamped into valid range
    ///
    /// Out-of-range indices (negative included) clamp to the nearest valid
    /// index rather than failing, for rendering-style lookups that tolerate
    /// boundary overreach.
    pub fn intensity(&self, vertical_index: isize, horizontal_index: isize) -> f64 {
        let v = vertical_index.clamp(0, self.vertical_angles.len() as isize - 1) as usize;
        let h = horizontal_index.clamp(0, self.horizontal_angles.len() as isize - 1) as usize;
        self.intensity[h][v]
    }

    /// Raw candela value by direct indexed lookup
    ///
    /// No clamping; panics if either index is out of range. Intended for
    /// callers that have already validated their indices.
    pub fn raw_intensity(&self, vertical_index: usize, horizontal_index: usize) -> f64 {
        self.intensity[horizontal_index][vertical_index]
    }

    /// Write a single candela value with bounds checking
    pub fn set_raw_data(
        &mut self,
        vertical_index: usize,
        horizontal_index: usize,
        value: f64,
    ) -> Result<()> {
        if vertical_index >= self.vertical_angles.len() {
            return Err(IesError::bounds("Vertical angle index is out of range."));
        }
        if horizontal_index >= self.horizontal_angles.len() {
            return Err(IesError::bounds("Horizontal angle index is out of range."));
        }

        self.intensity[horizontal_index][vertical_index] = value;
        Ok(())
    }

    /// Replace the full intensity grid
    ///
    /// No dimension cross-check against the declared counts; the parser is
    /// responsible for supplying a horizontal x vertical shaped grid.
    pub fn set_raw_intensity_data(&mut self, grid: Vec<Vec<f64>>) {
        self.intensity = grid;
    }

    /// The full intensity grid, one row per horizontal angle
    pub fn raw_intensity_data(&self) -> &[Vec<f64>] {
        &self.intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TiltInfo;

    fn model_with_grid() -> PhotometricModel {
        let mut model = PhotometricModel::new("IESNA:LM-63-2002");
        model.photometric_type = 1;
        model.set_vertical_angles_unchecked(vec![0.0, 45.0, 90.0]);
        model.set_horizontal_angles_unchecked(vec![0.0, 90.0]);
        model.set_raw_intensity_data(vec![vec![100.0, 80.0, 10.0], vec![90.0, 70.0, 5.0]]);
        model
    }

    #[test]
    fn defaults_match_lm63_conventions() {
        let model = PhotometricModel::default();
        assert_eq!(model.number_of_lamps, 1);
        assert_eq!(model.candela_multiplier, 1.0);
        assert_eq!(model.photometric_type, 1);
        assert_eq!(model.units_type, 2);
        assert_eq!(model.vertical_angles(), &[0.0]);
        assert_eq!(model.horizontal_angles(), &[0.0]);
        assert_eq!(model.raw_intensity(0, 0), 0.0);
        assert_eq!(*model.tilt(), Tilt::None);
    }

    #[test]
    fn keyword_set_overwrites_and_remove_is_noop() {
        let mut model = PhotometricModel::default();
        assert_eq!(model.keyword("MANUFAC"), None);

        model.set_keyword("MANUFAC", "Acme");
        model.set_keyword("MANUFAC", "Other");
        assert_eq!(model.keyword("MANUFAC"), Some("Other"));
        assert_eq!(model.keywords().len(), 1);

        model.remove_keyword("LAMPCAT");
        model.remove_keyword("MANUFAC");
        assert_eq!(model.keyword("MANUFAC"), None);
    }

    #[test]
    fn clamped_intensity_matches_raw_at_nearest_index() {
        let model = model_with_grid();
        assert_eq!(model.intensity(1, 1), model.raw_intensity(1, 1));
        // Beyond-range clamps to the last valid index
        assert_eq!(model.intensity(99, 99), model.raw_intensity(2, 1));
        // Negative overreach clamps to zero
        assert_eq!(model.intensity(-5, -1), model.raw_intensity(0, 0));
    }

    #[test]
    fn set_raw_data_checks_bounds() {
        let mut model = model_with_grid();
        model.set_raw_data(2, 1, 42.0).unwrap();
        assert_eq!(model.raw_intensity(2, 1), 42.0);

        assert!(model.set_raw_data(3, 0, 1.0).is_err());
        assert!(model.set_raw_data(0, 2, 1.0).is_err());
    }

    #[test]
    fn vertical_angles_must_ascend() {
        let mut model = PhotometricModel::default();
        let err = model
            .set_vertical_angles(vec![0.0, 30.0, 30.0, 90.0])
            .unwrap_err();
        assert!(matches!(err, IesError::Bounds(_)));
        // Rejected call leaves the previous sequence in place
        assert_eq!(model.vertical_angles(), &[0.0]);
    }

    #[test]
    fn vertical_angles_must_not_be_empty() {
        let mut model = PhotometricModel::default();
        assert!(model.set_vertical_angles(Vec::new()).is_err());
    }

    #[test]
    fn type_c_boundaries_are_enforced() {
        let mut model = PhotometricModel::default();
        model.photometric_type = 1;

        model.set_vertical_angles(vec![0.0, 45.0, 90.0]).unwrap();
        model.set_vertical_angles(vec![90.05, 120.0, 180.0]).unwrap();

        assert!(model.set_vertical_angles(vec![10.0, 45.0, 90.0]).is_err());
        assert!(model.set_vertical_angles(vec![0.0, 45.0, 120.0]).is_err());
    }

    #[test]
    fn type_a_b_boundaries_are_enforced() {
        let mut model = PhotometricModel::default();
        model.photometric_type = 2;

        model.set_vertical_angles(vec![-90.0, 0.0, 90.0]).unwrap();
        model.set_vertical_angles(vec![0.0, 45.0, 90.05]).unwrap();

        assert!(model.set_vertical_angles(vec![-45.0, 0.0, 90.0]).is_err());
        assert!(model.set_vertical_angles(vec![0.0, 90.0, 180.0]).is_err());
    }

    #[test]
    fn horizontal_angles_accept_any_ordering() {
        // Known relaxation: only emptiness is checked
        let mut model = PhotometricModel::default();
        model.set_horizontal_angles(vec![90.0, 0.0, 45.0]).unwrap();
        assert!(model.set_horizontal_angles(Vec::new()).is_err());
    }

    #[test]
    fn set_tilt_validates_payload() {
        let mut model = PhotometricModel::default();

        assert!(model.set_tilt(Tilt::File(String::new())).is_err());
        assert_eq!(*model.tilt(), Tilt::None);
        model.set_tilt(Tilt::File("lamp.tlt".into())).unwrap();

        assert!(model.set_tilt(Tilt::Include(TiltInfo::new())).is_err());
        // Rejected include keeps the previous directive
        assert_eq!(*model.tilt(), Tilt::File("lamp.tlt".into()));

        let mut info = TiltInfo::new();
        info.set_tilt_angle_count(1).unwrap();
        model.set_tilt(Tilt::Include(info)).unwrap();
    }
}
