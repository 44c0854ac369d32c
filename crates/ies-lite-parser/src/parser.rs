// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single forward-pass parse driver
//!
//! Consumes an ordered sequence of text lines and populates one
//! [`PhotometricModel`] in fixed file order: header, keywords, TILT
//! directive, optional inline tilt block, the 13 scalar fields, both angle
//! sequences, and the intensity grid. Every violation aborts the whole
//! parse; no partial model is ever returned.

use crate::scanner::{find_tilt_line, parse_keyword_line, parse_tilt_directive, TiltDirective};
use crate::stream::ValueStream;
use crate::ParseSettings;
use ies_lite_model::{IesError, PhotometricModel, Result, Tilt, TiltInfo};

/// Marker substring required in the format header line
pub const FORMAT_MARKER: &str = "IESNA";

/// The 13 required scalar fields between the tilt block and the angle data
const SCALAR_FIELD_COUNT: usize = 13;

pub(crate) fn parse_lines(lines: &[&str], settings: &ParseSettings) -> Result<PhotometricModel> {
    if lines.len() < 3 {
        return Err(IesError::structural("Invalid IES file lines."));
    }

    let format_header = lines[0];
    if !settings.ignore_header_and_keyword
        && (format_header.is_empty() || !format_header.contains(FORMAT_MARKER))
    {
        return Err(IesError::format(format!(
            "missing '{FORMAT_MARKER}' marker in the first line"
        )));
    }

    let mut model = PhotometricModel::new(if settings.ignore_header_and_keyword {
        ""
    } else {
        format_header
    });

    // The TILT line is required even when keyword parsing is skipped
    let tilt_index = find_tilt_line(lines)
        .ok_or_else(|| IesError::structural("Cannot find TILT information."))?;

    if !settings.ignore_header_and_keyword {
        for line in &lines[1..tilt_index] {
            if let Some((keyword, value)) = parse_keyword_line(line) {
                model.set_keyword(keyword, value);
            }
        }
    }

    let directive = parse_tilt_directive(lines[tilt_index])?;

    let digit_lines = &lines[tilt_index + 1..];
    if digit_lines.is_empty() {
        return Err(IesError::structural("Cannot find any digit information."));
    }
    let mut stream = ValueStream::from_lines(digit_lines);

    match directive {
        TiltDirective::None => model.set_tilt(Tilt::None)?,
        TiltDirective::File(name) => model.set_tilt(Tilt::File(name))?,
        TiltDirective::Include => {
            let info = parse_tilt_block(&mut stream)?;
            model.set_tilt(Tilt::Include(info))?;
        }
    }

    parse_scalar_fields(&mut stream, &mut model)?;

    let vertical_count = positive_count(
        model.number_of_vertical_angles,
        "number of vertical angles",
    )?;
    let horizontal_count = positive_count(
        model.number_of_horizontal_angles,
        "number of horizontal angles",
    )?;

    stream.require(
        vertical_count + horizontal_count + vertical_count * horizontal_count,
        "Angle Intensity data count is invalid.",
    )?;

    let vertical_angles = take_sequence(&mut stream, vertical_count, "vertical angle")?;
    let horizontal_angles = take_sequence(&mut stream, horizontal_count, "horizontal angle")?;
    // Counts were checked arithmetically above; the ordering/range invariants
    // are deliberately not re-run on parsed input
    model.set_vertical_angles_unchecked(vertical_angles);
    model.set_horizontal_angles_unchecked(horizontal_angles);

    // Row-major by horizontal angle: one vertical-length row per row
    let mut grid = Vec::with_capacity(horizontal_count);
    for _ in 0..horizontal_count {
        grid.push(take_sequence(&mut stream, vertical_count, "intensity")?);
    }
    model.set_raw_intensity_data(grid);

    Ok(model)
}

/// Parse the inline tilt block: geometry code, angle count N, N angles, then
/// N multiplying factors, each checkpointed before consumption
fn parse_tilt_block(stream: &mut ValueStream<'_>) -> Result<TiltInfo> {
    stream.require(2, "Invalid tilt data count.")?;

    let mut info = TiltInfo::new();
    info.lamp_to_luminaire_geometry = stream.take_i32("lamp-to-luminaire geometry")?;

    let declared = stream.take_i32("number of tilt angles")?;
    info.set_tilt_angle_count(declared.max(0) as usize)?;
    let count = info.tilt_angle_count();

    stream.require(count, "Invalid tilt angles data count.")?;
    stream.require(count * 2, "Invalid tilt multiplying factors data count.")?;

    for index in 0..count {
        let angle = stream.take_f64("tilt angle")?;
        info.set_angle(index, angle)?;
    }
    for index in 0..count {
        let factor = stream.take_f64("multiplying factor")?;
        info.set_multiplying_factor(index, factor)?;
    }

    Ok(info)
}

/// Consume the 13 required scalars in fixed LM-63 order
fn parse_scalar_fields(stream: &mut ValueStream<'_>, model: &mut PhotometricModel) -> Result<()> {
    stream.require(SCALAR_FIELD_COUNT, "There should be at least 13 numbers.")?;

    model.number_of_lamps = stream.take_i32("number of lamps")?;
    model.lumens_per_lamp = stream.take_f64("lumens per lamp")?;
    model.candela_multiplier = stream.take_f64("candela multiplier")?;
    model.number_of_vertical_angles = stream.take_i32("number of vertical angles")?;
    model.number_of_horizontal_angles = stream.take_i32("number of horizontal angles")?;
    model.photometric_type = stream.take_i32("photometric type")?;
    model.units_type = stream.take_i32("units type")?;
    model.width = stream.take_f64("width")?;
    model.length = stream.take_f64("length")?;
    model.height = stream.take_f64("height")?;
    model.ballast_factor = stream.take_f64("ballast factor")?;
    model.future_use = stream.take_f64("future use")?;
    model.input_watts = stream.take_f64("input watts")?;

    Ok(())
}

fn take_sequence(
    stream: &mut ValueStream<'_>,
    count: usize,
    field: &'static str,
) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(stream.take_f64(field)?);
    }
    Ok(values)
}

fn positive_count(declared: i32, field: &'static str) -> Result<usize> {
    usize::try_from(declared)
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| {
            IesError::structural(format!(
                "Declared {field} must be positive, got {declared}."
            ))
        })
}
