// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IES-Lite Model - Data model and validation for IES LM-63 photometric files
//!
//! This crate owns the in-memory representation of a parsed LM-63 file:
//! keyword metadata, the TILT directive, the 13 required scalar fields, and
//! the angle/intensity grid, together with the domain invariants enforced by
//! the validated setters.
//!
//! # Example
//!
//! ```
//! use ies_lite_model::{PhotometricModel, Tilt};
//!
//! let mut model = PhotometricModel::new("IESNA:LM-63-2002");
//! model.set_keyword("MANUFAC", "Acme Lighting");
//! model.set_vertical_angles(vec![0.0, 45.0, 90.0]).unwrap();
//! assert_eq!(*model.tilt(), Tilt::None);
//! ```

pub mod error;
pub mod photometric;
pub mod types;

// Re-export all public types
pub use error::*;
pub use photometric::*;
pub use types::*;
