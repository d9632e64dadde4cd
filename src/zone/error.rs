//! Errors that abort rendering a zone.

use std::{error, fmt};

use domain::base::iana::Class;

//------------ RenderError ---------------------------------------------------

/// A record that cannot be part of a rendered zone.
///
/// Both kinds indicate records that should never have reached the renderer.
/// Rendering stops at the first one and produces no output at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The record is not in the IN class.
    UnsupportedClass(Class),

    /// The record data does not have the expected shape.
    ///
    /// The string is the offending record in its single-line form.
    MalformedRecord(String),
}

//--- Display, Error

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnsupportedClass(class) => {
                write!(f, "unsupported record class {class}")
            }
            RenderError::MalformedRecord(line) => {
                write!(f, "malformed record: {line}")
            }
        }
    }
}

impl error::Error for RenderError {}
