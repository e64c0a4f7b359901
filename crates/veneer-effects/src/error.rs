use std::fmt;

use veneer_engine::geometry::InvalidGeometryError;
use veneer_engine::patch::DecodeError;

/// Errors surfaced while configuring, compiling or attaching an effect.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectError {
    /// The patch image could not be decoded.
    Decode(DecodeError),
    /// Corner radii do not fit and clamping is disabled.
    InvalidGeometry(InvalidGeometryError),
    /// A builder call is incompatible with the configuration so far.
    ConfigurationConflict { call: &'static str, reason: String },
    /// A named patch image base is not registered in the style context.
    MissingBase(String),
    /// A style sheet has no block with this name.
    UnknownStyle(String),
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectError::Decode(e) => write!(f, "{e}"),
            EffectError::InvalidGeometry(e) => write!(f, "{e}"),
            EffectError::ConfigurationConflict { call, reason } => {
                write!(f, "conflicting effect configuration in `{call}`: {reason}")
            }
            EffectError::MissingBase(name) => write!(f, "patch image {name:?} is not registered"),
            EffectError::UnknownStyle(name) => write!(f, "no style named {name:?}"),
        }
    }
}

impl std::error::Error for EffectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EffectError::Decode(e) => Some(e),
            EffectError::InvalidGeometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DecodeError> for EffectError {
    fn from(e: DecodeError) -> Self {
        EffectError::Decode(e)
    }
}

impl From<InvalidGeometryError> for EffectError {
    fn from(e: InvalidGeometryError) -> Self {
        EffectError::InvalidGeometry(e)
    }
}
