//! Layer painters, one per `DrawCmd` variant.

pub(crate) mod fill;
pub(crate) mod image;
pub(crate) mod shadow;
pub(crate) mod stroke;
