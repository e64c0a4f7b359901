pub(crate) mod fill;
pub(crate) mod image;
pub(crate) mod shadow;
pub(crate) mod stroke;

pub use fill::FillCmd;
pub use image::ImageCmd;
pub use shadow::{ShadowCmd, Silhouette};
pub use stroke::StrokeCmd;
