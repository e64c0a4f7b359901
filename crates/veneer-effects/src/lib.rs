//! Veneer effects: composes shadows, strokes, corner radii and content insets
//! around a base visual into one layered background.
//!
//! # Quick start
//!
//! ```rust
//! use veneer_effects::prelude::*;
//!
//! let mut selector = EffectConfig::with_drawing_base()
//!     .fill(Color::white())?
//!     .corner_radius(12.0)
//!     .shadow(ShadowSpec::new(8.0, Color::from_argb(0x80000000)).offset(0.0, 2.0))
//!     .stroke(StrokeSpec::new(2.0, Color::from_argb(0xff3366ff)))
//!     .build_focus_selector();
//!
//! // The host pushes state changes; only visual changes need a recompile.
//! if selector.set_state(InteractionState::Focused) {
//!     let layer = selector.compile(PixelSize::new(160, 48))?;
//!     assert!(layer.is_some());
//! }
//! # Ok::<(), veneer_effects::EffectError>(())
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `EffectConfig` builder, `Base`, `BoundsMode`, `ContentCap` |
//! | [`effect`] | `ShadowSpec`, `StrokeSpec` |
//! | [`compositor`] | `EffectDrawable`, `CompiledLayer` |
//! | [`selector`] | `SelectorDrawable`, `InteractionState`, `FocusPolicy` |
//! | [`attach`] | `EffectTarget`, `Background` |
//! | [`bridge`] | style attributes → `EffectConfig` |
//! | [`cache`] | `LayerCache` |

pub mod attach;
pub mod bridge;
pub mod cache;
pub mod compositor;
pub mod config;
pub mod effect;
pub mod error;
pub mod selector;

pub use error::EffectError;

/// The types needed to configure, compile and attach effects.
pub mod prelude {
    pub use crate::attach::{Background, EffectTarget};
    pub use crate::bridge::{from_attributes, inject, selector_from_sheet, AttributeSet, EffectAttributes, StyleContext};
    pub use crate::cache::LayerCache;
    pub use crate::compositor::{CompiledLayer, EffectDrawable};
    pub use crate::config::{Base, BoundsMode, ContentCap, EffectConfig};
    pub use crate::effect::{ShadowSpec, StrokeSpec};
    pub use crate::error::EffectError;
    pub use crate::selector::{build_focus_selector_drawable, FocusPolicy, InteractionState, SelectorDrawable};

    // Engine primitives every caller touches.
    pub use veneer_engine::coords::{CornerRadii, Insets, PixelSize};
    pub use veneer_engine::geometry::{GeometryConfig, GeometryResolver};
    pub use veneer_engine::paint::Color;
    pub use veneer_engine::patch::{PatchImage, PatchImageSource};
}
