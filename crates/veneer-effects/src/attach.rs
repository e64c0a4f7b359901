use std::sync::Arc;

use veneer_engine::coords::{Insets, PixelSize};
use veneer_engine::geometry::GeometryResolver;

use crate::compositor::CompiledLayer;
use crate::config::EffectConfig;
use crate::error::EffectError;
use crate::selector::{InteractionState, SelectorDrawable};

// ── EffectTarget ──────────────────────────────────────────────────────────

/// The host view an effect is attached to.
///
/// Implemented by the host UI layer. Sizes and padding are in pixels.
pub trait EffectTarget {
    fn size(&self) -> PixelSize;

    /// Interactive views get a focus selector instead of a static layer.
    fn is_interactive(&self) -> bool {
        false
    }

    fn padding(&self) -> Insets;

    fn set_padding(&mut self, padding: Insets);

    fn set_background(&mut self, background: Background);

    /// Called when the effect draws `outsets` past the view bounds, so the
    /// host can stop its parent from clipping.
    fn on_effect_out_of_bounds(&mut self, _outsets: Insets) {}
}

// ── Background ────────────────────────────────────────────────────────────

/// What an [`EffectTarget`] paints behind its content.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Layer(Arc<CompiledLayer>),
    Selector {
        selector: SelectorDrawable,
        size: PixelSize,
        resolver: GeometryResolver,
        /// Compiled active state; `None` when that state shows nothing.
        layer: Option<Arc<CompiledLayer>>,
    },
}

impl Background {
    /// Selector background compiled for its current state at `size`.
    pub fn from_selector(selector: SelectorDrawable, resolver: &GeometryResolver, size: PixelSize) -> Result<Self, EffectError> {
        let layer = selector
            .compile_state_with(resolver, selector.current_state(), size)?
            .map(Arc::new);
        Ok(Background::Selector { selector, size, resolver: *resolver, layer })
    }

    /// Layer to paint right now.
    pub fn layer(&self) -> Option<&CompiledLayer> {
        match self {
            Background::Layer(layer) => Some(layer.as_ref()),
            Background::Selector { layer, .. } => layer.as_deref(),
        }
    }

    /// Forwards a state change, recompiling only when the visual changes.
    ///
    /// Returns whether the painted layer changed. Static layers never change.
    /// When the new state fails to compile, the background keeps its previous
    /// state and layer.
    pub fn set_state(&mut self, state: InteractionState) -> Result<bool, EffectError> {
        match self {
            Background::Layer(_) => Ok(false),
            Background::Selector { selector, size, resolver, layer } => {
                if !selector.changes_visual(state) {
                    selector.set_state(state);
                    return Ok(false);
                }
                let next = selector.compile_state_with(resolver, state, *size)?.map(Arc::new);
                selector.set_state(state);
                *layer = next;
                Ok(true)
            }
        }
    }
}

// ── Attaching ─────────────────────────────────────────────────────────────

impl EffectConfig {
    /// Compiles for the target's size and installs the result as its
    /// background, with the content inset as padding.
    pub fn into_view(self, target: &mut impl EffectTarget) -> Result<(), EffectError> {
        attach(self, target, Insets::zero(), &GeometryResolver::from_process_default())
    }
}

/// Installs `config` on `target`; the padding becomes `base_padding` plus the
/// effect's content inset.
pub(crate) fn attach(
    config: EffectConfig,
    target: &mut impl EffectTarget,
    base_padding: Insets,
    resolver: &GeometryResolver,
) -> Result<(), EffectError> {
    let size = target.size();
    let (background, inset, outsets) = if target.is_interactive() {
        let selector = config.build_focus_selector();
        let inset = selector.content_inset();
        let outsets = selector.outsets();
        (Background::from_selector(selector, resolver, size)?, inset, outsets)
    } else {
        let layer = config.compile_with(resolver, size)?;
        let (inset, outsets) = (layer.content_inset(), layer.outsets());
        (Background::Layer(Arc::new(layer)), inset, outsets)
    };

    log::debug!("attaching effect at {size}: content inset {:?}, outsets {:?}", inset.to_array(), outsets.to_array());
    target.set_background(background);
    target.set_padding(base_padding + inset);
    if !outsets.is_zero() {
        target.on_effect_out_of_bounds(outsets);
    }
    Ok(())
}
