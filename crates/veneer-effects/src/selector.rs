use std::fmt;

use veneer_engine::coords::{Insets, PixelSize};
use veneer_engine::geometry::GeometryResolver;

use crate::compositor::{CompiledLayer, EffectDrawable};
use crate::config::EffectConfig;
use crate::error::EffectError;

// ── InteractionState ──────────────────────────────────────────────────────

/// Visual state of the view an effect is attached to.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Default,
    Focused,
    Pressed,
    Disabled,
}

impl InteractionState {
    pub const ALL: [InteractionState; 4] = [
        InteractionState::Default,
        InteractionState::Focused,
        InteractionState::Pressed,
        InteractionState::Disabled,
    ];

    /// Disabled wins over pressed, pressed over focused.
    pub const fn from_flags(enabled: bool, focused: bool, pressed: bool) -> Self {
        if !enabled {
            InteractionState::Disabled
        } else if pressed {
            InteractionState::Pressed
        } else if focused {
            InteractionState::Focused
        } else {
            InteractionState::Default
        }
    }

    /// Parses the lower-case state names used in style sheets.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(InteractionState::Default),
            "focused" => Some(InteractionState::Focused),
            "pressed" => Some(InteractionState::Pressed),
            "disabled" => Some(InteractionState::Disabled),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            InteractionState::Default => "default",
            InteractionState::Focused => "focused",
            InteractionState::Pressed => "pressed",
            InteractionState::Disabled => "disabled",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── FocusPolicy ───────────────────────────────────────────────────────────

/// How a single configuration is spread over the interaction states.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FocusPolicy {
    /// Default and disabled show the effect as configured; focused and
    /// pressed show an emphasized copy.
    #[default]
    Emphasize,
    /// Only focused and pressed show the effect.
    FocusOnly,
}

// ── SelectorDrawable ──────────────────────────────────────────────────────

/// One optional drawable per [`InteractionState`], with one state active.
///
/// State changes are pushed by the host through [`set_state`](Self::set_state).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorDrawable {
    layers: [Option<EffectDrawable>; 4],
    current: InteractionState,
}

impl SelectorDrawable {
    pub fn builder() -> SelectorBuilder {
        SelectorBuilder::default()
    }

    /// Spreads `drawable` over the states according to `policy`.
    pub fn from_policy(drawable: EffectDrawable, policy: FocusPolicy) -> Self {
        let builder = match policy {
            FocusPolicy::Emphasize => {
                let focused = drawable.emphasized();
                SelectorDrawable::builder()
                    .state(InteractionState::Default, drawable)
                    .state(InteractionState::Focused, focused.clone())
                    .state(InteractionState::Pressed, focused)
            }
            FocusPolicy::FocusOnly => SelectorDrawable::builder()
                .state(InteractionState::Focused, drawable.clone())
                .state(InteractionState::Pressed, drawable),
        };
        builder.build()
    }

    #[inline]
    pub fn current_state(&self) -> InteractionState {
        self.current
    }

    #[inline]
    pub fn drawable(&self, state: InteractionState) -> Option<&EffectDrawable> {
        self.layers[state.index()].as_ref()
    }

    #[inline]
    pub fn current(&self) -> Option<&EffectDrawable> {
        self.drawable(self.current)
    }

    /// Whether switching to `state` would show a different drawable.
    pub fn changes_visual(&self, state: InteractionState) -> bool {
        match (self.current(), self.drawable(state)) {
            (None, None) => false,
            (Some(a), Some(b)) => !a.ptr_eq(b),
            _ => true,
        }
    }

    /// Switches the active state. Returns whether the visual changed.
    pub fn set_state(&mut self, state: InteractionState) -> bool {
        let changed = self.changes_visual(state);
        if self.current != state {
            log::trace!("selector state {} -> {} (visual changed: {changed})", self.current, state);
        }
        self.current = state;
        changed
    }

    /// Compiles the active state; `None` when it shows nothing.
    pub fn compile(&self, size: PixelSize) -> Result<Option<CompiledLayer>, EffectError> {
        self.compile_state(self.current, size)
    }

    pub fn compile_state(&self, state: InteractionState, size: PixelSize) -> Result<Option<CompiledLayer>, EffectError> {
        self.compile_state_with(&GeometryResolver::from_process_default(), state, size)
    }

    pub fn compile_state_with(
        &self,
        resolver: &GeometryResolver,
        state: InteractionState,
        size: PixelSize,
    ) -> Result<Option<CompiledLayer>, EffectError> {
        self.drawable(state).map(|d| d.compile_with(resolver, size)).transpose()
    }

    /// Largest content inset over all states, so padding does not move when
    /// the state changes.
    pub fn content_inset(&self) -> Insets {
        self.layers
            .iter()
            .flatten()
            .fold(Insets::zero(), |acc, d| acc.max(d.content_inset()))
    }

    /// Largest raster outsets over all states.
    pub fn outsets(&self) -> Insets {
        self.layers
            .iter()
            .flatten()
            .fold(Insets::zero(), |acc, d| acc.max(d.outsets()))
    }
}

// ── SelectorBuilder ───────────────────────────────────────────────────────

/// Explicit per-state drawables. States left unset show the default state's
/// drawable.
#[derive(Debug, Clone, Default)]
pub struct SelectorBuilder {
    layers: [Option<EffectDrawable>; 4],
}

impl SelectorBuilder {
    #[inline]
    pub fn state(mut self, state: InteractionState, drawable: EffectDrawable) -> Self {
        self.layers[state.index()] = Some(drawable);
        self
    }

    pub fn build(self) -> SelectorDrawable {
        let default = self.layers[InteractionState::Default.index()].clone();
        let layers = self.layers.map(|slot| slot.or_else(|| default.clone()));
        SelectorDrawable { layers, current: InteractionState::Default }
    }
}

// ── Focus selectors ───────────────────────────────────────────────────────

impl EffectConfig {
    /// Selector with the default [`FocusPolicy`].
    pub fn build_focus_selector(self) -> SelectorDrawable {
        self.build_focus_selector_with_policy(FocusPolicy::default())
    }

    pub fn build_focus_selector_with_policy(self, policy: FocusPolicy) -> SelectorDrawable {
        SelectorDrawable::from_policy(self.build(), policy)
    }

    /// Selector showing `focused` for the focused and pressed states.
    pub fn build_focus_selector_with(self, focused: EffectConfig) -> SelectorDrawable {
        let focused = focused.build();
        SelectorDrawable::builder()
            .state(InteractionState::Default, self.build())
            .state(InteractionState::Focused, focused.clone())
            .state(InteractionState::Pressed, focused)
            .build()
    }
}

/// Free-function form of [`EffectConfig::build_focus_selector`].
#[inline]
pub fn build_focus_selector_drawable(config: EffectConfig) -> SelectorDrawable {
    config.build_focus_selector()
}

#[cfg(test)]
mod tests {
    use super::*;

    use veneer_engine::geometry::GeometryConfig;
    use veneer_engine::paint::Color;

    use crate::effect::{ShadowSpec, StrokeSpec};

    fn stroked() -> EffectConfig {
        EffectConfig::with_drawing_base()
            .corner_radius(6.0)
            .stroke(StrokeSpec::new(2.0, Color::white()))
    }

    // ── InteractionState ──────────────────────────────────────────────────

    #[test]
    fn flags_priority() {
        assert_eq!(InteractionState::from_flags(false, true, true), InteractionState::Disabled);
        assert_eq!(InteractionState::from_flags(true, true, true), InteractionState::Pressed);
        assert_eq!(InteractionState::from_flags(true, true, false), InteractionState::Focused);
        assert_eq!(InteractionState::from_flags(true, false, false), InteractionState::Default);
    }

    #[test]
    fn names_round_trip() {
        for s in InteractionState::ALL {
            assert_eq!(InteractionState::from_name(s.name()), Some(s));
        }
        assert_eq!(InteractionState::from_name("hovered"), None);
    }

    // ── builder ───────────────────────────────────────────────────────────

    #[test]
    fn default_only_selector_shares_one_drawable() {
        let d = stroked().build();
        let sel = SelectorDrawable::builder().state(InteractionState::Default, d.clone()).build();
        for s in InteractionState::ALL {
            assert!(sel.drawable(s).unwrap().ptr_eq(&d));
        }
    }

    #[test]
    fn set_state_reports_visual_changes() {
        let mut sel = stroked().build_focus_selector();
        assert_eq!(sel.current_state(), InteractionState::Default);
        assert!(sel.set_state(InteractionState::Focused));
        assert!(!sel.set_state(InteractionState::Pressed));
        assert_eq!(sel.current_state(), InteractionState::Pressed);
        assert!(sel.set_state(InteractionState::Disabled));
        assert!(!sel.set_state(InteractionState::Default));
    }

    // ── policies ──────────────────────────────────────────────────────────

    #[test]
    fn emphasize_derives_a_stronger_focus() {
        let sel = stroked()
            .shadow(ShadowSpec::new(4.0, Color::black()))
            .build_focus_selector();
        let normal = sel.drawable(InteractionState::Default).unwrap();
        let focused = sel.drawable(InteractionState::Focused).unwrap();
        assert_eq!(focused.params().stroke().unwrap().width, 3.0);
        assert_eq!(focused.params().shadow().unwrap().blur, 6.0);
        assert!(sel.drawable(InteractionState::Disabled).unwrap().ptr_eq(normal));
        assert!(sel.drawable(InteractionState::Pressed).unwrap().ptr_eq(focused));
    }

    #[test]
    fn emphasize_without_effects_keeps_one_visual() {
        let mut sel = EffectConfig::with_drawing_base()
            .fill(Color::white())
            .unwrap()
            .build_focus_selector();
        assert!(!sel.set_state(InteractionState::Focused));
    }

    #[test]
    fn focus_only_hides_unfocused_states() {
        let sel = stroked().build_focus_selector_with_policy(FocusPolicy::FocusOnly);
        assert!(sel.drawable(InteractionState::Default).is_none());
        assert!(sel.drawable(InteractionState::Disabled).is_none());
        assert!(sel.drawable(InteractionState::Focused).is_some());
        let resolver = GeometryResolver::new(GeometryConfig::default());
        let size = PixelSize::new(20, 10);
        assert_eq!(sel.compile_state_with(&resolver, InteractionState::Default, size), Ok(None));
        assert!(sel.compile_state_with(&resolver, InteractionState::Pressed, size).unwrap().is_some());
    }

    #[test]
    fn explicit_focused_config() {
        let sel = stroked().build_focus_selector_with(
            EffectConfig::with_drawing_base().stroke(StrokeSpec::new(5.0, Color::white())),
        );
        assert_eq!(sel.drawable(InteractionState::Pressed).unwrap().params().stroke().unwrap().width, 5.0);
        assert_eq!(sel.drawable(InteractionState::Disabled).unwrap().params().stroke().unwrap().width, 2.0);
    }

    // ── insets ────────────────────────────────────────────────────────────

    #[test]
    fn content_inset_is_max_over_states() {
        let sel = stroked().build_focus_selector();
        assert_eq!(sel.content_inset(), Insets::all(1.5));
        let free = build_focus_selector_drawable(stroked());
        assert_eq!(free, sel);
    }
}
