//! Style attributes → effect configuration.
//!
//! Attributes are read through a fixed schema into a plain
//! [`EffectAttributes`] value, which is then turned into an [`EffectConfig`].
//! Unknown keys are skipped with a debug log, values of the wrong kind with a
//! warning.

use std::collections::HashMap;
use std::sync::Arc;

use veneer_engine::coords::CornerRadii;
use veneer_engine::geometry::GeometryResolver;
use veneer_engine::paint::Color;
use veneer_engine::patch::PatchImage;
use veneer_style::{ParseError, Prop, StyleSheet, Unit, Value};

use crate::attach::{attach, EffectTarget};
use crate::config::{BoundsMode, EffectConfig};
use crate::effect::{ShadowSpec, StrokeSpec};
use crate::error::EffectError;
use crate::selector::{InteractionState, SelectorDrawable};

// ── StyleContext ──────────────────────────────────────────────────────────

/// Everything attribute values may refer to: display density, named patch
/// images and an optional theme default attribute set.
#[derive(Debug, Clone)]
pub struct StyleContext {
    density: f32,
    patches: HashMap<String, Arc<PatchImage>>,
    defaults: Option<AttributeSet>,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl StyleContext {
    /// `density` scales `dp` dimensions to pixels.
    pub fn new(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 { density } else { 1.0 };
        Self { density, patches: HashMap::new(), defaults: None }
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn register_patch(&mut self, name: impl Into<String>, patch: impl Into<Arc<PatchImage>>) {
        self.patches.insert(name.into(), patch.into());
    }

    pub fn with_patch(mut self, name: impl Into<String>, patch: impl Into<Arc<PatchImage>>) -> Self {
        self.register_patch(name, patch);
        self
    }

    /// Attributes consulted when the input set does not mention a key.
    pub fn with_default_attributes(mut self, defaults: AttributeSet) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn patch(&self, name: &str) -> Option<&Arc<PatchImage>> {
        self.patches.get(name)
    }

    fn px(&self, value: f32, unit: Unit) -> f32 {
        match unit {
            Unit::Px => value,
            Unit::Dp => value * self.density,
        }
    }
}

// ── AttributeSet ──────────────────────────────────────────────────────────

/// Ordered `key: value` attributes. Later entries win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    props: Vec<Prop>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a bare property list such as `stroke_size: 2dp`.
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        Ok(Self { props: veneer_style::parse_attributes(src)? })
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.push(Prop { key: key.into(), value, line: 0 });
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prop> {
        self.props.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl From<Vec<Prop>> for AttributeSet {
    fn from(props: Vec<Prop>) -> Self {
        Self { props }
    }
}

// ── Schema ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Kind {
    Bool,
    Ref,
    Color,
    Dimension,
    Keyword,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Bool => "boolean",
            Kind::Ref => "reference",
            Kind::Color => "color",
            Kind::Dimension => "dimension",
            Kind::Keyword => "keyword",
        }
    }
}

/// A value that passed its kind check, dimensions already in pixels.
#[derive(Debug, Copy, Clone)]
enum Typed<'a> {
    Bool(bool),
    Ref(&'a str),
    Color(Color),
    Px(f32),
    Keyword(&'a str),
}

fn read<'a>(kind: Kind, value: &'a Value, ctx: &StyleContext) -> Option<Typed<'a>> {
    match (kind, value) {
        (Kind::Bool, v) => v.as_bool().map(Typed::Bool),
        (Kind::Ref, Value::Str(s) | Value::Ident(s)) => Some(Typed::Ref(s)),
        (Kind::Color, Value::Color([r, g, b, a])) => Some(Typed::Color(Color::from_srgb_u8(*r, *g, *b, *a))),
        (Kind::Dimension, v) => v.as_dimension().map(|(n, unit)| Typed::Px(ctx.px(n, unit))),
        (Kind::Keyword, Value::Ident(s)) => Some(Typed::Keyword(s)),
        _ => None,
    }
}

type Setter = fn(&mut EffectAttributes, Typed<'_>) -> bool;

struct Attr {
    name: &'static str,
    kind: Kind,
    /// Returns `false` when the typed value is still unacceptable.
    set: Setter,
}

macro_rules! px_setter {
    ($field:ident $([$i:expr])?) => {
        |a: &mut EffectAttributes, v: Typed<'_>| match v {
            Typed::Px(px) => {
                a.$field$([$i])? = Some(px);
                true
            }
            _ => false,
        }
    };
}

macro_rules! color_setter {
    ($field:ident) => {
        |a: &mut EffectAttributes, v: Typed<'_>| match v {
            Typed::Color(c) => {
                a.$field = Some(c);
                true
            }
            _ => false,
        }
    };
}

const SCHEMA: &[Attr] = &[
    Attr {
        name: "use_draw",
        kind: Kind::Bool,
        set: |a, v| match v {
            Typed::Bool(b) => {
                a.use_draw = b;
                true
            }
            _ => false,
        },
    },
    Attr {
        name: "patch_src",
        kind: Kind::Ref,
        set: |a, v| match v {
            Typed::Ref(name) => {
                a.patch_src = Some(name.to_string());
                true
            }
            _ => false,
        },
    },
    Attr { name: "fill_color", kind: Kind::Color, set: color_setter!(fill_color) },
    Attr { name: "shadow_size", kind: Kind::Dimension, set: px_setter!(shadow_size) },
    Attr { name: "shadow_size_left", kind: Kind::Dimension, set: px_setter!(shadow_sides[0]) },
    Attr { name: "shadow_size_top", kind: Kind::Dimension, set: px_setter!(shadow_sides[1]) },
    Attr { name: "shadow_size_right", kind: Kind::Dimension, set: px_setter!(shadow_sides[2]) },
    Attr { name: "shadow_size_bottom", kind: Kind::Dimension, set: px_setter!(shadow_sides[3]) },
    Attr { name: "shadow_color", kind: Kind::Color, set: color_setter!(shadow_color) },
    Attr { name: "shadow_blur", kind: Kind::Dimension, set: px_setter!(shadow_blur) },
    Attr { name: "shadow_dx", kind: Kind::Dimension, set: px_setter!(shadow_dx) },
    Attr { name: "shadow_dy", kind: Kind::Dimension, set: px_setter!(shadow_dy) },
    Attr { name: "shadow_spread", kind: Kind::Dimension, set: px_setter!(shadow_spread) },
    Attr { name: "stroke_size", kind: Kind::Dimension, set: px_setter!(stroke_size) },
    Attr { name: "stroke_color", kind: Kind::Color, set: color_setter!(stroke_color) },
    Attr {
        name: "opt_stroke_corner",
        kind: Kind::Bool,
        set: |a, v| match v {
            Typed::Bool(b) => {
                a.opt_stroke_corner = Some(b);
                true
            }
            _ => false,
        },
    },
    Attr { name: "corner_size", kind: Kind::Dimension, set: px_setter!(corner_size) },
    Attr { name: "corner_size_top_left", kind: Kind::Dimension, set: px_setter!(corners[0]) },
    Attr { name: "corner_size_top_right", kind: Kind::Dimension, set: px_setter!(corners[1]) },
    Attr { name: "corner_size_bottom_right", kind: Kind::Dimension, set: px_setter!(corners[2]) },
    Attr { name: "corner_size_bottom_left", kind: Kind::Dimension, set: px_setter!(corners[3]) },
    Attr { name: "content_gap", kind: Kind::Dimension, set: px_setter!(content_gap) },
    Attr {
        name: "bounds_type",
        kind: Kind::Keyword,
        set: |a, v| match v {
            Typed::Keyword("outer") => {
                a.bounds = Some(BoundsMode::Outer);
                true
            }
            Typed::Keyword("padding") => {
                a.bounds = Some(BoundsMode::Padding);
                true
            }
            _ => false,
        },
    },
    Attr {
        name: "inject",
        kind: Kind::Bool,
        set: |a, v| match v {
            Typed::Bool(b) => {
                a.inject = b;
                true
            }
            _ => false,
        },
    },
];

// ── EffectAttributes ──────────────────────────────────────────────────────

/// Effect attributes after schema checking. Dimensions are in pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectAttributes {
    pub use_draw: bool,
    pub patch_src: Option<String>,
    pub fill_color: Option<Color>,
    pub shadow_size: Option<f32>,
    /// Left, top, right, bottom.
    pub shadow_sides: [Option<f32>; 4],
    pub shadow_color: Option<Color>,
    pub shadow_blur: Option<f32>,
    pub shadow_dx: Option<f32>,
    pub shadow_dy: Option<f32>,
    pub shadow_spread: Option<f32>,
    pub stroke_size: Option<f32>,
    pub stroke_color: Option<Color>,
    pub opt_stroke_corner: Option<bool>,
    pub corner_size: Option<f32>,
    /// Top-left, top-right, bottom-right, bottom-left.
    pub corners: [Option<f32>; 4],
    pub content_gap: Option<f32>,
    pub bounds: Option<BoundsMode>,
    pub inject: bool,
}

impl EffectAttributes {
    /// Reads the context's default attributes, then `attrs` on top.
    pub fn parse(attrs: &AttributeSet, ctx: &StyleContext) -> Self {
        let mut out = Self::default();
        if let Some(defaults) = &ctx.defaults {
            out.apply(defaults, ctx);
        }
        out.apply(attrs, ctx);
        out
    }

    fn apply(&mut self, attrs: &AttributeSet, ctx: &StyleContext) {
        for prop in attrs.iter() {
            let Some(attr) = SCHEMA.iter().find(|a| a.name == prop.key) else {
                log::debug!("ignoring unknown effect attribute `{}`", prop.key);
                continue;
            };
            let accepted = read(attr.kind, &prop.value, ctx).is_some_and(|v| (attr.set)(self, v));
            if !accepted {
                log::warn!(
                    "ignoring effect attribute `{}` (line {}): expected {}, got {}",
                    prop.key,
                    prop.line,
                    attr.kind.name(),
                    prop.value.kind_name()
                );
            }
        }
    }

    fn shadow(&self) -> Option<ShadowSpec> {
        let color = self.shadow_color.unwrap_or(Color::black());
        let explicit = [self.shadow_blur, self.shadow_dx, self.shadow_dy, self.shadow_spread];
        if explicit.iter().any(Option::is_some) {
            let [blur, dx, dy, spread] = explicit.map(|v| v.unwrap_or(0.0));
            return Some(ShadowSpec::new(blur, color).offset(dx, dy).spread(spread));
        }
        let [l, t, r, b] = self.shadow_sides.map(|side| side.or(self.shadow_size).unwrap_or(0.0).max(0.0));
        (l + t + r + b > 0.0).then(|| ShadowSpec::from_sides(l, t, r, b, color))
    }

    fn radii(&self) -> Option<CornerRadii> {
        let [tl, tr, br, bl] = self.corners.map(|c| c.unwrap_or(0.0));
        if [tl, tr, br, bl].iter().any(|&r| r > 0.0) {
            Some(CornerRadii::circular(tl, tr, br, bl))
        } else {
            self.corner_size.map(CornerRadii::all)
        }
    }

    /// Builds the configuration. A `patch_src` that is not registered in
    /// `ctx` is [`EffectError::MissingBase`].
    pub fn to_config(&self, ctx: &StyleContext) -> Result<EffectConfig, EffectError> {
        let mut config = match (&self.patch_src, self.use_draw) {
            (Some(name), false) => {
                let patch = ctx.patch(name).ok_or_else(|| EffectError::MissingBase(name.clone()))?;
                EffectConfig::with_patch(Arc::clone(patch))
            }
            _ => EffectConfig::with_drawing_base(),
        };
        if let Some(fill) = self.fill_color {
            config = config.fill(fill)?;
        }
        if let Some(shadow) = self.shadow() {
            config = config.shadow(shadow);
        }
        if let Some(width) = self.stroke_size.filter(|&w| w > 0.0) {
            config = config.stroke(StrokeSpec::new(width, self.stroke_color.unwrap_or(Color::white())));
        }
        if let Some(enabled) = self.opt_stroke_corner {
            config = config.optimize_stroke_corner(enabled);
        }
        if let Some(radii) = self.radii() {
            config = config.corner_radii(radii);
        }
        if let Some(gap) = self.content_gap {
            config = config.content_cap(gap);
        }
        if self.bounds == Some(BoundsMode::Padding) {
            config = config.padding_bounds();
        }
        Ok(config)
    }
}

// ── Entry points ──────────────────────────────────────────────────────────

pub fn from_attributes(ctx: &StyleContext, attrs: &AttributeSet) -> Result<EffectConfig, EffectError> {
    EffectAttributes::parse(attrs, ctx).to_config(ctx)
}

/// Builds a selector from style `name` and its `name:state` blocks.
///
/// State blocks inherit the base block and override its keys. Without any
/// state block the default focus policy applies.
pub fn selector_from_sheet(sheet: &StyleSheet, name: &str, ctx: &StyleContext) -> Result<SelectorDrawable, EffectError> {
    let base = sheet
        .resolve(name, None)
        .ok_or_else(|| EffectError::UnknownStyle(name.to_string()))?;
    let base = from_attributes(ctx, &AttributeSet::from(base))?;

    let states = sheet.states_of(name);
    if states.is_empty() {
        return Ok(base.build_focus_selector());
    }

    let mut builder = SelectorDrawable::builder().state(InteractionState::Default, base.build());
    for state_name in states {
        let Some(state) = InteractionState::from_name(state_name) else {
            log::warn!("style `{name}`: unknown state `{state_name}` ignored");
            continue;
        };
        let props = sheet.resolve(name, Some(state_name)).unwrap_or_default();
        let drawable = from_attributes(ctx, &AttributeSet::from(props))?.build();
        builder = builder.state(state, drawable);
    }
    Ok(builder.build())
}

/// Inflation hook: attaches the effect when the `inject` attribute is set,
/// keeping the view's existing padding underneath the content inset.
///
/// Returns whether an effect was attached.
pub fn inject(view: &mut impl EffectTarget, attrs: &AttributeSet, ctx: &StyleContext) -> Result<bool, EffectError> {
    let parsed = EffectAttributes::parse(attrs, ctx);
    if !parsed.inject {
        return Ok(false);
    }
    let config = parsed.to_config(ctx)?;
    let padding = view.padding();
    attach(config, view, padding, &GeometryResolver::from_process_default())?;
    Ok(true)
}
