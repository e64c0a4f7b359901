// ── Value ─────────────────────────────────────────────────────────────────

/// Length unit of a dimension literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Physical pixels.
    Px,
    /// Density-independent pixels, scaled by the consumer's density.
    Dp,
}

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Bare number: `16` or `0.5`.
    Number(f32),
    /// Number with a unit: `12dp`, `3px`.
    Dimension(f32, Unit),
    /// Color literal, straight-alpha `[r, g, b, a]`.
    Color([u8; 4]),
    /// Quoted string: `"bubble"`.
    Str(String),
    /// Unquoted identifier: keywords such as `true` or `padding`.
    Ident(String),
}

impl Value {
    /// Numeric value with its unit; bare numbers count as pixels.
    pub fn as_dimension(&self) -> Option<(f32, Unit)> {
        match self {
            Value::Number(v) => Some((*v, Unit::Px)),
            Value::Dimension(v, u) => Some((*v, *u)),
            _ => None,
        }
    }

    /// Bare number only.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// `true` / `false` identifiers, or `1` / `0`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Ident(s) if s == "true" => Some(true),
            Value::Ident(s) if s == "false" => Some(false),
            Value::Number(v) if *v == 1.0 => Some(true),
            Value::Number(v) if *v == 0.0 => Some(false),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<[u8; 4]> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// String or identifier text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Ident(s) => Some(s),
            _ => None,
        }
    }

    /// Human-readable kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Dimension(..) => "dimension",
            Value::Color(_) => "color",
            Value::Str(_) => "string",
            Value::Ident(_) => "identifier",
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based source line.
    pub line: usize,
}

// ── StyleBlock ────────────────────────────────────────────────────────────

/// One `style name[:state] { ... }` block.
///
/// ```text
/// style card:focused {
///     stroke_color: #ffcc00
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBlock {
    pub name: String,
    /// Interaction state this block overrides, e.g. `focused`.
    pub state: Option<String>,
    pub props: Vec<Prop>,
    pub line: usize,
}

impl StyleBlock {
    /// Look up a property value by key. Later duplicates win.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }
}

// ── StyleSheet ────────────────────────────────────────────────────────────

/// A parsed style sheet. Block names with their state are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    pub blocks: Vec<StyleBlock>,
}

impl StyleSheet {
    pub fn block(&self, name: &str, state: Option<&str>) -> Option<&StyleBlock> {
        self.blocks
            .iter()
            .find(|b| b.name == name && b.state.as_deref() == state)
    }

    /// Distinct style names in source order.
    pub fn names(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for b in &self.blocks {
            if !out.contains(&b.name.as_str()) {
                out.push(&b.name);
            }
        }
        out
    }

    /// States that have an override block for `name`, in source order.
    pub fn states_of(&self, name: &str) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|b| b.name == name)
            .filter_map(|b| b.state.as_deref())
            .collect()
    }

    /// Properties of `name` in `state`: the base block's properties, with every
    /// key the state block sets replaced by the state block's value.
    ///
    /// Returns `None` when neither block exists.
    pub fn resolve(&self, name: &str, state: Option<&str>) -> Option<Vec<Prop>> {
        let base = self.block(name, None);
        let overlay = state.and_then(|s| self.block(name, Some(s)));
        if base.is_none() && overlay.is_none() {
            return None;
        }

        let mut props: Vec<Prop> = base.map(|b| b.props.clone()).unwrap_or_default();
        for p in overlay.map(|b| b.props.as_slice()).unwrap_or_default() {
            props.retain(|q| q.key != p.key);
            props.push(p.clone());
        }
        Some(props)
    }
}
