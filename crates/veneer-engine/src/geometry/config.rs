use std::hash::{Hash, Hasher};

use state::InitCell;

/// Stroke width above which corner optimization switches on automatically.
pub const DEFAULT_STROKE_THICK_LIMIT: f32 = 6.0;

/// Immutable geometry behaviour handed to a [`GeometryResolver`](super::GeometryResolver).
///
/// A process default can be installed once at startup with
/// [`install_process_default`](Self::install_process_default); only the
/// top-level compile entry points read it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryConfig {
    /// Scale oversized corner radii down instead of reporting an error.
    pub auto_clamp: bool,
    /// Optimize stroke corners for thick strokes when the call site did not decide.
    pub auto_optimize_stroke_corners: bool,
    /// Stroke width (px) above which automatic corner optimization applies.
    pub stroke_thick_limit: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            auto_clamp: true,
            auto_optimize_stroke_corners: true,
            stroke_thick_limit: DEFAULT_STROKE_THICK_LIMIT,
        }
    }
}

static PROCESS_DEFAULT: InitCell<GeometryConfig> = InitCell::new();

impl GeometryConfig {
    #[inline]
    pub fn auto_clamp(mut self, enabled: bool) -> Self {
        self.auto_clamp = enabled;
        self
    }

    #[inline]
    pub fn auto_optimize_stroke_corners(mut self, enabled: bool) -> Self {
        self.auto_optimize_stroke_corners = enabled;
        self
    }

    #[inline]
    pub fn stroke_thick_limit(mut self, limit: f32) -> Self {
        self.stroke_thick_limit = limit;
        self
    }

    /// Installs the process-wide default. Returns `false` (and keeps the
    /// existing value) when a default was already installed.
    pub fn install_process_default(config: GeometryConfig) -> bool {
        let installed = PROCESS_DEFAULT.set(config);
        if installed {
            log::debug!("geometry process default installed: {:?}", config);
        } else {
            log::warn!("geometry process default already installed; ignoring {:?}", config);
        }
        installed
    }

    /// The installed process default, or [`GeometryConfig::default`].
    pub fn process_default() -> GeometryConfig {
        PROCESS_DEFAULT.try_get().copied().unwrap_or_default()
    }

    /// Stable hash of every field, used in compiled-layer cache keys.
    pub fn fingerprint(&self) -> u64 {
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.auto_clamp.hash(&mut h);
        self.auto_optimize_stroke_corners.hash(&mut h);
        self.stroke_thick_limit.to_bits().hash(&mut h);
        h.finish()
    }
}
