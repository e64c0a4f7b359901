use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use veneer_effects::prelude::*;
use veneer_engine::coords::{Rect, Vec2};
use veneer_engine::logging::{init_logging, LoggingConfig};
use veneer_engine::render::Pixmap;

const DEMO_SHEET: &str = include_str!("../styles/demo.vnr");

fn main() -> Result<()> {
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          VENEER STUDIO  v0.1           ║");
    println!("  ║   effect previews  ·  .vnr sheets      ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    init_logging(LoggingConfig::default());
    GeometryConfig::install_process_default(GeometryConfig::default());

    let args = Args::parse();
    let (source, origin) = match &args.sheet {
        Some(path) => (
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
            path.display().to_string(),
        ),
        None => (DEMO_SHEET.to_string(), "bundled demo sheet".to_string()),
    };
    let sheet = veneer_style::parse_str(&source).with_context(|| format!("parsing {origin}"))?;
    log::info!("loaded {} styles from {origin}", sheet.names().len());

    let mut ctx = StyleContext::new(1.0);
    ctx.register_patch("bubble", PatchImage::decode(&bubble_patch())?);
    if let Some(dir) = args.sheet.as_deref().and_then(Path::parent) {
        register_png_patches(&mut ctx, dir)?;
    }

    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;

    let mut written = 0;
    for name in sheet.names() {
        let selector = selector_from_sheet(&sheet, name, &ctx).with_context(|| format!("style `{name}`"))?;
        let mut view = PreviewView::new(args.size);
        view.set_padding(selector.content_inset());
        let resolver = GeometryResolver::from_process_default();
        view.set_background(Background::from_selector(selector, &resolver, args.size)?);

        for state in InteractionState::ALL {
            let changed = view.transition(state)?;
            let Some(layer) = view.background.as_ref().and_then(Background::layer) else {
                log::info!("{name}:{state} shows nothing");
                continue;
            };
            let path = args.out.join(format!("{name}-{state}.png"));
            write_png(layer.pixmap(), &path)?;
            written += 1;
            log::info!(
                "{name}:{state} -> {} ({}x{}, {})",
                path.display(),
                layer.pixmap().width(),
                layer.pixmap().height(),
                if changed { "recompiled" } else { "reused" }
            );
        }
        if let Some(bleed) = view.bleed {
            log::debug!("{name} bleeds {:?} past its bounds; padding {:?}", bleed.to_array(), view.padding.to_array());
        }
    }

    println!("  {written} previews written to {}", args.out.display());
    println!();
    Ok(())
}

// ── Arguments ─────────────────────────────────────────────────────────────

/// Renders every style of a veneer style sheet to PNG previews.
#[derive(Parser, Debug)]
#[command(name = "veneer-studio", version)]
struct Args {
    /// Style sheet to render. Defaults to the bundled demo sheet.
    sheet: Option<PathBuf>,

    /// Directory the previews are written to.
    #[arg(long, default_value = "veneer-out")]
    out: PathBuf,

    /// View size, as WxH.
    #[arg(long, default_value = "160x64", value_parser = parse_size)]
    size: PixelSize,
}

fn parse_size(s: &str) -> Result<PixelSize, String> {
    let (w, h) = s.split_once('x').ok_or_else(|| format!("{s:?} is not WxH"))?;
    let side = |v: &str| v.trim().parse::<u32>().map_err(|e| format!("{v:?}: {e}"));
    let size = PixelSize::new(side(w)?, side(h)?);
    if size.is_empty() {
        return Err(format!("{size} has no area"));
    }
    Ok(size)
}

// ── Patch images ──────────────────────────────────────────────────────────

/// Rounded card with 8 px fixed corners and a 4 px content inset.
fn bubble_patch() -> PatchImageSource {
    const CONTENT: u32 = 24;
    const CORNER: u32 = 8;
    const INSET: u32 = 4;
    let marked = image::Rgba([0, 0, 0, 255]);
    let resolver = GeometryResolver::new(GeometryConfig::default());
    let shape = resolver.resolve(
        Rect::new(1.0, 1.0, CONTENT as f32, CONTENT as f32),
        CornerRadii::all(CORNER as f32),
    );

    let last = CONTENT + 1;
    let img = image::RgbaImage::from_fn(CONTENT + 2, CONTENT + 2, |x, y| {
        let border = x == 0 || y == 0 || x == last || y == last;
        if !border {
            let a = shape.coverage(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
            return image::Rgba([250, 250, 255, (a * 255.0).round() as u8]);
        }
        let along = if y == 0 || y == last { x } else { y };
        let stretch = (1 + CORNER..=CONTENT - CORNER).contains(&along);
        let content = (1 + INSET..=CONTENT - INSET).contains(&along);
        let corner = (x == 0 || x == last) && (y == 0 || y == last);
        let mark = !corner
            && match (x, y) {
                (_, 0) | (0, _) => stretch,
                _ => content,
            };
        if mark { marked } else { image::Rgba([0, 0, 0, 0]) }
    });
    PatchImageSource::from_rgba(img)
}

/// Registers every decodable `*.png` in `dir` under its file stem.
fn register_png_patches(ctx: &mut StyleContext, dir: &Path) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_none_or(|e| e != "png") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let bytes = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        match PatchImageSource::from_png_bytes(&bytes).and_then(|src| PatchImage::decode(&src)) {
            Ok(patch) => {
                log::info!("registered patch image `{stem}` from {}", path.display());
                ctx.register_patch(stem, patch);
            }
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }
    Ok(())
}

fn write_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    pixmap
        .to_rgba_image()
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))
}

// ── PreviewView ───────────────────────────────────────────────────────────

/// Stand-in for a focusable host view.
struct PreviewView {
    size: PixelSize,
    padding: Insets,
    background: Option<Background>,
    bleed: Option<Insets>,
}

impl PreviewView {
    fn new(size: PixelSize) -> Self {
        Self { size, padding: Insets::zero(), background: None, bleed: None }
    }

    /// Forwards a state change to the background; `true` when it repainted.
    fn transition(&mut self, state: InteractionState) -> Result<bool> {
        let Some(bg) = self.background.as_mut() else {
            return Ok(false);
        };
        let changed = bg.set_state(state)?;
        if let Some(layer) = bg.layer().filter(|l| l.is_out_of_bounds()) {
            let outsets = layer.outsets();
            self.on_effect_out_of_bounds(outsets);
        }
        Ok(changed)
    }
}

impl EffectTarget for PreviewView {
    fn size(&self) -> PixelSize {
        self.size
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn padding(&self) -> Insets {
        self.padding
    }

    fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    fn on_effect_out_of_bounds(&mut self, outsets: Insets) {
        self.bleed = Some(self.bleed.map_or(outsets, |b| b.max(outsets)));
    }
}
