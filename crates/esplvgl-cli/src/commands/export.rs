//! Export command - replay a script and write the YAML document

use anyhow::{Context, Result};
use clap::Args;
use esplvgl_core::{Canvas, DisplayConfig, Rgb};
use std::path::{Path, PathBuf};

use crate::script::Script;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Widget script (JSON)
    pub script: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Display parameters (JSON); a `display` section in the script wins
    #[arg(long)]
    pub display_config: Option<PathBuf>,

    /// Canvas background, overriding the script (e.g. #000000)
    #[arg(long)]
    pub background: Option<Rgb>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let yaml = render(&args)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &yaml)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{yaml}"),
    }
    Ok(())
}

fn render(args: &ExportArgs) -> Result<String> {
    let display = match &args.display_config {
        Some(path) => load_display_config(path)?,
        None => DisplayConfig::default(),
    };
    let script = Script::load(&args.script)?;

    let mut canvas = Canvas::with_display(display);
    script.replay(&mut canvas);
    if let Some(color) = args.background {
        canvas.set_background_color(color);
    }
    Ok(canvas.to_yaml())
}

fn load_display_config(path: &Path) -> Result<DisplayConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read display config {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid display config {}", path.display()))
}
