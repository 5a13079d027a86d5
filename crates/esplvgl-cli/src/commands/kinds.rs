//! Kinds command - list the widget palette

use anyhow::Result;
use clap::Args;
use esplvgl_core::WidgetKind;
use esplvgl_core::widget::{default_colors, default_size};

#[derive(Args, Debug)]
pub struct KindsArgs {
    /// Also print the default colours
    #[arg(long)]
    pub colors: bool,
}

pub fn run(args: KindsArgs) -> Result<()> {
    print!("{}", render(&args));
    Ok(())
}

fn render(args: &KindsArgs) -> String {
    let mut out = String::new();
    for kind in WidgetKind::ALL {
        let (width, height) = default_size(kind);
        out.push_str(&format!(
            "{:<10} {:<10} {:>3}x{:<3}",
            kind.tag(),
            kind.display_name(),
            width,
            height
        ));
        if args.colors {
            let colors = default_colors(kind);
            for color in [colors.bg, colors.text, colors.border, colors.checked_bg]
                .into_iter()
                .flatten()
            {
                out.push(' ');
                out.push_str(&color.to_string());
            }
        }
        out.push('\n');
    }
    out
}
