use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use pixicon::{IconEditor, LayoutConfig, RasterCompositor, svg_data_url};

#[derive(Parser)]
#[command(name = "pixicon")]
#[command(about = "Render a pixel-grid icon to SVG and PNG", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON icon configuration to load
    #[arg(value_hint = clap::ValueHint::FilePath, conflicts_with = "path")]
    config: Option<PathBuf>,

    /// Draw this SVG path data on a default 16x16 icon instead
    #[arg(short, long)]
    path: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Base name of the output files
    #[arg(short, long, default_value = "icon")]
    name: String,

    /// Width available to the preview, in pixels
    #[arg(short, long, default_value_t = 1024)]
    width: u32,

    /// Extra rotation in degrees (repeatable)
    #[arg(short, long)]
    rotate: Vec<i32>,

    /// Extra mirroring 0-3 (repeatable)
    #[arg(short, long)]
    mirror: Vec<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let layout = LayoutConfig::default().with_available_width(cli.width);
    let mut editor = IconEditor::new(layout).context("failed to set up the editor")?;

    match (&cli.config, &cli.path) {
        (Some(file), _) => {
            let json = fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            editor
                .set_config_json(&json)
                .with_context(|| format!("failed to load {}", file.display()))?;
        }
        (None, Some(path)) => editor.set_path(path.as_str()),
        (None, None) => bail!("give a configuration file or --path"),
    }

    for degrees in &cli.rotate {
        editor.apply_rotation(*degrees, true);
    }
    for index in &cli.mirror {
        editor.apply_mirror(*index, true)?;
    }

    editor.frame().context("failed to render the preview")?;
    let preview = editor
        .last_frame()
        .context("no preview was rendered")?;

    let logical = RasterCompositor::new()
        .render_logical(editor.state(), editor.transforms())
        .context("failed to render the icon")?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;

    let svg = editor.export_svg();
    write(&cli.out_dir.join(format!("{}.svg", cli.name)), &svg)?;
    write(
        &cli.out_dir.join(format!("{}.url.txt", cli.name)),
        &svg_data_url(&svg),
    )?;

    let preview_file = cli.out_dir.join(format!("{}.preview.png", cli.name));
    preview
        .image
        .save(&preview_file)
        .with_context(|| format!("failed to write {}", preview_file.display()))?;

    let icon_file = cli.out_dir.join(format!("{}.png", cli.name));
    logical
        .save(&icon_file)
        .with_context(|| format!("failed to write {}", icon_file.display()))?;

    tracing::info!(
        x = editor.size().width,
        y = editor.size().height,
        transforms = editor.transforms().len(),
        "wrote icon to {}",
        cli.out_dir.display()
    );
    Ok(())
}

fn write(file: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(file, contents).with_context(|| format!("failed to write {}", file.display()))
}
