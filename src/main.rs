use anyhow::Context;
use clap::{ArgAction, Parser};
use magicanvas::Config;
use magicanvas::commentary::{GeminiDescriber, describe_or_fallback};
use magicanvas::config::CommentaryConfig;
use magicanvas::draw::{BrushConfig, CairoSurface};
use magicanvas::export::{FileSaveConfig, save_png, to_data_url, write_png};
use magicanvas::input::{InputState, Tool};
use magicanvas::replay::StrokeScript;
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MAGICANVAS_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "magicanvas")]
#[command(version = VERSION, about = "Freehand drawing canvas with rainbow brushes")]
struct Cli {
    /// Stroke script (JSON input events) to replay onto a fresh canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the PNG to this path instead of the export directory
    #[arg(long, short = 'o', value_name = "FILE", requires = "script")]
    output: Option<PathBuf>,

    /// Tool selected before the first event (overrides config)
    #[arg(long, short = 't', value_enum)]
    tool: Option<Tool>,

    /// Brush size in pixels, 2-50 (overrides config)
    #[arg(long, short = 'b', value_name = "PX")]
    brush_size: Option<f64>,

    /// Seed for crayon grain, for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Ask an AI model to comment on the finished drawing
    #[arg(long, short = 'c', action = ArgAction::SetTrue)]
    critique: bool,

    /// Config file to use instead of ~/.config/magicanvas/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a documented example config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        print_usage();
        return Ok(());
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = StrokeScript::load(script_path)?;
    let width = script.width.unwrap_or(config.canvas.width);
    let height = script.height.unwrap_or(config.canvas.height);
    let background = config.drawing.background_color.to_color();

    let surface = CairoSurface::new(width, height, background)
        .with_context(|| format!("Failed to create {width}x{height} canvas"))?;
    let brush = BrushConfig::new(
        cli.tool.unwrap_or(config.drawing.default_tool),
        cli.brush_size.unwrap_or(config.drawing.default_brush_size),
    );

    let mut state = InputState::with_surface(brush, surface).with_background(background);
    if let Some(seed) = cli.seed {
        state = state.with_seed(seed);
    }

    let painted = script.apply(&mut state);
    log::info!(
        "Painted {} segments on a {}x{} canvas",
        painted,
        width,
        height
    );

    let png = state.export_png()?;
    let saved_path = match cli.output {
        Some(path) => {
            write_png(&png, &path)?;
            path
        }
        None => save_png(&png, &FileSaveConfig::from(&config.export))?,
    };
    println!("Saved drawing to {}", saved_path.display());

    if cli.critique || config.commentary.enabled {
        let comment = request_commentary(&config.commentary, &to_data_url(&png))?;
        println!("{comment}");
    }

    Ok(())
}

/// Runs the commentary request on a short-lived runtime.
///
/// Only runtime creation can fail; every commentary failure turns into the
/// configured fallback reply.
fn request_commentary(config: &CommentaryConfig, encoded_image: &str) -> anyhow::Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime for commentary")?;

    let comment = runtime.block_on(async {
        match GeminiDescriber::from_config(config) {
            Ok(describer) => {
                describe_or_fallback(&describer, encoded_image, &config.fallback).await
            }
            Err(e) => {
                log::warn!("Drawing commentary unavailable: {}", e);
                config.fallback.clone()
            }
        }
    });
    Ok(comment)
}

fn print_usage() {
    println!("magicanvas: Freehand drawing canvas with rainbow brushes");
    println!();
    println!("Usage:");
    println!("  magicanvas --script strokes.json             Replay strokes, save PNG");
    println!("  magicanvas --script strokes.json -o out.png  Save to a specific file");
    println!("  magicanvas --script strokes.json --critique  Also ask for AI commentary");
    println!("  magicanvas --init-config                     Write an example config");
    println!("  magicanvas --help                            Show help");
    println!();
    println!("Tools:");
    for tool in Tool::ALL {
        println!("  {:<16} {}", tool_id(tool), tool.label());
    }
    println!();
    println!("Commentary reads the API key from $GEMINI_API_KEY by default.");
}

fn tool_id(tool: Tool) -> String {
    use clap::ValueEnum;
    tool.to_possible_value()
        .map(|value| value.get_name().to_string())
        .unwrap_or_default()
}
