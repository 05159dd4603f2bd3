use anyhow::Context;
use clap::{Parser, Subcommand};
use pixel_tile::Raster;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilepix::models::AppConfig;
use tilepix::rendering::render_swatch;
use tilepix::services::{PreviewRequest, PreviewService, PreviewStyle};

#[derive(Parser)]
#[command(name = "tilepix")]
#[command(about = "Tilepix - preview indexed pixel-art tiles and palettes in the terminal")]
struct Cli {
    /// Configuration file (defaults to $TILEPIX_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List palettes with their color counts
    Palettes {
        /// Only list palettes with exactly this many colors
        #[arg(long)]
        colors: Option<usize>,
    },
    /// Print the colors of a palette
    Swatch {
        /// Palette name (e.g. "PICO8")
        palette: String,
    },
    /// List configured tiles
    Tiles,
    /// Render a configured tile scaled to the terminal
    Render {
        /// Tile name from the configuration
        tile: String,

        /// Scale factor (defaults to default_scale from the configuration)
        #[arg(short, long, allow_hyphen_values = true)]
        scale: Option<f64>,

        /// Render with this palette instead of the tile's own
        #[arg(short, long)]
        palette: Option<String>,

        /// Use 24-bit ANSI colors instead of shaded glyphs
        #[arg(long)]
        ansi: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so previews on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilepix=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("TILEPIX_CONFIG").ok().map(PathBuf::from));
    let config = AppConfig::load_or_default(config_path.as_deref()).with_context(|| {
        match &config_path {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Failed to load default configuration".to_string(),
        }
    })?;
    let service = PreviewService::new(config).context("Failed to build palette catalog")?;

    match cli.command {
        Some(Commands::Palettes { colors }) => run_palettes_command(&service, colors),
        Some(Commands::Swatch { palette }) => run_swatch_command(&service, &palette),
        Some(Commands::Tiles) => run_tiles_command(&service),
        Some(Commands::Render {
            tile,
            scale,
            palette,
            ansi,
        }) => run_render_command(&service, tile, scale, palette, ansi),
        None => {
            print_status(&service, config_path.as_deref());
            Ok(())
        }
    }
}

/// List palettes, optionally only those with a given color count
fn run_palettes_command(service: &PreviewService, colors: Option<usize>) -> anyhow::Result<()> {
    let catalog = service.catalog();
    match colors {
        Some(count) => {
            let group = catalog.by_color_count(count);
            if group.is_empty() {
                println!("No palettes with {count} colors");
            }
            for name in group.keys() {
                println!("{name:<16} {count:>4}");
            }
        }
        None => {
            for (name, palette) in catalog.iter() {
                println!("{name:<16} {:>4}", palette.len());
            }
        }
    }
    Ok(())
}

/// Print every color of a palette with a sample
fn run_swatch_command(service: &PreviewService, name: &str) -> anyhow::Result<()> {
    let palette = service.palette(name)?;
    print!("{}", render_swatch(palette));
    Ok(())
}

/// List configured tiles with their size and palette
fn run_tiles_command(service: &PreviewService) -> anyhow::Result<()> {
    for (name, tile_config) in &service.config().tiles {
        let tile = service
            .tile(name, None)
            .with_context(|| format!("Invalid tile {name}"))?;
        println!(
            "{name:<16} {:>3}x{:<3} {}",
            tile.width(),
            tile.height(),
            tile_config.palette
        );
    }
    Ok(())
}

/// Render a configured tile to stdout
fn run_render_command(
    service: &PreviewService,
    tile: String,
    scale: Option<f64>,
    palette: Option<String>,
    ansi: bool,
) -> anyhow::Result<()> {
    let request = PreviewRequest {
        tile,
        palette,
        scale,
        style: if ansi {
            PreviewStyle::Ansi
        } else {
            PreviewStyle::Blocks
        },
    };

    let text = service
        .render(&request)
        .with_context(|| format!("Failed to render tile {}", request.tile))?;
    print!("{text}");
    Ok(())
}

fn print_status(service: &PreviewService, config_path: Option<&Path>) {
    let config = service.config();
    println!("Tilepix v{}", env!("CARGO_PKG_VERSION"));
    match config_path {
        Some(path) => println!("Config:        {}", path.display()),
        None => println!("Config:        built-in defaults"),
    }
    println!("Palettes:      {}", service.catalog().len());
    println!("Tiles:         {}", config.tiles.len());
    println!("Default scale: {}", config.default_scale);
    println!();
    println!("Run `tilepix --help` for commands.");
}
