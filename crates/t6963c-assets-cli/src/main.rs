//! T6963C Asset Tool
//!
//! CLI for listing, checking, previewing and exporting the T6963C demo tables.

mod config;
mod preview;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use t6963c_assets::catalog::{self, Asset};
use t6963c_assets::{cgram, glyphs, text, AssetKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "t6963c-assets")]
#[command(about = "Inspect the T6963C 128x64 LCD demo assets")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Preview/export configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every asset with its kind and dimensions
    List,
    /// Check every table against its declared dimensions
    Check,
    /// Preview an asset in the terminal
    Show {
        /// Asset name (see `list`)
        name: String,
    },
    /// Print an asset's raw bytes
    Dump {
        /// Asset name (see `list`)
        name: String,
    },
    /// Write a bitmap asset as PNG
    Export {
        /// Asset name (see `list`)
        name: String,

        /// Output file path
        #[arg(default_value = "asset.png")]
        output: PathBuf,

        /// Upscale factor (1-16, overrides the configuration)
        #[arg(long)]
        scale: Option<u32>,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Output file path
        #[arg(default_value = "t6963c-assets.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            debug!("Loaded configuration from: {}", path.display());
            config
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::List => handle_list(),
        Commands::Check => handle_check(),
        Commands::Show { name } => handle_show(&name, &config),
        Commands::Dump { name } => handle_dump(&name),
        Commands::Export {
            name,
            output,
            scale,
        } => handle_export(&name, &output, scale, &config),
        Commands::InitConfig { output } => {
            Config::default().save(&output)?;
            println!("Configuration written to {}", output.display());
            Ok(())
        }
    }
}

fn handle_list() -> Result<()> {
    println!("{:<14} {:<14} {:>9} {:>6}", "NAME", "KIND", "SIZE", "BYTES");
    for asset in catalog::assets() {
        let size = if asset.kind().is_bitmap() {
            format!("{}x{}", asset.width(), asset.height())
        } else {
            format!("{} codes", asset.width())
        };
        println!(
            "{:<14} {:<14} {:>9} {:>6}",
            asset.name(),
            asset.kind().to_string(),
            size,
            asset.bytes().len()
        );
    }
    Ok(())
}

fn handle_check() -> Result<()> {
    let errors = catalog::validate_all();
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("{}", err);
        }
        bail!("{} of {} assets failed validation", errors.len(), catalog::assets().len());
    }
    info!("All assets valid");
    println!("{} assets OK", catalog::assets().len());
    Ok(())
}

fn handle_show(name: &str, config: &Config) -> Result<()> {
    let asset = catalog::find(name)?;
    let (on, off) = (config.preview.on, config.preview.off);

    match asset.kind() {
        AssetKind::CgromText => {
            println!("{}", text::decode(asset.bytes())?);
        }
        AssetKind::CgramText => {
            for &code in asset.bytes() {
                let glyph = cgram::glyph_for_code(code)
                    .with_context(|| format!("No CGRAM glyph for code 0x{:02X}", code))?;
                let mut buf = [0u8; t6963c_assets::GLYPH_BYTES];
                println!("0x{:02X} {}", code, glyph.ch());
                print!("{}", preview::ascii_art(&glyph.to_bitmap(&mut buf), on, off));
            }
        }
        AssetKind::CgramFont => {
            for glyph in &cgram::CGRAM_GLYPHS {
                let mut buf = [0u8; t6963c_assets::GLYPH_BYTES];
                let [top, bottom] = glyph.cell_codes();
                println!(
                    "{} cells [{:02X} {:02X}] [{:02X} {:02X}]",
                    glyph.ch(),
                    top[0],
                    top[1],
                    bottom[0],
                    bottom[1]
                );
                print!("{}", preview::ascii_art(&glyph.to_bitmap(&mut buf), on, off));
            }
        }
        AssetKind::GraphicGlyph => {
            for ch in glyphs::GRAPHIC_GLYPH_CHARS {
                if let Some(bitmap) = glyphs::graphic_glyph(ch) {
                    println!("{}", ch);
                    print!("{}", preview::ascii_art(&bitmap, on, off));
                }
            }
        }
        AssetKind::Image => {
            print!("{}", preview::ascii_art(&bitmap_of(asset)?, on, off));
        }
    }
    Ok(())
}

fn handle_dump(name: &str) -> Result<()> {
    let asset = catalog::find(name)?;
    print!("{}", preview::hex_dump(asset.bytes()));
    Ok(())
}

fn handle_export(
    name: &str,
    output: &Path,
    scale: Option<u32>,
    config: &Config,
) -> Result<()> {
    let asset = catalog::find(name)?;
    let bitmap = bitmap_of(asset)?;

    let scale = scale.unwrap_or(config.export.scale);
    if !(1..=16).contains(&scale) {
        bail!("Scale must be between 1 and 16");
    }
    let fg = config.export.foreground_rgb()?;
    let bg = config.export.background_rgb()?;

    let png_data = preview::encode_png(&bitmap, scale, fg, bg)?;
    std::fs::write(output, &png_data)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        "Exported {} ({}x{}, scale {}) to {}",
        asset.name(),
        bitmap.width(),
        bitmap.height(),
        scale,
        output.display()
    );
    println!("Exported {} to {}", asset.name(), output.display());
    Ok(())
}

fn bitmap_of(asset: &Asset) -> Result<t6963c_assets::Bitmap<'static>> {
    match asset.bitmap() {
        Some(bitmap) => Ok(bitmap?),
        None => bail!("{} is a {} table, not a bitmap", asset.name(), asset.kind()),
    }
}
