use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lsbstego::models::AppConfig;
use lsbstego::services::StegoService;

#[derive(Parser)]
#[command(name = "lsbstego")]
#[command(about = "Hide short text messages in the least significant bits of PNG images")]
struct Cli {
    /// YAML configuration file (defaults to $LSBSTEGO_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in a cover image
    Hide {
        /// Cover image (PNG)
        cover: PathBuf,

        /// Message to hide (single-byte characters only)
        message: String,

        /// Output PNG file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract a hidden message
    Extract {
        /// Stego image (PNG)
        image: PathBuf,
    },
    /// Write the absolute difference of two images
    Diff {
        /// Original image
        original: PathBuf,

        /// Stego image
        stego: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Peak signal-to-noise ratio between two images
    Psnr {
        /// Original image
        original: PathBuf,

        /// Stego image
        stego: PathBuf,
    },
    /// Show how many characters an image can hold
    Capacity {
        /// Cover image (PNG)
        image: PathBuf,
    },
    /// Hide, extract, diff and measure PSNR in one run
    Roundtrip {
        /// Cover image (PNG)
        cover: PathBuf,

        /// Message to hide
        message: String,

        /// Stego output PNG file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Difference output PNG file path
        #[arg(short, long)]
        difference: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("LSBSTEGO_CONFIG").ok().map(PathBuf::from));

    // Minimal logging for CLI
    init_tracing();

    let config = AppConfig::load_optional(config_path.as_deref());

    let service = StegoService::new(config);
    let json = cli.json;

    match cli.command {
        Some(Commands::Hide {
            cover,
            message,
            output,
        }) => {
            let report = service.hide(&cover, &message, output.as_deref())?;
            emit(json, &report, || {
                println!(
                    "Hid {} characters ({} of {} bits) in {}",
                    report.message_chars,
                    report.message_bits,
                    report.capacity_bits,
                    report.output.display()
                );
                println!("PSNR: {}", format_db(report.psnr_db));
            })
        }
        Some(Commands::Extract { image }) => {
            let message = service.extract(&image)?;
            emit(json, &serde_json::json!({ "message": message }), || {
                println!("Extracted Message: {message}");
            })
        }
        Some(Commands::Diff {
            original,
            stego,
            output,
        }) => {
            let report = service.difference(&original, &stego, output.as_deref())?;
            emit(json, &report, || {
                println!(
                    "Difference image saved to {} ({} samples changed)",
                    report.output.display(),
                    report.changed_samples
                );
                println!("PSNR: {}", format_db(report.psnr_db));
            })
        }
        Some(Commands::Psnr { original, stego }) => {
            let db = service.psnr(&original, &stego)?;
            emit(json, &serde_json::json!({ "psnr_db": db }), || {
                println!("PSNR: {}", format_db(db));
            })
        }
        Some(Commands::Capacity { image }) => {
            let report = service.capacity(&image)?;
            emit(json, &report, || {
                println!(
                    "{}x{} with {} channels: {} bits, up to {} characters",
                    report.width,
                    report.height,
                    report.channels,
                    report.capacity_bits,
                    report.max_message_chars
                );
            })
        }
        Some(Commands::Roundtrip {
            cover,
            message,
            output,
            difference,
        }) => {
            let report = service.roundtrip(
                &cover,
                &message,
                output.as_deref(),
                difference.as_deref(),
            )?;
            emit(json, &report, || {
                println!("Steganography successful: {}", report.hide.output.display());
                println!("Extracted Message: {}", report.extracted);
                println!(
                    "Difference image saved to {}",
                    report.difference.output.display()
                );
                println!("PSNR: {}", format_db(report.difference.psnr_db));
            })?;
            if !report.intact {
                anyhow::bail!("extracted message does not match the hidden one");
            }
            Ok(())
        }
        None => {
            run_status_command(service.config(), config_path.as_deref());
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lsbstego=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Print `value` as JSON, or run the plain-text printer
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce()) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}

fn format_db(db: f64) -> String {
    if db.is_infinite() {
        "inf dB (images are identical)".to_string()
    } else {
        format!("{db:.2} dB")
    }
}

/// Show version and effective configuration
fn run_status_command(config: &AppConfig, config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("lsbstego v{VERSION}\n");
    println!("Configuration:");
    match config_path {
        Some(path) => println!("  config file    {}", path.display()),
        None => println!("  config file    (defaults)"),
    }
    println!("  stego output   {}", config.output.stego.display());
    println!("  diff output    {}", config.output.difference.display());
    println!("  optimize PNG   {}", config.output.optimize);
    println!("\nRun `lsbstego --help` for commands.");
}
