//! # code128 CLI
//!
//! Command-line interface for Code 128 encoding.
//!
//! ## Usage
//!
//! ```bash
//! # Print symbol values
//! code128 encode "ab\t1234"
//!
//! # Print modules as 1s and 0s
//! code128 bars test
//!
//! # Write output.png (1 px per module, 20 px high)
//! code128 png test
//!
//! # Larger image with a custom path
//! code128 png --module-width 3 --height 42 -o label.png "¤0123456789"
//!
//! # Debug logging
//! code128 --verbose encode test
//! ```
//!
//! FNC1 is written as `¤` (U+00A4).

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use code128::{Barcode, Code128Error, RasterConfig};

/// code128 - Length-optimal Code 128 barcode encoder
#[derive(Parser, Debug)]
#[command(name = "code128")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the symbol values for TEXT
    Encode {
        /// Text to encode
        #[arg(default_value = "test")]
        text: String,
    },

    /// Print the module pattern for TEXT (1 = bar, 0 = space)
    Bars {
        /// Text to encode
        #[arg(default_value = "test")]
        text: String,
    },

    /// Render TEXT to a PNG file
    Png {
        /// Text to encode
        #[arg(default_value = "test")]
        text: String,

        /// Output file
        #[arg(long, short, value_name = "FILE", default_value = "output.png")]
        output: PathBuf,

        /// Pixels per module
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=100))]
        module_width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..=10_000))]
        height: u32,

        /// Blank margin on each side, in modules
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(0..=1_000))]
        quiet_zone: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "code128=debug" } else { "code128=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), Code128Error> {
    match command {
        Commands::Encode { text } => {
            let barcode = Barcode::new(&text)?;
            let values: Vec<String> = barcode.symbols().iter().map(u8::to_string).collect();
            println!("{}", values.join(" "));
        }

        Commands::Bars { text } => {
            let barcode = Barcode::new(&text)?;
            let line: String = barcode
                .modules()
                .iter()
                .map(|&bar| if bar { '1' } else { '0' })
                .collect();
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", line)?;
        }

        Commands::Png {
            text,
            output,
            module_width,
            height,
            quiet_zone,
        } => {
            let barcode = Barcode::new(&text)?;
            let config = RasterConfig::default()
                .module_width(module_width)
                .height(height)
                .quiet_zone(quiet_zone);

            barcode.save_png(&output, &config)?;
            println!(
                "Saved {} symbols ({} modules) to {}",
                barcode.symbols().len(),
                barcode.modules().len(),
                output.display()
            );
        }
    }

    Ok(())
}
