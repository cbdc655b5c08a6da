use clap::{Parser, Subcommand, builder::PossibleValuesParser};
use cli::{config_schema, load_config, run_extract, run_header};
use color_eyre::eyre::Result;
use edge_frames::RoundingMode;
use strum::VariantNames;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Convert rendered animation frames into X-Y display point data", long_about = None)]
struct Cli {
    /// Path to a TOML or JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect edges in every other frame and print the coordinate listing
    Extract {
        /// Frame path template, `{}` is replaced by the 1-based frame number
        #[arg(long)]
        frames: Option<String>,
        /// Number of frames to process
        #[arg(long)]
        frame_count: Option<usize>,
        /// Rounding of remapped coordinates
        #[arg(long, value_parser = PossibleValuesParser::new(RoundingMode::VARIANTS))]
        rounding: Option<String>,
        /// Write the listing to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Order and cull a listing into drawing paths and emit a C header
    Header {
        /// Listing produced by `extract` (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Keep every n-th point of each path
        #[arg(long)]
        cull_modulus: Option<usize>,
        /// Write the header to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination, `.toml` or `.json`
        #[arg(short, long, default_value = "xy_frames.toml")]
        output: PathBuf,
    },
    /// Print the JSON schema of the configuration file
    Schema,
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(io::BufWriter::new(std::fs::File::create(path)?)),
        None => Box::new(io::BufWriter::new(io::stdout().lock())),
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries the data, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { frames, frame_count, rounding, output } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(template) = frames {
                config.frames.path_template = template;
            }
            if let Some(frame_count) = frame_count {
                config.frames.frame_count = frame_count;
            }
            if let Some(rounding) = rounding {
                config.rounding = rounding.parse::<RoundingMode>()?;
            }
            config.validate()?;

            let out = open_output(output.as_deref())?;
            let summary = run_extract(&config, out)?;
            info!("✅ Extracted {} points from {} frames", summary.points, summary.frames);
        }
        Commands::Header { input, cull_modulus, output } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(cull_modulus) = cull_modulus {
                config.header.cull_modulus = cull_modulus;
            }
            config.validate()?;

            let listing = match input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let mut out = open_output(output.as_deref())?;
            run_header(&listing, &config.header, &mut out)?;
        }
        Commands::InitConfig { output } => {
            let config = load_config(cli.config.as_deref())?;
            config.to_file(&output)?;
            info!("📄 Configuration saved to: {:?}", output);
        }
        Commands::Schema => {
            println!("{}", config_schema()?);
        }
    }

    Ok(())
}
