use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettize::models::RunConfig;
use palettize::services::{run_convert, run_generate};
use palette_engine::FrequencyOrder;

#[derive(Parser)]
#[command(name = "palettize")]
#[command(about = "Remap images onto a color palette, or derive a palette from an image")]
struct Cli {
    /// Worker threads for row-parallel stages (default: available cores)
    #[arg(long, global = true, env = "PALETTIZE_WORKERS")]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace every pixel with its nearest palette color and save as JPEG
    Convert {
        /// JSON palette file ({"Colors": ["#rrggbb", ...]})
        palette: PathBuf,

        /// Input PNG or JPEG image
        image: PathBuf,

        /// Output JPEG path
        output: PathBuf,
    },
    /// Build a palette from an image's most or least used colors
    Generate {
        /// JSON palette file to write
        palette: PathBuf,

        /// Input PNG or JPEG image
        image: PathBuf,

        /// Rank least-used (min) or most-used (max) colors first
        #[arg(value_enum)]
        order: Order,

        /// Maximum number of colors to keep
        #[arg(long, env = "PALETTIZE_PALETTE_SIZE")]
        size: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    /// Least-used colors first
    Min,
    /// Most-used colors first
    Max,
}

impl From<Order> for FrequencyOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Min => FrequencyOrder::Ascending,
            Order::Max => FrequencyOrder::Descending,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palettize=warn,palette_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            palette,
            image,
            output,
        } => {
            let config = RunConfig::new(cli.workers, None);
            run_convert(&palette, &image, &output, &config)?;
        }
        Commands::Generate {
            palette,
            image,
            order,
            size,
        } => {
            let config = RunConfig::new(cli.workers, size);
            run_generate(&palette, &image, order.into(), &config)?;
        }
    }

    Ok(())
}
