//! Command implementations for the temperature heat map CLI.
//!
//! Every subcommand loads the dataset the same way (a local file when
//! `--input` is given, otherwise one fetch from `--url`), builds the heat
//! map model, and writes or logs a view of it.

use clap::Subcommand;
use gtv_data::DATASET_URL;

pub mod export;
pub mod render;
pub mod source;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Render the heat map to a standalone SVG document
    Render {
        /// Output path for the SVG file
        #[arg(short = 'o', long)]
        output: String,

        /// Dataset URL to fetch
        #[arg(long, default_value = DATASET_URL)]
        url: String,

        /// Read the dataset from a local JSON file instead of fetching
        #[arg(short = 'i', long)]
        input: Option<String>,
    },

    /// Export one CSV row per heat map cell
    Export {
        /// Output path for the CSV file
        #[arg(short = 'o', long)]
        output: String,

        /// Dataset URL to fetch
        #[arg(long, default_value = DATASET_URL)]
        url: String,

        /// Read the dataset from a local JSON file instead of fetching
        #[arg(short = 'i', long)]
        input: Option<String>,
    },

    /// Log record count, year span and temperature extremes
    Summary {
        /// Dataset URL to fetch
        #[arg(long, default_value = DATASET_URL)]
        url: String,

        /// Read the dataset from a local JSON file instead of fetching
        #[arg(short = 'i', long)]
        input: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render { output, url, input } => {
            let dataset = source::load_dataset(input.as_deref(), &url).await?;
            render::run_render(&dataset, &output)
        }
        Command::Export { output, url, input } => {
            let dataset = source::load_dataset(input.as_deref(), &url).await?;
            export::run_export(&dataset, &output)
        }
        Command::Summary { url, input } => {
            let dataset = source::load_dataset(input.as_deref(), &url).await?;
            summary::run_summary(&dataset);
            Ok(())
        }
    }
}
