use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use prettytable::{cell, row, Table};
use seg_dataset::{Config, IndexedSegmentationDataset, SegmentationDataset};
use std::path::{Path, PathBuf};
use tch::{vision, Kind, Tensor};

#[derive(Debug, Clone, Parser)]
/// Inspect segmentation datasets.
enum Opts {
    /// Show the number of samples and the class table.
    Info {
        /// configuration file
        config_file: PathBuf,
    },
    /// Save an image side by side with its colored label.
    Render {
        /// configuration file
        config_file: PathBuf,
        /// sample index
        #[clap(long, default_value = "0")]
        index: usize,
        /// output PNG file
        #[clap(long, default_value = "sample.png")]
        output_file: PathBuf,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    match Opts::parse() {
        Opts::Info { config_file } => info(config_file)?,
        Opts::Render {
            config_file,
            index,
            output_file,
        } => render(config_file, index, output_file)?,
    }

    Ok(())
}

fn open_dataset(config_file: impl AsRef<Path>) -> Result<IndexedSegmentationDataset> {
    let config_file = config_file.as_ref();
    let config = Config::open(config_file)
        .with_context(|| format!("failed to load config file '{}'", config_file.display()))?;
    let dataset = config.dataset.build().with_context(|| {
        format!(
            "failed to open dataset at '{}'",
            config.dataset.root.display()
        )
    })?;
    Ok(dataset)
}

fn info(config_file: impl AsRef<Path>) -> Result<()> {
    let dataset = open_dataset(config_file)?;
    print_summary(&dataset);
    Ok(())
}

fn print_summary(dataset: &impl SegmentationDataset) {
    let schema = dataset.schema();
    println!("samples: {}", dataset.num_records());
    println!("classes: {}", schema.class_count());
    println!("ignore label: {}", schema.ignore_label);

    let mut table = Table::new();
    table.add_row(row!["index", "class", "color"]);

    schema.classes.iter().enumerate().for_each(|(index, name)| {
        let color = schema
            .palette
            .as_ref()
            .and_then(|palette| palette.get(index))
            .map(|[r, g, b]| format!("({}, {}, {})", r, g, b))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row![index, name, color]);
    });

    table.printstd();
}

fn render(config_file: impl AsRef<Path>, index: usize, output_file: impl AsRef<Path>) -> Result<()> {
    let output_file = output_file.as_ref();
    let dataset = open_dataset(config_file)?;

    let (image, label) = dataset
        .get(index)
        .with_context(|| format!("failed to load sample {}", index))?;
    let label = dataset.ignore_to_background(&label)?;
    let colors = dataset.decode(&label)?.permute(&[2, 0, 1]);
    let canvas = Tensor::cat(&[image.to_kind(Kind::Uint8), colors], 2);

    vision::image::save(&canvas, output_file)
        .with_context(|| format!("failed to write '{}'", output_file.display()))?;
    info!(
        "saved sample {} of {} to '{}'",
        index,
        dataset.len(),
        output_file.display()
    );

    Ok(())
}
