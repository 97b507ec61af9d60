use clap::Parser;
use dicomlens_core::cli::report::TextReport;
use dicomlens_core::cli::{Cli, OutputFormat};
use dicomlens_core::{filter_records, MetadataExtractor, RawElement, Result, SeriesIndexSelector};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let elements = read_element_map(&cli.file)?;
    info!(
        "loaded {} raw elements from {}",
        elements.len(),
        cli.file.display()
    );

    let extractor = MetadataExtractor::new();
    let mut records = extractor.extract(elements.iter().map(|(k, e)| (k.as_str(), e)));
    info!("extracted {} records", records.len());

    if cli.sort {
        records.sort_by(|a, b| a.key.cmp(&b.key));
    }

    let filtered = filter_records(&records, cli.search.as_deref().unwrap_or(""));

    let selector = SeriesIndexSelector::from_elements(elements.iter().map(|(k, e)| (k.as_str(), e)));

    match cli.format {
        OutputFormat::Text => {
            print!("{}", TextReport::new(&filtered));
            let (lo, hi) = selector.slider_domain();
            println!();
            println!(
                "Instances: {:?} (slider {}..{})",
                selector.ordered_instance_numbers(),
                lo,
                hi
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
    }

    Ok(())
}

/// Reads the parser collaborator's JSON element map, keeping key order
fn read_element_map(path: &std::path::Path) -> Result<Vec<(String, RawElement)>> {
    let text = std::fs::read_to_string(path)?;
    let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)?;

    let mut elements = Vec::with_capacity(parsed.len());
    for (key, value) in parsed {
        let element: RawElement = serde_json::from_value(value)?;
        elements.push((key, element));
    }
    Ok(elements)
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}
