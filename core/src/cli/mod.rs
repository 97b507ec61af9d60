pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dicomlens
#[derive(Parser, Debug)]
#[command(name = "dicomlens")]
#[command(about = "DICOM tag metadata extraction and inspection tool")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON raw element map produced by the DICOM parser
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only show records whose name or value contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort records by tag instead of keeping the input order
    #[arg(long)]
    pub sort: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text table
    Text,
    /// JSON format
    Json,
}
