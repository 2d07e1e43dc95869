use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::tco_analysis::domain::{LooseNumber, RawAnalysisInput};

/// Compare the total cost of ownership of network access control vendors
///
/// Numeric options are taken as typed; invalid values fall back to their
/// defaults with a warning instead of aborting the run.
#[derive(Parser, Debug, Default)]
#[command(name = "nac-tco")]
#[command(version)]
#[command(
    about = "Compare the total cost of ownership of network access control vendors",
    long_about = None
)]
pub struct Args {
    /// Number of managed devices [default: 1000]
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub devices: Option<String>,

    /// Number of sites [default: 1]
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub locations: Option<String>,

    /// Analysis period in years, 1 to 10 [default: 3]
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Company size: very-small, small, medium, large or enterprise [default: medium]
    #[arg(short = 's', long, value_name = "SIZE")]
    pub company_size: Option<String>,

    /// Industry: healthcare, financial-services, retail, manufacturing,
    /// education, government, technology or energy-utilities
    #[arg(short, long, value_name = "INDUSTRY")]
    pub industry: Option<String>,

    /// Fully loaded annual cost of one FTE in USD [default: 100000]
    #[arg(long, value_name = "USD", allow_hyphen_values = true)]
    pub fte_cost: Option<String>,

    /// Expected cost of one breach in USD [default: industry average, else 4350000]
    #[arg(long, value_name = "USD", allow_hyphen_values = true)]
    pub breach_cost: Option<String>,

    /// Override Portnox's per-device monthly price in USD
    #[arg(long, value_name = "USD", allow_hyphen_values = true)]
    pub portnox_price: Option<String>,

    /// Vendor id to compare; repeat or comma-separate [default: whole catalog]
    #[arg(short, long = "vendor", value_name = "ID", value_delimiter = ',')]
    pub vendors: Vec<String>,

    /// Savings baseline: "average" or a vendor id [default: average]
    #[arg(short, long, value_name = "BASELINE")]
    pub baseline: Option<String>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Vendor catalog file (.json, .yml, .yaml or .toml) replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Config file path [default: ./nac-tco.config.yml if present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Analysis inputs given on the command line
    pub fn analysis_input(&self) -> RawAnalysisInput {
        RawAnalysisInput {
            device_count: self.devices.clone().map(LooseNumber::from),
            location_count: self.locations.clone().map(LooseNumber::from),
            analysis_period: self.years.clone().map(LooseNumber::from),
            company_size: self.company_size.clone(),
            industry: self.industry.clone(),
            fte_cost: self.fte_cost.clone().map(LooseNumber::from),
            breach_cost: self.breach_cost.clone().map(LooseNumber::from),
            portnox_pricing: self.portnox_price.clone().map(LooseNumber::from),
            vendors: (!self.vendors.is_empty()).then(|| self.vendors.clone()),
            baseline: self.baseline.clone(),
        }
    }
}
