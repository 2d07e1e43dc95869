use clap::Parser;
use nac_tco::adapters::outbound::catalog::{BuiltinCatalogSource, FileCatalogSource};
use nac_tco::adapters::outbound::console::StderrProgressReporter;
use nac_tco::application::dto::{ComparisonRequest, OutputFormat};
use nac_tco::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nac_tco::application::read_models::ComparisonReadModelBuilder;
use nac_tco::application::use_cases::GenerateComparisonUseCase;
use nac_tco::cli::Args;
use nac_tco::config::{discover_config, load_config_from_path, ConfigFile};
use nac_tco::ports::inbound::VendorComparisonPort;
use nac_tco::ports::outbound::{CatalogSource, ProgressReporter};
use nac_tco::shared::error::ExitCode;
use nac_tco::shared::Result;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter; `RUST_LOG` is the fallback
const LOG_ENV_VAR: &str = "NAC_TCO_LOG";

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_logging();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    // Config file: explicit path, else auto-discovery in the working directory
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    // Command-line values take precedence over the config file
    let input = config
        .as_ref()
        .map(ConfigFile::analysis_input)
        .unwrap_or_default()
        .overlaid_with(args.analysis_input());
    let format = args
        .format
        .or_else(|| config.as_ref().and_then(ConfigFile::output_format))
        .unwrap_or_default();
    let catalog_path = args
        .catalog
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.catalog.clone()));

    // Create adapters (Dependency Injection)
    let progress_reporter = StderrProgressReporter::new();
    let use_case =
        GenerateComparisonUseCase::new(create_catalog_source(catalog_path), &progress_reporter);

    // Execute use case
    let response = use_case.compare(ComparisonRequest::new(input))?;

    // Format report
    progress_reporter.report(FormatterFactory::progress_message(format));
    let model = ComparisonReadModelBuilder::build(
        &response.comparison,
        &response.configuration,
        &response.metadata,
    );
    let formatted_output = FormatterFactory::create(format).format(&model)?;

    // Present output
    let presenter_type = PresenterType::from_output(args.output.clone());
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    if let Some(path) = args.output {
        progress_reporter.report_completion(&completion_message(format, &path));
    }

    Ok(())
}

fn create_catalog_source(path: Option<PathBuf>) -> Box<dyn CatalogSource> {
    match path {
        Some(path) => Box::new(FileCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource::new()),
    }
}

fn completion_message(format: OutputFormat, path: &std::path::Path) -> String {
    format!("✅ {} report written to {}", format.label(), path.display())
}
