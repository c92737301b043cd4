use std::process::ExitCode;

use anyhow::Context;

use template_exporter::args::ArgSet;
use template_exporter::cli::{self, ExportRequest};
use template_exporter::config::Config;
use template_exporter::export::{load_catalog, Exporter};
use template_exporter::logging::{self, Reporter};

fn main() -> ExitCode {
    let args = cli::parse_env();

    if cli::wants_help(&args) {
        print!("{}", cli::help_text(&cli::program_name()));
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[FATAL]\t{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &ArgSet) -> anyhow::Result<ExitCode> {
    let config_path = Config::config_path();
    let config = Config::load_from(&config_path).context("Failed to load configuration")?;
    logging::init_tracing(&config.defaults.log_level);
    tracing::debug!(
        path = %config_path.display(),
        found = config_path.exists(),
        "configuration loaded"
    );
    tracing::debug!(records = args.len(), "arguments parsed");

    let request = ExportRequest::from_args(args, &config);
    let mut reporter = Reporter::console();
    if request.quiet {
        reporter.silence();
    }

    let catalog = load_catalog(&request.catalogs, &mut reporter);
    let exporter = Exporter::new(&request, &catalog);

    match exporter.run(&catalog, &mut reporter) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            reporter.error(format!("[FATAL]\tThe program exited due to an error:\n{e}"));
            Ok(ExitCode::FAILURE)
        }
    }
}
