use bundle_dismantle::adapters::outbound::console::StderrProgressReporter;
use bundle_dismantle::adapters::outbound::filesystem::{CsvTemplateDirectory, FileSystemTableReader};
use bundle_dismantle::application::factories::{FormatterFactory, PresenterFactory};
use bundle_dismantle::application::use_cases::{DismantleBundlesUseCase, GenerateTemplatesUseCase};
use bundle_dismantle::cli::{Args, Command, ExpandArgs, ExpandPlan};
use bundle_dismantle::config::resolve_config;
use bundle_dismantle::ports::outbound::{OutputPresenter, ResultFormatter, TableReader};
use bundle_dismantle::shared::error::{DismantleError, ExitCode};
use bundle_dismantle::shared::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Expand(expand) => run_expand(expand).await,
        Command::Sheets(sheets) => run_sheets(&sheets.file),
        Command::Template(template) => run_template(&template.dir),
    }
}

async fn run_expand(args: ExpandArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let ExpandPlan {
        request,
        format,
        destination,
    } = args.into_plan(config)?;

    // Reading and expanding is blocking work; keep it off the runtime so
    // Ctrl-C can still be observed.
    let worker = tokio::task::spawn_blocking(move || {
        let use_case =
            DismantleBundlesUseCase::new(FileSystemTableReader::new(), StderrProgressReporter::new());
        use_case.execute(request)
    });

    let response = tokio::select! {
        joined = worker => joined
            .map_err(|e| anyhow::anyhow!("Expansion worker failed: {}", e))??,
        _ = tokio::signal::ctrl_c() => return Err(DismantleError::Cancelled.into()),
    };

    eprintln!("{}", FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format(&response)?;
    PresenterFactory::create(destination).present(&output)?;

    Ok(())
}

fn run_sheets(file: &Path) -> Result<()> {
    for name in FileSystemTableReader::new().sheet_names(file)? {
        println!("{}", name);
    }
    Ok(())
}

fn run_template(dir: &Path) -> Result<()> {
    GenerateTemplatesUseCase::new(CsvTemplateDirectory::new(dir), StderrProgressReporter::new())
        .execute()?;
    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<DismantleError>())
        .map(DismantleError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}

fn print_error(error: &anyhow::Error) {
    let heading = "❌ An error occurred:";
    if std::io::stderr().is_terminal() {
        eprintln!("\n{}\n", heading.red().bold());
    } else {
        eprintln!("\n{}\n", heading);
    }
    eprintln!("{}", error);

    // Display error chain
    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }
    eprintln!();
}
