use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::application::dto::{DismantleRequest, OutputFormat, TableSource};
use crate::application::factories::{PresenterFactory, PresenterType};
use crate::config::{config_format, ConfigFile};
use crate::shared::error::DismantleError;
use crate::shared::Result;

/// Extensions that name a spreadsheet, which this tool reads but never writes
const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Expand bundle SKUs on order lines into their child products
#[derive(Parser, Debug)]
#[command(name = "bundle-dismantle")]
#[command(version)]
#[command(about = "Expand bundle SKUs on order lines into their child products", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dismantle bundles in an order table using a master bundle table
    Expand(ExpandArgs),
    /// List the sheet names of a workbook or CSV file
    Sheets(SheetsArgs),
    /// Write starter order and master templates
    Template(TemplateArgs),
}

#[derive(clap::Args, Debug)]
pub struct ExpandArgs {
    /// Order table (.csv, .xlsx, .xls, .ods)
    #[arg(long, value_name = "FILE")]
    pub orders: PathBuf,

    /// Sheet of the order workbook (defaults to the first sheet)
    #[arg(long, value_name = "SHEET")]
    pub order_sheet: Option<String>,

    /// Master bundle table (.csv, .xlsx, .xls, .ods)
    #[arg(long, value_name = "FILE")]
    pub master: PathBuf,

    /// Sheet of the master workbook (defaults to the first sheet)
    #[arg(long, value_name = "SHEET")]
    pub master_sheet: Option<String>,

    /// Output format: csv, json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for a timestamped Result_YYYYMMDD_HHMMSS file
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Fail when the order or master sheet has no data rows
    #[arg(long)]
    pub reject_empty: bool,

    /// Configuration file (defaults to ./bundle-dismantle.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SheetsArgs {
    /// Workbook or CSV file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    /// Directory to write the templates into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

/// Everything `expand` needs once arguments and config are merged
#[derive(Debug)]
pub struct ExpandPlan {
    pub request: DismantleRequest,
    pub format: OutputFormat,
    pub destination: PresenterType,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ExpandArgs {
    /// Merges these arguments with the config file; arguments win.
    ///
    /// The format comes from `--format`, then the `-o` extension, then the
    /// config file, then defaults to CSV.
    ///
    /// # Errors
    /// - `UnsupportedFormat` if the output file names a spreadsheet
    /// - `InvalidConfig` if the config file names an unknown format
    pub fn into_plan(self, config: ConfigFile) -> Result<ExpandPlan> {
        if let Some(ref output) = self.output {
            reject_spreadsheet_output(output)?;
        }

        let config_format = config_format(&config)?;

        let format = self
            .format
            .or_else(|| self.output.as_deref().and_then(OutputFormat::from_path))
            .or(config_format)
            .unwrap_or_default();

        let destination = match (self.output, self.output_dir.or(config.output_dir)) {
            (Some(path), _) => PresenterType::File(path),
            (None, Some(dir)) => PresenterFactory::timestamped_in(&dir, format),
            (None, None) => PresenterType::Stdout,
        };

        let request = DismantleRequest::new(
            TableSource::new(self.orders, self.order_sheet.or(config.order_sheet)),
            TableSource::new(self.master, self.master_sheet.or(config.master_sheet)),
            self.reject_empty || config.reject_empty.unwrap_or(false),
        );

        Ok(ExpandPlan {
            request,
            format,
            destination,
        })
    }
}

fn reject_spreadsheet_output(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    if let Some(extension) = extension {
        if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
            return Err(DismantleError::UnsupportedFormat {
                path: path.to_path_buf(),
                details: format!(
                    "Spreadsheet output (.{}) is not supported. Use .csv, .json or .md",
                    extension
                ),
            }
            .into());
        }
    }
    Ok(())
}
