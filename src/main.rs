use clap::Parser;
use color_eyre::Result;
use log::LevelFilter;
use std::path::PathBuf;

use ifc_convert::convert::convert_file;
use ifc_convert::export::export_report;
use ifc_convert::importer::{ImporterConfig, NodeImporter};
use ifc_convert::model::ConversionReport;

#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(about = "IFC Convert - turn IFC models into fragments files")]
#[command(version)]
struct Args {
    /// Path to IFC file
    input: PathBuf,

    /// Path of the fragments file to write
    output: PathBuf,

    /// Directory holding @thatopen/fragments and web-ifc, relative to the
    /// current directory
    #[arg(long, value_name = "DIR", default_value = "node_modules")]
    modules: PathBuf,

    /// Directory holding the web-ifc WASM files [default: <MODULES>/web-ifc/]
    #[arg(long, value_name = "DIR")]
    wasm_path: Option<PathBuf>,

    /// Node.js executable
    #[arg(long, value_name = "PROGRAM", default_value = "node")]
    node: String,

    /// Write a JSON conversion report
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = i32::from(err.use_stderr());
            err.print().ok();
            std::process::exit(code);
        }
    };

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_target(false)
        .init();

    let wasm_path = args
        .wasm_path
        .clone()
        .unwrap_or_else(|| args.modules.join("web-ifc"));
    let importer = NodeImporter::new(ImporterConfig::new(wasm_path), &args.modules, &args.node);

    let conversion = convert_file(&args.input, &args.output, &importer)?;

    if let Some(report_path) = &args.report {
        export_report(&ConversionReport::from(&conversion), report_path)?;
        log::info!("report written to {}", report_path.display());
    }

    if !args.quiet {
        println!(
            "Converted {} -> {} ({} bytes)",
            conversion.input.display(),
            conversion.output.display(),
            conversion.output_bytes
        );
    }

    Ok(())
}
