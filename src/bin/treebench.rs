use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use treebench::cli::{self as prog_cli, parse_output_mode, parse_structure_arg};
use treebench::config::{RunConfig, load_config};
use treebench::errors::BenchError;
use treebench::import::{load_sample_count, parse_sample_count};

#[derive(Parser, Debug)]
#[command(name = "treebench", version, about = "Compare ordered-container benchmark results", long_about = None)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, global = true, help = "Path to a config file (TOML). Defaults to ./treebench.toml if present.")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Log level: error|warn|info|debug|trace")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Also write treebench.log into this directory")]
    log_dir: Option<PathBuf>,
    #[arg(long, global = true, conflicts_with_all = ["log_level", "log_dir"], help = "log4rs YAML file; replaces --log-level and --log-dir")]
    log_config: Option<PathBuf>,
    #[arg(long, global = true, help = "Output format: human|plain|json")]
    format: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct InputArgs {
    #[arg(long, short = 'n', help = "Number of benchmarked input sizes. Prompted on stdin when not set anywhere.")]
    samples: Option<String>,
    #[arg(long, help = "Directory the data files are read from (default: current directory)")]
    data_dir: Option<PathBuf>,
    #[arg(long = "structure", short = 's', value_parser = parse_structure_arg, help = "name=path; repeatable. Replaces the conventional <name>_data.txt set.")]
    structures: Vec<(String, PathBuf)>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Load all data files and report their series")]
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    #[command(about = "Render the selected series to a PNG, SVG or CSV file")]
    Plot {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long = "op", short = 'o', help = "insert|delete|find; repeatable (default: insert)")]
        operations: Vec<String>,
        #[arg(long, help = "Only chart these structures; repeatable")]
        only: Vec<String>,
        #[arg(long, help = "Output file; the extension picks the format (default: img.png)")]
        output: Option<PathBuf>,
        #[arg(long, help = "Chart title")]
        title: Option<String>,
    },
}

fn overrides_from(input: &InputArgs) -> Result<RunConfig, BenchError> {
    let samples = match &input.samples {
        Some(s) => Some(
            i64::try_from(parse_sample_count(s)?).map_err(|_| BenchError::InvalidSampleCount(s.clone()))?,
        ),
        None => None,
    };
    let structures = if input.structures.is_empty() {
        None
    } else {
        Some(input.structures.iter().cloned().collect::<BTreeMap<_, _>>())
    };
    Ok(RunConfig { samples, data_dir: input.data_dir.clone(), structures, ..RunConfig::default() })
}

fn resolve_samples(cfg: &RunConfig) -> Result<usize, BenchError> {
    if let Some(n) = cfg.sample_count()? {
        return Ok(n);
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("samples: ");
        let _ = std::io::stderr().flush();
    }
    load_sample_count(stdin.lock())
}

fn build_command(cli_cmd: Commands, file_cfg: RunConfig) -> Result<prog_cli::Command, BenchError> {
    match cli_cmd {
        Commands::Check { input } => {
            let cfg = file_cfg.merged_with(overrides_from(&input)?);
            let samples = resolve_samples(&cfg)?;
            Ok(prog_cli::Command::Check { samples, files: cfg.structure_files() })
        }
        Commands::Plot { input, operations, only, output, title } => {
            let mut over = overrides_from(&input)?;
            if !operations.is_empty() {
                over.operations = Some(operations);
            }
            if !only.is_empty() {
                over.only = Some(only);
            }
            over.output = output;
            over.chart.title = title;
            let cfg = file_cfg.merged_with(over);
            let selection = cfg.selection()?;
            let samples = resolve_samples(&cfg)?;
            Ok(prog_cli::Command::Plot {
                samples,
                files: cfg.structure_files(),
                selection,
                output: cfg.output_path(),
                chart: cfg.chart_options(),
            })
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let logging = match &cli.log_config {
        Some(path) => treebench::logger::init_path(path),
        None => treebench::logger::configure_logging(cli.log_dir.as_deref(), cli.log_level.as_deref(), None),
    };
    if let Err(e) = logging {
        eprintln!("warning: logging disabled: {e}");
    }
    let format = cli.format.clone();
    let r = load_config(cli.config.as_deref())
        .and_then(|cfg| build_command(cli.command, cfg))
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|cmd| match &format {
            Some(_) => prog_cli::run_with_format(cmd, parse_output_mode(&format)),
            None => prog_cli::run(cmd),
        });
    if let Err(e) = r {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
