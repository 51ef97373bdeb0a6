use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use versioning_cli::config::{self, ConfigMerger};
use versioning_cli::document::{self, DocumentFormat};
use versioning_render::{print_banner, print_version};

#[derive(Debug, Parser)]
#[command(
    name = "versioning",
    version,
    about = "Print the versioning information embedded into this program."
)]
struct Cli {
    /// Config file (default: ./versioning.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the banner and the versioning report.
    Print(PrintArgs),
    /// Write the versioning information as a document.
    Export(ExportArgs),
}

#[derive(Debug, Parser)]
struct PrintArgs {
    /// Versioning document (.json or .toml) to print instead of the compiled-in value.
    #[arg(long)]
    input: Option<Utf8PathBuf>,

    /// Omit the banner.
    #[arg(long, default_value_t = false)]
    no_banner: bool,

    /// Banner title.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Debug, Parser)]
struct ExportArgs {
    /// Versioning document (.json or .toml) to re-encode instead of the compiled-in value.
    #[arg(long)]
    input: Option<Utf8PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: DocumentFormat,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let merger = load_merger(cli.config.as_deref())?;
    match cli.cmd {
        Command::Print(args) => cmd_print(args, merger),
        Command::Export(args) => cmd_export(args, merger),
    }
}

/// Load the config named on the command line, or discover it in the working directory.
fn load_merger(explicit: Option<&Utf8Path>) -> anyhow::Result<ConfigMerger> {
    match explicit {
        Some(path) => {
            let file_config = config::load_config(path)?;
            let base_dir = path.parent().map(Utf8Path::to_path_buf).unwrap_or_default();
            Ok(ConfigMerger::new(file_config, base_dir))
        }
        None => {
            let cwd = Utf8PathBuf::from(".");
            let file_config =
                config::load_or_default(&cwd).context("load versioning.toml config")?;
            Ok(ConfigMerger::new(file_config, cwd))
        }
    }
}

fn cmd_print(args: PrintArgs, merger: ConfigMerger) -> anyhow::Result<()> {
    let merged =
        merger.merge_print_args(args.input.as_deref(), args.no_banner, args.title.as_deref());
    debug!(
        "merged config: banner={}, title={:?}, input={:?}",
        merged.banner, merged.title, merged.input
    );

    let info = document::select(merged.input.as_deref())?;

    if merged.banner {
        print_banner(&merged.title);
    }
    print_version(&info);
    Ok(())
}

fn cmd_export(args: ExportArgs, merger: ConfigMerger) -> anyhow::Result<()> {
    let merged = merger.merge_export_args(args.input.as_deref());
    let info = document::select(merged.input.as_deref())?;

    let text = document::encode(&info, args.format)?;
    let mut stdout = io::stdout().lock();
    match stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
    {
        Ok(()) => Ok(()),
        // A reader that went away early is not an error.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed while exporting: {}", err);
            Ok(())
        }
        Err(err) => Err(err).context("write export to stdout"),
    }
}
