//! CLI entry point for arbor

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use arbor::{
    ArborError, Depth, ExportRequest, Format, Materializer, export_tree, parse, print_entries_json,
    print_tree, render_document, strip_document_header, strip_root_line, write_entries,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Render directories as tree diagrams and build directories back from them")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a directory as a tree diagram and save it
    Render(RenderArgs),
    /// Create directories and empty files from a tree diagram
    Build(BuildArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Directory to render
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Depth: 0 (children only), 1 (one level down), -1 (everything)
    #[arg(short = 'L', long = "level", default_value = "0", allow_negative_numbers = true)]
    depth: Depth,

    /// Output document format: md or txt
    #[arg(short, long, default_value = "md")]
    format: Format,

    /// Directory the document is saved into
    #[arg(short = 'o', long = "save-dir", default_value = ".")]
    save_dir: PathBuf,

    /// Print the diagram without saving it
    #[arg(long = "no-save")]
    no_save: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Diagram file to read, or - for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Directory the structure is created under
    #[arg(short, long, default_value = ".")]
    dest: PathBuf,

    /// Skip the first line of the diagram (the root line of a rendered tree)
    #[arg(long = "skip-root")]
    skip_root: bool,

    /// List the parsed entries instead of creating them
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Print parsed entries as JSON (implies --dry-run)
    #[arg(long = "json")]
    json: bool,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Render(args) => run_render(args),
        Command::Build(args) => run_build(args),
    };

    if let Err(e) = result {
        eprintln!("arbor: {}", e);
        process::exit(1);
    }
}

/// Resolve a user-supplied path against the working directory so `.` gets a real name.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

fn run_render(args: RenderArgs) -> Result<(), ArborError> {
    let root = absolute(&args.path);
    let root = fs::canonicalize(&root).unwrap_or(root);
    let request = ExportRequest {
        root,
        depth: args.depth,
        format: args.format,
        save_dir: absolute(&args.save_dir),
        ignore_patterns: args.ignore,
    };

    let document = if args.no_save {
        render_document(&request)?
    } else {
        let outcome = export_tree(&request)?;
        eprintln!("Saved to {}", outcome.path.display());
        outcome.document
    };

    print_tree(
        &format!("{}/", document.dir_name),
        &document.lines,
        should_use_color(args.color),
    )
    .map_err(|source| ArborError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

fn read_input(input: &str) -> Result<String, ArborError> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| ArborError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        Ok(text)
    } else {
        fs::read_to_string(input).map_err(|source| ArborError::Io {
            path: PathBuf::from(input),
            source,
        })
    }
}

fn run_build(args: BuildArgs) -> Result<(), ArborError> {
    let text = read_input(&args.input)?;
    let mut diagram = strip_document_header(&text);
    if args.skip_root {
        diagram = strip_root_line(diagram);
    }
    let entries = parse(diagram)?;

    let stdout_error = |source: io::Error| ArborError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };
    if args.json {
        return print_entries_json(&entries).map_err(stdout_error);
    }
    if args.dry_run {
        return write_entries(&mut io::stdout().lock(), &entries).map_err(stdout_error);
    }

    let dest = absolute(&args.dest);
    let report = Materializer::new(&dest).materialize(&entries)?;
    println!(
        "Created {} of {} entries under {} ({} already existed)",
        report.created,
        report.total(),
        dest.display(),
        report.existing
    );
    Ok(())
}
