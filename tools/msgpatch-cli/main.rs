use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, info};
use msgpatch::prelude::*;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

/// Compile message definitions into Pure Data patches
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,

    /// Log level
    #[arg(
        short,
        long,
        global = true,
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    verbosity: String,

    /// Extra equation function to accept besides `lexicon` (repeatable)
    #[arg(short, long = "function", global = true)]
    functions: Vec<String>,

    /// Font size written into the patch header
    #[arg(long, global = true)]
    font_size: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a definition file into a patch
    Compile {
        /// Path to the message definition
        input: PathBuf,
        /// Output patch path [default: <message-name>.pd]
        output: Option<PathBuf>,
    },
    /// Parse and build without writing; prints the parsed definition as JSON
    Check {
        /// Path to the message definition
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = LevelFilter::from_str(&cli.verbosity).unwrap_or(LevelFilter::Warn);
    Builder::from_default_env().filter_level(level).init();
    info!("'{}' version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let compiler = build_compiler(&cli);

    match cli.cmd {
        Commands::Compile { input, output } => run_compile(&compiler, &input, output.as_deref()),
        Commands::Check { input } => run_check(&compiler, &input),
    }
}

fn build_compiler(cli: &Cli) -> Compiler {
    let mut canvas = CanvasConfig::default();
    if let Some(font_size) = cli.font_size {
        canvas.font_size = font_size;
    }

    cli.functions
        .iter()
        .fold(Compiler::builder().with_canvas(canvas), |builder, f| {
            builder.with_function(f)
        })
        .build()
}

fn run_compile(compiler: &Compiler, input: &Path, output: Option<&Path>) {
    let start = Instant::now();
    let written = compiler
        .compile_file(input, output)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    info!("Compiled in {:?}", start.elapsed());
    println!("Wrote {}", written.display());
}

fn run_check(compiler: &Compiler, input: &Path) {
    let text = std::fs::read_to_string(input).unwrap_or_else(|e| {
        exit_with_error(&format!("Could not read '{}': {}", input.display(), e))
    });
    let compilation = compiler
        .compile_str(&text)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let json = serde_json::to_string_pretty(&compilation.spec)
        .unwrap_or_else(|e| exit_with_error(&format!("Could not serialize definition: {}", e)));
    println!("{}", json);
    eprintln!(
        "OK: {} nodes, {} connections",
        compilation.patch.nodes().len(),
        compilation.patch.connections().len()
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
