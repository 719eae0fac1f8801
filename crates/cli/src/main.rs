//! fib-bench CLI
//!
//! Times the iterative computation of a Fibonacci number and prints the
//! answer with the elapsed milliseconds. With no arguments computes fib(50).

use clap::Parser;
use fib_bench::{BenchConfig, Outcome, Overrides, run};
use fib_core::ReportFormat;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fib-bench")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Time an iterative Fibonacci computation", long_about = None)]
struct Cli {
    /// Fibonacci index to compute (default 50)
    #[arg(short = 'n', long = "index", value_name = "N", allow_negative_numbers = true)]
    index: Option<i64>,

    /// Run the computation this many times inside the timed window
    #[arg(short, long, value_name = "COUNT")]
    repeat: Option<u32>,

    /// Report format: plain, bench or json
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Exit with failure unless the answer equals this value
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    expect: Option<i64>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            n: self.index,
            repeat: self.repeat,
            format: self.format,
            expect: self.expect,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fib_bench=warn,fib_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let file_overrides = match &cli.config {
        Some(path) => match Overrides::from_file(path) {
            Ok(o) => {
                info!(path = %path.display(), "loaded config");
                o
            }
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Overrides::default(),
    };

    let config = match BenchConfig::resolve(cli.overrides().over(file_overrides)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    match run(&config, &mut stdout.lock()) {
        Ok(Outcome::Ok { .. }) => {}
        Ok(Outcome::Mismatch { expected, got }) => {
            eprintln!("ERROR: expected {}, got {}", expected, got);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
