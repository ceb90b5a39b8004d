use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use testkeys::{DEFAULT_PACKAGE, LoadPolicy, Options};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TEST_KEYS_LOG";

/// Generates a Rust module embedding freshly generated private keys for tests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output file (defaults to stdout)
    #[arg(short, long, env = "TEST_KEYS_OUTPUT")]
    output: Option<PathBuf>,

    /// Name of the generated module
    #[arg(short, long, env = "TEST_KEYS_PACKAGE", default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Panic at load time if an embedded key fails to decode, instead of
    /// leaving it as `None`
    #[arg(long)]
    strict: bool,

    /// Worker threads used to generate keys
    #[arg(short, long, env = "TEST_KEYS_JOBS", default_value_t = 1)]
    jobs: usize,

    /// Log each generated key to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Key specs of the form <identifier>:<algorithm>:<parameter>, e.g. signer:rsa:2048
    #[arg(required = true)]
    specs: Vec<String>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            package: self.package.clone(),
            policy: if self.strict {
                LoadPolicy::Strict
            } else {
                LoadPolicy::Lenient
            },
            jobs: self.jobs,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let source = testkeys::generate_source(&cli.specs, &cli.options())?;

    // Nothing is written unless every key was generated and rendered.
    match &cli.output {
        Some(path) => {
            fs::write(path, &source)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), keys = cli.specs.len(), "wrote key module");
        }
        None => io::stdout()
            .lock()
            .write_all(source.as_bytes())
            .context("writing to stdout")?,
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}
