use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use itertools::Itertools;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

// Use mimalloc for better performance. Large module sets allocate one short
// string per symbol-table entry, so the run is allocation-heavy.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Reconstruct the dependency graph between compiled modules from the
/// symbols they export and import, and report duplicate definitions and
/// unresolved references.
///
/// Reads each artifact's symbol table with `nm` (override with `$NM`),
/// prints one `path: dependencies` line per artifact on stdout, and writes
/// CONFLICT/WARNING diagnostics to stderr.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Compiled artifacts (shared objects or object files) to analyze
    #[arg(required = true, value_name = "ARTIFACT")]
    artifacts: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging. Output goes to stderr so the
    // dependency listing on stdout remains clean for piping. Default to
    // warn, allowlist our crates.
    const CRATES: &[&str] = &["moddep", "moddep_extract", "moddep_resolve"];
    let level = cli.verbose.tracing_level_filter();
    let allowlist = CRATES.iter().map(|c| format!("{c}={level}")).join(",");
    let filter = EnvFilter::new(format!("warn,{allowlist}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
        .init();

    // Lock the streams once up front rather than on each write call. The
    // handles must outlive the locks, so we bind them here first.
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    moddep_resolve::run(
        &cli.artifacts,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}
