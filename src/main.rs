use anyhow::Result;
use useres::cli::{self, Commands};
use useres::commands::{self, GenerateContext, RunReport};
use useres::emit::{ColumnTableSerializer, FieldHashTable, TarPackager};
use useres::io::GameFilesTraceSource;
use useres::observability::init_tracing;

// Main orchestrator function
fn main() -> Result<()> {
    let args = cli::parse_args();
    init_tracing(args.verbosity);

    let config = cli::resolve_config(args.config.as_deref())?;
    cli::configure_thread_pool(config.jobs);
    tracing::debug!(
        workers = cli::get_worker_count(config.jobs),
        game_files = %config.game_files.display(),
        "Configuration resolved"
    );

    let packager = TarPackager::new();
    let report = match args.command {
        Commands::Generate => {
            let source = GameFilesTraceSource::new(&config.game_files);
            let serializer = ColumnTableSerializer::new(FieldHashTable::default());
            let ctx = GenerateContext::new(&config, &source, &serializer, &packager);
            commands::generate(&ctx)
        }
        Commands::Clear => commands::clear(&config, &packager),
    };

    print_report(&report);
    report.into_result()
}

// Side effect function for the per-level summary
fn print_report(report: &RunReport) {
    for outcome in &report.outcomes {
        println!("{outcome}");
    }
}
