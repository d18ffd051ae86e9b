use anyhow::Result;
use phonescrub::{process, report, table};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Fixed dataset locations, resolved against the working directory.
const INPUT_CSV: &str = "smartphone_evolution.csv";
const OUTPUT_CSV: &str = "cleaned_dataset.csv";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load the raw dataset ─────────────────────────────────────
    let mut table = table::load_csv(INPUT_CSV)?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        "loaded {}",
        INPUT_CSV
    );

    // ─── 3) clean: years, incomplete rows, dead columns ──────────────
    let summary = process::clean_table(&mut table)?;
    info!(
        years_parsed = summary.years_parsed,
        years_missing = summary.years_missing,
        rows_dropped = summary.rows_dropped,
        columns_dropped = summary.columns_dropped,
        remaining = table.rows.len(),
        "cleaned table"
    );

    // ─── 4) persist, then show a sample ──────────────────────────────
    table::write_csv(&table, OUTPUT_CSV)?;
    info!("wrote {}", OUTPUT_CSV);
    report::print_sample(&table, report::SAMPLE_ROWS, report::MAX_DISPLAY_COLUMNS);

    info!("all done");
    Ok(())
}
