use std::io::Write;

use obstacle_clearance::{write_report, Analyzer, AnalyzerConfig, REFERENCE_OBSTACLES};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AnalyzerConfig::default();
    log::info!(
        "Analysing {} obstacles (scale {:?}, boundary {})",
        REFERENCE_OBSTACLES.len(),
        config.scale,
        config.boundary.size
    );
    let analyzer = Analyzer::new(&REFERENCE_OBSTACLES, config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &analyzer)?;
    out.flush()?;
    Ok(())
}
