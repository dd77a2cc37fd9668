//! Generate static files

use crate::error::Result;
use crate::generator::{GenerateReport, Generator};
use crate::Site;

/// Generate the site; with `force` every post page is rendered again
pub fn run(site: &Site, force: bool) -> Result<GenerateReport> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site)?;
    let report = generator.generate(force)?;

    tracing::info!(
        "Rendered {} posts, skipped {} already generated (force={})",
        report.rendered,
        report.skipped,
        force
    );
    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}
