mod error;
mod fonts;
pub mod model;
pub mod pdf;
pub mod report;
pub mod service;

pub use error::Error;
pub use pdf::RenderOptions;
pub use pdf::layout::{Cursor, DrawSink, LayoutPolicy, TextStyle};

use std::path::Path;
use std::time::Instant;

/// Render a generated report into PDF bytes with the default layout policy.
pub fn render_report(raw: &str) -> Result<Vec<u8>, Error> {
    pdf::render(raw, &RenderOptions::default())
}

pub fn render_report_to_file(raw: &str, output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let bytes = pdf::render(raw, &RenderOptions::default())?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
