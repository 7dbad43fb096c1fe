//! PNG rendering surface backed by plotters.
//!
//! Each created chart is written to its own file under the output directory;
//! destroying the handle removes the file.

use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

use crate::error::RenderError;

use super::spec::ChartSpec;
use super::surface::{RenderHandle, RenderSurface};

const MIN_POINTS: usize = 2;
const LINE_RGB: RGBColor = RGBColor(76, 175, 80);

pub struct PngSurface {
    output_dir: PathBuf,
    width: u32,
    height: u32,
    next_id: AtomicU64,
}

impl PngSurface {
    pub fn new(output_dir: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            width,
            height,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn file_name(spec: &ChartSpec, id: u64) -> String {
        let slug: String = spec
            .symbol
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        format!("{}_{}_{}.png", slug, spec.timeframe, id)
    }
}

impl RenderSurface for PngSurface {
    fn name(&self) -> &'static str {
        "png"
    }

    fn create(&self, spec: &ChartSpec) -> Result<Box<dyn RenderHandle>, RenderError> {
        let values = spec.values();
        if values.len() < MIN_POINTS {
            return Err(RenderError::NotEnoughPoints { count: values.len(), required: MIN_POINTS });
        }

        fs::create_dir_all(&self.output_dir)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let path = self.output_dir.join(Self::file_name(spec, id));

        draw_line_chart(spec, &path, (self.width, self.height))?;
        debug!("🖼️ [PNG] Wrote {}", path.display());

        Ok(Box::new(PngHandle { id, path }))
    }
}

pub struct PngHandle {
    id: u64,
    path: PathBuf,
}

impl RenderHandle for PngHandle {
    fn id(&self) -> u64 {
        self.id
    }

    fn artifact(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn destroy(self: Box<Self>) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("⚠️ [PNG] Failed to remove {}: {}", self.path.display(), e);
        }
    }
}

fn draw_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}

fn draw_line_chart(spec: &ChartSpec, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
    let values = spec.values();
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

    // Flat series still need a non-empty y range
    let padding = if max > min { (max - min) * 0.1 } else { max.abs().max(1.0) * 0.05 };
    let y_range = (min - padding).max(0.0)..(max + padding);
    let x_max = (values.len() - 1) as f64;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..x_max, y_range.clone())
        .map_err(draw_err)?;

    let x_label = |x: &f64| {
        let index = x.round().max(0.0) as usize;
        spec.labels.get(index).cloned().unwrap_or_default()
    };
    let y_label = |y: &f64| spec.axis_label(*y);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(spec.options.max_x_ticks)
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .draw()
        .map_err(draw_err)?;

    let points = values.iter().enumerate().map(|(i, v)| (i as f64, *v));
    chart
        .draw_series(
            AreaSeries::new(points, y_range.start, &LINE_RGB.mix(0.1))
                .border_style(LINE_RGB.stroke_width(spec.datasets[0].style.border_width)),
        )
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::types::{AssetRef, PriceSeries, Timeframe};

    fn spec(points: usize) -> ChartSpec {
        let series: PriceSeries = (0..points).map(|i| (format!("1/{}/2025", i + 1), 100.0 + i as f64)).collect();
        ChartSpec::price_line(&AssetRef::crypto("bitcoin"), &Timeframe::SevenDays, &series)
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("price_charts_png_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_png_created_and_destroyed() {
        let dir = scratch_dir("lifecycle");
        let surface = PngSurface::new(&dir, 320, 200);

        let handle = surface.create(&spec(5)).unwrap();
        let path = handle.artifact().unwrap().to_path_buf();
        assert!(path.exists());
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("bitcoin_7d_"));

        handle.destroy();
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_png_ids_are_unique() {
        let dir = scratch_dir("ids");
        let surface = PngSurface::new(&dir, 320, 200);
        let first = surface.create(&spec(3)).unwrap();
        let second = surface.create(&spec(3)).unwrap();
        assert_ne!(first.id(), second.id());
        assert_ne!(first.artifact(), second.artifact());
        first.destroy();
        second.destroy();
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_png_draws_caption_and_labels_for_long_series() {
        let dir = scratch_dir("labels");
        let surface = PngSurface::new(&dir, 900, 450);
        let series: PriceSeries = (0..60)
            .map(|i| (format!("{}/{}/2025", i % 12 + 1, i % 28 + 1), 0.00001234 + i as f64 * 1000.0))
            .collect();
        let spec = ChartSpec::price_line(&AssetRef::equity("AAPL"), &Timeframe::ThirtyDays, &series);

        let handle = surface.create(&spec).unwrap();
        let path = handle.artifact().unwrap().to_path_buf();
        assert!(fs::metadata(&path).unwrap().len() > 0);

        handle.destroy();
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_png_rejects_single_point() {
        let surface = PngSurface::new(scratch_dir("single"), 320, 200);
        let result = surface.create(&spec(1));
        assert!(matches!(result, Err(RenderError::NotEnoughPoints { count: 1, required: 2 })));
    }
}
