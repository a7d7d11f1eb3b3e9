//! Animated-GIF rendering of density frames.
//!
//! Frames are encoded into `<output>.part` and only moved to `<output>` once
//! the sink is finished, so a failed run never leaves a truncated GIF behind.

use std::{
    ffi::OsString,
    fs,
    path::{ Path, PathBuf },
};
use anyhow::Context;
use plotters::{ coord::Shift, prelude::* };
use tracing::{ debug, info, warn };
use boxwave::{
    animate::FrameSink,
    grid::SpatialGrid,
    wave::DensityFrame,
};

/// Final and in-progress locations of an output file.
#[derive(Clone, Debug)]
pub struct GifTarget {
    output: PathBuf,
    partial: PathBuf,
}

impl GifTarget {
    /// Create a new target, placing the in-progress file next to `output`.
    pub fn new<P>(output: P) -> Self
    where P: Into<PathBuf>
    {
        let output: PathBuf = output.into();
        let mut partial: OsString = output.clone().into_os_string();
        partial.push(".part");
        Self { output, partial: partial.into() }
    }

    /// Get the final output path.
    pub fn output(&self) -> &Path { &self.output }

    /// Get the in-progress output path.
    pub fn partial(&self) -> &Path { &self.partial }
}

/// Image geometry and fixed axis limits.
#[derive(Copy, Clone, Debug)]
pub struct PlotStyle {
    /// Image size in pixels.
    pub size: (u32, u32),
    /// Delay between frames in milliseconds.
    pub frame_delay: u32,
    /// Upper limit of the position axis (the box length).
    pub x_max: f64,
    /// Upper limit of the density axis.
    pub y_max: f64,
}

impl PlotStyle {
    /// 800×600 at 20 frames per second.
    pub fn new(x_max: f64, y_max: f64) -> Self {
        Self { size: (800, 600), frame_delay: 50, x_max, y_max }
    }

    /// Anchor of the time label in data coordinates: 5% in from the left and
    /// 90% of the way up the axes, independent of image size.
    pub fn label_anchor(&self) -> (f64, f64) {
        (0.05 * self.x_max, 0.9 * self.y_max)
    }
}

/// [`FrameSink`] drawing each frame as a line plot of `|Ψ(x, t)|²`.
pub struct GifRenderer<'a> {
    target: &'a GifTarget,
    style: PlotStyle,
    root: Option<DrawingArea<BitMapBackend<'a>, Shift>>,
    frames: usize,
    done: bool,
}

impl<'a> GifRenderer<'a> {
    /// Open the in-progress file for `target` and prepare to draw.
    pub fn new(target: &'a GifTarget, style: PlotStyle)
        -> anyhow::Result<Self>
    {
        let root
            = BitMapBackend::gif(target.partial(), style.size, style.frame_delay)
            .with_context(|| {
                format!("couldn't create {}", target.partial().display())
            })?
            .into_drawing_area();
        debug!(path = %target.partial().display(), "opened gif");
        Ok(Self { target, style, root: Some(root), frames: 0, done: false })
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize { self.frames }

    fn draw(
        root: &DrawingArea<BitMapBackend<'a>, Shift>,
        style: &PlotStyle,
        grid: &SpatialGrid,
        frame: &DensityFrame,
    ) -> anyhow::Result<()>
    {
        root.fill(&WHITE)?;
        let mut chart
            = ChartBuilder::on(root)
            .caption(
                "Time Evolution of the Probability Density",
                ("sans-serif", 24).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(80)
            .build_cartesian_2d(0.0..style.x_max, 0.0..style.y_max)?;
        chart.configure_mesh()
            .x_desc("x (m)")
            .y_desc("|Ψ(x,t)|²")
            .x_label_formatter(&|x| format!("{:.1e}", x))
            .y_label_formatter(&|y| format!("{:.1e}", y))
            .draw()?;
        chart.draw_series(LineSeries::new(
            grid.x().iter().zip(frame.values()).map(|(&x, &r)| (x, r)),
            BLUE.stroke_width(2),
        ))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("t = {:.2e} s", frame.time()),
            style.label_anchor(),
            ("sans-serif", 20).into_font(),
        )))?;
        root.present()?;
        Ok(())
    }
}

impl<'a> FrameSink for GifRenderer<'a> {
    type Error = anyhow::Error;

    fn frame(&mut self, grid: &SpatialGrid, frame: &DensityFrame)
        -> anyhow::Result<()>
    {
        anyhow::ensure!(
            frame.len() == grid.len(),
            "frame {} has {} samples for a grid of {}",
            self.frames, frame.len(), grid.len()
        );
        let root = self.root.as_ref().context("renderer already finished")?;
        Self::draw(root, &self.style, grid, frame)
            .with_context(|| format!("failed to draw frame {}", self.frames))?;
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        // dropping the backend writes the gif trailer and closes the file
        drop(self.root.take());
        fs::rename(self.target.partial(), self.target.output())
            .with_context(|| {
                format!("couldn't move output to {}", self.target.output().display())
            })?;
        self.done = true;
        info!(
            frames = self.frames,
            path = %self.target.output().display(),
            "wrote animation"
        );
        Ok(())
    }
}

impl Drop for GifRenderer<'_> {
    fn drop(&mut self) {
        if self.done { return; }
        drop(self.root.take());
        if let Err(err) = fs::remove_file(self.target.partial()) {
            warn!(
                path = %self.target.partial().display(),
                "couldn't remove partial output: {err}"
            );
        }
    }
}
