//! SVG output through plotters.
//!
//! Layout, top to bottom: one panel per subplot, then a footer holding the x axis
//! title and the legend. The y axis title runs down a strip on the left.

use hz_core::num::HzFloat;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use super::{FigureRenderer, RenderError};
use crate::figure::{Figure, Subplot};
use crate::palette::Color as PaletteColor;

const FONT: &str = "sans-serif";
const AXIS_COLOR: RGBColor = RGBColor(88, 91, 112);
const LEFT_STRIP: u32 = 80;
const FOOTER: u32 = 90;
const TITLE_HEIGHT: u32 = 18;
const SWATCH: i32 = 14;

fn backend_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

fn rgb(color: PaletteColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Widen an empty or undefined interval so plotters gets a usable coordinate range.
fn usable_range(lo: f64, hi: f64) -> (f64, f64) {
    match (lo.is_finite(), hi.is_finite()) {
        (true, true) if hi > lo => (lo, hi),
        (true, _) => (lo - 0.5, lo + 0.5),
        _ => (0.0, 1.0),
    }
}

/// Draws a [`Figure`] as an SVG document.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    dpi: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { dpi: 100 }
    }
}

impl SvgRenderer {
    /// Renderer at 100 DPI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolution used to convert the figure size to pixels.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi.max(1);
        self
    }
}

impl<T: HzFloat> FigureRenderer<T> for SvgRenderer {
    type Output = String;

    fn render(&self, figure: &Figure<T>) -> Result<String, RenderError> {
        let (width, height) = figure.size.pixels(self.dpi);
        let width = width.max(LEFT_STRIP + 100);
        let height = height.max(FOOTER + 100);
        let mut out = String::new();

        {
            let root = SVGBackend::with_string(&mut out, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(backend_err)?;

            let (_, rest) = root.split_horizontally(LEFT_STRIP);
            let (body, footer) = rest.split_vertically(height - FOOTER);

            let x_range = usable_range(
                figure.x_range.0.to_f64_lossy(),
                figure.x_range.1.to_f64_lossy(),
            );
            let y_range = usable_range(
                figure.y_range.0.to_f64_lossy(),
                figure.y_range.1.to_f64_lossy(),
            );

            if !figure.is_empty() {
                let panels = body.split_evenly((figure.len(), 1));
                for (panel, subplot) in panels.iter().zip(&figure.subplots) {
                    draw_subplot(&root, panel, subplot, x_range, y_range)?;
                }
            }

            if let Some(label) = &figure.x_label {
                let style = TextStyle::from((FONT, 16).into_font())
                    .pos(Pos::new(HPos::Center, VPos::Top));
                let x = (LEFT_STRIP + (width - LEFT_STRIP) / 2) as i32;
                let y = (height - FOOTER) as i32 + 22;
                root.draw(&Text::new(label.clone(), (x, y), style))
                    .map_err(backend_err)?;
            }
            if let Some(label) = &figure.y_label {
                let style = TextStyle::from((FONT, 16).into_font().transform(FontTransform::Rotate270))
                    .pos(Pos::new(HPos::Center, VPos::Top));
                let y = ((height - FOOTER) / 2) as i32;
                root.draw(&Text::new(label.clone(), (8, y), style))
                    .map_err(backend_err)?;
            }

            draw_legend(&footer, figure)?;
            root.present().map_err(backend_err)?;
        }

        Ok(out)
    }
}

fn draw_subplot<T: HzFloat>(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    panel: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    subplot: &Subplot<T>,
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
) -> Result<(), RenderError> {
    let mut chart = ChartBuilder::on(panel)
        .margin(4)
        .margin_top(TITLE_HEIGHT)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(backend_err)?;

    for layer in &subplot.layers {
        if layer.is_blank() {
            continue;
        }
        let points = layer
            .points()
            .map(|(x, y)| (x.to_f64_lossy(), y.to_f64_lossy()));
        chart
            .draw_series(AreaSeries::new(points, 0.0, rgb(layer.color).filled()))
            .map_err(backend_err)?;
    }

    chart
        .plotting_area()
        .draw(&Rectangle::new([(x0, y0), (x1, y1)], AXIS_COLOR.stroke_width(1)))
        .map_err(backend_err)?;

    let title = TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Left, VPos::Top));
    panel
        .draw(&Text::new(subplot.title.clone(), (4, 2), title))
        .map_err(backend_err)?;

    let y_tick = TextStyle::from((FONT, 11).into_font()).pos(Pos::new(HPos::Right, VPos::Center));
    for tick in &subplot.y_ticks {
        let (px, py) = chart.backend_coord(&(x0, tick.position.to_f64_lossy()));
        root.draw(&Text::new(tick.label.clone(), (px - 6, py), y_tick.clone()))
            .map_err(backend_err)?;
    }

    let x_tick = TextStyle::from((FONT, 11).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    for tick in &subplot.x_ticks {
        let (px, py) = chart.backend_coord(&(tick.position.to_f64_lossy(), y0));
        root.draw(&Text::new(tick.label.clone(), (px, py + 4), x_tick.clone()))
            .map_err(backend_err)?;
    }

    Ok(())
}

fn draw_legend<T: HzFloat>(
    footer: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    figure: &Figure<T>,
) -> Result<(), RenderError> {
    if figure.legend.is_empty() {
        return Ok(());
    }
    let (width, _) = footer.dim_in_pixel();
    let slot = (width as usize / figure.legend.len()).max(1) as i32;
    let top = FOOTER as i32 - SWATCH - 16;
    let style = TextStyle::from((FONT, 12).into_font()).pos(Pos::new(HPos::Left, VPos::Center));

    for (i, entry) in figure.legend.iter().enumerate() {
        let left = i as i32 * slot + 4;
        footer
            .draw(&Rectangle::new(
                [(left, top), (left + SWATCH, top + SWATCH)],
                rgb(entry.color).filled(),
            ))
            .map_err(backend_err)?;
        footer
            .draw(&Text::new(
                entry.label.clone(),
                (left + SWATCH + 4, top + SWATCH / 2),
                style.clone(),
            ))
            .map_err(backend_err)?;
    }
    Ok(())
}
