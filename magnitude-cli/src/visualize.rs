use std::path::Path;

use magnitude::{FittedCurve, GrowthForm, Sample};
use plotters::{coord::types::RangedCoordf64, prelude::*};

use crate::Outcome;

const SAMPLE_COLOR: RGBColor = RGBColor(0x58, 0x50, 0x8d);
const BEST_COLOR: RGBColor = RGBColor(0xff, 0x63, 0x61);
const CURVE_COLORS: [RGBColor; 5] = [
    RGBColor(0x00, 0x3f, 0x5c),
    RGBColor(0xbc, 0x50, 0x90),
    RGBColor(0xff, 0xa6, 0x00),
    RGBColor(0x2f, 0x4b, 0x7c),
    RGBColor(0x66, 0x51, 0x91),
];

const LABEL_STYLE: (&str, i32) = ("sans-serif", 30);

pub fn save_png(chart_name: &str, outcome: &Outcome, output_path: &Path) -> anyhow::Result<()> {
    let bounds = Bounds::new(outcome);

    let width = 800;
    let height = 800;
    let dpi_scale = 2;
    let root = BitMapBackend::new(output_path, (width * dpi_scale, height * dpi_scale))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(120)
        .caption(chart_name, ("sans-serif", 50))
        .build_cartesian_2d(bounds.min_x..bounds.max_x, bounds.min_y..bounds.max_y)?;

    draw_axes(&mut chart)?;

    let mut other_colors = CURVE_COLORS.iter().cycle();
    for (form, curve) in outcome.fits.iter() {
        if form == outcome.classification.best {
            continue;
        }
        let color = other_colors.next().copied().unwrap_or(BLACK);
        draw_curve(&mut chart, &outcome.samples, form, curve, color, 2)?;
    }
    // The best curve goes last, so nothing is drawn over it.
    let best = outcome.classification.best;
    if let Some(curve) = outcome.fits.get(best) {
        draw_curve(&mut chart, &outcome.samples, best, curve, BEST_COLOR, 5)?;
    }

    draw_samples(&mut chart, &outcome.samples)?;

    chart
        .configure_series_labels()
        .label_font(LABEL_STYLE)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    println!("Plot saved to {}", output_path.display());
    Ok(())
}

/// Span of the chart area
struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bounds {
    fn new(outcome: &Outcome) -> Self {
        let xs: Vec<f64> = outcome.samples.iter().map(|s| s.size as f64).collect();
        let mut ys: Vec<f64> = outcome.samples.iter().map(|s| s.seconds).collect();
        for (_, curve) in outcome.fits.iter() {
            ys.extend(curve.values.values().iter().copied().filter(|y| y.is_finite()));
        }
        let min_x = xs.iter().copied().reduce(f64::min).unwrap_or(0.0);
        let max_x = xs.iter().copied().reduce(f64::max).unwrap_or(1.0);
        let min_y = ys.iter().copied().reduce(f64::min).unwrap_or(0.0).min(0.0);
        let max_y = ys.iter().copied().reduce(f64::max).unwrap_or(1.0);
        // Leave a margin so points at the edges stay visible.
        let pad_x = ((max_x - min_x) * 0.05).max(1.0);
        let pad_y = ((max_y - min_y) * 0.05).max(f64::MIN_POSITIVE);
        Self {
            min_x: min_x - pad_x,
            max_x: max_x + pad_x,
            min_y: min_y - pad_y,
            max_y: max_y + pad_y,
        }
    }
}

fn draw_axes<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
) -> anyhow::Result<()>
where
    <DB as plotters::prelude::DrawingBackend>::ErrorType: 'static,
{
    chart
        .configure_mesh()
        .x_desc("Job size")
        .y_desc("Seconds")
        .y_label_formatter(&|y| format!("{y:.1e}"))
        .label_style(LABEL_STYLE)
        .axis_desc_style(LABEL_STYLE)
        .draw()?;
    Ok(())
}

fn draw_samples<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    samples: &[Sample],
) -> anyhow::Result<()>
where
    <DB as plotters::prelude::DrawingBackend>::ErrorType: 'static,
{
    chart
        .draw_series(PointSeries::of_element(
            samples.iter().map(|s| (s.size as f64, s.seconds)),
            5,
            &SAMPLE_COLOR,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
        ))?
        .label("Samples")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, SAMPLE_COLOR.filled()));
    Ok(())
}

fn draw_curve<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    samples: &[Sample],
    form: GrowthForm,
    curve: &FittedCurve,
    color: RGBColor,
    stroke_width: u32,
) -> anyhow::Result<()>
where
    <DB as plotters::prelude::DrawingBackend>::ErrorType: 'static,
{
    let points = samples
        .iter()
        .zip(curve.values.values())
        .map(|(s, &y)| (s.size as f64, y));
    chart
        .draw_series(LineSeries::new(points, color.stroke_width(stroke_width)))?
        .label(format!("{} {}", form.title(), form.big_o()))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(stroke_width))
        });
    Ok(())
}
