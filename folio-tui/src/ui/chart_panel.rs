//! Always-visible line chart of the processed dataset.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use folio_core::render::{self, ChartSpec};

use crate::app::{AppState, LoadState};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.load {
        LoadState::Loading => render_message(f, area, "Loading dataset…", theme::muted()),
        LoadState::Failed(error) => {
            render_message(f, area, &format!("Load failed: {error}"), theme::negative())
        }
        LoadState::Ready(dataset) if dataset.is_empty() => {
            render_message(f, area, "Dataset has no points.", theme::muted())
        }
        LoadState::Ready(dataset) => {
            let points = app.view.apply(dataset);
            let spec = render::build(dataset, &points, &app.view);
            render_chart(f, area, &spec);
        }
    }
}

fn render_message(f: &mut Frame, area: Rect, message: &str, style: Style) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), style)),
        Line::from(""),
        Line::from(Span::styled(
            "r reloads the dataset · 3 shows all keys.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).centered(), area);
}

fn render_chart(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let [x_min, x_max] = spec.x_bounds;
    let [y_min, y_max] = spec.y_bounds;

    // Emulated chrome: dotted horizontal grid lines and the baseline. These
    // point buffers must outlive the datasets borrowing them.
    let grid_lines: Vec<Vec<(f64, f64)>> = if spec.show_grid {
        [0.25, 0.5, 0.75]
            .iter()
            .map(|frac| sample_line(y_min + (y_max - y_min) * frac, x_min, x_max))
            .collect()
    } else {
        Vec::new()
    };
    let baseline_points = spec.baseline.map(|y| sample_line(y, x_min, x_max));

    let mut datasets: Vec<Dataset> = Vec::new();
    for line in &grid_lines {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .style(Style::default().fg(theme::GRID))
                .data(line),
        );
    }
    if let Some(points) = &baseline_points {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .style(theme::secondary())
                .data(points),
        );
    }
    for track in &spec.tracks {
        let color = theme::series_color(track.color_index);
        for (i, segment) in track.segments.iter().enumerate() {
            let mut dataset = Dataset::default()
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(color))
                .graph_type(GraphType::Line)
                .data(segment);
            // Name only the first segment so the legend lists each series once.
            if i == 0 {
                dataset = dataset.name(track.name.clone());
            }
            datasets.push(dataset);
        }
    }

    let x_labels: Vec<Span> = spec
        .x_labels
        .iter()
        .map(|label| Span::styled(label.clone(), theme::muted()))
        .collect();
    let y_labels: Vec<Span> = spec
        .y_labels
        .iter()
        .map(|label| Span::styled(label.clone(), theme::muted()))
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds(spec.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds(spec.y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// Sampled horizontal line at `y` — dense enough that a Dot marker reads as
/// a dotted rule.
fn sample_line(y: f64, x_min: f64, x_max: f64) -> Vec<(f64, f64)> {
    const SAMPLES: usize = 64;
    let step = (x_max - x_min) / SAMPLES as f64;
    (0..=SAMPLES)
        .map(|i| (x_min + step * i as f64, y))
        .collect()
}
