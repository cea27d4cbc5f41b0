//! Analytics section: the two dashboard charts drawn as inline SVG.

use leptos::prelude::*;

use crate::state::charts::{ChartKind, ChartSpec, DASHBOARD_CHARTS, color_at};
use crate::util::chart_geometry::{Plot, Point, area_path, axis_max, category_x, doughnut_segments, line_path, scale_points};

const LINE_PLOT: Plot = Plot { width: 600.0, height: 300.0, padding: 40.0 };
const DOUGHNUT_SIZE: f64 = 300.0;
const DOUGHNUT_OUTER: f64 = 130.0;
const DOUGHNUT_INNER: f64 = 70.0;
const GRID_LINES: u32 = 5;

fn px(v: f64) -> String {
    format!("{v:.2}")
}

#[component]
pub fn ChartsPanel() -> impl IntoView {
    view! {
        <section id="analytics" class="section analytics">
            <h2 class="section__title">"Analytics"</h2>
            <div class="charts-grid">
                {DASHBOARD_CHARTS.iter().map(|spec| view! { <ChartCard spec=*spec/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ChartCard(spec: ChartSpec) -> impl IntoView {
    let legend = spec
        .legend()
        .into_iter()
        .map(|(label, color)| {
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background:{color}")></span>
                    {label}
                </li>
            }
        })
        .collect::<Vec<_>>();
    let legend = view! { <ul class="chart-legend">{legend}</ul> };
    let chart = match spec.kind {
        ChartKind::Line => view! { <LineChart spec=spec/> }.into_any(),
        ChartKind::Doughnut => view! { <DoughnutChart spec=spec/> }.into_any(),
    };

    view! {
        <div class="chart-container">
            <h3 class="chart-title">{spec.title}</h3>
            {spec.legend_top.then_some(legend)}
            <div id=spec.id class="chart-canvas">{chart}</div>
        </div>
    }
}

#[component]
fn LineChart(spec: ChartSpec) -> impl IntoView {
    let series = spec.series;
    let points = scale_points(&LINE_PLOT, series.data);
    let max = axis_max(series.data);
    let stroke = color_at(series.border_colors, 0);
    let fill = color_at(series.background_colors, 0);
    let area = series.fill.then(|| {
        view! { <path class="chart-area" d=area_path(&points, series.tension, LINE_PLOT.bottom()) fill=fill stroke="none"></path> }
    });

    let grid = (0..=GRID_LINES)
        .map(|step| {
            let ratio = f64::from(step) / f64::from(GRID_LINES);
            let y = LINE_PLOT.bottom() - ratio * LINE_PLOT.inner_height();
            view! {
                <g class="chart-grid">
                    <line x1=px(LINE_PLOT.padding) x2=px(LINE_PLOT.width - LINE_PLOT.padding) y1=px(y) y2=px(y)></line>
                    <text x=px(LINE_PLOT.padding - 8.0) y=px(y + 4.0) text-anchor="end">{format!("{}", max * ratio)}</text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let labels = spec
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = category_x(&LINE_PLOT, i, spec.labels.len());
            view! { <text class="chart-label" x=px(x) y=px(LINE_PLOT.height - 12.0) text-anchor="middle">{*label}</text> }
        })
        .collect::<Vec<_>>();

    let markers = points
        .iter()
        .map(|p| view! { <circle cx=px(p.x) cy=px(p.y) r="4" fill=stroke></circle> })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="chart chart--line"
            viewBox=format!("0 0 {} {}", LINE_PLOT.width, LINE_PLOT.height)
            role="img"
            aria-label=spec.title
        >
            {grid}
            {area}
            <path
                class="chart-line"
                d=line_path(&points, series.tension)
                fill="none"
                stroke=stroke
                stroke-width=px(series.border_width)
            ></path>
            {markers}
            {labels}
        </svg>
    }
}

#[component]
fn DoughnutChart(spec: ChartSpec) -> impl IntoView {
    let series = spec.series;
    let center = Point { x: DOUGHNUT_SIZE / 2.0, y: DOUGHNUT_SIZE / 2.0 };
    let segments = doughnut_segments(series.data, center, DOUGHNUT_OUTER, DOUGHNUT_INNER)
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            let label = spec.labels.get(i).copied().unwrap_or_default();
            view! {
                <path
                    class="chart-segment"
                    d=segment.path
                    fill=color_at(series.background_colors, i)
                    stroke=color_at(series.border_colors, i)
                    stroke-width=px(series.border_width)
                    aria-label=label
                ></path>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="chart chart--doughnut"
            viewBox=format!("0 0 {DOUGHNUT_SIZE} {DOUGHNUT_SIZE}")
            role="img"
            aria-label=spec.title
        >
            {segments}
        </svg>
    }
}
