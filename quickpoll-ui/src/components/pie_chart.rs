use leptos::prelude::*;

use quickpoll_app::domain::Tally;

/// Fixed palette, cycled over the segments in label order.
const PALETTE: [&str; 6] = [
    "#89CFF0", "#FFEC8B", "#FFB6C1", "#4BC0C0", "#9966FF", "#FF9F40",
];

const CX: f64 = 100.0;
const CY: f64 = 100.0;
const RADIUS: f64 = 90.0;

fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Point on the circle at `fraction` of a full turn, starting at 12 o'clock.
fn polar(fraction: f64) -> (f64, f64) {
    let angle = std::f64::consts::TAU * fraction - std::f64::consts::FRAC_PI_2;
    (CX + RADIUS * angle.cos(), CY + RADIUS * angle.sin())
}

/// SVG path for the slice covering `[start, end)` as fractions of the circle.
fn slice_path(start: f64, end: f64) -> String {
    let (x1, y1) = polar(start);
    let (x2, y2) = polar(end);
    let large_arc = i32::from(end - start > 0.5);
    format!(
        "M {CX} {CY} L {x1:.3} {y1:.3} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders the pie as SVG markup. A single segment is a full circle; every
/// slice carries a `<title>` tooltip with its label, count, and percentage,
/// recomputed from the tally on each render.
fn render_svg(tally: &Tally) -> String {
    let total = tally.total();
    let segments = tally.segments();

    let mut body = String::new();
    if segments.len() == 1 {
        let segment = &segments[0];
        body.push_str(&format!(
            r##"<circle cx="{CX}" cy="{CY}" r="{RADIUS}" fill="{}" stroke="#fff" stroke-width="2"><title>{}</title></circle>"##,
            color_for(0),
            escape(&segment.tooltip()),
        ));
    } else {
        let mut start = 0.0_f64;
        for (index, segment) in segments.iter().enumerate() {
            let share = if total == 0 {
                0.0
            } else {
                segment.count as f64 / total as f64
            };
            let end = (start + share).min(1.0);
            body.push_str(&format!(
                r##"<path d="{}" fill="{}" stroke="#fff" stroke-width="2"><title>{}</title></path>"##,
                slice_path(start, end),
                color_for(index),
                escape(&segment.tooltip()),
            ));
            start = end;
        }
    }

    format!(
        r#"<svg class="pie-chart__svg" viewBox="0 0 200 200" role="img" aria-label="Vote share by option">{body}</svg>"#
    )
}

#[component]
pub fn PieChart(tally: Tally) -> impl IntoView {
    let svg = render_svg(&tally);
    let legend = tally
        .segments()
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            view! {
                <li class="pie-chart__legend-item">
                    <span
                        class="pie-chart__swatch"
                        style=format!("background-color: {}", color_for(index))
                    ></span>
                    <span>{segment.label}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <figure class="pie-chart">
            <div class="pie-chart__canvas" inner_html=svg></div>
            <ul class="pie-chart__legend">{legend}</ul>
        </figure>
    }
}
