//! Revenue Chart Component
//!
//! 12-month revenue line chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Month labels for the x-axis, January through December
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Series color (accent green)
const SERIES_COLOR: &str = "#10B981";
const SERIES_FILL: &str = "rgba(16, 185, 129, 0.1)";

/// Revenue chart component
#[component]
pub fn RevenueChart(
    #[prop(into)]
    revenue: Signal<Vec<i64>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let values = revenue.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_revenue_chart(&canvas, &values);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 md:h-72 rounded-lg"
        />
    }
}

/// Draw the revenue series on canvas
fn draw_revenue_chart(canvas: &HtmlCanvasElement, values: &[i64]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Y scale: zero-based, padded above the max
    let y_max = y_axis_max(values);

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_amount(value), 5.0, y + 4.0);
    }

    if values.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No revenue data", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    let step_x = if values.len() > 1 {
        chart_width / (values.len() - 1) as f64
    } else {
        chart_width
    };
    let point_y = |v: i64| margin_top + ((y_max - v as f64) / y_max) * chart_height;

    // Filled area under the line
    ctx.set_fill_style(&SERIES_FILL.into());
    ctx.begin_path();
    ctx.move_to(margin_left, margin_top + chart_height);
    for (i, value) in values.iter().enumerate() {
        ctx.line_to(margin_left + i as f64 * step_x, point_y(*value));
    }
    ctx.line_to(margin_left + (values.len() - 1) as f64 * step_x, margin_top + chart_height);
    ctx.close_path();
    ctx.fill();

    // Line
    ctx.set_stroke_style(&SERIES_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, value) in values.iter().enumerate() {
        let x = margin_left + i as f64 * step_x;
        let y = point_y(*value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&SERIES_COLOR.into());
    for (i, value) in values.iter().enumerate() {
        let x = margin_left + i as f64 * step_x;
        let y = point_y(*value);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis month labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, _) in values.iter().enumerate() {
        let label = MONTH_LABELS.get(i).copied().unwrap_or("");
        let x = margin_left + i as f64 * step_x;
        let _ = ctx.fill_text(label, x - 10.0, height - 10.0);
    }
}

/// Padded y-axis ceiling; never zero so the scale stays drawable
fn y_axis_max(values: &[i64]) -> f64 {
    let max = values.iter().copied().max().unwrap_or(0);
    if max <= 0 {
        1.0
    } else {
        max as f64 * 1.1
    }
}

/// Compact axis label, e.g. 24500 -> "24.5k"
fn format_amount(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_axis_max_pads_above_peak() {
        let max = y_axis_max(&[10_000, 35_000, 2_000]);
        assert!((max - 38_500.0).abs() < 1e-6);
    }

    #[test]
    fn test_y_axis_max_handles_all_zero_series() {
        assert_eq!(y_axis_max(&[0; 12]), 1.0);
        assert_eq!(y_axis_max(&[]), 1.0);
    }

    #[test]
    fn test_axis_labels_compact_thousands() {
        assert_eq!(format_amount(24_500.0), "24.5k");
        assert_eq!(format_amount(500.0), "500");
        assert_eq!(format_amount(0.0), "0");
    }
}
