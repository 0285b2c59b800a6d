//! SVG geometry for the two chart shapes.
//!
//! Everything here is deterministic string building: fixed precision, fixed
//! ordering, no randomized styling. The rasterizer turns the result into
//! PNG bytes.

use cr_common::GapAnalysisEntry;
use std::f64::consts::PI;
use std::fmt::Write;

/// Axis maximum shared by both charts.
const AXIS_MAX: f64 = 10.0;

/// Radar grid tick step.
const RADAR_TICK_STEP: usize = 2;

/// Series color cycle: cyan profile first, then the required-level blue.
const SERIES_COLORS: [(u8, u8, u8); 4] = [
    (0, 188, 212),
    (0, 102, 204),
    (16, 185, 129),
    (245, 158, 11),
];

const FONT_FAMILY: &str = "'Segoe UI', Arial, sans-serif";

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn clamp(v: f64) -> f64 {
    v.clamp(0.0, AXIS_MAX)
}

/// Build the radar profile SVG.
///
/// The axis count is the shorter of the label list and the shortest series,
/// so mismatched inputs render instead of failing.
pub fn radar_svg(labels: &[String], series: &[Vec<f64>], size: u32) -> String {
    let axis_count = series
        .iter()
        .map(Vec::len)
        .min()
        .unwrap_or(0)
        .min(labels.len());
    debug_assert!(axis_count > 0, "caller supplies placeholder data");

    let s = f64::from(size);
    let center = s / 2.0;
    let radius = s * 0.33;

    let angle_of = |i: usize| -PI / 2.0 + (i as f64) * 2.0 * PI / (axis_count as f64);
    let point_at = |i: usize, r: f64| {
        let a = angle_of(i);
        (center + r * a.cos(), center + r * a.sin())
    };

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );

    // Grid rings.
    let mut tick = RADAR_TICK_STEP;
    while tick as f64 <= AXIS_MAX {
        let r = radius * tick as f64 / AXIS_MAX;
        let ring: Vec<String> = (0..axis_count)
            .map(|i| {
                let (x, y) = point_at(i, r);
                format!("{x:.1},{y:.1}")
            })
            .collect();
        let _ = write!(
            out,
            r#"<polygon points="{}" fill="none" stroke="rgba(0,0,0,0.1)" stroke-width="1"/>"#,
            ring.join(" ")
        );
        tick += RADAR_TICK_STEP;
    }

    // Angle spokes.
    for i in 0..axis_count {
        let (x, y) = point_at(i, radius);
        let _ = write!(
            out,
            r#"<line x1="{center:.1}" y1="{center:.1}" x2="{x:.1}" y2="{y:.1}" stroke="rgba(0,0,0,0.1)" stroke-width="1"/>"#
        );
    }

    // Tick value labels along the upward axis.
    let mut tick = RADAR_TICK_STEP;
    while tick as f64 <= AXIS_MAX {
        let y = center - radius * tick as f64 / AXIS_MAX;
        let _ = write!(
            out,
            r##"<text x="{x:.1}" y="{y:.1}" font-size="11" font-family="{FONT_FAMILY}" fill="#666">{tick}</text>"##,
            x = center + 5.0,
        );
        tick += RADAR_TICK_STEP;
    }

    // Axis labels just outside the outer ring.
    for (i, label) in labels.iter().take(axis_count).enumerate() {
        let (x, y) = point_at(i, radius + 28.0);
        let a = angle_of(i);
        let anchor = if a.cos() > 0.1 {
            "start"
        } else if a.cos() < -0.1 {
            "end"
        } else {
            "middle"
        };
        let _ = write!(
            out,
            r##"<text x="{x:.1}" y="{y:.1}" font-size="14" font-weight="500" font-family="{FONT_FAMILY}" fill="#333" text-anchor="{anchor}">{}</text>"##,
            xml_escape(label)
        );
    }

    // One polygon per series, points on top.
    for (k, values) in series.iter().enumerate() {
        let (cr, cg, cb) = SERIES_COLORS[k % SERIES_COLORS.len()];
        let pts: Vec<(f64, f64)> = (0..axis_count)
            .map(|i| point_at(i, radius * clamp(values[i]) / AXIS_MAX))
            .collect();
        let joined: Vec<String> = pts.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
        let _ = write!(
            out,
            r#"<polygon points="{}" fill="rgb({cr},{cg},{cb})" fill-opacity="0.2" stroke="rgb({cr},{cg},{cb})" stroke-width="2"/>"#,
            joined.join(" ")
        );
        for (x, y) in pts {
            let _ = write!(
                out,
                r##"<circle cx="{x:.1}" cy="{y:.1}" r="4" fill="rgb({cr},{cg},{cb})" stroke="#fff" stroke-width="1"/>"##
            );
        }
    }

    out.push_str("</svg>");
    out
}

/// Build the required-vs-actual grouped bar SVG.
pub fn gap_bars_svg(entries: &[GapAnalysisEntry], size: u32) -> String {
    let s = f64::from(size);
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 50.0;
    let margin_bottom = 70.0;
    let plot_w = s - margin_left - margin_right;
    let plot_h = s - margin_top - margin_bottom;
    let base_y = margin_top + plot_h;

    let (req_r, req_g, req_b) = SERIES_COLORS[1];
    let (act_r, act_g, act_b) = SERIES_COLORS[0];

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );

    // Legend.
    let _ = write!(
        out,
        r#"<rect x="{x:.1}" y="14" width="12" height="12" fill="rgba({req_r},{req_g},{req_b},0.5)" stroke="rgb({req_r},{req_g},{req_b})"/>"#,
        x = margin_left,
    );
    let _ = write!(
        out,
        r##"<text x="{x:.1}" y="24" font-size="12" font-family="{FONT_FAMILY}" fill="#333">Required</text>"##,
        x = margin_left + 18.0,
    );
    let _ = write!(
        out,
        r#"<rect x="{x:.1}" y="14" width="12" height="12" fill="rgba({act_r},{act_g},{act_b},0.5)" stroke="rgb({act_r},{act_g},{act_b})"/>"#,
        x = margin_left + 110.0,
    );
    let _ = write!(
        out,
        r##"<text x="{x:.1}" y="24" font-size="12" font-family="{FONT_FAMILY}" fill="#333">Actual</text>"##,
        x = margin_left + 128.0,
    );

    // Horizontal gridlines and y labels, step 1 over [0, 10].
    for tick in 0..=(AXIS_MAX as usize) {
        let y = base_y - plot_h * tick as f64 / AXIS_MAX;
        let _ = write!(
            out,
            r#"<line x1="{margin_left:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="rgba(0,0,0,0.1)" stroke-width="1"/>"#,
            x2 = margin_left + plot_w,
        );
        let _ = write!(
            out,
            r##"<text x="{x:.1}" y="{ty:.1}" font-size="11" font-family="{FONT_FAMILY}" fill="#666" text-anchor="end">{tick}</text>"##,
            x = margin_left - 8.0,
            ty = y + 4.0,
        );
    }

    if !entries.is_empty() {
        let group_w = plot_w / entries.len() as f64;
        let bar_w = (group_w * 0.32).min(48.0);
        for (i, entry) in entries.iter().enumerate() {
            let group_x = margin_left + group_w * i as f64;
            let mid = group_x + group_w / 2.0;

            let req_h = plot_h * clamp(entry.required) / AXIS_MAX;
            let act_h = plot_h * clamp(entry.actual) / AXIS_MAX;
            let _ = write!(
                out,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{req_h:.1}" fill="rgba({req_r},{req_g},{req_b},0.5)" stroke="rgb({req_r},{req_g},{req_b})" stroke-width="1"/>"#,
                x = mid - bar_w - 2.0,
                y = base_y - req_h,
            );
            let _ = write!(
                out,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{act_h:.1}" fill="rgba({act_r},{act_g},{act_b},0.5)" stroke="rgb({act_r},{act_g},{act_b})" stroke-width="1"/>"#,
                x = mid + 2.0,
                y = base_y - act_h,
            );

            let _ = write!(
                out,
                r##"<text x="{mid:.1}" y="{y:.1}" font-size="11" font-family="{FONT_FAMILY}" fill="#333" text-anchor="middle">{}</text>"##,
                xml_escape(&truncate_label(&entry.competency_name)),
                y = base_y + 18.0,
            );
        }
    }

    out.push_str("</svg>");
    out
}

fn truncate_label(label: &str) -> String {
    const MAX: usize = 14;
    if label.chars().count() <= MAX {
        label.to_string()
    } else {
        let head: String = label.chars().take(MAX - 1).collect();
        format!("{head}\u{2026}")
    }
}
