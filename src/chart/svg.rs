//! Standalone SVG export of a rendered [`Scene`].

use super::scene::{Fill, LegendKind, Scene, Shape, StrokeStyle, TextAnchor, TextLabel};
use crate::model::Rgb;

/// Height of the legend strip appended under the chart.
pub const LEGEND_HEIGHT: f32 = 36.0;

const LEGEND_LEFT: f32 = 20.0;
const LEGEND_SWATCH_WIDTH: f32 = 24.0;
const LEGEND_SWATCH_HEIGHT: f32 = 12.0;
const LEGEND_FONT_SIZE: f32 = 12.0;
const LEGEND_PATTERN_ID: &str = "legend-hatch";

/// Serialize a scene as a self-contained SVG document, legend included.
pub fn to_svg(scene: &Scene) -> String {
    let height = scene.height + LEGEND_HEIGHT;
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = scene.width,
        h = height
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        Rgb::new(0xff, 0xff, 0xff)
    ));
    svg.push('\n');

    svg.push_str(&render_defs(scene));

    for primitive in &scene.primitives {
        svg.push_str(&render_shape(&primitive.shape));
    }

    svg.push_str(&render_legend(scene));
    svg.push_str("</svg>\n");
    svg
}

fn render_defs(scene: &Scene) -> String {
    let mut svg = String::from("  <defs>\n");
    for pattern in &scene.patterns {
        svg.push_str(&hatch_pattern(&pattern.id, pattern.color, pattern.tile, pattern.angle, pattern.stroke_width));
    }
    if let Some(entry) = scene.legend.iter().find(|e| e.kind == LegendKind::HatchedBar) {
        svg.push_str(&hatch_pattern(LEGEND_PATTERN_ID, entry.color, 8.0, 45.0, 2.0));
    }
    svg.push_str("  </defs>\n");
    svg
}

fn hatch_pattern(id: &str, color: Rgb, tile: f32, angle: f32, stroke_width: f32) -> String {
    format!(
        r#"    <pattern id="{id}" patternUnits="userSpaceOnUse" width="{t}" height="{t}" patternTransform="rotate({angle})">
      <line x1="0" y1="0" x2="0" y2="{t}" stroke="{color}" stroke-width="{sw}"/>
    </pattern>
"#,
        id = xml_escape(id),
        t = tile,
        angle = angle,
        color = color,
        sw = stroke_width
    )
}

fn stroke_attrs(stroke: &StrokeStyle) -> String {
    let mut attrs = format!(r#"stroke="{}" stroke-width="{}""#, stroke.color, stroke.width);
    if let Some((dash, gap)) = stroke.dash {
        attrs.push_str(&format!(r#" stroke-dasharray="{},{}""#, dash, gap));
    }
    attrs
}

fn render_shape(shape: &Shape) -> String {
    match shape {
        Shape::Line { from, to, stroke } => format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>\n",
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attrs(stroke)
        ),
        Shape::Rect {
            bounds,
            fill,
            stroke,
            corner_radius,
        } => {
            let fill = match fill {
                Fill::Solid(color) => color.to_string(),
                Fill::Hatch(id) => format!("url(#{})", xml_escape(id)),
            };
            let stroke = stroke
                .as_ref()
                .map(|s| format!(" {}", stroke_attrs(s)))
                .unwrap_or_default();
            format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"{}/>\n",
                bounds.x, bounds.y, bounds.width, bounds.height, corner_radius, fill, stroke
            )
        }
        Shape::Text(label) => render_text(label),
    }
}

fn render_text(label: &TextLabel) -> String {
    let anchor = match label.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let weight = if label.bold { r#" font-weight="bold""# } else { "" };
    format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\"{}>{}</text>\n",
        label.pos.x,
        label.pos.y,
        label.font_size,
        label.color,
        anchor,
        weight,
        xml_escape(&label.text)
    )
}

fn render_legend(scene: &Scene) -> String {
    let mut svg = String::from("  <g class=\"legend\">\n");
    let mid_y = scene.height + LEGEND_HEIGHT / 2.0;
    let mut x = LEGEND_LEFT;

    for entry in &scene.legend {
        let top = mid_y - LEGEND_SWATCH_HEIGHT / 2.0;
        match entry.kind {
            LegendKind::SolidBar => svg.push_str(&format!(
                "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"2\" fill=\"{}\"/>\n",
                x, top, LEGEND_SWATCH_WIDTH, LEGEND_SWATCH_HEIGHT, entry.color
            )),
            LegendKind::HatchedBar => svg.push_str(&format!(
                "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#{})\" stroke=\"{}\"/>\n",
                x, top, LEGEND_SWATCH_WIDTH, LEGEND_SWATCH_HEIGHT, LEGEND_PATTERN_ID, entry.color
            )),
            LegendKind::TodayLine | LegendKind::FinishDateLine => svg.push_str(&format!(
                "    <line x1=\"{cx}\" y1=\"{}\" x2=\"{cx}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
                top - 2.0,
                top + LEGEND_SWATCH_HEIGHT + 2.0,
                entry.color,
                cx = x + LEGEND_SWATCH_WIDTH / 2.0
            )),
        }

        let text_x = x + LEGEND_SWATCH_WIDTH + 6.0;
        svg.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"#333333\" dominant-baseline=\"middle\">{}</text>\n",
            text_x,
            mid_y,
            LEGEND_FONT_SIZE,
            xml_escape(&entry.caption)
        ));
        // Rough advance; SVG has no text measurement.
        x = text_x + entry.caption.chars().count() as f32 * LEGEND_FONT_SIZE * 0.6 + 20.0;
    }

    svg.push_str("  </g>\n");
    svg
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
