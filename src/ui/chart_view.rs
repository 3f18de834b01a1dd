use crate::ui::theme;
use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use release_gantt::chart::{
    ChartOutput, Fill, HatchPattern, LegendEntry, LegendKind, Point, Scene, Shape, StrokeStyle, TextAnchor,
};

/// Render the chart for the selected project, or a hint when there is nothing to draw.
pub fn show_chart(output: &ChartOutput, ui: &mut Ui) {
    let Some(scene) = output.scene() else {
        ui.add_space(20.0);
        ui.label(
            egui::RichText::new("No visible releases to chart. Add releases or tick \"Show\" on the Releases tab.")
                .color(theme::TEXT_DIM),
        );
        return;
    };

    let (response, painter) = ui.allocate_painter(Vec2::new(scene.width, scene.height), Sense::hover());
    let origin = response.rect.min;
    painter.rect_filled(response.rect, 0.0, theme::BG_CHART);

    for primitive in &scene.primitives {
        match &primitive.shape {
            Shape::Line { from, to, stroke } => draw_line(&painter, origin, *from, *to, stroke),
            Shape::Rect {
                bounds,
                fill,
                stroke,
                corner_radius,
            } => {
                let rect = Rect::from_min_max(
                    origin + Vec2::new(bounds.x, bounds.y),
                    origin + Vec2::new(bounds.right(), bounds.bottom()),
                );
                let rounding = Rounding::same(*corner_radius);
                match fill {
                    Fill::Solid(rgb) => {
                        painter.rect_filled(rect, rounding, theme::color(*rgb));
                    }
                    Fill::Hatch(id) => {
                        if let Some(pattern) = scene.pattern(id) {
                            draw_hatch(&painter, rect, pattern);
                        }
                    }
                }
                if let Some(stroke) = stroke {
                    painter.rect_stroke(rect, rounding, Stroke::new(stroke.width, theme::color(stroke.color)));
                }
            }
            Shape::Text(label) => {
                let align = match label.anchor {
                    TextAnchor::Start => Align2::LEFT_CENTER,
                    TextAnchor::Middle => Align2::CENTER_CENTER,
                    TextAnchor::End => Align2::RIGHT_CENTER,
                };
                let pos = origin + Vec2::new(label.pos.x, label.pos.y);
                let font = FontId::proportional(label.font_size);
                let color = theme::color(label.color);
                painter.text(pos, align, &label.text, font.clone(), color);
                // Faux bold: egui ships a single weight.
                if label.bold {
                    painter.text(pos + Vec2::new(0.5, 0.0), align, &label.text, font, color);
                }
            }
        }
    }

    ui.add_space(8.0);
    show_legend(scene, ui);
}

fn draw_line(painter: &egui::Painter, origin: Pos2, from: Point, to: Point, stroke: &StrokeStyle) {
    let points = [
        origin + Vec2::new(from.x, from.y),
        origin + Vec2::new(to.x, to.y),
    ];
    let egui_stroke = Stroke::new(stroke.width, theme::color(stroke.color));
    match stroke.dash {
        Some((dash, gap)) => {
            painter.extend(egui::Shape::dashed_line(&points, egui_stroke, dash, gap));
        }
        None => {
            painter.line_segment(points, egui_stroke);
        }
    }
}

/// Fill `rect` with 45° lines spaced one tile apart, clipped to the rect.
fn draw_hatch(painter: &egui::Painter, rect: Rect, pattern: &HatchPattern) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let clipped = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    let stroke = Stroke::new(pattern.stroke_width, theme::color(pattern.color));
    let step = pattern.tile.max(1.0);
    let h = rect.height();

    // Lines run bottom-left to top-right; start far enough left to cover the corner.
    let mut offset = -h;
    while offset < rect.width() {
        let from = Pos2::new(rect.left() + offset, rect.bottom());
        let to = Pos2::new(rect.left() + offset + h, rect.top());
        clipped.line_segment([from, to], stroke);
        offset += step;
    }
}

fn show_legend(scene: &Scene, ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.add_space(20.0);
        for entry in &scene.legend {
            legend_swatch(ui, entry);
            ui.label(egui::RichText::new(&entry.caption).size(12.0).color(theme::TEXT_PRIMARY));
            ui.add_space(16.0);
        }
    });
}

fn legend_swatch(ui: &mut Ui, entry: &LegendEntry) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(24.0, 12.0), Sense::hover());
    let color = theme::color(entry.color);
    let painter = ui.painter();
    match entry.kind {
        LegendKind::SolidBar => {
            painter.rect_filled(rect, Rounding::same(2.0), color);
        }
        LegendKind::HatchedBar => {
            draw_hatch(painter, rect, &HatchPattern::new("legend", entry.color));
            painter.rect_stroke(rect, Rounding::ZERO, Stroke::new(1.0, color));
        }
        LegendKind::TodayLine | LegendKind::FinishDateLine => {
            painter.line_segment(
                [
                    Pos2::new(rect.center().x, rect.top() - 2.0),
                    Pos2::new(rect.center().x, rect.bottom() + 2.0),
                ],
                Stroke::new(2.0, color),
            );
        }
    }
}
