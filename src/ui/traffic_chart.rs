use crate::model::{TrafficSample, total_anomalies, trend_percent};
use crate::ui::widgets;
use eframe::egui;

const GRID_LINES: usize = 5;

pub fn traffic_chart(ui: &mut egui::Ui, samples: &[TrafficSample]) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Network Traffic Analysis").strong());
            if let Some(trend) = trend_percent(samples) {
                let color = if trend >= 0.0 { widgets::GOOD } else { widgets::WARNING };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(color, format!("{trend:+.1}% vs earlier"));
                });
            }
        });
        ui.separator();

        if samples.is_empty() {
            ui.label(egui::RichText::new("No traffic samples").color(widgets::MUTED));
            return;
        }

        plot(ui, samples);

        ui.horizontal(|ui| {
            ui.colored_label(widgets::GOOD, "Normal traffic");
            ui.colored_label(widgets::CRITICAL, "Anomalies");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{} anomalies", total_anomalies(samples)))
                        .color(widgets::WARNING),
                );
            });
        });
    });
}

fn plot(ui: &mut egui::Ui, samples: &[TrafficSample]) {
    let w = ui.available_width().max(160.0);
    let h = 140.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let grid = egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    let plot = rect.shrink2(egui::vec2(12.0, 16.0));
    for i in 0..GRID_LINES {
        let y = plot.top() + plot.height() * i as f32 / (GRID_LINES - 1) as f32;
        painter.line_segment([egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)], grid);
    }

    let max_normal = samples.iter().map(|s| s.normal).max().unwrap_or(0).max(1) as f32;
    let max_anomaly = samples.iter().map(|s| s.anomaly).max().unwrap_or(0).max(1) as f32;
    let step = if samples.len() > 1 {
        plot.width() / (samples.len() - 1) as f32
    } else {
        0.0
    };
    let x_at = |i: usize| plot.left() + step * i as f32;
    let y_at = |value: u32, max: f32| plot.bottom() - plot.height() * (value as f32 / max);

    let line: Vec<egui::Pos2> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| egui::pos2(x_at(i), y_at(s.normal, max_normal)))
        .collect();
    painter.add(egui::Shape::line(
        line.clone(),
        egui::Stroke::new(2.0, widgets::GOOD),
    ));

    let label_color = ui.visuals().weak_text_color();
    for (i, s) in samples.iter().enumerate() {
        if s.anomaly > 0 {
            // Anomaly markers use their own scale so small counts stay visible.
            let p = egui::pos2(x_at(i), y_at(s.anomaly, max_anomaly));
            painter.circle_filled(p, 4.0, widgets::CRITICAL);
        }
        painter.text(
            egui::pos2(x_at(i), rect.bottom() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            &s.time,
            egui::FontId::monospace(10.0),
            label_color,
        );
    }

    if let Some(pos) = response.hover_pos()
        && let Some(i) = nearest_bucket(&line, pos, 12.0)
    {
        let s = &samples[i];
        egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("traffic_hover"), |ui| {
            ui.monospace(&s.time);
            ui.label(format!("normal {}  anomalies {}", s.normal, s.anomaly));
        });
    }
}

/// Index of the bucket whose x is within `max_dx` of the pointer.
fn nearest_bucket(points: &[egui::Pos2], pos: egui::Pos2, max_dx: f32) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, (p.x - pos.x).abs()))
        .filter(|(_, d)| *d <= max_dx)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_picks_closest_bucket_in_reach() {
        let points = [egui::pos2(0.0, 50.0), egui::pos2(40.0, 10.0), egui::pos2(80.0, 30.0)];
        assert_eq!(nearest_bucket(&points, egui::pos2(35.0, 90.0), 12.0), Some(1));
        assert_eq!(nearest_bucket(&points, egui::pos2(60.0, 0.0), 12.0), None);
        assert_eq!(nearest_bucket(&[], egui::pos2(0.0, 0.0), 12.0), None);
    }
}
