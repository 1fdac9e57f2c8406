use crate::model::{ScoreBand, Severity, Status, TimelineStatus};
use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);
pub const GOOD: egui::Color32 = egui::Color32::from_rgb(52, 211, 153);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
pub const ELEVATED: egui::Color32 = egui::Color32::from_rgb(251, 146, 60);
pub const CRITICAL: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const INFO: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);
pub const PURPLE: egui::Color32 = egui::Color32::from_rgb(192, 132, 252);

pub fn severity_color(sev: Severity) -> egui::Color32 {
    match sev {
        Severity::Low => GOOD,
        Severity::Medium => WARNING,
        Severity::High => ELEVATED,
        Severity::Critical => CRITICAL,
    }
}

pub fn status_color(status: Status) -> egui::Color32 {
    match status {
        Status::New | Status::Active => CRITICAL,
        Status::Investigating => WARNING,
        Status::Contained => INFO,
        Status::Mitigated => PURPLE,
        Status::Resolved => GOOD,
    }
}

pub fn timeline_color(status: TimelineStatus) -> egui::Color32 {
    match status {
        TimelineStatus::Critical => CRITICAL,
        TimelineStatus::Blocked => ELEVATED,
        TimelineStatus::Contained => GOOD,
        TimelineStatus::Detected | TimelineStatus::Analyzed => ACCENT,
    }
}

pub fn band_color(band: ScoreBand) -> egui::Color32 {
    match band {
        ScoreBand::Good => GOOD,
        ScoreBand::Warning => WARNING,
        ScoreBand::Critical => CRITICAL,
    }
}

pub fn severity_badge(ui: &mut egui::Ui, sev: Severity) {
    ui.label(
        egui::RichText::new(sev.label())
            .strong()
            .color(severity_color(sev)),
    );
}

pub fn status_badge(ui: &mut egui::Ui, status: Status) {
    ui.label(egui::RichText::new(status.label()).color(status_color(status)));
}

pub fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(4.0);
    ui.heading(egui::RichText::new(title).strong().size(24.0));
    ui.label(egui::RichText::new(subtitle).color(MUTED));
    ui.add_space(12.0);
}

/// Single-line search input with a clear button.
pub fn search_box(ui: &mut egui::Ui, text: &mut String, hint: &str) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(text)
                .hint_text(hint)
                .desired_width(280.0),
        );
        if !text.is_empty() && ui.small_button("Clear").clicked() {
            text.clear();
        }
    });
}

pub fn stat_card(ui: &mut egui::Ui, label: &str, value: String, color: egui::Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(label).color(MUTED));
        ui.label(egui::RichText::new(value).size(22.0).strong().color(color));
    });
}

pub fn field_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(egui::RichText::new(label).color(MUTED));
    ui.label(value);
    ui.end_row();
}
