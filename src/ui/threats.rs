use crate::app::{SentinelApp, ViewId};
use crate::filter;
use crate::model::{Record, Threat};
use crate::ui::widgets;
use crate::util::time::display_timestamp;
use eframe::egui;

pub fn threats_page(ui: &mut egui::Ui, app: &mut SentinelApp) {
    widgets::page_header(ui, "Threat Intelligence", "Tracked adversaries and campaigns");

    widgets::search_box(ui, &mut app.ui.threats.search_text, "Search threats...");
    ui.add_space(8.0);

    let threats = filter::apply(&app.catalog.threats, &app.ui.threats);
    let mut selected: Option<Record> = None;

    ui.columns(2, |cols| {
        for (i, threat) in threats.iter().enumerate() {
            let col = &mut cols[i % 2];
            if threat_card(col, threat) {
                selected = Some(Record::Threat((*threat).clone()));
            }
            col.add_space(6.0);
        }
    });

    if threats.is_empty() {
        ui.label(
            egui::RichText::new("No threats match the current search.").color(widgets::MUTED),
        );
    }
    ui.label(
        egui::RichText::new(filter::summarize(&app.catalog.threats, &app.ui.threats).to_string())
            .color(widgets::MUTED),
    );

    if let Some(record) = selected {
        app.navigate(ViewId::ThreatDetails, Some(record));
    }
}

fn threat_card(ui: &mut egui::Ui, threat: &Threat) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&threat.name).strong().size(16.0));
            widgets::severity_badge(ui, threat.severity);
        });
        ui.label(egui::RichText::new(&threat.kind).color(widgets::PURPLE));
        ui.label(&threat.description);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} indicators  {} related incidents",
                    threat.indicators, threat.related_incidents
                ))
                .color(widgets::MUTED),
            );
        });
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Updated {}",
                    display_timestamp(&threat.last_updated)
                ))
                .small()
                .color(widgets::MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                clicked = ui.button("View details").clicked();
            });
        });
    });
    clicked
}
