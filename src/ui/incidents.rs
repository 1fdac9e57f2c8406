use crate::app::{SentinelApp, ViewId};
use crate::filter::{self, Selection};
use crate::model::{Incident, Record, Status};
use crate::ui::widgets;
use crate::util::time::display_timestamp;
use eframe::egui;

pub fn incidents_page(ui: &mut egui::Ui, app: &mut SentinelApp) {
    widgets::page_header(ui, "Incident Management", "Track and respond to security incidents");

    let criteria = &mut app.ui.incidents;
    widgets::search_box(ui, &mut criteria.search_text, "Search incidents...");
    ui.horizontal_wrapped(|ui| {
        ui.selectable_value(&mut criteria.status, Selection::All, "All");
        for status in Status::INCIDENT {
            ui.selectable_value(&mut criteria.status, Selection::from(status), status.label());
        }
    });
    ui.add_space(8.0);

    let incidents = filter::apply(&app.catalog.incidents, &app.ui.incidents);
    let mut selected: Option<Record> = None;

    for incident in &incidents {
        if incident_card(ui, incident) {
            selected = Some(Record::Incident((*incident).clone()));
        }
        ui.add_space(6.0);
    }

    if incidents.is_empty() {
        ui.label(
            egui::RichText::new("No incidents match the current filters.").color(widgets::MUTED),
        );
    }
    ui.label(
        egui::RichText::new(
            filter::summarize(&app.catalog.incidents, &app.ui.incidents).to_string(),
        )
        .color(widgets::MUTED),
    );

    if let Some(record) = selected {
        app.navigate(ViewId::IncidentDetails, Some(record));
    }
}

/// Returns true when "View details" was clicked.
fn incident_card(ui: &mut egui::Ui, incident: &Incident) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.monospace(&incident.id);
            widgets::severity_badge(ui, incident.severity);
            widgets::status_badge(ui, incident.status);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                clicked = ui.button("View details").clicked();
                ui.label(
                    egui::RichText::new(display_timestamp(&incident.timestamp))
                        .color(widgets::MUTED),
                );
            });
        });
        ui.label(egui::RichText::new(&incident.title).strong().size(16.0));
        ui.label(&incident.description);
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("Source:").color(widgets::MUTED));
            ui.label(&incident.source);
            if !incident.target.is_empty() {
                ui.label(egui::RichText::new("Target:").color(widgets::MUTED));
                ui.label(&incident.target);
            }
            if !incident.affected_systems.is_empty() {
                ui.label(egui::RichText::new("Affected:").color(widgets::MUTED));
                ui.label(incident.affected_systems.len().to_string());
            }
            if let Some(owner) = &incident.assigned_to {
                ui.label(egui::RichText::new("Assigned to:").color(widgets::MUTED));
                ui.label(owner);
            }
        });
    });
    clicked
}
