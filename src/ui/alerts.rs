use crate::app::{SentinelApp, ViewId};
use crate::filter::{self, Selection};
use crate::model::{Record, Severity, Status};
use crate::ui::widgets;
use crate::util::time::display_timestamp;
use eframe::egui;

const SEVERITY_CHOICES: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

pub fn alerts_page(ui: &mut egui::Ui, app: &mut SentinelApp) {
    widgets::page_header(ui, "Security Alerts", "Detections raised by monitored sources");

    let criteria = &mut app.ui.alerts;
    ui.horizontal(|ui| {
        widgets::search_box(ui, &mut criteria.search_text, "Search alerts...");
        ui.separator();

        ui.label("Severity:");
        egui::ComboBox::from_id_source("alert_severity")
            .selected_text(selection_text(&criteria.severity))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut criteria.severity, Selection::All, "All");
                for sev in SEVERITY_CHOICES {
                    ui.selectable_value(&mut criteria.severity, Selection::from(sev), sev.label());
                }
            });

        ui.label("Status:");
        egui::ComboBox::from_id_source("alert_status")
            .selected_text(selection_text(&criteria.status))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut criteria.status, Selection::All, "All");
                for status in Status::ALERT {
                    ui.selectable_value(
                        &mut criteria.status,
                        Selection::from(status),
                        status.label(),
                    );
                }
            });

        if !criteria.is_default() && ui.button("Reset").clicked() {
            criteria.clear();
        }
    });
    ui.add_space(8.0);

    let alerts = filter::apply(&app.catalog.alerts, &app.ui.alerts);
    let mut selected: Option<Record> = None;

    egui::Grid::new("alerts_table")
        .striped(true)
        .num_columns(6)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for heading in ["Time", "Severity", "Description", "Source", "Status", ""] {
                ui.label(egui::RichText::new(heading).strong());
            }
            ui.end_row();

            for alert in &alerts {
                ui.monospace(display_timestamp(&alert.timestamp));
                widgets::severity_badge(ui, alert.severity);
                ui.label(&alert.description);
                ui.label(egui::RichText::new(&alert.source).color(widgets::MUTED));
                widgets::status_badge(ui, alert.status);
                if ui.button("View details").clicked() {
                    selected = Some(Record::Alert((*alert).clone()));
                }
                ui.end_row();
            }
        });

    if alerts.is_empty() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("No alerts match the current filters.").color(widgets::MUTED));
    }

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(format!(
            "{} alerts",
            filter::summarize(&app.catalog.alerts, &app.ui.alerts)
        ))
        .color(widgets::MUTED),
    );

    if let Some(record) = selected {
        app.navigate(ViewId::IncidentDetails, Some(record));
    }
}

pub(super) fn selection_text(selection: &Selection) -> String {
    match selection {
        Selection::All => "All".to_string(),
        Selection::Only(value) => value.clone(),
    }
}
