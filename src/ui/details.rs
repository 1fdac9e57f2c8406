use crate::app::{SentinelApp, ViewId};
use crate::model::{Describable, Evidence, Incident, Record, ResponseKind};
use crate::ui::widgets;
use crate::util::time::display_timestamp;
use eframe::egui;

/// Detail view for whatever record the last payload navigation selected.
/// The record kind need not match the view: an alert opened from the
/// dashboard lands on incident details.
pub fn details_page(ui: &mut egui::Ui, app: &mut SentinelApp, view: ViewId) {
    let back = view.sidebar_anchor().unwrap_or(ViewId::HOME);
    let mut target: Option<ViewId> = None;
    let mut response: Option<ResponseKind> = None;

    ui.horizontal(|ui| {
        if ui.button(format!("< Back to {}", back.label())).clicked() {
            target = Some(back);
        }
    });
    ui.add_space(6.0);

    let Some(record) = app.nav.selected_record() else {
        empty(ui, &mut target);
        if let Some(view) = target {
            app.navigate(view, None);
        }
        return;
    };

    header(ui, record);
    fields(ui, record);
    if let Record::Incident(incident) = record {
        investigation(ui, incident);
    }

    if view == ViewId::IncidentDetails {
        ui.add_space(12.0);
        response = response_panel(ui);
    }

    if let Some(kind) = response {
        // The record is borrowed from navigation state; clone to dispatch.
        let record = record.clone();
        app.dispatch_response(kind, &record);
    }
    if let Some(view) = target {
        app.navigate(view, None);
    }
}

fn empty(ui: &mut egui::Ui, target: &mut Option<ViewId>) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("No record selected").size(18.0).strong());
        ui.label(
            egui::RichText::new("Open a record from one of the lists to see its details.")
                .color(widgets::MUTED),
        );
        ui.add_space(8.0);
        if ui.button("Return to Dashboard").clicked() {
            *target = Some(ViewId::Dashboard);
        }
    });
}

fn header(ui: &mut egui::Ui, record: &Record) {
    ui.horizontal(|ui| {
        ui.monospace(record.reference());
        ui.label(egui::RichText::new(record.kind_label()).color(widgets::MUTED));
        if let Some(sev) = record.severity() {
            widgets::severity_badge(ui, sev);
        }
        if let Some(status) = record.status() {
            widgets::status_badge(ui, status);
        }
    });
    ui.heading(egui::RichText::new(record.title()).strong());
    ui.add_space(8.0);
}

fn fields(ui: &mut egui::Ui, record: &Record) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        egui::Grid::new("record_fields")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                if let Some(ts) = record.timestamp() {
                    widgets::field_row(ui, "Time", &display_timestamp(ts));
                }
                if let Some(source) = record.source() {
                    widgets::field_row(ui, "Source", source);
                }
                for (label, value) in record.details() {
                    widgets::field_row(ui, label, &value);
                }
            });
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Description").strong());
        ui.label(record.description());
    });
}

fn investigation(ui: &mut egui::Ui, incident: &Incident) {
    if incident.timeline.is_empty() && incident.mitre.is_empty() && incident.evidence.is_empty() {
        return;
    }
    ui.add_space(12.0);
    ui.columns(2, |cols| {
        timeline(&mut cols[0], incident);
        attack_mapping(&mut cols[1], incident);
    });
    if !incident.evidence.is_empty() {
        ui.add_space(12.0);
        evidence(ui, &incident.evidence);
    }
}

fn timeline(ui: &mut egui::Ui, incident: &Incident) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new("Incident Timeline").strong());
        ui.separator();
        if incident.timeline.is_empty() {
            ui.label(egui::RichText::new("No timeline recorded").color(widgets::MUTED));
        }
        for entry in &incident.timeline {
            ui.horizontal(|ui| {
                let (dot, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(dot.center(), 4.0, widgets::timeline_color(entry.status));
                ui.monospace(&entry.time);
                ui.label(&entry.event).on_hover_text(entry.status.label());
            });
        }
    });
}

fn attack_mapping(ui: &mut egui::Ui, incident: &Incident) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new("MITRE ATT&CK Mapping").strong());
        ui.separator();
        if incident.mitre.is_empty() {
            ui.label(egui::RichText::new("No techniques mapped").color(widgets::MUTED));
            return;
        }
        egui::Grid::new("attack_mapping")
            .num_columns(3)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for technique in &incident.mitre {
                    ui.label(egui::RichText::new(&technique.id).monospace().color(widgets::ACCENT));
                    ui.label(egui::RichText::new(&technique.name).strong());
                    ui.label(egui::RichText::new(&technique.tactic).color(widgets::MUTED));
                    ui.end_row();
                }
            });
    });
}

fn evidence(ui: &mut egui::Ui, evidence: &Evidence) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new("Evidence & Analysis").strong());
        ui.separator();
        ui.columns(2, |cols| {
            if let Some(net) = &evidence.network {
                cols[0].label(egui::RichText::new("Network Indicators").strong());
                egui::Grid::new("network_indicators")
                    .num_columns(2)
                    .show(&mut cols[0], |ui| {
                        widgets::field_row(ui, "Source IP", &net.source_ip);
                        widgets::field_row(ui, "Destination", &net.destination);
                        widgets::field_row(ui, "Protocol", &net.protocol);
                    });
            }
            if let Some(hashes) = &evidence.hashes {
                let ui = &mut cols[1];
                ui.label(egui::RichText::new("File Hashes").strong());
                ui.label(egui::RichText::new("MD5").color(widgets::MUTED));
                ui.label(egui::RichText::new(&hashes.md5).monospace().color(widgets::WARNING));
                ui.label(egui::RichText::new("SHA256").color(widgets::MUTED));
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&hashes.sha256).monospace().color(widgets::WARNING),
                    )
                    .wrap(true),
                );
            }
        });
    });
}

fn response_panel(ui: &mut egui::Ui) -> Option<ResponseKind> {
    let mut chosen = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new("Response Actions").strong());
        ui.horizontal_wrapped(|ui| {
            for kind in ResponseKind::ALL {
                if ui.button(kind.label()).clicked() {
                    chosen = Some(kind);
                }
            }
        });
    });
    chosen
}
