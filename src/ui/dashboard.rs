use crate::app::{SentinelApp, ViewId};
use crate::model::{Record, ResponseStatus, ScoreBand};
use crate::ui::traffic_chart::traffic_chart;
use crate::ui::widgets;
use eframe::egui;

const RECENT_ALERTS: usize = 5;

pub fn dashboard_page(ui: &mut egui::Ui, app: &mut SentinelApp) {
    widgets::page_header(ui, "Security Overview", "Live posture across monitored assets");

    let score = app.catalog.security_score();
    let band = ScoreBand::for_score(score);
    let open_incidents = app.catalog.open_incidents().count();

    ui.columns(4, |cols| {
        widgets::stat_card(
            &mut cols[0],
            "Security Score",
            format!("{score}%"),
            widgets::band_color(band),
        );
        widgets::stat_card(
            &mut cols[1],
            "Open Incidents",
            open_incidents.to_string(),
            widgets::CRITICAL,
        );
        widgets::stat_card(
            &mut cols[2],
            "Open Alerts",
            app.catalog.open_alert_count().to_string(),
            widgets::WARNING,
        );
        widgets::stat_card(
            &mut cols[3],
            "Threat Feeds",
            app.catalog.threats.len().to_string(),
            widgets::ACCENT,
        );
    });
    ui.add_space(12.0);

    let mut nav: Option<(ViewId, Option<Record>)> = None;

    ui.columns(2, |cols| {
        security_gauge(&mut cols[0], score, band);
        cols[0].add_space(12.0);
        traffic_chart(&mut cols[0], &app.catalog.traffic);
        cols[0].add_space(12.0);
        if let Some(target) = alerts_feed(&mut cols[0], app) {
            nav = Some(target);
        }

        if let Some(target) = incidents_widget(&mut cols[1], app) {
            nav = Some(target);
        }
        cols[1].add_space(12.0);
        response_log(&mut cols[1], app);
    });

    if let Some((view, payload)) = nav {
        app.navigate(view, payload);
    }
}

fn security_gauge(ui: &mut egui::Ui, score: u8, band: ScoreBand) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new("Security Posture").strong());
        ui.add(
            egui::ProgressBar::new(f32::from(score) / 100.0)
                .fill(widgets::band_color(band))
                .text(format!("{score}%")),
        );
        let caption = match band {
            ScoreBand::Good => "Posture healthy",
            ScoreBand::Warning => "Posture degraded: open items need triage",
            ScoreBand::Critical => "Posture critical: escalate open incidents",
        };
        ui.label(egui::RichText::new(caption).color(widgets::MUTED));
    });
}

fn alerts_feed(ui: &mut egui::Ui, app: &SentinelApp) -> Option<(ViewId, Option<Record>)> {
    let mut nav = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Recent Alerts").strong());
            if ui.link("View all").clicked() {
                nav = Some((ViewId::Alerts, None));
            }
        });
        ui.separator();
        for alert in app.catalog.recent_alerts(RECENT_ALERTS) {
            ui.horizontal(|ui| {
                widgets::severity_badge(ui, alert.severity);
                ui.monospace(crate::util::time::display_timestamp(&alert.timestamp));
                let response = ui
                    .add(egui::Label::new(&alert.description).sense(egui::Sense::click()))
                    .on_hover_text(format!("{} / {}", alert.source, alert.status));
                if response.clicked() {
                    nav = Some((
                        ViewId::IncidentDetails,
                        Some(Record::Alert(alert.clone())),
                    ));
                }
            });
        }
    });
    nav
}

fn incidents_widget(ui: &mut egui::Ui, app: &SentinelApp) -> Option<(ViewId, Option<Record>)> {
    let mut nav = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Active Incidents").strong());
            if ui.link("View all").clicked() {
                nav = Some((ViewId::Incidents, None));
            }
        });
        ui.separator();
        let mut any = false;
        for incident in app.catalog.open_incidents() {
            any = true;
            ui.horizontal(|ui| {
                widgets::severity_badge(ui, incident.severity);
                widgets::status_badge(ui, incident.status);
                if ui.link(&incident.title).clicked() {
                    nav = Some((
                        ViewId::IncidentDetails,
                        Some(Record::Incident(incident.clone())),
                    ));
                }
            });
        }
        if !any {
            ui.label(egui::RichText::new("No open incidents").color(widgets::MUTED));
        }
    });
    nav
}

fn response_log(ui: &mut egui::Ui, app: &SentinelApp) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new("Automated Response Log").strong());
        ui.separator();
        for action in app.response_log() {
            let color = match action.status {
                ResponseStatus::Completed => widgets::GOOD,
                ResponseStatus::Pending => widgets::WARNING,
                ResponseStatus::Failed => widgets::CRITICAL,
            };
            ui.horizontal(|ui| {
                ui.monospace(&action.timestamp);
                ui.label(egui::RichText::new(&action.action).strong());
                ui.label(egui::RichText::new(&action.target).color(widgets::MUTED));
                ui.colored_label(color, action.status.label());
            })
            .response
            .on_hover_text(&action.description);
        }
    });
}
