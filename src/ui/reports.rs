use crate::app::{SentinelApp, ViewId};
use crate::filter::{self, Selection};
use crate::model::{Record, Report, ReportCategory};
use crate::ui::widgets;
use crate::util::time::display_timestamp;
use eframe::egui;

pub fn reports_page(ui: &mut egui::Ui, app: &mut SentinelApp) {
    widgets::page_header(ui, "Security Reports", "Generated posture and compliance reports");

    let criteria = &mut app.ui.reports;
    ui.horizontal_wrapped(|ui| {
        ui.selectable_value(&mut criteria.category, Selection::All, "All");
        for category in ReportCategory::ALL {
            ui.selectable_value(
                &mut criteria.category,
                Selection::from(category),
                category.label(),
            );
        }
    });
    widgets::search_box(ui, &mut criteria.search_text, "Search reports...");
    ui.add_space(8.0);

    let reports = filter::apply(&app.catalog.reports, &app.ui.reports);
    let mut selected: Option<Record> = None;

    for report in &reports {
        if report_card(ui, report) {
            selected = Some(Record::Report((*report).clone()));
        }
        ui.add_space(6.0);
    }

    if reports.is_empty() {
        ui.label(
            egui::RichText::new("No reports match the current filters.").color(widgets::MUTED),
        );
    }
    ui.label(
        egui::RichText::new(filter::summarize(&app.catalog.reports, &app.ui.reports).to_string())
            .color(widgets::MUTED),
    );

    if let Some(record) = selected {
        app.navigate(ViewId::ReportDetails, Some(record));
    }
}

fn report_card(ui: &mut egui::Ui, report: &Report) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&report.title).strong().size(16.0));
            ui.label(egui::RichText::new(report.category.label()).color(widgets::INFO));
            ui.label(egui::RichText::new(&report.kind).color(widgets::MUTED));
        });
        ui.label(&report.description);
        if !report.metrics.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for metric in &report.metrics {
                    ui.label(egui::RichText::new(metric).small().color(widgets::ACCENT));
                }
            });
        }
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Generated {}  {}",
                    display_timestamp(&report.generated),
                    report.format
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
