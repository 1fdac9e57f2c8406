mod alerts;
mod dashboard;
mod details;
mod incidents;
mod login;
mod reports;
mod settings;
mod threats;
mod traffic_chart;
mod widgets;

use crate::app::{SentinelApp, ViewId};
use crate::model::Describable;
use eframe::egui;

pub use widgets::{severity_color, status_color};

pub fn render_app(ctx: &egui::Context, app: &mut SentinelApp) {
    let view = app.nav.current_view();

    if view != ViewId::Login {
        top_bar(ctx, app);
        sidebar(ctx, app);
        status_bar(ctx, app);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_source("page_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| page(ui, app, view));
    });

    about_window(ctx, app);
}

fn page(ui: &mut egui::Ui, app: &mut SentinelApp, view: ViewId) {
    match view {
        ViewId::Login => login::login_page(ui, app),
        ViewId::Dashboard => dashboard::dashboard_page(ui, app),
        ViewId::Alerts => alerts::alerts_page(ui, app),
        ViewId::Incidents => incidents::incidents_page(ui, app),
        ViewId::ThreatIntel => threats::threats_page(ui, app),
        ViewId::Reports => reports::reports_page(ui, app),
        ViewId::Settings => settings::settings_page(ui, app),
        ViewId::IncidentDetails | ViewId::ThreatDetails | ViewId::ReportDetails => {
            details::details_page(ui, app, view)
        }
    }
}

fn top_bar(ctx: &egui::Context, app: &mut SentinelApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open catalog...").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Catalog", &["json"])
                        .pick_file()
                    {
                        if let Err(e) = app.load_catalog(path) {
                            let message = format!("{e:#}");
                            tracing::warn!(error = %message, "catalog load failed");
                            app.ui.last_error = Some(message);
                        }
                    }
                }
                if ui.button("Use sample data").clicked() {
                    ui.close_menu();
                    app.use_sample_data();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Logout").clicked() {
                    app.log_out();
                }
                ui.label("Admin User");
                ui.separator();
                ui.label(
                    egui::RichText::new(&app.config.window.title)
                        .strong()
                        .color(widgets::ACCENT),
                );
            });
        });
    });
}

fn sidebar(ctx: &egui::Context, app: &mut SentinelApp) {
    let anchor = app.nav.current_view().sidebar_anchor();
    egui::SidePanel::left("nav_panel")
        .resizable(false)
        .exact_width(210.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            for view in ViewId::SIDEBAR {
                let selected = anchor == Some(view);
                let response = ui.add_sized(
                    [ui.available_width(), 28.0],
                    egui::SelectableLabel::new(selected, view.label()),
                );
                if response.clicked() {
                    app.navigate(view, None);
                }
                ui.add_space(2.0);
            }

            ui.add_space(16.0);
            ui.group(|ui| {
                ui.label(egui::RichText::new("System Status").strong());
                ui.colored_label(widgets::GOOD, "All Systems Operational");
            });
        });
}

fn about_window(ctx: &egui::Context, app: &mut SentinelApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About CyberSentinel")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Security operations console over static sample data.");
            ui.label("Load a JSON catalog from File > Open catalog to review your own records.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut SentinelApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let c = &app.catalog;
            ui.label(format!(
                "Alerts: {}  Incidents: {}  Threats: {}  Reports: {}",
                c.alerts.len(),
                c.incidents.len(),
                c.threats.len(),
                c.reports.len()
            ));
            ui.separator();
            match &app.catalog_path {
                Some(p) => {
                    let name = p
                        .file_name()
                        .map(|s| s.to_string_lossy())
                        .unwrap_or_else(|| p.to_string_lossy());
                    ui.label(format!("Catalog: {name}"))
                        .on_hover_text(p.display().to_string());
                }
                None => {
                    ui.label("Catalog: sample data");
                }
            }
            ui.separator();
            match app.nav.selected_record() {
                Some(rec) => ui.label(format!(
                    "Selected: {} {}",
                    rec.kind_label(),
                    rec.reference()
                )),
                None => ui.label("Selected: (none)"),
            };
            if let Some(err) = &app.ui.last_error {
                ui.separator();
                ui.colored_label(widgets::CRITICAL, format!("Error: {err}"));
            }
        });
    });
}
