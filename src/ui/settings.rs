use crate::app::{LogLevel, SentinelApp, SettingsTab};
use crate::ui::widgets;
use eframe::egui;

pub fn settings_page(ui: &mut egui::Ui, app: &mut SentinelApp) {
    widgets::page_header(ui, "Settings", "Session preferences. Changes are not saved.");

    ui.horizontal_wrapped(|ui| {
        for tab in SettingsTab::ALL {
            ui.selectable_value(&mut app.ui.settings_tab, tab, tab.label());
        }
    });
    ui.separator();

    let theme_before = app.ui.preferences.dark_mode;
    let prefs = &mut app.ui.preferences;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        match app.ui.settings_tab {
            SettingsTab::General => {
                ui.checkbox(&mut prefs.dark_mode, "Dark mode");
                ui.checkbox(&mut prefs.auto_update, "Automatic updates");
            }
            SettingsTab::Security => {
                ui.checkbox(&mut prefs.two_factor, "Require two-factor authentication");
                ui.horizontal(|ui| {
                    ui.label("Session timeout (minutes):");
                    ui.add(egui::DragValue::new(&mut prefs.session_timeout_minutes).clamp_range(5..=240));
                });
            }
            SettingsTab::Notifications => {
                ui.checkbox(&mut prefs.notifications, "Desktop notifications");
                ui.checkbox(&mut prefs.email_alerts, "Email alerts");
            }
            SettingsTab::Data => {
                ui.horizontal(|ui| {
                    ui.label("Retention (days):");
                    ui.add(egui::Slider::new(&mut prefs.retention_days, 7..=365));
                });
            }
            SettingsTab::Api => {
                ui.horizontal(|ui| {
                    ui.label("API key:");
                    ui.add(
                        egui::TextEdit::singleline(&mut prefs.api_key)
                            .password(!prefs.reveal_api_key)
                            .desired_width(260.0),
                    );
                    ui.checkbox(&mut prefs.reveal_api_key, "Show");
                });
            }
            SettingsTab::System => {
                ui.horizontal(|ui| {
                    ui.label("Log level:");
                    egui::ComboBox::from_id_source("log_level")
                        .selected_text(prefs.log_level.label())
                        .show_ui(ui, |ui| {
                            for level in LogLevel::ALL {
                                ui.selectable_value(&mut prefs.log_level, level, level.label());
                            }
                        });
                });
                ui.label(
                    egui::RichText::new("Process logging follows SENTINEL_LOG and the -v/-q flags.")
                        .small()
                        .color(widgets::MUTED),
                );
            }
        }
    });

    if app.ui.preferences.dark_mode != theme_before {
        ui.ctx().set_visuals(app.visuals());
    }
}
