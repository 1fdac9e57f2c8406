use crate::app::SentinelApp;
use crate::ui::widgets;
use eframe::egui;

pub fn login_page(ui: &mut egui::Ui, app: &mut SentinelApp) {
    let mut submitted = false;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.heading(
            egui::RichText::new(&app.config.window.title)
                .size(36.0)
                .strong()
                .color(widgets::ACCENT),
        );
        ui.label(egui::RichText::new("Security Operations Center").color(widgets::MUTED));
        ui.add_space(24.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_max_width(340.0);
            let form = &mut app.ui.login;

            ui.label("Username");
            ui.add(
                egui::TextEdit::singleline(&mut form.username)
                    .hint_text("analyst")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            ui.label("Password");
            let password = ui.add(
                egui::TextEdit::singleline(&mut form.password)
                    .password(!form.show_password)
                    .desired_width(f32::INFINITY),
            );
            ui.checkbox(&mut form.show_password, "Show password");
            ui.add_space(10.0);

            let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui
                .add_sized([ui.available_width(), 30.0], egui::Button::new("Sign in"))
                .clicked()
                || enter
            {
                submitted = true;
            }
        });

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Demo environment: any credentials are accepted.")
                .small()
                .color(widgets::MUTED),
        );
    });

    if submitted {
        app.log_in();
    }
}
