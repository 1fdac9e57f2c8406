use crate::app::SentinelApp;
use eframe::egui;

pub fn run(app: SentinelApp) -> eframe::Result<()> {
    let window = &app.config.window;
    let title = window.title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(app.visuals());
            Box::new(app)
        }),
    )
}
