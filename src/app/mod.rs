mod router;
mod run;
mod ui_state;

use crate::config::{AppConfig, Theme};
use crate::model::{DataCatalog, Describable, Record, ResponseAction, ResponseKind};
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info};

pub use router::{NavigationState, UnknownView, ViewId};
pub use run::run;
pub use ui_state::{LogLevel, LoginForm, Preferences, SettingsTab, UiState};

pub struct SentinelApp {
    pub nav: NavigationState,
    pub catalog: DataCatalog,
    pub catalog_path: Option<PathBuf>,
    pub ui: UiState,
    pub config: AppConfig,
}

impl Default for SentinelApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl eframe::App for SentinelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::render_app(ctx, self);
    }
}

impl SentinelApp {
    pub fn with_config(config: AppConfig) -> Self {
        let mut ui = UiState::default();
        ui.preferences.dark_mode = config.appearance.theme == Theme::Dark;
        Self {
            nav: NavigationState::new(),
            catalog: DataCatalog::demo(),
            catalog_path: None,
            ui,
            config,
        }
    }

    /// Route to `target`, resetting that page's local state if it is being
    /// entered from a different view.
    pub fn navigate(&mut self, target: ViewId, payload: Option<Record>) {
        let previous = self.nav.current_view();
        self.nav.navigate(target, payload);
        if previous != target {
            self.ui.reset_page(target);
        }
    }

    /// See [`NavigationState::navigate_to_id`].
    pub fn navigate_to_id(&mut self, id: &str) -> ViewId {
        let previous = self.nav.current_view();
        let entered = self.nav.navigate_to_id(id, None);
        if previous != entered {
            self.ui.reset_page(entered);
        }
        entered
    }

    /// Login is a plain transition; the form contents are discarded.
    pub fn log_in(&mut self) {
        debug!("login submitted");
        self.navigate(ViewId::Dashboard, None);
    }

    pub fn log_out(&mut self) {
        debug!("logout");
        self.navigate(ViewId::Login, None);
    }

    /// Replace the catalog. On failure the current catalog stays in place.
    pub fn load_catalog(&mut self, path: PathBuf) -> anyhow::Result<()> {
        self.ui.last_error = None;
        let catalog = crate::ingest::catalog::load(&path)?;
        self.catalog = catalog;
        self.catalog_path = Some(path);
        Ok(())
    }

    /// Back to the built-in catalog, dropping any load error still shown.
    pub fn use_sample_data(&mut self) {
        self.ui.last_error = None;
        self.catalog = DataCatalog::demo();
        self.catalog_path = None;
    }

    pub fn dispatch_response(&mut self, kind: ResponseKind, record: &Record) {
        let target = match record {
            Record::Incident(incident) if !incident.target.is_empty() => incident.target.as_str(),
            other => other.reference(),
        };
        let action = kind.action(target, crate::util::time::utc_time_of_day());
        info!(action = %action.action, target = %action.target, "response dispatched");
        self.ui.dispatched.push(action);
    }

    /// Session actions newest first, then the catalog's response history.
    pub fn response_log(&self) -> impl Iterator<Item = &ResponseAction> {
        self.ui
            .dispatched
            .iter()
            .rev()
            .chain(self.catalog.responses.iter())
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.ui.preferences.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;
    use crate::model::Severity;

    #[test]
    fn reentering_a_page_resets_its_filters() {
        let mut app = SentinelApp::default();
        app.log_in();
        app.navigate(ViewId::Alerts, None);
        app.ui.alerts = FilterCriteria::search("phish").with_severity(Severity::High);

        // Same view: state survives.
        app.navigate(ViewId::Alerts, None);
        assert_eq!(app.ui.alerts.search_text, "phish");

        app.navigate(ViewId::Dashboard, None);
        assert_eq!(app.ui.alerts.search_text, "phish");
        app.navigate(ViewId::Alerts, None);
        assert!(app.ui.alerts.is_default());
    }

    #[test]
    fn light_theme_config_starts_in_light_mode() {
        let mut config = AppConfig::default();
        config.appearance.theme = Theme::Light;
        let app = SentinelApp::with_config(config);
        assert!(!app.ui.preferences.dark_mode);
        assert!(!app.visuals().dark_mode);
    }

    #[test]
    fn dispatched_actions_lead_the_log() {
        let mut app = SentinelApp::default();
        let incident: Record = app.catalog.incidents[0].clone().into();
        app.dispatch_response(ResponseKind::IsolateHost, &incident);

        let first = app.response_log().next().unwrap();
        assert_eq!(first.action, "Host Isolated");
        assert_eq!(first.target, "Authentication Server");
        assert_eq!(app.response_log().count(), app.catalog.responses.len() + 1);
    }

    #[test]
    fn sample_data_clears_stale_load_error() {
        let mut app = SentinelApp::default();
        let dir = tempfile::tempdir().unwrap();
        let err = app.load_catalog(dir.path().join("gone.json")).unwrap_err();
        app.ui.last_error = Some(format!("{err:#}"));
        app.catalog.alerts.clear();

        app.use_sample_data();
        assert!(app.ui.last_error.is_none());
        assert_eq!(app.catalog, DataCatalog::demo());
        assert!(app.catalog_path.is_none());
    }

    #[test]
    fn failed_catalog_load_keeps_current_data() {
        let mut app = SentinelApp::default();
        let before = app.catalog.clone();
        let dir = tempfile::tempdir().unwrap();
        assert!(app.load_catalog(dir.path().join("gone.json")).is_err());
        assert_eq!(app.catalog, before);
        assert!(app.catalog_path.is_none());
    }
}
