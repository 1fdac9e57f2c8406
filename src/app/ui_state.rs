use crate::app::ViewId;
use crate::filter::FilterCriteria;
use crate::model::ResponseAction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    General,
    Security,
    Notifications,
    Data,
    Api,
    System,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 6] = [
        SettingsTab::General,
        SettingsTab::Security,
        SettingsTab::Notifications,
        SettingsTab::Data,
        SettingsTab::Api,
        SettingsTab::System,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Security => "Security",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Data => "Data Management",
            SettingsTab::Api => "API",
            SettingsTab::System => "System",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug];

    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

/// Session-only preferences edited on the settings page. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub notifications: bool,
    pub email_alerts: bool,
    pub auto_update: bool,
    pub two_factor: bool,
    pub dark_mode: bool,
    pub retention_days: u32,
    pub session_timeout_minutes: u32,
    pub log_level: LogLevel,
    pub api_key: String,
    pub reveal_api_key: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            email_alerts: true,
            auto_update: true,
            two_factor: true,
            dark_mode: true,
            retention_days: 90,
            session_timeout_minutes: 30,
            log_level: LogLevel::Info,
            api_key: "sk-demo-0000-0000-0000".into(),
            reveal_api_key: false,
        }
    }
}

/// Login inputs. Nothing here is checked or kept past the login screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub show_password: bool,
}

#[derive(Default)]
pub struct UiState {
    pub show_about: bool,
    pub last_error: Option<String>,

    pub login: LoginForm,
    pub alerts: FilterCriteria,
    pub incidents: FilterCriteria,
    pub threats: FilterCriteria,
    pub reports: FilterCriteria,
    pub settings_tab: SettingsTab,
    pub preferences: Preferences,

    /// Containment steps triggered from detail views this session.
    pub dispatched: Vec<ResponseAction>,
}

impl UiState {
    /// Page-local state returns to defaults when its page is (re)entered.
    pub fn reset_page(&mut self, view: ViewId) {
        match view {
            ViewId::Login => self.login = LoginForm::default(),
            ViewId::Alerts => self.alerts.clear(),
            ViewId::Incidents => self.incidents.clear(),
            ViewId::ThreatIntel => self.threats.clear(),
            ViewId::Reports => self.reports.clear(),
            ViewId::Settings => self.settings_tab = SettingsTab::default(),
            ViewId::Dashboard
            | ViewId::IncidentDetails
            | ViewId::ThreatDetails
            | ViewId::ReportDetails => {}
        }
    }
}
