use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::model::{Describable, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Dashboard,
    Alerts,
    Incidents,
    IncidentDetails,
    ThreatIntel,
    ThreatDetails,
    Reports,
    ReportDetails,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}'")]
pub struct UnknownView(pub String);

impl ViewId {
    pub const ALL: [ViewId; 10] = [
        ViewId::Login,
        ViewId::Dashboard,
        ViewId::Alerts,
        ViewId::Incidents,
        ViewId::IncidentDetails,
        ViewId::ThreatIntel,
        ViewId::ThreatDetails,
        ViewId::Reports,
        ViewId::ReportDetails,
        ViewId::Settings,
    ];

    /// Sidebar menu, top to bottom.
    pub const SIDEBAR: [ViewId; 6] = [
        ViewId::Dashboard,
        ViewId::Alerts,
        ViewId::Incidents,
        ViewId::ThreatIntel,
        ViewId::Reports,
        ViewId::Settings,
    ];

    /// Where unknown targets land.
    pub const HOME: ViewId = ViewId::Dashboard;

    pub fn id(self) -> &'static str {
        match self {
            ViewId::Login => "login",
            ViewId::Dashboard => "dashboard",
            ViewId::Alerts => "alerts",
            ViewId::Incidents => "incidents",
            ViewId::IncidentDetails => "incident-details",
            ViewId::ThreatIntel => "threat-intel",
            ViewId::ThreatDetails => "threat-details",
            ViewId::Reports => "reports",
            ViewId::ReportDetails => "report-details",
            ViewId::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewId::Login => "Login",
            ViewId::Dashboard => "Dashboard",
            ViewId::Alerts => "Alerts",
            ViewId::Incidents => "Incidents",
            ViewId::IncidentDetails => "Incident Analysis",
            ViewId::ThreatIntel => "Threat Intelligence",
            ViewId::ThreatDetails => "Threat Details",
            ViewId::Reports => "Reports",
            ViewId::ReportDetails => "Report Details",
            ViewId::Settings => "Settings",
        }
    }

    pub fn is_detail(self) -> bool {
        matches!(
            self,
            ViewId::IncidentDetails | ViewId::ThreatDetails | ViewId::ReportDetails
        )
    }

    /// Sidebar entry highlighted while this view is shown.
    pub fn sidebar_anchor(self) -> Option<ViewId> {
        match self {
            ViewId::Login => None,
            ViewId::IncidentDetails => Some(ViewId::Incidents),
            ViewId::ThreatDetails => Some(ViewId::ThreatIntel),
            ViewId::ReportDetails => Some(ViewId::Reports),
            other => Some(other),
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        ViewId::ALL
            .into_iter()
            .find(|v| v.id().eq_ignore_ascii_case(raw))
            .ok_or_else(|| UnknownView(raw.to_string()))
    }
}

/// Which view is active and which record, if any, travels with it.
///
/// `selected_record` is never cleared by navigation: a payload-less
/// navigate keeps whatever was selected last, even across unrelated views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current_view: ViewId,
    selected_record: Option<Record>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_view: ViewId::Login,
            selected_record: None,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.selected_record.as_ref()
    }

    pub fn navigate(&mut self, target: ViewId, payload: Option<Record>) {
        debug!(
            from = %self.current_view,
            to = %target,
            payload = payload.as_ref().map(|r| r.reference()),
            "navigate"
        );
        self.current_view = target;
        if let Some(record) = payload {
            self.selected_record = Some(record);
        }
    }

    /// String entry point; unknown ids are redirected to [`ViewId::HOME`].
    /// Returns the view actually entered.
    pub fn navigate_to_id(&mut self, id: &str, payload: Option<Record>) -> ViewId {
        let target = match id.parse::<ViewId>() {
            Ok(view) => view,
            Err(err) => {
                warn!(%err, home = %ViewId::HOME, "redirecting unknown navigation target");
                ViewId::HOME
            }
        };
        self.navigate(target, payload);
        target
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::DataCatalog;

    fn some_alert() -> Record {
        Record::Alert(DataCatalog::demo().alerts[0].clone())
    }

    #[test]
    fn starts_at_login_with_nothing_selected() {
        let nav = NavigationState::new();
        assert_eq!(nav.current_view(), ViewId::Login);
        assert!(nav.selected_record().is_none());
    }

    #[test]
    fn payload_carries_over_payloadless_navigation() {
        let mut nav = NavigationState::new();
        let rec = some_alert();

        nav.navigate(ViewId::Alerts, None);
        nav.navigate(ViewId::IncidentDetails, Some(rec.clone()));
        assert_eq!(nav.selected_record(), Some(&rec));

        nav.navigate(ViewId::Dashboard, None);
        assert_eq!(nav.current_view(), ViewId::Dashboard);
        assert_eq!(nav.selected_record(), Some(&rec));
    }

    #[test]
    fn new_payload_replaces_old() {
        let mut nav = NavigationState::new();
        let catalog = DataCatalog::demo();
        nav.navigate(ViewId::IncidentDetails, Some(catalog.alerts[0].clone().into()));
        let incident: Record = catalog.incidents[1].clone().into();
        nav.navigate(ViewId::IncidentDetails, Some(incident.clone()));
        assert_eq!(nav.selected_record(), Some(&incident));
    }

    #[test]
    fn ids_round_trip_through_parse() {
        for view in ViewId::ALL {
            assert_eq!(view.id().parse::<ViewId>(), Ok(view));
        }
        assert_eq!("Threat-Intel".parse::<ViewId>(), Ok(ViewId::ThreatIntel));
    }

    #[test]
    fn unknown_id_redirects_home() {
        let mut nav = NavigationState::new();
        let rec = some_alert();
        nav.navigate(ViewId::IncidentDetails, Some(rec.clone()));

        let entered = nav.navigate_to_id("network-map", None);
        assert_eq!(entered, ViewId::HOME);
        assert_eq!(nav.current_view(), ViewId::Dashboard);
        assert_eq!(nav.selected_record(), Some(&rec));
        assert_eq!(
            "network-map".parse::<ViewId>(),
            Err(UnknownView("network-map".into()))
        );
    }

    #[test]
    fn detail_views_anchor_to_their_lists() {
        assert!(ViewId::IncidentDetails.is_detail());
        assert!(!ViewId::Incidents.is_detail());
        assert_eq!(ViewId::ReportDetails.sidebar_anchor(), Some(ViewId::Reports));
        assert_eq!(ViewId::Settings.sidebar_anchor(), Some(ViewId::Settings));
        assert_eq!(ViewId::Login.sidebar_anchor(), None);
        for view in ViewId::SIDEBAR {
            assert!(!view.is_detail());
        }
    }

    fn arb_view() -> impl Strategy<Value = ViewId> {
        prop::sample::select(ViewId::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn every_view_reaches_every_view(a in arb_view(), b in arb_view()) {
            let mut nav = NavigationState::new();
            nav.navigate(a, None);
            nav.navigate(b, None);
            prop_assert_eq!(nav.current_view(), b);
        }

        #[test]
        fn navigation_never_clears_selection(path in prop::collection::vec(arb_view(), 1..16)) {
            let mut nav = NavigationState::new();
            let rec = some_alert();
            nav.navigate(ViewId::IncidentDetails, Some(rec.clone()));
            for view in &path {
                nav.navigate(*view, None);
            }
            prop_assert_eq!(nav.current_view(), *path.last().unwrap());
            prop_assert_eq!(nav.selected_record(), Some(&rec));
        }
    }
}
