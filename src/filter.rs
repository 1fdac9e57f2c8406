//! List filtering for the alert, incident, report, and threat pages.
//!
//! A record passes when every active criterion matches (logical AND). The
//! text criterion is a case-insensitive substring test against the record's
//! designated search fields, satisfied by any one of them. Enum criteria are
//! case-insensitive equality against the record's facet value, with
//! [`Selection::All`] matching everything.

use std::fmt;

use crate::model::{Alert, Incident, Report, ReportCategory, Severity, Status, Threat};

/// Enum-valued field a criterion can select on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facet {
    Severity,
    Status,
    Category,
}

/// Records the filter can narrow.
pub trait Filterable {
    /// Fields the free-text criterion searches.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of an enum field, or `None` if this record kind has no such field.
    fn facet(&self, facet: Facet) -> Option<&str>;
}

/// One enum criterion: everything, or exactly one value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// `""` and `"all"` (any case) are the match-everything sentinel.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(raw.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// A record without the facet never satisfies an active selection.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value.is_some_and(|v| v.eq_ignore_ascii_case(wanted)),
        }
    }
}

impl From<Severity> for Selection {
    fn from(value: Severity) -> Self {
        Selection::Only(value.label().to_string())
    }
}

impl From<Status> for Selection {
    fn from(value: Status) -> Self {
        Selection::Only(value.label().to_string())
    }
}

impl From<ReportCategory> for Selection {
    fn from(value: ReportCategory) -> Self {
        Selection::Only(value.label().to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub severity: Selection,
    pub status: Selection,
    pub category: Selection,
}

impl FilterCriteria {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, severity: impl Into<Selection>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<Selection>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Selection>) -> Self {
        self.category = category.into();
        self
    }

    pub fn is_default(&self) -> bool {
        self.search_text.is_empty()
            && self.severity.is_all()
            && self.status.is_all()
            && self.category.is_all()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        let needle = self.search_text.to_lowercase();
        self.matches_with_needle(record, &needle)
    }

    fn matches_with_needle<R: Filterable + ?Sized>(&self, record: &R, needle: &str) -> bool {
        let text_ok = needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle));

        text_ok
            && self.severity.matches(record.facet(Facet::Severity))
            && self.status.matches(record.facet(Facet::Status))
            && self.category.matches(record.facet(Facet::Category))
    }
}

/// Matching records in input order. Never fails; no match is an empty vec.
pub fn apply<'a, R: Filterable>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    let needle = criteria.search_text.to_lowercase();
    records
        .iter()
        .filter(|r| criteria.matches_with_needle(*r, &needle))
        .collect()
}

/// Count line shown under a filtered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {}", self.shown, self.total)
    }
}

pub fn summarize<R: Filterable>(records: &[R], criteria: &FilterCriteria) -> FilterSummary {
    FilterSummary {
        shown: apply(records, criteria).len(),
        total: records.len(),
    }
}

impl Filterable for Alert {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Severity => Some(self.severity.label()),
            Facet::Status => Some(self.status.label()),
            Facet::Category => None,
        }
    }
}

impl Filterable for Incident {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.source.as_str(),
            self.target.as_str(),
        ]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Severity => Some(self.severity.label()),
            Facet::Status => Some(self.status.label()),
            Facet::Category => None,
        }
    }
}

impl Filterable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.label()),
            Facet::Severity | Facet::Status => None,
        }
    }
}

impl Filterable for Threat {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_str(),
            self.kind.as_str(),
        ]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Severity => Some(self.severity.label()),
            Facet::Status | Facet::Category => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::DataCatalog;

    fn alert(severity: Severity, status: Status, description: &str) -> Alert {
        Alert {
            id: description.to_string(),
            timestamp: "2024-01-15 14:23:45".into(),
            severity,
            description: description.into(),
            source: "Email Security".into(),
            status,
        }
    }

    fn pair() -> Vec<Alert> {
        vec![
            alert(Severity::High, Status::New, "phishing email"),
            alert(Severity::Low, Status::Resolved, "traffic spike"),
        ]
    }

    // ── Text criterion ──────────────────────────────────────────────────

    #[test]
    fn text_narrows_to_matching_record() {
        let records = pair();
        let out = apply(&records, &FilterCriteria::search("phish"));
        assert_eq!(out, vec![&records[0]]);
    }

    #[test]
    fn text_is_case_insensitive() {
        let records = pair();
        assert_eq!(
            apply(&records, &FilterCriteria::search("PHISH")),
            apply(&records, &FilterCriteria::search("phish")),
        );
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_needle() {
        let records = pair();
        assert!(apply(&records, &FilterCriteria::search("email ")).is_empty());
        assert!(apply(&records, &FilterCriteria::search("   ")).is_empty());
        assert_eq!(
            apply(&records, &FilterCriteria::search("phishing email")),
            vec![&records[0]]
        );
        assert_eq!(
            apply(&records, &FilterCriteria::search(" email")),
            vec![&records[0]]
        );
    }

    #[test]
    fn text_matches_any_designated_field() {
        let incidents = DataCatalog::demo().incidents;
        // "Workstation WS-42" is only the target of INC-002.
        let out = apply(&incidents, &FilterCriteria::search("ws-42"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "INC-002");

        // Source field.
        let out = apply(&incidents, &FilterCriteria::search("dlp system"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "INC-003");
    }

    #[test]
    fn alert_source_is_not_searched() {
        let records = pair();
        assert!(apply(&records, &FilterCriteria::search("email security")).is_empty());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let records = pair();
        assert!(apply(&records, &FilterCriteria::search("zzz-no-match")).is_empty());
    }

    #[test]
    fn empty_input_is_empty_output() {
        let records: Vec<Alert> = Vec::new();
        let criteria = FilterCriteria::search("x").with_severity(Severity::High);
        assert!(apply(&records, &criteria).is_empty());
    }

    // ── Enum criteria ───────────────────────────────────────────────────

    #[test]
    fn criteria_are_conjunctive() {
        let records = DataCatalog::demo().alerts;
        let criteria = FilterCriteria::default()
            .with_severity(Severity::High)
            .with_status(Status::New);
        let ids: Vec<&str> = apply(&records, &criteria)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, ["ALT-001", "ALT-004", "ALT-007"]);

        let narrower = criteria.with_status(Status::Resolved);
        assert!(apply(&records, &narrower).is_empty());
    }

    #[test]
    fn selection_compares_case_insensitively() {
        let records = pair();
        let criteria = FilterCriteria::default()
            .with_severity(Selection::parse("HIGH"))
            .with_status(Selection::parse("new"));
        assert_eq!(apply(&records, &criteria), vec![&records[0]]);
    }

    #[test]
    fn selection_sentinel_parsing() {
        assert_eq!(Selection::parse("all"), Selection::All);
        assert_eq!(Selection::parse("ALL"), Selection::All);
        assert_eq!(Selection::parse(""), Selection::All);
        assert_eq!(Selection::parse("high"), Selection::Only("high".into()));
    }

    #[test]
    fn missing_facet_fails_active_selection() {
        let reports = DataCatalog::demo().reports;
        let criteria = FilterCriteria::default().with_severity(Severity::High);
        assert!(apply(&reports, &criteria).is_empty());
    }

    #[test]
    fn reports_filter_by_category_and_text() {
        let reports = DataCatalog::demo().reports;
        let criteria = FilterCriteria::default().with_category(ReportCategory::Security);
        assert_eq!(apply(&reports, &criteria).len(), 2);

        let criteria = criteria.with_category(Selection::parse("compliance"));
        let out = apply(&reports, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "RPT-002");
    }

    #[test]
    fn threats_search_name_description_and_type() {
        let threats = DataCatalog::demo().threats;
        assert_eq!(apply(&threats, &FilterCriteria::search("supply chain")).len(), 1);
        assert_eq!(apply(&threats, &FilterCriteria::search("ransomware")).len(), 1);
        assert_eq!(apply(&threats, &FilterCriteria::search("financial")).len(), 2);
    }

    #[test]
    fn summary_renders_count_line() {
        let records = DataCatalog::demo().alerts;
        let summary = summarize(&records, &FilterCriteria::default().with_severity(Severity::Low));
        assert_eq!(summary, FilterSummary { shown: 2, total: 8 });
        assert_eq!(summary.to_string(), "Showing 2 of 8");
    }

    #[test]
    fn default_detection() {
        let mut criteria = FilterCriteria::search("x").with_status(Status::New);
        assert!(!criteria.is_default());
        criteria.clear();
        assert!(criteria.is_default());
        assert!(FilterCriteria::search("").is_default());
        assert!(!FilterCriteria::search("  ").is_default());
    }

    // ── Properties ──────────────────────────────────────────────────────

    fn arb_alert() -> impl Strategy<Value = Alert> {
        let severity = prop::sample::select(Severity::ALL.to_vec());
        let status = prop::sample::select(Status::ALERT.to_vec());
        ("[a-zA-Z ]{0,24}", severity, status)
            .prop_map(|(text, severity, status)| alert(severity, status, &text))
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        let severity = prop_oneof![
            Just(Selection::All),
            prop::sample::select(Severity::ALL.to_vec()).prop_map(Selection::from),
        ];
        let status = prop_oneof![
            Just(Selection::All),
            prop::sample::select(Status::ALERT.to_vec()).prop_map(Selection::from),
        ];
        ("[a-zA-Z]{0,3}", severity, status).prop_map(|(text, severity, status)| {
            FilterCriteria::search(text)
                .with_severity(severity)
                .with_status(status)
        })
    }

    proptest! {
        #[test]
        fn default_criteria_is_identity(records in prop::collection::vec(arb_alert(), 0..32)) {
            let out = apply(&records, &FilterCriteria::default());
            let expected: Vec<&Alert> = records.iter().collect();
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn output_preserves_input_order(
            records in prop::collection::vec(arb_alert(), 0..32),
            criteria in arb_criteria(),
        ) {
            let out = apply(&records, &criteria);
            let positions: Vec<usize> = out
                .iter()
                .map(|r| records.iter().position(|x| std::ptr::eq(x, *r)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn apply_agrees_with_matches(
            records in prop::collection::vec(arb_alert(), 0..32),
            criteria in arb_criteria(),
        ) {
            let out = apply(&records, &criteria);
            let expected: Vec<&Alert> = records.iter().filter(|r| criteria.matches(*r)).collect();
            prop_assert_eq!(&out, &expected);
            prop_assert_eq!(out, apply(&records, &criteria));
        }
    }
}
