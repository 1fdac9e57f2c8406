use serde::{Deserialize, Serialize};

use crate::model::{AttackTechnique, Evidence, ReportCategory, Severity, Status, TimelineEntry};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub timestamp: String,
    pub severity: Severity,
    pub description: String,
    pub source: String,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub status: Status,
    pub timestamp: String,
    pub source: String,
    /// System or asset the incident is aimed at.
    #[serde(default)]
    pub target: String,
    pub description: String,
    #[serde(default)]
    pub affected_systems: Vec<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    /// Observed ATT&CK techniques.
    #[serde(default)]
    pub mitre: Vec<AttackTechnique>,
    #[serde(default)]
    pub evidence: Evidence,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub category: ReportCategory,
    /// "Automated" or "Manual".
    #[serde(rename = "type")]
    pub kind: String,
    pub generated: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<String>,
    pub format: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    pub id: String,
    pub name: String,
    /// Threat family, e.g. "Ransomware" or "Supply Chain".
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub last_updated: String,
    pub description: String,
    #[serde(default)]
    pub indicators: u32,
    #[serde(default)]
    pub related_incidents: u32,
}

/// A record carried through navigation into a detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Alert(Alert),
    Incident(Incident),
    Report(Report),
    Threat(Threat),
}

/// The fields a detail view needs, shared by every record kind.
pub trait Describable {
    fn kind_label(&self) -> &'static str;
    fn reference(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    fn severity(&self) -> Option<Severity> {
        None
    }

    fn status(&self) -> Option<Status> {
        None
    }

    fn timestamp(&self) -> Option<&str> {
        None
    }

    fn source(&self) -> Option<&str> {
        None
    }

    /// Kind-specific label/value rows shown below the common fields.
    fn details(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

impl Describable for Alert {
    fn kind_label(&self) -> &'static str {
        "Alert"
    }

    fn reference(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.description
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn status(&self) -> Option<Status> {
        Some(self.status)
    }

    fn timestamp(&self) -> Option<&str> {
        Some(&self.timestamp)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl Describable for Incident {
    fn kind_label(&self) -> &'static str {
        "Incident"
    }

    fn reference(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn status(&self) -> Option<Status> {
        Some(self.status)
    }

    fn timestamp(&self) -> Option<&str> {
        Some(&self.timestamp)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        if !self.target.is_empty() {
            rows.push(("Target", self.target.clone()));
        }
        if !self.affected_systems.is_empty() {
            rows.push(("Affected systems", self.affected_systems.join(", ")));
        }
        rows.push((
            "Assigned to",
            self.assigned_to.clone().unwrap_or_else(|| "Unassigned".into()),
        ));
        rows
    }
}

impl Describable for Report {
    fn kind_label(&self) -> &'static str {
        "Report"
    }

    fn reference(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn timestamp(&self) -> Option<&str> {
        Some(&self.generated)
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Category", self.category.label().to_string()),
            ("Type", self.kind.clone()),
            ("Format", self.format.clone()),
            ("Metrics", self.metrics.join(", ")),
        ]
    }
}

impl Describable for Threat {
    fn kind_label(&self) -> &'static str {
        "Threat"
    }

    fn reference(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn timestamp(&self) -> Option<&str> {
        Some(&self.last_updated)
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.kind.clone()),
            ("Indicators", self.indicators.to_string()),
            ("Related incidents", self.related_incidents.to_string()),
        ]
    }
}

impl Record {
    fn inner(&self) -> &dyn Describable {
        match self {
            Record::Alert(r) => r,
            Record::Incident(r) => r,
            Record::Report(r) => r,
            Record::Threat(r) => r,
        }
    }
}

impl Describable for Record {
    fn kind_label(&self) -> &'static str {
        self.inner().kind_label()
    }

    fn reference(&self) -> &str {
        self.inner().reference()
    }

    fn title(&self) -> &str {
        self.inner().title()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }

    fn severity(&self) -> Option<Severity> {
        self.inner().severity()
    }

    fn status(&self) -> Option<Status> {
        self.inner().status()
    }

    fn timestamp(&self) -> Option<&str> {
        self.inner().timestamp()
    }

    fn source(&self) -> Option<&str> {
        self.inner().source()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        self.inner().details()
    }
}

impl From<Alert> for Record {
    fn from(value: Alert) -> Self {
        Record::Alert(value)
    }
}

impl From<Incident> for Record {
    fn from(value: Incident) -> Self {
        Record::Incident(value)
    }
}

impl From<Report> for Record {
    fn from(value: Report) -> Self {
        Record::Report(value)
    }
}

impl From<Threat> for Record {
    fn from(value: Threat) -> Self {
        Record::Threat(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataCatalog;

    fn rows(record: &Record) -> Vec<(&'static str, String)> {
        record.details()
    }

    #[test]
    fn report_rows_cover_category_type_format_and_metrics() {
        let report: Record = DataCatalog::demo().reports[0].clone().into();
        assert_eq!(report.kind_label(), "Report");
        assert_eq!(report.reference(), "RPT-001");
        assert_eq!(report.timestamp(), Some("2023-11-01"));
        assert_eq!(report.severity(), None);
        assert_eq!(
            rows(&report),
            vec![
                ("Category", "Security".to_string()),
                ("Type", "Automated".to_string()),
                ("Format", "PDF".to_string()),
                (
                    "Metrics",
                    "Vulnerability Trends, Threat Detection Rate, Compliance Score".to_string()
                ),
            ]
        );
    }

    #[test]
    fn threat_rows_cover_type_and_counters() {
        let threat: Record = DataCatalog::demo().threats[0].clone().into();
        assert_eq!(threat.title(), "APT-29 Campaign");
        assert_eq!(threat.severity(), Some(Severity::Critical));
        assert_eq!(threat.status(), None);
        assert_eq!(
            rows(&threat),
            vec![
                ("Type", "Advanced Persistent Threat".to_string()),
                ("Indicators", "42".to_string()),
                ("Related incidents", "3".to_string()),
            ]
        );
    }

    #[test]
    fn incident_rows_mark_unassigned_owner() {
        let mut incident = DataCatalog::demo().incidents[0].clone();
        incident.assigned_to = None;
        incident.affected_systems.clear();
        let record: Record = incident.into();
        assert_eq!(
            rows(&record),
            vec![
                ("Target", "Authentication Server".to_string()),
                ("Assigned to", "Unassigned".to_string()),
            ]
        );
    }

    #[test]
    fn alert_has_no_extra_rows() {
        let alert: Record = DataCatalog::demo().alerts[0].clone().into();
        assert!(alert.details().is_empty());
        assert_eq!(alert.source(), Some("Email Security"));
    }
}
