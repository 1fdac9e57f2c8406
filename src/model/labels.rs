use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A label did not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Contribution of one unresolved item to the posture penalty.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Status {
    New,
    Active,
    Investigating,
    Contained,
    Mitigated,
    Resolved,
}

impl Status {
    pub const ALERT: [Status; 3] = [Status::New, Status::Investigating, Status::Resolved];

    pub const INCIDENT: [Status; 5] = [
        Status::Active,
        Status::Investigating,
        Status::Contained,
        Status::Mitigated,
        Status::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Active => "Active",
            Status::Investigating => "Investigating",
            Status::Contained => "Contained",
            Status::Mitigated => "Mitigated",
            Status::Resolved => "Resolved",
        }
    }

    /// Anything short of resolved still needs an analyst.
    pub fn is_open(self) -> bool {
        !matches!(self, Status::Resolved)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReportCategory {
    Security,
    Compliance,
    Incidents,
    Threats,
    Executive,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 5] = [
        ReportCategory::Security,
        ReportCategory::Compliance,
        ReportCategory::Incidents,
        ReportCategory::Threats,
        ReportCategory::Executive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportCategory::Security => "Security",
            ReportCategory::Compliance => "Compliance",
            ReportCategory::Incidents => "Incidents",
            ReportCategory::Threats => "Threats",
            ReportCategory::Executive => "Executive",
        }
    }
}

fn parse_label<T: Copy>(
    kind: &'static str,
    variants: &[T],
    label: fn(T) -> &'static str,
    raw: &str,
) -> Result<T, UnknownLabel> {
    let raw = raw.trim();
    variants
        .iter()
        .copied()
        .find(|v| label(*v).eq_ignore_ascii_case(raw))
        .ok_or_else(|| UnknownLabel {
            kind,
            value: raw.to_string(),
        })
}

impl FromStr for Severity {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("severity", &Severity::ALL, Severity::label, s)
    }
}

impl FromStr for Status {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [Status; 6] = [
            Status::New,
            Status::Active,
            Status::Investigating,
            Status::Contained,
            Status::Mitigated,
            Status::Resolved,
        ];
        parse_label("status", &ALL, Status::label, s)
    }
}

impl FromStr for ReportCategory {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("report category", &ReportCategory::ALL, ReportCategory::label, s)
    }
}

macro_rules! label_conversions {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl TryFrom<String> for $ty {
            type Error = UnknownLabel;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.label().to_string()
            }
        }
    )*};
}

label_conversions!(Severity, Status, ReportCategory);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("high".parse::<Severity>(), Ok(Severity::High));
        assert_eq!(" CRITICAL ".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!("investigating".parse::<Status>(), Ok(Status::Investigating));
        assert_eq!("Executive".parse::<ReportCategory>(), Ok(ReportCategory::Executive));
    }

    #[test]
    fn unknown_label_names_the_kind() {
        let err = "severe".parse::<Severity>().unwrap_err();
        assert_eq!(err.to_string(), "unknown severity 'severe'");
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Status::Contained).unwrap();
        assert_eq!(json, "\"Contained\"");
        let back: Severity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, Severity::Medium);
        assert!(serde_json::from_str::<ReportCategory>("\"misc\"").is_err());
    }

    #[test]
    fn only_resolved_is_closed() {
        assert!(!Status::Resolved.is_open());
        assert!(Status::Contained.is_open());
        assert!(Status::New.is_open());
    }
}
