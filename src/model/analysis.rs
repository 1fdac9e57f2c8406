//! Investigation data attached to an incident: what happened when, which
//! ATT&CK techniques were observed, and the collected evidence.

use serde::{Deserialize, Serialize};

/// Stage marker for one timeline event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    Detected,
    Critical,
    Blocked,
    Analyzed,
    Contained,
}

impl TimelineStatus {
    pub fn label(self) -> &'static str {
        match self {
            TimelineStatus::Detected => "detected",
            TimelineStatus::Critical => "critical",
            TimelineStatus::Blocked => "blocked",
            TimelineStatus::Analyzed => "analyzed",
            TimelineStatus::Contained => "contained",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Wall-clock time of day, `HH:MM:SS`.
    pub time: String,
    pub event: String,
    pub status: TimelineStatus,
}

/// One MITRE ATT&CK technique, e.g. `T1566` Phishing under Initial Access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackTechnique {
    pub id: String,
    pub name: String,
    pub tactic: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkIndicators {
    pub source_ip: String,
    pub destination: String,
    pub protocol: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHashes {
    pub md5: String,
    pub sha256: String,
}

/// Evidence & analysis panel. Either half may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evidence {
    pub network: Option<NetworkIndicators>,
    pub hashes: Option<FileHashes>,
}

impl Evidence {
    pub fn is_empty(&self) -> bool {
        self.network.is_none() && self.hashes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_status_uses_lowercase_names() {
        let entry: TimelineEntry = serde_json::from_str(
            r#"{"time": "14:24:30", "event": "Payload execution blocked", "status": "blocked"}"#,
        )
        .unwrap();
        assert_eq!(entry.status, TimelineStatus::Blocked);
        assert_eq!(entry.status.label(), "blocked");
        assert!(serde_json::from_str::<TimelineStatus>("\"escalated\"").is_err());
    }

    #[test]
    fn evidence_halves_are_optional() {
        let evidence: Evidence =
            serde_json::from_str(r#"{"hashes": {"md5": "a", "sha256": "b"}}"#).unwrap();
        assert!(evidence.network.is_none());
        assert_eq!(evidence.hashes.as_ref().map(|h| h.md5.as_str()), Some("a"));
        assert!(!evidence.is_empty());
        assert!(Evidence::default().is_empty());
    }
}
