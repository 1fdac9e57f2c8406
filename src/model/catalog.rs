use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::model::{
    Alert, AttackTechnique, Evidence, FileHashes, Incident, NetworkIndicators, Report,
    ReportCategory, ResponseAction, ResponseStatus, Severity, Status, Threat, TimelineEntry,
    TimelineStatus, TrafficSample,
};

/// Posture band of the dashboard gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Warning,
    Critical,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Good
        } else if score >= 60 {
            ScoreBand::Warning
        } else {
            ScoreBand::Critical
        }
    }
}

/// Immutable record lists shown by the list pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataCatalog {
    pub alerts: Vec<Alert>,
    pub incidents: Vec<Incident>,
    pub reports: Vec<Report>,
    pub threats: Vec<Threat>,
    pub responses: Vec<ResponseAction>,
    /// Buckets for the dashboard traffic chart, oldest first.
    pub traffic: Vec<TrafficSample>,
}

impl DataCatalog {
    pub fn len(&self) -> usize {
        self.alerts.len() + self.incidents.len() + self.reports.len() + self.threats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `n` alerts, newest first. Alerts with unparseable timestamps
    /// sort last and keep their catalog order.
    pub fn recent_alerts(&self, n: usize) -> Vec<&Alert> {
        let mut alerts: Vec<&Alert> = self.alerts.iter().collect();
        alerts.sort_by_key(|a| Reverse(crate::util::time::parse_timestamp(&a.timestamp)));
        alerts.truncate(n);
        alerts
    }

    pub fn open_incidents(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter().filter(|i| i.status.is_open())
    }

    pub fn open_alert_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.status.is_open()).count()
    }

    /// 100 minus the severity weight of every unresolved alert and incident.
    pub fn security_score(&self) -> u8 {
        let alerts = self
            .alerts
            .iter()
            .filter(|a| a.status.is_open())
            .map(|a| a.severity.weight());
        let incidents = self.open_incidents().map(|i| i.severity.weight());
        let penalty: u32 = alerts.chain(incidents).sum();
        100u32.saturating_sub(penalty) as u8
    }

    pub fn demo() -> Self {
        Self {
            alerts: demo_alerts(),
            incidents: demo_incidents(),
            reports: demo_reports(),
            threats: demo_threats(),
            responses: demo_responses(),
            traffic: demo_traffic(),
        }
    }
}

fn alert(
    id: &str,
    timestamp: &str,
    severity: Severity,
    description: &str,
    source: &str,
    status: Status,
) -> Alert {
    Alert {
        id: id.into(),
        timestamp: timestamp.into(),
        severity,
        description: description.into(),
        source: source.into(),
        status,
    }
}

fn demo_alerts() -> Vec<Alert> {
    use Severity::*;
    use Status::*;
    vec![
        alert(
            "ALT-001",
            "2024-01-15 14:23:45",
            High,
            "Suspicious phishing email detected targeting finance department",
            "Email Security",
            New,
        ),
        alert(
            "ALT-002",
            "2024-01-15 14:21:30",
            Medium,
            "Multiple failed login attempts from external IP address",
            "Network Security",
            Investigating,
        ),
        alert(
            "ALT-003",
            "2024-01-15 14:19:15",
            Low,
            "Unusual network traffic pattern detected on subnet 192.168.1.0/24",
            "Network Monitor",
            Resolved,
        ),
        alert(
            "ALT-004",
            "2024-01-15 14:17:22",
            High,
            "Malware signature match found in downloaded file",
            "Endpoint Protection",
            New,
        ),
        alert(
            "ALT-005",
            "2024-01-15 14:15:08",
            Medium,
            "Unauthorized access attempt to admin panel",
            "Web Application Firewall",
            Investigating,
        ),
        alert(
            "ALT-006",
            "2024-01-15 14:12:45",
            Low,
            "Certificate expiration warning for internal services",
            "Certificate Manager",
            Resolved,
        ),
        alert(
            "ALT-007",
            "2024-01-15 14:10:33",
            High,
            "Potential data exfiltration attempt detected",
            "Data Loss Prevention",
            New,
        ),
        alert(
            "ALT-008",
            "2024-01-15 14:08:19",
            Medium,
            "Suspicious PowerShell execution detected on workstation",
            "Endpoint Detection",
            Investigating,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn incident(
    id: &str,
    title: &str,
    severity: Severity,
    status: Status,
    timestamp: &str,
    source: &str,
    target: &str,
    description: &str,
    affected: &[&str],
    assigned_to: &str,
) -> Incident {
    Incident {
        id: id.into(),
        title: title.into(),
        severity,
        status,
        timestamp: timestamp.into(),
        source: source.into(),
        target: target.into(),
        description: description.into(),
        affected_systems: affected.iter().map(|s| s.to_string()).collect(),
        assigned_to: Some(assigned_to.into()),
        timeline: Vec::new(),
        mitre: Vec::new(),
        evidence: Evidence::default(),
    }
}

fn investigated(
    mut incident: Incident,
    timeline: &[(&str, &str, TimelineStatus)],
    mitre: &[(&str, &str, &str)],
    evidence: Evidence,
) -> Incident {
    incident.timeline = timeline
        .iter()
        .map(|&(time, event, status)| TimelineEntry {
            time: time.into(),
            event: event.into(),
            status,
        })
        .collect();
    incident.mitre = mitre
        .iter()
        .map(|&(id, name, tactic)| AttackTechnique {
            id: id.into(),
            name: name.into(),
            tactic: tactic.into(),
        })
        .collect();
    incident.evidence = evidence;
    incident
}

fn demo_incidents() -> Vec<Incident> {
    use Severity::*;
    use Status::*;
    vec![
        incident(
            "INC-001",
            "Unauthorized Access Attempt",
            Critical,
            Active,
            "2023-11-01T14:32:00",
            "Firewall",
            "Authentication Server",
            "Multiple failed login attempts from suspicious IP addresses targeting admin accounts.",
            &["Authentication Server", "User Database"],
            "Sarah Chen",
        ),
        investigated(
            incident(
                "INC-002",
                "Malware Detection",
                High,
                Investigating,
                "2023-10-31T09:15:00",
                "Endpoint Protection",
                "Workstation WS-42",
                "Trojan detected on marketing department workstation. Initial analysis suggests phishing email vector.",
                &["Workstation WS-42"],
                "Michael Rodriguez",
            ),
            &[
                ("14:23:45", "Suspicious email detected", TimelineStatus::Detected),
                ("14:24:12", "User clicked malicious link", TimelineStatus::Critical),
                ("14:24:30", "Payload execution blocked", TimelineStatus::Blocked),
                ("14:25:01", "Network traffic analyzed", TimelineStatus::Analyzed),
                ("14:25:45", "Host isolated from network", TimelineStatus::Contained),
            ],
            &[
                ("T1566", "Phishing", "Initial Access"),
                ("T1204", "User Execution", "Execution"),
                ("T1055", "Process Injection", "Defense Evasion"),
                ("T1083", "File and Directory Discovery", "Discovery"),
            ],
            Evidence {
                network: Some(NetworkIndicators {
                    source_ip: "192.168.1.45".into(),
                    destination: "malicious-site.com".into(),
                    protocol: "HTTPS".into(),
                }),
                hashes: Some(FileHashes {
                    md5: "d41d8cd98f00b204e9800998ecf8427e".into(),
                    sha256: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
                        .into(),
                }),
            },
        ),
        investigated(
            incident(
                "INC-003",
                "Data Exfiltration Alert",
                Critical,
                Contained,
                "2023-10-30T23:05:00",
                "DLP System",
                "File Server",
                "Unusual data transfer detected from finance department file server to external IP address.",
                &["File Server", "Finance Database"],
                "Alex Johnson",
            ),
            &[
                ("23:05:12", "Outbound transfer volume spike", TimelineStatus::Detected),
                ("23:07:40", "Archive staged on file server", TimelineStatus::Critical),
                ("23:11:03", "Egress blocked at perimeter", TimelineStatus::Blocked),
                ("23:30:00", "File server quarantined", TimelineStatus::Contained),
            ],
            &[
                ("T1560", "Archive Collected Data", "Collection"),
                ("T1041", "Exfiltration Over C2 Channel", "Exfiltration"),
            ],
            Evidence {
                network: Some(NetworkIndicators {
                    source_ip: "10.20.4.17".into(),
                    destination: "203.0.113.52".into(),
                    protocol: "HTTPS".into(),
                }),
                hashes: None,
            },
        ),
        incident(
            "INC-004",
            "Suspicious API Calls",
            Medium,
            Resolved,
            "2023-10-28T16:47:00",
            "API Gateway",
            "Customer Database",
            "Abnormal pattern of API calls attempting to extract customer records. Rate limiting engaged.",
            &["API Gateway", "Customer Database"],
            "Jamie Taylor",
        ),
        incident(
            "INC-005",
            "Ransomware Outbreak",
            Critical,
            Mitigated,
            "2023-10-25T08:30:00",
            "Email Gateway",
            "Multiple Systems",
            "Ransomware detected in accounting department. Isolated affected systems and initiated recovery protocols.",
            &["Accounting Workstations", "Department File Share"],
            "Chris Washington",
        ),
        incident(
            "INC-006",
            "DDoS Attack",
            High,
            Resolved,
            "2023-10-22T11:20:00",
            "Web Application Firewall",
            "Public Website",
            "Distributed denial of service attack targeting company website. Mitigation measures successfully deployed.",
            &["Web Servers", "Load Balancers"],
            "Robin Patel",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    title: &str,
    category: ReportCategory,
    kind: &str,
    generated: &str,
    description: &str,
    metrics: &[&str],
    format: &str,
) -> Report {
    Report {
        id: id.into(),
        title: title.into(),
        category,
        kind: kind.into(),
        generated: generated.into(),
        description: description.into(),
        metrics: metrics.iter().map(|s| s.to_string()).collect(),
        format: format.into(),
    }
}

fn demo_reports() -> Vec<Report> {
    use ReportCategory::*;
    vec![
        report(
            "RPT-001",
            "Monthly Security Posture Assessment",
            Security,
            "Automated",
            "2023-11-01",
            "Comprehensive analysis of security posture including vulnerabilities, threats, and compliance status.",
            &["Vulnerability Trends", "Threat Detection Rate", "Compliance Score"],
            "PDF",
        ),
        report(
            "RPT-002",
            "Quarterly Compliance Report",
            Compliance,
            "Manual",
            "2023-10-15",
            "Detailed compliance status against industry standards including GDPR, HIPAA, and PCI DSS.",
            &["Compliance Score", "Control Effectiveness", "Remediation Progress"],
            "XLSX",
        ),
        report(
            "RPT-003",
            "Incident Response Summary",
            Incidents,
            "Automated",
            "2023-10-28",
            "Summary of security incidents, response actions taken, and resolution metrics.",
            &["MTTR", "Incident Volume", "Impact Assessment"],
            "PDF",
        ),
        report(
            "RPT-004",
            "Threat Intelligence Briefing",
            Threats,
            "Automated",
            "2023-10-30",
            "Analysis of current threat landscape and potential impacts to organizational assets.",
            &["Threat Severity", "Geographic Distribution", "Attack Vector Analysis"],
            "PDF",
        ),
        report(
            "RPT-005",
            "Vulnerability Management Report",
            Security,
            "Automated",
            "2023-10-25",
            "Status of vulnerability remediation efforts and risk exposure metrics.",
            &["Open Vulnerabilities", "Remediation Rate", "Risk Exposure Score"],
            "XLSX",
        ),
        report(
            "RPT-006",
            "Executive Security Summary",
            Executive,
            "Manual",
            "2023-10-20",
            "High-level overview of security posture and key metrics for executive leadership.",
            &["Security Score", "Risk Trend", "Major Incidents"],
            "PPTX",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn threat(
    id: &str,
    name: &str,
    kind: &str,
    severity: Severity,
    last_updated: &str,
    description: &str,
    indicators: u32,
    related_incidents: u32,
) -> Threat {
    Threat {
        id: id.into(),
        name: name.into(),
        kind: kind.into(),
        severity,
        last_updated: last_updated.into(),
        description: description.into(),
        indicators,
        related_incidents,
    }
}

fn demo_threats() -> Vec<Threat> {
    use Severity::*;
    vec![
        threat(
            "THR-001",
            "APT-29 Campaign",
            "Advanced Persistent Threat",
            Critical,
            "2 hours ago",
            "Sophisticated state-sponsored threat actor targeting government and defense sectors with spear-phishing campaigns.",
            42,
            3,
        ),
        threat(
            "THR-002",
            "Ransomware-as-a-Service: BlackCat",
            "Ransomware",
            High,
            "1 day ago",
            "Emerging RaaS operation with sophisticated encryption and double extortion techniques targeting financial institutions.",
            28,
            5,
        ),
        threat(
            "THR-003",
            "CVE-2023-XXXX Exploitation",
            "Vulnerability",
            High,
            "3 days ago",
            "Active exploitation of critical remote code execution vulnerability in widely used enterprise software.",
            17,
            2,
        ),
        threat(
            "THR-004",
            "DDoS Campaign: Financial Sector",
            "DDoS",
            Medium,
            "5 days ago",
            "Coordinated distributed denial of service attacks targeting financial institutions across North America.",
            31,
            8,
        ),
        threat(
            "THR-005",
            "Supply Chain Compromise: DevTools",
            "Supply Chain",
            Critical,
            "1 week ago",
            "Sophisticated supply chain attack targeting development tools used in critical infrastructure sectors.",
            53,
            12,
        ),
    ]
}

fn demo_responses() -> Vec<ResponseAction> {
    let done = |action: &str, target: &str, timestamp: &str, description: &str| ResponseAction {
        action: action.into(),
        target: target.into(),
        timestamp: timestamp.into(),
        status: ResponseStatus::Completed,
        description: description.into(),
    };
    vec![
        done(
            "IP Address Blocked",
            "192.168.1.45",
            "14:23:45",
            "Malicious IP blocked from accessing network",
        ),
        done(
            "Host Isolated",
            "DESKTOP-ABC123",
            "14:22:30",
            "Compromised host isolated from network",
        ),
        done(
            "User Account Disabled",
            "john.doe@company.com",
            "14:21:15",
            "Suspicious user account temporarily disabled",
        ),
        done(
            "Malware Quarantined",
            "suspicious_file.exe",
            "14:20:05",
            "Malicious file moved to secure quarantine",
        ),
    ]
}

fn demo_traffic() -> Vec<TrafficSample> {
    [
        ("00:00", 45, 2),
        ("04:00", 30, 1),
        ("08:00", 75, 0),
        ("12:00", 85, 3),
        ("16:00", 95, 5),
        ("20:00", 60, 1),
    ]
    .into_iter()
    .map(|(time, normal, anomaly)| TrafficSample {
        time: time.into(),
        normal,
        anomaly,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_has_every_list() {
        let c = DataCatalog::demo();
        assert_eq!(c.alerts.len(), 8);
        assert_eq!(c.incidents.len(), 6);
        assert_eq!(c.reports.len(), 6);
        assert_eq!(c.threats.len(), 5);
        assert_eq!(c.len(), 25);
        assert!(!c.responses.is_empty());
    }

    #[test]
    fn demo_carries_investigation_and_traffic() {
        let c = DataCatalog::demo();
        let malware = &c.incidents[1];
        assert_eq!(malware.id, "INC-002");
        assert_eq!(malware.timeline.len(), 5);
        assert_eq!(malware.timeline[1].status, TimelineStatus::Critical);
        assert_eq!(malware.mitre.len(), 4);
        assert!(malware.evidence.network.is_some() && malware.evidence.hashes.is_some());
        assert!(c.incidents[0].timeline.is_empty() && c.incidents[0].evidence.is_empty());

        let trend = crate::model::trend_percent(&c.traffic).unwrap();
        assert!((trend - 60.0).abs() < 1e-9);
        assert_eq!(crate::model::total_anomalies(&c.traffic), 12);
    }

    #[test]
    fn recent_alerts_are_newest_first() {
        let mut c = DataCatalog::demo();
        c.alerts.reverse();
        let recent = c.recent_alerts(3);
        let ids: Vec<&str> = recent.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["ALT-001", "ALT-002", "ALT-003"]);
    }

    #[test]
    fn unparseable_timestamps_sort_last() {
        let mut c = DataCatalog::demo();
        c.alerts[0].timestamp = "yesterday".into();
        let recent = c.recent_alerts(usize::MAX);
        assert_eq!(recent.last().map(|a| a.id.as_str()), Some("ALT-001"));
    }

    #[test]
    fn open_counts_skip_resolved() {
        let c = DataCatalog::demo();
        assert_eq!(c.open_alert_count(), 6);
        assert_eq!(c.open_incidents().count(), 4);
    }

    #[test]
    fn score_drops_with_open_work_and_clamps() {
        assert_eq!(DataCatalog::default().security_score(), 100);

        let demo = DataCatalog::demo();
        assert_eq!(demo.security_score(), 70);
        assert_eq!(ScoreBand::for_score(70), ScoreBand::Warning);

        let mut flooded = demo.clone();
        for _ in 0..10 {
            flooded.incidents.extend(demo.incidents.clone());
        }
        assert_eq!(flooded.security_score(), 0);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Critical);
    }

    #[test]
    fn score_bands_follow_thresholds() {
        assert_eq!(ScoreBand::for_score(94), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(80), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(79), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::Critical);
    }
}
