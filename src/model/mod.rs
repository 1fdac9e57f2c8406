mod analysis;
mod catalog;
mod labels;
mod record;
mod response;
mod traffic;

pub use analysis::{
    AttackTechnique, Evidence, FileHashes, NetworkIndicators, TimelineEntry, TimelineStatus,
};
pub use catalog::{DataCatalog, ScoreBand};
pub use labels::{ReportCategory, Severity, Status, UnknownLabel};
pub use record::{Alert, Describable, Incident, Record, Report, Threat};
pub use response::{ResponseAction, ResponseKind, ResponseStatus};
pub use traffic::{TrafficSample, total_anomalies, trend_percent};
