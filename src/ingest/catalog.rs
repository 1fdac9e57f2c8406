use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::model::DataCatalog;

/// Read a JSON catalog. Any list may be omitted; records must be well formed
/// and ids unique within their list.
pub fn load(path: &Path) -> Result<DataCatalog> {
    let data = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let catalog = parse(&data).with_context(|| format!("parse catalog {}", path.display()))?;
    info!(
        path = %path.display(),
        alerts = catalog.alerts.len(),
        incidents = catalog.incidents.len(),
        reports = catalog.reports.len(),
        threats = catalog.threats.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn parse(data: &str) -> Result<DataCatalog> {
    let catalog: DataCatalog = serde_json::from_str(data).context("decode catalog JSON")?;
    check_unique("alerts", catalog.alerts.iter().map(|r| r.id.as_str()))?;
    check_unique("incidents", catalog.incidents.iter().map(|r| r.id.as_str()))?;
    check_unique("reports", catalog.reports.iter().map(|r| r.id.as_str()))?;
    check_unique("threats", catalog.threats.iter().map(|r| r.id.as_str()))?;
    Ok(catalog)
}

fn check_unique<'a>(list: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            bail!("{list}: record with empty id");
        }
        if !seen.insert(id) {
            bail!("{list}: duplicate id {id}");
        }
    }
    Ok(())
}
