use serde::{Deserialize, Serialize};

/// Network activity for one time bucket of the dashboard traffic chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSample {
    /// Bucket start, `HH:MM`.
    pub time: String,
    pub normal: u32,
    #[serde(default)]
    pub anomaly: u32,
}

/// Percent change in mean normal traffic from the earlier half of the
/// buckets to the later half. `None` below two buckets or when the earlier
/// half saw no traffic.
pub fn trend_percent(samples: &[TrafficSample]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let (earlier, later) = samples.split_at(samples.len() / 2);
    let before = mean_normal(earlier);
    if before == 0.0 {
        return None;
    }
    Some((mean_normal(later) - before) / before * 100.0)
}

pub fn total_anomalies(samples: &[TrafficSample]) -> u32 {
    samples.iter().map(|s| s.anomaly).sum()
}

fn mean_normal(samples: &[TrafficSample]) -> f64 {
    let sum: u64 = samples.iter().map(|s| u64::from(s.normal)).sum();
    sum as f64 / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: &str, normal: u32, anomaly: u32) -> TrafficSample {
        TrafficSample {
            time: time.into(),
            normal,
            anomaly,
        }
    }

    #[test]
    fn trend_compares_halves() {
        let samples = [
            sample("00:00", 40, 0),
            sample("06:00", 60, 1),
            sample("12:00", 75, 2),
            sample("18:00", 75, 0),
        ];
        let trend = trend_percent(&samples).unwrap();
        assert!((trend - 50.0).abs() < 1e-9);
        assert_eq!(total_anomalies(&samples), 3);
    }

    #[test]
    fn odd_bucket_counts_weight_the_later_half() {
        let samples = [sample("00:00", 100, 0), sample("08:00", 50, 0), sample("16:00", 50, 0)];
        let trend = trend_percent(&samples).unwrap();
        assert!((trend + 50.0).abs() < 1e-9);
    }

    #[test]
    fn trend_needs_a_baseline() {
        assert_eq!(trend_percent(&[]), None);
        assert_eq!(trend_percent(&[sample("00:00", 10, 0)]), None);
        assert_eq!(trend_percent(&[sample("00:00", 0, 4), sample("12:00", 10, 0)]), None);
    }
}
