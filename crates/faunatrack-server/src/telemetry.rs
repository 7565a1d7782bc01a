// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

pub const METRIC_SUBSYSTEM: &str = "faunatrack";
pub const METRIC_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-route request counters and raw latency samples. Samples are kept
/// unbucketed and reduced to quantiles at scrape time.
#[derive(Default)]
pub struct RequestMetrics {
    pub requests_total: AtomicU64,
    pub sightings_created_total: AtomicU64,
    responses_by_route_status: Mutex<HashMap<(String, u16), u64>>,
    latency_ns_by_route: Mutex<HashMap<String, Vec<u64>>>,
}

pub(crate) fn percentile_ns(values: &[u64], pct: f64) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let mut v = values.to_vec();
    v.sort_unstable();
    let idx = ((v.len() as f64 - 1.0) * pct).round() as usize;
    v[idx]
}

impl RequestMetrics {
    pub async fn observe_request(&self, route: &str, status: StatusCode, elapsed: Duration) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        {
            let mut by = self.responses_by_route_status.lock().await;
            *by.entry((route.to_string(), status.as_u16())).or_insert(0) += 1;
        }
        let mut latency = self.latency_ns_by_route.lock().await;
        let samples = latency.entry(route.to_string()).or_default();
        // Bound memory on long-lived processes; newest samples win.
        if samples.len() >= 4096 {
            samples.remove(0);
        }
        samples.push(elapsed.as_nanos() as u64);
    }

    /// Prometheus text exposition for `/metrics`.
    pub async fn render(&self) -> String {
        let mut body = String::new();
        body.push_str(&format!(
            "# HELP {METRIC_SUBSYSTEM}_build_info build metadata\n\
             # TYPE {METRIC_SUBSYSTEM}_build_info gauge\n\
             {METRIC_SUBSYSTEM}_build_info{{version=\"{METRIC_VERSION}\"}} 1\n"
        ));
        body.push_str(&format!(
            "# TYPE {METRIC_SUBSYSTEM}_requests_total counter\n{METRIC_SUBSYSTEM}_requests_total {}\n",
            self.requests_total.load(Ordering::Relaxed)
        ));
        body.push_str(&format!(
            "# TYPE {METRIC_SUBSYSTEM}_sightings_created_total counter\n{METRIC_SUBSYSTEM}_sightings_created_total {}\n",
            self.sightings_created_total.load(Ordering::Relaxed)
        ));

        {
            let by = self.responses_by_route_status.lock().await;
            let mut rows: Vec<_> = by.iter().collect();
            rows.sort_by(|a, b| a.0.cmp(b.0));
            body.push_str(&format!(
                "# TYPE {METRIC_SUBSYSTEM}_responses_total counter\n"
            ));
            for ((route, status), count) in rows {
                body.push_str(&format!(
                    "{METRIC_SUBSYSTEM}_responses_total{{route=\"{route}\",status=\"{status}\"}} {count}\n"
                ));
            }
        }

        let latency = self.latency_ns_by_route.lock().await;
        let mut routes: Vec<_> = latency.keys().collect();
        routes.sort();
        body.push_str(&format!(
            "# TYPE {METRIC_SUBSYSTEM}_request_latency_seconds gauge\n"
        ));
        for route in routes {
            let samples = &latency[route];
            for (label, pct) in [("p50", 0.50), ("p95", 0.95), ("p99", 0.99)] {
                body.push_str(&format!(
                    "{METRIC_SUBSYSTEM}_request_latency_seconds{{route=\"{route}\",quantile=\"{label}\"}} {:.9}\n",
                    percentile_ns(samples, pct) as f64 / 1_000_000_000.0
                ));
            }
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_of_empty_is_zero() {
        assert_eq!(percentile_ns(&[], 0.95), 0);
    }

    #[test]
    fn percentile_picks_rank_from_sorted_samples() {
        let samples = [50, 10, 40, 20, 30];
        assert_eq!(percentile_ns(&samples, 0.0), 10);
        assert_eq!(percentile_ns(&samples, 0.5), 30);
        assert_eq!(percentile_ns(&samples, 1.0), 50);
    }

    #[tokio::test]
    async fn render_includes_observed_routes() {
        let metrics = RequestMetrics::default();
        metrics
            .observe_request("/api/stats", StatusCode::OK, Duration::from_millis(3))
            .await;
        let body = metrics.render().await;
        assert!(body.contains("faunatrack_requests_total 1"));
        assert!(body.contains("route=\"/api/stats\",status=\"200\""));
        assert!(body.contains("quantile=\"p95\""));
    }
}
