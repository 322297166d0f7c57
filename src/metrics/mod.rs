use prometheus::{IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Request-level counters for the customer API, registered with Prometheus
// and scraped via /metrics.
//
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub requests_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "customer_requests_total",
                "Total customer API requests by operation and outcome",
            ),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        Ok(Self {
            registry,
            requests_total,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record the outcome of one service call
    pub fn record_request(&self, operation: &str, success: bool) {
        let outcome = if success { "success" } else { "error" };
        self.requests_total
            .with_label_values(&[operation, outcome])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request("list", true);

        let gathered = metrics.registry.gather();
        let requests = gathered
            .iter()
            .find(|m| m.name() == "customer_requests_total")
            .unwrap();
        assert_eq!(requests.metric[0].counter.value, Some(1.0));
    }

    #[test]
    fn test_record_request_outcomes() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request("register", true);
        metrics.record_request("register", true);
        metrics.record_request("register", false);

        let gathered = metrics.registry.gather();
        let requests = gathered
            .iter()
            .find(|m| m.name() == "customer_requests_total")
            .unwrap();
        assert_eq!(requests.metric.len(), 2); // success and error label pairs
    }
}
