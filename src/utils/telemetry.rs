// file: src/utils/telemetry.rs
// description: component health reporting and operation timing
// reference: https://docs.rs/tracing

use chrono::Utc;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Ordered best to worst; a report takes the worst status of its checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    fn icon(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✓",
            HealthStatus::Degraded => "⚠",
            HealthStatus::Unhealthy => "✗",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    pub component: String,
    pub status: HealthStatus,
    pub detail: String,
    pub elapsed_ms: u64,
}

impl HealthCheck {
    pub fn new(
        component: &str,
        status: HealthStatus,
        detail: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            component: component.to_string(),
            status,
            detail: detail.into(),
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub checked_at: String,
    pub checks: Vec<HealthCheck>,
}

impl HealthReport {
    pub fn new(version: &str, checks: Vec<HealthCheck>) -> Self {
        let status = checks
            .iter()
            .map(|c| c.status)
            .max()
            .unwrap_or(HealthStatus::Healthy);

        Self {
            status,
            version: version.to_string(),
            checked_at: Utc::now().to_rfc3339(),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {:?} (v{}, checked {})",
            self.status.icon(),
            self.status,
            self.version,
            self.checked_at
        )?;

        for check in &self.checks {
            writeln!(
                f,
                "  {} {:<16} {:>4}ms  {}",
                check.status.icon(),
                check.component,
                check.elapsed_ms,
                check.detail
            )?;
        }

        Ok(())
    }
}

/// Times a named operation. Progress goes to debug; only slowness warns.
pub struct OperationTimer {
    operation: &'static str,
    start: Instant,
}

impl OperationTimer {
    pub fn start(operation: &'static str) -> Self {
        debug!(operation, "Operation started");
        Self {
            operation,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn warn_if_slow(&self, threshold: Duration, context: &str) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                operation = self.operation,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                threshold_ms = threshold.as_secs_f64() * 1000.0,
                "Slow operation: {}",
                context
            );
        }
    }

    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            operation = self.operation,
            count,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "Operation finished"
        );
        elapsed
    }
}
