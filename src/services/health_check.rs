use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use utoipa::ToSchema;

use super::EmployeeService;

/// Aggregated health status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: HealthCheckStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub dependencies: Vec<DependencyHealth>,
}

/// Dependency health information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DependencyHealth {
    pub name: String,
    pub status: HealthCheckStatus,
    pub response_time_ms: Option<u64>,
    pub last_check: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthCheckStatus {
    Healthy,
    Unhealthy,
}

/// Health checker service
#[derive(Clone)]
pub struct HealthChecker {
    start_time: Arc<Instant>,
    environment: String,
    store_name: String,
    employees: EmployeeService,
}

impl HealthChecker {
    pub fn new(
        employees: EmployeeService,
        store_name: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            start_time: Arc::new(Instant::now()),
            environment: environment.into(),
            store_name: store_name.into(),
            employees,
        }
    }

    /// Get uptime in seconds
    pub fn get_uptime(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    async fn check_store(&self) -> DependencyHealth {
        let start = Instant::now();
        let result = self.employees.store_health().await;

        DependencyHealth {
            name: self.store_name.clone(),
            status: if result.is_ok() {
                HealthCheckStatus::Healthy
            } else {
                HealthCheckStatus::Unhealthy
            },
            response_time_ms: Some(start.elapsed().as_millis() as u64),
            last_check: Utc::now(),
            error_message: result.err().map(|e| e.to_string()),
        }
    }

    /// Run every dependency check
    pub async fn check(&self) -> HealthStatus {
        let dependencies = vec![self.check_store().await];

        let status = if dependencies
            .iter()
            .all(|d| d.status == HealthCheckStatus::Healthy)
        {
            HealthCheckStatus::Healthy
        } else {
            HealthCheckStatus::Unhealthy
        };

        HealthStatus {
            status,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: self.environment.clone(),
            uptime_seconds: self.get_uptime(),
            dependencies,
        }
    }
}
