//! Application state shared across all handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::config::Config;
use crate::database::EmployeeStore;
use crate::services::{EmployeeService, HealthChecker};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Employee CRUD operations over the configured store
    pub employee_service: EmployeeService,
    /// Liveness and store reachability reporting
    pub health_checker: HealthChecker,
    /// Prometheus render handle; `None` when no recorder was installed
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn EmployeeStore>) -> Self {
        let employee_service = EmployeeService::new(store);
        let health_checker = HealthChecker::new(
            employee_service.clone(),
            config.store_backend.as_str(),
            config.environment.clone(),
        );

        Self {
            config,
            employee_service,
            health_checker,
            metrics_handle: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}
