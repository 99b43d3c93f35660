use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Directory API",
        version = "0.1.0",
        description = "CRUD API for employee records"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Health
        crate::handlers::health::health_check,
        crate::handlers::health::prometheus_metrics,

        // Employees
        crate::handlers::employees::create_employee,
        crate::handlers::employees::list_employees,
        crate::handlers::employees::get_employee,
        crate::handlers::employees::update_employee,
        crate::handlers::employees::delete_employee,
    ),
    components(schemas(
        crate::models::Employee,
        crate::models::NewEmployee,
        crate::handlers::MessageResponse,
        crate::services::health_check::HealthStatus,
        crate::services::health_check::DependencyHealth,
        crate::services::health_check::HealthCheckStatus,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "employees", description = "Employee records"),
    )
)]
pub struct ApiDoc;
