use serde::Serialize;

pub const SERVICE_VERSION: &str = "1.0.0";

/// Body of `GET /health`. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: "Django API",
            version: SERVICE_VERSION,
            message: "Service is running normally",
        }
    }
}
