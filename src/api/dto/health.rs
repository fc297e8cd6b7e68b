/*
 * Responsibility
 * - GET /api/health の response DTO
 */
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    #[serde(rename = "service")]
    pub service_name: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_service_key_and_upper_case_status() {
        let body = HealthResponse {
            status: HealthStatus::Up,
            timestamp: "2025-10-15T09:05:07.000".into(),
            service_name: "cicd-pipeline-poc-app".into(),
            version: "1.0.0".into(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "status": "UP",
                "timestamp": "2025-10-15T09:05:07.000",
                "service": "cicd-pipeline-poc-app",
                "version": "1.0.0",
            })
        );
        assert_eq!(serde_json::to_value(HealthStatus::Down).unwrap(), "DOWN");
    }
}
