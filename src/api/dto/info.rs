use serde::Serialize;

/// Outdated dependencies the service advertises so scanners have something
/// to flag. Nothing in this crate links against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerabilityList {
    pub critical: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoResponse {
    pub application: &'static str,
    pub description: &'static str,
    pub vulnerabilities: VulnerabilityList,
}
