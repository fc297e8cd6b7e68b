use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub name: String,
    pub description: &'static str,
    pub version: String,
    pub framework: &'static str,
    pub runtime_version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_version_is_camel_case_on_the_wire() {
        let body = InfoResponse {
            name: "opal-e2e-test-app".into(),
            description: "d",
            version: "1.0.0".into(),
            framework: "axum 0.8",
            runtime_version: "Rust 1.88",
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["runtimeVersion"], "Rust 1.88");
        assert!(value.get("runtime_version").is_none());
    }
}
