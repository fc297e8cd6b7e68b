use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostResponse {
    pub hostname: String,
    // Capitalized on the wire; pipeline assertions match on it.
    #[serde(rename = "Flag")]
    pub flag: &'static str,
}
