use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeResponse {
    /// `HH:mm:ss`
    pub time: String,
    /// ISO-8601 local date-time of the same reading as `time`.
    pub timestamp: String,
    pub timezone: String,
}
