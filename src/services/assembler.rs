/*
 * Responsibility
 * - 各 endpoint の response を時刻 + 静的設定だけから組み立てる
 * - I/O なし、request 内容による分岐なし
 */
use chrono::{DateTime, Local};
use service_kit::{ServiceIdentity, format};

use crate::api::dto::{
    HealthResponse, HealthStatus, HostResponse, InfoResponse, TimeResponse, VulnerabilityList,
};

pub const APPLICATION: &str = "CI/CD Pipeline PoC";
pub const DESCRIPTION: &str =
    "Mock application with intentional vulnerabilities for testing CI/CD pipeline gates";

pub const STATUS_MESSAGE: &str = "Service is running smoothly.";
// "smoothy" is matched literally by existing pipeline assertions.
pub const HEALTH_STATUS_PREFIX: &str = "Service is running smoothy. Date: ";

pub const HOST_FLAG: &str = "V2";

pub const VULNERABILITIES: VulnerabilityList = VulnerabilityList {
    critical: "log4j 2.14.1 (CVE-2021-44228)",
    high: "commons-collections 3.2.1 (CVE-2015-6420)",
    medium: "jackson-databind 2.9.10.1",
};

/// Liveness only: no dependency is checked, so the status is always `UP`.
pub fn health(now: &DateTime<Local>, identity: &ServiceIdentity) -> HealthResponse {
    HealthResponse {
        status: HealthStatus::Up,
        timestamp: now.format(format::ISO_LOCAL_DATE_TIME).to_string(),
        service_name: identity.name.clone(),
        version: identity.version.clone(),
    }
}

pub fn info() -> InfoResponse {
    InfoResponse {
        application: APPLICATION,
        description: DESCRIPTION,
        vulnerabilities: VULNERABILITIES,
    }
}

pub fn status() -> &'static str {
    STATUS_MESSAGE
}

pub fn health_status(now: &DateTime<Local>) -> String {
    format!(
        "{HEALTH_STATUS_PREFIX}{}",
        now.format(format::DAY_MONTH_YEAR)
    )
}

pub fn time(now: &DateTime<Local>, zone_id: &str) -> TimeResponse {
    TimeResponse {
        time: now.format(format::CLOCK_TIME).to_string(),
        timestamp: now.format(format::ISO_LOCAL_DATE_TIME).to_string(),
        timezone: zone_id.to_string(),
    }
}

pub fn host_info(hostname: String) -> HostResponse {
    HostResponse {
        hostname,
        flag: HOST_FLAG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime, TimeZone};

    fn fixed() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 10, 15, 9, 5, 7)
            .earliest()
            .unwrap()
    }

    #[test]
    fn health_is_always_up_with_identity() {
        let identity = ServiceIdentity::new("svc", "2.3.4");
        let body = health(&fixed(), &identity);

        assert_eq!(body.status, HealthStatus::Up);
        assert_eq!(body.timestamp, "2025-10-15T09:05:07.000");
        assert_eq!(body.service_name, "svc");
        assert_eq!(body.version, "2.3.4");
    }

    #[test]
    fn info_advertises_log4shell_as_critical() {
        let body = info();
        assert_eq!(body.application, "CI/CD Pipeline PoC");
        assert!(body.vulnerabilities.critical.contains("CVE-2021-44228"));
        assert!(!body.vulnerabilities.high.is_empty());
        assert!(!body.vulnerabilities.medium.is_empty());
    }

    #[test]
    fn health_status_uses_day_month_year() {
        assert_eq!(
            health_status(&fixed()),
            "Service is running smoothy. Date: 15/10/2025"
        );
    }

    #[test]
    fn time_fields_share_one_reading() {
        let body = time(&fixed(), "Europe/Madrid");

        assert_eq!(body.time, "09:05:07");
        assert_eq!(body.timezone, "Europe/Madrid");

        let stamp = NaiveDateTime::parse_from_str(&body.timestamp, "%Y-%m-%dT%H:%M:%S%.f").unwrap();
        let clock = NaiveTime::parse_from_str(&body.time, "%H:%M:%S").unwrap();
        assert_eq!(stamp.time(), clock);
    }

    #[test]
    fn host_info_sets_flag() {
        let body = host_info("build-agent-7".into());
        assert_eq!(body.hostname, "build-agent-7");
        assert_eq!(body.flag, "V2");
    }
}
