//! chrono format strings for the wire representations of time.

/// ISO-8601 local date-time, millisecond precision, no offset.
pub const ISO_LOCAL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// `HH:mm:ss`
pub const CLOCK_TIME: &str = "%H:%M:%S";

/// `DD/MM/YYYY`
pub const DAY_MONTH_YEAR: &str = "%d/%m/%Y";

/// `dd/MM/yyyy HH:mm:ss`
pub const DAY_MONTH_YEAR_TIME: &str = "%d/%m/%Y %H:%M:%S";
