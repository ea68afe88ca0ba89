use chrono::{Datelike, Local};

// year of the local clock, evaluated on every call so a long-lived session
// picks up the new year without a restart
pub fn current_year() -> i64 {
    Local::now().year() as i64
}
