//! 타임스탬프가 붙은 로그 문자열 구성.

use std::fmt;

use chrono::NaiveDateTime;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 한 번 출력하고 버리는 로그 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: NaiveDateTime,
    pub level: String,
    pub message: String,
}

impl LogLine {
    pub fn new(timestamp: NaiveDateTime, level: &str, message: &str) -> Self {
        Self {
            timestamp,
            level: level.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}

/// `[YYYY-MM-DD HH:MM:SS] [<level>] <message>` 형식 문자열을 만든다.
/// 시각은 호출 측이 주입한다(로컬 시각 기준).
pub fn log_message(now: NaiveDateTime, message: &str, level: Option<&str>) -> String {
    LogLine::new(now, level.unwrap_or(DEFAULT_LOG_LEVEL), message).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(
            log_message(at(7, 5, 3), "server started", None),
            "[2024-03-09 07:05:03] [INFO] server started"
        );
    }

    #[test]
    fn explicit_level_is_kept_verbatim() {
        assert_eq!(
            log_message(at(23, 59, 59), "disk low", Some("warning")),
            "[2024-03-09 23:59:59] [warning] disk low"
        );
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(1, 2, 3, 987)
            .unwrap();
        assert_eq!(
            LogLine::new(ts, "INFO", "").to_string(),
            "[2024-03-09 01:02:03] [INFO] "
        );
    }
}
