//! utilkit library root.
//! Clean Architecture 계층을 외부에 노출하고, 유틸리티 함수를 최상위에서 바로 쓸 수 있게 다시 내보낸다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::config::RunSettings;
use application::ports::Clock;
use infrastructure::adapters::SystemClock;
use interface::cli::AppComposition;

pub use domain::info::{ConfigSnapshot, get_config, get_version};
pub use domain::math::{MathError, add, divide, multiply, subtract};
pub use domain::text::{capitalize_words, reverse_string, to_uppercase};
pub use domain::validation::{InputValue, ValidationRange, ValidationResult, validate_input};

/// 라이브러리 직접 호출용 실행 함수. 프로세스 종료 코드를 반환한다.
pub fn run(args: &[String], settings: RunSettings) -> i32 {
    let composition = AppComposition::default();
    composition.dispatch_usecase(settings).run(args)
}

/// 현재 로컬 시각으로 로그 문자열을 만든다.
pub fn log_message(message: &str, level: Option<&str>) -> String {
    domain::diagnostics::log_message(SystemClock.now(), message, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_message_uses_local_timestamp_and_default_level() {
        let line = log_message("msg", None);
        // "[YYYY-MM-DD HH:MM:SS] [INFO] msg"
        assert!(line.starts_with('['), "{line}");
        assert!(line.ends_with("] [INFO] msg"), "{line}");
        assert_eq!(line.len(), "[YYYY-MM-DD HH:MM:SS] [INFO] msg".len());
        assert_eq!(&line[20..21], "]");
    }

    #[test]
    fn log_message_keeps_explicit_level() {
        let line = log_message("disk low", Some("WARN"));
        assert!(line.ends_with("] [WARN] disk low"), "{line}");
        assert_eq!(line.len(), "[YYYY-MM-DD HH:MM:SS] [WARN] disk low".len());
    }
}
