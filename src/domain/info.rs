//! 라이브러리 버전과 고정 설정 스냅샷.

use serde::Serialize;

pub const LIBRARY_VERSION: &str = "2.0.0";

/// 실행 중 바뀌지 않는 설정값. 필드 순서가 곧 출력 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigSnapshot {
    pub app_name: &'static str,
    pub debug: bool,
    pub max_retries: u32,
}

pub const CONFIG: ConfigSnapshot = ConfigSnapshot {
    app_name: "Utils Library",
    debug: false,
    max_retries: 3,
};

/// 설정값 하나. 출력 시 타입별 표기를 고르기 위해 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValue {
    Text(&'static str),
    Flag(bool),
    Count(u32),
}

pub fn get_version() -> &'static str {
    LIBRARY_VERSION
}

pub fn get_config() -> ConfigSnapshot {
    CONFIG
}

impl ConfigSnapshot {
    /// 고정 키 순서(app_name, debug, max_retries)로 항목을 나열한다.
    pub fn entries(&self) -> [(&'static str, ConfigValue); 3] {
        [
            ("app_name", ConfigValue::Text(self.app_name)),
            ("debug", ConfigValue::Flag(self.debug)),
            ("max_retries", ConfigValue::Count(self.max_retries)),
        ]
    }
}
