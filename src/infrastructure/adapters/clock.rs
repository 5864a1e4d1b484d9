//! 시각 포트 구현 어댑터.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};

use crate::application::ports::Clock;
use crate::domain::diagnostics::TIMESTAMP_FORMAT;

/// 시스템 로컬 시각을 읽는 어댑터.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 항상 같은 시각을 돌려주는 어댑터(테스트/재현용).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// `YYYY-MM-DD HH:MM:SS` 문자열로 생성한다.
    pub fn parse(raw: &str) -> Result<Self> {
        let at = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .with_context(|| format!("invalid timestamp: {raw}"))?;
        Ok(Self(at))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
