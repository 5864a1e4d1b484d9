//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::sync::Arc;

use chrono::NaiveDateTime;

/// 현재 로컬 시각을 제공하는 포트. 테스트에서는 고정 시각으로 교체한다.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// 콘솔 출력 추상화 포트.
/// 결과/안내 메시지는 `raw`(stdout), 내부 오류만 `error`(stderr)로 보낸다.
pub trait Reporter: Send + Sync {
    fn raw(&self, line: &str);
    fn error(&self, line: &str);

    fn lines(&self, lines: &[String]) {
        for line in lines {
            self.raw(line);
        }
    }
}

/// 같은 리포터를 조립 컨테이너와 호출 측이 함께 들고 있을 때 쓴다.
impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn raw(&self, line: &str) {
        (**self).raw(line);
    }

    fn error(&self, line: &str) {
        (**self).error(line);
    }
}
