//! 애플리케이션 조립(composition root) 모듈.

use crate::application::config::RunSettings;
use crate::application::ports::{Clock, Reporter};
use crate::application::usecases::dispatch_command::DispatchCommandUseCase;
use crate::infrastructure::adapters::{ConsoleReporter, SystemClock};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    clock: Box<dyn Clock>,
    reporter: Box<dyn Reporter>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_adapters(Box::new(SystemClock), Box::new(ConsoleReporter))
    }
}

impl AppComposition {
    /// 시계/출력 어댑터를 외부에서 주입한다.
    pub fn with_adapters(clock: Box<dyn Clock>, reporter: Box<dyn Reporter>) -> Self {
        Self { clock, reporter }
    }

    /// 명령 디스패치 유스케이스를 생성한다.
    pub fn dispatch_usecase(&self, settings: RunSettings) -> DispatchCommandUseCase<'_> {
        DispatchCommandUseCase {
            clock: self.clock.as_ref(),
            reporter: self.reporter.as_ref(),
            settings,
        }
    }
}
