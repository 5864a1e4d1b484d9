//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod clock;
mod reporter;

pub use clock::{FixedClock, SystemClock};
pub use reporter::{BufferedReporter, ConsoleReporter};
