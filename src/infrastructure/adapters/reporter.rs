//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::application::ports::Reporter;

/// stdout/stderr에 바로 쓰는 리포터 어댑터.
#[derive(Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn raw(&self, line: &str) {
        // 파이프가 먼저 닫혀도 패닉하지 않도록 쓰기 오류는 무시한다.
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }

    fn error(&self, line: &str) {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{line}");
    }
}

#[derive(Default)]
struct Captured {
    stdout: Vec<String>,
    stderr: Vec<String>,
}

/// 출력 줄을 메모리에 모아두는 리포터(라이브러리 직접 호출/테스트용).
#[derive(Default)]
pub struct BufferedReporter {
    captured: Mutex<Captured>,
}

impl BufferedReporter {
    pub fn stdout_lines(&self) -> Vec<String> {
        self.captured
            .lock()
            .map(|c| c.stdout.clone())
            .unwrap_or_default()
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.captured
            .lock()
            .map(|c| c.stderr.clone())
            .unwrap_or_default()
    }
}

impl Reporter for BufferedReporter {
    fn raw(&self, line: &str) {
        if let Ok(mut captured) = self.captured.lock() {
            captured.stdout.push(line.to_string());
        }
    }

    fn error(&self, line: &str) {
        if let Ok(mut captured) = self.captured.lock() {
            captured.stderr.push(line.to_string());
        }
    }
}
