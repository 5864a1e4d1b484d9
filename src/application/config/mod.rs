//! 실행 시 선택 가능한 디스패치 설정(순수 데이터).
//!
//! 주의: 설정 파일/환경변수는 읽지 않는다. 값은 CLI 플래그에서만 온다.

pub const PROGRAM_NAME: &str = "utilkit";

/// 활성화할 명령 카탈로그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogVariant {
    /// version/config/log/validate + 수치/문자열 명령 전체
    #[default]
    Full,
    /// add/multiply/capitalize/reverse 만
    Basic,
}

/// 사용자 입력 오류의 종료 코드 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// 모든 입력 오류를 1로 종료
    #[default]
    Strict,
    /// 명령 누락만 1, 나머지 입력 오류는 0 (이전 도구와 동일)
    Legacy,
}

/// `config` 명령 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSettings {
    pub catalog: CatalogVariant,
    pub exit_policy: ExitPolicy,
    pub format: OutputFormat,
}
