//! 인자 목록을 명령 카탈로그에 대응시켜 실행하는 디스패치 유스케이스.

mod args;
mod catalog;
mod handlers;

pub use catalog::{Arity, CommandGroup, CommandSpec, Handler, commands_for, find_command};

use thiserror::Error;
use tracing::debug;

use crate::application::config::{ExitPolicy, PROGRAM_NAME, RunSettings};
use crate::application::ports::{Clock, Reporter};
use crate::infrastructure::render::render_help;

/// 디스패치 경계에서 메시지로 변환되는 오류.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no command given")]
    MissingCommand,

    #[error("{message}")]
    MissingArgument {
        command: String,
        message: &'static str,
    },

    #[error("Invalid number!")]
    InvalidNumber { command: String, value: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl DispatchError {
    /// 종료 코드 정책에 따른 프로세스 종료 코드.
    pub fn exit_code(&self, policy: ExitPolicy) -> i32 {
        match (self, policy) {
            (Self::MissingCommand | Self::Internal(_), _) => 1,
            (_, ExitPolicy::Strict) => 1,
            (_, ExitPolicy::Legacy) => 0,
        }
    }
}

/// 명령 이름 매칭, 인자 개수 확인, 변환, 실행, 출력까지 한 번에 처리한다.
pub struct DispatchCommandUseCase<'a> {
    pub clock: &'a dyn Clock,
    pub reporter: &'a dyn Reporter,
    pub settings: RunSettings,
}

impl DispatchCommandUseCase<'_> {
    /// 명령 하나를 실행한다. 첫 원소가 명령 이름, 나머지가 위치 인자다.
    pub fn execute(&self, args: &[String]) -> Result<(), DispatchError> {
        let Some((name, rest)) = args.split_first() else {
            return Err(DispatchError::MissingCommand);
        };

        let Some(spec) = find_command(self.settings.catalog, name) else {
            debug!(command = %name, catalog = ?self.settings.catalog, "unknown command");
            return Err(DispatchError::UnknownCommand(name.clone()));
        };

        if let Arity::AtLeast { count, missing } = spec.arity
            && rest.len() < count
        {
            debug!(command = spec.name, given = rest.len(), required = count, "missing arguments");
            return Err(DispatchError::MissingArgument {
                command: spec.name.to_string(),
                message: missing,
            });
        }

        debug!(command = spec.name, args = rest.len(), "dispatching");
        (spec.handler)(self, rest)
    }

    /// 실행 후 오류를 출력하고 프로세스 종료 코드를 돌려준다.
    pub fn run(&self, args: &[String]) -> i32 {
        match self.execute(args) {
            Ok(()) => 0,
            Err(err) => {
                self.report_error(&err);
                err.exit_code(self.settings.exit_policy)
            }
        }
    }

    /// 활성 카탈로그 기준 도움말.
    pub fn help_lines(&self) -> Vec<String> {
        render_help(PROGRAM_NAME, commands_for(self.settings.catalog))
    }

    fn report_error(&self, err: &DispatchError) {
        match err {
            DispatchError::MissingCommand => self.reporter.lines(&self.help_lines()),
            DispatchError::MissingArgument { .. } | DispatchError::InvalidNumber { .. } => {
                self.reporter.raw(&err.to_string());
            }
            DispatchError::UnknownCommand(_) => {
                self.reporter.raw(&err.to_string());
                self.reporter.lines(&self.help_lines());
            }
            DispatchError::Internal(inner) => {
                self.reporter.error(&format!("error: {inner:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::CatalogVariant;
    use crate::infrastructure::adapters::{BufferedReporter, FixedClock};

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn run_with(settings: RunSettings, raw: &[&str]) -> (i32, Vec<String>) {
        let clock = FixedClock::parse("2024-01-02 03:04:05").unwrap();
        let reporter = BufferedReporter::default();
        let use_case = DispatchCommandUseCase {
            clock: &clock,
            reporter: &reporter,
            settings,
        };
        let code = use_case.run(&args(raw));
        (code, reporter.stdout_lines())
    }

    #[test]
    fn empty_args_is_missing_command() {
        let clock = FixedClock::parse("2024-01-02 03:04:05").unwrap();
        let reporter = BufferedReporter::default();
        let use_case = DispatchCommandUseCase {
            clock: &clock,
            reporter: &reporter,
            settings: RunSettings::default(),
        };
        assert!(matches!(
            use_case.execute(&[]),
            Err(DispatchError::MissingCommand)
        ));
        assert!(reporter.stdout_lines().is_empty());
    }

    #[test]
    fn command_names_are_case_sensitive() {
        let (code, out) = run_with(RunSettings::default(), &["ADD", "1", "2"]);
        assert_eq!(code, 1);
        assert_eq!(out[0], "Unknown command: ADD");
    }

    #[test]
    fn arity_is_checked_before_parsing() {
        let (code, out) = run_with(RunSettings::default(), &["add", "x"]);
        assert_eq!(code, 1);
        assert_eq!(out, ["Please provide two numbers!"]);
    }

    #[test]
    fn legacy_policy_only_fails_on_missing_command() {
        let legacy = RunSettings {
            exit_policy: ExitPolicy::Legacy,
            ..RunSettings::default()
        };
        assert_eq!(run_with(legacy, &[]).0, 1);
        assert_eq!(run_with(legacy, &["add", "1"]).0, 0);
        assert_eq!(run_with(legacy, &["add", "1", "two"]).0, 0);
        assert_eq!(run_with(legacy, &["bogus"]).0, 0);
        assert_eq!(run_with(legacy, &["add", "1", "2"]).0, 0);
    }

    #[test]
    fn basic_catalog_rejects_full_only_commands() {
        let basic = RunSettings {
            catalog: CatalogVariant::Basic,
            ..RunSettings::default()
        };
        let (code, out) = run_with(basic, &["version"]);
        assert_eq!(code, 1);
        assert_eq!(out[0], "Unknown command: version");
        assert!(!out.iter().any(|line| line == "Core commands:"));
        assert!(out.iter().any(|line| line == "Math commands:"));
    }

    #[test]
    fn internal_errors_always_exit_one() {
        let err = DispatchError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(err.exit_code(ExitPolicy::Strict), 1);
        assert_eq!(err.exit_code(ExitPolicy::Legacy), 1);
    }
}
