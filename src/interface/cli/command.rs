//! CLI 인자 파싱 모듈.

use clap::{Parser, ValueEnum};

use crate::application::config::{CatalogVariant, ExitPolicy, OutputFormat, RunSettings};

#[derive(Debug, Parser)]
#[command(name = "utilkit")]
#[command(version)]
#[command(about = "Math, text and helper utilities behind one command dispatcher")]
pub struct Cli {
    /// Command catalog to expose
    #[arg(long, value_enum, default_value_t = CatalogArg::Full)]
    catalog: CatalogArg,

    /// Exit status policy for input errors
    #[arg(long = "exit-codes", value_enum, default_value_t = ExitCodesArg::Strict)]
    exit_codes: ExitCodesArg,

    /// Print `config` output as JSON
    #[arg(long)]
    json: bool,

    /// Command name followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CatalogArg {
    /// version, config, log, validate, add, multiply, capitalize, reverse
    Full,
    /// add, multiply, capitalize, reverse
    Basic,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExitCodesArg {
    /// Every input error exits with 1
    Strict,
    /// Only a missing command exits with 1
    Legacy,
}

/// 파싱이 끝난 실행 요청: 디스패치 설정 + 명령 인자 목록.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub settings: RunSettings,
    pub args: Vec<String>,
}

impl Cli {
    /// 프로세스 인자를 파싱한다. 플래그 오류는 clap이 직접 출력하고 종료한다.
    pub fn parse_invocation() -> Invocation {
        Cli::parse().into_invocation()
    }

    /// 임의 인자 목록(0번은 프로그램 이름)을 파싱한다.
    pub fn try_parse_invocation<I, T>(raw: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Cli::try_parse_from(raw)?.into_invocation())
    }

    fn into_invocation(self) -> Invocation {
        let catalog = match self.catalog {
            CatalogArg::Full => CatalogVariant::Full,
            CatalogArg::Basic => CatalogVariant::Basic,
        };
        let exit_policy = match self.exit_codes {
            ExitCodesArg::Strict => ExitPolicy::Strict,
            ExitCodesArg::Legacy => ExitPolicy::Legacy,
        };
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Invocation {
            settings: RunSettings {
                catalog,
                exit_policy,
                format,
            },
            args: self.args,
        }
    }
}
