//! 고정 명령 카탈로그. 이름, 인자 규칙, 핸들러를 한 항목에 묶는다.

use crate::application::config::CatalogVariant;
use crate::application::usecases::dispatch_command::{
    DispatchCommandUseCase, DispatchError, handlers,
};

/// 명령 실행 함수. 인자 개수는 호출 전에 이미 확인된 상태다.
pub type Handler = fn(&DispatchCommandUseCase<'_>, &[String]) -> Result<(), DispatchError>;

/// 도움말 출력용 명령 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Helper,
    Math,
    Text,
}

impl CommandGroup {
    pub fn title(self) -> &'static str {
        match self {
            Self::Core => "Core commands:",
            Self::Helper => "Helper commands:",
            Self::Math => "Math commands:",
            Self::Text => "Text commands:",
        }
    }
}

/// 최소 인자 개수 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Nullary,
    AtLeast {
        count: usize,
        /// 부족할 때 출력할 안내 문구
        missing: &'static str,
    },
}

pub struct CommandSpec {
    pub name: &'static str,
    pub group: CommandGroup,
    /// 도움말에 표시할 사용법
    pub usage: &'static str,
    pub arity: Arity,
    pub handler: Handler,
}

const TWO_NUMBERS: Arity = Arity::AtLeast {
    count: 2,
    missing: "Please provide two numbers!",
};

const TEXT: Arity = Arity::AtLeast {
    count: 1,
    missing: "Please provide text!",
};

const VERSION: CommandSpec = CommandSpec {
    name: "version",
    group: CommandGroup::Core,
    usage: "version",
    arity: Arity::Nullary,
    handler: handlers::version,
};

const CONFIG: CommandSpec = CommandSpec {
    name: "config",
    group: CommandGroup::Core,
    usage: "config",
    arity: Arity::Nullary,
    handler: handlers::config,
};

const LOG: CommandSpec = CommandSpec {
    name: "log",
    group: CommandGroup::Helper,
    usage: "log <message>",
    arity: Arity::AtLeast {
        count: 1,
        missing: "Please provide a message!",
    },
    handler: handlers::log,
};

const VALIDATE: CommandSpec = CommandSpec {
    name: "validate",
    group: CommandGroup::Helper,
    usage: "validate <number>",
    arity: Arity::AtLeast {
        count: 1,
        missing: "Please provide a number!",
    },
    handler: handlers::validate,
};

const ADD: CommandSpec = CommandSpec {
    name: "add",
    group: CommandGroup::Math,
    usage: "add <num1> <num2>",
    arity: TWO_NUMBERS,
    handler: handlers::add,
};

const MULTIPLY: CommandSpec = CommandSpec {
    name: "multiply",
    group: CommandGroup::Math,
    usage: "multiply <num1> <num2>",
    arity: TWO_NUMBERS,
    handler: handlers::multiply,
};

const CAPITALIZE: CommandSpec = CommandSpec {
    name: "capitalize",
    group: CommandGroup::Text,
    usage: "capitalize <text>",
    arity: TEXT,
    handler: handlers::capitalize,
};

const REVERSE: CommandSpec = CommandSpec {
    name: "reverse",
    group: CommandGroup::Text,
    usage: "reverse <text>",
    arity: TEXT,
    handler: handlers::reverse,
};

static FULL: &[CommandSpec] = &[
    VERSION, CONFIG, LOG, VALIDATE, ADD, MULTIPLY, CAPITALIZE, REVERSE,
];

static BASIC: &[CommandSpec] = &[ADD, MULTIPLY, CAPITALIZE, REVERSE];

/// 카탈로그의 명령 목록(도움말 순서).
pub fn commands_for(variant: CatalogVariant) -> &'static [CommandSpec] {
    match variant {
        CatalogVariant::Full => FULL,
        CatalogVariant::Basic => BASIC,
    }
}

/// 대소문자를 구분하는 완전 일치로 명령을 찾는다.
pub fn find_command(variant: CatalogVariant, name: &str) -> Option<&'static CommandSpec> {
    commands_for(variant).iter().find(|spec| spec.name == name)
}
