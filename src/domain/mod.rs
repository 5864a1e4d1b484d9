//! Domain layer
//! 유틸리티 연산(수치/문자열/정보/진단/검증)을 입출력 없는 순수 함수로 표현한다.

pub mod diagnostics;
pub mod info;
pub mod math;
pub mod text;
pub mod validation;
