//! Interface layer
//! 프로세스 인자를 받아 유스케이스로 넘기는 진입 계층.

pub mod cli;
