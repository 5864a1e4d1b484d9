//! Infrastructure layer
//! 콘솔/시계 등 외부 자원과 직접 맞닿는 구현체와 출력 렌더링.

pub mod adapters;
pub mod render;
