//! 이성분계 증류 계산 모듈 모음.

pub mod flash;
pub mod vle;

pub use flash::*;
pub use vle::*;
