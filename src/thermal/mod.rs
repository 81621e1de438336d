//! 열전달 계산 모듈 모음.

pub mod heat_exchanger;

pub use heat_exchanger::*;
