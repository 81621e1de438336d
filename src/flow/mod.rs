//! 배관 유동 계산 모듈을 모아둔다.
//! 레이놀즈수/압력손실 단건 계산과 플롯 데이터용 유량 스윕으로 구성한다.

pub mod pipe_flow;
pub mod sweep;

pub use pipe_flow::*;
pub use sweep::*;
