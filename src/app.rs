use thiserror::Error;

use crate::config::Config;
use crate::flow::pipe_flow::PipeFlowError;
use crate::thermal::heat_exchanger::ThermalError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 열교환기 계산 오류
    #[error("열교환기 계산 오류: {0}")]
    Thermal(#[from] ThermalError),
    /// 배관 유동 계산 오류
    #[error("배관 계산 오류: {0}")]
    Flow(#[from] PipeFlowError),
    /// 입력 범위 오류
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::HeatExchanger => ui_cli::handle_heat_exchanger(config)?,
            MenuChoice::PipeFlow => ui_cli::handle_pipe_flow(config)?,
            MenuChoice::FlashDistillation => ui_cli::handle_flash(config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
