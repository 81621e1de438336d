use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::distillation::flash::SolverSettings;
use crate::flow::sweep::FlowRateRange;

/// 고정점 반복 설정값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverDefaults {
    /// 최대 반복 횟수
    pub max_iterations: usize,
    /// 수렴 판정 기준
    pub tolerance: f64,
}

impl Default for SolverDefaults {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl SolverDefaults {
    /// 설정값을 솔버 설정으로 변환한다.
    pub fn settings(&self) -> SolverSettings {
        SolverSettings {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

/// 열교환기 입력 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatExchangerDefaults {
    pub hot_in_c: f64,
    pub hot_out_c: f64,
    pub cold_in_c: f64,
    pub cold_out_c: f64,
    pub overall_u_w_m2k: f64,
    pub area_m2: f64,
}

impl Default for HeatExchangerDefaults {
    fn default() -> Self {
        Self {
            hot_in_c: 150.0,
            hot_out_c: 100.0,
            cold_in_c: 20.0,
            cold_out_c: 80.0,
            overall_u_w_m2k: 500.0,
            area_m2: 10.0,
        }
    }
}

/// 배관 유동 입력 기본값. 상온 물 기준.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeFlowDefaults {
    pub density_kg_per_m3: f64,
    pub dynamic_viscosity_pa_s: f64,
    pub flow_m3_per_s: f64,
    pub diameter_m: f64,
    pub length_m: f64,
}

impl Default for PipeFlowDefaults {
    fn default() -> Self {
        Self {
            density_kg_per_m3: 997.0,
            dynamic_viscosity_pa_s: 0.001,
            flow_m3_per_s: 0.01,
            diameter_m: 0.1,
            length_m: 10.0,
        }
    }
}

/// 플래시 증류 입력 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashDefaults {
    pub relative_volatility: f64,
    pub feed_mole_fraction: f64,
    pub vapor_fraction: f64,
}

impl Default for FlashDefaults {
    fn default() -> Self {
        Self {
            relative_volatility: 2.0,
            feed_mole_fraction: 0.5,
            vapor_fraction: 0.5,
        }
    }
}

/// 유량 스윕/평형 곡선 내보내기 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepDefaults {
    pub start_m3_per_s: f64,
    pub end_m3_per_s: f64,
    pub samples: usize,
    /// 평형 곡선 샘플 개수
    pub curve_samples: usize,
}

impl Default for SweepDefaults {
    fn default() -> Self {
        Self {
            start_m3_per_s: 0.001,
            end_m3_per_s: 0.05,
            samples: 100,
            curve_samples: 500,
        }
    }
}

impl SweepDefaults {
    /// 설정값을 스윕 구간으로 변환한다.
    pub fn range(&self) -> FlowRateRange {
        FlowRateRange {
            start_m3_per_s: self.start_m3_per_s,
            end_m3_per_s: self.end_m3_per_s,
            samples: self.samples,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub solver: SolverDefaults,
    pub heat_exchanger: HeatExchangerDefaults,
    pub pipe_flow: PipeFlowDefaults,
    pub flash: FlashDefaults,
    pub sweep: SweepDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solver: SolverDefaults::default(),
            heat_exchanger: HeatExchangerDefaults::default(),
            pipe_flow: PipeFlowDefaults::default(),
            flash: FlashDefaults::default(),
            sweep: SweepDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 작업 디렉터리의 config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new("config.toml"))
}

/// 지정한 경로의 설정 파일을 로드한다. 파일이 없으면 기본 설정을 만들어
/// 그 경로에 저장한 뒤 돌려준다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 작업 디렉터리의 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new("config.toml"))
    }

    /// 설정을 지정한 경로에 TOML로 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
