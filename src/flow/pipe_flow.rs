use thiserror::Error;

/// 배관 유동(레이놀즈수/압력손실) 계산 입력.
#[derive(Debug, Clone)]
pub struct PipeFlowInput {
    /// 유체 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 동점도 [Pa·s]
    pub dynamic_viscosity_pa_s: f64,
    /// 체적 유량 [m3/s]
    pub flow_m3_per_s: f64,
    /// 배관 내경 [m]
    pub diameter_m: f64,
    /// 배관 길이 [m]
    pub length_m: f64,
}

/// 유동 영역 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// 층류 (Re < 2000)
    Laminar,
    /// 천이 영역 (2000 ≤ Re ≤ 4000)
    Transitional,
    /// 난류 (Re > 4000)
    Turbulent,
}

/// 배관 유동 계산 결과.
#[derive(Debug, Clone)]
pub struct PipeFlowResult {
    /// 레이놀즈수
    pub reynolds: f64,
    /// 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 유동 영역
    pub regime: FlowRegime,
    /// 압력강하 [Pa]
    pub pressure_drop_pa: f64,
}

/// 배관 유동 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipeFlowError {
    /// 내경이 0 이하
    #[error("배관 내경은 0보다 커야 합니다 (입력값 {diameter_m} m).")]
    NonPositiveDiameter { diameter_m: f64 },
    /// 점도가 0 이하
    #[error("점도는 0보다 커야 합니다 (입력값 {viscosity_pa_s} Pa·s).")]
    NonPositiveViscosity { viscosity_pa_s: f64 },
    /// 마찰계수 계산에 필요한 레이놀즈수가 0 이하
    #[error("마찰계수 계산에는 양의 레이놀즈수가 필요합니다 (Re={reynolds}).")]
    NonPositiveReynolds { reynolds: f64 },
}

/// 층류 상한 레이놀즈수. 이 값 미만이면 층류로 본다.
pub const LAMINAR_LIMIT: f64 = 2000.0;
/// 난류 시작 레이놀즈수. 이 값 초과부터 난류로 본다.
pub const TURBULENT_ONSET: f64 = 4000.0;

/// 체적 유량으로부터 (레이놀즈수, 유속 [m/s]) 튜플을 계산한다.
/// 유속 = 4Q/(πD²), Re = ρvD/μ.
pub fn calculate_reynolds(
    flow_m3_per_s: f64,
    diameter_m: f64,
    density_kg_per_m3: f64,
    dynamic_viscosity_pa_s: f64,
) -> Result<(f64, f64), PipeFlowError> {
    if diameter_m <= 0.0 {
        return Err(PipeFlowError::NonPositiveDiameter { diameter_m });
    }
    if dynamic_viscosity_pa_s <= 0.0 {
        return Err(PipeFlowError::NonPositiveViscosity {
            viscosity_pa_s: dynamic_viscosity_pa_s,
        });
    }
    let velocity =
        4.0 * flow_m3_per_s / (std::f64::consts::PI * diameter_m * diameter_m);
    let reynolds = density_kg_per_m3 * velocity * diameter_m / dynamic_viscosity_pa_s;
    Ok((reynolds, velocity))
}

/// 레이놀즈수로 유동 영역을 구분한다. 경계값 2000/4000은 천이 영역에 속한다.
pub fn classify_regime(reynolds: f64) -> FlowRegime {
    if reynolds < LAMINAR_LIMIT {
        FlowRegime::Laminar
    } else if reynolds <= TURBULENT_ONSET {
        FlowRegime::Transitional
    } else {
        FlowRegime::Turbulent
    }
}

/// Darcy-Weisbach 식으로 압력강하 ΔP = f·(L/D)·(ρv²/2) [Pa]를 계산한다.
/// 마찰계수 f는 Re < 2000에서 층류식 64/Re, 그 이상에서는 Blasius 근사식
/// 0.079/Re^0.25를 쓴다. Blasius 식은 매끈한 관의 난류 구간 근사이므로
/// 천이 영역이나 아주 큰 Re에서는 오차가 커질 수 있다.
pub fn calculate_pressure_drop(
    reynolds: f64,
    length_m: f64,
    diameter_m: f64,
    velocity_m_per_s: f64,
    density_kg_per_m3: f64,
) -> Result<f64, PipeFlowError> {
    if reynolds <= 0.0 {
        return Err(PipeFlowError::NonPositiveReynolds { reynolds });
    }
    if diameter_m <= 0.0 {
        return Err(PipeFlowError::NonPositiveDiameter { diameter_m });
    }
    let friction_factor = if reynolds < LAMINAR_LIMIT {
        64.0 / reynolds
    } else {
        0.079 / reynolds.powf(0.25)
    };
    let dynamic_pressure = 0.5 * density_kg_per_m3 * velocity_m_per_s * velocity_m_per_s;
    Ok(friction_factor * (length_m / diameter_m) * dynamic_pressure)
}

/// 유속, 레이놀즈수, 유동 영역, 압력강하를 한 번에 계산한다.
/// 압력강하까지 구하므로 Re > 0이 되는 입력이어야 한다.
pub fn compute_pipe_flow(input: PipeFlowInput) -> Result<PipeFlowResult, PipeFlowError> {
    let (reynolds, velocity) = calculate_reynolds(
        input.flow_m3_per_s,
        input.diameter_m,
        input.density_kg_per_m3,
        input.dynamic_viscosity_pa_s,
    )?;
    let regime = classify_regime(reynolds);
    let pressure_drop_pa = calculate_pressure_drop(
        reynolds,
        input.length_m,
        input.diameter_m,
        velocity,
        input.density_kg_per_m3,
    )?;
    Ok(PipeFlowResult {
        reynolds,
        velocity_m_per_s: velocity,
        regime,
        pressure_drop_pa,
    })
}
