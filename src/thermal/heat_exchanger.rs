use thiserror::Error;

/// 열교환기 성능(LMTD/열량) 계산 입력.
#[derive(Debug, Clone)]
pub struct HeatExchangerInput {
    /// 고온측 입구 온도(°C)
    pub hot_in_c: f64,
    /// 고온측 출구 온도(°C)
    pub hot_out_c: f64,
    /// 저온측 입구 온도(°C)
    pub cold_in_c: f64,
    /// 저온측 출구 온도(°C)
    pub cold_out_c: f64,
    /// 종합전열계수 U(W/m²·K)
    pub overall_u_w_m2k: f64,
    /// 전열면적 [m²]
    pub area_m2: f64,
}

/// 열교환기 성능 계산 결과.
#[derive(Debug, Clone)]
pub struct HeatExchangerResult {
    /// 대수평균온도차 LMTD(°C)
    pub lmtd_c: f64,
    /// 열량 Q [W]
    pub heat_duty_w: f64,
}

/// 열교환기 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThermalError {
    /// 단말 온도차가 0 이하라 LMTD가 정의되지 않음
    #[error("단말 온도차가 0 이하입니다 (ΔT1={delta_t1_c:.2}, ΔT2={delta_t2_c:.2}). 온도 교차 여부를 확인하세요.")]
    TemperatureCross { delta_t1_c: f64, delta_t2_c: f64 },
}

/// 향류 기준 대수평균온도차를 계산한다.
/// ΔT1 = 고온측 입구 − 저온측 출구, ΔT2 = 고온측 출구 − 저온측 입구.
/// 두 온도차가 정확히 같으면 로그식이 0/0이 되므로 ΔT1을 그대로 반환한다.
pub fn calculate_lmtd(
    hot_in_c: f64,
    hot_out_c: f64,
    cold_in_c: f64,
    cold_out_c: f64,
) -> Result<f64, ThermalError> {
    let delta_t1 = hot_in_c - cold_out_c;
    let delta_t2 = hot_out_c - cold_in_c;
    if delta_t1 <= 0.0 || delta_t2 <= 0.0 {
        return Err(ThermalError::TemperatureCross {
            delta_t1_c: delta_t1,
            delta_t2_c: delta_t2,
        });
    }
    if delta_t1 == delta_t2 {
        return Ok(delta_t1);
    }
    Ok((delta_t1 - delta_t2) / (delta_t1 / delta_t2).ln())
}

/// 열량 Q = U·A·LMTD [W]를 계산한다.
pub fn calculate_heat_duty(overall_u_w_m2k: f64, area_m2: f64, lmtd_c: f64) -> f64 {
    overall_u_w_m2k * area_m2 * lmtd_c
}

/// 열교환기 성능(LMTD와 열량)을 한 번에 계산한다.
pub fn compute_performance(input: HeatExchangerInput) -> Result<HeatExchangerResult, ThermalError> {
    let lmtd = calculate_lmtd(
        input.hot_in_c,
        input.hot_out_c,
        input.cold_in_c,
        input.cold_out_c,
    )?;
    let heat_duty = calculate_heat_duty(input.overall_u_w_m2k, input.area_m2, lmtd);
    Ok(HeatExchangerResult {
        lmtd_c: lmtd,
        heat_duty_w: heat_duty,
    })
}
