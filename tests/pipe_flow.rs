//! 배관 유동 계산 회귀 테스트. 상온 물 기준값과 영역 경계를 확인한다.
use process_engineering_toolbox::flow::pipe_flow::{
    calculate_pressure_drop, calculate_reynolds, classify_regime, compute_pipe_flow, FlowRegime,
    PipeFlowError, PipeFlowInput,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn reynolds_reference_point() {
    // Q = 0.01 m3/s, D = 0.1 m → v = 4Q/(πD²) = 4/π ≈ 1.2732 m/s
    // 물(ρ = 997, μ = 0.001): Re = 997 × 1.2732 × 0.1 / 0.001 ≈ 126 942
    let (re, v) = calculate_reynolds(0.01, 0.1, 997.0, 0.001).expect("reynolds");
    assert_close("velocity", v, 1.273_24, 1e-4);
    assert_close("reynolds", re, 126_942.0, 1e-4);
}

#[test]
fn reynolds_rejects_nonpositive_diameter_and_viscosity() {
    assert!(matches!(
        calculate_reynolds(0.01, 0.0, 997.0, 0.001),
        Err(PipeFlowError::NonPositiveDiameter { .. })
    ));
    assert!(matches!(
        calculate_reynolds(0.01, 0.1, 997.0, -0.001),
        Err(PipeFlowError::NonPositiveViscosity { .. })
    ));
}

#[test]
fn regime_boundaries_belong_to_transitional() {
    // 경계값 2000과 4000은 모두 천이 영역 소속이다.
    assert_eq!(classify_regime(1_999.999), FlowRegime::Laminar);
    assert_eq!(classify_regime(2_000.0), FlowRegime::Transitional);
    assert_eq!(classify_regime(3_000.0), FlowRegime::Transitional);
    assert_eq!(classify_regime(4_000.0), FlowRegime::Transitional);
    assert_eq!(classify_regime(4_000.001), FlowRegime::Turbulent);
}

#[test]
fn friction_factor_switches_branch_at_2000() {
    // Re < 2000: 층류식 f = 64/Re. Re = 2000부터는 Blasius 근사.
    // ΔP = f × (L/D) × (ρv²/2), L/D = 100, ρv²/2 = 500 Pa로 고정한다.
    let length = 10.0;
    let diameter = 0.1;
    let density = 1_000.0;
    let velocity = 1.0;

    // Re = 1999.5 → f = 64/1999.5, ΔP = f × 100 × 500 ≈ 1600.40
    let below = calculate_pressure_drop(1_999.5, length, diameter, velocity, density)
        .expect("laminar branch");
    assert_close("dp_laminar", below, 64.0 / 1_999.5 * 50_000.0, 1e-12);

    // Re = 2000 → f = 0.079/2000^0.25 ≈ 0.011813, ΔP ≈ 590.67
    let at = calculate_pressure_drop(2_000.0, length, diameter, velocity, density)
        .expect("blasius branch");
    assert_close("dp_blasius", at, 590.67, 1e-4);

    // 층류식을 2000에 그대로 적용했다면 1600 Pa이 나왔을 것이다.
    assert!(at < 1_000.0, "branch did not switch, dp={at}");
}

#[test]
fn pressure_drop_rejects_nonpositive_reynolds() {
    assert!(matches!(
        calculate_pressure_drop(0.0, 10.0, 0.1, 1.0, 1_000.0),
        Err(PipeFlowError::NonPositiveReynolds { .. })
    ));
    assert!(matches!(
        calculate_pressure_drop(-100.0, 10.0, 0.1, 1.0, 1_000.0),
        Err(PipeFlowError::NonPositiveReynolds { .. })
    ));
}

#[test]
fn compute_pipe_flow_reference_point() {
    // 위 기준점의 전체 계산: 난류, Blasius f ≈ 0.0041853 → ΔP ≈ 338.2 Pa
    let result = compute_pipe_flow(PipeFlowInput {
        density_kg_per_m3: 997.0,
        dynamic_viscosity_pa_s: 0.001,
        flow_m3_per_s: 0.01,
        diameter_m: 0.1,
        length_m: 10.0,
    })
    .expect("pipe flow");
    assert_eq!(result.regime, FlowRegime::Turbulent);
    assert_close("velocity", result.velocity_m_per_s, 1.273_24, 1e-4);
    assert_close("reynolds", result.reynolds, 126_942.0, 1e-4);
    assert_close("dp", result.pressure_drop_pa, 338.23, 1e-3);
}

#[test]
fn compute_pipe_flow_zero_flow_is_domain_error() {
    // 유량 0이면 Re = 0이라 마찰계수가 정의되지 않는다.
    let err = compute_pipe_flow(PipeFlowInput {
        density_kg_per_m3: 997.0,
        dynamic_viscosity_pa_s: 0.001,
        flow_m3_per_s: 0.0,
        diameter_m: 0.1,
        length_m: 10.0,
    })
    .unwrap_err();
    assert!(matches!(err, PipeFlowError::NonPositiveReynolds { .. }));
}
