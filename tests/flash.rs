//! 플래시 증류 솔버와 평형 곡선 테스트.
use process_engineering_toolbox::distillation::flash::{
    flash_distillation, FlashInput, FlashResult, SolverSettings,
};
use process_engineering_toolbox::distillation::vle::{equilibrium_curve, vle_equilibrium};

fn solve(alpha: f64, zf: f64, vapor_fraction: f64) -> FlashResult {
    flash_distillation(
        FlashInput {
            relative_volatility: alpha,
            feed_mole_fraction: zf,
            vapor_fraction,
        },
        SolverSettings::default(),
    )
}

/// 보고된 (x, y)가 평형식과 물질수지 양쪽의 진짜 고정점인지 확인한다.
fn assert_fixed_point(result: &FlashResult, alpha: f64, zf: f64, vapor_fraction: f64) {
    let x = result.liquid_mole_fraction;
    let y = result.vapor_mole_fraction;
    let y_residual = (y - vle_equilibrium(x, alpha)).abs();
    let x_residual = (x - zf / (1.0 + vapor_fraction * (y - x))).abs();
    assert!(y_residual < 1e-4, "평형식 잔차 {y_residual:e}");
    assert!(x_residual < 1e-4, "물질수지 잔차 {x_residual:e}");
}

#[test]
fn default_case_converges_quickly() {
    // α = 2, zF = 0.5, F = 0.5: 잘 수렴하는 기준 케이스.
    let result = solve(2.0, 0.5, 0.5);
    assert!(result.converged);
    assert!(
        result.iterations < 50,
        "너무 많은 반복: {}",
        result.iterations
    );
    let x = result.liquid_mole_fraction;
    let y = result.vapor_mole_fraction;
    assert!(x > 0.0 && x < 1.0, "x={x}");
    assert!(y > 0.0 && y < 1.0, "y={y}");
    // α > 1이면 저비점 성분이 기상에 농축된다.
    assert!(y > x, "y={y} x={x}");
    assert_fixed_point(&result, 2.0, 0.5, 0.5);
}

#[test]
fn pure_vapor_fraction_still_converges() {
    // F = 1에서도 분모 1 + F(y − x)는 0에서 떨어져 있다.
    let result = solve(2.0, 0.5, 1.0);
    assert!(result.converged);
    assert_fixed_point(&result, 2.0, 0.5, 1.0);
}

#[test]
fn zero_vapor_fraction_fixes_liquid_at_feed() {
    // F = 0이면 갱신식이 x = zF로 줄어 첫 반복에서 수렴한다.
    let result = solve(2.0, 0.4, 0.0);
    assert!(result.converged);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.liquid_mole_fraction, 0.4);
    assert_eq!(result.vapor_mole_fraction, vle_equilibrium(0.4, 2.0));
}

#[test]
fn unit_volatility_degenerates_to_feed_composition() {
    // α = 1이면 y = x라 분리가 없고, x₀ = zF가 그대로 고정점이다.
    let result = solve(1.0, 0.3, 0.5);
    assert!(result.converged);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.liquid_mole_fraction, 0.3);
    assert_eq!(result.vapor_mole_fraction, 0.3);
}

#[test]
fn boundary_feed_compositions_are_trivial() {
    // zF = 0과 1은 단일 성분 극한이다.
    let lower = solve(2.5, 0.0, 0.5);
    assert!(lower.converged);
    assert_eq!(lower.liquid_mole_fraction, 0.0);
    assert_eq!(lower.vapor_mole_fraction, 0.0);

    let upper = solve(2.5, 1.0, 0.5);
    assert!(upper.converged);
    assert_eq!(upper.liquid_mole_fraction, 1.0);
    assert_eq!(upper.vapor_mole_fraction, 1.0);
}

#[test]
fn repelling_fixed_point_reports_nonconvergence() {
    // α = 0.05, F = 1에서는 고정점이 강하게 반발해 궤도가 진동한다.
    // 예외 없이 converged = false와 마지막 값을 보고해야 한다.
    let result = solve(0.05, 0.5, 1.0);
    assert!(!result.converged);
    assert_eq!(result.iterations, 100);
}

#[test]
fn iteration_budget_is_respected() {
    let result = flash_distillation(
        FlashInput {
            relative_volatility: 0.05,
            feed_mole_fraction: 0.5,
            vapor_fraction: 1.0,
        },
        SolverSettings {
            max_iterations: 7,
            tolerance: 1e-12,
        },
    );
    assert!(!result.converged);
    assert_eq!(result.iterations, 7);
}

#[test]
fn equilibrium_curve_spans_unit_interval() {
    let points: Vec<(f64, f64)> = equilibrium_curve(2.0, 500).collect();
    assert_eq!(points.len(), 500);
    assert_eq!(points[0], (0.0, 0.0));
    assert_eq!(points[499], (1.0, 1.0));
    // α > 1이면 곡선은 대각선 위에 있다.
    for &(x, y) in &points[1..499] {
        assert!(y > x, "({x}, {y})");
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// 수렴으로 보고된 결과는 항상 진짜 고정점이어야 한다.
        #[test]
        fn converged_results_are_fixed_points(
            alpha in 1.1_f64..5.0,
            zf in 0.05_f64..0.95,
            vapor_fraction in 0.0_f64..1.0,
        ) {
            let result = solve(alpha, zf, vapor_fraction);
            if result.converged {
                let x = result.liquid_mole_fraction;
                let y = result.vapor_mole_fraction;
                prop_assert!((y - vle_equilibrium(x, alpha)).abs() < 1e-4);
                prop_assert!((x - zf / (1.0 + vapor_fraction * (y - x))).abs() < 1e-4);
            }
        }

        /// α = 1은 항등 평형이라 곡선이 대각선과 일치한다.
        #[test]
        fn unit_volatility_curve_is_identity(x in 0.0_f64..=1.0) {
            prop_assert!((vle_equilibrium(x, 1.0) - x).abs() < 1e-12);
        }
    }
}
