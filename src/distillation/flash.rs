use crate::distillation::vle::vle_equilibrium;

/// 플래시 증류 계산 입력.
#[derive(Debug, Clone)]
pub struct FlashInput {
    /// 상대휘발도 α
    pub relative_volatility: f64,
    /// 공급액 중 저비점 성분 몰분율 zF
    pub feed_mole_fraction: f64,
    /// 기화율 F (0~1)
    pub vapor_fraction: f64,
}

/// 고정점 반복 설정.
#[derive(Debug, Clone, Copy)]
pub struct SolverSettings {
    /// 최대 반복 횟수
    pub max_iterations: usize,
    /// 수렴 판정 기준 |x_new − x_old|
    pub tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// 플래시 증류 계산 결과. 미수렴이어도 마지막 값을 그대로 담는다.
#[derive(Debug, Clone)]
pub struct FlashResult {
    /// 액상 몰분율 x
    pub liquid_mole_fraction: f64,
    /// 기상 몰분율 y
    pub vapor_mole_fraction: f64,
    /// 수행한 반복 횟수
    pub iterations: usize,
    /// 수렴 여부
    pub converged: bool,
}

/// 축차 대입(고정점 반복)으로 플래시 증류의 액상/기상 조성을 구한다.
///
/// x₀ = zF에서 시작해 매 반복 y = vle(x_old), x_new = zF / (1 + F·(y − x_old))를
/// 적용하고 |x_new − x_old| < tolerance면 멈춘다. 반복 한도를 다 쓰면 converged =
/// false와 함께 마지막 (x, y)를 돌려주며, 그 처리는 호출 측 판단에 맡긴다.
/// α = 1이면 y = x₀라서 첫 반복에서 x가 zF에 고정되는 퇴화 입력이 된다.
/// x, y ∈ [0, 1]인 동안 분모 1 + F·(y − x)는 0에서 떨어져 있고, 조합이 발산해
/// 구간을 벗어나더라도 IEEE 연산 안에서 값만 흘러갈 뿐 패닉은 없다.
pub fn flash_distillation(input: FlashInput, settings: SolverSettings) -> FlashResult {
    let zf = input.feed_mole_fraction;
    let mut x_old = zf;
    let mut x = zf;
    let mut y = vle_equilibrium(zf, input.relative_volatility);
    for iteration in 1..=settings.max_iterations {
        y = vle_equilibrium(x_old, input.relative_volatility);
        x = zf / (1.0 + input.vapor_fraction * (y - x_old));
        if (x - x_old).abs() < settings.tolerance {
            return FlashResult {
                liquid_mole_fraction: x,
                vapor_mole_fraction: y,
                iterations: iteration,
                converged: true,
            };
        }
        x_old = x;
    }
    FlashResult {
        liquid_mole_fraction: x,
        vapor_mole_fraction: y,
        iterations: settings.max_iterations,
        converged: false,
    }
}
