/// 라울의 법칙 기반 이성분계 평형식으로 기상 몰분율을 계산한다.
/// y = αx / (1 + (α−1)x), x ∈ [0, 1]. α = 1이면 식 그대로 y = x가 된다(분리 없음).
pub fn vle_equilibrium(liquid_mole_fraction: f64, relative_volatility: f64) -> f64 {
    relative_volatility * liquid_mole_fraction
        / (1.0 + (relative_volatility - 1.0) * liquid_mole_fraction)
}

/// x ∈ [0, 1]을 등간격으로 나눠 평형 곡선 (x, y) 점을 내놓는 지연 이터레이터.
#[derive(Debug, Clone)]
pub struct EquilibriumCurve {
    relative_volatility: f64,
    samples: usize,
    index: usize,
}

/// 상대휘발도 α에 대한 평형 곡선 점 `samples`개를 생성한다.
/// 첫 점은 x = 0, 마지막 점은 x = 1을 정확히 짚는다.
pub fn equilibrium_curve(relative_volatility: f64, samples: usize) -> EquilibriumCurve {
    EquilibriumCurve {
        relative_volatility,
        samples,
        index: 0,
    }
}

impl Iterator for EquilibriumCurve {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.samples {
            return None;
        }
        let x = if self.index == 0 {
            0.0
        } else if self.index + 1 == self.samples {
            1.0
        } else {
            self.index as f64 / (self.samples - 1) as f64
        };
        self.index += 1;
        Some((x, vle_equilibrium(x, self.relative_volatility)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.index;
        (remaining, Some(remaining))
    }
}
