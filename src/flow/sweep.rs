use crate::flow::pipe_flow::{self, PipeFlowError};

/// 등간격 유량 샘플 구간 [m3/s].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRateRange {
    /// 시작 유량 [m3/s]
    pub start_m3_per_s: f64,
    /// 끝 유량 [m3/s]
    pub end_m3_per_s: f64,
    /// 샘플 개수
    pub samples: usize,
}

impl Default for FlowRateRange {
    fn default() -> Self {
        Self {
            start_m3_per_s: 0.001,
            end_m3_per_s: 0.05,
            samples: 100,
        }
    }
}

impl FlowRateRange {
    /// index번째 샘플 유량. 마지막 샘플은 끝값을 그대로 돌려줘
    /// 누적 오차로 구간 밖에 나가지 않게 한다.
    fn sample(&self, index: usize) -> f64 {
        if self.samples <= 1 || index == 0 {
            return self.start_m3_per_s;
        }
        if index + 1 == self.samples {
            return self.end_m3_per_s;
        }
        let step = (self.end_m3_per_s - self.start_m3_per_s) / (self.samples - 1) as f64;
        self.start_m3_per_s + step * index as f64
    }
}

/// 유량 스윕의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// 체적 유량 [m3/s]
    pub flow_m3_per_s: f64,
    /// 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 레이놀즈수
    pub reynolds: f64,
}

/// 유량 구간을 훑으며 (유량, 유속, Re)를 내놓는 지연 이터레이터.
/// Clone이므로 같은 구간을 여러 번 순회할 수 있다.
#[derive(Debug, Clone)]
pub struct VelocityReynoldsSweep {
    range: FlowRateRange,
    diameter_m: f64,
    density_kg_per_m3: f64,
    dynamic_viscosity_pa_s: f64,
    index: usize,
}

impl Iterator for VelocityReynoldsSweep {
    type Item = SweepPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.range.samples {
            return None;
        }
        let flow_m3_per_s = self.range.sample(self.index);
        self.index += 1;
        let (reynolds, velocity) = pipe_flow::calculate_reynolds(
            flow_m3_per_s,
            self.diameter_m,
            self.density_kg_per_m3,
            self.dynamic_viscosity_pa_s,
        )
        .ok()?;
        Some(SweepPoint {
            flow_m3_per_s,
            velocity_m_per_s: velocity,
            reynolds,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // 내경과 점도는 생성 시 검사를 통과했으므로 남은 샘플을 전부 내놓는다.
        let remaining = self.range.samples - self.index;
        (remaining, Some(remaining))
    }
}

/// 유량 구간에 대한 유속/레이놀즈수 스윕을 만든다.
/// 내경과 점도는 생성 시 한 번만 검사하므로 이터레이터 자체는 실패하지 않는다.
pub fn sweep_velocity_vs_reynolds(
    range: FlowRateRange,
    diameter_m: f64,
    density_kg_per_m3: f64,
    dynamic_viscosity_pa_s: f64,
) -> Result<VelocityReynoldsSweep, PipeFlowError> {
    if diameter_m <= 0.0 {
        return Err(PipeFlowError::NonPositiveDiameter { diameter_m });
    }
    if dynamic_viscosity_pa_s <= 0.0 {
        return Err(PipeFlowError::NonPositiveViscosity {
            viscosity_pa_s: dynamic_viscosity_pa_s,
        });
    }
    Ok(VelocityReynoldsSweep {
        range,
        diameter_m,
        density_kg_per_m3,
        dynamic_viscosity_pa_s,
        index: 0,
    })
}

/// Re/유속 목록을 순서대로 짝지어 압력강하를 계산하는 지연 이터레이터.
/// 길이가 다르면 짧은 쪽에서 멈춘다.
pub fn sweep_pressure_drop_vs_reynolds<'a>(
    reynolds_list: &'a [f64],
    velocity_list: &'a [f64],
    length_m: f64,
    diameter_m: f64,
    density_kg_per_m3: f64,
) -> impl Iterator<Item = Result<f64, PipeFlowError>> + 'a {
    reynolds_list
        .iter()
        .zip(velocity_list.iter())
        .map(move |(&reynolds, &velocity)| {
            pipe_flow::calculate_pressure_drop(
                reynolds,
                length_m,
                diameter_m,
                velocity,
                density_kg_per_m3,
            )
        })
}
