use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::distillation::flash::{flash_distillation, FlashInput, FlashResult};
use crate::flow::pipe_flow::{compute_pipe_flow, FlowRegime, PipeFlowInput, PipeFlowResult};
use crate::thermal::heat_exchanger::{compute_performance, HeatExchangerInput, HeatExchangerResult};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    HeatExchanger,
    PipeFlow,
    FlashDistillation,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Process Engineering Toolbox ===");
    println!("1) 열교환기 성능 (LMTD/열량)");
    println!("2) 배관 유동 (레이놀즈수/압력손실)");
    println!("3) 플래시 증류 (이성분계)");
    println!("4) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::HeatExchanger),
            "2" => return Ok(MenuChoice::PipeFlow),
            "3" => return Ok(MenuChoice::FlashDistillation),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 열교환기 성능 메뉴를 처리한다.
pub fn handle_heat_exchanger(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 열교환기 성능 --");
    let d = &cfg.heat_exchanger;
    let input = HeatExchangerInput {
        hot_in_c: read_f64_or("고온측 입구 온도 [°C]", d.hot_in_c)?,
        hot_out_c: read_f64_or("고온측 출구 온도 [°C]", d.hot_out_c)?,
        cold_in_c: read_f64_or("저온측 입구 온도 [°C]", d.cold_in_c)?,
        cold_out_c: read_f64_or("저온측 출구 온도 [°C]", d.cold_out_c)?,
        overall_u_w_m2k: read_positive_or("종합전열계수 U [W/m2K]", d.overall_u_w_m2k)?,
        area_m2: read_positive_or("전열면적 [m2]", d.area_m2)?,
    };
    let result = compute_performance(input)?;
    print_performance(&result);
    Ok(())
}

/// 배관 유동 메뉴를 처리한다.
pub fn handle_pipe_flow(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 배관 유동 --");
    let d = &cfg.pipe_flow;
    let input = PipeFlowInput {
        density_kg_per_m3: read_positive_or("유체 밀도 [kg/m3]", d.density_kg_per_m3)?,
        dynamic_viscosity_pa_s: read_positive_or("동점도 [Pa·s]", d.dynamic_viscosity_pa_s)?,
        flow_m3_per_s: read_positive_or("체적 유량 [m3/s]", d.flow_m3_per_s)?,
        diameter_m: read_positive_or("배관 내경 [m]", d.diameter_m)?,
        length_m: read_positive_or("배관 길이 [m]", d.length_m)?,
    };
    let result = compute_pipe_flow(input)?;
    print_pipe_flow(&result);
    Ok(())
}

/// 플래시 증류 메뉴를 처리한다.
pub fn handle_flash(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 플래시 증류 --");
    let d = &cfg.flash;
    let input = FlashInput {
        relative_volatility: read_positive_or("상대휘발도 α", d.relative_volatility)?,
        feed_mole_fraction: read_fraction_or("공급 몰분율 zF", d.feed_mole_fraction)?,
        vapor_fraction: read_fraction_or("기화율 F", d.vapor_fraction)?,
    };
    let result = flash_distillation(input, cfg.solver.settings());
    print_flash(&result);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재 솔버 설정: 최대 반복 {}회, 허용 오차 {:e}",
        cfg.solver.max_iterations, cfg.solver.tolerance
    );
    let sel = read_line("변경하시겠습니까? (y/엔터=취소): ")?;
    if !sel.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }
    cfg.solver.max_iterations = read_usize_or("최대 반복 횟수", cfg.solver.max_iterations)?;
    cfg.solver.tolerance = read_positive_or("허용 오차", cfg.solver.tolerance)?;
    println!(
        "솔버 설정이 반복 {}회 / 오차 {:e} 로 변경되었습니다.",
        cfg.solver.max_iterations, cfg.solver.tolerance
    );
    Ok(())
}

/// 열교환기 결과를 출력한다.
pub fn print_performance(result: &HeatExchangerResult) {
    println!("LMTD: {:.2} °C", result.lmtd_c);
    println!(
        "열량 Q: {:.2} W ({:.2} kW)",
        result.heat_duty_w,
        result.heat_duty_w / 1000.0
    );
}

/// 배관 유동 결과를 출력한다.
pub fn print_pipe_flow(result: &PipeFlowResult) {
    println!("유속: {:.4} m/s", result.velocity_m_per_s);
    println!(
        "레이놀즈수: {:.2} ({})",
        result.reynolds,
        regime_label(result.regime)
    );
    println!("압력강하: {:.2} Pa", result.pressure_drop_pa);
}

/// 플래시 증류 결과를 출력한다.
pub fn print_flash(result: &FlashResult) {
    println!("액상 몰분율 x: {:.4}", result.liquid_mole_fraction);
    println!("기상 몰분율 y: {:.4}", result.vapor_mole_fraction);
    println!("반복 횟수: {}", result.iterations);
    if !result.converged {
        println!("경고: 반복 한도 안에 수렴하지 못했습니다. 마지막 계산값을 표시합니다.");
    }
}

fn regime_label(regime: FlowRegime) -> &'static str {
    match regime {
        FlowRegime::Laminar => "층류",
        FlowRegime::Transitional => "천이 영역",
        FlowRegime::Turbulent => "난류",
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 기본값을 보여주고, 빈 입력이면 기본값을 쓰는 f64 입력 헬퍼.
fn read_f64_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [기본 {default}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_positive_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let v = read_f64_or(label, default)?;
        if v > 0.0 {
            return Ok(v);
        }
        println!("0보다 큰 값을 입력하세요.");
    }
}

fn read_fraction_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let v = read_f64_or(label, default)?;
        if (0.0..=1.0).contains(&v) {
            return Ok(v);
        }
        println!("0과 1 사이 값을 입력하세요.");
    }
}

fn read_usize_or(label: &str, default: usize) -> Result<usize, AppError> {
    loop {
        let s = read_line(&format!("{label} [기본 {default}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("0 이상의 정수를 입력하세요."),
        }
    }
}
