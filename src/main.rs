use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use process_engineering_toolbox::config::{self, Config};
use process_engineering_toolbox::distillation::flash::{flash_distillation, FlashInput};
use process_engineering_toolbox::distillation::vle::equilibrium_curve;
use process_engineering_toolbox::flow::pipe_flow::{compute_pipe_flow, PipeFlowInput};
use process_engineering_toolbox::flow::sweep::{
    sweep_pressure_drop_vs_reynolds, sweep_velocity_vs_reynolds, FlowRateRange,
};
use process_engineering_toolbox::thermal::heat_exchanger::{
    compute_performance, HeatExchangerInput,
};
use process_engineering_toolbox::{app, app::AppError, ui_cli};

#[derive(Parser)]
#[command(name = "process-engineering-toolbox")]
#[command(about = "공정 계산 도구 모음: 열교환기 / 배관 유동 / 플래시 증류", long_about = None)]
struct Cli {
    /// 서브커맨드를 생략하면 대화형 메뉴로 진입한다
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 열교환기 성능(LMTD/열량) 단건 계산
    HeatExchanger {
        /// 고온측 입구 온도 [°C] (생략 시 config.toml 기본값)
        #[arg(long)]
        hot_in: Option<f64>,
        /// 고온측 출구 온도 [°C]
        #[arg(long)]
        hot_out: Option<f64>,
        /// 저온측 입구 온도 [°C]
        #[arg(long)]
        cold_in: Option<f64>,
        /// 저온측 출구 온도 [°C]
        #[arg(long)]
        cold_out: Option<f64>,
        /// 종합전열계수 U [W/m2K]
        #[arg(long, short = 'u')]
        overall_u: Option<f64>,
        /// 전열면적 [m2]
        #[arg(long)]
        area: Option<f64>,
    },
    /// 배관 유동(레이놀즈수/압력손실) 단건 계산
    PipeFlow {
        /// 유체 밀도 [kg/m3]
        #[arg(long)]
        density: Option<f64>,
        /// 동점도 [Pa·s]
        #[arg(long)]
        viscosity: Option<f64>,
        /// 체적 유량 [m3/s]
        #[arg(long)]
        flow: Option<f64>,
        /// 배관 내경 [m]
        #[arg(long)]
        diameter: Option<f64>,
        /// 배관 길이 [m]
        #[arg(long)]
        length: Option<f64>,
    },
    /// 플래시 증류(이성분계) 조성 계산
    Flash {
        /// 상대휘발도 α
        #[arg(long)]
        alpha: Option<f64>,
        /// 공급 몰분율 zF
        #[arg(long)]
        zf: Option<f64>,
        /// 기화율 F (0~1)
        #[arg(long)]
        vapor_fraction: Option<f64>,
    },
    /// 유량 스윕 데이터(유량, 유속, Re, 압력강하)를 CSV로 내보낸다
    SweepFlow {
        /// 시작 유량 [m3/s]
        #[arg(long)]
        start: Option<f64>,
        /// 끝 유량 [m3/s]
        #[arg(long)]
        end: Option<f64>,
        /// 샘플 개수
        #[arg(long)]
        samples: Option<usize>,
        /// 유체 밀도 [kg/m3]
        #[arg(long)]
        density: Option<f64>,
        /// 동점도 [Pa·s]
        #[arg(long)]
        viscosity: Option<f64>,
        /// 배관 내경 [m]
        #[arg(long)]
        diameter: Option<f64>,
        /// 배관 길이 [m]
        #[arg(long)]
        length: Option<f64>,
        /// 출력 CSV 경로 (생략 시 표준 출력)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 평형 곡선 (x, y) 데이터를 CSV로 내보낸다
    EquilibriumCurve {
        /// 상대휘발도 α
        #[arg(long)]
        alpha: Option<f64>,
        /// 샘플 개수
        #[arg(long)]
        samples: Option<usize>,
        /// 출력 CSV 경로 (생략 시 표준 출력)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드 또는 대화형 메뉴를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    match cli.command {
        None => app::run(&mut cfg)?,
        Some(Commands::HeatExchanger {
            hot_in,
            hot_out,
            cold_in,
            cold_out,
            overall_u,
            area,
        }) => cmd_heat_exchanger(&cfg, hot_in, hot_out, cold_in, cold_out, overall_u, area)?,
        Some(Commands::PipeFlow {
            density,
            viscosity,
            flow,
            diameter,
            length,
        }) => cmd_pipe_flow(&cfg, density, viscosity, flow, diameter, length)?,
        Some(Commands::Flash {
            alpha,
            zf,
            vapor_fraction,
        }) => cmd_flash(&cfg, alpha, zf, vapor_fraction)?,
        Some(Commands::SweepFlow {
            start,
            end,
            samples,
            density,
            viscosity,
            diameter,
            length,
            output,
        }) => cmd_sweep_flow(
            &cfg,
            start,
            end,
            samples,
            density,
            viscosity,
            diameter,
            length,
            output.as_deref(),
        )?,
        Some(Commands::EquilibriumCurve {
            alpha,
            samples,
            output,
        }) => cmd_equilibrium_curve(&cfg, alpha, samples, output.as_deref())?,
    }
    Ok(())
}

fn cmd_heat_exchanger(
    cfg: &Config,
    hot_in: Option<f64>,
    hot_out: Option<f64>,
    cold_in: Option<f64>,
    cold_out: Option<f64>,
    overall_u: Option<f64>,
    area: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let d = &cfg.heat_exchanger;
    let input = HeatExchangerInput {
        hot_in_c: hot_in.unwrap_or(d.hot_in_c),
        hot_out_c: hot_out.unwrap_or(d.hot_out_c),
        cold_in_c: cold_in.unwrap_or(d.cold_in_c),
        cold_out_c: cold_out.unwrap_or(d.cold_out_c),
        overall_u_w_m2k: overall_u.unwrap_or(d.overall_u_w_m2k),
        area_m2: area.unwrap_or(d.area_m2),
    };
    ensure(input.overall_u_w_m2k > 0.0, "종합전열계수 U는 0보다 커야 합니다")?;
    ensure(input.area_m2 > 0.0, "전열면적은 0보다 커야 합니다")?;
    let result = compute_performance(input)?;
    ui_cli::print_performance(&result);
    Ok(())
}

fn cmd_pipe_flow(
    cfg: &Config,
    density: Option<f64>,
    viscosity: Option<f64>,
    flow: Option<f64>,
    diameter: Option<f64>,
    length: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let d = &cfg.pipe_flow;
    let input = PipeFlowInput {
        density_kg_per_m3: density.unwrap_or(d.density_kg_per_m3),
        dynamic_viscosity_pa_s: viscosity.unwrap_or(d.dynamic_viscosity_pa_s),
        flow_m3_per_s: flow.unwrap_or(d.flow_m3_per_s),
        diameter_m: diameter.unwrap_or(d.diameter_m),
        length_m: length.unwrap_or(d.length_m),
    };
    ensure(input.density_kg_per_m3 > 0.0, "유체 밀도는 0보다 커야 합니다")?;
    ensure(input.flow_m3_per_s > 0.0, "체적 유량은 0보다 커야 합니다")?;
    ensure(input.length_m > 0.0, "배관 길이는 0보다 커야 합니다")?;
    let result = compute_pipe_flow(input)?;
    ui_cli::print_pipe_flow(&result);
    Ok(())
}

fn cmd_flash(
    cfg: &Config,
    alpha: Option<f64>,
    zf: Option<f64>,
    vapor_fraction: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let d = &cfg.flash;
    let input = FlashInput {
        relative_volatility: alpha.unwrap_or(d.relative_volatility),
        feed_mole_fraction: zf.unwrap_or(d.feed_mole_fraction),
        vapor_fraction: vapor_fraction.unwrap_or(d.vapor_fraction),
    };
    ensure(input.relative_volatility > 0.0, "상대휘발도 α는 0보다 커야 합니다")?;
    ensure(
        (0.0..=1.0).contains(&input.feed_mole_fraction),
        "공급 몰분율 zF는 0과 1 사이여야 합니다",
    )?;
    ensure(
        (0.0..=1.0).contains(&input.vapor_fraction),
        "기화율 F는 0과 1 사이여야 합니다",
    )?;
    let result = flash_distillation(input, cfg.solver.settings());
    ui_cli::print_flash(&result);
    Ok(())
}

/// 원샷 모드의 입력 범위 검사. 대화형 메뉴에서는 재입력을 요구하는 조건이다.
fn ensure(condition: bool, message: &'static str) -> Result<(), AppError> {
    if condition {
        Ok(())
    } else {
        Err(AppError::InvalidInput(message))
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_sweep_flow(
    cfg: &Config,
    start: Option<f64>,
    end: Option<f64>,
    samples: Option<usize>,
    density: Option<f64>,
    viscosity: Option<f64>,
    diameter: Option<f64>,
    length: Option<f64>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let s = &cfg.sweep;
    let p = &cfg.pipe_flow;
    let range = FlowRateRange {
        start_m3_per_s: start.unwrap_or(s.start_m3_per_s),
        end_m3_per_s: end.unwrap_or(s.end_m3_per_s),
        samples: samples.unwrap_or(s.samples),
    };
    let density = density.unwrap_or(p.density_kg_per_m3);
    let viscosity = viscosity.unwrap_or(p.dynamic_viscosity_pa_s);
    let diameter = diameter.unwrap_or(p.diameter_m);
    let length = length.unwrap_or(p.length_m);
    ensure(range.start_m3_per_s > 0.0, "시작 유량은 0보다 커야 합니다")?;
    ensure(
        range.end_m3_per_s >= range.start_m3_per_s,
        "끝 유량은 시작 유량보다 작을 수 없습니다",
    )?;
    ensure(length > 0.0, "배관 길이는 0보다 커야 합니다")?;

    let points: Vec<_> = sweep_velocity_vs_reynolds(range, diameter, density, viscosity)?.collect();
    let reynolds: Vec<f64> = points.iter().map(|pt| pt.reynolds).collect();
    let velocity: Vec<f64> = points.iter().map(|pt| pt.velocity_m_per_s).collect();

    let mut csv = String::from("flow_m3_per_s,velocity_m_per_s,reynolds,pressure_drop_pa\n");
    let drops = sweep_pressure_drop_vs_reynolds(&reynolds, &velocity, length, diameter, density);
    for (point, drop) in points.iter().zip(drops) {
        let drop = drop?;
        csv.push_str(&format!(
            "{},{},{},{}\n",
            point.flow_m3_per_s, point.velocity_m_per_s, point.reynolds, drop
        ));
    }
    write_csv(&csv, points.len(), output)
}

fn cmd_equilibrium_curve(
    cfg: &Config,
    alpha: Option<f64>,
    samples: Option<usize>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let alpha = alpha.unwrap_or(cfg.flash.relative_volatility);
    let samples = samples.unwrap_or(cfg.sweep.curve_samples);
    ensure(alpha > 0.0, "상대휘발도 α는 0보다 커야 합니다")?;

    let mut csv = String::from("x,y\n");
    let mut rows = 0usize;
    for (x, y) in equilibrium_curve(alpha, samples) {
        csv.push_str(&format!("{x},{y}\n"));
        rows += 1;
    }
    write_csv(&csv, rows, output)
}

/// CSV 문자열을 파일 또는 표준 출력으로 내보낸다.
fn write_csv(
    csv: &str,
    rows: usize,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("{rows}개 샘플을 {}에 저장했습니다.", path.display());
    } else {
        print!("{csv}");
    }
    Ok(())
}
