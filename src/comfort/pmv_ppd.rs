//! PMV(예상 평균 온열감)/PPD(예상 불만족률) 계산 모듈.
//!
//! Fanger 모델 기반. 의복 표면 온도는 감쇠 평균을 쓰는 고정점 반복으로 풀고,
//! 반복 횟수는 150회로 제한한다. 상한 도달은 오류가 아니라 경고로 처리하고
//! 마지막 근사값으로 계산을 이어간다.

use crate::comfort::psychrometrics;
use crate::units::clothing::M2KW_PER_CLO;
use crate::units::metabolic::W_PER_M2_PER_MET;
use serde::{Deserialize, Serialize};

/// 고정점 반복의 수렴 판정 허용치.
const CONVERGENCE_EPS: f64 = 0.00015;

/// 고정점 반복 횟수 상한. 초과 시 경고 후 마지막 근사값을 사용한다.
pub const MAX_ITERATIONS: u32 = 150;

/// PMV/PPD 계산 입력값.
///
/// 유한한 실수라면 어떤 값이든 계산이 가능하다. 물리적으로 무의미한 입력
/// (음수 습도 등)은 검증하지 않으며 수학적으로 정의된 결과를 그대로 돌려준다.
/// 비유한 입력은 IEEE-754 규칙에 따라 NaN/무한대로 전파된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortInput {
    /// 공기(건구) 온도 [°C]
    pub air_temp_c: f64,
    /// 평균 복사 온도 [°C]
    pub radiant_temp_c: f64,
    /// 기류 속도 [m/s]
    pub air_velocity_m_s: f64,
    /// 상대습도 [%]
    pub rel_humidity_pct: f64,
    /// 대사율 [met]
    pub metabolic_rate_met: f64,
    /// 의복 열저항 [clo]
    pub clothing_clo: f64,
    /// 외부 일 [met]
    pub external_work_met: f64,
}

impl Default for ComfortInput {
    /// 사무 환경 기준의 표준 기본값.
    fn default() -> Self {
        Self {
            air_temp_c: 25.0,
            radiant_temp_c: 25.0,
            air_velocity_m_s: 0.1,
            rel_humidity_pct: 50.0,
            metabolic_rate_met: 1.2,
            clothing_clo: 0.5,
            external_work_met: 0.0,
        }
    }
}

/// PMV/PPD 계산 결과.
#[derive(Debug, Clone)]
pub struct ComfortIndices {
    /// 예상 평균 온열감. -3(춥다) ~ +3(덥다), 0이 중립.
    pub pmv: f64,
    /// 예상 불만족률 [%]. 수식 구조상 약 5~100 범위이며 클램핑하지 않는다.
    pub ppd_pct: f64,
    /// 의복 표면 온도 [°C]
    pub clothing_surface_temp_c: f64,
    /// 고정점 반복 실행 횟수
    pub iterations: u32,
    /// 허용치 이내로 수렴했는지 여부
    pub converged: bool,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// PMV와 PPD를 계산한다.
///
/// 단일 직선형 계산에 유한 반복 루프 하나뿐이며 공유 상태가 없어
/// 여러 스레드에서 동시에 호출해도 안전하다.
pub fn compute_pmv_ppd(input: &ComfortInput) -> ComfortIndices {
    let mut warnings = Vec::new();

    // 수증기 분압 [Pa]
    let pa = psychrometrics::vapor_pressure_pa(input.air_temp_c, input.rel_humidity_pct);
    // 의복 열저항 [m²K/W]
    let icl = M2KW_PER_CLO * input.clothing_clo;
    // 대사율/외부 일 [W/m²], 체내 발열량
    let m = input.metabolic_rate_met * W_PER_M2_PER_MET;
    let w = input.external_work_met * W_PER_M2_PER_MET;
    let mw = m - w;

    // 의복 면적비
    let fcl = if icl <= 0.078 {
        1.0 + 1.29 * icl
    } else {
        1.05 + 0.645 * icl
    };

    // 강제 대류 열전달 계수
    let hcf = 12.1 * input.air_velocity_m_s.sqrt();
    let taa = input.air_temp_c + 273.0;
    let tra = input.radiant_temp_c + 273.0;
    // 의복 표면 온도 초기 추정값
    let tcla = taa + (35.5 - input.air_temp_c) / (3.5 * icl + 0.1);

    let p1 = icl * fcl;
    let p2 = p1 * 3.96;
    let p3 = p1 * 100.0;
    let p4 = p1 * taa;
    let p5 = 308.7 - 0.028 * mw + p2 * (tra / 100.0).powi(4);

    // 의복 표면 온도비 xn에 대한 고정점 반복. xf는 감쇠용 직전 추정값.
    let mut xn = tcla / 100.0;
    let mut xf = tcla / 50.0;
    // 루프가 한 번도 돌지 않는 퇴화 입력에서도 hc가 정의되도록 강제 대류값으로 초기화한다.
    let mut hc = hcf;
    let mut iterations = 0u32;
    let mut converged = true;

    while (xn - xf).abs() > CONVERGENCE_EPS {
        xf = (xf + xn) / 2.0;
        // 자연 대류 계수. 분수 지수 앞에 절대값을 먼저 취해 정의역 문제를 피한다.
        let hcn = 2.38 * (100.0 * xf - taa).abs().powf(0.25);
        hc = if hcf > hcn { hcf } else { hcn };
        xn = (p5 + p4 * hc - p2 * xf.powi(4)) / (100.0 + p3 * hc);
        iterations += 1;
        if iterations > MAX_ITERATIONS {
            converged = false;
            warnings.push(format!(
                "고정점 반복이 {MAX_ITERATIONS}회를 초과했습니다. 마지막 근사값으로 계속합니다. (max iterations exceeded)"
            ));
            break;
        }
    }
    // 의복 표면 온도 [°C]
    let tcl = 100.0 * xn - 273.0;

    // 열손실 항목들 [W/m²]
    // hl1: 피부 확산 증발
    let hl1 = 3.05 * 0.001 * (5733.0 - 6.99 * mw - pa);
    // hl2: 발한 증발. 좌식 기준(1 met) 초과분에만 적용.
    let hl2 = if mw > 58.15 { 0.42 * (mw - 58.15) } else { 0.0 };
    // hl3: 호흡 잠열
    let hl3 = 1.7 * 0.00001 * m * (5867.0 - pa);
    // hl4: 호흡 현열
    let hl4 = 0.0014 * m * (34.0 - input.air_temp_c);
    // hl5: 복사
    let hl5 = 3.96 * fcl * (xn.powi(4) - (tra / 100.0).powi(4));
    // hl6: 대류 (루프에서 마지막으로 계산된 hc 사용)
    let hl6 = fcl * hc * (tcl - input.air_temp_c);

    // 온열감 계수
    let ts = 0.303 * (-0.036 * m).exp() + 0.028;

    let pmv = ts * (mw - hl1 - hl2 - hl3 - hl4 - hl5 - hl6);
    let ppd_pct = ppd_from_pmv(pmv);

    ComfortIndices {
        pmv,
        ppd_pct,
        clothing_surface_temp_c: tcl,
        iterations,
        converged,
        warnings,
    }
}

/// PMV 값에서 PPD[%]를 계산한다.
///
/// 짝수 거듭제곱만 포함하므로 PMV 부호에 대해 정확히 대칭이며,
/// PMV = 0에서 최소값 5%를 가진다. 범위를 클램핑하지 않는다.
pub fn ppd_from_pmv(pmv: f64) -> f64 {
    100.0 - 95.0 * (-0.03353 * pmv.powi(4) - 0.2179 * pmv.powi(2)).exp()
}
