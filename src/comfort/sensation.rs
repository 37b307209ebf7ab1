//! PMV/PPD 원시값을 사람이 읽을 수 있는 척도로 해석하는 모듈.

/// ASHRAE 7점 온열감 척도.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalSensation {
    Cold,
    Cool,
    SlightlyCool,
    Neutral,
    SlightlyWarm,
    Warm,
    Hot,
}

impl ThermalSensation {
    /// 척도 정수값 (-3 ~ +3).
    pub fn scale_value(self) -> i8 {
        match self {
            ThermalSensation::Cold => -3,
            ThermalSensation::Cool => -2,
            ThermalSensation::SlightlyCool => -1,
            ThermalSensation::Neutral => 0,
            ThermalSensation::SlightlyWarm => 1,
            ThermalSensation::Warm => 2,
            ThermalSensation::Hot => 3,
        }
    }
}

/// PMV 값을 가장 가까운 7점 척도로 매핑한다. ±3 밖은 양 끝으로 고정한다.
pub fn sensation_from_pmv(pmv: f64) -> ThermalSensation {
    let rounded = pmv.round().clamp(-3.0, 3.0) as i8;
    match rounded {
        -3 => ThermalSensation::Cold,
        -2 => ThermalSensation::Cool,
        -1 => ThermalSensation::SlightlyCool,
        0 => ThermalSensation::Neutral,
        1 => ThermalSensation::SlightlyWarm,
        2 => ThermalSensation::Warm,
        _ => ThermalSensation::Hot,
    }
}

/// ISO 7730 부속서 A의 실내 환경 범주.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComfortCategory {
    /// |PMV| ≤ 0.2
    A,
    /// |PMV| ≤ 0.5
    B,
    /// |PMV| ≤ 0.7
    C,
    /// 범주 밖
    OutOfCategory,
}

/// PMV 절대값 기준으로 환경 범주를 판정한다.
pub fn category_from_pmv(pmv: f64) -> ComfortCategory {
    let v = pmv.abs();
    if v <= 0.2 {
        ComfortCategory::A
    } else if v <= 0.5 {
        ComfortCategory::B
    } else if v <= 0.7 {
        ComfortCategory::C
    } else {
        ComfortCategory::OutOfCategory
    }
}
