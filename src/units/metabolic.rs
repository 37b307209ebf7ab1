use serde::{Deserialize, Serialize};

/// 1 met에 해당하는 대사율 [W/m²].
pub const W_PER_M2_PER_MET: f64 = 58.15;

/// 대사율 단위. 내부 기준은 met이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetabolicRateUnit {
    Met,
    WattPerSquareMeter,
}

fn to_met(value: f64, unit: MetabolicRateUnit) -> f64 {
    match unit {
        MetabolicRateUnit::Met => value,
        MetabolicRateUnit::WattPerSquareMeter => value / W_PER_M2_PER_MET,
    }
}

fn from_met(value_met: f64, unit: MetabolicRateUnit) -> f64 {
    match unit {
        MetabolicRateUnit::Met => value_met,
        MetabolicRateUnit::WattPerSquareMeter => value_met * W_PER_M2_PER_MET,
    }
}

/// 대사율을 변환한다.
pub fn convert_metabolic_rate(value: f64, from: MetabolicRateUnit, to: MetabolicRateUnit) -> f64 {
    let base = to_met(value, from);
    from_met(base, to)
}
