use serde::{Deserialize, Serialize};

/// 1 clo에 해당하는 의복 열저항 [m²K/W].
pub const M2KW_PER_CLO: f64 = 0.155;

/// 의복 열저항 단위. 내부 기준은 clo이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClothingUnit {
    Clo,
    SquareMeterKelvinPerWatt,
}

fn to_clo(value: f64, unit: ClothingUnit) -> f64 {
    match unit {
        ClothingUnit::Clo => value,
        ClothingUnit::SquareMeterKelvinPerWatt => value / M2KW_PER_CLO,
    }
}

fn from_clo(value_clo: f64, unit: ClothingUnit) -> f64 {
    match unit {
        ClothingUnit::Clo => value_clo,
        ClothingUnit::SquareMeterKelvinPerWatt => value_clo * M2KW_PER_CLO,
    }
}

/// 의복 열저항을 변환한다.
pub fn convert_clothing(value: f64, from: ClothingUnit, to: ClothingUnit) -> f64 {
    let base = to_clo(value, from);
    from_clo(base, to)
}
