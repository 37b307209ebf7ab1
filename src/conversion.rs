use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(&'static str),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "지원하지 않는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시: `C`, `F`, `K`, `m/s`, `fpm`, `km/h`, `met`, `W/m2`, `clo`, `m2K/W`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::MetabolicRate => {
            let from = parse_metabolic_unit(from_unit_str)?;
            let to = parse_metabolic_unit(to_unit_str)?;
            Ok(convert_metabolic_rate(value, from, to))
        }
        QuantityKind::ClothingInsulation => {
            let from = parse_clothing_unit(from_unit_str)?;
            let to = parse_clothing_unit(to_unit_str)?;
            Ok(convert_clothing(value, from, to))
        }
    }
}

/// 온도 단위 문자열을 파싱한다.
pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 속도 단위 문자열을 파싱한다.
pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "fpm" | "ft/min" => Ok(VelocityUnit::FootPerMinute),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        "mph" => Ok(VelocityUnit::MilePerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 대사율 단위 문자열을 파싱한다.
pub fn parse_metabolic_unit(s: &str) -> Result<MetabolicRateUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "met" => Ok(MetabolicRateUnit::Met),
        "w/m2" | "w/m²" | "wm2" => Ok(MetabolicRateUnit::WattPerSquareMeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 의복 열저항 단위 문자열을 파싱한다.
pub fn parse_clothing_unit(s: &str) -> Result<ClothingUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "clo" => Ok(ClothingUnit::Clo),
        "m2k/w" | "m²k/w" => Ok(ClothingUnit::SquareMeterKelvinPerWatt),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
