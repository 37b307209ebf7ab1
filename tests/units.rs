//! 단위 변환 회귀 테스트.
use comfort_toolbox::conversion::{self, ConversionError};
use comfort_toolbox::quantity::QuantityKind;
use comfort_toolbox::units::{
    convert_clothing, convert_metabolic_rate, convert_temperature, convert_velocity, ClothingUnit,
    MetabolicRateUnit, TemperatureUnit, VelocityUnit,
};

#[test]
fn fahrenheit_to_celsius() {
    let c = convert_temperature(77.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
    assert!((c - 25.0).abs() < 1e-12);
    let k = convert_temperature(25.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
    assert!((k - 298.15).abs() < 1e-12);
}

#[test]
fn meter_per_second_to_fpm() {
    let fpm = convert_velocity(
        1.0,
        VelocityUnit::MeterPerSecond,
        VelocityUnit::FootPerMinute,
    );
    assert!((fpm - 196.850_393_700_787).abs() < 1e-9, "fpm={fpm}");
    let back = convert_velocity(fpm, VelocityUnit::FootPerMinute, VelocityUnit::MeterPerSecond);
    assert!((back - 1.0).abs() < 1e-12);
}

#[test]
fn met_to_watt_per_square_meter() {
    let w = convert_metabolic_rate(
        1.2,
        MetabolicRateUnit::Met,
        MetabolicRateUnit::WattPerSquareMeter,
    );
    assert!((w - 69.78).abs() < 1e-12, "w={w}");
}

#[test]
fn clo_to_thermal_resistance() {
    let r = convert_clothing(
        0.5,
        ClothingUnit::Clo,
        ClothingUnit::SquareMeterKelvinPerWatt,
    );
    assert!((r - 0.0775).abs() < 1e-12, "r={r}");
}

#[test]
fn string_based_conversion() {
    let v = conversion::convert(QuantityKind::Temperature, 32.0, "F", "C").expect("convert");
    assert!(v.abs() < 1e-12, "v={v}");
    let v = conversion::convert(QuantityKind::Velocity, 3.6, "km/h", "m/s").expect("convert");
    assert!((v - 1.0).abs() < 1e-12, "v={v}");
    let v = conversion::convert(QuantityKind::MetabolicRate, 58.15, "W/m2", "met").expect("convert");
    assert!((v - 1.0).abs() < 1e-12, "v={v}");
}

#[test]
fn unknown_unit_is_rejected() {
    let err = conversion::convert(QuantityKind::Temperature, 1.0, "R", "C").unwrap_err();
    match err {
        ConversionError::UnknownUnit(u) => assert_eq!(u, "R"),
        other => panic!("unexpected error: {other}"),
    }
}
