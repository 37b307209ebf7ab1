//! 감각 척도/범주 해석과 수증기압 근사 테스트.
use comfort_toolbox::comfort::psychrometrics;
use comfort_toolbox::comfort::sensation::{
    category_from_pmv, sensation_from_pmv, ComfortCategory, ThermalSensation,
};

#[test]
fn sensation_scale_mapping() {
    assert_eq!(sensation_from_pmv(0.08), ThermalSensation::Neutral);
    assert_eq!(sensation_from_pmv(0.8), ThermalSensation::SlightlyWarm);
    assert_eq!(sensation_from_pmv(2.34), ThermalSensation::Warm);
    assert_eq!(sensation_from_pmv(-1.4), ThermalSensation::SlightlyCool);
    // ±3 밖은 양 끝으로 고정된다.
    assert_eq!(sensation_from_pmv(-3.7), ThermalSensation::Cold);
    assert_eq!(sensation_from_pmv(5.2), ThermalSensation::Hot);
}

#[test]
fn scale_values_match_seven_point_scale() {
    assert_eq!(ThermalSensation::Cold.scale_value(), -3);
    assert_eq!(ThermalSensation::Neutral.scale_value(), 0);
    assert_eq!(ThermalSensation::Hot.scale_value(), 3);
}

#[test]
fn iso_category_boundaries() {
    assert_eq!(category_from_pmv(0.08), ComfortCategory::A);
    assert_eq!(category_from_pmv(-0.2), ComfortCategory::A);
    assert_eq!(category_from_pmv(-0.32), ComfortCategory::B);
    assert_eq!(category_from_pmv(0.54), ComfortCategory::C);
    assert_eq!(category_from_pmv(0.76), ComfortCategory::OutOfCategory);
}

#[test]
fn vapor_pressure_at_default_conditions() {
    // 25°C, 50% RH
    let pa = psychrometrics::vapor_pressure_pa(25.0, 50.0);
    assert!((pa - 1583.676_390_013_2).abs() < 1e-6, "pa={pa}");
}

#[test]
fn saturation_pressure_near_reference() {
    // 25°C 포화 수증기압은 약 3.17 kPa
    let ps = psychrometrics::saturation_vapor_pressure_pa(25.0);
    assert!((ps - 3167.352_780_026_4).abs() < 1e-6, "ps={ps}");
}

#[test]
fn dew_point_inverts_vapor_pressure() {
    let td = psychrometrics::dew_point_from_rh_c(25.0, 50.0);
    assert!((td - 13.871_191_5).abs() < 1e-6, "td={td}");
    // 이슬점에서의 포화 수증기압은 원래 분압과 일치해야 한다.
    let pa = psychrometrics::vapor_pressure_pa(25.0, 50.0);
    let ps = psychrometrics::saturation_vapor_pressure_pa(td);
    assert!((pa - ps).abs() < 1e-6, "pa={pa} ps={ps}");
}
