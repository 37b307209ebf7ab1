use std::io::{self, Write};

use crate::app::AppError;
use crate::comfort::pmv_ppd::{compute_pmv_ppd, ppd_from_pmv, ComfortInput};
use crate::comfort::psychrometrics;
use crate::comfort::sensation::{category_from_pmv, sensation_from_pmv, ThermalSensation};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::units::temperature::{self, TemperatureUnit};
use crate::units::velocity::{self, VelocityUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PmvPpd,
    PpdFromPmv,
    Psychrometrics,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PMV_PPD));
    println!("{}", tr.t(keys::MAIN_MENU_PPD_FROM_PMV));
    println!("{}", tr.t(keys::MAIN_MENU_PSYCHROMETRICS));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PmvPpd),
            "2" => return Ok(MenuChoice::PpdFromPmv),
            "3" => return Ok(MenuChoice::Psychrometrics),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// PMV/PPD 계산 메뉴를 처리한다.
///
/// 일곱 개 입력 모두 엔터만 치면 설정된 기본값이 사용된다. 입력 검증은
/// 하지 않으며, 물리적으로 무의미한 값도 계산식에 그대로 전달된다.
pub fn handle_pmv_ppd(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PMV_HEADING));
    println!("{}", tr.t(keys::HELP_PMV_PPD));
    println!("{}", tr.t(keys::PMV_NOTE_DEFAULTS));

    let t_unit = cfg.default_units.temperature;
    let v_unit = cfg.default_units.velocity;
    let defaults = cfg.comfort_defaults;

    let air_temp = read_f64_or_default(
        tr,
        &format!("{} [{}]", tr.t(keys::PROMPT_AIR_TEMP), temperature_symbol(t_unit)),
        temperature::from_celsius(defaults.air_temp_c, t_unit),
    )?;
    let radiant_temp = read_f64_or_default(
        tr,
        &format!("{} [{}]", tr.t(keys::PROMPT_RADIANT_TEMP), temperature_symbol(t_unit)),
        temperature::from_celsius(defaults.radiant_temp_c, t_unit),
    )?;
    let air_velocity = read_f64_or_default(
        tr,
        &format!("{} [{}]", tr.t(keys::PROMPT_AIR_VELOCITY), velocity_symbol(v_unit)),
        velocity::convert_velocity(defaults.air_velocity_m_s, VelocityUnit::MeterPerSecond, v_unit),
    )?;
    let rel_humidity =
        read_f64_or_default(tr, tr.t(keys::PROMPT_REL_HUMIDITY), defaults.rel_humidity_pct)?;
    let met = read_f64_or_default(tr, tr.t(keys::PROMPT_MET), defaults.metabolic_rate_met)?;
    let clo = read_f64_or_default(tr, tr.t(keys::PROMPT_CLO), defaults.clothing_clo)?;
    let wme = read_f64_or_default(tr, tr.t(keys::PROMPT_WME), defaults.external_work_met)?;

    let input = ComfortInput {
        air_temp_c: temperature::to_celsius(air_temp, t_unit),
        radiant_temp_c: temperature::to_celsius(radiant_temp, t_unit),
        air_velocity_m_s: velocity::convert_velocity(
            air_velocity,
            v_unit,
            VelocityUnit::MeterPerSecond,
        ),
        rel_humidity_pct: rel_humidity,
        metabolic_rate_met: met,
        clothing_clo: clo,
        external_work_met: wme,
    };
    let res = compute_pmv_ppd(&input);
    for w in &res.warnings {
        eprintln!("{}: {w}", tr.t(keys::ERROR_PREFIX));
    }
    println!("{} {:.3}", tr.t(keys::RESULT_PMV), res.pmv);
    println!("{} {:.1} %", tr.t(keys::RESULT_PPD), res.ppd_pct);
    println!(
        "{} {:.2} °C",
        tr.t(keys::RESULT_TCL),
        res.clothing_surface_temp_c
    );
    println!("{} {}", tr.t(keys::RESULT_ITERATIONS), res.iterations);
    println!(
        "{} {}",
        tr.t(keys::RESULT_SENSATION),
        sensation_label(tr, sensation_from_pmv(res.pmv))
    );
    println!(
        "{} {:?}",
        tr.t(keys::RESULT_CATEGORY),
        category_from_pmv(res.pmv)
    );
    Ok(())
}

/// PMV 값만으로 PPD를 계산하는 메뉴를 처리한다.
pub fn handle_ppd_from_pmv(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PPD_HEADING));
    println!("{}", tr.t(keys::HELP_PPD_FROM_PMV));
    let pmv = read_f64(tr, tr.t(keys::PROMPT_PMV_VALUE))?;
    println!("{} {:.1} %", tr.t(keys::RESULT_PPD), ppd_from_pmv(pmv));
    println!(
        "{} {}",
        tr.t(keys::RESULT_SENSATION),
        sensation_label(tr, sensation_from_pmv(pmv))
    );
    Ok(())
}

/// 수증기압/이슬점 메뉴를 처리한다.
pub fn handle_psychrometrics(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PSYCH_HEADING));
    println!("{}", tr.t(keys::HELP_PSYCHROMETRICS));
    println!("{}", tr.t(keys::PSYCH_OPTIONS));
    let t_unit = cfg.default_units.temperature;
    let choice = read_line(tr.t(keys::PROMPT_SELECT))?;
    match choice.trim() {
        "1" => {
            let t = read_f64(
                tr,
                &format!("{} [{}]: ", tr.t(keys::PROMPT_AIR_TEMP), temperature_symbol(t_unit)),
            )?;
            let rh = read_f64(tr, &format!("{}: ", tr.t(keys::PROMPT_REL_HUMIDITY)))?;
            let pa = psychrometrics::vapor_pressure_pa(temperature::to_celsius(t, t_unit), rh);
            println!("{} {:.1} Pa", tr.t(keys::RESULT_VAPOR_PRESSURE), pa);
        }
        "2" => {
            let t = read_f64(
                tr,
                &format!("{} [{}]: ", tr.t(keys::PROMPT_AIR_TEMP), temperature_symbol(t_unit)),
            )?;
            let ps =
                psychrometrics::saturation_vapor_pressure_pa(temperature::to_celsius(t, t_unit));
            println!("{} {:.1} Pa", tr.t(keys::RESULT_SATURATION_PRESSURE), ps);
        }
        "3" => {
            let t = read_f64(
                tr,
                &format!("{} [{}]: ", tr.t(keys::PROMPT_AIR_TEMP), temperature_symbol(t_unit)),
            )?;
            let rh = read_f64(tr, &format!("{}: ", tr.t(keys::PROMPT_REL_HUMIDITY)))?;
            let td = psychrometrics::dew_point_from_rh_c(temperature::to_celsius(t, t_unit), rh);
            println!(
                "{} {:.2} {}",
                tr.t(keys::RESULT_DEW_POINT),
                temperature::from_celsius(td, t_unit),
                temperature_symbol(t_unit)
            );
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::HELP_UNIT_CONVERSION));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::Velocity),
        3 => Some(QuantityKind::MetabolicRate),
        4 => Some(QuantityKind::ClothingInsulation),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} language={:?}, temperature={:?}, velocity={:?}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.default_units.temperature,
        cfg.default_units.velocity
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = read_line(tr.t(keys::PROMPT_SELECT))?;
            match lang.trim() {
                "1" => cfg.language = Some("ko".into()),
                "2" => cfg.language = Some("en".into()),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => cfg.default_units.temperature = read_temperature_unit(tr)?,
        "3" => cfg.default_units.velocity = read_velocity_unit(tr)?,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn sensation_label(tr: &Translator, s: ThermalSensation) -> &'static str {
    let key = match s {
        ThermalSensation::Cold => keys::SENSATION_COLD,
        ThermalSensation::Cool => keys::SENSATION_COOL,
        ThermalSensation::SlightlyCool => keys::SENSATION_SLIGHTLY_COOL,
        ThermalSensation::Neutral => keys::SENSATION_NEUTRAL,
        ThermalSensation::SlightlyWarm => keys::SENSATION_SLIGHTLY_WARM,
        ThermalSensation::Warm => keys::SENSATION_WARM,
        ThermalSensation::Hot => keys::SENSATION_HOT,
    };
    tr.t(key)
}

fn temperature_symbol(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Celsius => "°C",
        TemperatureUnit::Kelvin => "K",
        TemperatureUnit::Fahrenheit => "°F",
    }
}

fn velocity_symbol(unit: VelocityUnit) -> &'static str {
    match unit {
        VelocityUnit::MeterPerSecond => "m/s",
        VelocityUnit::FootPerMinute => "fpm",
        VelocityUnit::KilometerPerHour => "km/h",
        VelocityUnit::MilePerHour => "mph",
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 돌려주는 f64 프롬프트.
fn read_f64_or_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} ({default}): "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_temperature_unit(tr: &Translator) -> Result<TemperatureUnit, AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "2" => TemperatureUnit::Kelvin,
        "3" => TemperatureUnit::Fahrenheit,
        _ => TemperatureUnit::Celsius,
    };
    Ok(unit)
}

fn read_velocity_unit(tr: &Translator) -> Result<VelocityUnit, AppError> {
    println!("{}", tr.t(keys::VELOCITY_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "2" => VelocityUnit::FootPerMinute,
        "3" => VelocityUnit::KilometerPerHour,
        "4" => VelocityUnit::MilePerHour,
        _ => VelocityUnit::MeterPerSecond,
    };
    Ok(unit)
}
