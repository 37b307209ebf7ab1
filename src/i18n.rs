use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PMV_PPD: &str = "main_menu.pmv_ppd";
    pub const MAIN_MENU_PPD_FROM_PMV: &str = "main_menu.ppd_from_pmv";
    pub const MAIN_MENU_PSYCHROMETRICS: &str = "main_menu.psychrometrics";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PMV_HEADING: &str = "pmv.heading";
    pub const PMV_NOTE_DEFAULTS: &str = "pmv.note_defaults";
    pub const PROMPT_AIR_TEMP: &str = "prompt.air_temp";
    pub const PROMPT_RADIANT_TEMP: &str = "prompt.radiant_temp";
    pub const PROMPT_AIR_VELOCITY: &str = "prompt.air_velocity";
    pub const PROMPT_REL_HUMIDITY: &str = "prompt.rel_humidity";
    pub const PROMPT_MET: &str = "prompt.met";
    pub const PROMPT_CLO: &str = "prompt.clo";
    pub const PROMPT_WME: &str = "prompt.wme";
    pub const RESULT_PMV: &str = "result.pmv";
    pub const RESULT_PPD: &str = "result.ppd";
    pub const RESULT_TCL: &str = "result.tcl";
    pub const RESULT_ITERATIONS: &str = "result.iterations";
    pub const RESULT_SENSATION: &str = "result.sensation";
    pub const RESULT_CATEGORY: &str = "result.category";

    pub const PPD_HEADING: &str = "ppd.heading";
    pub const PROMPT_PMV_VALUE: &str = "prompt.pmv_value";

    pub const PSYCH_HEADING: &str = "psychrometrics.heading";
    pub const PSYCH_OPTIONS: &str = "psychrometrics.options";
    pub const RESULT_VAPOR_PRESSURE: &str = "result.vapor_pressure";
    pub const RESULT_SATURATION_PRESSURE: &str = "result.saturation_pressure";
    pub const RESULT_DEW_POINT: &str = "result.dew_point";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";

    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";
    pub const VELOCITY_UNIT_OPTIONS: &str = "unit.velocity_options";

    pub const SENSATION_COLD: &str = "sensation.cold";
    pub const SENSATION_COOL: &str = "sensation.cool";
    pub const SENSATION_SLIGHTLY_COOL: &str = "sensation.slightly_cool";
    pub const SENSATION_NEUTRAL: &str = "sensation.neutral";
    pub const SENSATION_SLIGHTLY_WARM: &str = "sensation.slightly_warm";
    pub const SENSATION_WARM: &str = "sensation.warm";
    pub const SENSATION_HOT: &str = "sensation.hot";

    pub const HELP_PMV_PPD: &str = "help.pmv_ppd";
    pub const HELP_PPD_FROM_PMV: &str = "help.ppd_from_pmv";
    pub const HELP_PSYCHROMETRICS: &str = "help.psychrometrics";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Thermal Comfort Toolbox ===",
        MAIN_MENU_PMV_PPD => "1) PMV/PPD 계산",
        MAIN_MENU_PPD_FROM_PMV => "2) PMV 값으로 PPD 계산",
        MAIN_MENU_PSYCHROMETRICS => "3) 수증기압/이슬점",
        MAIN_MENU_UNIT_CONVERSION => "4) 단위 변환기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PMV_HEADING => "\n-- PMV/PPD 계산 --",
        PMV_NOTE_DEFAULTS => "참고: 값 없이 엔터만 치면 괄호 안의 기본값이 사용됩니다.",
        PROMPT_AIR_TEMP => "공기 온도",
        PROMPT_RADIANT_TEMP => "평균 복사 온도",
        PROMPT_AIR_VELOCITY => "기류 속도",
        PROMPT_REL_HUMIDITY => "상대습도 [%]",
        PROMPT_MET => "대사율 [met] (좌식 사무 1.2)",
        PROMPT_CLO => "의복 열저항 [clo] (하복 0.5, 동복 1.0)",
        PROMPT_WME => "외부 일 [met] (보통 0)",
        RESULT_PMV => "PMV:",
        RESULT_PPD => "PPD:",
        RESULT_TCL => "의복 표면 온도:",
        RESULT_ITERATIONS => "반복 횟수:",
        RESULT_SENSATION => "온열감:",
        RESULT_CATEGORY => "ISO 7730 범주:",
        PPD_HEADING => "\n-- PMV → PPD --",
        PROMPT_PMV_VALUE => "PMV 값: ",
        PSYCH_HEADING => "\n-- 수증기압/이슬점 --",
        PSYCH_OPTIONS => "1) 수증기 분압  2) 포화 수증기압  3) 이슬점",
        RESULT_VAPOR_PRESSURE => "수증기 분압:",
        RESULT_SATURATION_PRESSURE => "포화 수증기압:",
        RESULT_DEW_POINT => "이슬점:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 속도  3) 대사율  4) 의복 열저항",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, m/s, met, clo): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: F, fpm, W/m2, m2K/W): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 온도 단위  3) 속도 단위",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_LANGUAGE_OPTIONS => "언어: 1=한국어 2=English",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=°C 2=K 3=°F",
        VELOCITY_UNIT_OPTIONS => "속도 단위: 1=m/s 2=fpm 3=km/h 4=mph",
        SENSATION_COLD => "춥다 (-3)",
        SENSATION_COOL => "서늘하다 (-2)",
        SENSATION_SLIGHTLY_COOL => "약간 서늘하다 (-1)",
        SENSATION_NEUTRAL => "중립 (0)",
        SENSATION_SLIGHTLY_WARM => "약간 따뜻하다 (+1)",
        SENSATION_WARM => "따뜻하다 (+2)",
        SENSATION_HOT => "덥다 (+3)",
        HELP_PMV_PPD => "도움말: 공기/복사 온도, 기류 속도, 상대습도, 대사율, 의복, 외부 일 순으로 입력합니다. 입력 검증은 하지 않습니다.",
        HELP_PPD_FROM_PMV => "도움말: 이미 알고 있는 PMV 값에서 PPD만 계산합니다. PPD는 PMV 부호에 대해 대칭입니다.",
        HELP_PSYCHROMETRICS => "도움말: PMV 계산과 동일한 상관식을 사용합니다. 압력은 Pa 단위로 표시됩니다.",
        HELP_UNIT_CONVERSION => "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: C/K/F, m/s/fpm, met/W/m2, clo/m2K/W).",
        HELP_SETTINGS => "도움말: 언어와 입력 단위 기본값을 바꿉니다. PMV 입력 기본값은 config.toml에서 직접 수정할 수 있습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Thermal Comfort Toolbox ===",
        MAIN_MENU_PMV_PPD => "1) PMV/PPD calculation",
        MAIN_MENU_PPD_FROM_PMV => "2) PPD from a PMV value",
        MAIN_MENU_PSYCHROMETRICS => "3) Vapor pressure / dew point",
        MAIN_MENU_UNIT_CONVERSION => "4) Unit converter",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PMV_HEADING => "\n-- PMV/PPD Calculation --",
        PMV_NOTE_DEFAULTS => "Note: press enter to accept the default shown in parentheses.",
        PROMPT_AIR_TEMP => "Air temperature",
        PROMPT_RADIANT_TEMP => "Mean radiant temperature",
        PROMPT_AIR_VELOCITY => "Air velocity",
        PROMPT_REL_HUMIDITY => "Relative humidity [%]",
        PROMPT_MET => "Metabolic rate [met] (seated office 1.2)",
        PROMPT_CLO => "Clothing insulation [clo] (summer 0.5, winter 1.0)",
        PROMPT_WME => "External work [met] (usually 0)",
        RESULT_PMV => "PMV:",
        RESULT_PPD => "PPD:",
        RESULT_TCL => "Clothing surface temperature:",
        RESULT_ITERATIONS => "Iterations:",
        RESULT_SENSATION => "Thermal sensation:",
        RESULT_CATEGORY => "ISO 7730 category:",
        PPD_HEADING => "\n-- PMV → PPD --",
        PROMPT_PMV_VALUE => "PMV value: ",
        PSYCH_HEADING => "\n-- Vapor Pressure / Dew Point --",
        PSYCH_OPTIONS => "1) Partial vapor pressure  2) Saturation pressure  3) Dew point",
        RESULT_VAPOR_PRESSURE => "Partial vapor pressure:",
        RESULT_SATURATION_PRESSURE => "Saturation vapor pressure:",
        RESULT_DEW_POINT => "Dew point:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Temperature  2) Velocity  3) Metabolic rate  4) Clothing insulation",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, m/s, met, clo): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: F, fpm, W/m2, m2K/W): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Temperature unit  3) Velocity unit",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_LANGUAGE_OPTIONS => "Language: 1=한국어 2=English",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=K 3=°F",
        VELOCITY_UNIT_OPTIONS => "Velocity units: 1=m/s 2=fpm 3=km/h 4=mph",
        SENSATION_COLD => "cold (-3)",
        SENSATION_COOL => "cool (-2)",
        SENSATION_SLIGHTLY_COOL => "slightly cool (-1)",
        SENSATION_NEUTRAL => "neutral (0)",
        SENSATION_SLIGHTLY_WARM => "slightly warm (+1)",
        SENSATION_WARM => "warm (+2)",
        SENSATION_HOT => "hot (+3)",
        HELP_PMV_PPD => "Help: enter air/radiant temperature, air velocity, relative humidity, metabolic rate, clothing, external work. Inputs are not validated.",
        HELP_PPD_FROM_PMV => "Help: compute only PPD from a known PMV value. PPD is symmetric in the sign of PMV.",
        HELP_PSYCHROMETRICS => "Help: uses the same correlation as the PMV calculation. Pressures are reported in Pa.",
        HELP_UNIT_CONVERSION => "Help: choose quantity → enter value → from/to units (C/K/F, m/s/fpm, met/W/m2, clo/m2K/W).",
        HELP_SETTINGS => "Help: change language and default input units. PMV input defaults can be edited directly in config.toml.",
        _ => return None,
    })
}
