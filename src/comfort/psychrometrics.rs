//! 수증기압/이슬점 근사 모듈. PMV 계산과 동일한 Antoine형 상관식을 공유한다.

/// 포화 수증기압을 계산한다 [Pa]. Antoine형 근사식 (25°C에서 약 3167 Pa).
pub fn saturation_vapor_pressure_pa(air_temp_c: f64) -> f64 {
    vapor_pressure_pa(air_temp_c, 100.0)
}

/// 상대습도[%]에서 수증기 분압을 계산한다 [Pa].
///
/// PMV 계산 1단계와 동일한 식을 사용한다:
/// `pa = rh * 10 * exp(16.6536 - 4030.183 / (t + 235))`
pub fn vapor_pressure_pa(air_temp_c: f64, rel_humidity_pct: f64) -> f64 {
    rel_humidity_pct * 10.0 * (16.6536 - 4030.183 / (air_temp_c + 235.0)).exp()
}

/// 수증기 분압[Pa]에서 이슬점 온도[°C]를 역산한다.
pub fn dew_point_c(vapor_pressure_pa: f64) -> f64 {
    4030.183 / (16.6536 - (vapor_pressure_pa / 1000.0).ln()) - 235.0
}

/// 건구 온도와 상대습도에서 이슬점 온도[°C]를 계산한다.
pub fn dew_point_from_rh_c(air_temp_c: f64, rel_humidity_pct: f64) -> f64 {
    dew_point_c(vapor_pressure_pa(air_temp_c, rel_humidity_pct))
}
