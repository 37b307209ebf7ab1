//! 열쾌적(thermal comfort) 관련 계산 모듈을 모아둔다.
//! PMV/PPD 지표, 수증기압/이슬점 근사, 감각 척도 해석으로 구성한다.

pub mod pmv_ppd;
pub mod psychrometrics;
pub mod sensation;

pub use pmv_ppd::*;
pub use sensation::{category_from_pmv, sensation_from_pmv, ComfortCategory, ThermalSensation};
