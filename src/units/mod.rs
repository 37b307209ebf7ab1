//! 단위 정의 및 변환 모듈 모음.

pub mod clothing;
pub mod metabolic;
pub mod temperature;
pub mod velocity;

pub use clothing::{convert_clothing, ClothingUnit};
pub use metabolic::{convert_metabolic_rate, MetabolicRateUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
