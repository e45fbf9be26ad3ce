//! 核心算法模块
//!
//! 包含刻度注册表、线性/分贝变换和转换器。

pub mod converter;
pub mod scale;
pub mod transform;

// 重新导出公共接口
pub use converter::{ConversionResult, convert, convert_scale};
pub use scale::Scale;
pub use transform::{checked_to_decibels, to_decibels, to_linear};
