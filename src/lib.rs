//! dB Scale Converter
//!
//! 在 dBV、dBu、dBW、dBm 与 SPL 五种分贝参考刻度之间换算音频电平。
//!
//! ## 核心特性
//! - 固定参考幅值注册表：dBV=1.0V, dBu=0.775V, dBW=1.0W, dBm=1mW, SPL=20μPa
//! - 经由线性幅值中转：linear = ref × 10^(dB/20)，dB = 20 × log10(linear/ref)
//! - 对数前定义域检查，非有限或非正幅值返回类型化错误

pub mod core;
pub mod error;
pub mod tools;

// 重新导出核心类型
pub use core::{ConversionResult, Scale, convert, convert_scale};
pub use error::{ConvertError, ConvertResult};
