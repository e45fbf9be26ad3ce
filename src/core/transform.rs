//! 线性幅值与分贝之间的变换

use crate::error::{ConvertError, ConvertResult};

/// 分贝值 → 线性幅值：`reference * 10^(db/20)`
#[inline]
pub fn to_linear(db_value: f64, reference: f64) -> f64 {
    reference * 10f64.powf(db_value / 20.0)
}

/// 线性幅值 → 分贝值：`20 * log10(linear / reference)`
///
/// `linear_value <= 0` 时结果无意义（-inf 或 NaN），需要防护时使用
/// [`checked_to_decibels`]。
#[inline]
pub fn to_decibels(linear_value: f64, reference: f64) -> f64 {
    20.0 * (linear_value / reference).log10()
}

/// 带定义域检查的 [`to_decibels`]
///
/// 线性幅值、参考值及二者之比都必须是正规正数（不低于 `f64::MIN_POSITIVE`、
/// 不溢出），否则返回 `InvalidMagnitude`。次正规数有效位不足，取对数后误差过大。
pub fn checked_to_decibels(linear_value: f64, reference: f64) -> ConvertResult<f64> {
    let in_domain = |v: f64| v.is_normal() && v > 0.0;
    if !in_domain(linear_value)
        || !in_domain(reference)
        || !in_domain(linear_value / reference)
    {
        return Err(ConvertError::InvalidMagnitude {
            linear: linear_value,
            reference,
        });
    }
    Ok(to_decibels(linear_value, reference))
}
