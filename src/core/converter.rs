//! 分贝刻度转换器
//!
//! 输入值先按输入刻度的参考幅值变换为线性幅值，再按注册表顺序
//! 变换回全部五种刻度。纯函数，无状态，可任意并发调用。

use super::scale::Scale;
use super::transform::{checked_to_decibels, to_linear};
use crate::error::{ConvertError, ConvertResult};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// 一次转换的结果：同一物理量在五种刻度下的读数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionResult {
    /// 原始输入值
    pub input_value: f64,
    /// 原始输入刻度
    pub input_scale: Scale,
    /// 按 `Scale::index()` 存放的各刻度读数
    #[serde(rename = "conversions", serialize_with = "serialize_in_registry_order")]
    values: [f64; Scale::COUNT],
}

impl ConversionResult {
    /// 读取某一刻度下的数值
    #[inline]
    pub fn get(&self, scale: Scale) -> f64 {
        self.values[scale.index()]
    }

    /// 按注册表顺序遍历 (刻度, 数值)
    pub fn iter(&self) -> impl Iterator<Item = (Scale, f64)> + '_ {
        Scale::ALL.iter().map(move |&scale| (scale, self.get(scale)))
    }
}

impl std::ops::Index<Scale> for ConversionResult {
    type Output = f64;

    fn index(&self, scale: Scale) -> &f64 {
        &self.values[scale.index()]
    }
}

fn serialize_in_registry_order<S: Serializer>(
    values: &[f64; Scale::COUNT],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(values.len()))?;
    for scale in Scale::ALL {
        map.serialize_entry(scale.name(), &values[scale.index()])?;
    }
    map.end()
}

/// 将输入值从 `scale_name` 刻度转换到全部刻度
///
/// 刻度名称不在注册表中时返回 `UnrecognizedScale`。
pub fn convert(value: f64, scale_name: &str) -> ConvertResult<ConversionResult> {
    let scale: Scale = scale_name.parse()?;
    convert_scale(value, scale)
}

/// 已持有类型化刻度时的转换入口
pub fn convert_scale(value: f64, scale: Scale) -> ConvertResult<ConversionResult> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(format!(
            "输入值必须为有限数值 / Input value must be finite: {value}"
        )));
    }

    let linear = to_linear(value, scale.reference());

    let mut values = [0.0; Scale::COUNT];
    for target in Scale::ALL {
        values[target.index()] = checked_to_decibels(linear, target.reference())?;
    }

    Ok(ConversionResult {
        input_value: value,
        input_scale: scale,
        values,
    })
}
