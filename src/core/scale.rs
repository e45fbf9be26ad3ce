//! 分贝参考刻度注册表
//!
//! 五种刻度按声明顺序固定排列，每种刻度对应一个正的参考幅值。
//! 新增刻度只需在 `Scale` 与 `REFERENCE_TABLE` 中各加一行。

use crate::error::ConvertError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 分贝参考刻度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Scale {
    /// 相对 1 伏特
    #[serde(rename = "dBV")]
    DbV,
    /// 相对 0.775 伏特（600Ω 负载下的 1mW）
    #[serde(rename = "dBu")]
    DbU,
    /// 相对 1 瓦特
    #[serde(rename = "dBW")]
    DbW,
    /// 相对 1 毫瓦
    #[serde(rename = "dBm")]
    DbM,
    /// 声压级，相对 20 微帕
    #[serde(rename = "SPL")]
    Spl,
}

/// 刻度 → (名称, 参考幅值)，顺序即注册表声明顺序
const REFERENCE_TABLE: [(Scale, &str, f64); Scale::COUNT] = [
    (Scale::DbV, "dBV", 1.0),
    (Scale::DbU, "dBu", 0.775),
    (Scale::DbW, "dBW", 1.0),
    (Scale::DbM, "dBm", 0.001),
    (Scale::Spl, "SPL", 0.00002),
];

impl Scale {
    /// 刻度数量
    pub const COUNT: usize = 5;

    /// 全部刻度（注册表声明顺序）
    pub const ALL: [Scale; Scale::COUNT] =
        [Scale::DbV, Scale::DbU, Scale::DbW, Scale::DbM, Scale::Spl];

    /// 注册表中的位置
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 规范名称
    #[inline]
    pub const fn name(self) -> &'static str {
        REFERENCE_TABLE[self.index()].1
    }

    /// 参考幅值（恒为正）
    #[inline]
    pub const fn reference(self) -> f64 {
        REFERENCE_TABLE[self.index()].2
    }

    /// 有效名称列表（用于错误提示）
    pub fn valid_names() -> Vec<&'static str> {
        REFERENCE_TABLE.iter().map(|(_, name, _)| *name).collect()
    }

    /// 按名称查找刻度（区分大小写）
    pub fn lookup(name: &str) -> Option<Scale> {
        REFERENCE_TABLE
            .iter()
            .find(|(_, candidate, _)| *candidate == name)
            .map(|(scale, _, _)| *scale)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::lookup(s).ok_or_else(|| ConvertError::UnrecognizedScale {
            name: s.to_string(),
            valid: Scale::valid_names(),
        })
    }
}
