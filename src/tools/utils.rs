//! 工具函数模块
//!
//! 提供数值解析、分贝值格式化等通用工具函数。

use super::constants::display::DB_DECIMALS;
use crate::error::{ConvertError, ConvertResult, input_error};

/// 解析用户输入的分贝值
///
/// 接受前后空白；格式错误或非有限数值（nan/inf）返回 `InvalidInput`。
pub fn parse_db_value(text: &str) -> ConvertResult<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|e| input_error(&format!("无法解析数值 / Cannot parse value '{trimmed}'"), e))?;

    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(format!(
            "数值必须为有限数 / Value must be finite: '{trimmed}'"
        )));
    }
    Ok(value)
}

/// 将分贝值格式化为固定精度字符串
#[inline]
pub fn format_db(value: f64) -> String {
    format!("{value:.prec$}", prec = DB_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_forms() {
        assert_eq!(parse_db_value("94").unwrap(), 94.0);
        assert_eq!(parse_db_value("  -10.5\n").unwrap(), -10.5);
        assert_eq!(parse_db_value("1e1").unwrap(), 10.0);
        assert_eq!(parse_db_value("+3").unwrap(), 3.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "abc", "12dB", "1,5"] {
            assert!(
                matches!(parse_db_value(bad), Err(ConvertError::InvalidInput(_))),
                "'{bad}' 应被拒绝"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for bad in ["nan", "inf", "-inf", "infinity"] {
            assert!(parse_db_value(bad).is_err(), "'{bad}' 应被拒绝");
        }
    }

    #[test]
    fn test_format_db_two_decimals() {
        assert_eq!(format_db(2.213965949873794), "2.21");
        assert_eq!(format_db(-30.0), "-30.00");
        assert_eq!(format_db(0.006), "0.01");
    }
}
