//! 统一错误处理框架
//!
//! 分贝刻度转换的核心错误类型定义。

use std::fmt;
use std::io;

/// 分贝转换相关的统一错误类型
#[derive(Debug)]
pub enum ConvertError {
    /// 未识别的刻度名称（携带原始名称与有效名称列表）
    UnrecognizedScale {
        name: String,
        valid: Vec<&'static str>,
    },

    /// 输入验证错误（数值格式错误、非有限数值）
    InvalidInput(String),

    /// 对数运算的定义域错误：线性幅值及其与参考值之比必须为正规正数
    InvalidMagnitude { linear: f64, reference: f64 },

    /// 标准输入输出或文件I/O错误
    IoError(io::Error),

    /// 结果序列化错误（JSON输出）
    SerializationError(serde_json::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnrecognizedScale { name, valid } => write!(
                f,
                "Unrecognized dB type '{name}'. Please choose from {}.",
                valid.join(", ")
            ),
            ConvertError::InvalidInput(msg) => write!(f, "输入验证失败: {msg}"),
            ConvertError::InvalidMagnitude { linear, reference } => write!(
                f,
                "计算异常: 线性幅值 {linear} 无法相对参考值 {reference} 取对数"
            ),
            ConvertError::IoError(err) => write!(f, "I/O错误: {err}"),
            ConvertError::SerializationError(err) => write!(f, "序列化错误: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::IoError(err) => Some(err),
            ConvertError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::IoError(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::SerializationError(err)
    }
}

/// 转换操作的标准Result类型
pub type ConvertResult<T> = Result<T, ConvertError>;

// ==================== 错误转换Helper函数 ====================

/// 创建输入错误的helper函数
#[inline]
pub fn input_error<E: fmt::Display>(context: &str, err: E) -> ConvertError {
    ConvertError::InvalidInput(format!("{context}: {err}"))
}

// ==================== 错误分类系统 ====================

/// 错误类别枚举（用于退出码和建议选择）
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ErrorCategory {
    /// 输入相关错误（未知刻度、数值格式错误等）
    Input,
    /// 计算相关错误（对数定义域异常）
    Calculation,
    /// I/O相关错误（标准输入关闭、文件不可写等）
    Io,
    /// 其他未分类错误
    Other,
}

impl ErrorCategory {
    /// 从ConvertError提取错误类别
    pub fn from_convert_error(e: &ConvertError) -> Self {
        match e {
            ConvertError::UnrecognizedScale { .. } | ConvertError::InvalidInput(_) => Self::Input,
            ConvertError::InvalidMagnitude { .. } => Self::Calculation,
            ConvertError::IoError(_) => Self::Io,
            ConvertError::SerializationError(_) => Self::Other,
        }
    }

    /// 获取错误类别的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Input => "输入错误",
            Self::Calculation => "计算错误",
            Self::Io => "I/O错误",
            Self::Other => "其他错误",
        }
    }
}
