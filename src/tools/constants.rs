//! 常量和默认配置集中管理
//!
//! 将所有重要常量集中定义，避免"默认值漂移"和重复定义

/// 输出显示常量
pub mod display {
    /// 分贝值显示精度（小数位数）
    ///
    /// 固定两位小数，与原始交互式转换器的输出保持一致
    pub const DB_DECIMALS: usize = 2;

    /// 报告文件分隔线
    pub const SEPARATOR: &str =
        "--------------------------------------------------------------------------------";
}

/// 交互式提示文本
pub mod prompts {
    /// 欢迎信息
    pub const WELCOME: &str = "Welcome to the dB converter. Please select the dB type and enter the value you want to convert:";

    /// 刻度名称提示
    pub const ENTER_TYPE: &str = "Enter dB type: ";

    /// 数值提示
    pub const ENTER_VALUE: &str = "Enter dB value: ";
}

/// 进程退出码
pub mod exit_codes {
    /// 通用错误（I/O等）
    pub const GENERAL_ERROR: i32 = 1;
    /// 输入错误（未知刻度、数值格式错误）
    pub const INPUT_ERROR: i32 = 2;
    /// 计算错误（对数定义域异常）
    pub const CALCULATION_ERROR: i32 = 3;
}
