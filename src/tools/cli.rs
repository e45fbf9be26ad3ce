//! 命令行接口模块
//!
//! 负责命令行参数解析、配置管理和程序信息展示。

use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// 结果输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 逐行文本（默认）
    #[default]
    Text,
    /// 表格
    Table,
    /// JSON
    Json,
}

impl OutputFormat {
    /// 命令行可选值
    pub const NAMES: [&'static str; 3] = ["text", "table", "json"];

    fn from_name(name: &str) -> Self {
        match name {
            "table" => Self::Table,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// 应用程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 输入刻度名称（缺省时交互式提示）
    pub scale: Option<String>,

    /// 输入数值原文（缺省时交互式提示）
    pub value: Option<String>,

    /// 输出格式
    pub format: OutputFormat,

    /// 输出文件路径（可选）
    pub output_path: Option<PathBuf>,

    /// 是否显示详细信息
    pub verbose: bool,
}

impl AppConfig {
    /// 刻度或数值任一缺失即进入交互模式
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.scale.is_none() || self.value.is_none()
    }
}

/// 构建命令行定义
pub fn build_command() -> Command {
    Command::new("db-convert")
        .version(VERSION)
        .about(DESCRIPTION)
        .author("MacinMeter Team")
        .arg(
            Arg::new("SCALE")
                .help("输入刻度: dBV, dBu, dBW, dBm, SPL。不指定时交互式输入")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("VALUE")
                .help("输入分贝值（允许负数）。不指定时交互式输入")
                .required(false)
                .allow_negative_numbers(true)
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("输出格式")
                .value_parser(OutputFormat::NAMES)
                .default_value("text"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("同时将结果写入文件")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("显示详细处理信息")
                .action(clap::ArgAction::SetTrue),
        )
}

/// 从解析结果构建配置
pub fn config_from_matches(matches: &ArgMatches) -> AppConfig {
    AppConfig {
        scale: matches.get_one::<String>("SCALE").cloned(),
        value: matches.get_one::<String>("VALUE").cloned(),
        format: matches
            .get_one::<String>("format")
            .map(|name| OutputFormat::from_name(name))
            .unwrap_or_default(),
        output_path: matches.get_one::<String>("output").map(PathBuf::from),
        verbose: matches.get_flag("verbose"),
    }
}

/// 解析命令行参数并创建配置
pub fn parse_args() -> AppConfig {
    config_from_matches(&build_command().get_matches())
}

/// 显示程序启动信息（仅verbose）
pub fn show_startup_info(config: &AppConfig) {
    if config.verbose {
        eprintln!("[INFO] dB Scale Converter v{VERSION} 启动 / started");
        eprintln!("[INFO] {DESCRIPTION}");
        if config.is_interactive() {
            eprintln!("[INFO] 交互模式 / Interactive mode");
        }
    }
}

/// 显示程序完成信息
pub fn show_completion_info(config: &AppConfig) {
    if config.verbose {
        eprintln!("[INFO] 转换完成 / Conversion finished");
    }
}
