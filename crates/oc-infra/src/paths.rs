use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// 获取配置目录
///
/// 开发环境和生产环境使用不同的配置目录，避免数据混淆
///
/// - macOS: ~/Library/Application Support/otpclip
/// - Windows: %APPDATA%\otpclip
/// - Linux: $XDG_CONFIG_HOME/otpclip or ~/.config/otpclip
pub fn config_dir() -> Result<PathBuf> {
    let base_dir =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;

    let dir_name = if cfg!(debug_assertions) {
        "otpclip-dev"
    } else {
        "otpclip"
    };

    Ok(base_dir.join(dir_name))
}

/// 获取设置文件路径
///
/// 优先从环境变量 `OTPCLIP_SETTINGS_PATH` 中获取，如果没有设置环境变量，
/// 则从系统配置目录中获取
pub fn settings_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("OTPCLIP_SETTINGS_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(config_dir()?.join("settings.json"))
}
