use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// 初始化日志
///
/// 指定了 log4rs YAML 配置文件时直接使用，否则输出到控制台
pub fn init_logging(level: LevelFilter, config_file: Option<&Path>) -> Result<()> {
    if let Some(path) = config_file {
        log4rs::init_file(path, Default::default())
            .with_context(|| format!("加载日志配置 {} 失败", path.display()))?;
        return Ok(());
    }

    log4rs::init_config(console_config(level)?).context("初始化日志失败")?;
    Ok(())
}

fn console_config(level: LevelFilter) -> Result<Config> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .context("日志配置无效")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_config_builds() {
        let config = console_config(LevelFilter::Debug).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 1);
    }
}
