use add_quizzes::config::{Config, CONFIG_FILE_NAME};
use add_quizzes::{logger, App};
use anyhow::Result;
use std::path::Path;

fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load(Path::new(CONFIG_FILE_NAME))?;

    App::new(config).run()?;

    Ok(())
}
