use crate::config::Config;
use crate::models;
use crate::services::{consistency, merge_service, ConsistencyReport, MergeOutcome, StoreWriter};
use crate::utils::logging;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    writer: StoreWriter,
}

/// 一次运行的结果
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// 所有批次加载的题目数（未去重）
    pub loaded: usize,
    pub outcome: MergeOutcome,
    pub consistency: ConsistencyReport,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            writer: StoreWriter::new(),
        }
    }

    /// 运行合并流程
    pub fn run(&self) -> Result<RunReport> {
        logging::log_startup(&self.config);

        let quizzes = models::load_all_batches(&self.config).context("加载题目批次失败")?;
        if quizzes.is_empty() {
            warn!("⚠️ No quiz batches found, only a missing `quizzes` map is added to the store");
        }

        let store_path = self.config.resolved_store_path();
        let mut store = models::load_location_store(&store_path).context("加载位置库失败")?;

        let outcome = merge_service::merge_quizzes(&mut store, &quizzes)?;

        let consistency = consistency::check(&store);
        consistency::log_report(&consistency);

        self.writer
            .write(&store)
            .with_context(|| format!("写回位置库失败: {}", store_path.display()))?;
        info!("💾 Saved {}", store_path.display());

        let report = RunReport {
            loaded: quizzes.len(),
            outcome,
            consistency,
        };
        logging::print_final_stats(&report);

        Ok(report)
    }
}
