/// 日志工具模块
///
/// 提供运行报告的格式化和输出
use crate::config::Config;
use crate::orchestrator::RunReport;
use crate::services::GroupSummary;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Merging quiz batches into {}", config.resolved_store_path().display());
    info!("📦 {} batch files configured", config.batches.len());
    info!("{}", "=".repeat(60));
}

/// 单个位置的汇总行
///
/// # 参数
/// - `group`: 位置统计
///
/// # 返回
/// 形如 `  - L1: 3 quizzes` 的文本
pub fn format_group_line(group: &GroupSummary) -> String {
    if group.known {
        format!("  - {}: {} quizzes", group.location_id, group.quiz_count)
    } else {
        format!(
            "  - {}: {} quizzes (unknown location, not attached)",
            group.location_id, group.quiz_count
        )
    }
}

/// 打印最终统计信息
pub fn print_final_stats(report: &RunReport) {
    let outcome = &report.outcome;

    info!("\n✅ Added {} quizzes", outcome.added);
    info!("✅ Updated {} locations", outcome.locations_updated());
    info!("\nLocations updated:");
    for group in &outcome.groups {
        info!("{}", format_group_line(group));
    }

    info!("\n{}", "─".repeat(60));
    info!(
        "📊 Loaded {} quizzes, attached {} quiz ids",
        report.loaded, outcome.attached
    );
    if !report.consistency.is_clean() {
        info!(
            "⚠️ {} locations without quizIds, {} dangling quizIds, {} orphan quizzes",
            report.consistency.locations_without_quiz_ids.len(),
            report.consistency.dangling_references.len(),
            report.consistency.orphan_quizzes.len()
        );
    }
    info!(
        "Finished at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}
