use tracing::info;

use crate::application::services::CommandParser;
use crate::application::use_cases::command_processor::CommandProcessor;
use crate::common::result::GitslaveResult;
use crate::domain::entities::ExecutionContext;
use crate::infrastructure::process::ProcessInvoker;

/// オーケストレーターの設定
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// 最大同時実行数
    pub jobs: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}

impl OrchestratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最大同時実行数を設定（`0` の場合はCPU数）
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        self
    }
}

/// パーサー、リポジトリ群、プロセッサをまとめる実行の入口
pub struct Orchestrator<I: ProcessInvoker> {
    context: ExecutionContext,
    invoker: I,
    config: OrchestratorConfig,
}

impl<I: ProcessInvoker> Orchestrator<I> {
    pub fn new(context: ExecutionContext, invoker: I) -> Self {
        Self {
            context,
            invoker,
            config: OrchestratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: OrchestratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// `raw_args` を解析し、選択したプロセッサを実行して色付け前のレポートを返す
    pub async fn run<S: AsRef<str>>(&self, raw_args: &[S]) -> GitslaveResult<String> {
        let input = CommandParser::parse(raw_args);
        let processor = CommandProcessor::for_command(&input.command);
        info!(
            command = %input.command,
            processor = ?processor,
            repositories = self.context.repositories().len(),
            "dispatching"
        );

        processor
            .process(&input, &self.context, &self.invoker, self.config.jobs)
            .await
    }
}
