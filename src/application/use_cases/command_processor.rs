use futures::future::join_all;
use std::future::Future;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::application::services::OutputAggregator;
use crate::common::result::GitslaveResult;
use crate::domain::entities::{ExecutionContext, Repository};
use crate::domain::value_objects::{Input, RepositoryOutput};
use crate::infrastructure::process::{GitInvocation, ProcessInvoker};

/// 解析済みコマンドを各リポジトリでどう実行するか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandProcessor {
    /// 1回だけ実行し、出力をそのまま返す
    Passthrough,
    /// ディレクトリがまだ存在しないリポジトリのみクローン
    Clone,
    /// 全リポジトリで実行し、同一の出力をまとめる
    Delegate,
}

impl CommandProcessor {
    /// `command` に対応するプロセッサを選択（未登録のものは [`CommandProcessor::Delegate`]）
    pub fn for_command(command: &str) -> Self {
        match command {
            "help" => Self::Passthrough,
            "clone" => Self::Clone,
            _ => Self::Delegate,
        }
    }

    /// `context` に対して `input` を実行（同時実行数は最大 `jobs`）
    pub async fn process<I>(
        &self,
        input: &Input,
        context: &ExecutionContext,
        invoker: &I,
        jobs: usize,
    ) -> GitslaveResult<String>
    where
        I: ProcessInvoker + ?Sized,
    {
        match self {
            Self::Passthrough => Self::process_passthrough(input, invoker).await,
            Self::Clone => Self::process_clone(input, context, invoker, jobs).await,
            Self::Delegate => Self::process_delegate(input, context, invoker, jobs).await,
        }
    }

    async fn process_passthrough<I>(input: &Input, invoker: &I) -> GitslaveResult<String>
    where
        I: ProcessInvoker + ?Sized,
    {
        let captured = invoker.run(&GitInvocation::from_input(input)).await?;
        Ok(captured.text)
    }

    async fn process_clone<I>(
        input: &Input,
        context: &ExecutionContext,
        invoker: &I,
        jobs: usize,
    ) -> GitslaveResult<String>
    where
        I: ProcessInvoker + ?Sized,
    {
        let root_path = context.root_path();
        let missing: Vec<(&Repository, &str)> = context
            .repositories()
            .iter()
            .filter_map(|repo| {
                let remote_url = repo.remote_url.as_deref()?;
                if repo.absolute_path(root_path).exists() {
                    debug!(repository = %repo.path, "already present, skipping clone");
                    return None;
                }
                Some((repo, remote_url))
            })
            .collect();

        // 作業ディレクトリは指定せず、相対パスをクローン先として渡す
        let outputs = fan_out(missing, jobs, |(repo, remote_url)| async move {
            let invocation = GitInvocation::from_input(input)
                .with_trailing_args([remote_url.to_string(), repo.path.clone()]);
            invoker.run(&invocation).await.map(|captured| captured.text)
        })
        .await?;

        Ok(outputs.concat())
    }

    async fn process_delegate<I>(
        input: &Input,
        context: &ExecutionContext,
        invoker: &I,
        jobs: usize,
    ) -> GitslaveResult<String>
    where
        I: ProcessInvoker + ?Sized,
    {
        let root_path = context.root_path();
        let repositories: Vec<&Repository> = context.repositories().iter().collect();

        let outputs = fan_out(repositories, jobs, |repo| async move {
            let invocation =
                GitInvocation::from_input(input).with_working_dir(repo.absolute_path(root_path));
            let captured = invoker.run(&invocation).await?;
            Ok(RepositoryOutput::new(repo.label(root_path), captured.text))
        })
        .await?;

        Ok(OutputAggregator::aggregate(&outputs))
    }
}

/// 各要素に対して `task` を実行（同時実行数は最大 `jobs`）
///
/// 結果は完了順に関係なく `items` の順序を保つ。
async fn fan_out<T, R, F, Fut>(items: Vec<T>, jobs: usize, task: F) -> GitslaveResult<Vec<R>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = GitslaveResult<R>>,
{
    let semaphore = Semaphore::new(jobs.max(1));
    let semaphore = &semaphore;

    let futures = items.into_iter().map(|item| {
        let pending = task(item);
        async move {
            let _permit = semaphore.acquire().await?;
            pending.await
        }
    });

    join_all(futures).await.into_iter().collect()
}
