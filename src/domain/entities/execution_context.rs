use super::repository::Repository;
use std::path::{Path, PathBuf};

/// 1回の実行で共有される読み取り専用のコンテキスト
///
/// 起動時に一度だけ構築され、以降は参照として各プロセッサに渡される。
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// プロジェクトルートの絶対パス
    root_path: PathBuf,

    /// Masterを先頭に、レジストリ順のSlaveが続く重複なしのリポジトリ列
    repositories: Vec<Repository>,
}

impl ExecutionContext {
    /// ルートパスとSlaveのリモートURL列からコンテキストを作成
    ///
    /// 同一のリポジトリが複数回現れた場合は最初のものだけを残す。
    pub fn new<I, S>(root_path: impl Into<PathBuf>, remote_urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let root_path = root_path.into();
        let mut repositories = vec![Repository::master(&root_path)];

        for url in remote_urls {
            let slave = Repository::slave(url);
            if !repositories.contains(&slave) {
                repositories.push(slave);
            }
        }

        Self {
            root_path,
            repositories,
        }
    }

    /// プロジェクトルート
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// 対象となる全リポジトリ
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Masterリポジトリ
    pub fn master(&self) -> &Repository {
        // new() が常に先頭にMasterを置く
        &self.repositories[0]
    }

    /// Slaveリポジトリのみ
    pub fn slaves(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.iter().filter(|repo| !repo.is_master())
    }
}
