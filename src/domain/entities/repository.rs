use std::path::{Path, PathBuf};

/// リモートURL内のパス区切り文字
const URL_PATH_SEPARATOR: char = '/';

/// リポジトリの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryKind {
    /// プロジェクトルートに位置するトップレベルのリポジトリ
    Master,
    /// レジストリファイルで宣言された従属リポジトリ
    Slave,
}

/// リポジトリエンティティ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    /// リポジトリの種別
    pub kind: RepositoryKind,

    /// リモートリポジトリのURL（Slaveのみ）
    pub remote_url: Option<String>,

    /// Slaveではルート配下の相対パス、Masterではルートパスそのもの
    pub path: String,
}

impl Repository {
    /// プロジェクトルートに対応するMasterリポジトリを作成
    pub fn master(root_path: impl AsRef<Path>) -> Self {
        Self {
            kind: RepositoryKind::Master,
            remote_url: None,
            path: root_path.as_ref().display().to_string(),
        }
    }

    /// リモートURLからSlaveリポジトリを作成
    ///
    /// パスはURLの最後の `/` より後ろの部分。`/` を含まない場合はURL全体を使う。
    pub fn slave(remote_url: impl Into<String>) -> Self {
        let remote_url = remote_url.into();
        let path = match remote_url.rfind(URL_PATH_SEPARATOR) {
            Some(index) => remote_url[index + URL_PATH_SEPARATOR.len_utf8()..].to_string(),
            None => remote_url.clone(),
        };

        Self {
            kind: RepositoryKind::Slave,
            remote_url: Some(remote_url),
            path,
        }
    }

    /// ルートパスを基準にした絶対パスを取得
    pub fn absolute_path(&self, root_path: &Path) -> PathBuf {
        match self.kind {
            RepositoryKind::Master => root_path.to_path_buf(),
            RepositoryKind::Slave => root_path.join(&self.path),
        }
    }

    /// 集約レポートの見出しに使う名前
    ///
    /// 絶対パスの最後の要素を使うため、最後の要素が同じリポジトリは同じ名前になる。
    pub fn label(&self, root_path: &Path) -> String {
        let absolute = self.absolute_path(root_path);
        match absolute.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => absolute.display().to_string(),
        }
    }

    /// Masterリポジトリかどうか
    pub fn is_master(&self) -> bool {
        self.kind == RepositoryKind::Master
    }
}
