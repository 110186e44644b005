/// 1つのリポジトリで得られた出力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOutput {
    /// 見出しに使うリポジトリ名
    pub repository_label: String,

    /// 取得したままの出力テキスト
    pub output: String,
}

impl RepositoryOutput {
    /// 新しいRepositoryOutputを作成
    pub fn new(repository_label: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            repository_label: repository_label.into(),
            output: output.into(),
        }
    }
}
