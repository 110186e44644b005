/// コマンドラインを分解した結果
///
/// `global_args` は認識されたサブコマンドより前のトークン、
/// `command_args` はサブコマンドより後のトークン。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// サブコマンドより前に置かれたグローバルフラグ
    pub global_args: Vec<String>,

    /// 認識されたサブコマンド名
    pub command: String,

    /// サブコマンドに続く引数
    pub command_args: Vec<String>,
}

impl Input {
    /// サブコマンドが見つからなかった場合のフォールバック
    pub const FALLBACK_COMMAND: &'static str = "help";

    /// 新しいInputを作成
    pub fn new(
        global_args: Vec<String>,
        command: impl Into<String>,
        command_args: Vec<String>,
    ) -> Self {
        Self {
            global_args,
            command: command.into(),
            command_args,
        }
    }

    /// 引数なしの `help` を作成
    pub fn help() -> Self {
        Self::new(Vec::new(), Self::FALLBACK_COMMAND, Vec::new())
    }
}
