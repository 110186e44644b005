//! 生の引数列をグローバルフラグ、gitサブコマンド、その引数に分割する

use crate::domain::value_objects::Input;

/// 引数列の走査で認識するサブコマンド
pub const RECOGNIZED_COMMANDS: &[&str] = &[
    "add",
    "am",
    "apply",
    "archive",
    "bisect",
    "blame",
    "branch",
    "checkout",
    "cherry-pick",
    "clean",
    "clone",
    "commit",
    "config",
    "describe",
    "diff",
    "fetch",
    "format-patch",
    "gc",
    "grep",
    "help",
    "init",
    "log",
    "ls-files",
    "merge",
    "mv",
    "notes",
    "pull",
    "push",
    "rebase",
    "reflog",
    "remote",
    "reset",
    "restore",
    "revert",
    "rm",
    "shortlog",
    "show",
    "stash",
    "status",
    "submodule",
    "switch",
    "tag",
    "worktree",
];

/// コマンドラインパーサー
pub struct CommandParser;

impl CommandParser {
    /// 生の引数を [`Input`] に解析
    ///
    /// 最も左にある認識済みトークンがコマンドになる（直前のグローバルフラグの値であっても同様）。
    /// 認識済みトークンがない場合は引数なしの `help` になる。
    pub fn parse<S: AsRef<str>>(raw_args: &[S]) -> Input {
        let position = raw_args
            .iter()
            .position(|arg| Self::is_recognized(arg.as_ref()));

        match position {
            Some(index) => Input::new(
                Self::to_owned(&raw_args[..index]),
                raw_args[index].as_ref(),
                Self::to_owned(&raw_args[index + 1..]),
            ),
            None => Input::help(),
        }
    }

    /// `token` が [`RECOGNIZED_COMMANDS`] に含まれるかどうか
    pub fn is_recognized(token: &str) -> bool {
        RECOGNIZED_COMMANDS.contains(&token)
    }

    fn to_owned<S: AsRef<str>>(args: &[S]) -> Vec<String> {
        args.iter().map(|arg| arg.as_ref().to_string()).collect()
    }
}
