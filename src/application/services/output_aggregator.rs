//! リポジトリごとの出力を、同一の出力ごとに1ブロックのレポートへまとめる

use crate::domain::value_objects::RepositoryOutput;
use std::collections::BTreeMap;

/// 各ブロックの見出しの接頭辞
pub const BLOCK_HEADER_PREFIX: &str = "Repository (";

/// 出力集約サービス
pub struct OutputAggregator;

impl OutputAggregator {
    /// 同一テキストの出力をグループ化してレポートを生成
    ///
    /// 各ブロックは `Repository (<labels>)`、空行、共通の出力、末尾の改行で構成される。
    /// ブロック内のラベルはソートして `", "` で連結する。
    /// ブロックはレンダリング後のテキスト全体で並べる。
    pub fn aggregate(outputs: &[RepositoryOutput]) -> String {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for entry in outputs {
            groups
                .entry(entry.output.as_str())
                .or_default()
                .push(entry.repository_label.as_str());
        }

        let mut blocks: Vec<String> = groups
            .into_iter()
            .map(|(output, mut labels)| {
                labels.sort_unstable();
                Self::render_block(&labels, output)
            })
            .collect();
        blocks.sort();

        blocks.concat()
    }

    fn render_block(labels: &[&str], output: &str) -> String {
        format!("{}{})\n\n{}\n", BLOCK_HEADER_PREFIX, labels.join(", "), output)
    }
}
