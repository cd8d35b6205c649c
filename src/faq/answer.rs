use serde::{Deserialize, Serialize};

/// A rendered unit of an FAQ answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum AnswerBlock {
    Paragraph(String),
    BulletList(Vec<String>),
}

/// Split an answer into paragraphs and bullet lists.
///
/// Blocks are separated by a blank line. A block becomes a bullet list only
/// when every non-empty line starts with `"- "`.
pub fn parse_answer(answer: &str) -> Vec<AnswerBlock> {
    answer
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> AnswerBlock {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let items: Option<Vec<String>> = lines
        .iter()
        .map(|line| line.strip_prefix("- ").map(str::to_string))
        .collect();

    match items {
        Some(items) if !items.is_empty() => AnswerBlock::BulletList(items),
        _ => AnswerBlock::Paragraph(block.to_string()),
    }
}
