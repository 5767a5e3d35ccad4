//! Locating the profile object inside free-form model output.

use strum::Display;

/// Which extraction rule produced a block. Earlier tiers win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
    TaggedFence,
    Fence,
    BareObject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted<'a> {
    pub tier: Tier,
    pub body: &'a str,
}

#[derive(Debug, Clone, Copy)]
struct FencedBlock<'a> {
    tag: &'a str,
    body: &'a str,
}

const FENCE: &str = "```";
const METADATA_KEY: &str = "\"metadata\"";

/// Pick the candidate profile text out of `text`.
///
/// Tiers: a fence tagged `json`, then any fence, then the span from the first
/// `{` to the last `}` when a `"metadata"` key lies between them. Within a
/// tier the first match is used.
pub fn extract_structured_block(text: &str) -> Option<Extracted<'_>> {
    let blocks = fenced_blocks(text);

    if let Some(block) = blocks.iter().find(|b| b.tag.eq_ignore_ascii_case("json")) {
        return Some(Extracted {
            tier: Tier::TaggedFence,
            body: block.body,
        });
    }

    if let Some(block) = blocks.first() {
        return Some(Extracted {
            tier: Tier::Fence,
            body: block.body,
        });
    }

    bare_object(text).map(|body| Extracted {
        tier: Tier::BareObject,
        body,
    })
}

/// Pair fences in order of appearance. An unclosed trailing fence is ignored.
fn fenced_blocks(text: &str) -> Vec<FencedBlock<'_>> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(FENCE) {
        let after_open = &rest[open + FENCE.len()..];
        let tag_len = after_open
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')))
            .unwrap_or(after_open.len());
        let (tag, content) = after_open.split_at(tag_len);

        let Some(close) = content.find(FENCE) else {
            break;
        };
        blocks.push(FencedBlock {
            tag,
            body: content[..close].trim(),
        });
        rest = &content[close + FENCE.len()..];
    }

    blocks
}

/// Greedy span: first `{` through last `}`, kept only if it contains the key.
fn bare_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end && text[start..end].contains(METADATA_KEY)).then(|| &text[start..=end])
}
