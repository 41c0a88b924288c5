//! Markdown-subset renderer.
//!
//! Parses generated article content into structured display nodes: ATX
//! headings (levels 1-3), bullet items, paragraphs with bold and inline-code
//! spans, blank-line breaks, and triple-backtick fenced code blocks. One
//! linear pass, no backtracking; everything outside this subset renders as
//! plain text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bold and inline-code runs, in order of appearance. Both require their
/// closing delimiter; an unclosed `**` or backtick stays literal text.
static INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*.*?\*\*|`.*?`").expect("inline pattern"));

/// A fenced code block, from one triple backtick to the next.
static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("fence pattern"));

/// One formatted run of text within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
    Code(String),
}

/// One structural unit of rendered output, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode {
    Heading { level: u8, text: String },
    ListItem(String),
    Paragraph(Vec<InlineSpan>),
    LineBreak,
    CodeBlock { language: String, code: String },
}

/// Format a single line (no trailing newline) into a display node.
///
/// Rules are ordered and the first match wins; heading and list markers are
/// recognized at column 0 only, and their rest-of-line text is taken
/// verbatim, with no inline formatting.
pub fn format_line(line: &str) -> DisplayNode {
    if let Some(rest) = line.strip_prefix("### ") {
        return DisplayNode::Heading {
            level: 3,
            text: rest.to_string(),
        };
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return DisplayNode::Heading {
            level: 2,
            text: rest.to_string(),
        };
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return DisplayNode::Heading {
            level: 1,
            text: rest.to_string(),
        };
    }
    if let Some(rest) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
        return DisplayNode::ListItem(rest.to_string());
    }
    if line.trim().is_empty() {
        return DisplayNode::LineBreak;
    }
    DisplayNode::Paragraph(split_inline(line))
}

/// Render a whole document into display nodes in top-to-bottom order.
///
/// Fenced segments become single [`DisplayNode::CodeBlock`] nodes; the prose
/// between them goes through [`format_line`] line by line. An opening fence
/// with no closing fence never matches the fence pattern, so its text falls
/// through to prose formatting (the legacy best-effort behavior).
pub fn render(document: &str) -> Vec<DisplayNode> {
    let mut nodes = Vec::new();
    let mut cursor = 0;

    for fence in FENCE.find_iter(document) {
        if fence.start() > cursor {
            render_prose(&document[cursor..fence.start()], &mut nodes);
        }
        nodes.push(parse_fence(fence.as_str()));
        cursor = fence.end();
    }
    if cursor < document.len() {
        render_prose(&document[cursor..], &mut nodes);
    }

    nodes
}

fn render_prose(segment: &str, nodes: &mut Vec<DisplayNode>) {
    for line in segment.split('\n') {
        nodes.push(format_line(line));
    }
}

fn parse_fence(block: &str) -> DisplayNode {
    let lines: Vec<&str> = block.split('\n').collect();
    let language = lines[0][3..].to_string();
    let code = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    };
    DisplayNode::CodeBlock { language, code }
}

fn split_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for m in INLINE.find_iter(text) {
        if m.start() > cursor {
            spans.push(InlineSpan::Plain(text[cursor..m.start()].to_string()));
        }
        let run = m.as_str();
        if let Some(inner) = run.strip_prefix("**") {
            spans.push(InlineSpan::Bold(
                inner.strip_suffix("**").unwrap_or(inner).to_string(),
            ));
        } else {
            spans.push(InlineSpan::Code(run[1..run.len() - 1].to_string()));
        }
        cursor = m.end();
    }
    if cursor < text.len() {
        spans.push(InlineSpan::Plain(text[cursor..].to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> InlineSpan {
        InlineSpan::Plain(s.into())
    }

    #[test]
    fn test_heading_markers_stripped() {
        assert_eq!(
            format_line("# Top"),
            DisplayNode::Heading {
                level: 1,
                text: "Top".into()
            }
        );
        assert_eq!(
            format_line("## Middle"),
            DisplayNode::Heading {
                level: 2,
                text: "Middle".into()
            }
        );
        assert_eq!(
            format_line("### Small"),
            DisplayNode::Heading {
                level: 3,
                text: "Small".into()
            }
        );
    }

    #[test]
    fn test_heading_marker_alone_beats_line_break() {
        // "# " is all-whitespace after the marker, but the heading rule
        // runs first.
        assert_eq!(
            format_line("# "),
            DisplayNode::Heading {
                level: 1,
                text: "".into()
            }
        );
    }

    #[test]
    fn test_list_items_both_markers() {
        assert_eq!(format_line("* star"), DisplayNode::ListItem("star".into()));
        assert_eq!(format_line("- dash"), DisplayNode::ListItem("dash".into()));
    }

    #[test]
    fn test_indented_marker_is_not_a_heading() {
        assert_eq!(
            format_line("  # not a heading"),
            DisplayNode::Paragraph(vec![plain("  # not a heading")])
        );
    }

    #[test]
    fn test_blank_and_whitespace_lines() {
        assert_eq!(format_line(""), DisplayNode::LineBreak);
        assert_eq!(format_line("   \t"), DisplayNode::LineBreak);
    }

    #[test]
    fn test_heading_text_is_verbatim() {
        assert_eq!(
            format_line("# A **bold** title"),
            DisplayNode::Heading {
                level: 1,
                text: "A **bold** title".into()
            }
        );
    }

    #[test]
    fn test_inline_bold_and_code_spans() {
        assert_eq!(
            format_line("a **b** c `d` e"),
            DisplayNode::Paragraph(vec![
                plain("a "),
                InlineSpan::Bold("b".into()),
                plain(" c "),
                InlineSpan::Code("d".into()),
                plain(" e"),
            ])
        );
    }

    #[test]
    fn test_unclosed_bold_stays_literal() {
        assert_eq!(
            format_line("a **b"),
            DisplayNode::Paragraph(vec![plain("a **b")])
        );
    }

    #[test]
    fn test_unclosed_backtick_stays_literal() {
        assert_eq!(
            format_line("run `cmd"),
            DisplayNode::Paragraph(vec![plain("run `cmd")])
        );
    }

    #[test]
    fn test_adjacent_spans_without_plain_text() {
        assert_eq!(
            format_line("**a**`b`"),
            DisplayNode::Paragraph(vec![
                InlineSpan::Bold("a".into()),
                InlineSpan::Code("b".into())
            ])
        );
    }

    #[test]
    fn test_fenced_block_round_trip() {
        let nodes = render("```python\nprint(1)\n```");
        assert_eq!(
            nodes,
            vec![DisplayNode::CodeBlock {
                language: "python".into(),
                code: "print(1)".into()
            }]
        );
    }

    #[test]
    fn test_fence_without_language_tag() {
        let nodes = render("```\nlet x = 1;\n```");
        assert_eq!(
            nodes,
            vec![DisplayNode::CodeBlock {
                language: "".into(),
                code: "let x = 1;".into()
            }]
        );
    }

    #[test]
    fn test_prose_and_fence_interleaving_order() {
        let doc = "# Title\nintro\n```rust\nfn main() {}\n```\noutro";
        let nodes = render(doc);
        assert_eq!(
            nodes,
            vec![
                DisplayNode::Heading {
                    level: 1,
                    text: "Title".into()
                },
                DisplayNode::Paragraph(vec![plain("intro")]),
                // The newline before the fence leaves an empty prose line.
                DisplayNode::LineBreak,
                DisplayNode::CodeBlock {
                    language: "rust".into(),
                    code: "fn main() {}".into()
                },
                DisplayNode::LineBreak,
                DisplayNode::Paragraph(vec![plain("outro")]),
            ]
        );
    }

    #[test]
    fn test_multiline_code_preserved() {
        let nodes = render("```js\nconst a = 1;\n\nconst b = 2;\n```");
        assert_eq!(
            nodes,
            vec![DisplayNode::CodeBlock {
                language: "js".into(),
                code: "const a = 1;\n\nconst b = 2;".into()
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_falls_back_to_prose() {
        let nodes = render("```python\nprint(1)");
        assert_eq!(
            nodes,
            vec![
                // The stray delimiter line goes through inline formatting,
                // where the first backtick pair reads as an empty code span.
                DisplayNode::Paragraph(vec![
                    InlineSpan::Code("".into()),
                    plain("`python"),
                ]),
                DisplayNode::Paragraph(vec![plain("print(1)")]),
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let doc = "# H\n\ntext **b** and `c`\n* item\n```sh\nls\n```";
        assert_eq!(render(doc), render(doc));
    }

    #[test]
    fn test_document_starting_with_fence_has_no_leading_prose() {
        let nodes = render("```sh\nls\n```\nafter");
        assert!(matches!(nodes[0], DisplayNode::CodeBlock { .. }));
        assert_eq!(nodes[1], DisplayNode::LineBreak);
        assert_eq!(nodes[2], DisplayNode::Paragraph(vec![plain("after")]));
    }
}
