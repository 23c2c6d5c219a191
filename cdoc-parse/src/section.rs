//! Section parsing: turns a raw block into a header and typed body fragments.
//!
//! The walk is an explicit state machine over a line cursor. `InCodeRun` and
//! `InListRun` only look at indentation / list markers, so a tag token inside
//! an open run stays part of the run. An indented line always ends a list run.
//!
//! Every plain body line becomes a fragment, including empty ones (a bare
//! comment prefix); renderers turn those into paragraph breaks.

use crate::classify::{classify, code_content, list_item_content};
use crate::types::{Fragment, LineKind, RawBlock, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    InBody,
    InCodeRun,
    InListRun,
}

/// Parse one raw block into a [`Section`].
pub fn parse_section(block: &RawBlock) -> Section {
    let lines = block.lines();
    let mut state = State::Header;
    let mut pos = 0;

    let mut header = Fragment::plain("");
    let mut body = Vec::new();
    let mut code_lines: Vec<&str> = Vec::new();
    let mut list_items: Vec<String> = Vec::new();

    loop {
        let line = lines.get(pos).map(String::as_str);

        state = match state {
            State::Header => {
                // RawBlock guarantees at least one line.
                let Some(line) = line else { break };
                header = match classify(line) {
                    LineKind::Tag { tag, remainder } => Fragment::tagged(tag, remainder),
                    _ => Fragment::plain(line),
                };
                pos += 1;
                State::InBody
            }

            State::InBody => {
                let Some(line) = line else { break };
                match classify(line) {
                    LineKind::Tag { tag, remainder } => {
                        body.push(Fragment::tagged(tag, remainder));
                        pos += 1;
                        State::InBody
                    }
                    // Runs consume their own first line.
                    LineKind::Code { .. } => State::InCodeRun,
                    LineKind::ListItem { .. } => State::InListRun,
                    LineKind::Plain { content } => {
                        body.push(Fragment::plain(content));
                        pos += 1;
                        State::InBody
                    }
                }
            }

            State::InCodeRun => match line {
                Some(line) if line.trim().is_empty() => {
                    pos += 1;
                    State::InCodeRun
                }
                Some(line) if code_content(line).is_some() => {
                    code_lines.extend(code_content(line));
                    pos += 1;
                    State::InCodeRun
                }
                _ => {
                    if !code_lines.is_empty() {
                        body.push(Fragment::code(code_lines.join("\n")));
                    }
                    code_lines.clear();
                    State::InBody
                }
            },

            State::InListRun => match line
                .filter(|l| code_content(l).is_none())
                .and_then(list_item_content)
            {
                Some(item) => {
                    list_items.push(item.to_string());
                    pos += 1;
                    State::InListRun
                }
                None => {
                    body.push(Fragment::List {
                        items: std::mem::take(&mut list_items),
                    });
                    State::InBody
                }
            },
        };

        if line.is_none() && state == State::InBody {
            break;
        }
    }

    Section { header, body }
}

/// Parse every block of a file, in order.
pub fn parse_sections(blocks: &[RawBlock]) -> Vec<Section> {
    blocks.iter().map(parse_section).collect()
}
