use crate::escape::decode_entities;
use crate::{Attr, VNode, is_raw_text, is_void};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unterminated tag starting at byte {offset}")]
    UnterminatedTag { offset: usize },
    #[error("unterminated attribute value starting at byte {offset}")]
    UnterminatedQuote { offset: usize },
    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment { offset: usize },
    #[error("closing tag `</{tag}>` at byte {offset} has no matching open element")]
    UnexpectedClosingTag { tag: String, offset: usize },
}

/// Hand-rolled markup parser with support for:
/// - nested elements, self-closing tags (`<input/>`) and void elements
/// - attributes with quoted, unquoted or missing values (`:value`, `@click`, `v-if` kept verbatim)
/// - comments, raw `script`/`style` bodies and character references
///
/// Whitespace-only text at the top level is dropped so a template with a
/// trailing newline still yields a single root.
pub fn parse_fragment(input: &str) -> Result<Vec<VNode>, ParseError> {
    let mut i = 0usize;
    let bytes = input.as_bytes();
    let mut stack: Vec<VNode> = Vec::new();
    let mut roots: Vec<VNode> = Vec::new();

    fn push_child(stack: &mut [VNode], roots: &mut Vec<VNode>, node: VNode) {
        if let Some(VNode::Element { children, .. }) = stack.last_mut() {
            children.push(node);
        } else {
            roots.push(node);
        }
    }

    while i < bytes.len() {
        if bytes[i] == b'<' && starts_with_at(bytes, i, b"<!--") {
            let start = i;
            let body = i + 4;
            let end = input[body..]
                .find("-->")
                .ok_or(ParseError::UnterminatedComment { offset: start })?;
            push_child(
                &mut stack,
                &mut roots,
                VNode::Comment(input[body..body + end].to_string()),
            );
            i = body + end + 3;
        } else if bytes[i] == b'<' && i + 1 < bytes.len() && bytes[i + 1] == b'!' {
            // doctype and friends carry nothing for a fragment
            let start = i;
            let end = input[i..]
                .find('>')
                .ok_or(ParseError::UnterminatedTag { offset: start })?;
            i += end + 1;
        } else if bytes[i] == b'<' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            let start = i;
            i += 2;
            let tag = read_ident(bytes, &mut i);
            skip_ws(bytes, &mut i);
            if i >= bytes.len() || bytes[i] != b'>' {
                return Err(ParseError::UnterminatedTag { offset: start });
            }
            i += 1;
            if is_void(&tag) {
                continue;
            }

            let Some(pos) = stack.iter().rposition(|n| n.tag() == Some(tag.as_str())) else {
                return Err(ParseError::UnexpectedClosingTag { tag, offset: start });
            };
            // close everything opened after the matching element
            while stack.len() > pos {
                if let Some(n) = stack.pop() {
                    push_child(&mut stack, &mut roots, n);
                }
            }
        } else if bytes[i] == b'<' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_alphabetic() {
            let start = i;
            i += 1;
            let tag = read_ident(bytes, &mut i);
            let mut attrs: Vec<Attr> = Vec::new();
            let mut self_closing = false;

            loop {
                skip_ws(bytes, &mut i);
                if i >= bytes.len() {
                    return Err(ParseError::UnterminatedTag { offset: start });
                }
                match bytes[i] {
                    b'/' if i + 1 < bytes.len() && bytes[i + 1] == b'>' => {
                        self_closing = true;
                        i += 2;
                        break;
                    }
                    b'>' => {
                        i += 1;
                        break;
                    }
                    _ => match read_attribute(input, &mut i)? {
                        Some(attr) => attrs.push(attr),
                        // skip a stray character such as a lone '/'
                        None => i += 1,
                    },
                }
            }

            let mut element = VNode::Element {
                tag: tag.clone(),
                attrs,
                children: Vec::new(),
            };

            if self_closing || is_void(&tag) {
                push_child(&mut stack, &mut roots, element);
            } else if is_raw_text(&tag) {
                let close = format!("</{tag}");
                let end = find_ignore_case(&input[i..], &close)
                    .ok_or(ParseError::UnterminatedTag { offset: start })?;
                let body = &input[i..i + end];
                if let (false, Some(children)) = (body.is_empty(), element.children_mut()) {
                    children.push(VNode::Text(body.to_string()));
                }
                i += end + close.len();
                skip_ws(bytes, &mut i);
                if i >= bytes.len() || bytes[i] != b'>' {
                    return Err(ParseError::UnterminatedTag { offset: start });
                }
                i += 1;
                push_child(&mut stack, &mut roots, element);
            } else {
                stack.push(element);
            }
        } else {
            // text until the next tag start; a bare '<' is kept as text
            let start = i;
            i += 1;
            while i < bytes.len() && bytes[i] != b'<' {
                i += 1;
            }
            let raw = &input[start..i];
            let text = decode_entities(raw).into_owned();
            push_child(&mut stack, &mut roots, VNode::Text(text));
        }
    }

    // Unclosed tags: drain stack into their parents (best-effort)
    while let Some(n) = stack.pop() {
        push_child(&mut stack, &mut roots, n);
    }

    merge_adjacent_text(&mut roots);

    // Trim root whitespace-only text nodes
    roots.retain(|n| match n {
        VNode::Text(t) => !is_all_ws(t),
        _ => true,
    });

    Ok(roots)
}

// A bare '<' splits a text run; stitch the pieces back together.
fn merge_adjacent_text(nodes: &mut Vec<VNode>) {
    let mut merged: Vec<VNode> = Vec::with_capacity(nodes.len());
    for node in nodes.drain(..) {
        match node {
            VNode::Text(next) => {
                if let Some(VNode::Text(prev)) = merged.last_mut() {
                    prev.push_str(&next);
                } else {
                    merged.push(VNode::Text(next));
                }
            }
            VNode::Element {
                tag,
                attrs,
                mut children,
            } => {
                merge_adjacent_text(&mut children);
                merged.push(VNode::Element {
                    tag,
                    attrs,
                    children,
                });
            }
            other => merged.push(other),
        }
    }
    *nodes = merged;
}

fn is_all_ws(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace())
}

fn starts_with_at(bytes: &[u8], i: usize, pat: &[u8]) -> bool {
    bytes.len() >= i + pat.len() && &bytes[i..i + pat.len()] == pat
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.len() > h.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
}

fn read_ident(bytes: &[u8], i: &mut usize) -> String {
    let start = *i;
    while *i < bytes.len() {
        let c = bytes[*i];
        if c.is_ascii_alphanumeric() || matches!(c, b'_' | b'-' | b'.' | b':') {
            *i += 1;
        } else {
            break;
        }
    }
    String::from_utf8_lossy(&bytes[start..*i]).into_owned()
}

fn is_attr_name_byte(c: u8) -> bool {
    !c.is_ascii_whitespace() && !matches!(c, b'=' | b'>' | b'/' | b'"' | b'\'' | b'<')
}

fn read_attribute(input: &str, i: &mut usize) -> Result<Option<Attr>, ParseError> {
    let bytes = input.as_bytes();
    let name_start = *i;
    while *i < bytes.len() && is_attr_name_byte(bytes[*i]) {
        *i += 1;
    }
    if *i == name_start {
        return Ok(None);
    }
    let name = input[name_start..*i].to_string();

    let mut value = String::new();
    let mut j = *i;
    skip_ws(bytes, &mut j);
    if j < bytes.len() && bytes[j] == b'=' {
        j += 1;
        skip_ws(bytes, &mut j);
        *i = j;
        value = read_value(input, i)?;
    }

    Ok(Some(Attr {
        name,
        value: decode_entities(&value).into_owned(),
    }))
}

fn read_value(input: &str, i: &mut usize) -> Result<String, ParseError> {
    let bytes = input.as_bytes();
    if *i >= bytes.len() {
        return Ok(String::new());
    }
    let quote = bytes[*i];
    if quote == b'"' || quote == b'\'' {
        let open = *i;
        *i += 1;
        let start = *i;
        while *i < bytes.len() && bytes[*i] != quote {
            *i += 1;
        }
        if *i >= bytes.len() {
            return Err(ParseError::UnterminatedQuote { offset: open });
        }
        let s = input[start..*i].to_string();
        *i += 1; // consume closing quote
        return Ok(s);
    }
    let start = *i;
    while *i < bytes.len() && !bytes[*i].is_ascii_whitespace() && bytes[*i] != b'>' {
        if bytes[*i] == b'/' && *i + 1 < bytes.len() && bytes[*i + 1] == b'>' {
            break;
        }
        *i += 1;
    }
    Ok(input[start..*i].to_string())
}
