use crate::escape::{escape_attr, escape_text};
use crate::{VNode, is_raw_text, is_void};

/// Serialize a node and its subtree back to markup.
pub fn render(node: &VNode) -> String {
    let mut out = String::new();
    render_into(node, false, &mut out);
    out
}

/// Serialize a sequence of sibling nodes.
pub fn render_all(nodes: &[VNode]) -> String {
    let mut out = String::new();
    for n in nodes {
        render_into(n, false, &mut out);
    }
    out
}

fn render_into(node: &VNode, raw: bool, out: &mut String) {
    match node {
        VNode::Text(t) if raw => out.push_str(t),
        VNode::Text(t) => out.push_str(&escape_text(t)),
        VNode::Comment(c) => {
            out.push_str("<!--");
            out.push_str(c);
            out.push_str("-->");
        }
        VNode::Element {
            tag,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for a in attrs {
                out.push(' ');
                out.push_str(&a.name);
                out.push_str("=\"");
                out.push_str(&escape_attr(&a.value));
                out.push('"');
            }
            if is_void(tag) && children.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            let raw_body = is_raw_text(tag);
            for c in children {
                render_into(c, raw_body, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}
