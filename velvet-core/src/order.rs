use velvet_dom::Attr;

use crate::directive::{DirectiveKey, DirectiveKind};

// Unknown directives still have to reach the dispatcher, so they sort after
// the known kinds but ahead of plain attributes.
const UNKNOWN_DIRECTIVE_RANK: usize = DirectiveKind::ALL.len();
const PLAIN_RANK: usize = UNKNOWN_DIRECTIVE_RANK + 1;

fn rank(attr: &Attr) -> usize {
    match DirectiveKey::parse(&attr.name) {
        Some(key) => key.kind().map_or(UNKNOWN_DIRECTIVE_RANK, |k| k as usize),
        None => PLAIN_RANK,
    }
}

/// Order attributes for execution: directives first by kind priority
/// (for, if, model, on, bind), then unknown directives, then plain attributes.
/// The sort is stable, so ties keep their source order and the result has
/// exactly the input's attributes.
pub fn order_attrs(attrs: &[Attr]) -> Vec<Attr> {
    let mut ordered = attrs.to_vec();
    ordered.sort_by_key(rank);
    ordered
}
