use tracing::debug;
use velvet_dom::{Attr, VNode};

use crate::component::Component;
use crate::directive::title_case;
use crate::error::{Error, Result};
use crate::listener::{HandlerKind, ListenerRegistry};
use crate::value::{Data, Value};

/// Per-execution counter behind synthetic loop variable names.
#[derive(Debug, Default)]
pub(crate) struct LoopIds(u64);

impl LoopIds {
    pub(crate) fn next(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// `v-if`: whether the element stays. Only a boolean `true` keeps it.
pub(crate) fn execute_if(field: &str, data: &Data, strict: bool) -> Result<bool> {
    let field = field.trim();
    match data.get(field) {
        Some(Value::Bool(keep)) => Ok(*keep),
        Some(_) => Ok(false),
        None if strict => Err(Error::UnknownField(field.to_string())),
        None => Ok(false),
    }
}

/// `v-for`: one renamed copy of `node` per sequence item, in sequence order.
///
/// Each copy gets a fresh `<name><id>` variable that is bound in `data`; every
/// occurrence of `<name>` in the copy's text and attribute values is replaced
/// with it.
pub(crate) fn execute_for(
    node: &VNode,
    expr: &str,
    data: &mut Data,
    ids: &mut LoopIds,
) -> Result<Vec<VNode>> {
    let (name, field) = parse_loop(expr)?;
    let items = match data.get(field) {
        Some(Value::Seq(items)) => items.clone(),
        _ => return Err(Error::MissingSequence(field.to_string())),
    };
    debug!(field, count = items.len(), "expanding loop");

    let mut copies = Vec::with_capacity(items.len());
    for item in items {
        let key = format!("{name}{}", ids.next());
        let mut copy = node.clone();
        rename(&mut copy, name, &key);
        data.insert(key, item);
        copies.push(copy);
    }
    Ok(copies)
}

fn parse_loop(expr: &str) -> Result<(&str, &str)> {
    let malformed = || Error::MalformedLoop(expr.to_string());
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let [name, "in", field] = tokens.as_slice() else {
        return Err(malformed());
    };
    let (name, field) = (*name, *field);
    let is_ident = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    };
    if !is_ident(name) || !is_ident(field) {
        return Err(malformed());
    }
    Ok((name, field))
}

fn rename(node: &mut VNode, from: &str, to: &str) {
    match node {
        VNode::Text(t) | VNode::Comment(t) => {
            if t.contains(from) {
                *t = t.replace(from, to);
            }
        }
        VNode::Element {
            attrs, children, ..
        } => {
            for a in attrs.iter_mut() {
                if a.value.contains(from) {
                    a.value = a.value.replace(from, to);
                }
            }
            for c in children.iter_mut() {
                rename(c, from, to);
            }
        }
    }
}

/// `v-bind:<key>`: set a subcomponent prop, or write the attribute.
/// A boolean `false` suppresses the attribute altogether.
pub(crate) fn execute_bind(
    node: &mut VNode,
    sub: Option<&mut Component>,
    key: &str,
    field: &str,
    data: &Data,
) -> Result<()> {
    let field = field.trim();
    let value = data
        .get(field)
        .ok_or_else(|| Error::UnknownField(field.to_string()))?;

    if let Some(sub) = sub {
        let prop = title_case(key);
        if sub.set_prop(&prop, value.clone()) {
            debug!(component = sub.name(), prop = %prop, "bound prop");
            return Ok(());
        }
    }

    if matches!(value, Value::Bool(false)) {
        return Ok(());
    }
    node.push_attr(Attr::new(key, value.to_string()));
    Ok(())
}

/// `v-model`: wire the `input` event back to `field` and seed `value`.
pub(crate) fn execute_model(
    node: &mut VNode,
    field: &str,
    data: &Data,
    listeners: &mut dyn ListenerRegistry,
) -> Result<()> {
    let field = field.trim();
    let value = data
        .get(field)
        .ok_or_else(|| Error::UnknownField(field.to_string()))?;
    let Value::Str(current) = value else {
        return Err(Error::TypeMismatch {
            field: field.to_string(),
            expected: "string",
            found: value.kind(),
        });
    };

    let event = "input";
    node.push_attr(Attr::new(event, field));
    listeners.add_event_listener(event, HandlerKind::Model);
    node.push_attr(Attr::new("value", current.clone()));
    Ok(())
}

/// `v-on:<event>`: record the handler method and register the event kind.
pub(crate) fn execute_on(
    node: &mut VNode,
    event: &str,
    method: &str,
    listeners: &mut dyn ListenerRegistry,
) {
    node.push_attr(Attr::new(event, method));
    listeners.add_event_listener(event, HandlerKind::Event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_expression_shapes() {
        assert_eq!(parse_loop("x in items").unwrap(), ("x", "items"));
        assert_eq!(parse_loop("  item   in   list ").unwrap(), ("item", "list"));
        assert_eq!(parse_loop("x\tin\titems").unwrap(), ("x", "items"));
        assert_eq!(parse_loop("x\n  in items").unwrap(), ("x", "items"));
        assert!(parse_loop("x in items extra").is_err());
        assert!(parse_loop("x of items").is_err());
        assert!(parse_loop("items").is_err());
        assert!(parse_loop(" in items").is_err());
        assert!(parse_loop("(a, b) in items").is_err());
    }

    #[test]
    fn loop_ids_increase() {
        let mut ids = LoopIds::default();
        assert_eq!(ids.next(), 0);
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
    }
}
