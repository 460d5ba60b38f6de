use std::collections::VecDeque;

use tracing::{debug, trace};
use velvet_dom::{Attr, VNode};

use crate::component::Component;
use crate::directive::{DirectiveKey, DirectiveKind, is_directive};
use crate::error::{Error, Result};
use crate::handlers::{LoopIds, execute_bind, execute_for, execute_if, execute_model, execute_on};
use crate::listener::ListenerRegistry;
use crate::options::Options;
use crate::order::order_attrs;
use crate::template::Template;
use crate::value::Data;

/// What became of a visited node.
#[derive(Debug, Clone, PartialEq)]
pub enum Traversal {
    /// The node stays at its position (possibly with rewritten attributes and children).
    Unchanged(VNode),
    /// A rendered subcomponent takes the node's position.
    Replaced(VNode),
    /// Loop copies take the node's position; they still have to be visited.
    Expanded(Vec<VNode>),
    /// The node is gone.
    Removed,
}

/// Result of a single directive.
#[derive(Debug)]
pub(crate) enum Flow {
    Continue,
    Removed,
    Expanded(Vec<VNode>),
}

/// State owned by one template execution.
pub(crate) struct Executor<'a> {
    component: &'a Component,
    options: &'a Options,
    listeners: &'a mut dyn ListenerRegistry,
    ids: LoopIds,
}

impl<'a> Executor<'a> {
    pub(crate) fn new(
        component: &'a Component,
        options: &'a Options,
        listeners: &'a mut dyn ListenerRegistry,
    ) -> Self {
        Self {
            component,
            options,
            listeners,
            ids: LoopIds::default(),
        }
    }

    /// Visit a sibling list in order, splicing in whatever each visit yields.
    /// Loop copies are queued at the front so they are visited next.
    pub(crate) fn visit_children(&mut self, children: Vec<VNode>, data: &mut Data) -> Result<Vec<VNode>> {
        let mut queue: VecDeque<VNode> = children.into();
        let mut out = Vec::with_capacity(queue.len());
        while let Some(child) = queue.pop_front() {
            match self.visit(child, data)? {
                Traversal::Unchanged(n) | Traversal::Replaced(n) => out.push(n),
                Traversal::Expanded(copies) => {
                    for copy in copies.into_iter().rev() {
                        queue.push_front(copy);
                    }
                }
                Traversal::Removed => {}
            }
        }
        Ok(out)
    }

    pub(crate) fn visit(&mut self, mut node: VNode, data: &mut Data) -> Result<Traversal> {
        // Text and comments are left for the interpolation pass.
        let Some(tag) = node.tag().map(str::to_string) else {
            return Ok(Traversal::Unchanged(node));
        };
        trace!(tag = %tag, "visiting element");

        let mut sub = self.component.new_sub(&tag);

        if let Some(attrs) = node.attrs_mut() {
            *attrs = order_attrs(attrs);
        }

        while let Some(attr) = take_leading_directive(&mut node) {
            match self.dispatch(&mut node, sub.as_mut(), &attr, data)? {
                Flow::Continue => {}
                Flow::Removed => {
                    debug!(tag = %tag, directive = %attr.name, "removed element");
                    return Ok(Traversal::Removed);
                }
                Flow::Expanded(copies) => return Ok(Traversal::Expanded(copies)),
            }
        }

        if let Some(sub) = sub {
            // The subcomponent owns its markup; the element's children are dropped.
            return Ok(Traversal::Replaced(self.render_sub(sub)?));
        }

        if let Some(children) = node.children_mut() {
            let pending = std::mem::take(children);
            *children = self.visit_children(pending, data)?;
        }
        Ok(Traversal::Unchanged(node))
    }

    /// Route one directive attribute to its handler.
    pub(crate) fn dispatch(
        &mut self,
        node: &mut VNode,
        sub: Option<&mut Component>,
        attr: &Attr,
        data: &mut Data,
    ) -> Result<Flow> {
        let key = DirectiveKey::parse(&attr.name)
            .ok_or_else(|| Error::UnknownDirective(attr.name.clone()))?;
        let kind = key
            .kind()
            .ok_or_else(|| Error::UnknownDirective(attr.name.clone()))?;
        debug!(directive = %attr.name, value = %attr.value, "executing directive");

        let required_arg = || {
            key.arg
                .filter(|a| !a.is_empty())
                .ok_or_else(|| Error::MissingArgument(attr.name.clone()))
        };

        match kind {
            DirectiveKind::If => {
                if execute_if(&attr.value, data, self.options.strict_conditionals)? {
                    Ok(Flow::Continue)
                } else {
                    Ok(Flow::Removed)
                }
            }
            DirectiveKind::For => {
                let copies = execute_for(node, &attr.value, data, &mut self.ids)?;
                Ok(Flow::Expanded(copies))
            }
            DirectiveKind::Bind => {
                execute_bind(node, sub, required_arg()?, &attr.value, data)?;
                Ok(Flow::Continue)
            }
            DirectiveKind::Model => {
                execute_model(node, &attr.value, data, &mut *self.listeners)?;
                Ok(Flow::Continue)
            }
            DirectiveKind::On => {
                execute_on(node, required_arg()?, &attr.value, &mut *self.listeners);
                Ok(Flow::Continue)
            }
        }
    }

    /// Render a subcomponent instance with its own execution state and parse
    /// the result back into a single node.
    fn render_sub(&mut self, sub: Component) -> Result<VNode> {
        debug!(component = sub.name(), "rendering subcomponent");
        let mut data = sub.instance_data();
        let markup = Template::new(&sub)
            .with_options(self.options.clone())
            .execute(&mut data, &mut *self.listeners)?;
        let mut nodes = velvet_dom::parse_fragment(&markup)?;
        match (nodes.pop(), nodes.is_empty()) {
            (Some(root), true) => Ok(root),
            (root, _) => Err(Error::Structural {
                component: sub.name().to_string(),
                found: nodes.len() + usize::from(root.is_some()),
            }),
        }
    }
}

/// Directives sit at the front once attributes are ordered; pull the next one
/// off so it never reaches the output.
fn take_leading_directive(node: &mut VNode) -> Option<Attr> {
    let attrs = node.attrs_mut()?;
    if attrs.first().is_some_and(|a| is_directive(&a.name)) {
        Some(attrs.remove(0))
    } else {
        None
    }
}
