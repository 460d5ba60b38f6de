use tracing::debug;
use velvet_dom::{VNode, parse_fragment, render};

use crate::component::Component;
use crate::error::{Error, Result};
use crate::interpolate::Interpolator;
use crate::listener::ListenerRegistry;
use crate::options::Options;
use crate::traverse::Executor;
use crate::value::Data;

/// Executes a component's template against a data context.
///
/// Each call to [`Template::execute`] is a one-shot render: it owns its loop
/// counter, mutates `data` (loop expansion binds synthetic fields) and either
/// returns the complete markup or an error, never partial output.
///
/// ```
/// use velvet_core::{Component, Data, Listeners, Template};
///
/// let app = Component::new("app", r#"<ul><li v-for="x in items">{{ x }}</li></ul>"#);
/// let mut data: Data = [("items", vec![1, 2])].into_iter().collect();
/// let html = Template::new(&app)
///     .execute(&mut data, &mut Listeners::new())
///     .unwrap();
/// assert_eq!(html, "<ul><li>1</li><li>2</li></ul>");
/// ```
pub struct Template<'c> {
    component: &'c Component,
    options: Options,
}

impl<'c> Template<'c> {
    pub fn new(component: &'c Component) -> Self {
        Self {
            component,
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Run directives, serialize, then interpolate placeholders.
    pub fn execute(&self, data: &mut Data, listeners: &mut dyn ListenerRegistry) -> Result<String> {
        let root = self.execute_tree(data, listeners)?;
        let markup = render(&root);
        if !self.options.interpolate {
            return Ok(markup);
        }
        Interpolator::new(&self.options)?.render(&markup, data)
    }

    /// Run directives only and return the resolved tree.
    pub fn execute_tree(
        &self,
        data: &mut Data,
        listeners: &mut dyn ListenerRegistry,
    ) -> Result<VNode> {
        debug!(component = self.component.name(), "executing template");
        let roots = parse_fragment(self.component.template())?;
        let root = self.single_root(roots)?;

        let mut executor = Executor::new(self.component, &self.options, listeners);
        let resolved = executor.visit_children(vec![root], data)?;
        self.single_root(resolved)
    }

    fn single_root(&self, mut nodes: Vec<VNode>) -> Result<VNode> {
        if nodes.len() == 1 && nodes[0].is_element() {
            if let Some(root) = nodes.pop() {
                return Ok(root);
            }
        }
        Err(Error::Structural {
            component: self.component.name().to_string(),
            found: nodes.len(),
        })
    }
}
