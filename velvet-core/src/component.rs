use std::collections::BTreeMap;

use crate::value::{Data, Value};

/// A named template together with its declared props, local data and the
/// child components it may instantiate by tag name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    name: String,
    template: String,
    props: BTreeMap<String, Value>,
    data: Data,
    children: BTreeMap<String, Component>,
}

impl Component {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            ..Self::default()
        }
    }

    /// Declare a prop with its default value.
    pub fn with_prop(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.props.insert(name.into(), default.into());
        self
    }

    pub fn with_data(mut self, data: Data) -> Self {
        self.data = data;
        self
    }

    /// Register a child component under its own name.
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.insert(child.name.clone(), child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn has_prop(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    pub fn props(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overwrite a declared prop. Undeclared names are ignored.
    pub fn set_prop(&mut self, name: &str, value: Value) -> bool {
        match self.props.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn child(&self, tag: &str) -> Option<&Component> {
        self.children.get(tag)
    }

    /// Fresh instance of the child registered for `tag`; each element gets its
    /// own copy so prop writes never leak between elements.
    pub fn new_sub(&self, tag: &str) -> Option<Component> {
        self.children.get(tag).cloned()
    }

    /// Data a render of this instance sees: local data overlaid with props.
    pub fn instance_data(&self) -> Data {
        let mut data = self.data.clone();
        data.extend(self.props.iter().map(|(k, v)| (k.clone(), v.clone())));
        data
    }
}
