use tracing::debug;
use velvet_core::{Component, Data, Value};

use crate::error::SfcError;
use crate::sfc::parse_sfc;

/// Build a [`Component`] from `.vx` source.
///
/// The `<script>` block, when present and non-empty, is a JSON object that
/// becomes the component's data. Props listed in `<template props="...">`
/// default to the data field of the same name, or to the empty string.
/// `<script setup>` and `<style>` are parsed but not used.
pub fn load_component(name: &str, source: &str) -> Result<Component, SfcError> {
    let sfc = parse_sfc(source)?;
    let template = sfc.template.ok_or(SfcError::MissingTemplate)?;

    let data = match &sfc.script {
        Some(script) if !script.content.trim().is_empty() => Data::from_json(&script.content)?,
        _ => Data::new(),
    };

    let mut component = Component::new(name, template.content.trim());
    for prop in template.props() {
        let default = data.get(prop).cloned().unwrap_or_else(|| Value::from(""));
        component = component.with_prop(prop, default);
    }
    debug!(component = name, fields = data.len(), "loaded component");
    Ok(component.with_data(data))
}
