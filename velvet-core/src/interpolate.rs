//! Placeholder substitution over directive-resolved markup.

use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::error::Result;
use crate::options::Options;
use crate::value::Data;

// Only `{{ }}` is meaningful in markup; block and comment tags are moved to
// NUL-framed delimiters so `{%` and `{#` in text stay literal.
const BLOCK_DELIMITERS: (&str, &str) = ("\u{0}%", "%\u{0}");
const COMMENT_DELIMITERS: (&str, &str) = ("\u{0}#", "#\u{0}");

/// Substitutes `{{ field }}` placeholders using a MiniJinja environment.
///
/// Missing fields, including dotted paths below them, render as empty text;
/// values are HTML-escaped unless [`Options::escape_html`] is off.
pub struct Interpolator {
    env: Environment<'static>,
}

impl Interpolator {
    pub fn new(options: &Options) -> Result<Self> {
        let mut env = Environment::new();
        env.set_syntax(
            SyntaxConfig::builder()
                .block_delimiters(BLOCK_DELIMITERS.0, BLOCK_DELIMITERS.1)
                .variable_delimiters("{{", "}}")
                .comment_delimiters(COMMENT_DELIMITERS.0, COMMENT_DELIMITERS.1)
                .build()?,
        );
        let escape = if options.escape_html {
            AutoEscape::Html
        } else {
            AutoEscape::None
        };
        env.set_auto_escape_callback(move |_| escape.clone());
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env.set_keep_trailing_newline(true);
        Ok(Self { env })
    }

    pub fn render(&self, markup: &str, data: &Data) -> Result<String> {
        let ctx = minijinja::Value::from_serialize(data);
        Ok(self.env.render_str(markup, ctx)?)
    }

    /// Access to the underlying environment, e.g. to register filters.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}
