/// Knobs for a template execution. Nested subcomponent renders inherit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Fail with `UnknownField` when a `v-if` field is absent instead of
    /// dropping the element.
    pub strict_conditionals: bool,
    /// HTML-escape values substituted by the interpolation pass.
    pub escape_html: bool,
    /// Run the interpolation pass after directives are resolved.
    pub interpolate: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_conditionals: false,
            escape_html: true,
            interpolate: true,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_conditionals(mut self, on: bool) -> Self {
        self.strict_conditionals = on;
        self
    }

    pub fn escape_html(mut self, on: bool) -> Self {
        self.escape_html = on;
        self
    }

    pub fn interpolate(mut self, on: bool) -> Self {
        self.interpolate = on;
        self
    }
}
