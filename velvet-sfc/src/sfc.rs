use pest::Parser;
use pest::iterators::Pair;

use crate::error::SfcError;

#[derive(pest_derive::Parser)]
#[grammar = "grammar.pest"]
struct SfcParser;

#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: Option<String>, // boolean attrs allowed, e.g. `scoped` or `setup`
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateBlock {
    pub attrs: Vec<Attr>,
    pub content: String,
}

impl TemplateBlock {
    /// Prop names declared by `props="A B"` (commas also separate).
    pub fn props(&self) -> Vec<&str> {
        attr_value(&self.attrs, "props")
            .map(|v| {
                v.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptBlock {
    pub attrs: Vec<Attr>,
    pub content: String,
    pub setup: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleBlock {
    pub attrs: Vec<Attr>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sfc {
    pub template: Option<TemplateBlock>,
    pub script_setup: Option<ScriptBlock>,
    pub script: Option<ScriptBlock>,
    pub style: Option<StyleBlock>,
}

/// Split a `.vx` source into its blocks. Each block kind may appear once.
pub fn parse_sfc(source: &str) -> Result<Sfc, SfcError> {
    let mut sfc = Sfc::default();

    let mut pairs =
        SfcParser::parse(Rule::file, source).map_err(|e| SfcError::Syntax(e.to_string()))?;
    let Some(file) = pairs.next() else {
        return Ok(sfc);
    };

    // Children of `file` are `block`s plus the trailing EOI.
    for node in file.into_inner() {
        if node.as_rule() == Rule::block {
            for inner in node.into_inner() {
                consume_top_level(inner, &mut sfc)?;
            }
        }
    }

    Ok(sfc)
}

fn consume_top_level(node: Pair<Rule>, sfc: &mut Sfc) -> Result<(), SfcError> {
    match node.as_rule() {
        Rule::template => {
            let (attrs, content) = split_block(node, Rule::template_open, Rule::template_body);
            put_once(&mut sfc.template, "template", TemplateBlock { attrs, content })
        }
        Rule::script => {
            let (attrs, content) = split_block(node, Rule::script_open, Rule::script_body);
            let setup = has_bool_attr(&attrs, "setup");
            let block = ScriptBlock {
                attrs,
                content,
                setup,
            };
            if setup {
                put_once(&mut sfc.script_setup, "script setup", block)
            } else {
                put_once(&mut sfc.script, "script", block)
            }
        }
        Rule::style => {
            let (attrs, content) = split_block(node, Rule::style_open, Rule::style_body);
            put_once(&mut sfc.style, "style", StyleBlock { attrs, content })
        }
        _ => Ok(()),
    }
}

fn put_once<T>(slot: &mut Option<T>, kind: &'static str, block: T) -> Result<(), SfcError> {
    if slot.is_some() {
        return Err(SfcError::DuplicateBlock(kind));
    }
    *slot = Some(block);
    Ok(())
}

/// Attributes of the opening tag and the verbatim body of one block.
fn split_block(block: Pair<Rule>, open: Rule, body: Rule) -> (Vec<Attr>, String) {
    let mut attrs = Vec::new();
    let mut content = String::new();

    for p in block.into_inner() {
        if p.as_rule() == open {
            // attributes are direct children of *_open
            for a in p.into_inner() {
                if a.as_rule() == Rule::attribute {
                    attrs.push(parse_attr(a));
                }
            }
        } else if p.as_rule() == body {
            content = p.as_str().to_string();
        }
    }
    (attrs, content)
}

fn parse_attr(attr: Pair<Rule>) -> Attr {
    // attribute = ident ( "=" quoted )?
    let mut name = String::new();
    let mut value: Option<String> = None;

    for part in attr.into_inner() {
        match part.as_rule() {
            Rule::ident => name = part.as_str().to_string(),
            Rule::quoted => value = Some(strip_quotes(part.as_str()).to_string()),
            _ => {}
        }
    }
    Attr { name, value }
}

fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .or_else(|| s.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')))
        .unwrap_or(s)
}

fn has_bool_attr(attrs: &[Attr], key: &str) -> bool {
    attrs.iter().any(|a| a.name == key)
}

fn attr_value<'a>(attrs: &'a [Attr], key: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|a| a.name == key)
        .and_then(|a| a.value.as_deref())
}
