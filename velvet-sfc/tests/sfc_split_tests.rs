use velvet_sfc::{Sfc, SfcError, parse_sfc};

#[test]
fn splits_basic_sfc() {
    let src = r#"
<template id="root">
  <div class="app">{{ count }}</div>
</template>
<script setup lang="rs">
  // setup block
</script>
<script>
  { "count": 1 }
</script>
<style scoped>
  .app { color: red; }
</style>
"#;

    let sfc = parse_sfc(src).expect("parse ok");
    let tpl = sfc.template.expect("template");
    assert!(tpl.content.contains("{{ count }}"));
    assert!(
        tpl.attrs
            .iter()
            .any(|a| a.name == "id" && a.value.as_deref() == Some("root"))
    );

    let ss = sfc.script_setup.expect("script_setup");
    assert!(ss.setup);
    assert!(ss.content.contains("setup block"));

    let sc = sfc.script.expect("script");
    assert!(!sc.setup);
    assert!(sc.content.contains(r#""count": 1"#));

    let st = sfc.style.expect("style");
    assert!(st.content.contains(".app"));
    assert!(st.attrs.iter().any(|a| a.name == "scoped" && a.value.is_none()));
}

#[test]
fn template_body_is_verbatim() {
    let src = "<template><ul>\n  <li v-for=\"x in items\">{{ x }}</li>\n</ul></template>";
    let tpl = parse_sfc(src).unwrap().template.unwrap();
    assert_eq!(tpl.content, "<ul>\n  <li v-for=\"x in items\">{{ x }}</li>\n</ul>");
}

#[test]
fn blocks_are_optional_and_comments_are_skipped() {
    let sfc = parse_sfc("<!-- header -->\n<style>p {}</style>\n").unwrap();
    assert!(sfc.template.is_none());
    assert!(sfc.script.is_none());
    assert!(sfc.style.is_some());

    assert_eq!(parse_sfc("").unwrap(), Sfc::default());
}

#[test]
fn single_quoted_attributes() {
    let sfc = parse_sfc("<template props='A, B'><p></p></template>").unwrap();
    assert_eq!(sfc.template.unwrap().props(), ["A", "B"]);
}

#[test]
fn duplicate_blocks_are_rejected() {
    let err = parse_sfc("<template><a></a></template><template><b></b></template>").unwrap_err();
    assert!(matches!(err, SfcError::DuplicateBlock("template")));
}

#[test]
fn unterminated_block_is_a_syntax_error() {
    let err = parse_sfc("<template><div></div>").unwrap_err();
    assert!(matches!(err, SfcError::Syntax(_)));
}

#[test]
fn stray_text_is_a_syntax_error() {
    assert!(matches!(
        parse_sfc("hello <template></template>"),
        Err(SfcError::Syntax(_))
    ));
}
