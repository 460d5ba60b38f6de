use velvet_core::{Component, Data, Error, HandlerKind, Listeners, Options, Template, Value};
use velvet_dom::VNode;

fn render_with(template: &str, data: &mut Data, options: Options) -> Result<String, Error> {
    let app = Component::new("app", template);
    Template::new(&app)
        .with_options(options)
        .execute(data, &mut Listeners::new())
}

fn render(template: &str, mut data: Data) -> Result<String, Error> {
    render_with(template, &mut data, Options::default())
}

fn tree(template: &str, data: &mut Data) -> VNode {
    let app = Component::new("app", template);
    Template::new(&app)
        .execute_tree(data, &mut Listeners::new())
        .unwrap()
}

// ---------- v-if ----------

#[test]
fn conditional_keeps_element_when_true() {
    let data: Data = [("show", true)].into_iter().collect();
    let out = render(r#"<div><p v-if="show">hi</p><span>x</span></div>"#, data).unwrap();
    assert_eq!(out, "<div><p>hi</p><span>x</span></div>");
}

#[test]
fn conditional_removes_element_when_false() {
    let data: Data = [("show", false)].into_iter().collect();
    let out = render(r#"<div><p v-if="show">hi</p><span>x</span></div>"#, data).unwrap();
    assert_eq!(out, "<div><span>x</span></div>");
}

#[test]
fn conditional_on_non_boolean_removes_element() {
    let data: Data = [("show", "yes")].into_iter().collect();
    let out = render(r#"<div><p v-if="show">hi</p></div>"#, data).unwrap();
    assert_eq!(out, "<div></div>");
}

#[test]
fn conditional_on_missing_field_removes_element() {
    let out = render(r#"<div><p v-if="show">hi</p></div>"#, Data::new()).unwrap();
    assert_eq!(out, "<div></div>");
}

#[test]
fn strict_conditional_on_missing_field_fails() {
    let err = render_with(
        r#"<div><p v-if="show">hi</p></div>"#,
        &mut Data::new(),
        Options::new().strict_conditionals(true),
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownField(f) if f == "show"));
}

#[test]
fn removed_element_takes_its_subtree_along() {
    let data: Data = [("open", false)].into_iter().collect();
    let out = render(
        r#"<div><section v-if="open"><p v-show="x">nested</p></section></div>"#,
        data,
    )
    .unwrap();
    assert_eq!(out, "<div></div>");
}

// ---------- v-for ----------

#[test]
fn loop_expands_in_sequence_order() {
    let data: Data = [("items", vec![10, 20, 30])].into_iter().collect();
    let out = render(r#"<ul><li v-for="x in items">{{ x }}</li></ul>"#, data).unwrap();
    assert_eq!(out, "<ul><li>10</li><li>20</li><li>30</li></ul>");
}

#[test]
fn loop_binds_synthetic_names() {
    let mut data: Data = [("items", vec![10, 20, 30])].into_iter().collect();
    let root = tree(r#"<ul><li v-for="x in items">{{ x }}</li></ul>"#, &mut data);

    let texts: Vec<String> = root.children().iter().map(VNode::text_content).collect();
    assert_eq!(texts, ["{{ x0 }}", "{{ x1 }}", "{{ x2 }}"]);
    assert_eq!(data.get("x0"), Some(&Value::from(10)));
    assert_eq!(data.get("x1"), Some(&Value::from(20)));
    assert_eq!(data.get("x2"), Some(&Value::from(30)));
    assert!(root.children().iter().all(|li| li.attrs().is_empty()));
}

#[test]
fn loop_over_empty_sequence_produces_nothing() {
    let data: Data = [("items", Vec::<i64>::new())].into_iter().collect();
    let out = render(r#"<ul><li v-for="x in items">{{ x }}</li></ul>"#, data).unwrap();
    assert_eq!(out, "<ul></ul>");
}

#[test]
fn loop_keeps_surrounding_siblings_in_place() {
    let data: Data = [("items", vec!["a", "b"])].into_iter().collect();
    let out = render(
        r#"<ul><li>first</li><li v-for="x in items">{{ x }}</li><li>last</li></ul>"#,
        data,
    )
    .unwrap();
    assert_eq!(out, "<ul><li>first</li><li>a</li><li>b</li><li>last</li></ul>");
}

#[test]
fn nested_loops() {
    let rows = Value::from(vec![vec![1, 2], vec![3]]);
    let data: Data = [("rows", rows)].into_iter().collect();
    let out = render(
        r#"<div><div v-for="row in rows"><span v-for="c in row">{{ c }}</span></div></div>"#,
        data,
    )
    .unwrap();
    assert_eq!(
        out,
        "<div><div><span>1</span><span>2</span></div><div><span>3</span></div></div>"
    );
}

#[test]
fn loop_copies_run_their_remaining_directives() {
    let data: Data = [("flags", vec![true, false, true])].into_iter().collect();
    let out = render(
        r#"<ul><li v-for="f in flags" v-if="f">yes</li></ul>"#,
        data,
    )
    .unwrap();
    assert_eq!(out, "<ul><li>yes</li><li>yes</li></ul>");
}

#[test]
fn loop_names_are_unique_within_a_render() {
    let mut data: Data = [("a", vec!["1"]), ("b", vec!["2"])].into_iter().collect();
    let template = r#"<div><p v-for="x in a">{{ x }}</p><p v-for="x in b">{{ x }}</p></div>"#;

    let root = tree(template, &mut data);
    let texts: Vec<String> = root.children().iter().map(VNode::text_content).collect();
    assert_eq!(texts, ["{{ x0 }}", "{{ x1 }}"]);

    let mut data: Data = [("a", vec!["1"]), ("b", vec!["2"])].into_iter().collect();
    let out = render_with(template, &mut data, Options::default()).unwrap();
    assert_eq!(out, "<div><p>1</p><p>2</p></div>");
}

#[test]
fn loop_renames_attribute_values() {
    let data: Data = [("ids", vec!["a", "b"])].into_iter().collect();
    let out = render(
        r#"<div><i v-for="id in ids" :title="id"></i></div>"#,
        data,
    )
    .unwrap();
    assert_eq!(out, r#"<div><i title="a"></i><i title="b"></i></div>"#);
}

#[test]
fn malformed_loop_expression() {
    let data: Data = [("items", vec![1])].into_iter().collect();
    let err = render(r#"<ul><li v-for="items">x</li></ul>"#, data).unwrap_err();
    assert!(matches!(err, Error::MalformedLoop(e) if e == "items"));
}

#[test]
fn loop_over_missing_or_scalar_field() {
    let err = render(r#"<ul><li v-for="x in items">x</li></ul>"#, Data::new()).unwrap_err();
    assert!(matches!(err, Error::MissingSequence(f) if f == "items"));

    let data: Data = [("items", "abc")].into_iter().collect();
    let err = render(r#"<ul><li v-for="x in items">x</li></ul>"#, data).unwrap_err();
    assert!(matches!(err, Error::MissingSequence(_)));
}

// ---------- v-bind ----------

#[test]
fn bind_writes_attribute() {
    let data: Data = [("t", "Hello")].into_iter().collect();
    let out = render(r#"<a href="x" :title="t"></a>"#, data).unwrap();
    assert_eq!(out, r#"<a href="x" title="Hello"></a>"#);
}

#[test]
fn bind_true_and_false() {
    let data: Data = [("off", true)].into_iter().collect();
    let out = render(r#"<button v-bind:disabled="off">Go</button>"#, data).unwrap();
    assert_eq!(out, r#"<button disabled="true">Go</button>"#);

    let data: Data = [("off", false)].into_iter().collect();
    let out = render(r#"<button v-bind:disabled="off">Go</button>"#, data).unwrap();
    assert_eq!(out, "<button>Go</button>");
}

#[test]
fn bind_missing_field() {
    let err = render(r#"<a :title="t"></a>"#, Data::new()).unwrap_err();
    assert!(matches!(err, Error::UnknownField(f) if f == "t"));
}

#[test]
fn bind_without_argument() {
    let data: Data = [("t", "x")].into_iter().collect();
    let err = render(r#"<a v-bind="t"></a>"#, data).unwrap_err();
    assert!(matches!(err, Error::MissingArgument(d) if d == "v-bind"));
}

// ---------- v-model ----------

#[test]
fn model_seeds_value_and_registers_listener() {
    let app = Component::new("app", r#"<form><input v-model="name"></form>"#);
    let mut data: Data = [("name", "Ada")].into_iter().collect();
    let mut listeners = Listeners::new();
    let out = Template::new(&app).execute(&mut data, &mut listeners).unwrap();

    assert_eq!(out, r#"<form><input input="name" value="Ada"/></form>"#);
    assert_eq!(listeners.handler("input"), Some(HandlerKind::Model));
}

#[test]
fn model_requires_string_field() {
    let data: Data = [("name", 3)].into_iter().collect();
    let err = render(r#"<form><input v-model="name"></form>"#, data).unwrap_err();
    match err {
        Error::TypeMismatch {
            field,
            expected,
            found,
        } => {
            assert_eq!(field, "name");
            assert_eq!(expected, "string");
            assert_eq!(found, "number");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn model_missing_field() {
    let err = render(r#"<form><input v-model="name"></form>"#, Data::new()).unwrap_err();
    assert!(matches!(err, Error::UnknownField(f) if f == "name"));
}

// ---------- v-on ----------

#[test]
fn on_records_method_and_registers_listener() {
    let app = Component::new("app", r#"<div><button v-on:click="save">Save</button></div>"#);
    let mut listeners = Listeners::new();
    let out = Template::new(&app)
        .execute(&mut Data::new(), &mut listeners)
        .unwrap();

    assert_eq!(out, r#"<div><button click="save">Save</button></div>"#);
    assert_eq!(listeners.handler("click"), Some(HandlerKind::Event));
    assert_eq!(listeners.len(), 1);
}

#[test]
fn on_shorthand() {
    let app = Component::new("app", r#"<button @dblclick="zoom">+</button>"#);
    let mut listeners = Listeners::new();
    let out = Template::new(&app)
        .execute(&mut Data::new(), &mut listeners)
        .unwrap();
    assert_eq!(out, r#"<button dblclick="zoom">+</button>"#);
    assert!(listeners.has("dblclick"));
}

#[test]
fn on_without_argument() {
    let err = render(r#"<button v-on="save">Save</button>"#, Data::new()).unwrap_err();
    assert!(matches!(err, Error::MissingArgument(_)));
}

// ---------- unknown ----------

#[test]
fn unknown_directive_fails() {
    let err = render(r#"<div><p v-show="x">a</p></div>"#, Data::new()).unwrap_err();
    assert!(matches!(err, Error::UnknownDirective(d) if d == "v-show"));
}

#[test]
fn loop_expression_tolerates_any_whitespace() {
    let data: Data = [("items", vec!["a", "b"])].into_iter().collect();
    let out = render("<ul><li v-for=\"x\tin\titems\">{{ x }}</li></ul>", data).unwrap();
    assert_eq!(out, "<ul><li>a</li><li>b</li></ul>");
}
