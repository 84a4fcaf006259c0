//! Canonical, tab-indented rendering of a JSON object.
//!
//! Entries keep insertion order. Nested objects are expanded one tab deeper,
//! every other value (arrays included) uses the compact serde_json encoding.
//! The closing brace carries no trailing newline.

use crate::Object;

use serde_json::Value;

/// Renders `object` with its entries indented `level + 1` tabs and its
/// closing brace indented `level` tabs.
pub fn render(object: &Object, level: usize) -> String {
    let mut out = String::new();
    render_into(&mut out, object, level);
    out
}

fn push_indent(out: &mut String, level: usize) {
    out.extend(std::iter::repeat_n('\t', level));
}

fn render_into(out: &mut String, object: &Object, level: usize) {
    out.push_str("{\n");

    let mut entries = object.iter().peekable();
    while let Some((key, value)) = entries.next() {
        push_indent(out, level + 1);

        out.push_str(&Value::from(key.as_str()).to_string());
        out.push_str(": ");

        match value {
            Value::Object(nested) => render_into(out, nested, level + 1),
            leaf => out.push_str(&leaf.to_string()),
        }

        if entries.peek().is_some() {
            out.push(',');
        }
        out.push('\n');
    }

    push_indent(out, level);
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn empty_object() {
        assert_eq!(render(&Object::new(), 0), "{\n}");
        assert_eq!(render(&Object::new(), 2), "{\n\t\t}");
    }

    #[test]
    fn flat_object_keeps_insertion_order() {
        let mut obj = Object::new();
        obj.insert("zeta".into(), json!(1));
        obj.insert("alpha".into(), json!("two"));
        obj.insert("mid".into(), json!(null));

        assert_eq!(
            render(&obj, 0),
            "{\n\t\"zeta\": 1,\n\t\"alpha\": \"two\",\n\t\"mid\": null\n}",
        );
    }

    #[test]
    fn nested_object_is_one_tab_deeper() {
        let obj = object(json!({ "a": { "b": 1 } }));
        assert_eq!(render(&obj, 0), "{\n\t\"a\": {\n\t\t\"b\": 1\n\t}\n}");
    }

    #[test]
    fn nested_empty_object_and_trailing_entry() {
        let obj = object(json!({ "a": {}, "b": true }));
        assert_eq!(render(&obj, 0), "{\n\t\"a\": {\n\t},\n\t\"b\": true\n}");
    }

    #[test]
    fn arrays_stay_compact() {
        let obj = object(json!({ "list": [1, { "x": "y" }, [true]] }));
        assert_eq!(render(&obj, 0), "{\n\t\"list\": [1,{\"x\":\"y\"},[true]]\n}");
    }

    #[test]
    fn keys_and_strings_are_escaped() {
        let obj = object(json!({ "quo\"te": "line\nbreak\\" }));
        assert_eq!(render(&obj, 0), "{\n\t\"quo\\\"te\": \"line\\nbreak\\\\\"\n}");
    }

    #[test]
    fn no_comma_before_any_closing_brace() {
        let obj = object(json!({ "a": { "b": { "c": 1, "d": 2 } }, "e": [], "f": 1.5 }));
        let text = render(&obj, 1);
        assert!(!text.contains(",\n\t}") && !text.contains(",\n}"));
        assert!(text.ends_with("\t}"));
        assert_eq!(render(&obj, 1), text);
    }

    #[test]
    fn output_parses_back_to_the_same_object() {
        let obj = object(json!({ "n": -3, "f": 0.25, "s": "x", "o": { "p": [null] } }));
        let parsed: Value = serde_json::from_str(&render(&obj, 0)).unwrap();
        assert_eq!(parsed, Value::Object(obj));
    }
}
