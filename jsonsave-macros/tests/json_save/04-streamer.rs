use jsonsave_core::{JsonStreamer, Object, Result, Value};
use jsonsave_macros::JsonSave;

#[derive(Clone, Default, JsonSave)]
struct Counter {
    #[json_save(kind = Int)]
    hits: i32,
    label: String,
}

impl JsonStreamer for Counter {

    fn serialize(&self) -> Object {
        let mut object = Object::new();
        object.insert("label".into(), Value::from(self.label.as_str()));
        object
    }

    fn deserialize(&mut self, object: &Object) -> Result<()> {
        self.label = object.get("label")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(())
    }

}

fn main() {

    let counter = Counter { hits: 3, label: "page".into() };

    let mut out = Vec::new();
    counter.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out.clone()).unwrap(), "{\n\t\"label\": \"page\",\n\t\"hits\": 3\n}");

    let mut restored = Counter::default();
    restored.read_from(out.as_slice()).unwrap();
    assert_eq!(restored.hits, 3);
    assert_eq!(restored.label, "page");

}
