use jsonsave_core::{JsonSave, ValueKind, Value};
use jsonsave_macros::JsonSave;

#[derive(JsonSave)]
pub struct Everything {
    #[json_save]
    raw: Value,
    #[json_save(kind = String)]
    name: String,
    #[json_save(kind = Int)]
    count: i32,
    #[json_save(kind = "float")]
    ratio: f32,
    #[json_save(kind = Long)]
    r#type: i64,
    #[json_save(kind = Boolean)]
    enabled: bool,
    not_saved: Vec<u8>,
}

fn main() {

    let fields: Vec<_> = Everything::TAGGED_FIELDS.iter()
        .map(|f| (f.name(), f.kind()))
        .collect();

    assert_eq!(fields, [
        ("raw", ValueKind::Object),
        ("name", ValueKind::String),
        ("count", ValueKind::Int),
        ("ratio", ValueKind::Float),
        ("type", ValueKind::Long),
        ("enabled", ValueKind::Boolean),
    ]);

    let e = Everything {
        raw: Value::Null,
        name: String::new(),
        count: 0,
        ratio: 0.0,
        r#type: 0,
        enabled: false,
        not_saved: Vec::new(),
    };
    let _ = (&e.raw, &e.name, e.count, e.ratio, e.r#type, e.enabled, &e.not_saved);

}
