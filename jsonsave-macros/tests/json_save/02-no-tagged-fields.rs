use jsonsave_core::JsonSave;
use jsonsave_macros::JsonSave;

#[derive(JsonSave)]
struct Unit;

#[derive(JsonSave)]
struct Untagged {
    #[allow(dead_code)]
    value: i32,
}

fn main() {

    assert!(Unit::TAGGED_FIELDS.is_empty());
    assert!(Untagged::TAGGED_FIELDS.is_empty());

}
