use jsonsave_macros::JsonSave;

#[allow(dead_code)]
#[derive(JsonSave)]
struct Bad(i32);

fn main() {}
