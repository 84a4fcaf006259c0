use jsonsave_macros::JsonSave;

#[allow(dead_code)]
#[derive(JsonSave)]
struct Bad {
    #[json_save(kind = Nope)]
    x: i32,
}

fn main() {}
