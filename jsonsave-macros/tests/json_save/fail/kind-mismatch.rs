use jsonsave_macros::JsonSave;

#[allow(dead_code)]
#[derive(JsonSave)]
struct Bad {
    #[json_save(kind = Int)]
    x: i64,
}

fn main() {}
