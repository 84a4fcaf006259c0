use jsonsave_macros::JsonSave;

#[allow(dead_code)]
#[derive(JsonSave)]
struct Bad {
    #[json_save(kind = Int)]
    #[json_save(kind = Long)]
    x: i32,
}

fn main() {}
