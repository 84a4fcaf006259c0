use jsonsave_macros::JsonSave;

#[allow(dead_code)]
#[derive(JsonSave)]
enum Bad {
    A,
}

fn main() {}
