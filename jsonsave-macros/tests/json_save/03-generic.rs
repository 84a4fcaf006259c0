use jsonsave_core::{FieldValue, JsonSave};
use jsonsave_macros::JsonSave;

#[derive(Default, JsonSave)]
struct Tagged<T: Default> {
    #[json_save(kind = Long)]
    id: i64,
    payload: T,
}

fn main() {

    let mut tagged = Tagged::<Vec<String>>::default();
    let [id] = Tagged::<Vec<String>>::TAGGED_FIELDS else { panic!() };

    id.set(&mut tagged, FieldValue::Long(9)).unwrap();

    assert_eq!(tagged.id, 9);
    assert_eq!(id.get(&tagged), FieldValue::Long(9));
    assert!(tagged.payload.is_empty());

}
