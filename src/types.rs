/// A single waste-disposal record.
///
/// `id` is assigned by the store and stays 0 until the first successful
/// insert; the in-memory list owns the record from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct WasteItem {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub waste_type: String,
    pub location: String,
    pub method: String,
}
