//! Central place for all runtime default values.
//! Update these and the whole app picks them up.

pub struct Defaults;

impl Defaults {
    /// SQLite file holding the inventory, created on first run.
    pub const DB_PATH: &'static str = "./waste_management.db";
}
