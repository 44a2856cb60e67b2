use anyhow::{Context, Result};

use wmtui::app::App;
use wmtui::defaults::Defaults;
use wmtui::store::SqliteStore;
use wmtui::tui;

fn main() -> Result<()> {
    // open the store before entering raw mode so startup failures print normally
    let store = SqliteStore::open(Defaults::DB_PATH)
        .with_context(|| format!("opening waste database {}", Defaults::DB_PATH))?;
    let mut app = App::new(store)?;
    tui::run(&mut app)
}
