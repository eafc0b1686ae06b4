use std::path::PathBuf;

use crate::model::ItemDraft;
use crate::store::file_store::TASKS_FILE;
use crate::store::{FileStore, SourceAdapter};

use super::commands::AddArgs;

const CONFIG_TEMPLATE: &str = r##"# daylist configuration

[keys]
# single letters, case-insensitive
fast_entry = "n"
edit = "e"
next = "j"
previous = "k"

[ui]
# hex color overrides, e.g.
# [ui.colors]
# focused = "#FB4196"
"##;

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn store_dir(arg: &Option<String>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(match arg {
        Some(d) => PathBuf::from(d),
        None => std::env::current_dir()?,
    })
}

/// `day init` — create an empty store and a config template.
pub fn cmd_init(dir_arg: &Option<String>) -> CliResult {
    let dir = store_dir(dir_arg)?;
    std::fs::create_dir_all(&dir)?;
    let tasks = dir.join(TASKS_FILE);
    if tasks.exists() {
        return Err(format!("{} already exists", tasks.display()).into());
    }
    std::fs::write(&tasks, "{\n  \"items\": []\n}\n")?;
    let config = dir.join("config.toml");
    if !config.exists() {
        std::fs::write(&config, CONFIG_TEMPLATE)?;
    }
    println!("initialized task store in {}", dir.display());
    Ok(())
}

/// `day add <title>` — append an item without entering the TUI.
pub fn cmd_add(dir_arg: &Option<String>, args: AddArgs, json: bool) -> CliResult {
    let dir = store_dir(dir_arg)?;
    let mut store = FileStore::open(&dir);
    let mut draft = ItemDraft::titled(args.title.join(" "));
    draft.note = args.note;
    let item = store.create(draft)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("added {} {}", item.id, item.title);
    }
    Ok(())
}

/// `day list` — print items in position order.
pub fn cmd_list(dir_arg: &Option<String>, json: bool) -> CliResult {
    let dir = store_dir(dir_arg)?;
    let store = FileStore::open(&dir);
    let snapshot = store.fetch_all()?;
    if json {
        let items: Vec<_> = snapshot.iter().collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }
    if snapshot.is_empty() {
        println!("nothing for today");
        return Ok(());
    }
    for item in snapshot.iter() {
        println!("[{}] {}  {}", item.status.glyph(), item.id, item.title);
    }
    Ok(())
}
