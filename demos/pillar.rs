use std::time::Duration;

use pillar_utils::{
    lookup_names, merge, DirectoryService, FileLoader, LookupError, MergeOptions,
    DEFAULT_TIMEOUT,
};
use serde_json::{json, Value};

struct StaticDirectory {
    name: &'static str,
    names: Vec<String>,
}

impl DirectoryService for StaticDirectory {
    fn name(&self) -> &str {
        self.name
    }

    fn lookup(&self, _timeout: Duration) -> Result<Vec<String>, LookupError> {
        Ok(self.names.clone())
    }
}

fn main() -> Result<(), pillar_utils::Error> {
    // Layer site overrides onto defaults, concatenating lists and
    // dropping keys that were nulled out.
    let defaults = json!({
        "dns": {"nameservers": ["10.0.0.2"]},
        "legacy_proxy": null,
    });
    let overrides = json!({
        "dns": {"nameservers": ["10.0.0.3"]},
        "site": "pdx01",
    });

    let options = MergeOptions {
        clear_none: true,
        merge_lists: true,
    };
    let merged = merge(Some(defaults), Some(overrides), &options)?;
    println!("merged: {}", Value::Object(merged));

    // Embed this crate's manifest as base64, the way raw config files
    // get embedded in pillar data.
    let loader = FileLoader::new(".");
    let encoded = loader.load_base64("Cargo.toml")?;
    println!("manifest ({} base64 bytes)", encoded.len());

    // Resolve directory names against an in-process stand-in service.
    let primary = StaticDirectory {
        name: "static",
        names: vec!["sea01".to_string(), "pdx01".to_string()],
    };
    let names = lookup_names(&primary, None, DEFAULT_TIMEOUT)?;
    println!("directory names: {names:?}");

    Ok(())
}
