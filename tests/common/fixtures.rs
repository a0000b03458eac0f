//! Canned catalog payloads and predefined API scenarios
//!
//! Provides JSON bodies shaped like the real API and a stub server preloaded
//! with a small Kanto catalog so command tests read the same way.

#![allow(dead_code)]

use super::server::{StubServer, StubServerBuilder};
use serde_json::json;
use assert_cmd::Command;
use tempfile::TempDir;

pub const KANTO: &[(&str, &[&str])] = &[
    ("bulbasaur", &["grass", "poison"]),
    ("charmander", &["fire"]),
    ("charizard", &["fire", "flying"]),
    ("pidgey", &["normal", "flying"]),
    ("pikachu", &["electric"]),
    ("pichu", &["electric"]),
];

pub fn named_list(names: &[&str]) -> String {
    let results: Vec<_> = names
        .iter()
        .map(|name| json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/{name}/") }))
        .collect();
    json!({ "count": names.len(), "results": results }).to_string()
}

pub fn type_members(names: &[&str]) -> String {
    let pokemon: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(slot, name)| json!({ "slot": slot + 1, "pokemon": { "name": name, "url": "" } }))
        .collect();
    json!({ "name": "type", "pokemon": pokemon }).to_string()
}

pub fn detail(name: &str, types: &[&str]) -> String {
    let types: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(slot, kind)| json!({ "slot": slot + 1, "type": { "name": kind, "url": "" } }))
        .collect();
    json!({
        "name": name,
        "sprites": {
            "front_default": format!(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{name}.png"
            )
        },
        "types": types,
        "stats": [
            { "base_stat": 35, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 90, "stat": { "name": "speed", "url": "" } }
        ],
        "abilities": [ { "ability": { "name": "static", "url": "" } } ],
        "moves": [
            { "move": { "name": "thunder-shock", "url": "" } },
            { "move": { "name": "quick-attack", "url": "" } }
        ]
    })
    .to_string()
}

/// Builder preloaded with types, the default listing and every Kanto detail
pub fn kanto_builder() -> StubServerBuilder {
    let names: Vec<&str> = KANTO.iter().map(|(name, _)| *name).collect();
    let mut builder = StubServer::builder()
        .json("/type", named_list(&["fire", "electric", "grass"]))
        .json("/type/fire", type_members(&["charmander", "vulpix", "charizard"]))
        .json("/type/electric", type_members(&["pikachu", "pichu"]))
        .json("/pokemon?limit=151", named_list(&names));

    for (name, types) in KANTO {
        builder = builder.json(&format!("/pokemon/{name}"), detail(name, types));
    }
    builder
}

pub fn kanto_server() -> StubServer {
    kanto_builder().start()
}

/// Command for the binary pointed at `server`, isolated from the user's config
pub fn dex_command(server: &StubServer, config_home: &TempDir) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("dex-navigator")?;
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .arg("--api-url")
        .arg(server.base_url());
    Ok(cmd)
}
