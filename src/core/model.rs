//! Catalog data model and wire-format validation.
//!
//! The remote API answers with loosely shaped JSON. This module keeps the raw
//! serde structs private to the crate and exposes validated records instead:
//! [`EntityReference`] for list filtering and [`EntityDetail`] for everything
//! that gets rendered.
//!
//! # Public API
//! - [`CategoryName`]: name of a filter category ("fire", "water", ...)
//! - [`EntityReference`]: lightweight pointer used only for filtering
//! - [`EntityDetail`]: validated detail record with explicit optional fields
//! - [`TypeTag`], [`Stat`]: pieces of a detail record

use crate::core::error::{DexNavigatorError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

pub type CategoryName = String;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    pub name: String,
}

impl EntityReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Case-insensitive substring match; an empty needle matches everything
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTag {
    pub slot: u8,
    pub name: CategoryName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base_value: u32,
}

/// Validated detail record for one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetail {
    pub name: String,
    pub sprite: Option<Url>,
    pub types: Vec<TypeTag>,
    pub stats: Vec<Stat>,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
}

impl EntityDetail {
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|tag| tag.name.as_str())
    }

    /// Parse and validate a raw detail payload
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: RawDetail = serde_json::from_str(body)?;
        Self::try_from(raw)
    }
}

// === Wire format ===

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResourceList {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeMembership {
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeMember {
    pub pokemon: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDetail {
    pub name: String,
    #[serde(default)]
    pub sprites: Option<RawSprites>,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub abilities: Vec<RawAbility>,
    #[serde(default)]
    pub moves: Vec<RawMove>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAbility {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMove {
    #[serde(rename = "move")]
    pub movement: NamedResource,
}

impl From<NamedResourceList> for Vec<EntityReference> {
    fn from(list: NamedResourceList) -> Self {
        list.results
            .into_iter()
            .map(|resource| EntityReference::new(resource.name))
            .collect()
    }
}

impl From<TypeMembership> for Vec<EntityReference> {
    fn from(membership: TypeMembership) -> Self {
        membership
            .pokemon
            .into_iter()
            .map(|member| EntityReference::new(member.pokemon.name))
            .collect()
    }
}

fn require_name(owner: &str, what: &str, resource: NamedResource) -> Result<String> {
    if resource.name.trim().is_empty() {
        return Err(DexNavigatorError::invalid_record(
            owner,
            format!("{what} name is empty"),
        ));
    }
    Ok(resource.name)
}

impl TryFrom<RawDetail> for EntityDetail {
    type Error = DexNavigatorError;

    fn try_from(raw: RawDetail) -> Result<Self> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(DexNavigatorError::EmptyName);
        }

        let sprite = raw
            .sprites
            .and_then(|sprites| sprites.front_default)
            .and_then(|value| match Url::parse(&value) {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("Dropping unparseable sprite URL for {name}: {value} ({e})");
                    None
                }
            });

        let types = raw
            .types
            .into_iter()
            .map(|slot| {
                Ok(TypeTag {
                    slot: slot.slot,
                    name: require_name(&name, "type", slot.kind)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let stats = raw
            .stats
            .into_iter()
            .map(|stat| {
                Ok(Stat {
                    name: require_name(&name, "stat", stat.stat)?,
                    base_value: stat.base_stat,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let abilities = raw
            .abilities
            .into_iter()
            .map(|entry| require_name(&name, "ability", entry.ability))
            .collect::<Result<Vec<_>>>()?;

        let moves = raw
            .moves
            .into_iter()
            .map(|entry| require_name(&name, "move", entry.movement))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name,
            sprite,
            types,
            stats,
            abilities,
            moves,
        })
    }
}
