//! Remote payload shapes and their mapping onto catalog records

use serde::Deserialize;

use crate::catalog::record::{BaseStats, Pokemon};
use crate::core::types::PokemonId;

/// `GET /pokemon/{id}/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiPokemon {
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub sprites: Sprites,
    pub stats: Vec<StatEntry>,
}

/// `GET /pokemon-species/{id}/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiSpecies {
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

fn english_flavor_text(species: &ApiSpecies) -> String {
    species
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == "en")
        .map(|entry| entry.flavor_text.replace(['\n', '\u{c}'], " "))
        .unwrap_or_default()
}

fn base_stats(entries: &[StatEntry]) -> BaseStats {
    let mut stats = BaseStats::default();
    for entry in entries {
        let slot = match entry.stat.name.as_str() {
            "hp" => &mut stats.hp,
            "attack" => &mut stats.attack,
            "defense" => &mut stats.defense,
            "special-attack" => &mut stats.special_attack,
            "special-defense" => &mut stats.special_defense,
            "speed" => &mut stats.speed,
            _ => continue,
        };
        *slot = entry.base_stat;
    }
    stats
}

/// Build a catalog record from the two remote documents
///
/// A missing species document only costs the description.
pub fn normalize(id: PokemonId, pokemon: &ApiPokemon, species: Option<&ApiSpecies>) -> Pokemon {
    let mut slots: Vec<&TypeSlot> = pokemon.types.iter().collect();
    slots.sort_by_key(|t| t.slot);
    let types = slots
        .iter()
        .map(|t| t.kind.name.as_str())
        .collect::<Vec<_>>()
        .join("/");

    Pokemon {
        number: id,
        name: title_case(&pokemon.name),
        types: title_case(&types),
        image: pokemon.sprites.front_default.clone().unwrap_or_default(),
        description: species.map(english_flavor_text).unwrap_or_default(),
        stats: base_stats(&pokemon.stats),
    }
}
