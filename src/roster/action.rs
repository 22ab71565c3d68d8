//! Formation actions submitted by the presentation layer

use serde::Serialize;

use crate::roster::slot::TeamSlot;

/// Which roster(s) a clear applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClearTarget {
    Team(TeamSlot),
    Both,
}

/// One request's worth of roster work
///
/// Ids are carried as submitted (signed) so range checking happens in one
/// place, inside the mutation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormationAction {
    Add { team: TeamSlot, pokemon_id: i64 },
    Remove { team: TeamSlot, pokemon_id: i64 },
    Clear { target: ClearTarget },
    AutoFill { team: TeamSlot },
    Battle,
}

fn parse_team(team: Option<&str>, default: TeamSlot) -> Result<TeamSlot, String> {
    match team.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(default),
        Some(raw) => TeamSlot::parse(raw).ok_or_else(|| format!("Unknown team \"{}\"", raw)),
    }
}

fn parse_pokemon_id(raw: Option<&str>) -> Result<i64, String> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err("A Pokémon ID is required.".to_string());
    }
    raw.parse::<i64>()
        .map_err(|_| format!("Invalid Pokémon ID \"{}\".", raw))
}

impl FormationAction {
    /// Build an action from raw request parameters
    ///
    /// `Ok(None)` means no action was submitted (a plain page view). Any
    /// problem with the parameters comes back as a user-facing message.
    pub fn from_params(
        action: Option<&str>,
        team: Option<&str>,
        pokemon_id: Option<&str>,
    ) -> Result<Option<Self>, String> {
        let action = match action.map(str::trim).filter(|a| !a.is_empty()) {
            None => return Ok(None),
            Some(a) => a,
        };

        let parsed = match action {
            "add" => FormationAction::Add {
                team: parse_team(team, TeamSlot::A)?,
                pokemon_id: parse_pokemon_id(pokemon_id)?,
            },
            "remove" => FormationAction::Remove {
                team: parse_team(team, TeamSlot::A)?,
                pokemon_id: parse_pokemon_id(pokemon_id)?,
            },
            "clear" => match team.map(str::trim).filter(|t| !t.is_empty()) {
                None => FormationAction::Clear {
                    target: ClearTarget::Both,
                },
                Some(_) => FormationAction::Clear {
                    target: ClearTarget::Team(parse_team(team, TeamSlot::A)?),
                },
            },
            "ai_fill" => FormationAction::AutoFill {
                team: parse_team(team, TeamSlot::B)?,
            },
            "battle" => FormationAction::Battle,
            other => return Err(format!("Unknown action \"{}\"", other)),
        };
        Ok(Some(parsed))
    }
}
