//! Pokedex - creature catalog with lazy remote import and team battles

pub mod battle;
pub mod catalog;
pub mod core;
pub mod fetch;
pub mod formation;
pub mod roster;
