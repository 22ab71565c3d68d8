//! SQLite-backed catalog store

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::catalog::query::{num_pages, CatalogQuery, Page};
use crate::catalog::record::{BaseStats, Pokemon};
use crate::catalog::store::CatalogStore;
use crate::core::error::Result;
use crate::core::types::PokemonId;

const COLUMNS: &str = "number, name, type_pokemon, image, description, \
    hp, attack, defense, special_attack, special_defense, speed";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and ensure the schema exists
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS pokemon (
                number INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                type_pokemon TEXT NOT NULL DEFAULT '',
                image TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                hp INTEGER NOT NULL DEFAULT 0,
                attack INTEGER NOT NULL DEFAULT 0,
                defense INTEGER NOT NULL DEFAULT 0,
                special_attack INTEGER NOT NULL DEFAULT 0,
                special_defense INTEGER NOT NULL DEFAULT 0,
                speed INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Pokemon> {
        Ok(Pokemon {
            number: row.get(0)?,
            name: row.get(1)?,
            types: row.get(2)?,
            image: row.get(3)?,
            description: row.get(4)?,
            stats: BaseStats {
                hp: row.get(5)?,
                attack: row.get(6)?,
                defense: row.get(7)?,
                special_attack: row.get(8)?,
                special_defense: row.get(9)?,
                speed: row.get(10)?,
            },
        })
    }

    /// WHERE clause and its parameters for a search
    fn filter(query: &CatalogQuery) -> (String, Vec<rusqlite::types::Value>) {
        use rusqlite::types::Value;

        if query.text.is_empty() {
            return (String::new(), Vec::new());
        }
        let like = Value::Text(format!("%{}%", query.text.to_lowercase()));
        match query.number() {
            Some(n) => (
                "WHERE number = ?1 OR lower(name) LIKE ?2".to_string(),
                vec![Value::Integer(n as i64), like],
            ),
            None => ("WHERE lower(name) LIKE ?1".to_string(), vec![like]),
        }
    }
}

impl CatalogStore for SqliteStore {
    fn upsert(&mut self, pokemon: &Pokemon) -> Result<()> {
        let s = &pokemon.stats;
        self.conn.execute(
            &format!(
                "INSERT INTO pokemon ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                 ON CONFLICT(number) DO UPDATE SET
                    name = excluded.name,
                    type_pokemon = excluded.type_pokemon,
                    image = excluded.image,
                    description = excluded.description,
                    hp = excluded.hp,
                    attack = excluded.attack,
                    defense = excluded.defense,
                    special_attack = excluded.special_attack,
                    special_defense = excluded.special_defense,
                    speed = excluded.speed"
            ),
            params![
                pokemon.number,
                pokemon.name,
                pokemon.types,
                pokemon.image,
                pokemon.description,
                s.hp,
                s.attack,
                s.defense,
                s.special_attack,
                s.special_defense,
                s.speed
            ],
        )?;
        Ok(())
    }

    fn get(&self, id: PokemonId) -> Result<Option<Pokemon>> {
        let pokemon = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM pokemon WHERE number = ?1"),
                params![id],
                Self::from_row,
            )
            .optional()?;
        Ok(pokemon)
    }

    fn query(&self, query: &CatalogQuery) -> Result<Page<Pokemon>> {
        let (clause, mut values) = Self::filter(query);

        let total: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM pokemon {clause}"),
            rusqlite::params_from_iter(values.iter()),
            |row| row.get(0),
        )?;
        let total = total as usize;
        let number = query.resolve_page(total);

        let limit_idx = values.len() + 1;
        values.push(rusqlite::types::Value::Integer(query.page_size as i64));
        values.push(rusqlite::types::Value::Integer(query.offset(number) as i64));

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM pokemon {clause} ORDER BY number LIMIT ?{} OFFSET ?{}",
            limit_idx,
            limit_idx + 1
        ))?;
        let items = stmt
            .query_map(rusqlite::params_from_iter(values.iter()), Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Page {
            items,
            number,
            num_pages: num_pages(total, query.page_size),
            total,
        })
    }

    fn count(&self) -> Result<usize> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))?;
        Ok(total as usize)
    }
}
