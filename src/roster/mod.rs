//! Team rosters: session-held id lists and the actions that change them

pub mod action;
pub mod diagnostics;
pub mod engine;
pub mod materialize;
pub mod session;
pub mod slot;
pub mod state;

pub use action::{ClearTarget, FormationAction};
pub use diagnostics::Diagnostics;
pub use engine::{add, apply_action, auto_fill, clear, draw_distinct_ids, remove, validate_id};
pub use materialize::materialize;
pub use session::{FileSessionStore, MemorySession, Session};
pub use slot::TeamSlot;
pub use state::{read_roster, read_rosters, write_roster, write_rosters, Rosters};
