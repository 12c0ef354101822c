pub mod league;
pub mod player;
pub mod position;
pub mod roster;

pub use league::LeagueSettings;
pub use player::{PlayerId, RosterPlayer};
pub use position::Position;
pub use roster::{build_roster_players, PlatformRoster, PlayerRecord};
