pub mod player;
pub mod roster;
pub mod team;

pub use player::Player;
pub use roster::Roster;
pub use team::Team;
