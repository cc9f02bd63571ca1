pub mod config;
pub mod journal;
pub mod journal_file;
pub mod levelgen;
pub mod replay;
pub mod session;
pub mod state;
pub mod types;

pub use config::{CharacterStats, GameConfig, SpawnRange};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use journal_file::{JournalLoadError, JournalWriter, LoadedJournal, load_journal_from_file};
pub use replay::*;
pub use session::{Session, probe_step};
pub use state::{Actor, Board, Food, LevelState, Wall};
pub use types::*;
