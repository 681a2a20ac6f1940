//! chip-table: the chip economy of a multiplayer poker hand
//!
//! Goals:
//! - Track blinds, calls, raises, folds, the pot and stage progression for one table
//! - No cards and no hand rankings: the winner is whoever the table says it is
//! - No panics for invalid input; invalid raise text is ignored, misuse returns `Result`
//!
//! ## Quick start: play out a hand
//! ```
//! use chip_table::config::TableConfig;
//! use chip_table::round::RoundEngine;
//! use chip_table::table::Stage;
//!
//! let config = TableConfig::with_seats(3, 100, 25, 1, 2).unwrap();
//! let mut engine = RoundEngine::new(config);
//! engine.start_round();
//! assert_eq!(engine.pot(), 3);
//!
//! engine.fold().unwrap();
//! engine.fold().unwrap();
//! // Last player standing takes the pot and a new hand is dealt.
//! assert_eq!(engine.stage(), Stage::PreFlop);
//! assert_eq!(engine.players()[2].chips(), 103);
//! ```
//!
//! ## TUI
//! Run the pass-and-play table with:
//! ```sh
//! cargo run --bin chip-table
//! ```

pub mod config;
pub mod engine;
pub mod history;
pub mod input;
pub mod labels;
pub mod money;
pub mod player;
pub mod round;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
