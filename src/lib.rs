//! EggWars generator spawners
//!
//! Reads a PGM `map.xml`, finds the regions named `team-{team}-generator-{material}-{n}`
//! and generates the level variables and timed spawners that make those generators
//! upgradable.

pub mod cli;
pub mod config;
pub mod error;
pub mod fragment;
pub mod levels;
pub mod logging;
pub mod region;
pub mod synthesizer;

pub use error::ProcessingError;
pub use fragment::{EmittedSpawner, EmittedVariable, Fragments};
pub use levels::{GeneratorLevels, GeneratorTable, LevelTiming};
pub use region::Region;
pub use synthesizer::{GeneratorConfigSynthesizer, Synthesis};
