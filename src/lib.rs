pub mod args;
pub mod db;
pub mod difficulty;
pub mod input;
pub mod round;
pub mod stats;
pub mod ui;
