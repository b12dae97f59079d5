pub mod cards;
pub mod cli;
pub mod config;
pub mod dealer;
pub mod display;
pub mod draw;
pub mod error;
pub mod hand;
pub mod immediate;
pub mod round;
pub mod shoe;
pub mod sidebets;
pub mod simulator;
pub mod strategy;
