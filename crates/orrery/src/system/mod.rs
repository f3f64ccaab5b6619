pub mod body;
pub mod catalog;
pub mod simulation;
