/// Binary space partition rooms
pub mod bsp;
/// Goal-biased random corridor carving
pub mod corridor;
/// Strategy selection, validation and seeding
pub mod generator;
/// Recursive-backtracker maze
pub mod maze;
/// Cellular-automaton noise terrain
pub mod noise;
/// Corridor-of-interest wander and corridor
pub mod poi;
/// Strategy sum type and dispatch
pub mod strategy;
