//! Board layout: the static grid that places slots on screen.

pub mod layout;

pub use layout::{BoardLayout, Cell, SlotIndex};
