//! Perfboard Core Library
//!
//! Board geometry, coordinate transforms, jumper wires and component
//! placement for the perfboard designer. The core produces renderer-agnostic
//! primitive lists; it never draws and has no I/O.

pub mod board;
pub mod component;
pub mod coords;
pub mod placement;
pub mod primitives;
pub mod session;
pub mod wire;

pub use board::{Board, BoardSide, BoardSize, BoardType};
pub use component::Component;
pub use coords::{MARGIN_MM, PX_PER_MM, STANDARD_PITCH_MM};
pub use placement::{PlacedComponent, PlacedComponentId, PlacementEngine, snap_to_grid};
pub use primitives::{Primitive, Rgba};
pub use session::Session;
pub use wire::{Wire, WireModel};
