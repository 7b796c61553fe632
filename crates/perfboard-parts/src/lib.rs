//! Perfboard Parts Library
//!
//! Concrete component variants, physical-unit value parsing, display labels
//! and the SVG asset cache. Everything here sits outside the geometry core
//! and talks to it through the `Component` capability.

pub mod capacitor;
pub mod diode;
pub mod dip;
pub mod generic;
pub mod labels;
pub mod led;
pub mod potentiometer;
pub mod resistor;
pub mod svg;
pub mod switch;
pub mod transistor;
pub mod value;

pub use capacitor::{Capacitor, CapacitorStyle};
pub use diode::{Diode, DiodeKind};
pub use dip::{DipChip, DipPackage, Orientation};
pub use generic::GenericPart;
pub use led::{Led, LedColor, LedSize};
pub use potentiometer::Potentiometer;
pub use resistor::Resistor;
pub use svg::{SvgCache, SvgError};
pub use switch::{Switch, SwitchPosition};
pub use transistor::{Transistor, TransistorPolarity};
pub use value::{Band, ValueError, color_bands, parse_capacitance, parse_resistance};
