//! Human-readable display strings for the plain tag enums.
//!
//! The core only carries tags; everything a picker or combo box shows
//! comes from these lookup tables.

use crate::dip::{DipPackage, Orientation};
use perfboard_core::{BoardSide, BoardSize, BoardType};

pub fn board_type_label(board_type: BoardType) -> &'static str {
    match board_type {
        BoardType::Perforated => "Perforated/Dot Board",
        BoardType::Stripboard => "Stripboard",
        BoardType::Mixed => "Mixed Dot-Strip Board",
    }
}

pub fn board_side_label(side: BoardSide) -> &'static str {
    match side {
        BoardSide::Single => "One Side",
        BoardSide::Double => "Double Side",
    }
}

pub fn board_size_label(size: BoardSize) -> &'static str {
    match size {
        BoardSize::Size50x70 => "50x70mm",
        BoardSize::Size70x90 => "70x90mm",
        BoardSize::Size100x100 => "100x100mm",
        BoardSize::Size100x160 => "100x160mm",
        BoardSize::Size160x100 => "160x100mm",
        BoardSize::Custom => "Custom",
    }
}

pub fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => "Horizontal",
        Orientation::Vertical => "Vertical",
        Orientation::DiagonalUp => "Diagonal Up",
        Orientation::DiagonalDown => "Diagonal Down",
    }
}

pub fn dip_package_label(package: DipPackage) -> &'static str {
    match package {
        DipPackage::Dip4 => "DIP4",
        DipPackage::Dip6 => "DIP6",
        DipPackage::Dip8 => "DIP8",
        DipPackage::Dip10 => "DIP10",
        DipPackage::Dip12 => "DIP12",
        DipPackage::Dip14 => "DIP14",
        DipPackage::Dip16 => "DIP16",
        DipPackage::Dip18 => "DIP18",
        DipPackage::Dip20 => "DIP20",
        DipPackage::Dip22 => "DIP22",
        DipPackage::Dip24 => "DIP24",
        DipPackage::Dip28 => "DIP28",
        DipPackage::Dip40 => "DIP40",
    }
}

/// Typical chips shipped in the package, for tooltips.
pub fn dip_package_examples(package: DipPackage) -> &'static str {
    match package {
        DipPackage::Dip4 => "Optocoupler, Basic Logic",
        DipPackage::Dip6 => "Op-amp, Timer",
        DipPackage::Dip8 => "555 Timer, Op-amp, EEPROM",
        DipPackage::Dip10 => "DAC, ADC",
        DipPackage::Dip12 => "Op-amp Array",
        DipPackage::Dip14 => "TTL Logic, Counters",
        DipPackage::Dip16 => "Microcontroller, SRAM",
        DipPackage::Dip18 => "PIC Microcontroller",
        DipPackage::Dip20 => "Microcontroller, Interface",
        DipPackage::Dip22 => "Microcontroller",
        DipPackage::Dip24 => "EPROM, SRAM",
        DipPackage::Dip28 => "ATmega328, EPROM",
        DipPackage::Dip40 => "8-bit CPU, Large MCU",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_exist_for_all_board_types() {
        for board_type in [BoardType::Perforated, BoardType::Stripboard, BoardType::Mixed] {
            assert!(!board_type_label(board_type).is_empty());
        }
    }

    #[test]
    fn test_dip_label_matches_pin_count() {
        assert_eq!(dip_package_label(DipPackage::Dip28), "DIP28");
        assert_eq!(DipPackage::Dip28.pin_count(), 28);
    }
}
