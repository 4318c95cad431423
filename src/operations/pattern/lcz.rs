//! Cube constellations for the ten built-type Local Climate Zones.
//!
//! Offsets are relative to the centre of a 100 x 100 cell and give the
//! position of each cube's origin corner. Scales are the cube extents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OperationError;

/// One cube placement within a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Offset of the cube's origin corner from the cell centre.
    pub offset: [f64; 2],
    /// Extent of the cube along x, y and z.
    pub scale: [f64; 3],
}

const fn cube(dx: f64, dy: f64, sx: f64, sy: f64, sz: f64) -> Placement {
    Placement {
        offset: [dx, dy],
        scale: [sx, sy, sz],
    }
}

/// Compact high-rise: 3 x 3 slender towers.
const LCZ1: &[Placement] = &[
    cube(-41.65, -41.65, 22.2, 22.2, 37.5),
    cube(-11.1, -41.65, 22.2, 22.2, 37.5),
    cube(19.45, -41.65, 22.2, 22.2, 37.5),
    cube(-41.65, -11.1, 22.2, 22.2, 37.5),
    cube(-11.1, -11.1, 22.2, 22.2, 37.5),
    cube(19.45, -11.1, 22.2, 22.2, 37.5),
    cube(-41.65, 19.45, 22.2, 22.2, 37.5),
    cube(-11.1, 19.45, 22.2, 22.2, 37.5),
    cube(19.45, 19.45, 22.2, 22.2, 37.5),
];

/// Compact mid-rise: 4 x 4 blocks.
const LCZ2: &[Placement] = &[
    cube(-44.4, -44.4, 18.0, 18.0, 15.0),
    cube(-20.8, -44.4, 18.0, 18.0, 15.0),
    cube(2.8, -44.4, 18.0, 18.0, 15.0),
    cube(26.4, -44.4, 18.0, 18.0, 15.0),
    cube(-44.4, -20.8, 18.0, 18.0, 15.0),
    cube(-20.8, -20.8, 18.0, 18.0, 15.0),
    cube(2.8, -20.8, 18.0, 18.0, 15.0),
    cube(26.4, -20.8, 18.0, 18.0, 15.0),
    cube(-44.4, 2.8, 18.0, 18.0, 15.0),
    cube(-20.8, 2.8, 18.0, 18.0, 15.0),
    cube(2.8, 2.8, 18.0, 18.0, 15.0),
    cube(26.4, 2.8, 18.0, 18.0, 15.0),
    cube(-44.4, 26.4, 18.0, 18.0, 15.0),
    cube(-20.8, 26.4, 18.0, 18.0, 15.0),
    cube(2.8, 26.4, 18.0, 18.0, 15.0),
    cube(26.4, 26.4, 18.0, 18.0, 15.0),
];

/// Compact low-rise: 4 x 4 wide, low blocks with narrow gaps.
const LCZ3: &[Placement] = &[
    cube(-46.0, -46.0, 20.0, 20.0, 6.0),
    cube(-22.0, -46.0, 20.0, 20.0, 6.0),
    cube(2.0, -46.0, 20.0, 20.0, 6.0),
    cube(26.0, -46.0, 20.0, 20.0, 6.0),
    cube(-46.0, -22.0, 20.0, 20.0, 6.0),
    cube(-22.0, -22.0, 20.0, 20.0, 6.0),
    cube(2.0, -22.0, 20.0, 20.0, 6.0),
    cube(26.0, -22.0, 20.0, 20.0, 6.0),
    cube(-46.0, 2.0, 20.0, 20.0, 6.0),
    cube(-22.0, 2.0, 20.0, 20.0, 6.0),
    cube(2.0, 2.0, 20.0, 20.0, 6.0),
    cube(26.0, 2.0, 20.0, 20.0, 6.0),
    cube(-46.0, 26.0, 20.0, 20.0, 6.0),
    cube(-22.0, 26.0, 20.0, 20.0, 6.0),
    cube(2.0, 26.0, 20.0, 20.0, 6.0),
    cube(26.0, 26.0, 20.0, 20.0, 6.0),
];

/// Open high-rise: 2 x 2 towers with wide spacing.
const LCZ4: &[Placement] = &[
    cube(-30.0, -30.0, 20.0, 20.0, 40.0),
    cube(10.0, -30.0, 20.0, 20.0, 40.0),
    cube(-30.0, 10.0, 20.0, 20.0, 40.0),
    cube(10.0, 10.0, 20.0, 20.0, 40.0),
];

/// Open mid-rise: 3 x 3 blocks.
const LCZ5: &[Placement] = &[
    cube(-37.0, -37.0, 16.0, 16.0, 15.0),
    cube(-8.0, -37.0, 16.0, 16.0, 15.0),
    cube(21.0, -37.0, 16.0, 16.0, 15.0),
    cube(-37.0, -8.0, 16.0, 16.0, 15.0),
    cube(-8.0, -8.0, 16.0, 16.0, 15.0),
    cube(21.0, -8.0, 16.0, 16.0, 15.0),
    cube(-37.0, 21.0, 16.0, 16.0, 15.0),
    cube(-8.0, 21.0, 16.0, 16.0, 15.0),
    cube(21.0, 21.0, 16.0, 16.0, 15.0),
];

/// Open low-rise: 3 x 3 small houses.
const LCZ6: &[Placement] = &[
    cube(-35.5, -35.5, 14.0, 14.0, 6.0),
    cube(-7.0, -35.5, 14.0, 14.0, 6.0),
    cube(21.5, -35.5, 14.0, 14.0, 6.0),
    cube(-35.5, -7.0, 14.0, 14.0, 6.0),
    cube(-7.0, -7.0, 14.0, 14.0, 6.0),
    cube(21.5, -7.0, 14.0, 14.0, 6.0),
    cube(-35.5, 21.5, 14.0, 14.0, 6.0),
    cube(-7.0, 21.5, 14.0, 14.0, 6.0),
    cube(21.5, 21.5, 14.0, 14.0, 6.0),
];

/// Lightweight low-rise: 4 x 4 single-storey sheds.
const LCZ7: &[Placement] = &[
    cube(-42.8, -42.8, 16.0, 16.0, 3.0),
    cube(-19.6, -42.8, 16.0, 16.0, 3.0),
    cube(3.6, -42.8, 16.0, 16.0, 3.0),
    cube(26.8, -42.8, 16.0, 16.0, 3.0),
    cube(-42.8, -19.6, 16.0, 16.0, 3.0),
    cube(-19.6, -19.6, 16.0, 16.0, 3.0),
    cube(3.6, -19.6, 16.0, 16.0, 3.0),
    cube(26.8, -19.6, 16.0, 16.0, 3.0),
    cube(-42.8, 3.6, 16.0, 16.0, 3.0),
    cube(-19.6, 3.6, 16.0, 16.0, 3.0),
    cube(3.6, 3.6, 16.0, 16.0, 3.0),
    cube(26.8, 3.6, 16.0, 16.0, 3.0),
    cube(-42.8, 26.8, 16.0, 16.0, 3.0),
    cube(-19.6, 26.8, 16.0, 16.0, 3.0),
    cube(3.6, 26.8, 16.0, 16.0, 3.0),
    cube(26.8, 26.8, 16.0, 16.0, 3.0),
];

/// Large low-rise: two warehouse halls.
const LCZ8: &[Placement] = &[
    cube(-45.0, -40.0, 40.0, 80.0, 8.0),
    cube(5.0, -40.0, 40.0, 80.0, 8.0),
];

/// Sparsely built: two large, low buildings far apart.
const LCZ9: &[Placement] = &[
    cube(-40.0, -40.0, 20.0, 20.0, 6.0),
    cube(20.0, 20.0, 20.0, 20.0, 6.0),
];

/// Heavy industry: a plant hall and two stacks.
const LCZ10: &[Placement] = &[
    cube(-40.0, -30.0, 50.0, 40.0, 10.0),
    cube(20.0, -20.0, 8.0, 8.0, 25.0),
    cube(20.0, 10.0, 8.0, 8.0, 25.0),
];

/// A built-type Local Climate Zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LczClass {
    CompactHighRise,
    CompactMidRise,
    CompactLowRise,
    OpenHighRise,
    OpenMidRise,
    OpenLowRise,
    LightweightLowRise,
    LargeLowRise,
    SparselyBuilt,
    HeavyIndustry,
}

impl LczClass {
    pub const ALL: [Self; 10] = [
        Self::CompactHighRise,
        Self::CompactMidRise,
        Self::CompactLowRise,
        Self::OpenHighRise,
        Self::OpenMidRise,
        Self::OpenLowRise,
        Self::LightweightLowRise,
        Self::LargeLowRise,
        Self::SparselyBuilt,
        Self::HeavyIndustry,
    ];

    /// Returns the class with LCZ number `n` (1 through 10).
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for any other number.
    pub fn from_number(n: u8) -> Result<Self, OperationError> {
        Self::ALL
            .get(usize::from(n).wrapping_sub(1))
            .copied()
            .ok_or_else(|| OperationError::InvalidInput(format!("no LCZ class {n}")))
    }

    /// The LCZ number (1 through 10).
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::CompactHighRise => 1,
            Self::CompactMidRise => 2,
            Self::CompactLowRise => 3,
            Self::OpenHighRise => 4,
            Self::OpenMidRise => 5,
            Self::OpenLowRise => 6,
            Self::LightweightLowRise => 7,
            Self::LargeLowRise => 8,
            Self::SparselyBuilt => 9,
            Self::HeavyIndustry => 10,
        }
    }

    /// The fixed cube constellation of this class.
    #[must_use]
    pub fn placements(self) -> &'static [Placement] {
        match self {
            Self::CompactHighRise => LCZ1,
            Self::CompactMidRise => LCZ2,
            Self::CompactLowRise => LCZ3,
            Self::OpenHighRise => LCZ4,
            Self::OpenMidRise => LCZ5,
            Self::OpenLowRise => LCZ6,
            Self::LightweightLowRise => LCZ7,
            Self::LargeLowRise => LCZ8,
            Self::SparselyBuilt => LCZ9,
            Self::HeavyIndustry => LCZ10,
        }
    }
}

impl fmt::Display for LczClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LCZ {}", self.number())
    }
}
