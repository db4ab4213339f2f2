//! Bayer colour-filter geometry
//!
//! The sensor uses a GRBG tile: green on even/even and odd/odd sites, red on
//! even rows at odd columns, blue on odd rows at even columns.

/// Native colour of a sensor site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BayerColor {
    Red,
    Green,
    Blue,
}

impl BayerColor {
    pub const ALL: [BayerColor; 3] = [BayerColor::Red, BayerColor::Green, BayerColor::Blue];

    /// Channel index inside an interleaved RGB triple.
    pub fn channel(self) -> usize {
        match self {
            BayerColor::Red => 0,
            BayerColor::Green => 1,
            BayerColor::Blue => 2,
        }
    }
}

/// Colour of the site at `(x, y)`. Negative coordinates follow the same parity.
#[inline]
pub fn color_at(x: isize, y: isize) -> BayerColor {
    match (y.rem_euclid(2), x.rem_euclid(2)) {
        (0, 0) => BayerColor::Green,
        (0, _) => BayerColor::Red,
        (_, 0) => BayerColor::Blue,
        _ => BayerColor::Green,
    }
}

/// Which fixed neighbour ring the demosaicer samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborSet {
    Orthogonal,
    Diagonal,
}

const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL_OFFSETS: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

impl NeighborSet {
    /// Red from blue and blue from red go through the diagonals, anything
    /// involving green uses the orthogonal cross.
    pub fn for_reconstruction(native: BayerColor, target: BayerColor) -> Self {
        if native != BayerColor::Green && target != BayerColor::Green {
            NeighborSet::Diagonal
        } else {
            NeighborSet::Orthogonal
        }
    }

    pub fn offsets(self) -> &'static [(isize, isize); 4] {
        match self {
            NeighborSet::Orthogonal => &ORTHOGONAL_OFFSETS,
            NeighborSet::Diagonal => &DIAGONAL_OFFSETS,
        }
    }
}
