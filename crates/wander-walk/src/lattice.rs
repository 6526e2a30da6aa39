//! Square-lattice directions and integer site keys.

/// One of the four cardinal lattice moves.
///
/// Declaration order is the draw order used by the lattice generators:
/// `floor(draw * 4)` selects from `[East, North, West, South]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatticeDir {
    /// `(+1, 0)`
    East,
    /// `(0, +1)`
    North,
    /// `(-1, 0)`
    West,
    /// `(0, -1)`
    South,
}

impl LatticeDir {
    /// All directions in draw order.
    pub const ALL: [LatticeDir; 4] = [
        LatticeDir::East,
        LatticeDir::North,
        LatticeDir::West,
        LatticeDir::South,
    ];

    /// Integer offset of this move.
    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Self::East => (1, 0),
            Self::North => (0, 1),
            Self::West => (-1, 0),
            Self::South => (0, -1),
        }
    }
}

/// An integer lattice site.
///
/// Self-avoidance is tracked on these indices rather than on scaled
/// floating-point coordinates, so floating-point drift can never make two
/// distinct sites compare equal or one site compare unequal to itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LatticeSite {
    /// Column index.
    pub i: i64,
    /// Row index.
    pub j: i64,
}

impl LatticeSite {
    /// The site reached by moving one step in `dir`.
    #[inline]
    pub fn step(self, dir: LatticeDir) -> LatticeSite {
        let (di, dj) = dir.offset();
        LatticeSite {
            i: self.i + di,
            j: self.j + dj,
        }
    }
}
