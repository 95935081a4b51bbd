//! Size of a rectangular area, e.g. of a screen.

use num_traits::real::Real;

/// Size of a rectangular area. Both dimensions are guaranteed to be non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size<Num: num_traits::Num + PartialOrd + Copy = f64> {
    width: Num,
    height: Num,
}

impl<Num: Real> Size<Num> {
    /// Creates a new size. Negative values are clamped to zero.
    pub fn new(width: Num, height: Num) -> Self {
        Self {
            width: width.max(Num::zero()),
            height: height.max(Num::zero()),
        }
    }

    /// Width.
    pub fn width(&self) -> Num {
        self.width
    }

    /// Half width.
    pub fn half_width(&self) -> Num {
        self.width / (Num::one() + Num::one())
    }

    /// Height.
    pub fn height(&self) -> Num {
        self.height
    }

    /// Half height.
    pub fn half_height(&self) -> Num {
        self.height / (Num::one() + Num::one())
    }

    /// Returns true if either of the dimensions is zero.
    pub fn is_zero(&self) -> bool {
        self.width.is_zero() || self.height.is_zero()
    }
}
