/// Dead layers added on each side of the grid by one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Padding {
    pub const NONE: Self = Self::uniform(0);

    pub const fn uniform(layers: usize) -> Self {
        Self {
            top: layers,
            bottom: layers,
            left: layers,
            right: layers,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Describes how the grid grows when life is born beyond its edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Only the sides that received a birth get one extra layer.
    #[default]
    Minimal,
    /// Any birth beyond the edges adds one layer on all four sides.
    Uniform,
}

impl GrowthPolicy {
    /// Padding needed to hold `births` of a `height x width` grid.
    ///
    /// Births are given in grid coordinates and may lie one cell beyond the edges.
    pub fn padding_for(&self, births: &[(isize, isize)], height: usize, width: usize) -> Padding {
        let (h, w) = (height as isize, width as isize);
        let mut padding = Padding::NONE;
        for &(row, col) in births {
            padding.top |= (row < 0) as usize;
            padding.bottom |= (row >= h) as usize;
            padding.left |= (col < 0) as usize;
            padding.right |= (col >= w) as usize;
        }
        match self {
            Self::Minimal => padding,
            Self::Uniform if padding.is_empty() => Padding::NONE,
            Self::Uniform => Padding::uniform(1),
        }
    }
}

impl std::str::FromStr for GrowthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "uniform" => Ok(Self::Uniform),
            _ => Err(format!("unknown growth policy `{s}` (expected minimal or uniform)")),
        }
    }
}
