use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SGError
{
    InvalidLevel,
    InvalidDimension,
    EmptyInterval,
    NonIntegerBounds,
    NumberOfPointsAndValuesMismatch,
}
impl std::error::Error for SGError {}

impl Display for SGError
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self
        {
            SGError::InvalidLevel => write!(f, "Level must be >= 1 for sparse grid."),
            SGError::InvalidDimension => write!(f, "Dimension must be >= 1 for sparse grid."),
            SGError::EmptyInterval => write!(f, "Empty interval. Check that a < b."),
            SGError::NonIntegerBounds => write!(f, "Interval boundaries need to be integers."),
            SGError::NumberOfPointsAndValuesMismatch => write!(f, "Number of values does not match the number of grid nodes."),
        }
    }
}
