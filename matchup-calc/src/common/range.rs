use std::{
    cmp::Ordering,
    fmt::Display,
};

use serde::{
    Deserialize,
    Serialize,
};

/// A value that can be the bound of a [`Range`].
pub trait RangeValue: Copy + Ord {}
impl<I> RangeValue for I where I: Copy + Ord {}

/// An inclusive range of integers.
///
/// Serializes as a `[min, max]` pair.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Range<I>(I, I);

impl<I> Range<I>
where
    I: RangeValue,
{
    /// Creates a new range from two bounds, in either order.
    pub fn new(a: I, b: I) -> Self {
        Self(a.min(b), a.max(b))
    }

    /// The start of the range.
    pub fn a(&self) -> I {
        self.0
    }

    /// The end of the range (inclusive).
    pub fn b(&self) -> I {
        self.1
    }

    /// Checks if a value is in range.
    pub fn contains(&self, v: I) -> bool {
        v >= self.a() && v <= self.b()
    }

    /// Performs a strict comparison, checking if all values in this range are less than or
    /// greater than another range.
    pub fn strict_cmp(&self, rhs: &Self) -> Option<Ordering> {
        if self.b() < rhs.a() {
            Some(Ordering::Less)
        } else if self.a() > rhs.b() {
            Some(Ordering::Greater)
        } else if self.a() == rhs.a() && self.b() == rhs.b() {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    /// Checks if this range overlaps with another.
    pub fn overlaps(&self, rhs: &Self) -> bool {
        !matches!(
            self.strict_cmp(rhs),
            Some(Ordering::Less | Ordering::Greater)
        )
    }

    /// Maps the bounds of the range to values of a different type.
    pub fn map<F, T>(&self, f: F) -> Range<T>
    where
        F: Fn(I) -> T,
        T: RangeValue,
    {
        Range::new(f(self.a()), f(self.b()))
    }
}

impl<I> From<I> for Range<I>
where
    I: RangeValue,
{
    fn from(value: I) -> Self {
        Self::new(value, value)
    }
}

impl<I> From<Range<I>> for (I, I) {
    fn from(value: Range<I>) -> Self {
        (value.0, value.1)
    }
}

impl<I> Display for Range<I>
where
    I: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.0, self.1)
    }
}
