//! Dimension predicate builder.
//!
//! Turns a [`DimensionQuery`] into a [`StoragePredicate`] tree that a
//! repository can either evaluate in memory ([`StoragePredicate::matches`])
//! or compile into a database condition.

use crate::entity;
use crate::models::{CountryCode, StorageCategory};

/// Half-width of the window a single point value matches, in centimetres.
pub const POINT_TOLERANCE: f64 = 0.5;

/// A physical dimension of a storage item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Depth,
    Height,
}

impl Axis {
    /// Width and depth trade places; height stays put.
    pub fn swapped(self) -> Self {
        match self {
            Axis::Width => Axis::Depth,
            Axis::Depth => Axis::Width,
            Axis::Height => Axis::Height,
        }
    }

    /// Read this axis from a stored record.
    pub fn value_of(self, record: &entity::Model) -> f64 {
        match self {
            Axis::Width => record.width,
            Axis::Depth => record.depth,
            Axis::Height => record.height,
        }
    }
}

/// What a request asks of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DimensionConstraint {
    /// Matches `[v - POINT_TOLERANCE, v + POINT_TOLERANCE]`.
    Point(f64),
    /// Matches `[lower, upper]`. Empty when `lower > upper`.
    Range { lower: f64, upper: f64 },
    #[default]
    Unconstrained,
}

impl DimensionConstraint {
    /// Resolve the raw request fields for one axis.
    ///
    /// Range mode wins when it is switched on and both bounds are present.
    /// Otherwise a point value is used if one was given.
    pub fn resolve(
        point: Option<f64>,
        lower: Option<f64>,
        upper: Option<f64>,
        use_range: Option<bool>,
    ) -> Self {
        match (use_range.unwrap_or(false), lower, upper, point) {
            (true, Some(lower), Some(upper), _) => DimensionConstraint::Range { lower, upper },
            (_, _, _, Some(value)) => DimensionConstraint::Point(value),
            _ => DimensionConstraint::Unconstrained,
        }
    }

    pub fn is_constrained(&self) -> bool {
        !matches!(self, DimensionConstraint::Unconstrained)
    }

    /// Inclusive bounds, or `None` when unconstrained.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            DimensionConstraint::Point(v) => Some((v - POINT_TOLERANCE, v + POINT_TOLERANCE)),
            DimensionConstraint::Range { lower, upper } => Some((lower, upper)),
            DimensionConstraint::Unconstrained => None,
        }
    }
}

/// A constraint bound to the axis it applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConstraint {
    pub axis: Axis,
    pub constraint: DimensionConstraint,
}

impl AxisConstraint {
    pub fn new(axis: Axis, constraint: DimensionConstraint) -> Self {
        Self { axis, constraint }
    }

    /// The same constraint applied to the other horizontal axis.
    pub fn swapped(self) -> Self {
        Self {
            axis: self.axis.swapped(),
            constraint: self.constraint,
        }
    }

    /// `None` for an unconstrained axis, which drops out of the conjunction.
    pub fn predicate(&self) -> Option<StoragePredicate> {
        self.constraint
            .bounds()
            .map(|(lower, upper)| StoragePredicate::Between {
                axis: self.axis,
                lower,
                upper,
            })
    }
}

/// Boolean filter over stored records.
#[derive(Debug, Clone, PartialEq)]
pub enum StoragePredicate {
    /// Conjunction. Empty is true.
    All(Vec<StoragePredicate>),
    /// Disjunction. Empty is false.
    Any(Vec<StoragePredicate>),
    Category(StorageCategory),
    Country(CountryCode),
    Active(bool),
    /// Inclusive on both ends.
    Between { axis: Axis, lower: f64, upper: f64 },
}

impl StoragePredicate {
    pub fn matches(&self, record: &entity::Model) -> bool {
        match self {
            StoragePredicate::All(parts) => parts.iter().all(|p| p.matches(record)),
            StoragePredicate::Any(parts) => parts.iter().any(|p| p.matches(record)),
            StoragePredicate::Category(category) => record.storage_category == i32::from(*category),
            StoragePredicate::Country(country) => record.country_code == country.as_str(),
            StoragePredicate::Active(active) => record.active == *active,
            StoragePredicate::Between { axis, lower, upper } => {
                let value = axis.value_of(record);
                *lower <= value && value <= *upper
            }
        }
    }
}

/// Everything the predicate builder needs from a search request.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionQuery {
    pub category: StorageCategory,
    pub country_code: CountryCode,
    pub width: DimensionConstraint,
    pub height: DimensionConstraint,
    pub depth: DimensionConstraint,
    /// Also match items rotated a quarter turn, with width and depth exchanged.
    pub inverted: bool,
}

impl DimensionQuery {
    /// True when at least one axis carries a constraint.
    pub fn has_dimension(&self) -> bool {
        self.width.is_constrained() || self.height.is_constrained() || self.depth.is_constrained()
    }

    /// Build the predicate. Never fails; nonsensical bounds match nothing.
    pub fn predicate(&self) -> StoragePredicate {
        let mut parts = vec![
            StoragePredicate::Category(self.category),
            StoragePredicate::Country(self.country_code),
            StoragePredicate::Active(true),
        ];

        parts.extend(AxisConstraint::new(Axis::Height, self.height).predicate());

        let horizontal = [
            AxisConstraint::new(Axis::Width, self.width),
            AxisConstraint::new(Axis::Depth, self.depth),
        ];
        let horizontal_constrained = horizontal.iter().any(|c| c.constraint.is_constrained());

        if self.inverted && horizontal_constrained {
            let upright = conjunction(horizontal.iter().copied());
            let rotated = conjunction(horizontal.iter().map(|c| c.swapped()));
            parts.push(StoragePredicate::Any(vec![upright, rotated]));
        } else {
            parts.extend(horizontal.iter().filter_map(AxisConstraint::predicate));
        }

        StoragePredicate::All(parts)
    }
}

fn conjunction(constraints: impl Iterator<Item = AxisConstraint>) -> StoragePredicate {
    StoragePredicate::All(constraints.filter_map(|c| c.predicate()).collect())
}
