//! Physical quantities (`PQ`) and intervals (`IVL`).

use std::fmt;

/// A quantity with a unit (`PQ`).
///
/// Both parts are independently optional, so a device can announce the unit
/// of a result whose value is still pending.
///
/// # Examples
///
/// ```
/// use poct_types::PhysicalQuantity;
///
/// let weight = PhysicalQuantity::new("72.5".to_string(), "kg");
/// assert_eq!(weight.to_string(), "72.5 kg");
///
/// let pending: PhysicalQuantity<String> = PhysicalQuantity::unit_only("mmol/L");
/// assert!(pending.value.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalQuantity<T = String> {
    /// The magnitude.
    pub value: Option<T>,
    /// Unit of measure, usually UCUM.
    pub unit: Option<String>,
}

/// Short alias matching the data dictionary name.
pub type Pq<T = String> = PhysicalQuantity<T>;

impl<T> Default for PhysicalQuantity<T> {
    fn default() -> Self {
        Self {
            value: None,
            unit: None,
        }
    }
}

impl<T> PhysicalQuantity<T> {
    /// Creates a quantity with both value and unit.
    pub fn new(value: T, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            unit: Some(unit.into()),
        }
    }

    /// Creates a quantity whose value is not yet known.
    pub fn unit_only(unit: impl Into<String>) -> Self {
        Self {
            value: None,
            unit: Some(unit.into()),
        }
    }

    /// Returns true if neither part is set.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.unit.is_none()
    }
}

impl<T: fmt::Display> fmt::Display for PhysicalQuantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.unit) {
            (Some(value), Some(unit)) => write!(f, "{} {}", value, unit),
            (Some(value), None) => write!(f, "{}", value),
            (None, Some(unit)) => write!(f, "? {}", unit),
            (None, None) => Ok(()),
        }
    }
}

/// A range with open or closed ends (`IVL`).
///
/// A missing endpoint means the interval is unbounded on that side.
///
/// # Examples
///
/// ```
/// use poct_types::Interval;
///
/// let normal = Interval::closed("3.9".to_string(), "5.6".to_string()).with_unit("mmol/L");
/// assert!(normal.is_bounded());
/// assert_eq!(normal.to_string(), "[3.9, 5.6] mmol/L");
///
/// let above: Interval = Interval::at_least("7.0".to_string());
/// assert!(!above.is_bounded());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T = String> {
    /// Whether the low end is included.
    pub closed_low: bool,
    /// Whether the high end is included.
    pub closed_high: bool,
    /// Low end, `None` when unbounded below.
    pub value_low: Option<T>,
    /// High end, `None` when unbounded above.
    pub value_high: Option<T>,
    /// Unit shared by both ends.
    pub unit: Option<String>,
}

/// Short alias matching the data dictionary name.
pub type Ivl<T = String> = Interval<T>;

impl<T> Interval<T> {
    /// Creates an interval including both ends.
    pub fn closed(low: T, high: T) -> Self {
        Self {
            closed_low: true,
            closed_high: true,
            value_low: Some(low),
            value_high: Some(high),
            unit: None,
        }
    }

    /// Creates an interval bounded only below, including the bound.
    pub fn at_least(low: T) -> Self {
        Self {
            closed_low: true,
            closed_high: false,
            value_low: Some(low),
            value_high: None,
            unit: None,
        }
    }

    /// Creates an interval bounded only above, including the bound.
    pub fn at_most(high: T) -> Self {
        Self {
            closed_low: false,
            closed_high: true,
            value_low: None,
            value_high: Some(high),
            unit: None,
        }
    }

    /// Sets the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Returns true if both ends are present.
    pub fn is_bounded(&self) -> bool {
        self.value_low.is_some() && self.value_high.is_some()
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Returns true if `value` lies inside the interval, honouring the
    /// open/closed flags. Missing ends are unbounded.
    pub fn contains(&self, value: &T) -> bool {
        let above_low = match &self.value_low {
            Some(low) if self.closed_low => value >= low,
            Some(low) => value > low,
            None => true,
        };
        let below_high = match &self.value_high {
            Some(high) if self.closed_high => value <= high,
            Some(high) => value < high,
            None => true,
        };
        above_low && below_high
    }
}

impl Interval<String> {
    /// Checks a number against an interval whose ends are decimal strings.
    ///
    /// Returns `None` if a present end does not parse as a number.
    pub fn contains_number(&self, value: f64) -> Option<bool> {
        fn parse(end: &Option<String>) -> Option<Option<f64>> {
            match end {
                Some(text) => text.trim().parse::<f64>().ok().map(Some),
                None => Some(None),
            }
        }
        let numeric = Interval {
            closed_low: self.closed_low,
            closed_high: self.closed_high,
            value_low: parse(&self.value_low)?,
            value_high: parse(&self.value_high)?,
            unit: None,
        };
        Some(numeric.contains(&value))
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.closed_low { '[' } else { '(' };
        let close = if self.closed_high { ']' } else { ')' };
        write!(f, "{}", open)?;
        match &self.value_low {
            Some(low) => write!(f, "{}", low)?,
            None => write!(f, "-inf")?,
        }
        write!(f, ", ")?;
        match &self.value_high {
            Some(high) => write!(f, "{}", high)?,
            None => write!(f, "+inf")?,
        }
        write!(f, "{}", close)?;
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit)?;
        }
        Ok(())
    }
}
