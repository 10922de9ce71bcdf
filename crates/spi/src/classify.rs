//! Drought classification of SPI values (interpretation only; plays no
//! part in the computation).

use std::fmt;

/// Conventional SPI drought/wetness classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiClass {
    /// SPI <= -2.0.
    ExceptionalDrought,
    /// -2.0 < SPI <= -1.5.
    ExtremeDrought,
    /// -1.5 < SPI <= -1.0.
    SevereDrought,
    /// -1.0 < SPI <= -0.5.
    ModerateDrought,
    /// -0.5 < SPI < 0.5.
    NearNormal,
    /// 0.5 <= SPI < 1.0.
    ModeratelyWet,
    /// 1.0 <= SPI < 1.5.
    VeryWet,
    /// 1.5 <= SPI < 2.0.
    ExtremelyWet,
    /// SPI >= 2.0.
    ExceptionallyWet,
}

impl SpiClass {
    /// Classify an index value. Returns `None` for missing (non-finite)
    /// values.
    pub fn from_value(spi: f64) -> Option<Self> {
        if !spi.is_finite() {
            return None;
        }
        Some(if spi <= -2.0 {
            SpiClass::ExceptionalDrought
        } else if spi <= -1.5 {
            SpiClass::ExtremeDrought
        } else if spi <= -1.0 {
            SpiClass::SevereDrought
        } else if spi <= -0.5 {
            SpiClass::ModerateDrought
        } else if spi < 0.5 {
            SpiClass::NearNormal
        } else if spi < 1.0 {
            SpiClass::ModeratelyWet
        } else if spi < 1.5 {
            SpiClass::VeryWet
        } else if spi < 2.0 {
            SpiClass::ExtremelyWet
        } else {
            SpiClass::ExceptionallyWet
        })
    }

    /// Human-readable class label.
    pub fn label(&self) -> &'static str {
        match self {
            SpiClass::ExceptionalDrought => "Exceptional Drought",
            SpiClass::ExtremeDrought => "Extreme Drought",
            SpiClass::SevereDrought => "Severe Drought",
            SpiClass::ModerateDrought => "Moderate Drought",
            SpiClass::NearNormal => "Near Normal",
            SpiClass::ModeratelyWet => "Moderately Wet",
            SpiClass::VeryWet => "Very Wet",
            SpiClass::ExtremelyWet => "Extremely Wet",
            SpiClass::ExceptionallyWet => "Exceptionally Wet",
        }
    }
}

impl fmt::Display for SpiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values() {
        assert_eq!(
            SpiClass::from_value(-2.0),
            Some(SpiClass::ExceptionalDrought)
        );
        assert_eq!(SpiClass::from_value(-1.5), Some(SpiClass::ExtremeDrought));
        assert_eq!(SpiClass::from_value(-1.0), Some(SpiClass::SevereDrought));
        assert_eq!(SpiClass::from_value(-0.5), Some(SpiClass::ModerateDrought));
        assert_eq!(SpiClass::from_value(0.0), Some(SpiClass::NearNormal));
        assert_eq!(SpiClass::from_value(0.5), Some(SpiClass::ModeratelyWet));
        assert_eq!(SpiClass::from_value(1.0), Some(SpiClass::VeryWet));
        assert_eq!(SpiClass::from_value(1.5), Some(SpiClass::ExtremelyWet));
        assert_eq!(SpiClass::from_value(2.0), Some(SpiClass::ExceptionallyWet));
    }

    #[test]
    fn open_interval_below_half() {
        assert_eq!(SpiClass::from_value(0.49), Some(SpiClass::NearNormal));
        assert_eq!(SpiClass::from_value(-0.49), Some(SpiClass::NearNormal));
    }

    #[test]
    fn missing_is_unclassified() {
        assert_eq!(SpiClass::from_value(f64::NAN), None);
        assert_eq!(SpiClass::from_value(f64::INFINITY), None);
    }

    #[test]
    fn labels_match_convention() {
        assert_eq!(SpiClass::ExceptionalDrought.label(), "Exceptional Drought");
        assert_eq!(SpiClass::NearNormal.to_string(), "Near Normal");
    }
}
