//! Meteorological seasons of the analysis region.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Seasonal month windows. Winter straddles the calendar-year boundary and
/// needs [`crate::Grid::hydrological_year_shift`] before yearly binning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// December through February.
    Winter,
    /// March through May.
    PreMonsoon,
    /// June through September.
    Monsoon,
    /// October and November.
    PostMonsoon,
}

impl Season {
    /// All seasons, in annual order.
    pub const ALL: [Season; 4] = [
        Season::Winter,
        Season::PreMonsoon,
        Season::Monsoon,
        Season::PostMonsoon,
    ];

    /// Calendar months (1..=12) belonging to the season.
    pub fn months(&self) -> &'static [u8] {
        match self {
            Season::Winter => &[12, 1, 2],
            Season::PreMonsoon => &[3, 4, 5],
            Season::Monsoon => &[6, 7, 8, 9],
            Season::PostMonsoon => &[10, 11],
        }
    }

    /// Whether the season spans the calendar-year boundary, requiring the
    /// hydrological-year shift before grouping by year.
    pub fn spans_year_boundary(&self) -> bool {
        matches!(self, Season::Winter)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Winter => "winter",
            Season::PreMonsoon => "pre-monsoon",
            Season::Monsoon => "monsoon",
            Season::PostMonsoon => "post-monsoon",
        };
        f.write_str(name)
    }
}

impl FromStr for Season {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "pre-monsoon" | "premonsoon" => Ok(Season::PreMonsoon),
            "monsoon" => Ok(Season::Monsoon),
            "post-monsoon" | "postmonsoon" => Ok(Season::PostMonsoon),
            _ => Err(GridError::UnknownSeason {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_cover_the_year_once() {
        let mut all: Vec<u8> = Season::ALL.iter().flat_map(|s| s.months()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn only_winter_spans_boundary() {
        assert!(Season::Winter.spans_year_boundary());
        assert!(!Season::Monsoon.spans_year_boundary());
        assert!(!Season::PreMonsoon.spans_year_boundary());
        assert!(!Season::PostMonsoon.spans_year_boundary());
    }

    #[test]
    fn parse_round_trip() {
        for s in Season::ALL {
            assert_eq!(s.to_string().parse::<Season>().unwrap(), s);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Winter".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("PreMonsoon".parse::<Season>().unwrap(), Season::PreMonsoon);
    }

    #[test]
    fn parse_unknown_errors() {
        let err = "summer".parse::<Season>().unwrap_err();
        assert!(err.to_string().contains("unknown season 'summer'"));
    }
}
