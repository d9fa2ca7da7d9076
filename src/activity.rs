use std::fmt;
use std::str::FromStr;

/// Activity filter understood by the forecast backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Activity {
    #[default]
    Pantai,
    Hiking,
    Snorkeling,
    Rafting,
}

#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Pantai,
        Activity::Hiking,
        Activity::Snorkeling,
        Activity::Rafting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Activity::Pantai => "pantai",
            Activity::Hiking => "hiking",
            Activity::Snorkeling => "snorkeling",
            Activity::Rafting => "rafting",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Activity::Pantai => "Pantai",
            Activity::Hiking => "Hiking",
            Activity::Snorkeling => "Snorkeling",
            Activity::Rafting => "Rafting",
        }
    }

    /// Locations the backend reports for this activity.
    pub fn places(self) -> &'static [Place] {
        match self {
            Activity::Pantai => PANTAI,
            Activity::Hiking => HIKING,
            Activity::Snorkeling => SNORKELING,
            Activity::Rafting => RAFTING,
        }
    }

    pub fn known_labels() -> String {
        Self::ALL
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActivity(pub String);

impl fmt::Display for UnknownActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid activity '{}'. Must be one of: {}",
            self.0,
            Activity::known_labels()
        )
    }
}

impl std::error::Error for UnknownActivity {}

impl FromStr for Activity {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownActivity(wanted.to_string()))
    }
}

const PANTAI: &[Place] = &[
    Place { name: "Pantai Kuta", lat: -8.7184, lon: 115.1686 },
    Place { name: "Pantai Sanur", lat: -8.7069, lon: 115.2625 },
    Place { name: "Pantai Nusa Dua", lat: -8.8014, lon: 115.2303 },
    Place { name: "Pantai Seminyak", lat: -8.6919, lon: 115.1680 },
];

const HIKING: &[Place] = &[
    Place { name: "Gunung Batur", lat: -8.2425, lon: 115.3751 },
    Place { name: "Gunung Agung", lat: -8.3429, lon: 115.5079 },
    Place { name: "Campuhan Ridge Walk", lat: -8.5069, lon: 115.2625 },
    Place { name: "Gunung Batukaru", lat: -8.3644, lon: 115.0933 },
];

const SNORKELING: &[Place] = &[
    Place { name: "Pantai Amed", lat: -8.3469, lon: 115.6636 },
    Place { name: "Pulau Menjangan", lat: -8.1561, lon: 114.5139 },
    Place { name: "Blue Lagoon (Padangbai)", lat: -8.5392, lon: 115.5061 },
    Place { name: "Tulamben (USAT Liberty)", lat: -8.2750, lon: 115.5967 },
];

const RAFTING: &[Place] = &[
    Place { name: "Sungai Ayung", lat: -8.5500, lon: 115.2639 },
    Place { name: "Sungai Telaga Waja", lat: -8.4969, lon: 115.4881 },
    Place { name: "Sungai Melangit", lat: -8.3975, lon: 115.3669 },
    Place { name: "Sungai Unda", lat: -8.5411, lon: 115.4833 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("PANTAI".parse::<Activity>().unwrap(), Activity::Pantai);
        assert_eq!(" Rafting ".parse::<Activity>().unwrap(), Activity::Rafting);
    }

    #[test]
    fn unknown_activity_lists_known_labels() {
        let err = "surfing".parse::<Activity>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid activity 'surfing'. Must be one of: pantai, hiking, snorkeling, rafting"
        );
    }

    #[test]
    fn every_activity_has_four_places() {
        for activity in Activity::ALL {
            assert_eq!(activity.places().len(), 4, "{activity}");
        }
    }
}
