use chrono::{DateTime, TimeZone};

/// GPS fix attached to a capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let valid = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon);
        valid.then_some(Self { lat, lon })
    }
}

/// Address parts as returned by a reverse geocoder.
#[derive(Debug, Clone, Default)]
pub struct AddressParts {
    pub road: String,
    pub house_number: String,
    pub suburb: String,
    pub city: String,
}

impl AddressParts {
    /// "road, number - suburb / city", skipping blank parts.
    pub fn compose(&self) -> String {
        let mut line = self.road.trim().to_string();
        if !self.house_number.trim().is_empty() {
            line.push_str(&format!(", {}", self.house_number.trim()));
        }
        if !self.suburb.trim().is_empty() {
            line.push_str(&format!(" - {}", self.suburb.trim()));
        }
        if !self.city.trim().is_empty() {
            line.push_str(&format!(" / {}", self.city.trim()));
        }
        line
    }
}

fn has_alnum(s: &str) -> bool {
    s.chars().any(char::is_alphanumeric)
}

/// Location text stamped on an entry: best available place, then the capture time.
///
/// Fallback chain: address (if it says anything) → coordinates → "Location unavailable".
pub fn describe_location<Tz: TimeZone>(
    address: Option<&str>,
    position: Option<Position>,
    at: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let place = match (address.filter(|a| has_alnum(a)), position) {
        (Some(a), _) => a.trim().to_string(),
        (None, Some(p)) => format!("Lat: {:.5}, Long: {:.5}", p.lat, p.lon),
        (None, None) => "Location unavailable".to_string(),
    };

    format!("{}\n{}", place, at.format("%d/%m/%Y %H:%M:%S"))
}
