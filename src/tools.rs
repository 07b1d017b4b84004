/// Wind classification against the CSM I-11 32 km/h man-basket limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindRisk {
    Safe,
    Caution,
    Danger,
    Unknown,
}

impl WindRisk {
    pub fn label(self) -> &'static str {
        match self {
            WindRisk::Safe => "Safe for normal work",
            WindRisk::Caution => "Caution - approaching man-basket limit",
            WindRisk::Danger => "STOP man-basket operations (>32 km/h)",
            WindRisk::Unknown => "--",
        }
    }
}

pub fn classify_wind(speed_kmh: f64) -> WindRisk {
    if !speed_kmh.is_finite() {
        return WindRisk::Unknown;
    }
    if speed_kmh < 20.0 {
        WindRisk::Safe
    } else if speed_kmh < 32.0 {
        WindRisk::Caution
    } else {
        WindRisk::Danger
    }
}

/// Heat-stress tiers per CSM I-13.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatRisk {
    Low,
    ExtremeCaution,
    Danger,
}

impl HeatRisk {
    pub fn label(self) -> &'static str {
        match self {
            HeatRisk::Low => "Low",
            HeatRisk::ExtremeCaution => "Extreme Caution",
            HeatRisk::Danger => "Danger",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            HeatRisk::Low => "Drink water.",
            HeatRisk::ExtremeCaution => "Water, rest, shade required.",
            HeatRisk::Danger => "Stop non-essential work. Monitor workers.",
        }
    }
}

pub fn classify_heat(temp_c: f64, humidity_pct: f64) -> HeatRisk {
    if temp_c > 40.0 {
        HeatRisk::Danger
    } else if temp_c > 35.0 || (temp_c > 30.0 && humidity_pct > 50.0) {
        HeatRisk::ExtremeCaution
    } else {
        HeatRisk::Low
    }
}
