use std::fmt;

/// Classification of a calendar day in a PAN month file.
/// Only `Work` days are subject to the time rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Work,
    Weekend,
    Vacation,
    Holiday,
    Illness,
    OvertimeCompensation,
    BusinessTrip,
    UnpaidLeave,
}

impl DayType {
    pub const ALL: [DayType; 8] = [
        DayType::Work,
        DayType::Weekend,
        DayType::Vacation,
        DayType::Holiday,
        DayType::Illness,
        DayType::OvertimeCompensation,
        DayType::BusinessTrip,
        DayType::UnpaidLeave,
    ];

    /// Human-readable label (reporting only)
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Work => "Arbeitstag",
            DayType::Weekend => "Wochenende",
            DayType::Vacation => "Urlaub",
            DayType::Holiday => "Feiertag",
            DayType::Illness => "Krankschreibung",
            DayType::OvertimeCompensation => "Überstundenausgleich",
            DayType::BusinessTrip => "Dienstreise",
            DayType::UnpaidLeave => "Freistellung",
        }
    }

    /// Convert the `TagesTyp` text of a PAN file → enum
    pub fn from_pan_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Arbeitstag" => Some(DayType::Work),
            "Wochenende" => Some(DayType::Weekend),
            "Urlaub" => Some(DayType::Vacation),
            "Feiertag" => Some(DayType::Holiday),
            "Krankheit" => Some(DayType::Illness),
            "Überstunden genommen" => Some(DayType::OvertimeCompensation),
            "Dienstreise" => Some(DayType::BusinessTrip),
            "Freistellung" => Some(DayType::UnpaidLeave),
            _ => None,
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self, DayType::Work)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
