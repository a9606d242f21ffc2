//! Shift type catalog.
//!
//! The catalog is read-only input to the planner: it maps short shift codes
//! to hour values, an auto-plan eligibility flag, and a coarse
//! classification used by the constraint evaluator. A cell whose code is
//! off-class (or an absent cell) counts as a free day everywhere.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Shift code for vacation days, referenced by the hour accounting.
pub const VACATION_CODE: &str = "U";

/// Coarse classification of a shift code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftClass {
    /// Daytime duty (relevant for the night-to-day turnaround penalty)
    Day,
    /// Night duty
    Night,
    /// Work-counting duty without day/night affinity
    Neutral,
    /// Not work: free day, vacation, requested day off
    Off,
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftType {
    /// Short code used in plan cells, e.g. "TR" or "U"
    pub code: String,
    /// Human-readable label
    pub label: String,
    /// Credited hours per assigned day
    pub hours: f64,
    /// Whether the automatic planner may assign this code
    pub auto_plan: bool,
    pub class: ShiftClass,
}

impl ShiftType {
    fn new(code: &str, label: &str, hours: f64, auto_plan: bool, class: ShiftClass) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            hours,
            auto_plan,
            class,
        }
    }
}

/// Catalog of all known shift codes for one team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCatalog {
    types: BTreeMap<String, ShiftType>,
}

impl ShiftCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// The built-in catalog: regular and substitute day/night duties, the
    /// 39-hour-contract variants, plus the non-work codes (free day,
    /// vacation, requested day off).
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for t in [
            ShiftType::new("TR", "Tagdienst regulär", 7.7, true, ShiftClass::Day),
            ShiftType::new("VT", "Vertretung Tag", 7.7, true, ShiftClass::Day),
            ShiftType::new("NR", "Nachtdienst regulär", 7.7, true, ShiftClass::Night),
            ShiftType::new("VN", "Vertretung Nacht", 7.7, true, ShiftClass::Night),
            ShiftType::new("T39", "Tagdienst 39h", 7.8, false, ShiftClass::Day),
            ShiftType::new("V39", "Vertretung 39h", 7.8, false, ShiftClass::Day),
            ShiftType::new("LR", "Langdienst", 7.7, false, ShiftClass::Neutral),
            ShiftType::new("AVT", "Ausbildung Tag", 7.7, false, ShiftClass::Day),
            ShiftType::new("AVN", "Ausbildung Nacht", 7.7, false, ShiftClass::Night),
            ShiftType::new("F", "Frei", 0.0, false, ShiftClass::Off),
            ShiftType::new("U", "Urlaub", 7.8, false, ShiftClass::Off),
            ShiftType::new("FW", "Freiwunsch", 0.0, false, ShiftClass::Off),
        ] {
            catalog.insert(t);
        }
        catalog
    }

    pub fn insert(&mut self, shift_type: ShiftType) {
        self.types.insert(shift_type.code.clone(), shift_type);
    }

    pub fn get(&self, code: &str) -> Option<&ShiftType> {
        self.types.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.types.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShiftType> {
        self.types.values()
    }

    /// Whether a code counts as a worked day. Unknown codes count as work;
    /// only the designated off codes (and absent cells) are free.
    pub fn is_work(&self, code: &str) -> bool {
        if code.is_empty() {
            return false;
        }
        match self.types.get(code) {
            Some(t) => t.class != ShiftClass::Off,
            None => true,
        }
    }

    pub fn is_day(&self, code: &str) -> bool {
        matches!(self.types.get(code), Some(t) if t.class == ShiftClass::Day)
    }

    pub fn is_night(&self, code: &str) -> bool {
        matches!(self.types.get(code), Some(t) if t.class == ShiftClass::Night)
    }

    pub fn is_off(&self, code: &str) -> bool {
        matches!(self.types.get(code), Some(t) if t.class == ShiftClass::Off)
    }

    /// Whether the automatic planner may assign this code.
    pub fn is_auto_plannable(&self, code: &str) -> bool {
        matches!(self.types.get(code), Some(t) if t.auto_plan)
    }

    /// Credited hours for a code; unknown codes credit zero.
    pub fn hours(&self, code: &str) -> f64 {
        self.types.get(code).map(|t| t.hours).unwrap_or(0.0)
    }

    /// Replace hour values for the given codes. Codes not present in the
    /// catalog are ignored.
    pub fn apply_hour_overrides(&mut self, overrides: &HashMap<String, f64>) {
        for (code, hours) in overrides {
            if let Some(t) = self.types.get_mut(code) {
                t.hours = *hours;
            }
        }
    }
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
