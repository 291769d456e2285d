//! Read model of a patient visit and its encounters.
//!
//! These types are populated by a [`VisitQuery`](crate::domain::ports::VisitQuery)
//! adapter and consumed by the visit details presenter. Timestamps are
//! platform-local wall-clock times.

use chrono::NaiveDateTime;

/// Named physical location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    name: String,
}

impl Location {
    /// Location with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Category of an encounter, e.g. "Vitals" or "Check In".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterType {
    name: String,
}

impl EncounterType {
    /// Encounter type with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Provider who took part in an encounter, with their role in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterProvider {
    provider: String,
    encounter_role: Option<String>,
}

impl EncounterProvider {
    /// Provider with no encounter role.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            encounter_role: None,
        }
    }

    /// Attach the provider's role in the encounter.
    #[must_use]
    pub fn with_role(mut self, encounter_role: impl Into<String>) -> Self {
        self.encounter_role = Some(encounter_role.into());
        self
    }

    /// Provider display name.
    pub fn provider(&self) -> &str {
        self.provider.as_str()
    }

    /// Role in the encounter, if recorded.
    pub fn encounter_role(&self) -> Option<&str> {
        self.encounter_role.as_deref()
    }
}

/// A single clinical encounter recorded during a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    encounter_id: u32,
    encounter_datetime: NaiveDateTime,
    location: Option<Location>,
    encounter_type: Option<EncounterType>,
    providers: Vec<EncounterProvider>,
    voided: bool,
}

impl Encounter {
    /// Live encounter with no location, type or providers.
    pub fn new(encounter_id: u32, encounter_datetime: NaiveDateTime) -> Self {
        Self {
            encounter_id,
            encounter_datetime,
            location: None,
            encounter_type: None,
            providers: Vec::new(),
            voided: false,
        }
    }

    /// Set where the encounter happened.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the encounter type.
    #[must_use]
    pub fn with_encounter_type(mut self, encounter_type: EncounterType) -> Self {
        self.encounter_type = Some(encounter_type);
        self
    }

    /// Append a participating provider.
    #[must_use]
    pub fn with_provider(mut self, provider: EncounterProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Mark the encounter as voided (retracted) on the platform.
    #[must_use]
    pub fn voided(mut self) -> Self {
        self.voided = true;
        self
    }

    /// Platform identifier.
    pub fn encounter_id(&self) -> u32 {
        self.encounter_id
    }

    /// When the encounter took place.
    pub fn encounter_datetime(&self) -> NaiveDateTime {
        self.encounter_datetime
    }

    /// Encounter location, if recorded.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Encounter type, if recorded.
    pub fn encounter_type(&self) -> Option<&EncounterType> {
        self.encounter_type.as_ref()
    }

    /// Participating providers in recorded order.
    pub fn providers(&self) -> &[EncounterProvider] {
        &self.providers
    }

    /// Whether the encounter has been voided.
    pub fn is_voided(&self) -> bool {
        self.voided
    }
}

/// A patient visit.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use emr::domain::{Encounter, Visit};
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .and_then(|day| day.and_hms_opt(9, 30, 0))
///     .expect("valid timestamp");
/// let visit = Visit::new(1, start).with_encounter(Encounter::new(7, start));
/// assert!(visit.is_active());
/// assert_eq!(visit.encounters().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    visit_id: u32,
    start_datetime: NaiveDateTime,
    stop_datetime: Option<NaiveDateTime>,
    location: Option<Location>,
    encounters: Vec<Encounter>,
}

impl Visit {
    /// Active visit with no location or encounters.
    pub fn new(visit_id: u32, start_datetime: NaiveDateTime) -> Self {
        Self {
            visit_id,
            start_datetime,
            stop_datetime: None,
            location: None,
            encounters: Vec::new(),
        }
    }

    /// Close the visit at `stop_datetime`.
    #[must_use]
    pub fn with_stop_datetime(mut self, stop_datetime: NaiveDateTime) -> Self {
        self.stop_datetime = Some(stop_datetime);
        self
    }

    /// Set the visit location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Append an encounter.
    #[must_use]
    pub fn with_encounter(mut self, encounter: Encounter) -> Self {
        self.encounters.push(encounter);
        self
    }

    /// Platform identifier.
    pub fn visit_id(&self) -> u32 {
        self.visit_id
    }

    /// When the visit started.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start_datetime
    }

    /// When the visit ended; `None` while active.
    pub fn stop_datetime(&self) -> Option<NaiveDateTime> {
        self.stop_datetime
    }

    /// Visit location, if recorded.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Every encounter, voided ones included, in recorded order.
    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    /// A visit without a stop time is still in progress.
    pub fn is_active(&self) -> bool {
        self.stop_datetime.is_none()
    }
}
