//! View model for the visit details fragment.
//!
//! [`VisitDetailsPresenter`] flattens a [`Visit`] into display strings ready
//! for the patient dashboard: formatted timestamps, location names and one
//! summary per live encounter, newest first.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::ports::UiFormatter;
use crate::domain::{Encounter, EncounterProvider, Visit};

/// Formatter used when no locale-specific one is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultUiFormatter;

impl DefaultUiFormatter {
    const DATETIME: &'static str = "%d %b %Y %H:%M";
    const DATE: &'static str = "%d/%m/%Y";
    const TIME: &'static str = "%I:%M %p";
}

impl UiFormatter for DefaultUiFormatter {
    fn format_datetime(&self, value: NaiveDateTime) -> String {
        value.format(Self::DATETIME).to_string()
    }

    fn format_date(&self, value: NaiveDateTime) -> String {
        value.format(Self::DATE).to_string()
    }

    fn format_time(&self, value: NaiveDateTime) -> String {
        value.format(Self::TIME).to_string()
    }
}

/// Provider line shown under an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterProviderSummary {
    /// Provider display name.
    pub provider: String,
    /// Role in the encounter, if recorded.
    pub encounter_role: Option<String>,
}

/// One encounter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterSummary {
    /// Platform encounter identifier.
    pub encounter_id: u32,
    /// Encounter location name.
    pub location: Option<String>,
    /// Encounter type name.
    pub encounter_type: Option<String>,
    /// Full formatted timestamp.
    pub encounter_datetime: String,
    /// Formatted date part.
    pub encounter_date: String,
    /// Formatted time part.
    pub encounter_time: String,
    /// Participating providers.
    pub encounter_providers: Vec<EncounterProviderSummary>,
}

/// Visit details payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDetails {
    /// Formatted visit start.
    pub start_datetime: String,
    /// `None` while the visit is still active.
    pub stop_datetime: Option<String>,
    /// Visit location name.
    pub location: Option<String>,
    /// Live encounters, newest first.
    pub encounters: Vec<EncounterSummary>,
}

/// Builds [`VisitDetails`] using a [`UiFormatter`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use emr::domain::{DefaultUiFormatter, Visit, VisitDetailsPresenter};
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .and_then(|day| day.and_hms_opt(9, 30, 0))
///     .expect("valid timestamp");
/// let presenter = VisitDetailsPresenter::new(Arc::new(DefaultUiFormatter));
/// let details = presenter.present(&Visit::new(1, start));
/// assert_eq!(details.start_datetime, "01 Mar 2024 09:30");
/// assert!(details.stop_datetime.is_none());
/// ```
pub struct VisitDetailsPresenter<F: ?Sized> {
    formatter: Arc<F>,
}

impl<F: ?Sized> Clone for VisitDetailsPresenter<F> {
    fn clone(&self) -> Self {
        Self {
            formatter: Arc::clone(&self.formatter),
        }
    }
}

impl<F: UiFormatter + ?Sized> VisitDetailsPresenter<F> {
    /// Presenter formatting timestamps with `formatter`.
    pub fn new(formatter: Arc<F>) -> Self {
        Self { formatter }
    }

    /// Map `visit` to its view model.
    pub fn present(&self, visit: &Visit) -> VisitDetails {
        let mut live: Vec<&Encounter> = visit
            .encounters()
            .iter()
            .filter(|encounter| !encounter.is_voided())
            .collect();
        live.sort_by(|a, b| b.encounter_datetime().cmp(&a.encounter_datetime()));

        VisitDetails {
            start_datetime: self.formatter.format_datetime(visit.start_datetime()),
            stop_datetime: visit
                .stop_datetime()
                .map(|stop| self.formatter.format_datetime(stop)),
            location: visit.location().map(|location| location.name().to_owned()),
            encounters: live
                .into_iter()
                .map(|encounter| self.summarise(encounter))
                .collect(),
        }
    }

    fn summarise(&self, encounter: &Encounter) -> EncounterSummary {
        let at = encounter.encounter_datetime();
        EncounterSummary {
            encounter_id: encounter.encounter_id(),
            location: encounter.location().map(|location| location.name().to_owned()),
            encounter_type: encounter
                .encounter_type()
                .map(|kind| kind.name().to_owned()),
            encounter_datetime: self.formatter.format_datetime(at),
            encounter_date: self.formatter.format_date(at),
            encounter_time: self.formatter.format_time(at),
            encounter_providers: encounter
                .providers()
                .iter()
                .map(summarise_provider)
                .collect(),
        }
    }
}

fn summarise_provider(provider: &EncounterProvider) -> EncounterProviderSummary {
    EncounterProviderSummary {
        provider: provider.provider().to_owned(),
        encounter_role: provider.encounter_role().map(str::to_owned),
    }
}
