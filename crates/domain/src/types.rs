// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Processing status shared by reservations and site visits.
///
/// The status is the only mutable field on a persisted record; every
/// other field is fixed at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Newly submitted, awaiting review.
    #[default]
    Pending,
    /// Accepted by an admin.
    Confirmed,
    /// Cancelled by either side.
    Cancelled,
    /// The rental or visit has taken place.
    Completed,
}

impl BookingStatus {
    /// All statuses in dashboard display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    /// Returns the storage representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Returns the Korean display label used by the admin dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "대기",
            Self::Confirmed => "확정",
            Self::Cancelled => "취소",
            Self::Completed => "완료",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Refund progress for a settlement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    /// Refund not started.
    #[default]
    Pending,
    /// Refund transfer in progress.
    Processing,
    /// Refund paid out.
    Completed,
}

impl RefundStatus {
    /// All refund statuses in dashboard display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Processing, Self::Completed];

    /// Returns the storage representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
        }
    }

    /// Returns the Korean display label used by the admin dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "대기",
            Self::Processing => "처리중",
            Self::Completed => "완료",
        }
    }
}

impl FromStr for RefundStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidRefundStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Venue usage category for a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    /// Performances and concerts.
    Performance,
    /// Corporate or private events.
    Event,
    /// Recording or rehearsal use.
    Studio,
}

impl VenueType {
    /// All venue types in dashboard display order.
    pub const ALL: [Self; 3] = [Self::Performance, Self::Event, Self::Studio];

    /// Returns the storage representation of this venue type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Event => "event",
            Self::Studio => "studio",
        }
    }
}

impl FromStr for VenueType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "performance" => Ok(Self::Performance),
            "event" => Ok(Self::Event),
            "studio" => Ok(Self::Studio),
            _ => Err(DomainError::InvalidVenueType(s.to_string())),
        }
    }
}

impl std::fmt::Display for VenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregation period for the statistics dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsPeriod {
    /// Trailing seven days, one bucket per day.
    Weekly,
    /// Trailing six calendar months including the current one.
    #[default]
    Monthly,
    /// The current calendar year, one bucket per month.
    Yearly,
}

impl StatsPeriod {
    /// Parses a query-string period selector.
    ///
    /// Any value other than `weekly` or `yearly` selects the monthly
    /// default, matching the behavior the dashboard clients rely on.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("weekly") => Self::Weekly,
            Some("yearly") => Self::Yearly,
            _ => Self::Monthly,
        }
    }
}

/// Raw reservation submission as received from the public form.
///
/// Every field is optional at this boundary so the validation engine can
/// report the complete list of violations in one pass instead of failing
/// on the first missing field during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationSubmission {
    /// Submitter name.
    pub name: Option<String>,
    /// Organization or team name.
    pub organization: Option<String>,
    /// Contact phone number, hyphens and spaces allowed.
    pub phone: Option<String>,
    /// Requested rental date (`YYYY-MM-DD`).
    pub rental_date: Option<String>,
    /// Rental start time (`HH:MM`).
    pub start_time: Option<String>,
    /// Rental end time (`HH:MM`).
    pub end_time: Option<String>,
    /// Number of performers (1..=200).
    pub num_performers: Option<i64>,
    /// Free-form description of the rental.
    pub description: Option<String>,
    /// How the submitter found the venue.
    pub referral_sources: Option<Vec<String>>,
    /// Venue usage category.
    pub venue_type: Option<String>,
    /// Selected add-on options.
    pub options: Option<ReservationOptions>,
}

/// Add-on options selected on a reservation.
///
/// Absent flags deserialize to `false` and contribute nothing to the
/// derived price.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ReservationOptions {
    /// Extended audience capacity.
    pub extra_capacity: bool,
    /// Multitrack recording.
    pub multitrack: bool,
    /// Personal monitor speakers.
    pub personal_monitor: bool,
    /// An additional sound operator.
    pub extra_operator: bool,
    /// Hours booked for the additional operator (1..=12 when selected).
    pub extra_operator_hours: Option<i64>,
    /// Bar operation during the event.
    pub bar_operation: bool,
    /// Stage prompter.
    pub prompter: bool,
    /// Tax invoice issuance.
    pub tax_invoice: bool,
}

/// Raw site-visit submission as received from the public form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteVisitSubmission {
    /// Submitter name.
    pub name: Option<String>,
    /// Organization or team name.
    pub organization: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Desired rental date the visit is scoping (`YYYY-MM-DD`).
    pub rental_date: Option<String>,
    /// Desired rental start time (`HH:MM`).
    pub start_time: Option<String>,
    /// Desired rental end time (`HH:MM`).
    pub end_time: Option<String>,
    /// Intended usage tags; at least one is required.
    pub purposes: Option<Vec<String>>,
    /// Free-form description of the intended usage.
    pub purpose_detail: Option<String>,
    /// Whether a reservation already exists for this visit.
    pub has_rental: Option<bool>,
}

/// Raw settlement (refund) submission as received from the public form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettlementSubmission {
    /// Submitter name.
    pub name: Option<String>,
    /// Date of the rental being settled (`YYYY-MM-DD`).
    pub rental_date: Option<String>,
    /// Refund destination bank.
    pub bank_name: Option<String>,
    /// Account holder name.
    pub account_holder: Option<String>,
    /// Account number.
    pub account_number: Option<String>,
    /// Satisfaction rating (1..=5).
    pub rating: Option<i64>,
    /// What went well.
    pub good_points: Option<String>,
    /// What could improve.
    pub improvements: Option<String>,
    /// Consent to repost on Instagram.
    pub instagram_consent: Option<bool>,
    /// Instagram repost request text.
    pub instagram_request: Option<String>,
}
