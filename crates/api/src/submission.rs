// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public submission services.
//!
//! Each submission runs validate → normalize → derive → insert. On any
//! violation the full ordered message list is reported and nothing is
//! written; on success exactly one durable write happens and a minimal
//! created-record projection is returned.

use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;
use tracing::info;

use maru_domain::{
    ReservationOptions, ReservationSubmission, SettlementSubmission, SiteVisitSubmission,
    additional_price, normalize_phone, rental_hours, validate_reservation, validate_settlement,
    validate_site_visit,
};
use maru_persistence::{NewReservation, NewSettlement, NewSiteVisit, Store};

use crate::error::ApiError;
use crate::request_response::{ReservationCreated, SubmissionCreated, SubmissionOutcome};

/// Formats the current UTC time for the `submitted_at` column.
fn now_utc_iso() -> Result<String, ApiError> {
    OffsetDateTime::now_utc()
        .format(&Iso8601::DEFAULT)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })
}

/// Trims an optional string, mapping blank values to `None`.
fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Submits a reservation request.
///
/// # Errors
///
/// Returns `ValidationFailed` with the complete ordered message list
/// when any rule is violated (no write happens), or an internal error
/// when the insert fails.
pub fn submit_reservation(
    store: &mut Store,
    input: &ReservationSubmission,
) -> Result<SubmissionOutcome<ReservationCreated>, ApiError> {
    let today = OffsetDateTime::now_utc().date();
    let errors: Vec<String> = validate_reservation(input, today);
    if !errors.is_empty() {
        return Err(ApiError::ValidationFailed { errors });
    }

    let start_time: String = input.start_time.clone().unwrap_or_default();
    let end_time: String = input.end_time.clone().unwrap_or_default();
    let options: ReservationOptions = input.options.unwrap_or_default();
    let price: i64 = additional_price(&options);

    // The hour count is only meaningful while the operator option is
    // selected; it is stored as zero otherwise.
    let operator_hours: i32 = if options.extra_operator {
        i32::try_from(options.extra_operator_hours.unwrap_or(0)).unwrap_or(0)
    } else {
        0
    };

    let new: NewReservation = NewReservation {
        name: input.name.as_deref().unwrap_or_default().trim().to_string(),
        organization: normalize_optional(input.organization.as_deref()),
        phone: normalize_phone(input.phone.as_deref().unwrap_or_default()),
        rental_date: input.rental_date.clone().unwrap_or_default(),
        rental_hours: rental_hours(&start_time, &end_time),
        start_time,
        end_time,
        num_performers: i32::try_from(input.num_performers.unwrap_or(0)).unwrap_or(0),
        description: normalize_optional(input.description.as_deref()),
        referral_sources: input.referral_sources.clone().unwrap_or_default(),
        venue_type: normalize_optional(input.venue_type.as_deref()),
        opt_extra_capacity: options.extra_capacity,
        opt_multitrack: options.multitrack,
        opt_personal_monitor: options.personal_monitor,
        opt_extra_operator: options.extra_operator,
        opt_extra_operator_hours: operator_hours,
        opt_bar_operation: options.bar_operation,
        opt_prompter: options.prompter,
        opt_tax_invoice: options.tax_invoice,
        additional_price: price,
        total_price: price,
        submitted_at: now_utc_iso()?,
    };

    let record = store.insert_reservation(&new)?;
    info!(
        reservation_id = record.id,
        total_price = record.total_price,
        "Reservation submitted"
    );

    Ok(SubmissionOutcome {
        record: ReservationCreated {
            id: record.id,
            total_price: record.total_price,
            submitted_at: record.submitted_at,
        },
        message: String::from("예약 신청이 완료되었습니다."),
    })
}

/// Submits a site-visit request.
///
/// # Errors
///
/// Returns `ValidationFailed` with the complete ordered message list
/// when any rule is violated (no write happens), or an internal error
/// when the insert fails.
pub fn submit_site_visit(
    store: &mut Store,
    input: &SiteVisitSubmission,
) -> Result<SubmissionOutcome<SubmissionCreated>, ApiError> {
    let errors: Vec<String> = validate_site_visit(input);
    if !errors.is_empty() {
        return Err(ApiError::ValidationFailed { errors });
    }

    let new: NewSiteVisit = NewSiteVisit {
        name: input.name.as_deref().unwrap_or_default().trim().to_string(),
        organization: normalize_optional(input.organization.as_deref()),
        phone: normalize_phone(input.phone.as_deref().unwrap_or_default()),
        rental_date: input.rental_date.clone().unwrap_or_default(),
        start_time: input.start_time.clone().unwrap_or_default(),
        end_time: input.end_time.clone().unwrap_or_default(),
        purposes: input.purposes.clone().unwrap_or_default(),
        purpose_detail: input
            .purpose_detail
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        has_rental: input.has_rental.unwrap_or_default(),
        submitted_at: now_utc_iso()?,
    };

    let record = store.insert_site_visit(&new)?;
    info!(visit_id = record.id, "Site visit submitted");

    Ok(SubmissionOutcome {
        record: SubmissionCreated {
            id: record.id,
            submitted_at: record.submitted_at,
        },
        message: String::from("답사 예약이 완료되었습니다."),
    })
}

/// Submits a settlement (refund) request.
///
/// Settlement media is handled by a separate storage flow; the record
/// is always created with an empty media list.
///
/// # Errors
///
/// Returns `ValidationFailed` with the complete ordered message list
/// when any rule is violated (no write happens), or an internal error
/// when the insert fails.
pub fn submit_settlement(
    store: &mut Store,
    input: &SettlementSubmission,
) -> Result<SubmissionOutcome<SubmissionCreated>, ApiError> {
    let errors: Vec<String> = validate_settlement(input);
    if !errors.is_empty() {
        return Err(ApiError::ValidationFailed { errors });
    }

    let new: NewSettlement = NewSettlement {
        name: input.name.as_deref().unwrap_or_default().trim().to_string(),
        rental_date: input.rental_date.clone().unwrap_or_default(),
        bank_name: input
            .bank_name
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        account_holder: input
            .account_holder
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        account_number: input
            .account_number
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        rating: i32::try_from(input.rating.unwrap_or(0)).unwrap_or(0),
        good_points: normalize_optional(input.good_points.as_deref()),
        improvements: normalize_optional(input.improvements.as_deref()),
        instagram_consent: input.instagram_consent.unwrap_or_default(),
        instagram_request: normalize_optional(input.instagram_request.as_deref()),
        submitted_at: now_utc_iso()?,
    };

    let record = store.insert_settlement(&new)?;
    info!(settlement_id = record.id, "Settlement submitted");

    Ok(SubmissionOutcome {
        record: SubmissionCreated {
            id: record.id,
            submitted_at: record.submitted_at,
        },
        message: String::from("정산 요청이 완료되었습니다."),
    })
}
