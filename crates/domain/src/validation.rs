// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission validation rules.
//!
//! Validators collect every violated rule instead of failing fast so the
//! submitter sees all problems in a single round trip. Messages are the
//! user-facing Korean strings the public forms display verbatim, emitted
//! in declared rule order.

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::pricing::to_minutes;
use crate::types::{ReservationSubmission, SettlementSubmission, SiteVisitSubmission, VenueType};

/// Referral sources the reservation form offers.
pub const ALLOWED_REFERRALS: [&str; 5] =
    ["스페이스클라우드", "아워플레이스", "네이버", "인스타", "기타"];

const MAX_NAME_LENGTH: usize = 50;
const MAX_DESCRIPTION_LENGTH: usize = 500;
const MAX_PERFORMERS: i64 = 200;
const MAX_OPERATOR_HOURS: i64 = 12;
const MIN_RENTAL_MINUTES: i64 = 5 * 60;

/// Korean mobile numbers: carrier prefix `01[016789]` plus 7-8 digits.
#[allow(clippy::expect_used)]
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^01[016789]\d{7,8}$").expect("static pattern"));

/// 24-hour clock times, zero-padded (`09:30`, `23:59`).
#[allow(clippy::expect_used)]
static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("static pattern"));

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Strips the formatting characters callers are allowed to include in a
/// phone number, leaving digits only.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Checks a phone number against the Korean mobile pattern after
/// stripping hyphens and spaces.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(&normalize_phone(phone))
}

fn is_valid_time(time: &str) -> bool {
    TIME_REGEX.is_match(time)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validates a reservation submission against the current day.
///
/// Returns the complete ordered list of violated-rule messages; an empty
/// list means the submission is acceptable to persist.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn validate_reservation(input: &ReservationSubmission, today: Date) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    // Rule: name is required and at most 50 characters after trimming
    match input.name.as_deref().map(str::trim) {
        None | Some("") => errors.push(String::from("성함은 필수입니다.")),
        Some(name) if name.chars().count() > MAX_NAME_LENGTH => {
            errors.push(format!("성함은 {MAX_NAME_LENGTH}자 이내로 입력해주세요."));
        }
        Some(_) => {}
    }

    // Rule: phone is required and must match the Korean mobile pattern
    match input.phone.as_deref() {
        None | Some("") => errors.push(String::from("전화번호는 필수입니다.")),
        Some(phone) => {
            if !is_valid_phone(phone) {
                errors.push(String::from("올바른 전화번호 형식이 아닙니다."));
            }
        }
    }

    // Rule: rental date is required and must be strictly after today
    match input.rental_date.as_deref() {
        None | Some("") => errors.push(String::from("대관날짜는 필수입니다.")),
        Some(raw) => match Date::parse(raw, DATE_FORMAT) {
            Ok(date) if date > today => {}
            _ => errors.push(String::from("대관날짜는 오늘 이후여야 합니다.")),
        },
    }

    // Rule: start and end times must each be well-formed 24-hour HH:MM
    let start_ok: bool = input.start_time.as_deref().is_some_and(is_valid_time);
    if !start_ok {
        errors.push(String::from("시작 시간이 올바르지 않습니다."));
    }
    let end_ok: bool = input.end_time.as_deref().is_some_and(is_valid_time);
    if !end_ok {
        errors.push(String::from("종료 시간이 올바르지 않습니다."));
    }

    // Rule: when both times are well-formed, the rental must span at
    // least five hours. The end time must be later the same day; spans
    // crossing midnight are not representable.
    if start_ok && end_ok {
        if let (Some(start), Some(end)) = (input.start_time.as_deref(), input.end_time.as_deref()) {
            let duration: i64 = i64::from(to_minutes(end)) - i64::from(to_minutes(start));
            if duration < MIN_RENTAL_MINUTES {
                errors.push(String::from("대관시간은 최소 5시간 이상이어야 합니다."));
            }
        }
    }

    // Rule: performer count is a positive integer capped at 200
    match input.num_performers {
        None => errors.push(String::from("공연자 인원은 1명 이상이어야 합니다.")),
        Some(n) if n < 1 => errors.push(String::from("공연자 인원은 1명 이상이어야 합니다.")),
        Some(n) if n > MAX_PERFORMERS => {
            errors.push(format!("공연자 인원은 {MAX_PERFORMERS}명 이하여야 합니다."));
        }
        Some(_) => {}
    }

    // Rule: description, when present, is capped at 500 characters
    if let Some(description) = input.description.as_deref() {
        if description.trim().chars().count() > MAX_DESCRIPTION_LENGTH {
            errors.push(format!(
                "대관 설명은 {MAX_DESCRIPTION_LENGTH}자 이내로 입력해주세요."
            ));
        }
    }

    // Rule: every referral source must come from the fixed allow-list
    if let Some(sources) = &input.referral_sources {
        for source in sources {
            if !ALLOWED_REFERRALS.contains(&source.as_str()) {
                errors.push(format!("유입경로 \"{source}\"는 유효하지 않습니다."));
            }
        }
    }

    // Rule: venue type, when given, must be one of the fixed categories
    if let Some(venue_type) = input.venue_type.as_deref() {
        if !venue_type.trim().is_empty() && VenueType::from_str(venue_type).is_err() {
            errors.push(String::from("유효하지 않은 공연장 유형입니다."));
        }
    }

    // Rule: selecting the extra operator requires an hour count in 1..=12
    if let Some(options) = &input.options {
        if options.extra_operator {
            match options.extra_operator_hours {
                None => errors.push(String::from("추가 오퍼레이터 선택 시 시간을 입력해주세요.")),
                Some(hours) if hours < 1 => {
                    errors.push(String::from("추가 오퍼레이터 선택 시 시간을 입력해주세요."));
                }
                Some(hours) if hours > MAX_OPERATOR_HOURS => {
                    errors.push(format!(
                        "추가 오퍼레이터 시간은 {MAX_OPERATOR_HOURS}시간 이하여야 합니다."
                    ));
                }
                Some(_) => {}
            }
        }
    }

    errors
}

/// Validates a site-visit submission.
///
/// Site visits carry presence checks only; there is no cross-field
/// derivation.
#[must_use]
pub fn validate_site_visit(input: &SiteVisitSubmission) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    // Rule: name is required
    if is_blank(input.name.as_deref()) {
        errors.push(String::from("성함을 입력해주세요."));
    }

    // Rule: phone is required
    if is_blank(input.phone.as_deref()) {
        errors.push(String::from("연락처를 입력해주세요."));
    }

    // Rule: desired rental date is required
    if is_blank(input.rental_date.as_deref()) {
        errors.push(String::from("대관 희망 날짜를 선택해주세요."));
    }

    // Rule: both desired times are required
    if is_blank(input.start_time.as_deref()) || is_blank(input.end_time.as_deref()) {
        errors.push(String::from("대관 희망 시간을 선택해주세요."));
    }

    // Rule: at least one usage purpose is required
    if input.purposes.as_ref().is_none_or(Vec::is_empty) {
        errors.push(String::from("사용목적을 선택해주세요."));
    }

    // Rule: the usage description is required
    if is_blank(input.purpose_detail.as_deref()) {
        errors.push(String::from("사용설명을 입력해주세요."));
    }

    // Rule: the existing-reservation flag must be answered
    if input.has_rental.is_none() {
        errors.push(String::from("대관 유무를 선택해주세요."));
    }

    errors
}

/// Validates a settlement (refund) submission.
#[must_use]
pub fn validate_settlement(input: &SettlementSubmission) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    // Rule: name is required
    if is_blank(input.name.as_deref()) {
        errors.push(String::from("성함을 입력해주세요."));
    }

    // Rule: rental date is required
    if is_blank(input.rental_date.as_deref()) {
        errors.push(String::from("대관날짜를 선택해주세요."));
    }

    // Rule: bank name is required
    if is_blank(input.bank_name.as_deref()) {
        errors.push(String::from("은행명을 입력해주세요."));
    }

    // Rule: account holder is required
    if is_blank(input.account_holder.as_deref()) {
        errors.push(String::from("예금주명을 입력해주세요."));
    }

    // Rule: account number is required
    if is_blank(input.account_number.as_deref()) {
        errors.push(String::from("계좌번호를 입력해주세요."));
    }

    // Rule: rating must be between 1 and 5
    if !input.rating.is_some_and(|r| (1..=5).contains(&r)) {
        errors.push(String::from("만족도를 선택해주세요."));
    }

    errors
}
