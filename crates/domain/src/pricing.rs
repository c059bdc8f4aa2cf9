// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::ReservationOptions;

/// Per-option surcharge table in KRW.
///
/// This is the single source of truth for option pricing; validation
/// thresholds and price derivation both read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionPrices {
    /// Extended audience capacity surcharge.
    pub extra_capacity: i64,
    /// Multitrack recording surcharge.
    pub multitrack: i64,
    /// Personal monitor surcharge.
    pub personal_monitor: i64,
    /// Additional operator surcharge per booked hour.
    pub extra_operator_per_hour: i64,
}

/// The current surcharge table.
pub const OPTION_PRICES: OptionPrices = OptionPrices {
    extra_capacity: 100_000,
    multitrack: 100_000,
    personal_monitor: 100_000,
    extra_operator_per_hour: 20_000,
};

/// Converts a validated `HH:MM` clock time to minutes since midnight.
///
/// The caller guarantees the input already passed the time-format rule;
/// malformed input degrades to zero components rather than panicking.
#[must_use]
pub fn to_minutes(time: &str) -> u32 {
    let (hours, minutes) = time.split_once(':').unwrap_or(("0", "0"));
    let hours: u32 = hours.parse().unwrap_or(0);
    let minutes: u32 = minutes.parse().unwrap_or(0);
    hours * 60 + minutes
}

/// Computes the rental duration in hours from validated `HH:MM` times.
///
/// Durations are fractional (a 09:00-14:30 rental is 5.5 hours). Rentals
/// crossing midnight are not representable; the end time must be later
/// than the start time on the same day.
#[must_use]
pub fn rental_hours(start_time: &str, end_time: &str) -> f64 {
    (f64::from(to_minutes(end_time)) - f64::from(to_minutes(start_time))) / 60.0
}

/// Computes the additional price for the selected option set.
///
/// Pure and additive over disjoint option sets: unselected options
/// contribute zero, and the extra-operator surcharge scales with the
/// booked hour count.
#[must_use]
pub fn additional_price(options: &ReservationOptions) -> i64 {
    let mut total: i64 = 0;
    if options.extra_capacity {
        total += OPTION_PRICES.extra_capacity;
    }
    if options.multitrack {
        total += OPTION_PRICES.multitrack;
    }
    if options.personal_monitor {
        total += OPTION_PRICES.personal_monitor;
    }
    if options.extra_operator {
        let hours: i64 = options.extra_operator_hours.unwrap_or(0).max(0);
        total += OPTION_PRICES.extra_operator_per_hour * hours;
    }
    total
}
