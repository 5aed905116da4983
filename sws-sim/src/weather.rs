//! Per-day seasonal draws. Every function here is total: any date and
//! any parameter values produce a finite number.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Gamma, StandardNormal};
use std::f64::consts::PI;
use sws_core::ReservoirModel;
use sws_utils::dates::{cycle_fraction, day_of_year};
use sws_utils::seasons::{is_monsoon, is_summer, is_winter};

/// Daily mean temperature baseline, degrees C
pub const BASE_TEMPERATURE_C: f64 = 30.0;
/// Mean water-table depth around which the seasonal cycle swings, mbgl
pub const BASE_GROUNDWATER_MBGL: f64 = 15.0;
pub const GROUNDWATER_AMPLITUDE_M: f64 = 5.0;
/// The water table never rises above this depth, mbgl
pub const MIN_GROUNDWATER_MBGL: f64 = 2.0;
pub const BASE_RESERVOIR_PCT: f64 = 40.0;
pub const SUMMER_DEMAND_FACTOR: f64 = 1.2;

/// Rain regime of one season: a day is dry with `dry_probability`,
/// otherwise the amount is Gamma(`shape`, `scale`) distributed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainSpell {
    pub dry_probability: f64,
    pub shape: f64,
    pub scale: f64,
}

/// June to September: rain on most days, heavy tail.
pub const MONSOON_RAIN: RainSpell = RainSpell {
    dry_probability: 0.3,
    shape: 2.0,
    scale: 10.0,
};

/// Rest of the year: mostly dry, light showers.
pub const DRY_SEASON_RAIN: RainSpell = RainSpell {
    dry_probability: 0.9,
    shape: 1.0,
    scale: 2.0,
};

impl RainSpell {
    /// Rainfall for one day in mm, zero on dry days.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if rng.gen::<f64>() > self.dry_probability {
            self.sample_wet(rng)
        } else {
            0.0
        }
    }

    /// Rainfall amount assuming the day is wet. Parameters the gamma
    /// distribution rejects yield no rain.
    pub fn sample_wet<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match Gamma::new(self.shape, self.scale) {
            Ok(gamma) => gamma.sample(rng),
            Err(_) => 0.0,
        }
    }
}

/// Draw from N(mean, sd).
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + sd * z
}

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn rainfall<R: Rng + ?Sized>(rng: &mut R, date: &NaiveDate) -> f64 {
    let spell = if is_monsoon(date.month()) {
        MONSOON_RAIN
    } else {
        DRY_SEASON_RAIN
    };
    round_to(spell.sample(rng), 1)
}

pub fn temperature<R: Rng + ?Sized>(rng: &mut R, date: &NaiveDate) -> f64 {
    let month = date.month();
    let temp = if is_summer(month) {
        BASE_TEMPERATURE_C + gaussian(rng, 5.0, 2.0)
    } else if is_winter(month) {
        BASE_TEMPERATURE_C - gaussian(rng, 8.0, 2.0)
    } else {
        BASE_TEMPERATURE_C + gaussian(rng, 0.0, 2.0)
    };
    round_to(temp, 1)
}

/// Reservoir fill in percent, clamped to [0, 100].
pub fn reservoir<R: Rng + ?Sized>(rng: &mut R, date: &NaiveDate, model: ReservoirModel) -> f64 {
    let monsoon = is_monsoon(date.month());
    let progress = cycle_fraction(date);
    let level = match model {
        ReservoirModel::MonsoonRefill => {
            if monsoon {
                BASE_RESERVOIR_PCT + gaussian(rng, 30.0, 10.0)
            } else {
                BASE_RESERVOIR_PCT - progress * 30.0
            }
        }
        ReservoirModel::LinearDrift => {
            let drift = if monsoon { 30.0 } else { -30.0 };
            BASE_RESERVOIR_PCT + drift * progress + gaussian(rng, 0.0, 5.0)
        }
    };
    round_to(level.clamp(0.0, 100.0), 1)
}

/// Water-table depth in mbgl: a one-year sinusoid plus noise, never
/// shallower than [`MIN_GROUNDWATER_MBGL`].
pub fn groundwater<R: Rng + ?Sized>(rng: &mut R, date: &NaiveDate) -> f64 {
    let phase = f64::from(day_of_year(date)) / 365.0 * 2.0 * PI;
    let depth = BASE_GROUNDWATER_MBGL + phase.sin() * GROUNDWATER_AMPLITUDE_M + gaussian(rng, 0.0, 0.5);
    round_to(depth.max(MIN_GROUNDWATER_MBGL), 2)
}

pub fn demand<R: Rng + ?Sized>(rng: &mut R, date: &NaiveDate, base_demand_mld: f64) -> f64 {
    let factor = if is_summer(date.month()) {
        SUMMER_DEMAND_FACTOR
    } else {
        1.0
    };
    round_to(base_demand_mld * factor + gaussian(rng, 0.0, 5.0), 1)
}
