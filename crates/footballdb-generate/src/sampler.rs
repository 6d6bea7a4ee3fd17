use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::locales::LocaleKey;

/// Source of random field values, one method per field kind.
///
/// Implementations decide where values come from; callers only rely on the
/// ranges: `index` is uniform over `0..len`, `int_in` and `date_in` are
/// uniform over their inclusive bounds.
pub trait Sampler: Send {
    fn team_name(&mut self) -> String;
    fn city(&mut self) -> String;
    /// Adjective used to name home stadiums.
    fn stadium_adjective(&mut self) -> String;
    /// Noun used to name match venues.
    fn stadium_noun(&mut self) -> String;
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    fn nationality(&mut self) -> String;
    /// `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32;
    /// `start` must not be after `end`.
    fn date_in(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate;
}

/// `Sampler` backed by the `fake` crate over a ChaCha8 stream.
pub struct FakeSampler {
    rng: ChaCha8Rng,
    locale: LocaleKey,
}

macro_rules! localized {
    ($self:ident, $module:ident :: $faker:ident) => {{
        let value: String = match $self.locale {
            LocaleKey::EnUs => fake::faker::$module::en::$faker().fake_with_rng(&mut $self.rng),
            LocaleKey::PtBr => {
                fake::faker::$module::pt_br::$faker().fake_with_rng(&mut $self.rng)
            }
        };
        value
    }};
}

impl FakeSampler {
    /// Seeded samplers produce the same sequence for the same seed and locale.
    pub fn new(locale: LocaleKey, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            locale,
        }
    }
}

impl Sampler for FakeSampler {
    fn team_name(&mut self) -> String {
        localized!(self, company::CompanyName)
    }

    fn city(&mut self) -> String {
        localized!(self, address::CityName)
    }

    fn stadium_adjective(&mut self) -> String {
        localized!(self, company::BsAdj)
    }

    fn stadium_noun(&mut self) -> String {
        localized!(self, company::BsNoun)
    }

    fn first_name(&mut self) -> String {
        localized!(self, name::FirstName)
    }

    fn last_name(&mut self) -> String {
        localized!(self, name::LastName)
    }

    fn nationality(&mut self) -> String {
        localized!(self, address::CountryName)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.rng.random_range(range)
    }

    fn date_in(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days().max(0) as u64;
        let offset = self.rng.random_range(0..=span);
        start.checked_add_days(Days::new(offset)).unwrap_or(end)
    }
}
