// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A life-stage bucket used as the sole eligibility key for topics.
///
/// Variants are declared in life order so `Ord` follows the calendar:
/// `Prenatal < Newborn < ... < Postgraduate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    /// Expecting parents.
    Prenatal,
    /// Newborn.
    Newborn,
    /// One year old.
    #[serde(rename = "Age 1")]
    Age1,
    /// Two years old.
    #[serde(rename = "Age 2")]
    Age2,
    /// Three years old.
    #[serde(rename = "Age 3")]
    Age3,
    /// Pre-kindergarten.
    #[serde(rename = "Pre-K")]
    PreK,
    /// Kindergarten.
    Kindergarten,
    /// 1st grade.
    #[serde(rename = "1st grade")]
    Grade1,
    /// 2nd grade.
    #[serde(rename = "2nd grade")]
    Grade2,
    /// 3rd grade.
    #[serde(rename = "3rd grade")]
    Grade3,
    /// 4th grade.
    #[serde(rename = "4th grade")]
    Grade4,
    /// 5th grade.
    #[serde(rename = "5th grade")]
    Grade5,
    /// 6th grade.
    #[serde(rename = "6th grade")]
    Grade6,
    /// 7th grade.
    #[serde(rename = "7th grade")]
    Grade7,
    /// 8th grade.
    #[serde(rename = "8th grade")]
    Grade8,
    /// 9th grade.
    #[serde(rename = "9th grade")]
    Grade9,
    /// 10th grade.
    #[serde(rename = "10th grade")]
    Grade10,
    /// 11th grade.
    #[serde(rename = "11th grade")]
    Grade11,
    /// 12th grade.
    #[serde(rename = "12th grade")]
    Grade12,
    /// After high school.
    Postgraduate,
}

impl AgeBand {
    /// Every age band, in life order.
    pub const ALL: [Self; 20] = [
        Self::Prenatal,
        Self::Newborn,
        Self::Age1,
        Self::Age2,
        Self::Age3,
        Self::PreK,
        Self::Kindergarten,
        Self::Grade1,
        Self::Grade2,
        Self::Grade3,
        Self::Grade4,
        Self::Grade5,
        Self::Grade6,
        Self::Grade7,
        Self::Grade8,
        Self::Grade9,
        Self::Grade10,
        Self::Grade11,
        Self::Grade12,
        Self::Postgraduate,
    ];

    /// Returns the display label, e.g. `"11th grade"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prenatal => "Prenatal",
            Self::Newborn => "Newborn",
            Self::Age1 => "Age 1",
            Self::Age2 => "Age 2",
            Self::Age3 => "Age 3",
            Self::PreK => "Pre-K",
            Self::Kindergarten => "Kindergarten",
            Self::Grade1 => "1st grade",
            Self::Grade2 => "2nd grade",
            Self::Grade3 => "3rd grade",
            Self::Grade4 => "4th grade",
            Self::Grade5 => "5th grade",
            Self::Grade6 => "6th grade",
            Self::Grade7 => "7th grade",
            Self::Grade8 => "8th grade",
            Self::Grade9 => "9th grade",
            Self::Grade10 => "10th grade",
            Self::Grade11 => "11th grade",
            Self::Grade12 => "12th grade",
            Self::Postgraduate => "Postgraduate",
        }
    }
}

impl FromStr for AgeBand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::UnknownAgeBand(s.to_string()))
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every band from `first` through `last`, inclusive.
///
/// Used to keep the eligibility table readable; most topics cover a
/// contiguous run of grades.
#[must_use]
pub fn band_range(first: AgeBand, last: AgeBand) -> Vec<AgeBand> {
    AgeBand::ALL
        .iter()
        .copied()
        .filter(|band| *band >= first && *band <= last)
        .collect()
}
