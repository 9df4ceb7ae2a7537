// ABOUTME: Standard race distances and their names as entered by runners
// ABOUTME: Maps "5K", "Half Marathon", etc. to meters for the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

use crate::constants::distances::{
    FIFTEEN_K_METERS, FIVE_K_METERS, HALF_MARATHON_METERS, MARATHON_METERS, TEN_K_METERS,
};
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named race distances with a fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardDistance {
    /// 5 kilometers
    #[serde(rename = "5k")]
    FiveK,
    /// 10 kilometers
    #[serde(rename = "10k")]
    TenK,
    /// 15 kilometers
    #[serde(rename = "15k")]
    FifteenK,
    /// Half marathon
    HalfMarathon,
    /// Marathon
    Marathon,
}

impl StandardDistance {
    /// All standard distances, shortest first
    pub const ALL: [Self; 5] = [
        Self::FiveK,
        Self::TenK,
        Self::FifteenK,
        Self::HalfMarathon,
        Self::Marathon,
    ];

    /// Distance in meters
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::FiveK => FIVE_K_METERS,
            Self::TenK => TEN_K_METERS,
            Self::FifteenK => FIFTEEN_K_METERS,
            Self::HalfMarathon => HALF_MARATHON_METERS,
            Self::Marathon => MARATHON_METERS,
        }
    }

    /// Display name as shown to runners
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::FifteenK => "15K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }
}

impl fmt::Display for StandardDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StandardDistance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "15k" => Ok(Self::FifteenK),
            "half marathon" | "half" => Ok(Self::HalfMarathon),
            "marathon" => Ok(Self::Marathon),
            _ => Err(ValidationError::UnknownDistance {
                input: s.to_owned(),
            }),
        }
    }
}
