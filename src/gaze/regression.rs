// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Post-processing applied to raw tracker estimates

use super::GazeError;
use kurbo::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum Regression {
    /// Pass estimates through untouched
    Identity,
    /// Exponential moving average; `factor` weighs the newest estimate
    Smoothed { factor: f64, last: Option<Point> },
}

impl Regression {
    pub fn by_name(name: &str, smoothing: f64) -> Result<Self, GazeError> {
        match name {
            "identity" => Ok(Self::Identity),
            "smoothed" => Ok(Self::smoothed(smoothing)),
            other => Err(GazeError::UnknownRegression(other.to_string())),
        }
    }

    pub fn smoothed(factor: f64) -> Self {
        Self::Smoothed {
            factor: factor.clamp(f64::EPSILON, 1.0),
            last: None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Smoothed { .. } => "smoothed",
        }
    }

    /// Forget history, so the next estimate is taken as-is.
    pub fn reset(&mut self) {
        if let Self::Smoothed { last, .. } = self {
            *last = None;
        }
    }

    pub fn apply(&mut self, raw: Point) -> Point {
        match self {
            Self::Identity => raw,
            Self::Smoothed { factor, last } => {
                let next = match *last {
                    Some(prev) => prev.lerp(raw, *factor),
                    None => raw,
                };
                *last = Some(next);
                next
            }
        }
    }
}
