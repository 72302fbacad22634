use thiserror::Error;

/// 8-bit RGB color as used by the spreadsheet palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// Channels scaled to `0.0..=1.0`, in `(red, green, blue)` order.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.red) / 255.0,
            f32::from(self.green) / 255.0,
            f32::from(self.blue) / 255.0,
        )
    }
}

pub const RED: Rgb = Rgb::new(204, 0, 0);
pub const ORANGE: Rgb = Rgb::new(255, 102, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 153);
pub const GREEN: Rgb = Rgb::new(0, 102, 0);
pub const PURPLE: Rgb = Rgb::new(153, 0, 153);

/// Colors values less than `boundary`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub boundary: f64,
    pub color: Rgb,
}

/// Ordered bands plus the color for values at or above the last boundary.
///
/// A value takes the color of the first band whose boundary it is strictly
/// less than.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdScale {
    pub bands: &'static [Band],
    pub above: Rgb,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThresholdScaleError {
    #[error("Threshold scale has no bands")]
    Empty,
    #[error("Boundary {0} is not a finite number")]
    NonFinite(f64),
    #[error("Boundary {next} does not follow {previous} in increasing order")]
    NotIncreasing { previous: f64, next: f64 },
}

pub const SIGNIFICANCE: ThresholdScale = ThresholdScale {
    bands: &[
        Band { boundary: 1.0, color: RED },
        Band { boundary: 2.0, color: ORANGE },
        Band { boundary: 2.3, color: BLUE },
    ],
    above: GREEN,
};

pub const PURITY: ThresholdScale = ThresholdScale {
    bands: &[
        Band { boundary: 0.4, color: RED },
        Band { boundary: 0.5, color: ORANGE },
        Band { boundary: 0.75, color: BLUE },
        Band { boundary: 1.0, color: GREEN },
    ],
    above: PURPLE,
};

impl ThresholdScale {
    pub fn validate(&self) -> Result<(), ThresholdScaleError> {
        if self.bands.is_empty() {
            return Err(ThresholdScaleError::Empty);
        }

        if let Some(band) = self.bands.iter().find(|band| !band.boundary.is_finite()) {
            return Err(ThresholdScaleError::NonFinite(band.boundary));
        }

        for pair in self.bands.windows(2) {
            if pair[1].boundary <= pair[0].boundary {
                return Err(ThresholdScaleError::NotIncreasing {
                    previous: pair[0].boundary,
                    next: pair[1].boundary,
                });
            }
        }

        Ok(())
    }

    /// Last boundary, the lower bound of the catch-all color.
    pub fn ceiling(&self) -> Option<f64> {
        self.bands.last().map(|band| band.boundary)
    }

    /// Color the conditional rules built from this scale give to `value`.
    pub fn color_for(&self, value: f64) -> Rgb {
        self.bands
            .iter()
            .find(|band| value < band.boundary)
            .map_or(self.above, |band| band.color)
    }
}
