use crate::foundation::error::{UnveilError, UnveilResult};

/// Clamped two-point linear map from scroll offset to an output scalar.
///
/// The workhorse of parallax: offsets below `input[0]` pin to `output[0]`,
/// offsets above `input[1]` pin to `output[1]`, and offsets in between
/// interpolate linearly. A map is a pure value; any number of maps may read
/// the same scroll offset with no shared state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMap {
    /// Scroll offset range, non-decreasing.
    pub input: [f64; 2],
    /// Output range; may run in either direction.
    pub output: [f64; 2],
}

impl ScrollMap {
    /// Build a validated map.
    pub fn new(input: [f64; 2], output: [f64; 2]) -> UnveilResult<Self> {
        let map = Self { input, output };
        map.validate()?;
        Ok(map)
    }

    /// Check range invariants.
    pub fn validate(&self) -> UnveilResult<()> {
        if !(self.input.iter().all(|v| v.is_finite()) && self.output.iter().all(|v| v.is_finite()))
        {
            return Err(UnveilError::validation("ScrollMap ranges must be finite"));
        }
        if self.input[0] > self.input[1] {
            return Err(UnveilError::validation(
                "ScrollMap input range must be non-decreasing",
            ));
        }
        Ok(())
    }

    /// Map `offset` through the clamped interpolation.
    ///
    /// Deterministic and idempotent. A NaN offset pins to `output[0]` rather
    /// than poisoning downstream visuals. A degenerate input range
    /// (`input[0] == input[1]`) steps from `output[0]` to `output[1]` at the
    /// boundary.
    pub fn map(self, offset: f64) -> f64 {
        let [in0, in1] = self.input;
        let [out0, out1] = self.output;
        if offset.is_nan() || offset < in0 {
            return out0;
        }
        if offset >= in1 {
            return out1;
        }
        let t = (offset - in0) / (in1 - in0);
        out0 + (out1 - out0) * t
    }
}
