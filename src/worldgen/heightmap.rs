use noise::{NoiseFn, Perlin};
use rand::RngCore;

use crate::hex::HexPoint;

/// Amplitudes of the four stacked noise layers.
const LAYER_AMPLITUDES: [f64; 4] = [1.0, 0.5, 0.25, 0.125];

/// Frequency multiplier of each layer relative to the base octave count.
const LAYER_FREQUENCIES: [f64; 4] = [1.0, 2.0, 4.0, 8.0];

/// A scalar field over the grid, normalized to [0, 1].
///
/// Built from four Perlin layers at doubling frequencies. The exact noise
/// values are not a contract; only the statistical shape and the threshold
/// behavior below are.
#[derive(Debug, Clone)]
pub struct HeightMap {
    width: i32,
    height: i32,
    values: Vec<f64>,
}

impl HeightMap {
    pub fn new(width: i32, height: i32, octaves: u32, rng: &mut dyn RngCore) -> Self {
        let perlin = Perlin::new(rng.next_u32());
        let base_frequency = octaves as f64;

        let mut values = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let nx = x as f64 / width as f64;
                let ny = y as f64 / height as f64;

                let mut value = 0.0;
                for (amplitude, frequency) in LAYER_AMPLITUDES.iter().zip(LAYER_FREQUENCIES) {
                    let f = base_frequency * frequency;
                    value += amplitude * perlin.get([nx * f, ny * f]);
                }

                values.push(value.abs());
            }
        }

        let mut map = HeightMap {
            width,
            height,
            values,
        };
        map.normalize();
        map
    }

    #[cfg(test)]
    fn from_values(width: i32, height: i32, values: Vec<f64>) -> Self {
        HeightMap {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Value at a grid point. Out-of-range points read as 0.0.
    pub fn at(&self, point: HexPoint) -> f64 {
        if point.x < 0 || point.x >= self.width || point.y < 0 || point.y >= self.height {
            return 0.0;
        }
        self.values[(point.y * self.width + point.x) as usize]
    }

    /// Min-max rescale to [0, 1]. A flat field becomes all zeros instead of
    /// dividing by zero.
    fn normalize(&mut self) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in &self.values {
            min = min.min(value);
            max = max.max(value);
        }

        let span = max - min;
        if span <= f64::EPSILON {
            for value in &mut self.values {
                *value = 0.0;
            }
            return;
        }

        for value in &mut self.values {
            *value = (*value - min) / span;
        }
    }

    /// The value such that roughly `fraction` of all cells lie above it.
    /// Monotonic: a larger fraction never yields a larger threshold.
    pub fn threshold_above(&self, fraction: f64) -> f64 {
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));

        let index = ((sorted.len() as f64 * fraction) as usize).min(sorted.len() - 1);
        sorted[index]
    }
}
