//! Lambertian brightness and glyph quantization

use asciisolid_core::{normalize_direction, Direction, Error, Result, Vector3d};

/// Glyph for cells no sample reaches
pub const BLANK_GLYPH: char = ' ';

/// Descending brightness ladder mapping a cosine term to a glyph.
///
/// A brightness strictly above `levels[i].0` (and not above any earlier
/// threshold) selects `levels[i].1`. Anything at or below the last threshold,
/// including surfaces facing away from the light, gets `floor`.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRamp {
    levels: Vec<(f64, char)>,
    floor: char,
}

impl GlyphRamp {
    /// Build a ramp; thresholds must be finite and strictly descending
    pub fn new(levels: Vec<(f64, char)>, floor: char) -> Result<Self> {
        if levels.is_empty() {
            return Err(Error::InvalidRamp("ramp needs at least one level".to_string()));
        }
        if let Some((threshold, _)) = levels.iter().find(|(t, _)| !t.is_finite()) {
            return Err(Error::InvalidRamp(format!(
                "threshold {} is not finite",
                threshold
            )));
        }
        if let Some(pair) = levels.windows(2).find(|pair| pair[1].0 >= pair[0].0) {
            return Err(Error::InvalidRamp(format!(
                "thresholds must strictly descend, found {} then {}",
                pair[0].0, pair[1].0
            )));
        }
        Ok(Self { levels, floor })
    }

    pub fn levels(&self) -> &[(f64, char)] {
        &self.levels
    }

    pub fn floor(&self) -> char {
        self.floor
    }

    /// Ladder position for a brightness: 0 is the densest glyph,
    /// `levels().len()` is the floor
    pub fn level(&self, brightness: f64) -> usize {
        self.levels
            .iter()
            .position(|(threshold, _)| brightness > *threshold)
            .unwrap_or(self.levels.len())
    }

    /// Glyph for a brightness
    pub fn glyph(&self, brightness: f64) -> char {
        self.levels
            .get(self.level(brightness))
            .map(|(_, glyph)| *glyph)
            .unwrap_or(self.floor)
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            levels: vec![(0.8, '@'), (0.6, '$'), (0.4, '|'), (0.2, '+'), (0.1, '-')],
            floor: '·',
        }
    }
}

/// Cosine between a unit normal and the light direction, in [-1, 1]
pub fn brightness(normal: &Vector3d, light: &Direction) -> f64 {
    normal.dot(light.as_ref())
}

/// Single directional light plus a glyph ramp
#[derive(Debug, Clone, PartialEq)]
pub struct Shader {
    light: Direction,
    ramp: GlyphRamp,
}

impl Shader {
    /// Light direction is normalized here; zero length is an error
    pub fn new(light: Vector3d, ramp: GlyphRamp) -> Result<Self> {
        Ok(Self {
            light: normalize_direction(light)?,
            ramp,
        })
    }

    pub fn light(&self) -> &Direction {
        &self.light
    }

    pub fn ramp(&self) -> &GlyphRamp {
        &self.ramp
    }

    pub fn set_light(&mut self, light: Vector3d) -> Result<()> {
        self.light = normalize_direction(light)?;
        Ok(())
    }

    pub fn brightness(&self, normal: &Vector3d) -> f64 {
        brightness(normal, &self.light)
    }

    pub fn shade(&self, normal: &Vector3d) -> char {
        self.ramp.glyph(self.brightness(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_ladder() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.glyph(0.95), '@');
        assert_eq!(ramp.glyph(0.7), '$');
        assert_eq!(ramp.glyph(0.5), '|');
        assert_eq!(ramp.glyph(0.3), '+');
        assert_eq!(ramp.glyph(0.15), '-');
        assert_eq!(ramp.glyph(0.05), '·');
        assert_eq!(ramp.glyph(-0.9), '·');
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.glyph(0.8), '$');
        assert_eq!(ramp.glyph(0.1), '·');
    }

    #[test]
    fn test_brighter_is_denser() {
        let shader = Shader::new(Vector3d::new(0.0, 0.0, 1.0), GlyphRamp::default()).unwrap();
        let bright = Vector3d::new((1.0f64 - 0.81).sqrt(), 0.0, 0.9);
        let dim = Vector3d::new((1.0f64 - 0.09).sqrt(), 0.0, 0.3);

        assert_relative_eq!(shader.brightness(&bright), 0.9, epsilon = 1e-12);
        assert_relative_eq!(shader.brightness(&dim), 0.3, epsilon = 1e-12);

        let ramp = shader.ramp();
        assert!(ramp.level(shader.brightness(&bright)) < ramp.level(shader.brightness(&dim)));
    }

    #[test]
    fn test_light_is_normalized() {
        let shader = Shader::new(Vector3d::new(1.0, 1.0, 1.0), GlyphRamp::default()).unwrap();
        assert_relative_eq!(shader.light().norm(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(
            shader.brightness(&Vector3d::new(1.0, 0.0, 0.0)),
            1.0 / 3.0f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_light_rejected() {
        assert!(matches!(
            Shader::new(Vector3d::zeros(), GlyphRamp::default()),
            Err(Error::InvalidDirection(_))
        ));
        let mut shader = Shader::new(Vector3d::z(), GlyphRamp::default()).unwrap();
        assert!(shader.set_light(Vector3d::zeros()).is_err());
        assert_eq!(shader.light().into_inner(), Vector3d::z());
    }

    #[test]
    fn test_custom_ramp_validation() {
        assert!(GlyphRamp::new(vec![], '.').is_err());
        assert!(GlyphRamp::new(vec![(0.5, '#'), (0.5, '*')], '.').is_err());
        assert!(GlyphRamp::new(vec![(0.2, '#'), (0.5, '*')], '.').is_err());
        assert!(GlyphRamp::new(vec![(f64::NAN, '#')], '.').is_err());

        let ramp = GlyphRamp::new(vec![(0.5, '#'), (0.0, '*')], '.').unwrap();
        assert_eq!(ramp.glyph(0.6), '#');
        assert_eq!(ramp.glyph(0.2), '*');
        assert_eq!(ramp.glyph(-0.2), '.');
        assert_eq!(ramp.level(-0.2), 2);
    }
}
