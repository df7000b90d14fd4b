use crate::math::Vec3;

/// 8-bit output colour, one triple per pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Collapses an accumulated shading sum (fractions of full intensity per
    /// channel) to output channels: scale by 255, clamp to [0, 255], truncate.
    pub fn from_shading(sum: Vec3) -> Rgb {
        let scaled = sum * 255.0;
        Rgb::new(
            scaled.x.clamp(0.0, 255.0) as u8,
            scaled.y.clamp(0.0, 255.0) as u8,
            scaled.z.clamp(0.0, 255.0) as u8,
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Rgb {
        Rgb::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> [u8; 3] {
        [c.r, c.g, c.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shading_scales_and_truncates() {
        assert_eq!(
            Rgb::from_shading(Vec3::new(1.0, 0.5, 0.0)),
            Rgb::new(255, 127, 0)
        );
    }

    #[test]
    fn test_from_shading_clamps_out_of_range_channels() {
        assert_eq!(
            Rgb::from_shading(Vec3::new(4.0, -0.25, 0.999)),
            Rgb::new(255, 0, 254)
        );
    }
}
