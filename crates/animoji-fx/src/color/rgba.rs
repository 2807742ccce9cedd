//! RGBA pixel type
//!
//! Straight (non-premultiplied) 8-bit channels, the in-memory format of
//! every [`Image`](crate::Image).

/// A single pixel with 8-bit red, green, blue and alpha channels.
///
/// Channels are straight alpha: the color channels are not scaled by
/// alpha. The default value is fully transparent black, which is what
/// freshly allocated images are filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// Create a pixel from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    ///
    /// # Example
    /// ```
    /// use animoji_fx::Rgba;
    /// let yellow = Rgba::opaque(255, 255, 0);
    /// assert_eq!(yellow.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a pixel from a byte array [R, G, B, A].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color channels as [R, G, B], dropping alpha.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Replace the color channels, keeping this pixel's alpha.
    #[inline]
    pub const fn with_rgb(self, rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], self.a)
    }

    /// Blend `overlay` over the color channels at the given opacity.
    ///
    /// `result = self * (1 - opacity) + overlay * opacity` per channel,
    /// truncated to an integer. Alpha is left unchanged.
    ///
    /// # Example
    /// ```
    /// use animoji_fx::Rgba;
    /// let black = Rgba::new(0, 0, 0, 200);
    /// let mixed = black.blend_rgb([255, 0, 0], 0.5);
    /// assert_eq!(mixed, Rgba::new(127, 0, 0, 200));
    /// ```
    #[inline]
    pub fn blend_rgb(self, overlay: [u8; 3], opacity: f64) -> Self {
        let mix = |base: u8, top: u8| -> u8 {
            (base as f64 * (1.0 - opacity) + top as f64 * opacity) as u8
        };
        Self::new(
            mix(self.r, overlay[0]),
            mix(self.g, overlay[1]),
            mix(self.b, overlay[2]),
            self.a,
        )
    }

    /// Squared Euclidean distance over all four channels.
    #[inline]
    pub fn distance_sq(self, other: Rgba) -> u32 {
        let d = |a: u8, b: u8| {
            let diff = a as i32 - b as i32;
            (diff * diff) as u32
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b) + d(self.a, other.a)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}
