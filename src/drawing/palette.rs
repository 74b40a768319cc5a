//! Two-color gradients, interpolated in HSL.

use {
  image::Rgba,
  num_traits::Float,
  rand::{Rng, seq::SliceRandom},
  std::fmt
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NamedColor { Red, Orange, Yellow, Green, Blue, Purple }

impl NamedColor {
  pub const ALL: [NamedColor; 6] = [
    NamedColor::Red, NamedColor::Orange, NamedColor::Yellow,
    NamedColor::Green, NamedColor::Blue, NamedColor::Purple
  ];

  /// CSS values.
  pub fn rgb(self) -> [u8; 3] {
    use NamedColor::*;
    match self {
      Red => [255, 0, 0],
      Orange => [255, 165, 0],
      Yellow => [255, 255, 0],
      Green => [0, 128, 0],
      Blue => [0, 0, 255],
      Purple => [128, 0, 128],
    }
  }

  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    *Self::ALL.choose(rng).unwrap_or(&NamedColor::Red)
  }
}

impl fmt::Display for NamedColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
  colors: Vec<Rgba<u8>>
}

impl Palette {
  /// `n` colors from `from` to `to`, both included. Never empty.
  pub fn gradient(from: [u8; 3], to: [u8; 3], n: usize) -> Self {
    let n = n.max(1);
    let [from, to] = [from, to].map(rgb_to_hsl);
    let colors = (0..n)
      .map(|i| if n == 1 { 0.0 } else { i as f64 / (n - 1) as f64 })
      .map(|t| {
        let mut hsl = [0.0; 3];
        hsl.iter_mut().enumerate()
          .for_each(|(c, v)| *v = lerp(from[c], to[c], t));
        let [r, g, b] = hsl_to_rgb(hsl);
        Rgba([r, g, b, 255])
      })
      .collect();
    Self { colors }
  }

  pub fn between(from: NamedColor, to: NamedColor, n: usize) -> Self {
    Self::gradient(from.rgb(), to.rgb(), n)
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  /// Color at `index`, wrapping around.
  pub fn get(&self, index: usize) -> Rgba<u8> {
    self.colors[index % self.colors.len()]
  }

  pub fn colors(&self) -> &[Rgba<u8>] {
    &self.colors
  }
}

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
  a + (b - a) * t
}

fn rgb_to_hsl(rgb: [u8; 3]) -> [f64; 3] {
  let [r, g, b] = rgb.map(|c| c as f64 / 255.0);
  let max = r.max(g).max(b);
  let min = r.min(g).min(b);
  let l = (max + min) / 2.0;
  if max == min {
    return [0.0, 0.0, l];
  }
  let d = max - min;
  let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
  let h = if max == r {
    (g - b) / d + if g < b { 6.0 } else { 0.0 }
  } else if max == g {
    (b - r) / d + 2.0
  } else {
    (r - g) / d + 4.0
  };
  [h / 6.0, s, l]
}

fn hsl_to_rgb([h, s, l]: [f64; 3]) -> [u8; 3] {
  let to_u8 = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
  if s == 0.0 {
    return [to_u8(l); 3];
  }
  let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
  let p = 2.0 * l - q;
  let channel = |t: f64| {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
      p + (q - p) * 6.0 * t
    } else if t < 0.5 {
      q
    } else if t < 2.0 / 3.0 {
      p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
      p
    }
  };
  [h + 1.0 / 3.0, h, h - 1.0 / 3.0].map(|t| to_u8(channel(t)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn hsl_round_trip_of_named_colors() {
    NamedColor::ALL.iter()
      .for_each(|c| assert_eq!(hsl_to_rgb(rgb_to_hsl(c.rgb())), c.rgb(), "{}", c));
  }

  #[test] fn hue_of_primaries() {
    assert_eq!(rgb_to_hsl([255, 0, 0]), [0.0, 1.0, 0.5]);
    let [h, s, l] = rgb_to_hsl([0, 0, 255]);
    assert!((h - 2.0 / 3.0).abs() < 1e-12 && s == 1.0 && l == 0.5);
  }
}
