//! Ambient background: twinkling sparkles and flowers drifting upwards.
//!
//! Positions and timings are drawn once at startup; every frame is a pure
//! function of the elapsed time and the drawing area.

use std::f32::consts::TAU;
use std::time::Duration;

use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlowerKind {
    Rose,
    Orchid,
}

#[derive(Debug, Clone)]
struct Sparkle {
    /// Position as a fraction of the area, in `[0, 1)`.
    x: f32,
    y: f32,
    period: f32,
    phase: f32,
}

#[derive(Debug, Clone)]
struct Flower {
    x: f32,
    duration: f32,
    delay: f32,
    kind: FlowerKind,
}

/// What to paint in one background cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GlyphKind {
    Sparkle,
    Flower(FlowerKind),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub x: u16,
    pub y: u16,
    pub symbol: &'static str,
    pub kind: GlyphKind,
}

#[derive(Debug, Clone, Default)]
pub struct Backdrop {
    sparkles: Vec<Sparkle>,
    flowers: Vec<Flower>,
}

impl Backdrop {
    pub fn generate<R: Rng>(rng: &mut R, sparkles: usize, flowers: usize) -> Self {
        let sparkles = (0..sparkles)
            .map(|_| Sparkle {
                x: rng.random::<f32>(),
                y: rng.random::<f32>(),
                period: 2.0 + rng.random::<f32>() * 3.0,
                phase: rng.random::<f32>() * 5.0,
            })
            .collect();

        let flowers = (0..flowers)
            .map(|i| Flower {
                x: rng.random::<f32>(),
                duration: 15.0 + rng.random::<f32>() * 10.0,
                delay: i as f32 * 1.5,
                kind: if i % 2 == 0 {
                    FlowerKind::Rose
                } else {
                    FlowerKind::Orchid
                },
            })
            .collect();

        Self { sparkles, flowers }
    }

    /// Glyphs visible at `elapsed` in a `width` x `height` area.
    ///
    /// Coordinates are relative to the area and always inside it.
    pub fn glyphs(&self, elapsed: Duration, width: u16, height: u16) -> Vec<Glyph> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let t = elapsed.as_secs_f32();
        let (w, h) = (width as f32, height as f32);
        let mut out = Vec::with_capacity(self.sparkles.len() + self.flowers.len());

        for s in &self.sparkles {
            // Fade in and out once per period.
            let cycle = ((t + s.phase) % s.period) / s.period;
            let intensity = (cycle * TAU / 2.0).sin();
            let symbol = match intensity {
                i if i > 0.85 => "✦",
                i if i > 0.5 => "+",
                i if i > 0.2 => "·",
                _ => continue,
            };
            out.push(Glyph {
                x: cell(s.x * w, width),
                y: cell(s.y * h, height),
                symbol,
                kind: GlyphKind::Sparkle,
            });
        }

        for f in &self.flowers {
            if t < f.delay {
                continue;
            }
            let progress = ((t - f.delay) % f.duration) / f.duration;
            // Rises from just below the bottom edge to just above the top.
            let y = h * (1.1 - 1.2 * progress);
            if y < 0.0 || y >= h {
                continue;
            }
            let sway = 0.05 * (progress * TAU).sin();
            let x = (f.x + sway).rem_euclid(1.0) * w;
            out.push(Glyph {
                x: cell(x, width),
                y: cell(y, height),
                symbol: match f.kind {
                    FlowerKind::Rose => "❀",
                    FlowerKind::Orchid => "✿",
                },
                kind: GlyphKind::Flower(f.kind),
            });
        }

        out
    }
}

fn cell(v: f32, limit: u16) -> u16 {
    (v.max(0.0) as u16).min(limit.saturating_sub(1))
}
