//! Falling confetti shown when a level is solved.

use eframe::egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, Vec2};

const PIECE_COUNT: usize = 150;
const MAX_DELAY_SECS: f32 = 0.7;
const MIN_FALL_SECS: f32 = 1.8;
const FALL_SPREAD_SECS: f32 = 1.2;

const COLORS: [Color32; 6] = [
    Color32::from_rgb(0xff, 0x6b, 0x6b),
    Color32::from_rgb(0xff, 0xd9, 0x3d),
    Color32::from_rgb(0x6b, 0xcb, 0x77),
    Color32::from_rgb(0x4d, 0x96, 0xff),
    Color32::from_rgb(0x9b, 0x5d, 0xe5),
    Color32::from_rgb(0xef, 0x47, 0x6f),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ConfettiPiece {
    /// Horizontal start, as a fraction of the screen width.
    x: f32,
    /// Horizontal travel over the whole fall, as a fraction of the screen width.
    drift: f32,
    delay: f32,
    fall: f32,
    size: f32,
    color: Color32,
}

impl ConfettiPiece {
    fn random(index: usize) -> Self {
        Self {
            x: rand::random::<f32>(),
            drift: (rand::random::<f32>() - 0.5) * 0.1,
            delay: rand::random::<f32>() * MAX_DELAY_SECS,
            fall: MIN_FALL_SECS + rand::random::<f32>() * FALL_SPREAD_SECS,
            size: 6.0 + rand::random::<f32>() * 6.0,
            color: COLORS[index % COLORS.len()],
        }
    }

    /// Position at `elapsed` seconds, in fractions of the screen size.
    ///
    /// `None` before the piece starts falling and after it leaves the screen.
    #[must_use]
    fn position(&self, elapsed: f32) -> Option<Pos2> {
        let t = (elapsed - self.delay) / self.fall;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(Pos2::new(self.x + self.drift * t, -0.05 + 1.1 * t))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Confetti {
    started_at: f64,
    pieces: Vec<ConfettiPiece>,
}

impl Confetti {
    #[must_use]
    pub(crate) fn burst(now: f64) -> Self {
        Self {
            started_at: now,
            pieces: (0..PIECE_COUNT).map(ConfettiPiece::random).collect(),
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    fn elapsed(&self, now: f64) -> f32 {
        (now - self.started_at) as f32
    }
}

pub(crate) fn show(ctx: &Context, confetti: &Confetti, now: f64) {
    let screen = ctx.content_rect();
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));
    let elapsed = confetti.elapsed(now);

    for piece in &confetti.pieces {
        let Some(pos) = piece.position(elapsed) else {
            continue;
        };
        let center = screen.min + pos.to_vec2() * screen.size();
        let rect = Rect::from_center_size(center, Vec2::new(piece.size, piece.size * 0.6));
        painter.rect_filled(rect, 1.0, piece.color);
    }
}
