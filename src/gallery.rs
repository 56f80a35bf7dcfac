//! Fixed pictures, built only from the public combinators
//!
//! Each picture comes with the canvas size it was designed for; [`PICTURES`]
//! lists them all for batch rendering.

use crate::frame::Frame;
use crate::log::debug;
use crate::render::defaults::GRID_STROKE_WIDTH;
use crate::render::{
    DrawingContext, LineCapStyle, Painter, StrokeStyle, above, above3, beside, beside3, below, black, color, flip_vert, gray,
    paint, path, rotate90, segments, transform, white,
};
use crate::types::{Color, Segment, Vector};

/// A named picture and its native resolution.
#[derive(Debug, Clone, Copy)]
pub struct Picture {
    pub name: &'static str,
    pub resolution: u32,
    pub build: fn() -> Painter,
}

impl Picture {
    /// Render at the native resolution.
    pub fn render(&self) -> DrawingContext {
        self.render_at(self.resolution)
    }

    pub fn render_at(&self, resolution: u32) -> DrawingContext {
        debug!(name = self.name, resolution, "rendering gallery picture");
        let mut cx = DrawingContext::new(resolution);
        paint(&mut cx, &(self.build)());
        cx
    }
}

pub const PICTURES: &[Picture] = &[
    Picture { name: "square", resolution: 200, build: square },
    Picture { name: "rotated", resolution: 200, build: rotated },
    Picture { name: "checkers", resolution: 200, build: checkers },
    Picture { name: "quartet", resolution: 800, build: colored_quartet },
    Picture { name: "nonet", resolution: 800, build: colored_nonet },
    Picture { name: "zorro", resolution: 500, build: zorro },
    Picture { name: "escher", resolution: 800, build: escher },
];

/// Look up a picture by name.
pub fn find(name: &str) -> Option<&'static Picture> {
    PICTURES.iter().find(|p| p.name == name)
}

const SLATE: Color = Color::rgb(100, 100, 200);

// ============================================================================
// Layout helpers
// ============================================================================

/// `p1 p2` over `p3 p4`.
pub fn quartet(p1: &Painter, p2: &Painter, p3: &Painter, p4: &Painter) -> Painter {
    above(&beside(p1, p2), &beside(p3, p4))
}

/// Three rows of three, read left to right, top to bottom.
#[allow(clippy::too_many_arguments)]
pub fn nonet(
    p1: &Painter,
    p2: &Painter,
    p3: &Painter,
    p4: &Painter,
    p5: &Painter,
    p6: &Painter,
    p7: &Painter,
    p8: &Painter,
    p9: &Painter,
) -> Painter {
    above3(&beside3(p1, p2, p3), &beside3(p4, p5, p6), &beside3(p7, p8, p9))
}

/// Four copies of `p` around the center, each turned a further quarter.
pub fn cycle(p: &Painter) -> Painter {
    let r1 = rotate90(p);
    let r2 = rotate90(&r1);
    let r3 = rotate90(&r2);
    quartet(p, &r3, &r1, &r2)
}

// ============================================================================
// Pictures
// ============================================================================

/// An inset square.
pub fn square() -> Painter {
    transform(
        &color(SLATE),
        Vector::new(0.1, 0.1),
        Vector::new(0.9, 0.1),
        Vector::new(0.1, 0.9),
    )
}

/// The same square standing on its corner.
pub fn rotated() -> Painter {
    transform(
        &color(SLATE),
        Vector::new(0.5, 0.1),
        Vector::new(0.9, 0.5),
        Vector::new(0.1, 0.5),
    )
}

/// Two-tone tiles alternating with their vertical mirrors, in a 3x3 layout.
pub fn checkers() -> Painter {
    let tile = below(&black(), &gray());
    let row = beside3(&tile, &flip_vert(&tile), &tile);
    above3(&row, &flip_vert(&row), &row)
}

pub fn colored_quartet() -> Painter {
    quartet(
        &color(Color::rgb(200, 100, 100)),
        &color(Color::rgb(100, 200, 100)),
        &color(Color::rgb(100, 100, 200)),
        &color(Color::rgb(100, 100, 100)),
    )
}

pub fn colored_nonet() -> Painter {
    let c = |r, g, b| color(Color::rgb(r, g, b));
    nonet(
        &c(200, 50, 50),
        &c(50, 200, 50),
        &c(50, 50, 200),
        &c(200, 100, 100),
        &c(100, 200, 100),
        &c(100, 100, 200),
        &c(200, 150, 150),
        &c(150, 200, 150),
        &c(150, 150, 200),
    )
}

/// The mark of Zorro, one polyline.
pub fn zorro() -> Painter {
    path(
        &[
            Vector::new(0.1, 0.9),
            Vector::new(0.8, 0.9),
            Vector::new(0.1, 0.2),
            Vector::new(0.9, 0.3),
        ],
        StrokeStyle::new(Color::BLACK),
    )
}

// ============================================================================
// Square Limit
// ============================================================================

type GridLine = ((u8, u8), (u8, u8));

/// Hairlines on a 16x16 grid spanning the unit square.
fn grid(lines: &[GridLine]) -> Painter {
    let cell = Frame::new(Vector::ZERO, Vector::new(1.0 / 16.0, 0.0), Vector::new(0.0, 1.0 / 16.0));
    let at = |(x, y): (u8, u8)| cell.project(Vector::new(x as f64, y as f64));
    let style = StrokeStyle::new(Color::BLACK)
        .with_width(GRID_STROKE_WIDTH)
        .with_cap(LineCapStyle::Square);
    segments(lines.iter().map(|&(a, b)| Segment::new(at(a), at(b))).collect(), style)
}

#[rustfmt::skip]
const FISH_P: &[GridLine] = &[
    (( 4,  4), ( 6,  0)), (( 0,  3), ( 3,  4)), (( 3,  4), ( 0,  8)),
    (( 0,  8), ( 0,  3)), (( 4,  5), ( 7,  6)), (( 7,  6), ( 4, 10)),
    (( 4, 10), ( 4,  5)), ((11,  0), (10,  4)), ((10,  4), ( 8,  8)),
    (( 8,  8), ( 4, 13)), (( 4, 13), ( 0, 16)), ((11,  0), (14,  2)),
    ((14,  2), (16,  2)), ((10,  4), (13,  5)), ((13,  5), (16,  4)),
    (( 9,  6), (12,  7)), ((12,  7), (16,  6)), (( 8,  8), (12,  9)),
    ((12,  9), (16,  8)), (( 8, 12), (16, 10)), (( 0, 16), ( 6, 15)),
    (( 6, 15), ( 8, 16)), (( 8, 16), (12, 12)), ((12, 12), (16, 12)),
    ((10, 16), (12, 14)), ((12, 14), (16, 13)), ((12, 16), (13, 15)),
    ((13, 15), (16, 14)), ((14, 16), (16, 15)), ((16,  0), (16,  8)),
    ((16, 12), (16, 16)),
];

#[rustfmt::skip]
const FISH_Q: &[GridLine] = &[
    (( 2,  0), ( 4,  5)), (( 4,  5), ( 4,  7)), (( 4,  0), ( 6,  5)),
    (( 6,  5), ( 6,  7)), (( 6,  0), ( 8,  5)), (( 8,  5), ( 8,  8)),
    (( 8,  0), (10,  6)), ((10,  6), (10,  9)), ((10,  0), (14, 11)),
    ((12,  0), (13,  4)), ((13,  4), (16,  8)), ((16,  8), (15, 10)),
    ((15, 10), (16, 16)), ((16, 16), (12, 10)), ((12, 10), ( 6,  7)),
    (( 6,  7), ( 4,  7)), (( 4,  7), ( 0,  8)), ((13,  0), (16,  6)),
    ((14,  0), (16,  4)), ((15,  0), (16,  2)), (( 0, 10), ( 7, 11)),
    (( 9, 12), (10, 10)), ((10, 10), (12, 12)), ((12, 12), ( 9, 12)),
    (( 8, 15), ( 9, 13)), (( 9, 13), (11, 15)), ((11, 15), ( 8, 15)),
    (( 0, 12), ( 3, 13)), (( 3, 13), ( 7, 15)), (( 7, 15), ( 8, 16)),
    (( 2, 16), ( 3, 13)), (( 4, 16), ( 5, 14)), (( 6, 16), ( 7, 15)),
    (( 0,  0), ( 8,  0)), ((12,  0), (16,  0)),
];

#[rustfmt::skip]
const FISH_R: &[GridLine] = &[
    (( 0, 12), ( 1, 14)), (( 0,  8), ( 2, 12)), (( 0,  4), ( 5, 10)),
    (( 0,  0), ( 8,  8)), (( 1,  1), ( 4,  0)), (( 2,  2), ( 8,  0)),
    (( 3,  3), ( 8,  2)), (( 8,  2), (12,  0)), (( 5,  5), (12,  3)),
    ((12,  3), (16,  0)), (( 0, 16), ( 2, 12)), (( 2, 12), ( 8,  8)),
    (( 8,  8), (14,  6)), ((14,  6), (16,  4)), (( 6, 16), (11, 10)),
    ((11, 10), (16,  6)), ((11, 16), (12, 12)), ((12, 12), (16,  8)),
    ((12, 12), (16, 16)), ((13, 13), (16, 10)), ((14, 14), (16, 12)),
    ((15, 15), (16, 14)),
];

#[rustfmt::skip]
const FISH_S: &[GridLine] = &[
    (( 0,  0), ( 4,  2)), (( 4,  2), ( 8,  2)), (( 8,  2), (16,  0)),
    (( 0,  4), ( 2,  1)), (( 0,  6), ( 7,  4)), (( 0,  8), ( 8,  6)),
    (( 0, 10), ( 7,  8)), (( 0, 12), ( 7, 10)), (( 0, 14), ( 7, 13)),
    (( 8, 16), ( 7, 13)), (( 7, 13), ( 7,  8)), (( 7,  8), ( 8,  6)),
    (( 8,  6), (10,  4)), ((10,  4), (16,  0)), ((10, 16), (11, 10)),
    ((10,  6), (12,  4)), ((12,  4), (12,  7)), ((12,  7), (10,  6)),
    ((13,  7), (15,  5)), ((15,  5), (15,  8)), ((15,  8), (13,  7)),
    ((12, 16), (13, 13)), ((13, 13), (15,  9)), ((15,  9), (16,  8)),
    ((13, 13), (16, 14)), ((14, 11), (16, 12)), ((15,  9), (16, 10)),
];

/// Escher's Square Limit, assembled from four fish tiles.
pub fn escher() -> Painter {
    let (p, q, r, s) = (grid(FISH_P), grid(FISH_Q), grid(FISH_R), grid(FISH_S));
    let rot = rotate90;
    let b = white();

    let t = quartet(&p, &q, &r, &s);
    let side1 = quartet(&b, &b, &rot(&t), &t);
    let side2 = quartet(&side1, &side1, &rot(&t), &t);
    let u = cycle(&rot(&q));
    let corner1 = quartet(&b, &b, &b, &u);
    let corner2 = quartet(&corner1, &side1, &rot(&side1), &u);
    let corner = nonet(
        &corner2,
        &side2,
        &side2,
        &rot(&side2),
        &u,
        &rot(&t),
        &rot(&side2),
        &rot(&t),
        &q,
    );
    cycle(&corner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(p: &Painter, resolution: u32) -> DrawingContext {
        let mut cx = DrawingContext::new(resolution);
        paint(&mut cx, p);
        cx
    }

    #[test]
    fn picture_names_are_unique() {
        for (i, a) in PICTURES.iter().enumerate() {
            assert!(PICTURES[i + 1..].iter().all(|b| b.name != a.name), "duplicate {}", a.name);
        }
        assert_eq!(find("escher").map(|p| p.resolution), Some(800));
        assert_eq!(find("square").map(|p| p.render().width()), Some(200));
        assert!(find("mona-lisa").is_none());
    }

    #[test]
    fn square_is_inset() {
        let cx = render(&square(), 200);
        assert_eq!(cx.pixel(100, 100), Some(SLATE));
        assert_eq!(cx.pixel(5, 5), Some(Color::WHITE));
        assert_eq!(cx.pixel(195, 195), Some(Color::WHITE));
    }

    #[test]
    fn rotated_square_leaves_corners_white() {
        let cx = render(&rotated(), 200);
        assert_eq!(cx.pixel(100, 100), Some(SLATE));
        assert_eq!(cx.pixel(30, 30), Some(Color::WHITE));
        assert_eq!(cx.pixel(170, 170), Some(Color::WHITE));
    }

    #[test]
    fn checkers_mirror_every_other_band() {
        let cx = render(&checkers(), 60);
        // three 20px columns by six 10px rows; the middle band is the outer rows flipped
        let gray_on_left = [true, false, false, true, true, false];
        for (row, &left) in gray_on_left.iter().enumerate() {
            for col in 0..3u32 {
                let gray = left != (col == 1);
                let expected = if gray { Color::GRAY } else { Color::BLACK };
                assert_eq!(
                    cx.pixel(col * 20 + 10, row as u32 * 10 + 5),
                    Some(expected),
                    "cell ({col}, {row})"
                );
            }
        }
    }

    #[test]
    fn quartet_reads_like_text() {
        let cx = render(&colored_quartet(), 8);
        assert_eq!(cx.pixel(1, 1), Some(Color::rgb(200, 100, 100)));
        assert_eq!(cx.pixel(6, 1), Some(Color::rgb(100, 200, 100)));
        assert_eq!(cx.pixel(1, 6), Some(Color::rgb(100, 100, 200)));
        assert_eq!(cx.pixel(6, 6), Some(Color::rgb(100, 100, 100)));
    }

    #[test]
    fn nonet_reads_like_text() {
        let cx = render(&colored_nonet(), 9);
        assert_eq!(cx.pixel(1, 1), Some(Color::rgb(200, 50, 50)));
        assert_eq!(cx.pixel(7, 1), Some(Color::rgb(50, 50, 200)));
        assert_eq!(cx.pixel(4, 4), Some(Color::rgb(100, 200, 100)));
        assert_eq!(cx.pixel(7, 7), Some(Color::rgb(150, 150, 200)));
    }

    #[test]
    fn zorro_strokes_its_top_bar() {
        let cx = render(&zorro(), 200);
        // logical y = 0.9 is buffer row 20; the stroke is two pixels thick
        assert_eq!(cx.pixel(100, 19), Some(Color::BLACK));
        assert_eq!(cx.pixel(100, 20), Some(Color::BLACK));
        assert_eq!(cx.pixel(100, 80), Some(Color::BLACK));
        assert_eq!(cx.pixel(180, 100), Some(Color::WHITE));
    }

    #[test]
    fn cycle_turns_each_quadrant() {
        let marker = crate::render::triangle(
            Vector::new(0.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::new(0.0, 1.0),
            Color::RED,
        );
        let cx = render(&cycle(&marker), 8);
        // top-left quadrant is the marker itself, corner at its bottom-left
        assert_eq!(cx.pixel(0, 3), Some(Color::RED));
        assert_eq!(cx.pixel(3, 0), Some(Color::WHITE));
        // bottom-left is a quarter turn, corner at its bottom-right
        assert_eq!(cx.pixel(3, 7), Some(Color::RED));
        assert_eq!(cx.pixel(0, 4), Some(Color::WHITE));
    }

    #[test]
    fn escher_draws_hairlines_only() {
        let cx = render(&escher(), 200);
        let black = cx.pixels().iter().filter(|&&c| c == Color::BLACK).count();
        let white = cx.pixels().iter().filter(|&&c| c == Color::WHITE).count();
        assert!(black > 0, "nothing drawn");
        assert!(black < white, "hairlines should leave most of the canvas white");
        assert_eq!(black + white, 200 * 200);
    }
}
