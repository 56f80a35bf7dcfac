//! End-to-end renders of small pictures, compared as ASCII art.
//!
//! Legend: `.` white, `#` black, `+` gray, `R` red, `B` blue.

use pictura::gallery::{self, quartet};
use pictura::types::{Color, Segment, Vector};
use pictura::{
    DrawingContext, LineCapStyle, Painter, StrokeStyle, above3, beside, beside3, below, black, blue, flip_horiz,
    flip_vert, over, paint, red, rotate90, segments, triangle, white,
};

fn v(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

fn ascii(cx: &DrawingContext) -> String {
    (0..cx.height())
        .map(|y| {
            (0..cx.width())
                .map(|x| match cx.pixel(x, y) {
                    Some(Color::WHITE) => '.',
                    Some(Color::BLACK) => '#',
                    Some(Color::GRAY) => '+',
                    Some(Color::RED) => 'R',
                    Some(Color::BLUE) => 'B',
                    _ => '?',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(painter: &Painter, resolution: u32) -> String {
    let mut cx = DrawingContext::new(resolution);
    paint(&mut cx, painter);
    ascii(&cx)
}

/// Red triangle filling the lower-left half of its frame.
fn marker() -> Painter {
    triangle(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), Color::RED)
}

#[test]
fn triangle_two_by_two() {
    insta::assert_snapshot!(render(&marker(), 2), @r"
    R.
    RR
    ");
}

#[test]
fn marker_and_its_mirrors() {
    insta::assert_snapshot!(render(&marker(), 4), @r"
    R...
    RR..
    RRR.
    RRRR
    ");
    insta::assert_snapshot!(render(&flip_horiz(&marker()), 4), @r"
    ...R
    ..RR
    .RRR
    RRRR
    ");
    insta::assert_snapshot!(render(&flip_vert(&marker()), 4), @r"
    RRRR
    RRR.
    RR..
    R...
    ");
}

#[test]
fn rotate90_moves_the_corner_counterclockwise() {
    insta::assert_snapshot!(render(&rotate90(&marker()), 4), @r"
    ...R
    ..RR
    .RRR
    RRRR
    ");
    insta::assert_snapshot!(render(&rotate90(&rotate90(&marker())), 4), @r"
    RRRR
    .RRR
    ..RR
    ...R
    ");
}

#[test]
fn three_way_splits() {
    insta::assert_snapshot!(render(&beside3(&red(), &black(), &blue()), 6), @r"
    RR##BB
    RR##BB
    RR##BB
    RR##BB
    RR##BB
    RR##BB
    ");
    insta::assert_snapshot!(render(&above3(&red(), &black(), &blue()), 6), @r"
    RRRRRR
    RRRRRR
    ######
    ######
    BBBBBB
    BBBBBB
    ");
}

#[test]
fn quartet_layout() {
    insta::assert_snapshot!(render(&quartet(&red(), &blue(), &black(), &white()), 4), @r"
    RRBB
    RRBB
    ##..
    ##..
    ");
}

#[test]
fn checkers_small() {
    insta::assert_snapshot!(render(&gallery::checkers(), 6), @r"
    ++##++
    ##++##
    ##++##
    ++##++
    ++##++
    ##++##
    ");
}

#[test]
fn butt_and_square_caps() {
    let stroke = |cap| {
        segments(
            vec![Segment::new(v(0.25, 0.5), v(0.75, 0.5))],
            StrokeStyle::new(Color::BLACK).with_width(0.25).with_cap(cap),
        )
    };
    insta::assert_snapshot!(render(&stroke(LineCapStyle::Butt), 8), @r"
    ........
    ........
    ........
    ..####..
    ..####..
    ........
    ........
    ........
    ");
    insta::assert_snapshot!(render(&stroke(LineCapStyle::Square), 8), @r"
    ........
    ........
    ........
    .######.
    .######.
    ........
    ........
    ........
    ");
}

#[test]
fn image_mirrors_with_its_frame() {
    let image = Painter::image(2, 2, vec![Color::RED, Color::BLUE, Color::BLACK, Color::GRAY]).unwrap();
    insta::assert_snapshot!(render(&image, 4), @r"
    RRBB
    RRBB
    ##++
    ##++
    ");
    insta::assert_snapshot!(render(&flip_horiz(&image), 4), @r"
    BBRR
    BBRR
    ++##
    ++##
    ");
}

#[test]
fn canvas_can_be_fed_back_as_an_image() {
    let mut cx = DrawingContext::new(4);
    paint(&mut cx, &below(&red(), &blue()));
    let snapshot = Painter::from_raster(cx.to_raster().unwrap());
    insta::assert_snapshot!(render(&beside(&snapshot, &snapshot), 4), @r"
    BBBB
    BBBB
    RRRR
    RRRR
    ");
}

#[test]
fn paint_clears_previous_contents() {
    let mut cx = DrawingContext::new(8);
    paint(&mut cx, &black());
    paint(&mut cx, &marker());
    assert!(cx.pixels().iter().all(|&c| c == Color::RED || c == Color::WHITE));

    let mut fresh = DrawingContext::new(8);
    paint(&mut fresh, &marker());
    assert_eq!(cx.pixels(), fresh.pixels());
}

#[test]
fn overlay_is_ordered_not_commutative() {
    let a = over(&red(), &marker().over(&blue()));
    insta::assert_snapshot!(render(&a, 2), @r"
    BB
    BB
    ");
    let b = over(&blue(), &marker());
    insta::assert_snapshot!(render(&b, 2), @r"
    RB
    RR
    ");
}

#[test]
fn shared_painters_render_on_many_threads() {
    let picture = gallery::escher();
    let expected = {
        let mut cx = DrawingContext::new(64);
        paint(&mut cx, &picture);
        cx.into_pixels()
    };
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut cx = DrawingContext::new(64);
                    paint(&mut cx, &picture);
                    cx.into_pixels()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
