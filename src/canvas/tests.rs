use super::*;
use crate::resolution::Resolution;

fn count(canvas: &Canvas, color: Color) -> usize {
    canvas.pixels().filter(|&c| c == color).count()
}

#[test]
fn new_canvas_is_black() {
    let canvas = Canvas::default();
    assert_eq!(canvas.resolution(), Resolution::new(WINDOW_W, WINDOW_H));
    assert_eq!(count(&canvas, Color::BLACK), 256 * 256);
}

#[test]
fn clear_and_set() {
    let mut canvas = Canvas::new(Resolution::new(4, 3));
    canvas.clear(Color::NAVY);
    assert_eq!(count(&canvas, Color::NAVY), 12);

    canvas.set(3, 2, Color::RED);
    assert_eq!(canvas.get(3, 2), Color::RED);
    assert_eq!(canvas.get(2, 2), Color::NAVY);
    assert_eq!(count(&canvas, Color::RED), 1);
}

#[test]
#[should_panic(expected = "outside of 4x3 canvas")]
fn set_out_of_bounds() {
    let mut canvas = Canvas::new(Resolution::new(4, 3));
    canvas.set(4, 0, Color::RED);
}

#[test]
fn palette_lookup() {
    assert_eq!(Color::BLACK.to_rgb8(), [0, 0, 0]);
    assert_eq!(Color::WHITE.to_rgb8(), [0xee, 0xee, 0xee]);
    assert_eq!(Color::RED.to_rgb8(), [0xd4, 0x18, 0x6c]);
    // Indices wrap around.
    assert_eq!(Color(16 + 7).to_rgb8(), Color::WHITE.to_rgb8());
}

#[test]
fn rgba_conversion() {
    let mut canvas = Canvas::new(Resolution::new(2, 1));
    canvas.set(1, 0, Color::WHITE);
    assert_eq!(canvas.to_rgba8(), [0, 0, 0, 255, 0xee, 0xee, 0xee, 255]);
}

#[test]
fn filled_circle() {
    let mut canvas = Canvas::new(Resolution::new(64, 64));
    draw::circle(&mut canvas, 32, 32, 7).color(Color::WHITE);

    assert_eq!(canvas.get(32, 32), Color::WHITE);
    assert_eq!(canvas.get(26, 32), Color::WHITE);
    assert_eq!(canvas.get(32, 38), Color::WHITE);
    assert_eq!(canvas.get(41, 32), Color::BLACK);
    assert_eq!(canvas.get(32, 23), Color::BLACK);
    assert_eq!(canvas.get(0, 0), Color::BLACK);

    // Filled, and roughly the area of a circle of radius 7.5.
    let area = count(&canvas, Color::WHITE);
    assert!((150..=200).contains(&area), "area={area}");
}

#[test]
fn radius_zero_is_one_pixel() {
    let mut canvas = Canvas::new(Resolution::new(8, 8));
    draw::circle(&mut canvas, 4, 4, 0).color(Color::YELLOW);
    assert_eq!(count(&canvas, Color::YELLOW), 1);
    assert_eq!(canvas.get(4, 4), Color::YELLOW);
}

#[test]
fn shapes_are_clipped() {
    let mut canvas = Canvas::new(Resolution::new(16, 16));
    draw::circle(&mut canvas, 0, 0, 3).color(Color::CYAN);
    draw::circle(&mut canvas, -100, 500, 3).color(Color::CYAN);
    assert_eq!(canvas.get(0, 0), Color::CYAN);
    assert_eq!(canvas.get(15, 15), Color::BLACK);

    draw::text(&mut canvas, 12, 12, "clipped text").color(Color::CYAN);
}

#[test]
fn text_is_drawn_below_and_right_of_anchor() {
    let mut canvas = Canvas::new(Resolution::new(64, 16));
    draw::text(&mut canvas, 10, 5, "HAND").color(Color::WHITE);

    let lit = count(&canvas, Color::WHITE);
    assert!(lit > 0);
    for y in 0..16 {
        for x in 0..64 {
            if canvas.get(x, y) == Color::WHITE {
                assert!(x >= 10 && x < 10 + 4 * 4, "pixel at x={x}");
                assert!(y >= 5 && y < 5 + 6, "pixel at y={y}");
            }
        }
    }
}
