//! Drawing of the sky, the glider and its force vectors.
//!
//! All primitives go through SDL2_gfx. The glider is always drawn at the
//! window center; only the sky moves.

use glider::FlightState;
use glider::sky::Sky;
use glider::vector::{Vector, add, heading, rotate, scale};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};
use sdl2::ttf::Font;
use sdl2::video::Window;

/// Background color behind the clouds
pub const SKY: Color = Color::RGB(135, 190, 235);
/// Fill color for clouds
const CLOUD: Color = Color::RGB(250, 250, 255);
/// Fill color for the wing
const WING: Color = Color::RGB(216, 216, 216);
/// Fill color for the fuselage
const BODY: Color = Color::RGB(183, 221, 156);
/// Fill color for the pilot's head
const HEAD: Color = Color::RGB(239, 218, 185);
/// Stroke color around every glider part
const OUTLINE: Color = Color::RGB(151, 151, 151);

/// Length multiplier for the velocity line
const VELOCITY_SCALE: f64 = 3.0;
/// Length multiplier for the lift line
const LIFT_SCALE: f64 = 100.0;
/// Length multiplier for the steering direction line
const DIRECTION_SCALE: f64 = 70.0;
/// Length multiplier for the drag line
const DRAG_SCALE: f64 = 100.0;

/// Wing outline with the nose along +x, centered on the glider.
const WING_POINTS: [(f64, f64); 4] = [(78.0, 0.2), (-81.0, 17.3), (-59.7, -3.7), (-76.0, -19.0)];
/// Fuselage rectangle, in the same frame as the wing
const BODY_POINTS: [(f64, f64); 4] = [(-29.0, 1.0), (11.0, 1.0), (11.0, 19.0), (-29.0, 19.0)];
/// Center of the pilot's head relative to the glider center
const HEAD_OFFSET: (f64, f64) = (16.0, 10.0);
/// Radius of the pilot's head in pixels
const HEAD_RADIUS: i16 = 9;

/// Reorders channels into the layout SDL2_gfx expects.
fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

/// Rotates a glider-local point by `angle` and moves it to `center`.
fn place(point: (f64, f64), center: Vector, angle: f64) -> Vector {
    add(center, rotate(Vector::new(point.0, point.1), angle))
}

/// Fills and outlines a glider part.
///
/// # Arguments
///
/// * `canvas` - SDL2 canvas to draw on
/// * `points` - Outline in glider-local coordinates
/// * `center` - Screen position of the glider center
/// * `angle` - Glider heading in radians
/// * `fill` - Interior color
fn polygon<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    points: &[(f64, f64)],
    center: Vector,
    angle: f64,
    fill: Color,
) -> Result<(), String> {
    let (xs, ys): (Vec<i16>, Vec<i16>) = points
        .iter()
        .map(|&p| {
            let v = place(p, center, angle);
            (v.x as i16, v.y as i16)
        })
        .unzip();
    canvas.filled_polygon(&xs, &ys, to_abgr(fill))?;
    canvas.polygon(&xs, &ys, to_abgr(OUTLINE))
}

/// Draws every cloud at its scrolled position.
///
/// # Arguments
///
/// * `canvas` - SDL2 canvas to draw on
/// * `sky` - Cloud layout
/// * `position` - Glider position the sky scrolls against
pub fn draw_sky<T: RenderTarget>(canvas: &mut Canvas<T>, sky: &Sky, position: Vector) -> Result<(), String> {
    for (at, radius) in sky.scrolled(position) {
        canvas.filled_circle(at.x as i16, at.y as i16, radius as i16, to_abgr(CLOUD))?;
    }
    Ok(())
}

/// Draws the glider at `center`, nose pointing along `direction`.
pub fn draw_glider<T: RenderTarget>(canvas: &mut Canvas<T>, center: Vector, direction: Vector) -> Result<(), String> {
    let angle = heading(direction);
    polygon(canvas, &BODY_POINTS, center, angle, BODY)?;
    polygon(canvas, &WING_POINTS, center, angle, WING)?;
    let head = place(HEAD_OFFSET, center, angle);
    canvas.filled_circle(head.x as i16, head.y as i16, HEAD_RADIUS, to_abgr(HEAD))?;
    canvas.circle(head.x as i16, head.y as i16, HEAD_RADIUS, to_abgr(OUTLINE))
}

/// Draws `vector` as a line from `center`, stretched by `multiplier`.
fn vector_line<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    center: Vector,
    vector: Vector,
    multiplier: f64,
    color: Color,
) -> Result<(), String> {
    let end = add(center, scale(vector, multiplier));
    canvas.thick_line(center.x as i16, center.y as i16, end.x as i16, end.y as i16, 2, to_abgr(color))
}

/// Draws velocity (gold), lift (lime), direction (blue) and drag (red)
/// from the glider center.
///
/// # Arguments
///
/// * `canvas` - SDL2 canvas to draw on
/// * `center` - Screen position of the glider
/// * `state` - Flight state whose vectors are drawn
pub fn draw_debug_vectors<T: RenderTarget>(canvas: &mut Canvas<T>, center: Vector, state: &FlightState) -> Result<(), String> {
    vector_line(canvas, center, state.velocity, VELOCITY_SCALE, Color::RGB(255, 215, 0))?;
    vector_line(canvas, center, state.lift, LIFT_SCALE, Color::RGB(0, 255, 0))?;
    vector_line(canvas, center, state.direction, DIRECTION_SCALE, Color::BLUE)?;
    vector_line(canvas, center, state.drag, DRAG_SCALE, Color::RED)
}

/// Speed and position readout in the top-left corner.
pub fn draw_readout(canvas: &mut Canvas<Window>, font: &Font, state: &FlightState) -> Result<(), String> {
    let text = format!(
        "speed {:.2}  x {:.0}  y {:.0}",
        state.speed(),
        state.position.x,
        state.position.y
    );
    let surface = font
        .render(&text)
        .blended(Color::RGB(20, 20, 40))
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;
    let query = texture.query();
    canvas.copy(&texture, None, Some(Rect::new(10, 10, query.width, query.height)))
}
