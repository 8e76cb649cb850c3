//! The stateless draw pass: (layout, registry, interaction) → triangle
//! buffer, strictly back to front. Nothing here feeds back into state.

use glam::Vec2;

use crate::api::types::BallKind;
use crate::core::layout::{TableLayout, TableSize};
use crate::core::registry::BallRegistry;
use crate::input::interaction::{DragState, Interaction};
use crate::render::canvas::{Canvas, Rgba};
use crate::render::glyphs;
use crate::render::style::{ball_color, TableStyle};

/// Selection ring radius and thickness, in ball radii (22:10 and 6:10 in
/// the base layout).
const RING_RADIUS_SCALE: f32 = 2.2;
const RING_THICKNESS_SCALE: f32 = 0.6;
/// Diamond marker half-extent in rail widths.
const DIAMOND_SCALE: f32 = 0.18;

pub fn draw_table(
    canvas: &mut Canvas,
    layout: &TableLayout,
    balls: &BallRegistry,
    interaction: &Interaction,
    style: &TableStyle,
    size: TableSize,
) {
    draw_frame(canvas, layout, style);
    draw_balls(canvas, layout, balls);
    draw_selection_ring(canvas, layout, balls, interaction, style);
    draw_size_label(canvas, layout, style, size);
}

fn draw_frame(canvas: &mut Canvas, layout: &TableLayout, style: &TableStyle) {
    let rail = layout.rail_width;

    // Rail band behind the felt, rounded on the outer corners.
    canvas.fill_rounded_rect(
        layout.origin - Vec2::splat(rail),
        layout.size.x + 2.0 * rail,
        layout.size.y + 2.0 * rail,
        rail * 0.6,
        style.rail,
    );
    canvas.fill_rect(layout.origin, layout.size.x, layout.size.y, style.felt);

    for pocket in &layout.pockets {
        canvas.fill_circle(pocket.center, pocket.radius, style.pocket);
    }

    let d = layout.rail_width * DIAMOND_SCALE;
    for &c in &layout.diamonds {
        canvas.fill_polygon(
            &[
                c - Vec2::new(0.0, d),
                c + Vec2::new(d, 0.0),
                c + Vec2::new(0.0, d),
                c - Vec2::new(d, 0.0),
            ],
            style.diamond,
        );
    }
}

fn draw_balls(canvas: &mut Canvas, layout: &TableLayout, balls: &BallRegistry) {
    let r = layout.ball_radius;
    for ball in balls.iter() {
        let color = ball_color(ball.kind);
        match ball.kind {
            BallKind::Cue => canvas.fill_circle(ball.pos, r, color),
            BallKind::Solid(n) => {
                canvas.fill_circle(ball.pos, r, color);
                draw_number(canvas, ball.pos, r, n);
            }
            BallKind::Stripe(n) => {
                canvas.fill_circle(ball.pos, r, Rgba::WHITE);
                // Colour band across the middle; the corner radius keeps it
                // inside the disk.
                canvas.fill_rounded_rect(
                    ball.pos - Vec2::new(0.9 * r, 0.5 * r),
                    1.8 * r,
                    r,
                    0.5 * r,
                    color,
                );
                draw_number(canvas, ball.pos, r, n);
            }
        }
    }
}

fn draw_number(canvas: &mut Canvas, center: Vec2, r: f32, n: u8) {
    canvas.fill_circle(center, r * 0.45, Rgba::WHITE);
    let text = n.to_string();
    glyphs::draw_text_centered(canvas, &text, center, r * 0.5, r * 0.1, Rgba::BLACK);
}

fn draw_selection_ring(
    canvas: &mut Canvas,
    layout: &TableLayout,
    balls: &BallRegistry,
    interaction: &Interaction,
    style: &TableStyle,
) {
    let Some(id) = interaction.selected() else {
        return;
    };
    let Some(ball) = balls.get(id) else {
        return;
    };

    // Warn once the dragged ball hangs over a pocket mouth.
    let dragging = matches!(interaction.state(), DragState::Dragging { .. });
    let color = if dragging && layout.pocket_at(ball.pos).is_some() {
        style.ring_warning
    } else {
        style.ring
    };

    canvas.stroke_circle(
        ball.pos,
        layout.ball_radius * RING_RADIUS_SCALE,
        layout.ball_radius * RING_THICKNESS_SCALE,
        color,
    );
}

fn draw_size_label(canvas: &mut Canvas, layout: &TableLayout, style: &TableStyle, size: TableSize) {
    let center = Vec2::new(
        layout.origin.x + layout.size.x / 2.0,
        layout.origin.y + layout.size.y + layout.rail_width / 2.0,
    );
    glyphs::draw_text_centered(
        canvas,
        size.label(),
        center,
        layout.rail_width * 0.45,
        layout.rail_width * 0.08,
        style.label,
    );
}
