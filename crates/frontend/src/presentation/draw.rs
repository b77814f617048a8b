//! Canvas drawing for the simulation entities.
//!
//! Every entity draws itself from its own position and shape fields; the
//! only shared input is the [`Projection`] from scene to canvas space.

use ratatui::{
    style::Color,
    widgets::canvas::{Circle, Context, Line},
};
use sisyphus_sim::{Boulder, Hill, Position, Sisyphus};

use crate::presentation::theme;

/// Maps scene coordinates (`y` down) onto canvas coordinates (`y` up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    height: f64,
}

impl Projection {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    pub fn point(&self, position: Position) -> (f64, f64) {
        (position.x, self.height - position.y)
    }
}

/// Something that can paint itself on the scene canvas.
pub trait Draw {
    fn draw(&self, ctx: &mut Context<'_>, projection: Projection);
}

impl Draw for Hill {
    fn draw(&self, ctx: &mut Context<'_>, projection: Projection) {
        let outline = self.outline();
        for (index, &from) in outline.iter().enumerate() {
            let to = outline[(index + 1) % outline.len()];
            segment(ctx, projection, from, to, theme::HILL);
        }
    }
}

impl Draw for Boulder {
    fn draw(&self, ctx: &mut Context<'_>, projection: Projection) {
        let (x, y) = projection.point(self.position);
        ctx.draw(&Circle {
            x,
            y,
            radius: self.radius,
            color: theme::BOULDER,
        });
    }
}

impl Draw for Sisyphus {
    /// Stick figure leaning into the slope, filling the sprite box.
    fn draw(&self, ctx: &mut Context<'_>, projection: Projection) {
        let center = self.position;
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        let head_radius = self.height * 0.1;
        let head = center.offset(half_w * 0.2, -half_h + head_radius);
        let neck = head.offset(0.0, head_radius);
        let hip = center.offset(-half_w * 0.1, half_h * 0.3);
        let hands = center.offset(half_w * 0.9, -half_h * 0.45);

        let (head_x, head_y) = projection.point(head);
        ctx.draw(&Circle {
            x: head_x,
            y: head_y,
            radius: head_radius,
            color: theme::SISYPHUS,
        });

        segment(ctx, projection, neck, hip, theme::SISYPHUS);
        segment(ctx, projection, neck.offset(0.0, 15.0), hands, theme::SISYPHUS);
        segment(
            ctx,
            projection,
            neck.offset(0.0, 25.0),
            hands.offset(0.0, 12.0),
            theme::SISYPHUS,
        );
        segment(ctx, projection, hip, center.offset(-half_w * 0.6, half_h), theme::SISYPHUS);
        segment(ctx, projection, hip, center.offset(half_w * 0.3, half_h), theme::SISYPHUS);
    }
}

fn segment(
    ctx: &mut Context<'_>,
    projection: Projection,
    from: Position,
    to: Position,
    color: Color,
) {
    let (x1, y1) = projection.point(from);
    let (x2, y2) = projection.point(to);
    ctx.draw(&Line {
        x1,
        y1,
        x2,
        y2,
        color,
    });
}
