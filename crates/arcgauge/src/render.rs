//! Render-boundary description of one gauge frame.
//!
//! Produces the ordered draw operations an external rasterizer needs (fill,
//! outline arc, reached arc, start-line tick). Stroke rendering, anti-aliasing
//! and color management stay with the host.

use nalgebra::Vector2;
use serde::Serialize;
use tracing::debug;

use crate::gauge::{ArcPaint, Color, FillMode, Gauge};

/// Padding inside the host's bounds (px).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

/// Host-measured drawing area (px).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

/// Square bounding an arc, stored as center and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ArcRect {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl ArcRect {
    #[inline]
    pub fn top(&self) -> f64 {
        self.center.y - self.radius
    }
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
    /// `(left, top, right, bottom)`.
    pub fn ltrb(&self) -> [f64; 4] {
        [
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        ]
    }
}

/// Largest square centered in the padded viewport, shrunk by `inset` on every side.
///
/// `inset` is usually half a stroke width so the stroke stays inside the view.
/// `None` when nothing is left to draw in.
pub fn arc_rect(vp: &Viewport, inset: f64) -> Option<ArcRect> {
    let left = vp.padding.left + inset;
    let top = vp.padding.top + inset;
    let right = vp.width - vp.padding.right - inset;
    let bottom = vp.height - vp.padding.bottom - inset;
    let (w, h) = (right - left, bottom - top);
    let radius = w.min(h) / 2.0;
    if !(radius > 0.0) {
        return None;
    }
    Some(ArcRect {
        center: Vector2::new(left + w / 2.0, top + h / 2.0),
        radius,
    })
}

/// One draw call for the rasterizer, angles in degrees (canvas convention).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillDisc {
        rect: ArcRect,
        color: Color,
    },
    FillPie {
        rect: ArcRect,
        start: f64,
        sweep: f64,
        color: Color,
    },
    Arc {
        rect: ArcRect,
        start: f64,
        sweep: f64,
        paint: ArcPaint,
    },
    Line {
        from: Vector2<f64>,
        to: Vector2<f64>,
        paint: ArcPaint,
    },
}

/// Draw operations for the gauge's current state, in paint order.
///
/// The reached arc is emitted after the outline so it is always on top; the
/// fill goes first so it never covers either arc.
pub fn scene(gauge: &Gauge, vp: &Viewport) -> Vec<DrawOp> {
    let style = gauge.style();
    let sweep = gauge.sweep();
    let dir = sweep.direction();
    let reached = style.reached_paint(dir);
    let outline = style.outline_paint(dir);
    let rw = f64::from(reached.width);

    let (Some(reached_rect), Some(outline_rect)) = (
        arc_rect(vp, rw / 2.0),
        arc_rect(vp, f64::from(outline.width) / 2.0),
    ) else {
        debug!(width = vp.width, height = vp.height, "viewport too small; nothing drawn");
        return Vec::new();
    };

    let mut ops = Vec::with_capacity(4);
    if style.fill_enabled {
        match style.fill_mode {
            FillMode::Pie => {
                if let Some(rect) = arc_rect(vp, rw) {
                    ops.push(DrawOp::FillPie {
                        rect,
                        start: sweep.reached_start,
                        sweep: sweep.reached_sweep,
                        color: style.fill_color,
                    });
                }
            }
            FillMode::Default => ops.push(DrawOp::FillDisc {
                rect: outline_rect,
                color: style.fill_color,
            }),
        }
    }
    ops.push(DrawOp::Arc {
        rect: outline_rect,
        start: sweep.outline_start,
        sweep: sweep.outline_sweep,
        paint: outline,
    });
    ops.push(DrawOp::Arc {
        rect: reached_rect,
        start: sweep.reached_start,
        sweep: sweep.reached_sweep,
        paint: reached,
    });
    if style.start_line_enabled {
        // Short tick across the ring at 12 o'clock.
        let cx = reached_rect.center.x;
        let top = reached_rect.top();
        ops.push(DrawOp::Line {
            from: Vector2::new(cx, top - rw / 2.0),
            to: Vector2::new(cx + 1.0, top + rw * 1.5),
            paint: outline,
        });
    }
    ops
}
