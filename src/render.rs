use landing_core::ParticleField;
use std::f64::consts::TAU;
use web_sys as web;

/// Draws a [`ParticleField`] onto a 2D canvas context.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn draw(&self, field: &ParticleField) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, field.width as f64, field.height as f64);

        for p in &field.particles {
            ctx.begin_path();
            if ctx
                .arc(
                    p.position.x as f64,
                    p.position.y as f64,
                    p.radius as f64,
                    0.0,
                    TAU,
                )
                .is_err()
            {
                continue;
            }
            ctx.set_fill_style_str(&p.fill_style());
            ctx.fill();
        }

        for link in field.links() {
            ctx.begin_path();
            ctx.move_to(link.from.x as f64, link.from.y as f64);
            ctx.line_to(link.to.x as f64, link.to.y as f64);
            ctx.set_stroke_style_str(&link.stroke_style());
            ctx.stroke();
        }
    }
}
