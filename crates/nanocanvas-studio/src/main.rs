use std::f32::consts::PI;

use anyhow::Context as _;
use nanocanvas::logging::{init_logging, LoggingConfig};
use nanocanvas::raster::{DrawOp, RecordedFrame};
use nanocanvas::{Canvas, CanvasConfig, Color, LineCap, LineJoin, RecordingFactory, Vec2};

const WINDOW: (f32, f32) = (820.0, 560.0);

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    // Panel placed inside the window. Path coordinates are panel-local;
    // gradient coordinates are surface coordinates.
    let config = CanvasConfig {
        origin: Vec2::new(40.0, 30.0),
        ..CanvasConfig::new(400.0, 300.0)
    };
    let mut canvas =
        Canvas::new(&RecordingFactory, config).context("failed to create canvas context")?;

    canvas.begin_frame(WINDOW.0, WINDOW.1)?;
    draw_panel(&mut canvas)?;
    canvas.end_frame()?;

    let mut ctx = canvas.into_context();
    for frame in ctx.take_frames() {
        summarize(&frame);
    }
    Ok(())
}

fn draw_panel(canvas: &mut Canvas<nanocanvas::RecordingRasterizer>) -> anyhow::Result<()> {
    let (w, h) = (canvas.width(), canvas.height());

    canvas.clear_color(Color::rgba(24, 26, 32, 255))?;

    // Drop shadow behind the card.
    let card = canvas.local_rect_to_global(20.0, 20.0, w - 40.0, h - 40.0);
    let shadow = canvas.create_box_gradient(
        card.x(),
        card.y() + 4.0,
        card.width(),
        card.height(),
        8.0,
        12.0,
        Color::rgba(0, 0, 0, 128),
        Color::TRANSPARENT,
    );
    canvas.fill_style(shadow)?;
    canvas.begin_path().rect(0.0, 0.0, w, h).fill();

    // Card body, shaded top to bottom.
    let top = canvas.local_to_global(0.0, 20.0);
    let bottom = canvas.local_to_global(0.0, h - 20.0);
    let body = canvas.create_linear_gradient(
        top.x,
        top.y,
        bottom.x,
        bottom.y,
        Color::rgba(62, 66, 80, 255),
        Color::rgba(40, 42, 52, 255),
    );
    canvas.fill_style(&body)?;
    canvas.begin_path().rounded_rect(20.0, 20.0, w - 40.0, h - 40.0, 8.0).fill();

    // Gauge, clipped to the card's upper half.
    canvas.save()?;
    canvas.clip(20.0, 20.0, w - 40.0, (h - 40.0) / 2.0);
    canvas.translate(w / 2.0, h / 2.0);

    // Paints go through the current transform like paths do, so the glow
    // shares the circle's untranslated centre.
    let center = canvas.local_to_global(0.0, 0.0);
    let glow = canvas.create_radial_gradient(
        center.x,
        center.y,
        10.0,
        90.0,
        Color::rgba(255, 200, 64, 200),
        Color::TRANSPARENT,
    );
    canvas.fill_style(glow)?;
    canvas.begin_path().circle(0.0, 0.0, 90.0).fill();

    canvas
        .line_width(6.0)
        .line_cap(LineCap::Round)
        .line_join(LineJoin::Round)
        .stroke_style(Color::rgba(255, 200, 64, 255))?;
    canvas.begin_path().arc(0.0, 0.0, 70.0, PI, PI * 1.75, false).stroke();
    canvas.restore()?;

    // Sparkline along the bottom, drawn at reduced opacity.
    canvas.save()?;
    canvas.set_global_alpha(0.7);
    canvas.line_width(2.0).stroke_style(Color::GREEN)?;
    canvas.begin_path().move_to(30.0, h - 40.0);
    for (i, &v) in [0.2f32, 0.5, 0.35, 0.8, 0.6, 0.9, 0.4].iter().enumerate() {
        let x = 30.0 + (i as f32 + 1.0) * (w - 60.0) / 7.0;
        canvas.line_to(x, h - 40.0 - v * 80.0);
    }
    canvas.stroke();
    canvas.restore()?;

    canvas.stroke_style(Color::WHITE)?.line_width(1.0);
    canvas.stroke_rect(20.0, 20.0, w - 40.0, h - 40.0);
    Ok(())
}

fn summarize(frame: &RecordedFrame) {
    let fills = frame.draws.iter().filter(|d| d.is_fill()).count();
    log::info!(
        "frame {}x{} @ {}: {} draw call(s), {} fill(s), {} stroke(s)",
        frame.window_width,
        frame.window_height,
        frame.device_pixel_ratio,
        frame.draws.len(),
        fills,
        frame.draws.len() - fills
    );
    for (i, draw) in frame.draws.iter().enumerate() {
        let op = match draw.op {
            DrawOp::Fill => "fill".to_string(),
            DrawOp::Stroke(s) => format!("stroke w={}", s.width),
        };
        log::info!(
            "  #{i:02} {op:<12} {} cmd(s) alpha={:.2} scissor={:?} paint={:?}",
            draw.path.len(),
            draw.alpha,
            draw.scissor,
            draw.paint
        );
    }
}
