//! Scribblepad demo binary.
//!
//! Replays a scripted drawing session through the public surface API
//! and writes the result to disk: a PNG next to the working directory
//! and a saved-drawing record in a local `drawings/` store. There is no
//! windowing shell; this exists to exercise every surface operation
//! end to end.

use kurbo::Point;
use scribblepad_core::{Brush, BrushMode, PointerEvent, PointerId, PointerKind, CRAYON_PALETTE};
use scribblepad_surface::{encode_png, DrawingSurface, FileStorage, SavedDrawing, Storage, SurfaceConfig};
use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("starting scribblepad demo session");

    let mut surface = DrawingSurface::new(SurfaceConfig {
        width: 320,
        height: 240,
        ..SurfaceConfig::default()
    });

    // A face: two eyes and a mouth, drawn through the unified pointer
    // event path the way a host would deliver touch input.
    stroke(&mut surface, &[(110.0, 80.0), (112.0, 86.0), (110.0, 92.0)]);
    stroke(&mut surface, &[(210.0, 80.0), (208.0, 86.0), (210.0, 92.0)]);
    surface.set_color(CRAYON_PALETTE[1]); // red
    stroke(
        &mut surface,
        &[(100.0, 150.0), (130.0, 170.0), (160.0, 176.0), (190.0, 170.0), (220.0, 150.0)],
    );

    // A stray scribble, erased and then the erase undone and redone.
    surface.set_brush(Brush::draw(CRAYON_PALETTE[5])); // blue
    stroke(&mut surface, &[(40.0, 40.0), (60.0, 30.0), (80.0, 44.0)]);
    surface.set_mode(BrushMode::Erase);
    stroke(&mut surface, &[(40.0, 40.0), (60.0, 30.0), (80.0, 44.0)]);
    surface.undo();
    surface.redo();
    surface.set_mode(BrushMode::Draw);

    // Viewport grows; the face survives scaled.
    surface.resize(640, 480);
    log::info!("resized to {}x{}", surface.width(), surface.height());

    // Hold-to-clear: an aborted hold first, then a completed one, then
    // the clear undone so the drawing comes back for saving.
    let t0 = Instant::now();
    surface.press_clear(t0);
    surface.release_clear(t0 + Duration::from_millis(500));
    log::info!("early release, canvas kept ({} undo entries)", surface.undo_depth());

    let t1 = Instant::now();
    surface.press_clear(t1);
    surface.release_clear(t1 + Duration::from_secs(3));
    surface.undo();
    log::info!("cleared and undone, drawing restored");

    // Persist: a saved-drawing record plus a plain PNG.
    let storage = FileStorage::new(PathBuf::from("drawings"))?;
    let saved = SavedDrawing::from_pixmap("demo-face", surface.pixmap())?;
    storage.save("demo-face", &saved)?;

    let png = encode_png(surface.pixmap())?;
    std::fs::write("scribble.png", &png)?;
    log::info!("wrote scribble.png ({} bytes) and drawings/demo-face.json", png.len());

    Ok(())
}

/// Drive one stroke through the pointer event path.
fn stroke(surface: &mut DrawingSurface, points: &[(f64, f64)]) {
    let id = PointerId::MOUSE;
    let mut iter = points.iter();
    let Some(&(x, y)) = iter.next() else { return };

    surface.handle_pointer_event(PointerEvent::Down {
        position: Point::new(x, y),
        kind: PointerKind::Mouse,
        id,
    });
    for &(x, y) in iter {
        surface.handle_pointer_event(PointerEvent::Move { position: Point::new(x, y), id });
    }
    surface.handle_pointer_event(PointerEvent::Up {
        position: Point::new(points[points.len() - 1].0, points[points.len() - 1].1),
        id,
    });
}
