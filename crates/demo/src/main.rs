// File: crates/demo/src/main.rs
// Summary: Demo loads word boxes from CSV, matches a query region against them,
// and replays a scripted drag-resize session, printing results as JSON.

use anyhow::{Context, Result};
use marquee_core::drag::{DragResizeEngine, GestureSample, GestureState, SelectionRect};
use marquee_core::geometry::{CenterRotatedBox, CoordinateType, OverlayBounds, Point};
use marquee_core::region::find_words_in_region;
use marquee_core::text::Word;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    // Accept a CSV path from the CLI or fall back to the bundled sample.
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/data/words.csv".to_string());
    let path = Path::new(&raw);

    let words = load_words_csv(path)
        .with_context(|| format!("failed to load word CSV '{}'", path.display()))?;
    println!("Loaded {} words from {}", words.len(), path.display());

    // A 1280x720 displayed image; the query covers its upper-middle band.
    let bounds = OverlayBounds::sized(1280.0, 720.0);
    let query = CenterRotatedBox::new(Point::new(0.5, 0.3), 0.6, 0.3);

    match find_words_in_region(&words, &query, bounds) {
        Some(m) => {
            let selected: Vec<&str> = words[m.start_index..=m.end_index]
                .iter()
                .map(|w| w.text.as_str())
                .collect();
            println!("Match: {}", serde_json::to_string(&m)?);
            println!("Selected text: {:?}", selected.join(" "));
        }
        None => println!("No word overlaps the query region."),
    }

    // Replay a drag session on the matched region's bounding box: grab the
    // bottom-right corner, pull it outward, release.
    let mut engine = DragResizeEngine::new(bounds);
    engine.render_selection(SelectionRect::new(0.2, 0.15, 0.6, 0.3));

    let corner = (0.8 * bounds.width, 0.45 * bounds.height);
    let down = sample(GestureState::Starting, corner, corner);
    if !engine.handle_down_gesture(&down) {
        anyhow::bail!("down gesture missed the corner affordance");
    }
    for step in 1..=5 {
        let t = step as f64 / 5.0;
        let at = (corner.0 + 120.0 * t, corner.1 + 60.0 * t);
        engine.handle_drag_gesture(&sample(GestureState::Dragging, corner, at));
    }
    match engine.handle_up_gesture() {
        Some(committed) => println!("Drag committed: {}", serde_json::to_string(&committed)?),
        None => println!("Drag ended with no net change."),
    }

    Ok(())
}

fn sample(state: GestureState, start: (f64, f64), client: (f64, f64)) -> GestureSample {
    GestureSample {
        state,
        start_x: start.0,
        start_y: start.1,
        client_x: client.0,
        client_y: client.1,
    }
}

/// Load words from a CSV with headers
/// `text,center_x,center_y,width,height,rotation,coordinate_type`.
/// Rotation and coordinate_type are optional per row.
fn load_words_csv(path: &Path) -> Result<Vec<Word>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);

    let i_text = idx("text").context("missing 'text' column")?;
    let i_cx = idx("center_x").context("missing 'center_x' column")?;
    let i_cy = idx("center_y").context("missing 'center_y' column")?;
    let i_w = idx("width").context("missing 'width' column")?;
    let i_h = idx("height").context("missing 'height' column")?;
    let i_rot = idx("rotation");
    let i_kind = idx("coordinate_type");

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| -> Result<f64> {
            rec.get(i)
                .with_context(|| format!("row {row}: missing column {i}"))?
                .parse::<f64>()
                .with_context(|| format!("row {row}: not a number"))
        };
        let mut box_ = CenterRotatedBox::new(
            Point::new(num(i_cx)?, num(i_cy)?),
            num(i_w)?,
            num(i_h)?,
        );
        if let Some(i) = i_rot {
            if let Some(s) = rec.get(i).filter(|s| !s.is_empty()) {
                box_ = box_.with_rotation(
                    s.parse::<f64>().with_context(|| format!("row {row}: bad rotation"))?,
                );
            }
        }
        if let Some(i) = i_kind {
            if let Some(s) = rec.get(i).filter(|s| !s.is_empty()) {
                let kind: CoordinateType = s
                    .parse()
                    .map_err(|e| anyhow::anyhow!("row {row}: {e}"))?;
                box_ = box_.with_coordinate_type(kind);
            }
        }
        let text = rec.get(i_text).unwrap_or("").to_string();
        out.push(Word::new(box_, text));
    }
    Ok(out)
}
