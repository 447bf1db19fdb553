//! SVG composition of a whole frame.
//!
//! ```text
//! <svg> page background
//!   per glyph (lowest stack_order first):
//!     <g translate(position) scale(glyph.scale) opacity>
//!       rounded white card, icon_size square
//!       <g> face drawing fitted into the central face_fraction </g>
//!     </g>
//! </svg>
//! ```

use std::fmt::{self, Write};

use facetrail_core::constants::DEFAULT_ICON_SIZE;
use facetrail_core::Viewport;
use facetrail_face::svg::write_elements;
use facetrail_face::{render_face, Color, FaceConfig, FaceDrawing};

use crate::presentation::SegmentGlyph;

/// Styling of the icon cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    /// Card edge length in pixels.
    pub icon_size: f64,
    /// Share of the card edge covered by the face.
    pub face_fraction: f64,
    /// Corner radius as a share of the card edge.
    pub corner_ratio: f64,
    /// Card fill.
    pub card: Color,
    /// Page fill.
    pub background: Color,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            face_fraction: 0.7,
            corner_ratio: 0.24,
            card: Color::WHITE,
            background: Color::FACE,
        }
    }
}

/// Number printed with at most three decimals.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1000.0).round() / 1000.0;
        // Avoid "-0"
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{rounded}")
    }
}

/// Renders one frame as a standalone SVG document.
///
/// Glyphs are painted by ascending `stack_order`, so the head ends up on top
/// whatever order they are passed in. Invisible glyphs are skipped.
#[must_use]
pub fn render_scene(
    glyphs: &[SegmentGlyph],
    face: &FaceConfig,
    viewport: Viewport,
    options: &SceneOptions,
) -> String {
    let mut ordered: Vec<&SegmentGlyph> = glyphs.iter().filter(|g| g.is_visible()).collect();
    ordered.sort_by_key(|g| g.stack_order);

    let mut out = String::with_capacity(512 + ordered.len() * 1024);
    // Writing into a String cannot fail.
    let _ = write_scene(&mut out, &ordered, face, viewport, options);
    out
}

fn write_scene(
    out: &mut String,
    glyphs: &[&SegmentGlyph],
    face: &FaceConfig,
    viewport: Viewport,
    options: &SceneOptions,
) -> fmt::Result {
    let (w, h) = (Num(viewport.width), Num(viewport.height));
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    writeln!(out, r#"<rect width="{w}" height="{h}" fill="{}"/>"#, options.background)?;

    let size = options.icon_size;
    let half = size / 2.0;
    let face_side = size * options.face_fraction;
    let face_scale = face_side / FaceDrawing::VIEW_BOX;

    for glyph in glyphs {
        writeln!(
            out,
            r#"<g transform="translate({} {}) scale({})" opacity="{}">"#,
            Num(glyph.position.x),
            Num(glyph.position.y),
            Num(glyph.scale),
            Num(glyph.opacity),
        )?;
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
            Num(-half),
            Num(-half),
            Num(size),
            Num(size),
            Num(size * options.corner_ratio),
            options.card,
        )?;
        writeln!(
            out,
            r#"<g transform="translate({} {}) scale({})" fill="none">"#,
            Num(-face_side / 2.0),
            Num(-face_side / 2.0),
            Num(face_scale),
        )?;
        write_elements(out, &render_face(glyph.expression_slot, face))?;
        out.write_str("</g>\n</g>\n")?;
    }

    out.write_str("</svg>\n")
}
