//! SVG serialization of face drawings.

use std::fmt::{self, Write};

use crate::command::{DrawCommand, LineCap, LineJoin, Paint};
use crate::renderer::FaceDrawing;

/// Writes the commands as SVG elements, one per line.
///
/// # Errors
///
/// Only fails if the underlying writer fails.
pub fn write_elements<W: Write>(out: &mut W, drawing: &FaceDrawing) -> fmt::Result {
    for command in &drawing.commands {
        match command {
            DrawCommand::Circle {
                center,
                radius,
                paint,
            } => {
                write!(out, r#"<circle cx="{}" cy="{}" r="{radius}""#, center.x, center.y)?;
                write_paint(out, paint)?;
            }
            DrawCommand::Line { from, to, paint } => {
                write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    from.x, from.y, to.x, to.y
                )?;
                write_paint(out, paint)?;
            }
            DrawCommand::Path { data, paint } => {
                write!(out, r#"<path d="{data}""#)?;
                write_paint(out, paint)?;
            }
        }
        out.write_str("/>\n")?;
    }
    Ok(())
}

/// Standalone `<svg>` document with a 0 0 100 100 view box.
#[must_use]
pub fn face_document(drawing: &FaceDrawing) -> String {
    let mut out = String::with_capacity(1024);
    let side = FaceDrawing::VIEW_BOX;
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {side} {side}" fill="none">"#
    );
    let _ = write_elements(&mut out, drawing);
    out.push_str("</svg>\n");
    out
}

fn write_paint<W: Write>(out: &mut W, paint: &Paint) -> fmt::Result {
    match paint.fill {
        Some(color) => write!(out, r#" fill="{color}""#)?,
        None => out.write_str(r#" fill="none""#)?,
    }
    if let Some(stroke) = paint.stroke {
        write!(out, r#" stroke="{}" stroke-width="{}""#, stroke.color, stroke.width)?;
        if stroke.cap == LineCap::Round {
            out.write_str(r#" stroke-linecap="round""#)?;
        }
        if stroke.join == LineJoin::Round {
            out.write_str(r#" stroke-linejoin="round""#)?;
        }
    }
    Ok(())
}
