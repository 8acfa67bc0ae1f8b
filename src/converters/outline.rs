use crate::models::{
    bullet::BulletMode,
    elements::{PageElement, PageElementKind},
    presentation::Presentation,
    shape::Shape,
    slide::Slide,
    table::Table,
    text::TextFrame,
    text_element::Paragraph,
};
use std::fmt::{self, Write};

// --- Helper Function for Sorting ---
/// Elements are listed top to bottom, then left to right.
fn compare_elements_by_position(a: &PageElement, b: &PageElement) -> std::cmp::Ordering {
    (a.frame.top, a.frame.left).cmp(&(b.frame.top, b.frame.left))
}

// --- Text Rendering Logic ---
/// Renders one paragraph as an outline line, or `None` when it holds no text.
fn render_paragraph(paragraph: &Paragraph) -> Option<String> {
    let text = paragraph.text();
    if text.trim().is_empty() {
        return None;
    }
    let indent = "  ".repeat(paragraph.level as usize);
    let marker = match paragraph.bullet {
        BulletMode::None => "",
        BulletMode::Bullet => "- ",
        BulletMode::AutoNumber { .. } => "1. ",
    };
    Some(format!("{indent}{marker}{text}"))
}

fn render_text_frame(frame: &TextFrame) -> Vec<String> {
    frame.paragraphs.iter().filter_map(render_paragraph).collect()
}

/// Renders a table as pipe-separated rows; a cell's paragraphs are joined by a space.
fn render_table(table: &Table) -> Option<String> {
    let rows: Vec<String> = table
        .table_rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .table_cells
                .iter()
                .map(|cell| render_text_frame(&cell.text).join(" "))
                .collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect();
    if rows.is_empty() {
        None
    } else {
        Some(rows.join("\n"))
    }
}

/// Shape text is quoted, one quoted line per paragraph.
fn render_shape(shape: &Shape) -> Option<String> {
    let lines = render_text_frame(&shape.text);
    if lines.is_empty() {
        return None;
    }
    Some(
        lines
            .iter()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn render_page_element(element: &PageElement) -> Option<String> {
    match &element.element_kind {
        PageElementKind::Shape(shape) => render_shape(shape),
        PageElementKind::Table(table) => render_table(table),
        PageElementKind::Picture(picture) => Some(format!(
            "[picture {}x{} px: {}]",
            picture.pixel_width, picture.pixel_height, picture.source
        )),
    }
}

/// Body placeholders in layout order, then page elements sorted by position.
fn render_slide_body(slide: &Slide) -> Vec<String> {
    let mut blocks: Vec<String> = slide
        .placeholders
        .iter()
        .map(|placeholder| render_text_frame(&placeholder.text))
        .filter(|lines| !lines.is_empty())
        .map(|lines| lines.join("\n"))
        .collect();

    let mut elements: Vec<&PageElement> = slide.page_elements.iter().collect();
    elements.sort_by(|a, b| compare_elements_by_position(a, b));
    blocks.extend(elements.into_iter().filter_map(render_page_element));
    blocks
}

fn write_outline(out: &mut String, presentation: &Presentation) -> fmt::Result {
    writeln!(out, "# Presentation")?;
    if let Some(title) = &presentation.title {
        writeln!(out, "{}", title)?;
    }

    for (index, slide) in presentation.slides.iter().enumerate() {
        writeln!(out)?;
        write!(out, "## Slide {} ({:?})", index + 1, slide.layout)?;
        match &slide.title {
            Some(title) => writeln!(out, ": {}", title)?,
            None => writeln!(out)?,
        }
        for block in render_slide_body(slide) {
            writeln!(out)?;
            writeln!(out, "{}", block)?;
        }
    }
    Ok(())
}

// --- Public API Function ---

/// Renders a deck as a Markdown outline: one heading per slide with its layout
/// and title, followed by the body text, tables, pictures and shapes.
pub fn render_outline(presentation: &Presentation) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_outline(&mut out, presentation);
    out
}
