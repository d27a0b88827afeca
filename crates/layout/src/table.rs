//! Table composition: top border row + header row + header separator +
//! (data row, row separator)* + bottom border row, framed with box-drawing
//! glyphs on all sides and at every column boundary.
//!
//! Column widths are solved once by the same fixed/percent/fill/auto
//! resolver the plain `Grid` uses, over an *augmented* column list that
//! inserts a narrow border column on every side of and between the real
//! data columns. Each data/header row is laid out through the ordinary
//! grid path with matching glyph cells spliced in at those positions, so
//! the vertical bars line up exactly with the column boundaries the width
//! solver picked. Horizontal rule rows are plain `Text` leaves built from
//! the same resolved widths, divided by `horizontal` glyphs with a
//! junction glyph at every boundary.

use escp_idf::{BorderGlyphs, BorderStyle, BreakHints, Dimension, GridColumn, GridRow, LayoutNode};
use escp_style::{Align, Style, StyleOverride};
use escp_types::{BoxConstraints, Dots, Rect, Size};

use crate::error::LayoutError;
use crate::grid::{layout_grid, solve_column_widths};
use crate::measure::line_height;
use crate::output::{LaidContent, LaidNode};

fn augment_columns(columns: &[GridColumn], border_width: Dots) -> Vec<GridColumn> {
    let mut out = Vec::with_capacity(columns.len() * 2 + 1);
    out.push(GridColumn { width: Dimension::Fixed(border_width) });
    for col in columns {
        out.push(col.clone());
        out.push(GridColumn { width: Dimension::Fixed(border_width) });
    }
    out
}

fn glyph_cell(ch: char) -> LayoutNode {
    LayoutNode::Text { content: ch.to_string(), style: StyleOverride::default(), align: None }
}

fn augment_row(row: &GridRow, vertical: char) -> GridRow {
    let mut cells = Vec::with_capacity(row.cells.len() * 2 + 1);
    cells.push(glyph_cell(vertical));
    for cell in &row.cells {
        cells.push(cell.clone());
        cells.push(glyph_cell(vertical));
    }
    GridRow { cells, height: row.height, keep_with_next: row.keep_with_next, break_before: row.break_before }
}

/// A horizontal rule across every augmented column: a corner/junction
/// glyph at each border position, a run of `horizontal` glyphs sized to
/// the column's resolved width at every data position.
fn rule_text(widths: &[Dots], hmi: Dots, glyphs: &BorderGlyphs, left: char, junction: char, right: char) -> String {
    let mut content = String::new();
    let last = widths.len() - 1;
    for (i, &w) in widths.iter().enumerate() {
        if i % 2 == 0 {
            content.push(if i == 0 { left } else if i == last { right } else { junction });
        } else {
            let chars = (w / hmi).max(1);
            for _ in 0..chars {
                content.push(glyphs.horizontal);
            }
        }
    }
    content
}

fn rule_node(text: String, width: Dots, height: Dots, y: Dots, style: &Style) -> LaidNode {
    LaidNode {
        rect: Rect::new(0, y, width, height),
        breaks: BreakHints { keep_together: true, break_before: false, break_after: false },
        content: LaidContent::Text { content: text, style: *style, align: Align::Left },
    }
}

pub fn layout_table(
    columns: &[GridColumn],
    header: Option<&[LayoutNode]>,
    rows: &[GridRow],
    border: BorderStyle,
    inherited: &Style,
    constraints: BoxConstraints,
) -> Result<(Size, BreakHints, LaidContent), LayoutError> {
    let glyphs = BorderGlyphs::for_style(border);
    let hmi = inherited.hmi().max(1);
    let line_h = line_height(inherited);

    let aug_columns = augment_columns(columns, hmi);
    let mut aug_rows: Vec<GridRow> = Vec::with_capacity(rows.len() + 1);
    if let Some(header_cells) = header {
        let header_row = GridRow { cells: header_cells.to_vec(), height: None, keep_with_next: false, break_before: false };
        aug_rows.push(augment_row(&header_row, glyphs.vertical));
    }
    for row in rows {
        aug_rows.push(augment_row(row, glyphs.vertical));
    }

    let widths = solve_column_widths(&aug_columns, &aug_rows, inherited, constraints.max_width);
    let total_width: Dots = widths.iter().sum();
    let row_constraints = BoxConstraints { max_width: Some(total_width), max_height: None };

    let mut children = Vec::new();
    let mut y: Dots = 0;

    let top = rule_text(&widths, hmi, &glyphs, glyphs.top_left, glyphs.t_down, glyphs.top_right);
    children.push(rule_node(top, total_width, line_h, y, inherited));
    y += line_h;

    let body_start = if header.is_some() {
        let (size, breaks, content) = layout_grid(&aug_rows[0..1], &aug_columns, inherited, row_constraints)?;
        children.push(LaidNode { rect: Rect::new(0, y, size.width, size.height), breaks, content });
        y += size.height;

        let sep = rule_text(&widths, hmi, &glyphs, glyphs.t_right, glyphs.cross, glyphs.t_left);
        children.push(rule_node(sep, total_width, line_h, y, inherited));
        y += line_h;
        1
    } else {
        0
    };

    let data_rows = &aug_rows[body_start..];
    for (i, row) in data_rows.iter().enumerate() {
        let single = std::slice::from_ref(row);
        let (size, breaks, content) = layout_grid(single, &aug_columns, inherited, row_constraints)?;
        children.push(LaidNode { rect: Rect::new(0, y, size.width, size.height), breaks, content });
        y += size.height;

        // Every row but the last gets an interior separator; the last
        // row's bottom edge is the table's closing border instead.
        if i + 1 < data_rows.len() {
            let sep = rule_text(&widths, hmi, &glyphs, glyphs.t_right, glyphs.cross, glyphs.t_left);
            children.push(rule_node(sep, total_width, line_h, y, inherited));
            y += line_h;
        }
    }

    let bottom = rule_text(&widths, hmi, &glyphs, glyphs.bottom_left, glyphs.t_up, glyphs.bottom_right);
    children.push(rule_node(bottom, total_width, line_h, y, inherited));
    y += line_h;

    Ok((Size::new(total_width, y), BreakHints::default(), LaidContent::Group(children)))
}
