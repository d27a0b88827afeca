//! `Grid`: fixed set of columns shared by every row. Column widths are
//! solved once across all rows (fixed/percent/fill first, auto columns
//! measured from content and given the rest), then every row is laid out
//! against those widths. Rows are atomic units for pagination; a row
//! marked `keep_with_next` is merged with its successor into one unit.

use escp_idf::{GridColumn, GridRow};
use escp_style::Style;
use escp_types::{BoxConstraints, Dots, Rect, Size};

use crate::dimension::resolve_dimension;
use crate::error::LayoutError;
use crate::output::{LaidContent, LaidNode};
use crate::solve::layout_node;
use escp_idf::{BreakHints, Dimension};

pub(crate) fn solve_column_widths(columns: &[GridColumn], rows: &[GridRow], inherited: &Style, available: Option<Dots>) -> Vec<Dots> {
    let n = columns.len();
    let mut widths = vec![0; n];
    let mut fill_indices = Vec::new();
    let mut auto_indices = Vec::new();
    let table_width = available.unwrap_or(0);
    let mut remaining = table_width;

    for (i, col) in columns.iter().enumerate() {
        match col.width {
            Dimension::Fixed(w) => {
                widths[i] = w;
                remaining -= w;
            }
            Dimension::Percent(p) => {
                if let Some(resolved) = resolve_dimension(Some(Dimension::Percent(p)), available) {
                    widths[i] = resolved;
                    remaining -= resolved;
                } else {
                    auto_indices.push(i);
                }
            }
            Dimension::Fill => fill_indices.push(i),
            Dimension::Auto => auto_indices.push(i),
        }
    }
    remaining = remaining.max(0);

    if !auto_indices.is_empty() {
        let mut preferred = vec![0; n];
        for row in rows {
            for (ci, cell) in row.cells.iter().enumerate().take(n) {
                if !auto_indices.contains(&ci) {
                    continue;
                }
                let constraints = BoxConstraints::unbounded();
                if let Ok((size, _, _)) = layout_node(cell, inherited, constraints) {
                    preferred[ci] = preferred[ci].max(size.width);
                }
            }
        }
        let total_preferred: Dots = auto_indices.iter().map(|&i| preferred[i]).sum();
        let fill_count = fill_indices.len() as Dots;
        let auto_budget = if fill_count > 0 { total_preferred.min(remaining) } else { remaining };
        if total_preferred > 0 {
            for &i in &auto_indices {
                widths[i] = ((preferred[i] as f64 / total_preferred as f64) * auto_budget as f64).round() as Dots;
            }
        } else if !auto_indices.is_empty() {
            let share = auto_budget / auto_indices.len() as Dots;
            for &i in &auto_indices {
                widths[i] = share;
            }
        }
        remaining -= auto_budget;
    }

    if !fill_indices.is_empty() {
        let share = remaining.max(0) / fill_indices.len() as Dots;
        for &i in &fill_indices {
            widths[i] = share;
        }
    }

    widths
}

/// Groups row indices that must stay together: a run of rows where every
/// row but the last has `keep_with_next` set.
fn cluster_rows(rows: &[GridRow]) -> Vec<Vec<usize>> {
    let mut clusters = Vec::new();
    let mut current = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        current.push(i);
        if !row.keep_with_next {
            clusters.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        clusters.push(current);
    }
    clusters
}

pub fn layout_grid(
    rows: &[GridRow],
    columns: &[GridColumn],
    inherited: &Style,
    constraints: BoxConstraints,
) -> Result<(Size, BreakHints, LaidContent), LayoutError> {
    let widths = solve_column_widths(columns, rows, inherited, constraints.max_width);
    let total_width: Dots = widths.iter().sum();

    let clusters = cluster_rows(rows);
    let mut cluster_nodes = Vec::with_capacity(clusters.len());
    let mut total_height: Dots = 0;

    for cluster in clusters {
        let mut row_nodes = Vec::with_capacity(cluster.len());
        let mut cluster_height: Dots = 0;
        for &ri in &cluster {
            let row = &rows[ri];
            let mut cell_nodes = Vec::with_capacity(row.cells.len());
            let mut x: Dots = 0;
            let mut row_height = row.height.unwrap_or(0);
            for (ci, cell) in row.cells.iter().enumerate() {
                let width = widths.get(ci).copied().unwrap_or(0);
                let cc = BoxConstraints { max_width: Some(width), max_height: None };
                let (size, breaks, content) = layout_node(cell, inherited, cc)?;
                if row.height.is_none() {
                    row_height = row_height.max(size.height);
                }
                cell_nodes.push((x, size.width.max(width), breaks, content));
                x += width;
            }
            let cells_laid: Vec<LaidNode> = cell_nodes
                .into_iter()
                .map(|(x, w, breaks, content)| LaidNode { rect: Rect::new(x, 0, w, row_height), breaks, content })
                .collect();
            row_nodes.push(LaidNode {
                rect: Rect::new(0, cluster_height, total_width, row_height),
                breaks: BreakHints { keep_together: false, break_before: row.break_before, break_after: false },
                content: LaidContent::Group(cells_laid),
            });
            cluster_height += row_height;
        }
        let break_before = rows[cluster[0]].break_before;
        cluster_nodes.push(LaidNode {
            rect: Rect::new(0, total_height, total_width, cluster_height),
            breaks: BreakHints { keep_together: true, break_before, break_after: false },
            content: LaidContent::Group(row_nodes),
        });
        total_height += cluster_height;
    }

    Ok((
        Size::new(total_width, total_height),
        BreakHints::default(),
        LaidContent::Group(cluster_nodes),
    ))
}
