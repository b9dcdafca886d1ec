//! Viewer layout: scatter plot, headline table, tooltip and bars.

use super::formatters::{format_axis_label, truncate_to_width};
use super::ThemeColors;
use crate::app::{App, Focus};
use crate::controller::Tooltip;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table,
        TableState,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the viewer UI.
pub(super) fn draw_viewer(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let plot_area = if app.table_visible() {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[0]);
        draw_table(f, app, content[1], &colors);
        content[0]
    } else {
        chunks[0]
    };

    draw_plot(f, app, plot_area, &colors);
    if let Some(tooltip) = app.controller.tooltip() {
        draw_tooltip(f, app, tooltip, plot_area, &colors);
    }

    draw_status(f, app, chunks[1], &colors);
    draw_keymap(f, app, chunks[2], &colors);
}

fn pane_block<'a>(title: String, focused: bool, colors: &ThemeColors) -> Block<'a> {
    let border = if focused {
        colors.focus_border
    } else {
        colors.border
    };
    Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg))
}

fn draw_plot(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let controller = &app.controller;
    let points = controller.points();
    let width = controller.geometry().inner_width().max(1.0);
    let height = controller.geometry().inner_height().max(1.0);
    let hovered = controller.hovered();

    // Pixel rows grow downward; the chart's y axis grows upward.
    let mut plain = Vec::with_capacity(points.len());
    let mut marked = Vec::new();
    for point in points.points() {
        let pos = (point.cx, height - point.cy);
        if Some(point.title.as_str()) == hovered {
            marked.push(pos);
        } else {
            plain.push(pos);
        }
    }

    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.point))
            .data(&plain),
        Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.hover))
            .data(&marked),
    ];

    let x_scale = points.x_scale();
    let x_labels = vec![
        format_axis_label(x_scale.invert(0.0)),
        format_axis_label(x_scale.invert(width / 2.0)),
        format_axis_label(x_scale.invert(width)),
    ];
    let y_scale = points.y_scale();
    let y_labels = vec![
        format_axis_label(y_scale.invert(height)),
        format_axis_label(y_scale.invert(height / 2.0)),
        format_axis_label(y_scale.invert(0.0)),
    ];

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.label))
        .bounds([0.0, width])
        .labels(x_labels);
    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.label))
        .bounds([0.0, height])
        .labels(y_labels);

    let name = controller
        .dataset()
        .file_name()
        .unwrap_or_else(|| "vizdims".to_string());
    let title = format!(
        " {} | {}/{} ",
        name,
        points.len(),
        controller.dataset().len()
    );

    let chart = Chart::new(datasets)
        .block(pane_block(title, app.focus == Focus::Plot, colors))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn draw_table(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let Some(table) = app.controller.table() else {
        return;
    };

    let date_width: u16 = 10;
    let title_width = (area.width as usize).saturating_sub(date_width as usize + 4);
    let match_style = Style::default()
        .fg(colors.match_fg)
        .bg(colors.match_bg)
        .add_modifier(Modifier::BOLD);

    let rows: Vec<Row<'_>> = table
        .rows()
        .iter()
        .map(|row| {
            let mut budget = title_width;
            let mut spans = Vec::new();
            for segment in &row.segments {
                if budget == 0 {
                    break;
                }
                let text = truncate_to_width(&segment.text, budget);
                budget = budget.saturating_sub(text.width());
                let style = if segment.highlighted {
                    match_style
                } else {
                    Style::default().fg(colors.text)
                };
                spans.push(Span::styled(text, style));
            }

            Row::new(vec![
                Cell::from(Line::from(spans)),
                Cell::from(row.date.clone()).style(Style::default().fg(colors.label)),
            ])
        })
        .collect();

    let header = Row::new(vec![Cell::from("Headline"), Cell::from("Published")]).style(
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    );

    let title = format!(" Headlines ({}) ", table.rows().len());
    let widget = Table::new(
        rows,
        [Constraint::Min(10), Constraint::Length(date_width)],
    )
    .header(header)
    .block(pane_block(title, app.focus == Focus::Table, colors))
    .row_highlight_style(Style::default().fg(colors.bg).bg(colors.hover));

    let selected = table.highlighted().and_then(|t| table.position(t));
    let mut state = TableState::default().with_selected(selected);
    f.render_stateful_widget(widget, area, &mut state);
}

fn draw_tooltip(f: &mut Frame<'_>, app: &App, tooltip: &Tooltip, plot: Rect, colors: &ThemeColors) {
    let frame = f.area();
    let max_width = (frame.width as usize).saturating_sub(4).min(60);
    let title = truncate_to_width(&tooltip.title, max_width);
    let published = truncate_to_width(&tooltip.published, max_width);

    let text_width = title.width().max(published.width());
    let width = (text_width as u16 + 2).min(frame.width);
    let height = 4.min(frame.height);

    // Place the popup just right of and above the point, kept on screen.
    let (col, row) = match tooltip.anchor {
        Some((cx, cy)) => {
            let geometry = app.controller.geometry();
            let fx = cx / geometry.inner_width().max(1.0);
            let fy = cy / geometry.inner_height().max(1.0);
            (
                plot.x + (fx * plot.width.saturating_sub(1) as f64) as u16 + 2,
                (plot.y + (fy * plot.height.saturating_sub(1) as f64) as u16).saturating_sub(1),
            )
        },
        None => (plot.x + 1, plot.y + 1),
    };
    let x = col.min(frame.width.saturating_sub(width));
    let y = row.min(frame.height.saturating_sub(height));
    let area = Rect::new(x, y, width, height);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(published, Style::default().fg(colors.label))),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.hover))
                .style(Style::default().bg(colors.bg)),
        ),
        area,
    );
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let text = if app.search.is_active() {
        format!("/{}▏", app.search.buffer())
    } else if !app.search.buffer().is_empty() {
        format!("[{}] {}", app.search.buffer(), app.status)
    } else {
        app.status.clone()
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let keymap_text = if app.search.is_active() {
        "Type to filter | Enter/Esc:done"
    } else if app.table_visible() {
        "q:quit | /:search | Esc:clear | jk:hover | Tab:plot/table | Enter:open | y:copy url | T:theme"
    } else {
        "q:quit | /:search | Esc:clear | jk:hover | Enter:open | y:copy url | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
