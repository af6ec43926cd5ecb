use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::GLOW;
use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

/// Half-width and half-height of the pointer glow, in cells.
const GLOW_RADIUS: (u16, u16) = (8, 3);

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(&app.config().profile.name, app.current_region());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let lines = app.content().window(app.scroll(), body.height);
    frame.render_widget(Paragraph::new(lines), body);

    let buffer = frame.buffer_mut();
    for (x, y) in glow_cells(body, app.view().pointer()) {
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_bg(GLOW);
        }
    }

    let footer_widget = Footer::new(app.progress());
    frame.render_widget(footer_widget.widget(footer), footer);
}

/// Cells of `area` inside the ellipse centred on the pointer.
fn glow_cells(area: Rect, (column, row): (u16, u16)) -> Vec<(u16, u16)> {
    let (rx, ry) = GLOW_RADIUS;
    let mut cells = Vec::new();
    if !area.contains((column, row).into()) {
        return cells;
    }
    let x_range = column.saturating_sub(rx).max(area.left())..(column + rx + 1).min(area.right());
    let y_range = row.saturating_sub(ry).max(area.top())..(row + ry + 1).min(area.bottom());
    for y in y_range {
        for x in x_range.clone() {
            let dx = (x as f32 - column as f32) / rx as f32;
            let dy = (y as f32 - row as f32) / ry as f32;
            if dx * dx + dy * dy <= 1.0 {
                cells.push((x, y));
            }
        }
    }
    cells
}
