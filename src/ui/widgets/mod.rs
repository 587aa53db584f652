// ui/widgets/mod.rs - UI widgets

pub mod editor_pane;
pub mod file_dialog;
pub mod menu;
pub mod message_box;
pub mod status_bar;

use ratatui::layout::Rect;

/// Rect of at most `width` x `height` centred in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
