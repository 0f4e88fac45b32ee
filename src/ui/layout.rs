use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Title and tagline
    pub banner_area: Rect,
    /// One-character input box
    pub input_area: Rect,
    /// Loading indicator, error text, or word list
    pub results_area: Rect,
    /// Hotkey legend (bottom line)
    pub legend_area: Rect,
}

pub const BANNER_HEIGHT: u16 = 4;
pub const INPUT_HEIGHT: u16 = 3;
pub const LEGEND_HEIGHT: u16 = 1;

/// Split the full-bleed screen region into the search screen's areas
pub fn calculate_layout(screen: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(LEGEND_HEIGHT),
        ])
        .split(screen);

    LayoutInfo {
        banner_area: chunks[0],
        input_area: chunks[1],
        results_area: chunks[2],
        legend_area: chunks[3],
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_vertically() {
        let info = calculate_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(info.banner_area.height, BANNER_HEIGHT);
        assert_eq!(info.input_area.height, INPUT_HEIGHT);
        assert_eq!(info.legend_area.height, LEGEND_HEIGHT);
        assert!(info.banner_area.y < info.input_area.y);
        assert!(info.input_area.y < info.results_area.y);
        assert!(info.results_area.y < info.legend_area.y);
        // 24 rows minus 2 margin minus fixed rows
        assert_eq!(info.results_area.height, 24 - 2 - BANNER_HEIGHT - INPUT_HEIGHT - LEGEND_HEIGHT);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 50, 4);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 3);
    }
}
