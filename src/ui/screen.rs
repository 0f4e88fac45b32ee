use ratatui::{layout::Rect, Frame};

use super::{banner, input, layout, legend, results};
use crate::logic::view::{result_view, ResultView};
use crate::App;

/// Render the search screen into `area`
pub fn render_search_screen(f: &mut Frame, area: Rect, app: &mut App) {
    let layout_info = layout::calculate_layout(area);
    let has_modal = app.model.has_modal();

    banner::render_banner(f, layout_info.banner_area);

    input::render_letter_input(
        f,
        layout_info.input_area,
        &app.model.search.letter,
        !has_modal,
    );

    let view = result_view(&app.model.search);
    let has_words = matches!(view, ResultView::Words(words) if !words.is_empty());
    let page_size = results::render_results(
        f,
        layout_info.results_area,
        view,
        app.model.ui.selected_index,
        app.model.ui.spinner_tick,
    );
    if page_size > 0 {
        app.model.ui.list_page_size = page_size;
    }

    legend::render_legend(f, layout_info.legend_area, has_modal, has_words);
}
