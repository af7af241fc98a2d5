use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::confirm_popup::{DELETE_QUESTION, POPUP_HEIGHT, POPUP_WIDTH};
use crate::tui::components::context_menu::menu_area;
use crate::tui::components::customer_form::{FORM_HEIGHT, FORM_WIDTH};
use crate::tui::components::{
    ConfirmPopup, ContextMenu, CustomerForm, CustomerTable, ProfilePanel, TitleBar, Toast,
    centered_rect,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Split the screen into title bar, main area and notification line.
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, main_area, toast_area] = screen_layout(frame.area());

    TitleBar::new(
        app.gateway.resource(),
        &app.status_message,
        app.store.len(),
        app.load_error.is_some(),
    )
    .render(frame, title_area);

    draw_main(frame, main_area, app, tui, spinner_frame);

    if let Some(draft) = &app.form {
        let area = centered_rect(FORM_WIDTH, FORM_HEIGHT, frame.area());
        CustomerForm::new(&mut tui.form, draft, app.is_editing()).render(frame, area);
    }

    if app.show_confirm_delete {
        let area = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, frame.area());
        let subject = app.selected_customer().map(|c| c.name());
        ConfirmPopup::new(DELETE_QUESTION, subject).render(frame, area);
    }

    Toast::new(tui.toast.as_ref().map(|shown| &shown.notification)).render(frame, toast_area);
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let profile = app
        .selected_customer()
        .filter(|_| app.show_profile && app.form.is_none());

    let table_area = match profile {
        Some(customer) => {
            let [table_area, profile_area] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(area);
            ProfilePanel::new(Some(customer)).render(frame, profile_area);
            table_area
        }
        None => area,
    };

    CustomerTable::new(
        &mut tui.table,
        app.store.customers(),
        app.selected.as_ref(),
        app.is_loading,
        spinner_frame,
    )
    .render(frame, table_area);

    if app.show_context_menu {
        let anchor = app
            .selected
            .as_ref()
            .and_then(|id| app.store.position(id))
            .and_then(|index| tui.table.row_area(index));
        tui.menu.hidden = anchor.is_none();
        if let Some(anchor) = anchor {
            ContextMenu::new(&mut tui.menu).render(frame, menu_area(anchor, area));
        }
    }
}
