use egui::{Color32, RichText};

use crate::models::filter::FilterMode;
use crate::models::month::NavDirection;
use crate::services::interaction::{Action, CalendarState, Selection};
use crate::ui_egui::theme::CalendarTheme;

/// Title, filter buttons and month navigation
pub(super) fn render_header(
    ui: &mut egui::Ui,
    state: &CalendarState,
    theme: &CalendarTheme,
) -> Option<Action> {
    let mut action = None;

    ui.add_space(6.0);
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new("Event Tracker Calendar").size(24.0).strong());
    });
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        for mode in FilterMode::ALL_MODES {
            let active = state.filter() == mode;
            let button = egui::Button::new(RichText::new(mode.label()).color(Color32::WHITE))
                .fill(theme.filter_button_color(active));
            if ui.add(button).clicked() {
                action = Some(Action::SetFilter(mode));
            }
        }
    });

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button("← Previous").clicked() {
            action = Some(Action::Navigate(NavDirection::Previous));
        }
        ui.add_space(12.0);
        ui.heading(state.month().title());
        ui.add_space(12.0);
        if ui.button("Next →").clicked() {
            action = Some(Action::Navigate(NavDirection::Next));
        }
    });
    ui.add_space(6.0);

    action
}

/// Arrow keys page through months while no dialog is open; Escape closes a dialog
pub(super) fn handle_shortcuts(ctx: &egui::Context, state: &CalendarState) -> Option<Action> {
    ctx.input(|input| {
        if state.selection() != Selection::Idle {
            return input
                .key_pressed(egui::Key::Escape)
                .then_some(Action::Cancel);
        }

        if input.key_pressed(egui::Key::ArrowLeft) {
            Some(Action::Navigate(NavDirection::Previous))
        } else if input.key_pressed(egui::Key::ArrowRight) {
            Some(Action::Navigate(NavDirection::Next))
        } else {
            None
        }
    })
}
