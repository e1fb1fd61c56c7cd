//! Create and edit dialogs.
//!
//! The dialogs only edit the [`EventForm`] they are given; saving, deleting
//! and closing come back as [`Action`]s for the controller.

use egui::{Color32, RichText};

use crate::models::event::{Event, Slot};
use crate::services::interaction::{Action, CalendarState, EventForm, Selection};

const DIALOG_WIDTH: f32 = 320.0;

/// Render whichever dialog the selection calls for
pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &CalendarState,
    form: &mut EventForm,
) -> Option<Action> {
    match state.selection() {
        Selection::Idle => None,
        Selection::Creating(slot) => render_create_dialog(ctx, slot, form),
        Selection::Editing(_) => match state.selected_event() {
            Some(event) => render_edit_dialog(ctx, event, form),
            None => {
                log::warn!("Edit dialog open for a missing event, closing it");
                Some(Action::Cancel)
            }
        },
    }
}

fn render_create_dialog(ctx: &egui::Context, slot: Slot, form: &mut EventForm) -> Option<Action> {
    let mut action = None;

    egui::Window::new("Create New Event")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(DIALOG_WIDTH);
            ui.label(RichText::new(slot.date().format("%A, %B %-d, %Y").to_string()).strong());
            ui.add_space(8.0);

            let title = ui.add(
                egui::TextEdit::singleline(&mut form.title)
                    .hint_text("Event Title")
                    .desired_width(DIALOG_WIDTH),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.location)
                    .hint_text("Event Location")
                    .desired_width(DIALOG_WIDTH),
            );

            ui.add_space(12.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    action = Some(Action::Cancel);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() || submitted_with_enter(ui, &title) {
                        action = Some(Action::Submit(form.clone()));
                    }
                });
            });
        });

    action
}

fn render_edit_dialog(ctx: &egui::Context, event: &Event, form: &mut EventForm) -> Option<Action> {
    let mut action = None;

    egui::Window::new("Event Options")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(DIALOG_WIDTH);
            ui.label(
                RichText::new(event.start.format("%A, %B %-d, %Y %H:%M").to_string()).strong(),
            );
            if let Some(location) = &event.location {
                ui.label(format!("📍 {}", location));
            }
            ui.add_space(8.0);

            let title = ui.add(
                egui::TextEdit::singleline(&mut form.title)
                    .hint_text("Event Title")
                    .desired_width(DIALOG_WIDTH),
            );

            ui.add_space(12.0);
            ui.separator();

            ui.horizontal(|ui| {
                let delete = egui::Button::new(RichText::new("Delete").color(Color32::WHITE))
                    .fill(Color32::from_rgb(180, 60, 60));
                if ui.add(delete).clicked() {
                    action = Some(Action::Delete);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Edit").clicked() || submitted_with_enter(ui, &title) {
                        action = Some(Action::Submit(form.clone()));
                    }
                    if ui.button("Close").clicked() {
                        action = Some(Action::Cancel);
                    }
                });
            });
        });

    action
}

fn submitted_with_enter(ui: &egui::Ui, field: &egui::Response) -> bool {
    field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
