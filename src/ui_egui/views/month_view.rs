use chrono::NaiveDateTime;
use egui::{Align, Color32, Layout, Margin, RichText, Rounding, Stroke, Vec2};

use crate::models::event::Event;
use crate::services::calendar_grid::{GridCell, WEEKDAY_HEADERS};
use crate::services::event::queries::events_on_date;
use crate::services::interaction::{Action, CalendarState};
use crate::ui_egui::theme::CalendarTheme;

const MIN_CELL_HEIGHT: f32 = 70.0;
const HEADER_HEIGHT: f32 = 28.0;
const DAY_LABEL_HEIGHT: f32 = 18.0;
const MARKER_HEIGHT: f32 = 18.0;
const CELL_PADDING: f32 = 4.0;
const SPACING: f32 = 2.0;

pub struct MonthView;

impl MonthView {
    /// Render the month grid and return the click, if any, made this frame
    pub fn show(
        ui: &mut egui::Ui,
        state: &CalendarState,
        theme: &CalendarTheme,
        now: NaiveDateTime,
    ) -> Option<Action> {
        let cells = state.grid(now.date());
        let visible = state.visible_events(now);
        let mut action = None;

        let weeks = (cells.len() / 7).max(1) as f32;
        let col_width = ((ui.available_width() - SPACING * 6.0) / 7.0).max(40.0);
        let cell_height = ((ui.available_height() - HEADER_HEIGHT - SPACING * weeks) / weeks)
            .max(MIN_CELL_HEIGHT);
        let cell_size = Vec2::new(col_width, cell_height);

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("month_grid")
                .spacing([SPACING, SPACING])
                .show(ui, |ui| {
                    for day in WEEKDAY_HEADERS {
                        Self::render_header_cell(ui, day, theme, col_width);
                    }
                    ui.end_row();

                    for week in cells.chunks(7) {
                        for cell in week {
                            let day_events = events_on_date(&visible, cell.date);
                            if let Some(clicked) =
                                Self::render_day_cell(ui, cell, &day_events, theme, now, cell_size)
                            {
                                action = Some(clicked);
                            }
                        }
                        ui.end_row();
                    }
                });
        });

        action
    }

    fn render_header_cell(ui: &mut egui::Ui, day: &str, theme: &CalendarTheme, width: f32) {
        ui.allocate_ui_with_layout(
            Vec2::new(width, HEADER_HEIGHT),
            Layout::centered_and_justified(egui::Direction::TopDown),
            |ui| {
                egui::Frame::none()
                    .fill(theme.header_background)
                    .rounding(Rounding::same(4.0))
                    .inner_margin(Margin::symmetric(4.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(day).strong().color(theme.text_primary));
                    });
            },
        );
    }

    /// Day number and filler area dispatch a date click; an event marker
    /// dispatches its own click instead, so only one of them fires.
    fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &GridCell,
        events: &[&Event],
        theme: &CalendarTheme,
        now: NaiveDateTime,
        size: Vec2,
    ) -> Option<Action> {
        let mut action = None;

        let background = if cell.is_today {
            theme.today_background
        } else if cell.in_current_month {
            theme.day_background
        } else {
            theme.other_month_background
        };
        let stroke = if cell.is_today {
            Stroke::new(2.0, theme.today_border)
        } else {
            Stroke::new(1.0, theme.day_border)
        };
        let text_color = if cell.in_current_month {
            theme.text_primary
        } else {
            theme.text_secondary
        };
        let inner_width = (size.x - CELL_PADDING * 2.0).max(0.0);

        ui.allocate_ui_with_layout(size, Layout::top_down(Align::Min), |ui| {
            egui::Frame::none()
                .fill(background)
                .stroke(stroke)
                .rounding(Rounding::same(4.0))
                .inner_margin(Margin::same(CELL_PADDING))
                .show(ui, |ui| {
                    ui.set_width(inner_width);
                    ui.spacing_mut().item_spacing.y = SPACING;

                    let day_number = egui::Button::new(
                        RichText::new(cell.date.format("%-d").to_string())
                            .color(text_color)
                            .strong(),
                    )
                    .frame(false);
                    if ui
                        .add_sized([inner_width, DAY_LABEL_HEIGHT], day_number)
                        .clicked()
                    {
                        action = Some(Action::ClickDate(cell.date));
                    }

                    for event in events {
                        let marker = egui::Button::new(
                            RichText::new(&event.title).size(12.0).color(Color32::WHITE),
                        )
                        .fill(theme.event_color(event.timing(now)));

                        let response = ui
                            .add_sized([inner_width, MARKER_HEIGHT], marker)
                            .on_hover_text(event_tooltip(event));
                        if response.clicked() {
                            action = Some(Action::ClickEvent(event.id));
                        }
                    }

                    let used = DAY_LABEL_HEIGHT + events.len() as f32 * (MARKER_HEIGHT + SPACING);
                    let filler = size.y - CELL_PADDING * 2.0 - used - SPACING;
                    if filler > 0.0 {
                        let blank = egui::Button::new("").frame(false);
                        if ui.add_sized([inner_width, filler], blank).clicked() {
                            action = Some(Action::ClickDate(cell.date));
                        }
                    }
                });
        });

        action
    }
}

fn event_tooltip(event: &Event) -> String {
    let time = format!(
        "{} - {}",
        event.start.format("%H:%M"),
        event.end.format("%H:%M")
    );
    match &event.location {
        Some(location) => format!("{}\n{}\n{}", event.title, time, location),
        None => format!("{}\n{}", event.title, time),
    }
}
