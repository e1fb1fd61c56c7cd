mod navigation;
mod toast;

use self::toast::ToastManager;
use crate::models::month::MonthRef;
use crate::models::settings::Settings;
use crate::services::interaction::{Action, CalendarState, EventForm, Outcome};
use crate::ui_egui::event_dialog::render_event_dialog;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::month_view::MonthView;
use chrono::Local;

pub struct CalendarApp {
    /// Events, open dialog, month and filter
    state: CalendarState,
    /// Values typed into the open dialog
    form: EventForm,
    theme: CalendarTheme,
    toasts: ToastManager,
    show_toasts: bool,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Local::now().naive_local();
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("calendar_header").show(ctx, |ui| {
            actions.extend(navigation::render_header(ui, &self.state, &self.theme));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(MonthView::show(ui, &self.state, &self.theme, now));
        });

        actions.extend(render_event_dialog(ctx, &self.state, &mut self.form));
        actions.extend(navigation::handle_shortcuts(ctx, &self.state));

        for action in actions {
            self.dispatch(action);
        }

        if self.show_toasts {
            self.toasts.render(ctx, self.theme.is_dark);
        }
    }
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let theme = CalendarTheme::from_settings(&settings);
        theme.apply_to_context(&cc.egui_ctx);

        let month = MonthRef::current();
        log::info!(
            "Opening {} with filter '{}' and {} theme",
            month,
            settings.default_filter,
            if theme.is_dark { "dark" } else { "light" }
        );

        Self {
            state: CalendarState::new(month, settings.default_filter),
            form: EventForm::blank(),
            theme,
            toasts: ToastManager::new(),
            show_toasts: settings.show_toasts,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let now = Local::now().naive_local();
        let previous = self.state.selection();

        let state = std::mem::take(&mut self.state);
        let (state, outcome) = state.apply(action, now);
        self.state = state;

        if self.state.selection() != previous {
            self.reset_form();
        }
        self.report(outcome);
    }

    /// Prefill the form for the dialog that just opened
    fn reset_form(&mut self) {
        self.form = match self.state.selected_event() {
            Some(event) => EventForm::for_event(event),
            None => EventForm::blank(),
        };
    }

    fn report(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created(event) => self.toasts.success(format!("Created \"{}\"", event.title)),
            Outcome::Updated(event) => self.toasts.success(format!("Renamed to \"{}\"", event.title)),
            Outcome::Deleted(_) => self.toasts.info("Event deleted"),
            Outcome::Rejected(err) => self.toasts.error(err.user_message()),
            Outcome::Unchanged | Outcome::SelectionChanged | Outcome::ViewChanged => {}
        }
    }
}
