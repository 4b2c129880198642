//! Main application state and UI layout.

use detent_config::{KnobSpec, Panel, factory_panels, list_user_panels};
use detent_core::KnobState;
use detent_gui_core::{Appearance, Dial, Theme};
use egui::{CentralPanel, Context, Frame, Margin, ScrollArea, SidePanel, TopBottomPanel};

use crate::activity::ActivityLog;

/// Default dial edge length in points.
pub const DEFAULT_DIAL_SIZE: f32 = 200.0;

/// One dial on screen.
struct DialSlot {
    spec: KnobSpec,
    state: KnobState,
    appearance: Appearance,
}

impl DialSlot {
    fn build(spec: &KnobSpec, log: &ActivityLog) -> Result<Self, detent_config::ConfigError> {
        let mut state = spec.build_state()?;
        state.subscribe(log.observer(spec.name.clone()));
        Ok(Self {
            spec: spec.clone(),
            state,
            appearance: Appearance::from(&spec.appearance),
        })
    }

    /// Return to the value the panel file starts with.
    fn reset(&mut self) {
        let initial = self.spec.value.unwrap_or(self.spec.min);
        if let Err(e) = self.state.set_value(initial) {
            tracing::warn!(knob = %self.spec.name, error = %e, "reset failed");
        }
    }
}

/// Main application state.
pub struct DetentApp {
    theme: Theme,
    /// Every panel the selector offers: factory panels, then user files.
    panels: Vec<Panel>,
    current: usize,
    dials: Vec<DialSlot>,
    dial_size: f32,
    log: ActivityLog,
    load_error: Option<String>,
}

impl DetentApp {
    /// Create the application and open `initial` if it is given.
    ///
    /// A panel whose name matches one already offered (factory or user file)
    /// selects that entry; any other panel is appended to the selector.
    pub fn new(cc: &eframe::CreationContext<'_>, initial: Option<Panel>, dial_size: f32) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        let mut panels = factory_panels();
        for path in list_user_panels() {
            match Panel::load(&path) {
                Ok(panel) => panels.push(panel),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping user panel"),
            }
        }

        let current = match initial {
            Some(panel) => match panels.iter().position(|p| p.name == panel.name) {
                Some(index) => index,
                None => {
                    panels.push(panel);
                    panels.len() - 1
                }
            },
            None => 0,
        };

        let mut app = Self {
            theme,
            panels,
            current: 0,
            dials: Vec::new(),
            dial_size,
            log: ActivityLog::default(),
            load_error: None,
        };
        app.select_panel(current);
        app
    }

    /// Rebuild the dials from panel `index`.
    fn select_panel(&mut self, index: usize) {
        let Some(panel) = self.panels.get(index) else {
            return;
        };
        self.current = index;

        match panel
            .iter()
            .map(|spec| DialSlot::build(spec, &self.log))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(dials) => {
                tracing::info!(panel = %panel.name, knobs = dials.len(), "panel opened");
                self.dials = dials;
                self.load_error = None;
            }
            Err(e) => {
                tracing::error!(panel = %panel.name, error = %e, "panel failed to build");
                self.dials.clear();
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn columns(&self) -> usize {
        self.panels
            .get(self.current)
            .map_or(1, |p| usize::try_from(p.columns).unwrap_or(1).max(1))
    }

    /// Render the header/toolbar.
    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("DETENT").color(self.theme.accent).strong());
            ui.add_space(20.0);

            let current_name = self
                .panels
                .get(self.current)
                .map_or("", |p| p.name.as_str())
                .to_string();
            let panel_names: Vec<(usize, String)> = self
                .panels
                .iter()
                .enumerate()
                .map(|(i, p)| (i, p.name.clone()))
                .collect();

            let mut selected = None;
            egui::ComboBox::from_id_salt("panel_selector")
                .selected_text(current_name.as_str())
                .width(150.0)
                .show_ui(ui, |ui| {
                    for (i, name) in &panel_names {
                        if ui.selectable_label(*i == self.current, name.as_str()).clicked() {
                            selected = Some(*i);
                        }
                    }
                });
            if let Some(index) = selected {
                self.select_panel(index);
            }

            ui.add_space(8.0);
            if ui.button("Reset").clicked() {
                for dial in &mut self.dials {
                    dial.reset();
                }
            }
            if ui.button("Clear log").clicked() {
                self.log.clear();
            }
        });
    }

    /// Render the dial grid.
    fn render_dials(&mut self, ui: &mut egui::Ui) {
        if let Some(ref error) = self.load_error {
            ui.colored_label(self.theme.log_reject, error.as_str());
            return;
        }

        let columns = self.columns();
        let dial_size = self.dial_size;
        let cell = self.theme.dial_cell;
        let log = &self.log;

        egui::Grid::new("dials")
            .num_columns(columns)
            .spacing(egui::vec2(12.0, 12.0))
            .show(ui, |ui| {
                for (i, dial) in self.dials.iter_mut().enumerate() {
                    Frame::new()
                        .fill(cell)
                        .corner_radius(8.0)
                        .inner_margin(Margin::same(8))
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(dial.spec.name.as_str());
                                let shown = Dial::new(&mut dial.state, &dial.appearance)
                                    .size(dial_size)
                                    .show(ui);
                                if let Some(outcome) = shown.outcome {
                                    log.record_outcome(&dial.spec.name, outcome);
                                }
                            });
                        });
                    if (i + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    /// Render the activity log.
    fn render_log(&self, ui: &mut egui::Ui) {
        ui.heading("Activity");
        ui.separator();
        ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
            for entry in self.log.entries() {
                ui.label(
                    egui::RichText::new(format!("{}  {}", entry.knob, entry.message))
                        .color(self.theme.log_color(entry.committed))
                        .small(),
                );
            }
        });
    }

    /// Render the status bar.
    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let active = self.dials.iter().find(|d| d.state.phase().is_active());
            match active {
                Some(dial) => ui.label(format!(
                    "{}: {:.2} at {:.0}\u{b0}",
                    dial.spec.name,
                    dial.state.value(),
                    dial.state.angle()
                )),
                None => ui.label(
                    egui::RichText::new(format!("{} knobs", self.dials.len()))
                        .color(self.theme.text_secondary),
                ),
            };
            ui.separator();
            ui.label(format!("{} log entries", self.log.len()));
        });
    }
}

impl eframe::App for DetentApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(2.0);
            self.render_status_bar(ui);
            ui.add_space(2.0);
        });

        SidePanel::right("activity")
            .default_width(260.0)
            .show(ctx, |ui| self.render_log(ui));

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| self.render_dials(ui));
        });
    }
}
