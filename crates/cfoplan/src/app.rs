use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use cfoplan_core::{ExpenseFeed, LiveFeedPoller, LogBilling, PollOutcome, SheetManager};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::actions::{self, ActionResult, apply_action_result};
use crate::components::{
    Component, EventResult, breakdown_panel::BreakdownPanel, header::Header,
    inputs_panel::InputsPanel, kpi_panel::KpiPanel, scenario_panel::ScenarioPanel,
    sheet_list::SheetList, status_bar::StatusBar,
};
use crate::config::AppConfig;
use crate::export::DirectoryExporter;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::state::{AppState, DashboardPanel, ModalAction, ModalState};

/// Longest the loop sleeps waiting for input, so finished fetches show up promptly
const MAX_IDLE: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    poller: LiveFeedPoller,
    header: Header,
    sheet_list: SheetList,
    inputs_panel: InputsPanel,
    scenario_panel: ScenarioPanel,
    kpi_panel: KpiPanel,
    breakdown_panel: BreakdownPanel,
    status_bar: StatusBar,
}

impl App {
    pub fn new(config: &AppConfig, data_dir: &Path) -> Self {
        let manager = SheetManager::new(LogBilling, &config.initial_sheet_name);
        let exporter = DirectoryExporter::new(config.resolve_export_dir(data_dir));
        tracing::info!(
            export_dir = %exporter.dir().display(),
            poll_interval_secs = config.poll_interval().as_secs(),
            "Dashboard configured"
        );

        let feed: Arc<dyn ExpenseFeed> = Arc::new(config.feed());
        let poller = LiveFeedPoller::new(feed, config.poll_interval());

        Self::with_parts(AppState::new(manager, Box::new(exporter)), poller)
    }

    pub fn with_parts(state: AppState, poller: LiveFeedPoller) -> Self {
        Self {
            state,
            poller,
            header: Header,
            sheet_list: SheetList,
            inputs_panel: InputsPanel,
            scenario_panel: ScenarioPanel,
            kpi_panel: KpiPanel,
            breakdown_panel: BreakdownPanel,
            status_bar: StatusBar,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs the dashboard until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            self.poll_feed(Instant::now());
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = self
                .poller
                .time_until_tick(Instant::now())
                .min(MAX_IDLE);
            if event::poll(timeout)? {
                self.handle_events()?;
            }
        }

        tracing::info!(in_flight = self.poller.in_flight(), "Dashboard closed");
        Ok(())
    }

    /// Start a fetch if one is due and apply whatever has resolved.
    /// Stale and failed fetches are only logged.
    fn poll_feed(&mut self, now: Instant) {
        self.poller.tick(now, self.state.manager.store());
        for outcome in self.poller.apply_resolved(self.state.manager.store_mut()) {
            if let PollOutcome::Applied(id) = outcome {
                tracing::trace!(sheet_id = %id, "Dashboard refreshed from live feed");
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.header.render(frame, rows[0], &self.state);
        self.render_content(frame, rows[1]);
        self.status_bar.render(frame, rows[2], &self.state);

        render_modal(frame, &self.state);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28),
                Constraint::Percentage(40),
                Constraint::Min(40),
            ])
            .split(area);

        self.sheet_list.render(frame, columns[0], &self.state);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(11), Constraint::Min(8)])
            .split(columns[1]);
        self.inputs_panel.render(frame, left[0], &self.state);
        self.scenario_panel.render(frame, left[1], &self.state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[2]);
        self.kpi_panel.render(frame, right[0], &self.state);
        self.breakdown_panel.render(frame, right[1], &self.state);
    }

    fn handle_events(&mut self) -> std::io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self.state.has_modal() {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.handle_modal_result(action, &value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        let global = match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            KeyCode::Tab => {
                self.state.focused_panel = self.state.focused_panel.next();
                return;
            }
            KeyCode::BackTab => {
                self.state.focused_panel = self.state.focused_panel.prev();
                return;
            }
            KeyCode::Char('n') => Some(actions::begin_add_sheet(&self.state)),
            KeyCode::Char('d') => Some(actions::begin_delete_sheet(&self.state)),
            KeyCode::Char('s') => Some(actions::handle_simulate(&mut self.state)),
            KeyCode::Char('x') => Some(actions::handle_export(&mut self.state)),
            _ => None,
        };
        if let Some(result) = global {
            apply_action_result(&mut self.state, result);
            return;
        }

        let result = match self.state.focused_panel {
            DashboardPanel::Sheets => self.sheet_list.handle_key(key_event, &mut self.state),
            DashboardPanel::Inputs => self.inputs_panel.handle_key(key_event, &mut self.state),
            DashboardPanel::Scenario => self.scenario_panel.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: &str) {
        let result: ActionResult = match action {
            ModalAction::AddSheet => actions::handle_add_sheet(&mut self.state, value),
            ModalAction::DeleteSheet(id) => actions::handle_delete_sheet(&mut self.state, id),
            ModalAction::EditInput(field) => {
                actions::handle_edit_input(&mut self.state, field, value)
            }
            ModalAction::EditScenario(field) => {
                actions::handle_edit_scenario(&mut self.state, field, value)
            }
        };
        apply_action_result(&mut self.state, result);
    }
}
