//! TUI rendering and terminal management (impure shell)
//!
//! The terminal screen is the rendering surface of the comment list: it
//! draws rows, measures their extents, and turns key presses and clicks into
//! toggle requests for the presenter.

pub mod offsets;
pub mod row_view;
pub mod styles;

pub use offsets::RowOffsets;
pub use row_view::{layout_row, measure_row, wrap_to_width, RowFlags};
pub use styles::{ColorConfig, RowStyles};

use crate::config::KeyBindings;
use crate::model::{KeyAction, ListError};
use crate::presenter::{Extent, ListPresenter, RenderSurface, RowChange, UpdateBatch};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// List engine error
    #[error("List error: {0}")]
    List(#[from] ListError),
}

/// Screen options resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    /// Extent assumed for rows that were never measured.
    pub estimated_row_height: Extent,
    pub colors: ColorConfig,
}

/// Receiving end of presenter batches.
///
/// Applies a batch in one step: the inserted rows are highlighted and the
/// status line describes the change, both replaced by the next batch.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    inserted: Vec<usize>,
    status: Option<String>,
    batches_applied: usize,
}

impl TerminalSurface {
    pub fn is_inserted(&self, index: usize) -> bool {
        self.inserted.binary_search(&index).is_ok()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn batches_applied(&self) -> usize {
        self.batches_applied
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    fn clear_highlight(&mut self) {
        self.inserted.clear();
    }
}

impl RenderSurface for TerminalSurface {
    fn apply_batch(&mut self, batch: &UpdateBatch) {
        let indices = batch.change.indices();
        let span = match (indices.first(), indices.last()) {
            (Some(first), Some(last)) if first == last => format!("row {}", first + 1),
            (Some(first), Some(last)) => format!("rows {}-{}", first + 1, last + 1),
            _ => "no rows".to_string(),
        };
        match &batch.change {
            RowChange::Insert(rows) => {
                self.inserted = rows.clone();
                self.set_status(format!("Showing replies in {}", span));
            }
            RowChange::Remove(_) => {
                self.inserted.clear();
                self.set_status(format!("Hid replies from {}", span));
            }
        }
        self.batches_applied += 1;
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    presenter: ListPresenter,
    surface: TerminalSurface,
    key_bindings: KeyBindings,
    styles: RowStyles,
    options: ScreenOptions,
    selected: usize,
    /// First row drawn at the top of the list area
    top: usize,
    /// Width the cached extents were measured at
    measured_width: Option<u16>,
    /// Last rendered list area (for mouse click detection)
    last_list_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(presenter: ListPresenter, options: ScreenOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, presenter, options))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits. Redraws only after input events.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app on an already initialized terminal.
    pub fn with_terminal(terminal: Terminal<B>, presenter: ListPresenter, options: ScreenOptions) -> Self {
        Self {
            terminal,
            presenter,
            surface: TerminalSurface::default(),
            key_bindings: KeyBindings::default(),
            styles: RowStyles::with_color_config(options.colors),
            options,
            selected: 0,
            top: 0,
            measured_width: None,
            last_list_area: None,
        }
    }

    pub fn presenter(&self) -> &ListPresenter {
        &self.presenter
    }

    pub fn surface(&self) -> &TerminalSurface {
        &self.surface
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a key press. Returns true when the user quits.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        self.handle_action(action)
    }

    /// Apply a list action. Returns true when the user quits.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        let last = self.presenter.row_count().saturating_sub(1);
        match action {
            KeyAction::SelectPrev => self.selected = self.selected.saturating_sub(1),
            KeyAction::SelectNext => self.selected = (self.selected + 1).min(last),
            KeyAction::SelectFirst => self.selected = 0,
            KeyAction::SelectLast => self.selected = last,
            KeyAction::ToggleReplies => self.toggle_selected(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Handle a mouse event: a left click selects the row under the cursor
    /// and toggles it when it has an expand control.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(row) = self.row_at_screen(mouse.column, mouse.row) else {
                    return;
                };
                self.selected = row;
                let toggleable = self
                    .presenter
                    .row_descriptor(row)
                    .is_ok_and(|descriptor| descriptor.affordance.label().is_some());
                if toggleable {
                    self.toggle_selected();
                }
            }
            MouseEventKind::ScrollUp => {
                self.handle_action(KeyAction::SelectPrev);
            }
            MouseEventKind::ScrollDown => {
                self.handle_action(KeyAction::SelectNext);
            }
            _ => {}
        }
    }

    /// Dispatch the toggle trigger for the selected row.
    fn toggle_selected(&mut self) {
        self.surface.clear_highlight();
        match self
            .presenter
            .on_toggle_requested(self.selected, &mut self.surface)
        {
            Ok(batch) => {
                info!(row = batch.reload, change = ?batch.change, "Replies toggled");
            }
            Err(ListError::NotExpandable(_)) => {
                self.surface.set_status("This row has no replies");
            }
            Err(err) => {
                warn!(error = %err, "Toggle request refused");
                self.surface.set_status(err.to_string());
            }
        }
    }

    /// Extents the presenter reports for every row.
    fn resolved_extents(&self) -> Vec<Extent> {
        (0..self.presenter.row_count())
            .map(|index| {
                self.presenter
                    .estimated_extent(index, self.options.estimated_row_height)
            })
            .collect()
    }

    /// Row under a screen cell in the last rendered list area.
    fn row_at_screen(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_list_area?;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let offsets = RowOffsets::from_extents(&self.resolved_extents());
        offsets.row_at(offsets.offset_of(self.top) + (row - area.y) as usize)
    }

    /// Move `top` so the selected row is fully visible when it fits.
    fn scroll_selection_into_view(&mut self, list_height: u16) {
        let count = self.presenter.row_count();
        self.selected = self.selected.min(count.saturating_sub(1));
        self.top = self.top.min(self.selected);

        let offsets = RowOffsets::from_extents(&self.resolved_extents());
        let selection_end = offsets.offset_of(self.selected + 1);
        while self.top < self.selected
            && selection_end - offsets.offset_of(self.top) > list_height as usize
        {
            self.top += 1;
        }
    }

    /// Render a frame.
    ///
    /// Rows drawn in this frame have their extents measured and recorded
    /// with the presenter before the next frame scrolls with them.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);
        let [header_area, list_area, status_area] = screen_areas(frame_area);
        self.last_list_area = Some(list_area);

        if self.measured_width != Some(list_area.width) {
            // Extents measured at another width are meaningless
            self.presenter.clear_measured_extents();
            self.measured_width = Some(list_area.width);
        }

        self.scroll_selection_into_view(list_area.height);

        // Lay out visible rows, recording what they measure
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut index = self.top;
        while index < self.presenter.row_count() && lines.len() < list_area.height as usize {
            let descriptor = self.presenter.row_descriptor(index)?;
            let flags = RowFlags {
                selected: index == self.selected,
                inserted: self.surface.is_inserted(index),
            };
            let row_lines = layout_row(&descriptor, list_area.width, &self.styles, flags);
            let extent = Extent::try_from(row_lines.len()).unwrap_or(Extent::MAX);
            self.presenter.record_measured_extent(index, extent);
            lines.extend(row_lines);
            index += 1;
        }

        let header = Line::styled(
            format!(
                " threadfold | {} rows | row {}",
                self.presenter.row_count(),
                (self.selected + 1).min(self.presenter.row_count())
            ),
            Style::default().add_modifier(Modifier::BOLD),
        );
        let status = Line::raw(format!(
            " {} | j/k move  enter toggle  q quit",
            self.surface.status().unwrap_or("Ready")
        ));

        self.terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(header), header_area);
            frame.render_widget(Paragraph::new(lines), list_area);
            frame.render_widget(Paragraph::new(status), status_area);
        })?;

        Ok(())
    }
}

/// Header (1 line), list, status bar (1 line).
fn screen_areas(frame_area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(presenter: ListPresenter, options: ScreenOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(presenter, options)?;

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
