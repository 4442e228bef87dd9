//! The demo application: one dropdown button on an otherwise empty screen.

use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use dropdown::render::{render_button, render_overlay};
use dropdown::scroll::{self, PendingScroll};
use dropdown::{
    AnchorFrame, Dropdown, Hooks, MeasureTicket, PressAction, Renderers, Verdict, ViewportSize,
};
use futures::StreamExt;
use log::{debug, info, trace};
use serde_json::Value;
use tokio::time::{Instant, sleep_until};

use crate::backend::TuiBackend;
use crate::canvas::{Canvas, CellStyle};
use crate::error::Error;
use crate::node::{Hit, Node, Painter, hit_test};
use crate::settings::{ButtonPosition, DemoSettings};
use crate::terminal::Screen;

const HELP: &str = "Enter/Space open · ↑↓ move · Enter choose · Esc close · q quit";

pub struct App {
    dropdown: Dropdown<Value>,
    backend: TuiBackend,
    renderers: Renderers<Value, Node>,
    button: ButtonPosition,
    /// Button frame from the last frame, `None` when it was off screen.
    button_frame: Option<AnchorFrame>,
    hits: Vec<Hit>,
    pending_measure: Option<MeasureTicket>,
    pending_scroll: Option<PendingScroll>,
    pending_options: Option<(Vec<Value>, Instant)>,
    quit: bool,
}

impl App {
    pub fn new(settings: DemoSettings) -> Self {
        let hooks = Hooks::new().on_select(|index, option: &Value| {
            info!("Selected row {}: {}", index, option);
            Verdict::Proceed
        });

        let (options, pending_options) = if settings.options_delay_ms > 0 {
            let at = Instant::now() + Duration::from_millis(settings.options_delay_ms);
            (None, Some((settings.options, at)))
        } else {
            (Some(settings.options), None)
        };

        Self {
            dropdown: Dropdown::with_hooks(options, settings.dropdown, hooks),
            backend: TuiBackend::new(),
            renderers: Renderers::new(),
            button: settings.button,
            button_frame: None,
            hits: Vec::new(),
            pending_measure: None,
            pending_scroll: None,
            pending_options,
            quit: false,
        }
    }

    pub fn dropdown(&self) -> &Dropdown<Value> {
        &self.dropdown
    }

    pub fn backend(&self) -> &TuiBackend {
        &self.backend
    }

    pub fn pending_scroll(&self) -> Option<PendingScroll> {
        self.pending_scroll
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run until the user quits.
    pub async fn run(mut self, screen: &mut Screen) -> Result<(), Error> {
        let mut events = EventStream::new();

        while !self.quit {
            screen.draw(|canvas| self.render(canvas))?;

            let measuring = self.pending_measure.is_some();
            let retry = self.pending_scroll;
            let options_at = self.pending_options.as_ref().map(|(_, at)| *at);

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                // The button was laid out by the draw above
                _ = std::future::ready(()), if measuring => self.complete_measurement(),
                _ = wait_for_retry(retry) => self.retry_scroll(),
                _ = sleep_until_optional(options_at) => self.deliver_options(),
            }
        }

        self.dropdown.unmount();
        info!("Quit");
        Ok(())
    }

    /// Paint the whole screen and remember where everything went.
    pub fn render(&mut self, canvas: &mut Canvas) {
        let (width, height) = (canvas.width(), canvas.height());
        let viewport = ViewportSize::from_cells(width, height);
        let mut painter = Painter::new(canvas);

        painter.paint(
            &Node::text("Dropdown demo", CellStyle::new().bold()),
            2,
            0,
            width.saturating_sub(2),
        );

        self.button_frame = match self.button.resolve(width, height) {
            Some((x, y)) => {
                let button = render_button(&self.dropdown, &self.backend, &self.renderers);
                let (_, h) = painter.paint(&button, x, y, self.button.width);
                Some(AnchorFrame::from_cells(x, y, self.button.width, h.max(1)))
            }
            None => None,
        };

        if height > 1 {
            let status = format!(
                "Selected: {} ({})",
                self.dropdown.display_text(),
                match self.dropdown.selected_index() {
                    Some(index) => format!("row {}", index),
                    None => "none".to_string(),
                }
            );
            let line_width = width.saturating_sub(2);
            painter.paint(&Node::text(status, CellStyle::new()), 2, height - 2, line_width);
            painter.paint(&Node::text(HELP, CellStyle::new().dim()), 2, height - 1, line_width);
        }

        if let Some(overlay) =
            render_overlay(&self.dropdown, &self.backend, &self.renderers, viewport)
        {
            painter.paint(&overlay, 0, 0, width);
        }

        self.hits = painter.into_hits();
    }

    pub fn handle_event(&mut self, event: Event) {
        trace!("Event: {:?}", event);
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Placement reads the viewport on every frame
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        if !self.dropdown.is_open() {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => self.press(PressAction::Button),
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            }
            return;
        }

        let searching = self.dropdown.config().show_search;
        match key.code {
            KeyCode::Esc => self.press(PressAction::Backdrop),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Enter => {
                if let Some(row) = self.backend.cursor() {
                    self.press(PressAction::Row(row));
                }
            }
            KeyCode::Backspace if searching => {
                let mut text = self.dropdown.selection().search_text().to_string();
                if text.pop().is_some() {
                    self.search(&text);
                }
            }
            KeyCode::Char(c) if searching => {
                let text = format!("{}{}", self.dropdown.selection().search_text(), c);
                self.search(&text);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = hit_test(&self.hits, mouse.column, mouse.row) {
                    self.press(action);
                }
            }
            MouseEventKind::ScrollDown if self.dropdown.is_open() => self.backend.scroll_by(1),
            MouseEventKind::ScrollUp if self.dropdown.is_open() => self.backend.scroll_by(-1),
            _ => {}
        }
    }

    /// Route a press on a pressable element.
    pub fn press(&mut self, action: PressAction) {
        debug!("Press {:?}", action);
        match action {
            PressAction::Button => {
                if self.dropdown.is_open() {
                    if self.dropdown.request_close() {
                        self.on_closed();
                    }
                } else if let Some(ticket) = self.dropdown.press_button() {
                    self.pending_measure = Some(ticket);
                }
            }
            PressAction::Row(row) => {
                let choice = self.dropdown.choose_row(row);
                if choice.closed {
                    self.on_closed();
                }
            }
            PressAction::Backdrop => {
                if self.dropdown.request_close() {
                    self.on_closed();
                }
            }
        }
    }

    /// Hand the measured button frame to the dropdown.
    pub fn complete_measurement(&mut self) {
        let Some(ticket) = self.pending_measure.take() else { return };
        if self.dropdown.on_anchor_measured(ticket, self.button_frame) {
            self.on_opened();
        }
    }

    fn on_opened(&mut self) {
        self.backend.reset();
        if let Some(index) = self.dropdown.initial_scroll_index() {
            // Not laid out yet, so this normally schedules the retry
            self.pending_scroll =
                scroll::scroll_to_index(&mut self.backend, index, self.dropdown.config().animated);
        }
    }

    fn on_closed(&mut self) {
        self.backend.reset();
        self.pending_scroll = None;
    }

    pub fn retry_scroll(&mut self) {
        if let Some(pending) = self.pending_scroll.take()
            && self.dropdown.is_open()
        {
            pending.retry(&mut self.backend);
        }
    }

    fn deliver_options(&mut self) {
        if let Some((options, _)) = self.pending_options.take() {
            debug!("Delivering {} options", options.len());
            self.dropdown.set_options(Some(options));
        }
    }

    fn search(&mut self, text: &str) {
        self.dropdown.set_search_text(text);
        // Rows shift under the cursor, so move it back to the top
        if self.backend.cursor().is_some() {
            let len = self.dropdown.selection().displayed_len();
            self.backend.set_cursor((len > 0).then_some(0));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.dropdown.selection().displayed_len();
        if len == 0 {
            return;
        }
        let next = match self.backend.cursor() {
            Some(cursor) => cursor.saturating_add_signed(delta).min(len - 1),
            None => self.dropdown.selected_index().unwrap_or(0),
        };
        self.backend.set_cursor(Some(next));
    }
}

async fn wait_for_retry(pending: Option<PendingScroll>) {
    match pending {
        Some(pending) => pending.wait().await,
        None => std::future::pending::<()>().await,
    }
}

async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(d).await,
        None => std::future::pending::<()>().await,
    }
}
