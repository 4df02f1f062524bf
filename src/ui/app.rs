//! Main TUI application state and logic

use crate::frame::timeline::Seekable;
use crate::frame::{TimelineError, Trace, TraceMetrics};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Visual,
    Narration,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Visual => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Visual,
        }
    }
}

/// The main application state
pub struct App {
    /// The recording being played back
    pub trace: Trace,

    /// Delay between frames in play mode
    pub speed: Duration,

    pub focused_pane: FocusedPane,

    /// Narration scroll offset; `usize::MAX` pins it to the newest line
    pub narration_scroll: usize,

    pub should_quit: bool,

    pub status_message: String,

    pub is_playing: bool,

    /// Last time a frame was advanced in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(trace: Trace, speed_ms: u64) -> Self {
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);
        App {
            trace,
            speed: Duration::from_millis(speed_ms),
            focused_pane: FocusedPane::Visual,
            narration_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: long_ago,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.speed {
                self.tick();
            }

            // Poll with a timeout so play mode keeps advancing without input
            if event::poll(Duration::from_millis(25))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance one frame in play mode, stopping at the end
    pub fn tick(&mut self) {
        match self.trace.cursor_mut().step_forward() {
            Ok(()) => {
                self.status_message = "Playing...".to_string();
                self.narration_scroll = usize::MAX;
            }
            Err(_) => {
                self.is_playing = false;
                self.status_message = "Playback complete".to_string();
            }
        }
        self.last_play_time = Instant::now();
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        self.render_visual(frame, columns[0]);

        let cursor = self.trace.cursor();
        let position = cursor.position();
        let lines: Vec<&str> = if cursor.is_empty() {
            Vec::new()
        } else {
            (0..=position).filter_map(|i| cursor.narration(i)).collect()
        };

        super::panes::render_narration_pane(
            frame,
            columns[1],
            &lines,
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            position,
            cursor.len(),
            self.speed.as_millis() as u64,
            self.is_playing,
        );
    }

    fn render_visual(&self, frame: &mut Frame, area: Rect) {
        let is_focused = self.focused_pane == FocusedPane::Visual;

        match &self.trace {
            Trace::Sort { algorithm, timeline } => {
                let seen = timeline.current().map_or(0, |_| timeline.position() + 1);
                let metrics = TraceMetrics::from_frames(&timeline.frames()[..seen]);
                super::panes::render_array_pane(
                    frame,
                    area,
                    algorithm.title(),
                    timeline.current(),
                    metrics,
                    is_focused,
                );
            }
            Trace::Graph {
                title,
                graph,
                timeline,
            } => {
                let mut seen: Vec<String> = Vec::new();
                let upto = timeline.position();
                for recorded in timeline.frames().iter().take(upto + 1) {
                    for node in &recorded.highlighted_nodes {
                        if !seen.contains(node) {
                            seen.push(node.clone());
                        }
                    }
                }
                super::panes::render_graph_pane(
                    frame,
                    area,
                    title,
                    graph,
                    timeline.current(),
                    &seen,
                    is_focused,
                );
            }
            Trace::Cycle {
                values,
                cycle_to_index,
                timeline,
            } => {
                super::panes::render_list_pane(
                    frame,
                    area,
                    values,
                    *cycle_to_index,
                    timeline.current(),
                    is_focused,
                );
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N frames directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n)
                    .take_while(|_| self.trace.cursor_mut().step_forward().is_ok())
                    .count();
                self.status_message = format!("Stepped forward {} frame(s)", stepped);
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up if self.focused_pane == FocusedPane::Narration => {
                let total = self.trace.cursor().position() + 1;
                self.narration_scroll = self.narration_scroll.min(total).saturating_sub(1);
            }
            KeyCode::Down if self.focused_pane == FocusedPane::Narration => {
                self.narration_scroll = self.narration_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle play mode (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now();
                        self.status_message = "Playing...".to_string();
                        // Replay from the top when play is pressed on the last frame
                        if self.trace.cursor().is_at_end() {
                            if let Err(e) = self.trace.cursor_mut().rewind() {
                                self.is_playing = false;
                                self.status_message = format!("Cannot play: {}", e);
                            }
                        }
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.status_message = match self.trace.cursor_mut().jump_to_end() {
                    Ok(_) => "Jumped to end".to_string(),
                    Err(e) => format!("Cannot jump: {}", e),
                };
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.status_message = match self.trace.cursor_mut().rewind() {
                    Ok(_) => "Jumped to start".to_string(),
                    Err(e) => format!("Cannot rewind: {}", e),
                };
                self.narration_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    fn step_forward(&mut self) {
        self.status_message = match self.trace.cursor_mut().step_forward() {
            Ok(()) => "Stepped forward".to_string(),
            Err(e) => format!("Cannot step forward: {}", e),
        };
        self.narration_scroll = usize::MAX;
    }

    fn step_backward(&mut self) {
        self.status_message = match self.trace.cursor_mut().step_backward() {
            Ok(()) => "Stepped backward".to_string(),
            Err(TimelineError::AtStart) => "Already at the first frame".to_string(),
            Err(e) => format!("Cannot step backward: {}", e),
        };
        self.narration_scroll = usize::MAX;
    }
}
