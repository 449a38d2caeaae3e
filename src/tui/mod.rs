pub mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Terminal;
use tracing::info;

use crate::pipeline::derive::{derive_palette, Palette, PalettePolicy};
use crate::pipeline::generate_palette;
use crate::pipeline::resolve::sanitize;
use widgets::PaletteWidget;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// State for the interactive TUI application.
#[derive(Debug, Default)]
pub struct App {
    pub input: String,
    pub policy: PalettePolicy,
    pub palette: Option<Palette>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(policy: PalettePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.toggle_policy(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    /// Resolve the current input. On rejection the previous palette stays up.
    fn submit(&mut self) {
        match generate_palette(&self.input, self.policy) {
            Ok(palette) => {
                info!(input = %self.input, "palette applied");
                self.status = Some(format!("Applied '{}'", sanitize(&self.input)));
                self.palette = Some(palette);
            }
            Err(err) => {
                self.status = Some(format!("{} ({err})", err.hint()));
            }
        }
    }

    fn toggle_policy(&mut self) {
        self.policy = self.policy.toggled();
        if let Some(palette) = &self.palette {
            self.palette = Some(derive_palette(palette.base, self.policy));
        }
        self.status = Some(format!("Policy: {}", self.policy));
    }
}

/// Launch the TUI. Returns the last applied palette, if any.
pub fn run(mut app: App) -> Result<Option<Palette>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result.map(|()| app.palette)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}

fn draw(f: &mut Frame, app: &App) {
    let [input_area, palette_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let input = Paragraph::new(format!("{}_", app.input))
        .block(Block::bordered().title(format!("Color ({})", app.policy)));
    f.render_widget(input, input_area);

    f.render_widget(PaletteWidget::new(app.palette.as_ref()), palette_area);

    if let Some(status) = &app.status {
        f.render_widget(Paragraph::new(format!(" {status}")), status_area);
    }

    let help = Paragraph::new(" Enter apply  Tab policy  Esc quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, help_area);
}
