mod render;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use deckdown_config::Config;
use deckdown_engine::{Deck, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    deck: Deck,
    current: usize,
    show_notes: bool,
    max_width: Option<u16>,
}

impl App {
    fn new(deck: Deck, config: Option<Config>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            deck,
            current: 0,
            show_notes: config.show_notes,
            max_width: config.max_width,
        }
    }

    fn next_slide(&mut self) {
        if self.current + 1 < self.deck.len() {
            self.current += 1;
        }
    }

    fn previous_slide(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    fn first_slide(&mut self) {
        self.current = 0;
    }

    fn last_slide(&mut self) {
        self.current = self.deck.len().saturating_sub(1);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let (dump, path) = match args.as_slice() {
        [_, flag, path] if flag.as_str() == "--dump" => (true, PathBuf::from(path)),
        [_, path] if path.as_str() != "--dump" => (false, PathBuf::from(path)),
        _ => {
            eprintln!("Usage: {} [--dump] <deck.md>", args.first().map_or("deckdown", String::as_str));
            process::exit(1);
        }
    };

    let text = match io::load_document(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let deck = Deck::parse(&text);

    if dump {
        println!("{}", serde_json::to_string_pretty(&deck)?);
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring config file: {e}");
            None
        }
    };
    let mut app = App::new(deck, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ' | 'j' | 'n') => {
                    app.next_slide()
                }
                KeyCode::Left | KeyCode::Up | KeyCode::Char('k' | 'p') => app.previous_slide(),
                KeyCode::Home | KeyCode::Char('g') => app.first_slide(),
                KeyCode::End | KeyCode::Char('G') => app.last_slide(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let slide = &app.deck.slides[app.current];
    let width = app.max_width.unwrap_or(chunks[0].width);
    let lines = render::slide_lines(slide, width, app.show_notes);
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let title = slide.title().unwrap_or("");
    let status = Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(format!("  {}/{}", app.current + 1, app.deck.len())),
        Span::styled(
            "  q: quit | ←/→: navigate".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(vec![status]), chunks[1]);
}
