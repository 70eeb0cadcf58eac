use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use role_driven_ui_config::Config;
use role_driven_ui_engine::{Catalog, CatalogSource, Guideline, RenderFormat, TextFragment, render};
use std::{
    env,
    io::{self, stdout},
    process,
};

mod args;

use args::{Mode, USAGE, parse_args};

struct App {
    catalog: Catalog,
    section_state: ListState,
    scroll: u16,
}

impl App {
    fn new(catalog: Catalog) -> Self {
        let mut section_state = ListState::default();
        if !catalog.sections.is_empty() {
            section_state.select(Some(0));
        }
        Self {
            catalog,
            section_state,
            scroll: 0,
        }
    }

    fn next_section(&mut self) {
        let len = self.catalog.sections.len();
        if len == 0 {
            return;
        }
        let i = match self.section_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.section_state.select(Some(i));
        self.scroll = 0;
    }

    fn previous_section(&mut self) {
        let len = self.catalog.sections.len();
        if len == 0 {
            return;
        }
        let i = match self.section_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.section_state.select(Some(i));
        self.scroll = 0;
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        let Some(section) = self
            .section_state
            .selected()
            .and_then(|i| self.catalog.sections.get(i))
        else {
            return vec![Line::from("This catalog has no sections")];
        };

        let mut lines = vec![
            Line::from(Span::styled(
                section.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(section.items.iter().map(guideline_line));
        lines
    }
}

/// Style that sets inline code apart from the surrounding prose.
fn code_style() -> Style {
    Style::default().fg(Color::Cyan).bg(Color::DarkGray)
}

/// Builds one bullet line, padding code fragments with a space each side.
fn guideline_line(guideline: &Guideline) -> Line<'static> {
    let mut spans = vec![Span::raw("• ")];
    spans.extend(
        guideline
            .fragments()
            .into_iter()
            .map(|fragment| match fragment {
                TextFragment::Plain(text) => Span::raw(text),
                TextFragment::Code(text) => Span::styled(format!(" {text} "), code_style()),
            }),
    );
    Line::from(spans)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "role-driven-ui-cli".to_string());

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} {USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program_name} {USAGE}");
            process::exit(1);
        }
    };

    let source = CatalogSource::resolve(
        args.catalog_path,
        config.as_ref().and_then(|c| c.catalog_path.clone()),
        Config::config_path(),
    );
    log::info!("Using catalog {source}");
    let catalog = match source.load() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: Catalog {source} could not be loaded: {e}");
            process::exit(1);
        }
    };

    match args.mode {
        Mode::Export(format) => {
            let format = match format {
                Some(format) => format,
                None => export_format_from_config(config.as_ref())?,
            };
            print!("{}", render(&catalog, format));
            Ok(())
        }
        Mode::Interactive => run_interactive(catalog),
    }
}

fn export_format_from_config(config: Option<&Config>) -> Result<RenderFormat> {
    match config.and_then(|c| c.format.as_deref()) {
        Some(name) => Ok(name.parse::<RenderFormat>()?),
        None => Ok(RenderFormat::Html),
    }
}

fn run_interactive(catalog: Catalog) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog);
    let res = run_app(&mut terminal, &mut app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut read_event: impl FnMut() -> io::Result<Event>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| anyhow!("Failed to draw the terminal: {e}"))?;

        let event = read_event().context("Failed to read terminal input")?;
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_section(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_section(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(),
                KeyCode::PageUp => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Section list panel
    let section_items: Vec<ListItem> = app
        .catalog
        .sections
        .iter()
        .map(|section| ListItem::new(Line::from(section.title.clone())))
        .collect();

    let sections = List::new(section_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.catalog.title.clone()),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(sections, chunks[0], &mut app.section_state);

    // Guideline panel
    let content = Paragraph::new(app.content_lines())
        .block(Block::default().borders(Borders::ALL).title("Guidelines"))
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgDn/Space, PgUp: Scroll"),
    ]));
    f.render_widget(help, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use role_driven_ui_engine::Section;

    fn small_catalog() -> Catalog {
        let mut catalog = Catalog::new("Guide");
        catalog.sections = vec![
            Section::new("Language", ["Use `ui` for visibility"]),
            Section::new("Deny", ["Deny wins"]),
        ];
        catalog
    }

    #[test]
    fn guideline_line_styles_code() {
        let line = guideline_line(&Guideline::new("Use `ui` for visibility"));
        let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["• ", "Use ", " ui ", " for visibility"]);
        assert_eq!(line.spans[2].style, code_style());
        assert_eq!(line.spans[1].style, Style::default());
    }

    #[test]
    fn section_navigation_wraps() {
        let mut app = App::new(small_catalog());
        assert_eq!(app.section_state.selected(), Some(0));
        app.previous_section();
        assert_eq!(app.section_state.selected(), Some(1));
        app.next_section();
        assert_eq!(app.section_state.selected(), Some(0));
    }

    #[test]
    fn changing_section_resets_scroll() {
        let mut app = App::new(small_catalog());
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.scroll, 2);
        app.next_section();
        assert_eq!(app.scroll, 0);
        app.scroll_up();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn empty_catalog_has_placeholder() {
        let mut app = App::new(Catalog::new("Empty"));
        app.next_section();
        assert_eq!(app.section_state.selected(), None);
        assert_eq!(app.content_lines(), vec![Line::from("This catalog has no sections")]);
    }

    #[test]
    fn draws_sections_and_guidelines() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut app = App::new(small_catalog());
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Language"));
        assert!(screen.contains("Deny"));
        assert!(screen.contains("Use  ui  for visibility"));
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn run_app_quits_on_q() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut app = App::new(small_catalog());
        let mut events = vec![key(KeyCode::Down), key(KeyCode::Char('q'))].into_iter();

        run_app(&mut terminal, &mut app, || events.next().unwrap()).unwrap();

        assert_eq!(app.section_state.selected(), Some(1));
    }

    #[test]
    fn run_app_returns_input_errors() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut app = App::new(small_catalog());
        let mut events = vec![
            key(KeyCode::Char('j')),
            Err(io::Error::other("input closed")),
        ]
        .into_iter();

        let err = run_app(&mut terminal, &mut app, || events.next().unwrap()).unwrap_err();

        assert_eq!(app.section_state.selected(), Some(1));
        assert!(format!("{err:#}").contains("input closed"));
    }

    #[test]
    fn config_format_defaults_to_html() {
        assert_eq!(export_format_from_config(None).unwrap(), RenderFormat::Html);
        let config = Config {
            catalog_path: None,
            format: Some("plain".to_string()),
        };
        assert_eq!(
            export_format_from_config(Some(&config)).unwrap(),
            RenderFormat::Plain
        );
        let bad = Config {
            catalog_path: None,
            format: Some("pdf".to_string()),
        };
        assert!(export_format_from_config(Some(&bad)).is_err());
    }
}
