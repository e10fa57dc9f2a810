use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};
use ratatui::Terminal;
use tui_textarea::{Input, Key, TextArea};

pub fn run_tui(path: Option<PathBuf>, initial_text: String) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path, initial_text);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    res
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RightTab {
    Asm,
    Errors,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Normal,
    OpenPrompt,
    SavePrompt,
    Help,
}

struct App {
    file_path: Option<PathBuf>,
    editor: TextArea<'static>,
    right_tab: RightTab,
    status: String,
    last_error: Option<String>,
    asm_lines: Vec<String>,
    // UI mode
    mode: Mode,
    // Path input buffer for the open/save prompts
    prompt_input: String,
}

impl App {
    fn new(path: Option<PathBuf>, text: String) -> Self {
        let editor = make_editor(&text);

        Self {
            file_path: path,
            editor,
            right_tab: RightTab::Asm,
            status: "Ready. F5/Ctrl+R: Translate | Ctrl+O: Open | Ctrl+S: Save output | Esc/Ctrl+Q: Quit"
                .to_string(),
            last_error: None,
            asm_lines: Vec::new(),
            mode: Mode::Normal,
            prompt_input: String::new(),
        }
    }

    fn translate(&mut self) {
        let source = self.editor.lines().join("\n");
        match asmgen::translate(&source) {
            Ok(asm) => {
                self.asm_lines = if asm.is_empty() {
                    Vec::new()
                } else {
                    asm.lines().map(str::to_string).collect()
                };
                self.last_error = None;
                self.status = format!("Translated successfully ({} instructions)", self.asm_lines.len());
            }
            Err(e) => {
                self.last_error = Some(format!("{}", e));
                self.status = "Translation failed (see Errors tab)".to_string();
                self.asm_lines.clear();
            }
        }
    }

    fn open(&mut self, path_str: &str) {
        let p = PathBuf::from(path_str);
        match std::fs::read_to_string(&p) {
            Ok(content) => {
                self.file_path = Some(p);
                self.editor = make_editor(&content);
                self.status = "File opened".to_string();
                // Translate right away so the output pane tracks the file
                self.translate();
            }
            Err(e) => {
                self.last_error = Some(format!("Open failed: {}", e));
                self.status = "Open failed (see Errors tab)".to_string();
            }
        }
    }

    fn save_output(&mut self, path_str: &str) {
        let p = PathBuf::from(path_str);
        match std::fs::write(&p, self.asm_lines.join("\n")) {
            Ok(_) => self.status = format!("Assembly saved to {}", p.display()),
            Err(e) => {
                self.last_error = Some(format!("Save failed: {}", e));
                self.status = "Save failed (see Errors tab)".to_string();
            }
        }
    }
}

fn make_editor(text: &str) -> TextArea<'static> {
    let mut editor = TextArea::default();
    editor.set_block(Block::default().borders(Borders::ALL).title("Source"));
    editor.set_style(Style::default());
    editor.set_cursor_line_style(Style::default().fg(Color::Yellow));
    editor.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    if !text.is_empty() {
        editor.insert_str(text);
    }
    editor
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if crossterm::event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(app, key)? {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Process only "press" events to avoid handling repeat/release twice.
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }
    // Mode-specific handling first
    match app.mode {
        Mode::Help => {
            if key.code == KeyCode::F(1) || key.code == KeyCode::Esc {
                app.mode = Mode::Normal;
            }
            return Ok(false);
        }
        Mode::OpenPrompt | Mode::SavePrompt => match key.code {
            KeyCode::Enter => {
                let path_str = app.prompt_input.trim().to_string();
                let saving = app.mode == Mode::SavePrompt;
                app.mode = Mode::Normal;
                if path_str.is_empty() {
                    app.status = if saving {
                        "Save canceled".to_string()
                    } else {
                        "Open canceled".to_string()
                    };
                    return Ok(false);
                }
                if saving {
                    app.save_output(&path_str);
                } else {
                    app.open(&path_str);
                }
                return Ok(false);
            }
            KeyCode::Esc => {
                let saving = app.mode == Mode::SavePrompt;
                app.mode = Mode::Normal;
                app.status = if saving {
                    "Save canceled".to_string()
                } else {
                    "Open canceled".to_string()
                };
                return Ok(false);
            }
            KeyCode::Backspace => {
                app.prompt_input.pop();
                return Ok(false);
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.prompt_input.push(c);
                }
                return Ok(false);
            }
            _ => {
                return Ok(false);
            }
        },
        Mode::Normal => {}
    }

    // Global quit
    if (key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL))
        || key.code == KeyCode::Esc
    {
        return Ok(true);
    }

    // Translate
    if key.code == KeyCode::F(5)
        || (key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        app.translate();
        return Ok(false);
    }

    // Save generated assembly
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if app.asm_lines.is_empty() {
            app.status = "Nothing to save; translate first (F5)".to_string();
        } else {
            app.mode = Mode::SavePrompt;
            app.prompt_input.clear();
            app.status = "Save: type a file path and press Enter (Esc to cancel)".to_string();
        }
        return Ok(false);
    }

    // Open
    if key.code == KeyCode::Char('o') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.mode = Mode::OpenPrompt;
        app.prompt_input.clear();
        app.status = "Open: type a file path and press Enter (Esc to cancel)".to_string();
        return Ok(false);
    }

    // Help
    if key.code == KeyCode::F(1) {
        app.mode = Mode::Help;
        return Ok(false);
    }

    // Switch right tab
    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.right_tab = match app.right_tab {
            RightTab::Asm => RightTab::Errors,
            RightTab::Errors => RightTab::Asm,
        };
        return Ok(false);
    }

    // Forward to editor by default
    let input = key_event_to_input(key);
    if let Some(input) = input {
        app.editor.input(input);
    }
    Ok(false)
}

fn key_event_to_input(key: KeyEvent) -> Option<Input> {
    let k = match key.code {
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => return None,
        KeyCode::F(_) => return None,
        KeyCode::Char(c) => {
            // Ctrl shortcuts handled earlier
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            return Some(Input {
                key: Key::Char(c),
                ctrl: false,
                alt: key.modifiers.contains(KeyModifiers::ALT),
                shift: key.modifiers.contains(KeyModifiers::SHIFT),
            });
        }
        _ => return None,
    };
    Some(Input {
        key: k,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    })
}

fn ui(f: &mut ratatui::Frame, app: &mut App) {
    let size = f.area();

    // Layout: main area (editor + right pane) over a one-line status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    draw_main_area(f, app, chunks[0]);
    draw_status(f, app, chunks[1]);
    // Overlays
    match app.mode {
        Mode::OpenPrompt => draw_prompt(f, app, chunks[0], "Open File"),
        Mode::SavePrompt => draw_prompt(f, app, chunks[0], "Save Assembly"),
        Mode::Help => draw_help(f, chunks[0]),
        Mode::Normal => {}
    }
}

fn draw_main_area(f: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    // Editor on the left
    f.render_widget(&app.editor, cols[0]);

    // Right side: tabs + content stacked vertically
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(cols[1]);

    let titles = ["ASM", "Errors"]
        .into_iter()
        .map(|t| Line::from(Span::styled(t, Style::default().fg(Color::Cyan))));
    let selected = match app.right_tab {
        RightTab::Asm => 0,
        RightTab::Errors => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("Output"))
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, right_chunks[0]);

    match app.right_tab {
        RightTab::Asm => draw_asm(f, app, right_chunks[1]),
        RightTab::Errors => draw_errors(f, app, right_chunks[1]),
    }
}

fn draw_status(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let (line0, col0) = app.editor.cursor();
    let filename = app
        .file_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unnamed>".to_string());
    let msg = format!(
        "{}  |  Ln {}, Col {}  |  {}",
        filename,
        line0 + 1,
        col0 + 1,
        app.status
    );
    f.render_widget(Paragraph::new(msg), area);
}

fn draw_asm(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    if app.asm_lines.is_empty() {
        items.push(ListItem::new("<no assembly - translate (F5)>"));
    } else {
        for (i, line) in app.asm_lines.iter().enumerate() {
            items.push(ListItem::new(format!("{:3}: {}", i, line)));
        }
    }
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Assembly"));
    f.render_widget(list, area);
}

fn draw_errors(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let msg = app
        .last_error
        .clone()
        .unwrap_or_else(|| "No errors.".to_string());
    let p = Paragraph::new(msg).block(Block::default().borders(Borders::ALL).title("Errors"));
    f.render_widget(p, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let vertical = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    vertical[1]
}

fn draw_prompt(f: &mut ratatui::Frame, app: &App, area: Rect, title: &str) {
    let area = centered_rect(70, 20, area);
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let text = vec![
        Line::from("Enter path and press Enter:"),
        Line::from(app.prompt_input.as_str()),
    ];
    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

fn draw_help(f: &mut ratatui::Frame, area: Rect) {
    let area = centered_rect(70, 60, area);
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from("Keybindings:"),
        Line::from("  F5 / Ctrl+R  - Translate"),
        Line::from("  Ctrl+O       - Open file (type path)"),
        Line::from("  Ctrl+S       - Save generated assembly (type path)"),
        Line::from("  Tab          - Switch right tab"),
        Line::from("  Esc/Ctrl+Q   - Quit"),
        Line::from("  F1           - Toggle this help"),
        Line::from(""),
        Line::from("Tabs:"),
        Line::from("  ASM     - Generated assembly instructions"),
        Line::from("  Errors  - Last error message"),
    ];
    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}
