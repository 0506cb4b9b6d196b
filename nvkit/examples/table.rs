use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use nvkit::components::table::sort_indicator;
use nvkit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Rows in the demo dataset.
const ROW_COUNT: usize = 1_000_000;
/// Header line plus status line.
const CHROME_HEIGHT: u16 = 2;

/// A generated record. Fields are computed, so a million rows cost nothing.
struct Entry(usize);

impl TableRow for Entry {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.0.to_string()),
            "name" => Some(format!("user {}", self.0)),
            "email" => Some(format!("user{}@example.com", self.0)),
            _ => None,
        }
    }
}

/// Host-side state: the scroll offset and the selection the app owns.
struct Host {
    scroll_top: f64,
    cursor: usize,
    selected: Vec<String>,
}

fn main() -> io::Result<()> {
    let log_file = File::create("table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // One terminal line per row, one column per pixel.
    let columns = vec![
        Column::new("id").title("ID").width(10),
        Column::new("name").title("Name").sortable(),
        Column::new("email").title("Email"),
    ];
    let data: Vec<Entry> = (0..ROW_COUNT).map(Entry).collect();
    let mut table = Table::with_data(columns, data)
        .with_row_height(1)
        .with_stripe(true)
        .with_highlight_current_row(true)
        .with_selection_mode(SelectionMode::Multiple);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = run(&mut stdout, &mut table);

    execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write, table: &mut Table<Entry>) -> io::Result<()> {
    let body = NodeId::new();
    let mut host = Host {
        scroll_top: 0.0,
        cursor: 0,
        selected: Vec::new(),
    };

    let (width, height) = terminal::size()?;
    table.after_render(body, body_size(width, height));
    draw(out, table, &host)?;

    loop {
        let mut dirty = false;

        if event::poll(Duration::from_millis(16))? {
            let viewport = table.viewport_height().max(1) as f64;
            let max_scroll = (table.total_height() as f64 - viewport).max(0.0);

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down => host.scroll_top += 1.0,
                    KeyCode::Up => host.scroll_top -= 1.0,
                    KeyCode::PageDown => host.scroll_top += viewport,
                    KeyCode::PageUp => host.scroll_top -= viewport,
                    KeyCode::Home => host.scroll_top = 0.0,
                    KeyCode::End => host.scroll_top = max_scroll,
                    KeyCode::Enter => {
                        table.click_row(host.cursor);
                    }
                    KeyCode::Char(' ') => {
                        table.toggle_row(host.cursor);
                    }
                    KeyCode::Char('a') => {
                        table.select_all(host.selected.is_empty());
                    }
                    KeyCode::Char('s') => {
                        table.click_header("name");
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => host.scroll_top += 3.0,
                    MouseEventKind::ScrollUp => host.scroll_top -= 3.0,
                    _ => {}
                },
                Event::Resize(width, height) => {
                    dirty |= table.on_resize(body, body_size(width, height));
                }
                _ => {}
            }

            host.scroll_top = host.scroll_top.clamp(0.0, max_scroll);
            host.cursor = host.scroll_top as usize;
            table.on_scroll(ScrollMetrics {
                scroll_top: host.scroll_top,
                client_height: table.viewport_height(),
            });
            dirty = true;
        }

        // Feed proposed selections back; the table never applies them itself.
        for event in table.drain_events() {
            log::info!("[demo] {}: {:?}", event.name(), event);
            if let TableEvent::SelectionChanged { keys, .. } = event {
                host.selected = keys.clone();
                table.set_selected_keys(keys);
            }
        }

        dirty |= table.on_animation_frame();
        if dirty {
            draw(out, table, &host)?;
        }
    }
}

fn body_size(width: u16, height: u16) -> BoxSize {
    BoxSize::new(u32::from(width), u32::from(height.saturating_sub(CHROME_HEIGHT)))
}

fn draw(out: &mut impl Write, table: &Table<Entry>, host: &Host) -> io::Result<()> {
    let view = table.render();
    let viewport = table.viewport_height();
    let first_visible = host.scroll_top as u64;

    queue!(out, MoveTo(0, 0), SetAttribute(Attribute::Bold))?;
    let mut header = String::new();
    for cell in &view.header.cells {
        let mut title = cell.title.clone();
        if cell.sortable {
            title.push(' ');
            title.push_str(sort_indicator(cell.sort));
        }
        if let Some(state) = cell.select_all {
            title = checkbox(state.checked, state.indeterminate).to_string();
        }
        header.push_str(&fit(&title, cell.width));
    }
    queue!(
        out,
        Print(header),
        Clear(ClearType::UntilNewLine),
        SetAttribute(Attribute::Reset)
    )?;

    let mut line = 1u16;
    if let BodyView::Virtual { slots, .. } = &view.body {
        // Slots include the overhang; only the visible ones reach the screen.
        for slot in slots
            .iter()
            .filter(|s| s.offset >= first_visible && s.offset < first_visible + u64::from(viewport))
        {
            let row = &slot.view;
            let mut text = String::new();
            for cell in &row.cells {
                let content = match &cell.content {
                    CellContent::Text(text) => text.clone(),
                    CellContent::Selection { checked, .. } => checkbox(*checked, false).to_string(),
                };
                text.push_str(&fit(&content, cell.width));
            }
            let attribute = if row.current {
                Attribute::Reverse
            } else if row.striped {
                Attribute::Dim
            } else {
                Attribute::NormalIntensity
            };
            queue!(
                out,
                MoveTo(0, line),
                SetAttribute(attribute),
                Print(text),
                Clear(ClearType::UntilNewLine),
                SetAttribute(Attribute::Reset)
            )?;
            line += 1;
        }
    }

    let window = table.window();
    queue!(
        out,
        MoveTo(0, line),
        Clear(ClearType::FromCursorDown),
        Print(format!(
            "rows {}..{} of {} | {} selected | q quit, space select, a all, s sort",
            window.first_index,
            window.first_index + window.slot_count,
            table.len(),
            host.selected.len()
        ))
    )?;
    out.flush()
}

fn checkbox(checked: bool, indeterminate: bool) -> &'static str {
    match (checked, indeterminate) {
        (true, _) => "[x]",
        (false, true) => "[-]",
        (false, false) => "[ ]",
    }
}

/// Pad or cut `text` to `width` cells; unsized cells get a fixed share.
fn fit(text: &str, width: Option<u32>) -> String {
    let width = width.unwrap_or(24) as usize;
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}
