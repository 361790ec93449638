use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use dexview_engine::{line_members, Navigator};
use dexview_types::{Creature, Snapshot};

use crate::output::{format_detail, FormatOptions};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Interactive detail browser over the full collection.
///
/// Steps follow dex order regardless of any list filter; digit keys jump
/// between chain members of the entry on screen.
pub fn run(user: &str, snapshot: &Snapshot, start_dex: Option<u32>) -> Result<()> {
    let collection = &snapshot.pokemon;
    let Some(first_entry) = collection.first() else {
        return Ok(());
    };

    let mut nav = Navigator::new();
    nav.open(collection, start_dex.unwrap_or(first_entry.pokedex_number))?;

    let mut tui = Tui::init()?;
    let mut last_tick = Instant::now();

    loop {
        let Some(cursor) = nav.cursor() else { break };
        let current = &collection[cursor];
        let chain = line_members(collection, current);

        tui.terminal
            .draw(|f| draw(f, user, current, &chain, cursor, collection.len()))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match action_for(key.code, key.modifiers) {
                        BrowseAction::Quit => nav.close(),
                        BrowseAction::Next => nav.step_forward(collection.len()),
                        BrowseAction::Previous => nav.step_backward(),
                        BrowseAction::ChainSlot(slot) => {
                            if (1..=chain.len()).contains(&slot) {
                                // Members come from this collection, so the
                                // jump cannot miss.
                                let _ = nav.jump_to(collection, chain[slot - 1].pokedex_number);
                            }
                        }
                        BrowseAction::None => {}
                    }
                }
            }
        }
        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// What a key press does to the open browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseAction {
    Quit,
    Next,
    Previous,
    /// 1-based slot in the current entry's chain panel.
    ChainSlot(usize),
    None,
}

fn action_for(code: KeyCode, modifiers: KeyModifiers) -> BrowseAction {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return BrowseAction::Quit;
    }
    match code {
        KeyCode::Char('q') | KeyCode::Esc => BrowseAction::Quit,
        KeyCode::Right | KeyCode::Char('l') => BrowseAction::Next,
        KeyCode::Left | KeyCode::Char('h') => BrowseAction::Previous,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            BrowseAction::ChainSlot(c.to_digit(10).unwrap_or(0) as usize)
        }
        _ => BrowseAction::None,
    }
}

/// Raw-mode terminal with restore-on-drop, so panics and early returns
/// still leave the shell usable.
struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    fn init() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn draw(
    f: &mut Frame,
    user: &str,
    current: &Creature,
    chain: &[&Creature],
    cursor: usize,
    total: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, chunks[0], user, cursor, total);
    draw_body(f, chunks[1], current, chain);
    draw_footer(f, chunks[2], chain.len() > 1);
}

fn draw_header(f: &mut Frame, area: Rect, user: &str, cursor: usize, total: usize) {
    let title = Line::from(vec![
        Span::styled("dexview", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {}", user)),
        Span::raw(format!("   entry {}/{}", cursor + 1, total)),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_body(f: &mut Frame, area: Rect, current: &Creature, chain: &[&Creature]) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let opts = FormatOptions {
        enable_color: false,
        width: Some(halves[0].width.saturating_sub(4).max(20) as usize),
    };
    let detail = format_detail(current, chain, &opts).join("\n");
    let detail_view = Paragraph::new(detail)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(current.name.clone()),
        );
    f.render_widget(detail_view, halves[0]);

    draw_chain(f, halves[1], current, chain);
}

fn draw_chain(f: &mut Frame, area: Rect, current: &Creature, chain: &[&Creature]) {
    let items: Vec<ListItem> = chain
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let style = if member.owned {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}. ", i + 1)),
                Span::styled(
                    format!("{} {}", member.name, member.display_number()),
                    style,
                ),
                Span::raw(if member.owned { "  owned" } else { "  missing" }),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(
        chain
            .iter()
            .position(|m| m.pokedex_number == current.pokedex_number),
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Chain"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(f: &mut Frame, area: Rect, has_chain: bool) {
    let hints = if has_chain {
        "left/right step dex order   1-9 jump within chain   q quit"
    } else {
        "left/right step dex order   q quit"
    };
    let footer = Paragraph::new(hints).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys_close_the_browser() {
        assert_eq!(
            action_for(KeyCode::Char('q'), KeyModifiers::NONE),
            BrowseAction::Quit
        );
        assert_eq!(action_for(KeyCode::Esc, KeyModifiers::NONE), BrowseAction::Quit);
        assert_eq!(
            action_for(KeyCode::Char('c'), KeyModifiers::CONTROL),
            BrowseAction::Quit
        );
    }

    #[test]
    fn arrows_and_vi_keys_step() {
        assert_eq!(
            action_for(KeyCode::Right, KeyModifiers::NONE),
            BrowseAction::Next
        );
        assert_eq!(
            action_for(KeyCode::Char('l'), KeyModifiers::NONE),
            BrowseAction::Next
        );
        assert_eq!(
            action_for(KeyCode::Left, KeyModifiers::NONE),
            BrowseAction::Previous
        );
        assert_eq!(
            action_for(KeyCode::Char('h'), KeyModifiers::NONE),
            BrowseAction::Previous
        );
    }

    #[test]
    fn digits_map_to_chain_slots() {
        assert_eq!(
            action_for(KeyCode::Char('1'), KeyModifiers::NONE),
            BrowseAction::ChainSlot(1)
        );
        assert_eq!(
            action_for(KeyCode::Char('9'), KeyModifiers::NONE),
            BrowseAction::ChainSlot(9)
        );
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        assert_eq!(
            action_for(KeyCode::Char('x'), KeyModifiers::NONE),
            BrowseAction::None
        );
        assert_eq!(action_for(KeyCode::Tab, KeyModifiers::NONE), BrowseAction::None);
    }
}
