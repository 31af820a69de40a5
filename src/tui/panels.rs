//! Ratatui widgets for the two-column layout.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{AppState, Column};
use crate::creatures::CreatureRecord;

const ACCENT: Color = Color::Yellow;
const MUTED: Color = Color::DarkGray;

/// Render the complete UI.
pub fn render(f: &mut Frame, state: &AppState) {
    // header | [wild | caught] | status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5), Constraint::Length(1)])
        .split(f.size());

    render_header(f, state, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_wild(f, state, columns[0]);
    render_caught(f, state, columns[1]);
    render_status_bar(f, state, rows[2]);
}

fn render_header(f: &mut Frame, state: &AppState, area: Rect) {
    let snapshot = &state.snapshot;
    let mut spans = vec![Span::styled(
        " wildcatch ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if snapshot.loading {
        spans.push(Span::styled(
            format!(" loading {}/{}", snapshot.loaded, snapshot.catalogue_size),
            Style::default().fg(MUTED),
        ));
    }
    if snapshot.revealing {
        spans.push(Span::styled("  revealing…", Style::default().fg(MUTED)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn column_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { MUTED };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn render_list(
    f: &mut Frame,
    items: Vec<ListItem<'static>>,
    block: Block<'static>,
    selected: Option<usize>,
    area: Rect,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn wild_item(record: &CreatureRecord) -> ListItem<'static> {
    ListItem::new(format!("{} {}", record.id, record.name))
}

fn caught_item(record: &CreatureRecord) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", record.id), Style::default().fg(MUTED)),
        Span::styled(record.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {}", record.category)),
    ]))
}

fn render_wild(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Column::Wild;
    let title = format!(" Wild ({}) ", state.snapshot.wild.len());
    let items = state.snapshot.wild.iter().map(wild_item).collect();
    let selected = if focused { state.selected(Column::Wild) } else { None };

    render_list(f, items, column_block(title, focused), selected, area);
}

fn render_caught(f: &mut Frame, state: &AppState, area: Rect) {
    let snapshot = &state.snapshot;
    let focused = state.focus == Column::Caught;

    let area = if snapshot.celebrating {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);
        let banner = Paragraph::new("Gotta catch 'em all!")
            .alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            );
        f.render_widget(banner, split[0]);
        split[1]
    } else {
        area
    };

    let title = format!(" Caught ({}/{}) ", snapshot.caught.len(), snapshot.caught_capacity);
    let items = snapshot.caught.iter().map(caught_item).collect();
    let selected = if focused { state.selected(Column::Caught) } else { None };

    render_list(f, items, column_block(title, focused), selected, area);
}

fn render_status_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let text = state.message.clone().unwrap_or_else(|| {
        format!(
            "caught so far: {}/{}   tab: switch  enter: catch/release  q: quit",
            state.snapshot.ever_caught, state.snapshot.catalogue_size
        )
    });
    f.render_widget(Paragraph::new(Span::styled(text, Style::default().fg(MUTED))), area);
}
