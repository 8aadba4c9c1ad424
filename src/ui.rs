//! Drawing - a pure function of `RenderState`

use ratatui::{prelude::*, widgets::*};

use crate::app::state::RequestStatus;
use crate::constants::{
    APP_NAME, FAILURE_ALT, FAILURE_DESCRIPTION, FAILURE_IMAGE_URL, FAILURE_TITLE, LOGO_ALT,
    LOGO_IMAGE_URL, RETRY_LABEL,
};
use crate::messages::RenderState;
use crate::models::{Category, Project};

/// Three-dots spinner frames, advanced by the UI loop tick
const SPINNER_FRAMES: [&str; 4] = ["●  ○  ○", "○  ●  ○", "○  ○  ●", "○  ●  ○"];

/// Prefix of the image source line of a card; continuation lines are indented to match
const IMAGE_PREFIX: &str = "  img: ";

/// Columns a list item loses to the block borders and the highlight symbol
const LIST_CHROME_WIDTH: u16 = 4;

pub fn draw_ui(f: &mut Frame, state: &RenderState, tick: u64) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Category selector
            Constraint::Min(0),    // View
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_category_selector(f, state.category, chunks[1]);

    match &state.status {
        RequestStatus::Loading => draw_loading(f, tick, chunks[2]),
        RequestStatus::Success(projects) => {
            draw_projects(f, projects, state.selected_project, chunks[2])
        }
        RequestStatus::Failure(_) => draw_failure(f, chunks[2]),
        RequestStatus::Initial => {}
    }

    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}]", LOGO_ALT), Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(APP_NAME, Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(Span::styled(LOGO_IMAGE_URL, Style::default().fg(Color::DarkGray))),
    ];

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn draw_category_selector(f: &mut Frame, selected: Category, area: Rect) {
    let titles: Vec<&str> = Category::ALL.iter().map(|c| c.display_text()).collect();
    let tabs = render_tabs(&titles, selected.index()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Category (←/→ or 1-5) "),
    );
    f.render_widget(tabs, area);
}

fn draw_loading(f: &mut Frame, tick: u64, area: Rect) {
    let frame = SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize];
    let spinner = Paragraph::new(frame)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(area);
    f.render_widget(spinner, rows[1]);
}

fn draw_projects(f: &mut Frame, projects: &[Project], selected: usize, area: Rect) {
    let url_width = area
        .width
        .saturating_sub(LIST_CHROME_WIDTH + IMAGE_PREFIX.len() as u16)
        .max(1) as usize;
    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| project_card(project, url_width))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Projects ({}) ", projects.len())),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !projects.is_empty() {
        list_state.select(Some(selected.min(projects.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

/// One card: the name stands in for the image alt text, followed by the image source.
///
/// `List` does not wrap, so the source is split into rows of `url_width` chars.
fn project_card(project: &Project, url_width: usize) -> ListItem<'_> {
    let mut lines = vec![Line::from(Span::styled(
        project.name.as_str(),
        Style::default().bold(),
    ))];

    let chars: Vec<char> = project.image_url.chars().collect();
    let indent = " ".repeat(IMAGE_PREFIX.len());
    for (i, chunk) in chars.chunks(url_width).enumerate() {
        let prefix = if i == 0 { IMAGE_PREFIX } else { indent.as_str() };
        let chunk: String = chunk.iter().collect();
        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, chunk),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if chars.is_empty() {
        lines.push(Line::from(Span::styled(IMAGE_PREFIX, Style::default().fg(Color::DarkGray))));
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn draw_failure(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("[{}]", FAILURE_ALT),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(FAILURE_IMAGE_URL, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(FAILURE_TITLE, Style::default().fg(Color::Red).bold())),
        Line::from(FAILURE_DESCRIPTION),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", RETRY_LABEL),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        )),
    ];

    let failure = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(failure, centered_rect(80, 60, area));
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match &state.status {
        RequestStatus::Loading => " Loading... ",
        RequestStatus::Failure(_) => " r/Enter:retry | ←/→:category | ?:help | q:quit ",
        RequestStatus::Success(_) => " ↑/↓:select | ←/→:category | ?:help | q:quit ",
        RequestStatus::Initial => " ←/→:category | ?:help | q:quit ",
    };

    let mut spans = vec![Span::raw(hints)];
    if let Some(ms) = state.last_time_ms {
        spans.push(Span::raw(format!("| {}ms ", ms)));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 PROJECTS SHOWCASE - Keyboard Shortcuts

 CATEGORY
   ← / →  (h / l)     Previous / next category
   1 - 5              All, Static, Responsive, Dynamic, React

 PROJECTS
   ↑ / ↓  (k / j)     Move selection

 FAILURE VIEW
   r / Enter          Retry

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
