use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::status_log::LogKind;
use crate::ui::console_loop::keybindings::PANE_BINDINGS;
use crate::ui::layout::PaneLayout;
use crate::ui::view::{ConsoleView, Focus};
use crate::ui::wrap::prewrap;

const NO_CHAPTER_HINT: &str = "No chapters yet. Type `new` to start one.";

pub fn ui(f: &mut Frame, view: &ConsoleView) {
    let layout = PaneLayout::compute(f.area(), view.sizes());

    render_header(f, view, layout.header);
    render_sidebar(f, view, layout.sidebar);
    render_editor(f, view, layout.editor);
    render_input(f, view, layout.input);
    render_log(f, view, &layout);
    render_footer(f, view, layout.footer);
}

fn render_header(f: &mut Frame, view: &ConsoleView, area: Rect) {
    let header = Paragraph::new(Line::from(format!(" {}", view.title())))
        .style(view.theme().header_style());
    f.render_widget(header, area);
}

fn render_sidebar(f: &mut Frame, view: &ConsoleView, area: Rect) {
    let theme = view.theme();
    let sidebar = Paragraph::new(view.sidebar_lines().to_vec())
        .style(theme.sidebar_style())
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(theme.primary)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(sidebar, area);
}

fn render_editor(f: &mut Frame, view: &ConsoleView, area: Rect) {
    let theme = view.theme();
    let editor = view.editor();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(view.focus() == Focus::Panes));

    let Some(heading) = editor.heading.as_deref() else {
        let hint = Paragraph::new(Span::styled(NO_CHAPTER_HINT, theme.placeholder_style()))
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let inner = block.inner(area);
    let mut lines = prewrap(
        &format!("--- {heading} ---"),
        theme.chapter_heading_style(),
        inner.width,
    );
    lines.push(Line::from(""));
    lines.extend(prewrap(&editor.body, theme.body_style(), inner.width));

    // Keep the end of the chapter in view.
    let scroll = lines.len().saturating_sub(inner.height as usize);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, view: &ConsoleView, area: Rect) {
    let focused = view.focus() == Focus::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(view.theme().border_style(focused))
        .title(if focused {
            "Input (Enter to submit, Tab for key commands)"
        } else {
            "Input (Tab to type)"
        });
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(view.input(), inner);
}

fn render_log(f: &mut Frame, view: &ConsoleView, layout: &PaneLayout) {
    let theme = view.theme();
    let entries = view.app().status.tail(layout.log_capacity());
    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let style = match entry.kind {
                LogKind::Info => theme.log_info_style(),
                LogKind::Warning => theme.log_warning_style(),
            };
            Line::from(vec![
                Span::styled(format!("{:>4} ", entry.seq), theme.log_seq_style()),
                Span::styled(entry.text.clone(), style),
            ])
        })
        .collect();

    let log = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false))
            .title("Status"),
    );
    f.render_widget(log, layout.log);
}

fn render_footer(f: &mut Frame, view: &ConsoleView, area: Rect) {
    let theme = view.theme();
    let mut spans = Vec::new();
    for (key, _, label) in PANE_BINDINGS {
        spans.push(Span::styled(format!(" {key} "), theme.footer_key_style()));
        spans.push(Span::styled(format!("{label} "), theme.footer_style()));
    }
    spans.push(Span::styled(" tab ", theme.footer_key_style()));
    spans.push(Span::styled("Switch focus", theme.footer_style()));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
