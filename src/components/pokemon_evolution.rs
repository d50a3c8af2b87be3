use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{ACCENT_GOLD, ACCENT_TEAL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::catalog::ChainLink;
use crate::panels::PanelModule;

pub struct PokemonEvolution;

pub struct PokemonEvolutionProps<'a> {
    pub name: &'a str,
    pub evolutions: &'a [ChainLink],
    pub module: &'a PanelModule,
}

/// Depth-first walk of the chain: `(depth, link)` in display order
pub fn chain_stages(links: &[ChainLink]) -> Vec<(usize, &ChainLink)> {
    fn walk<'a>(links: &'a [ChainLink], depth: usize, out: &mut Vec<(usize, &'a ChainLink)>) {
        for link in links {
            out.push((depth, link));
            walk(&link.evolves_to, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(links, 0, &mut out);
    out
}

fn stage_line<'a>(depth: usize, link: &ChainLink, name: &str, module: &PanelModule) -> Line<'a> {
    let is_current = link.species.eq_ignore_ascii_case(name);
    let species_style = if is_current {
        Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MAIN)
    };

    let mut spans = Vec::new();
    if depth > 0 {
        spans.push(Span::styled(
            format!("{}\u{2514}\u{2500} ", "   ".repeat(depth - 1)),
            Style::default().fg(TEXT_DIM),
        ));
    }
    spans.push(Span::styled(link.species.clone(), species_style));

    let condition = match (link.min_level, link.trigger.as_deref()) {
        (Some(level), _) => Some(format!("{} {level}", module.label(0, "Lv."))),
        (None, Some(trigger)) => Some(trigger.replace('-', " ")),
        (None, None) => None,
    };
    if let Some(condition) = condition {
        spans.push(Span::styled(
            format!("  ({condition})"),
            Style::default().fg(TEXT_DIM),
        ));
    }
    if link.is_baby {
        spans.push(Span::styled(
            format!("  [{}]", module.label(1, "baby")),
            Style::default().fg(ACCENT_TEAL),
        ));
    }
    Line::from(spans)
}

impl Component<Action> for PokemonEvolution {
    type Props<'a> = PokemonEvolutionProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Heading
            Constraint::Min(1),    // Chain
        ])
        .split(area);

        let heading = Line::from(Span::styled(
            props.module.heading.clone(),
            Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(heading), chunks[0]);

        let stages = chain_stages(props.evolutions);
        // A lone stage has nothing to evolve into
        if stages.len() < 2 {
            let empty = Paragraph::new(props.module.empty_text().to_string())
                .style(Style::default().fg(TEXT_DIM));
            frame.render_widget(empty, chunks[1]);
            return;
        }

        let lines: Vec<Line> = stages
            .into_iter()
            .map(|(depth, link)| stage_line(depth, link, props.name, props.module))
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }
}
