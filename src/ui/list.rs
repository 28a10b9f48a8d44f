// Listings list rendering.
// Renders listing rows plus the loading, error, and empty placeholders.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::graphql::Listing;
use crate::state::{ListingsView, READ_ERROR_MESSAGE, ViewPhase};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Format a nightly price with no fractional part unless one is present.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Build the two-line row for one listing.
fn listing_item(listing: &Listing) -> ListItem<'_> {
    let heading = Line::from(vec![
        Span::styled(
            &listing.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", format_price(listing.price)),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("  ★ {}", listing.rating),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let details = Line::from(vec![
        Span::raw("  "),
        Span::styled(&listing.address, Style::default().fg(Color::White)),
        Span::styled(
            format!(
                "  {} guests · {} beds · {} baths",
                listing.num_of_guests, listing.num_of_beds, listing.num_of_baths
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    ListItem::new(vec![heading, details])
}

/// Render the listings area for the current view phase.
pub fn render_listings(frame: &mut Frame, view: &mut ListingsView, area: Rect) {
    match view.phase() {
        ViewPhase::Loading => render_loading(frame, area, "Loading listings"),
        ViewPhase::Error => render_error(frame, area, READ_ERROR_MESSAGE),
        ViewPhase::Ready => {
            let busy = view.is_busy();
            let Some(listings) = view.query.data() else {
                return;
            };

            let title = if busy { " Listings ⏳ " } else { " Listings " };
            let border_color = if busy { Color::Yellow } else { Color::DarkGray };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(title);

            // Empty state sits inside the same block so the busy marker stays visible
            if listings.is_empty() {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                render_empty(frame, inner, "No listings");
                return;
            }

            let items: Vec<ListItem> = listings.iter().map(listing_item).collect();
            let mut list_widget = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            if busy {
                list_widget = list_widget.style(Style::default().add_modifier(Modifier::DIM));
            }

            frame.render_stateful_widget(list_widget, area, &mut view.list_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(120.0), "$120");
        assert_eq!(format_price(80.5), "$80.50");
    }

    #[test]
    fn test_format_relative_time() {
        assert_eq!(format_relative_time(&Utc::now()), "just now");
        let earlier = Utc::now() - chrono::Duration::hours(3);
        assert_eq!(format_relative_time(&earlier), "3h ago");
    }
}
