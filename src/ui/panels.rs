use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::helpers::{format_date, format_size, truncate_string};
use crate::app::view::ListCursor;
use crate::app::{App, Focus};
use crate::models::{Bucket, ObjectEntry, SortBy};

/// What one bucket row shows.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketRowProps {
    pub name: String,
    pub current: bool,
    pub selected: bool,
}

impl BucketRowProps {
    pub fn new(bucket: &Bucket, current_bucket: &str, selected: bool) -> Self {
        Self {
            name: bucket.name.clone(),
            current: bucket.name == current_bucket,
            selected,
        }
    }
}

/// What one object row shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRowProps {
    pub name: String,
    pub is_folder: bool,
    pub size: String,
    pub last_modified: String,
    pub content_type: String,
    pub selected: bool,
}

impl ObjectRowProps {
    pub fn new(object: &ObjectEntry, selected: bool) -> Self {
        let is_folder = object.is_folder();
        Self {
            name: object.name.clone(),
            is_folder,
            size: if is_folder {
                "<DIR>".to_string()
            } else {
                format_size(object.size)
            },
            last_modified: if is_folder {
                String::new()
            } else {
                format_date(object.last_modified)
            },
            content_type: object.content_type.clone(),
            selected,
        }
    }

    fn display(&self, name_width: usize) -> String {
        let icon = if self.is_folder { "📁" } else { "📄" };
        format!(
            "{icon} {:<name_width$} {:>10}  {:<16}  {}",
            truncate_string(&self.name, name_width),
            self.size,
            self.last_modified,
            self.content_type
        )
    }
}

fn row_style(selected: bool, is_active: bool, folder: bool) -> Style {
    if selected && is_active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else if folder {
        Style::default().fg(Color::Blue)
    } else {
        Style::default()
    }
}

fn panel_block(title: String, is_active: bool) -> Block<'static> {
    let border_style = if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

/// Records the panel height for paging and returns the visible row range.
fn visible_window(cursor: &mut ListCursor, area: Rect, len: usize) -> std::ops::Range<usize> {
    cursor.visible_height = area.height.saturating_sub(2).max(1) as usize;
    cursor.clamp(len);
    let end = (cursor.offset + cursor.visible_height).min(len);
    cursor.offset..end
}

pub fn draw_bucket_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let is_active = app.view.focus == Focus::Buckets;
    let state = app.store.state();
    let buckets = &state.buckets;
    let window = visible_window(&mut app.view.buckets, area, buckets.list.len());
    let selected = app.view.buckets.selected;

    let items: Vec<ListItem> = buckets.list[window.clone()]
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let is_selected = window.start + i == selected;
            let props = BucketRowProps::new(bucket, &buckets.current_bucket, is_selected);
            let marker = if props.current { "▶" } else { " " };
            ListItem::new(format!("{marker} 🪣 {}", props.name))
                .style(row_style(props.selected, is_active, false))
        })
        .collect();

    let title = format!("Buckets ({})", buckets.list.len());
    f.render_widget(List::new(items).block(panel_block(title, is_active)), area);
}

pub fn draw_object_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let is_active = app.view.focus == Focus::Objects;
    let state = app.store.state();
    let objects = &state.objects;
    let window = visible_window(&mut app.view.objects, area, objects.list.len());
    let selected = app.view.objects.selected;
    let name_width = (area.width as usize).saturating_sub(50).clamp(12, 60);

    let items: Vec<ListItem> = objects.list[window.clone()]
        .iter()
        .enumerate()
        .map(|(i, object)| {
            let props = ObjectRowProps::new(object, window.start + i == selected);
            ListItem::new(props.display(name_width))
                .style(row_style(props.selected, is_active, props.is_folder))
        })
        .collect();

    let more = if objects.is_truncated { "+" } else { "" };
    let location = if state.location.route.is_empty() {
        format!("/{}", state.buckets.current_bucket)
    } else {
        state.location.route.clone()
    };
    let title = format!(
        "{location} ({}{more}){}",
        objects.list.len(),
        sort_indicator(objects.sort_by, objects.sort_order),
    );
    f.render_widget(List::new(items).block(panel_block(title, is_active)), area);
}

fn sort_indicator(sort_by: SortBy, ascending: bool) -> String {
    if sort_by == SortBy::None {
        return String::new();
    }
    let arrow = if ascending { "▲" } else { "▼" };
    format!(" [{} {arrow}]", sort_by.as_str())
}
