use crate::models::config::ShareExpiry;

/// Presentation-only state: screens, focus and cursors. Never touched by the
/// reducer.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub screen: Screen,
    pub prev_screen: Option<Screen>,
    pub focus: Focus,
    pub buckets: ListCursor,
    pub objects: ListCursor,
    pub share_form: ShareForm,
    pub delete_confirmation: DeleteConfirmationState,
    /// `true` when the "Abort" button of the abort dialog is focused.
    pub abort_selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Browser,
    Help,
    DeleteConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Buckets,
    #[default]
    Objects,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Buckets => Focus::Objects,
            Focus::Objects => Focus::Buckets,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmationState {
    pub name: String,
    /// `true` when "Delete" is focused, `false` for "Cancel".
    pub confirm_selected: bool,
}

impl ViewState {
    pub fn show(&mut self, screen: Screen) {
        if self.screen != screen {
            self.prev_screen = Some(self.screen);
            self.screen = screen;
        }
    }

    pub fn go_back(&mut self) {
        self.screen = self.prev_screen.take().unwrap_or_default();
    }

    pub fn cursor(&self) -> &ListCursor {
        match self.focus {
            Focus::Buckets => &self.buckets,
            Focus::Objects => &self.objects,
        }
    }

    pub fn cursor_mut(&mut self) -> &mut ListCursor {
        match self.focus {
            Focus::Buckets => &mut self.buckets,
            Focus::Objects => &mut self.objects,
        }
    }
}

/// Selection and scroll position of a list panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCursor {
    pub selected: usize,
    pub offset: usize,
    pub visible_height: usize,
}

impl Default for ListCursor {
    fn default() -> Self {
        Self {
            selected: 0,
            offset: 0,
            visible_height: 10,
        }
    }
}

impl ListCursor {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn up(&mut self, len: usize) {
        self.select(self.selected.saturating_sub(1), len);
    }

    /// Returns `false` when already on the last row.
    pub fn down(&mut self, len: usize) -> bool {
        if self.selected + 1 >= len {
            return false;
        }
        self.select(self.selected + 1, len);
        true
    }

    pub fn page_up(&mut self, len: usize) {
        let page = self.visible_height.max(1);
        self.select(self.selected.saturating_sub(page), len);
    }

    pub fn page_down(&mut self, len: usize) {
        let page = self.visible_height.max(1);
        self.select(self.selected + page, len);
    }

    pub fn home(&mut self, len: usize) {
        self.select(0, len);
    }

    pub fn end(&mut self, len: usize) {
        self.select(len.saturating_sub(1), len);
    }

    /// Keeps the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.select(self.selected, len);
    }

    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
        let height = self.visible_height.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
        self.offset = self.offset.min(len.saturating_sub(height));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareField {
    #[default]
    Days,
    Hours,
    Minutes,
}

/// Expiry controls of the share dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShareForm {
    pub expiry: ShareExpiry,
    pub field: ShareField,
}

pub const MAX_SHARE_DAYS: u64 = 7;
const MAX_SHARE_HOURS: u64 = 23;
const MAX_SHARE_MINUTES: u64 = 59;

impl ShareForm {
    pub fn new(expiry: ShareExpiry) -> Self {
        let mut form = Self {
            expiry,
            field: ShareField::Days,
        };
        form.normalize();
        form
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            ShareField::Days => ShareField::Hours,
            ShareField::Hours => ShareField::Minutes,
            ShareField::Minutes => ShareField::Days,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            ShareField::Days => ShareField::Minutes,
            ShareField::Hours => ShareField::Days,
            ShareField::Minutes => ShareField::Hours,
        };
    }

    /// Returns `true` when the value changed.
    pub fn increment(&mut self) -> bool {
        self.step(1)
    }

    pub fn decrement(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> bool {
        let before = self.expiry;
        let (value, max) = match self.field {
            ShareField::Days => (&mut self.expiry.days, MAX_SHARE_DAYS),
            ShareField::Hours => (&mut self.expiry.hours, MAX_SHARE_HOURS),
            ShareField::Minutes => (&mut self.expiry.minutes, MAX_SHARE_MINUTES),
        };
        *value = value.saturating_add_signed(delta).min(max);
        self.normalize();
        self.expiry != before
    }

    /// Seven days is the longest a link can live, so hours and minutes are
    /// pinned to zero there.
    fn normalize(&mut self) {
        self.expiry.days = self.expiry.days.min(MAX_SHARE_DAYS);
        self.expiry.hours = self.expiry.hours.min(MAX_SHARE_HOURS);
        self.expiry.minutes = self.expiry.minutes.min(MAX_SHARE_MINUTES);
        if self.expiry.days == MAX_SHARE_DAYS {
            self.expiry.hours = 0;
            self.expiry.minutes = 0;
        }
    }
}
