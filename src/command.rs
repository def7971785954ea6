use crate::models::SortBy;

/// User gestures produced by the key and paste handlers. `app::commands::execute`
/// turns each one into view changes and action-creator calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    ShowHelp,
    GoBack,
    FocusNext,

    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,
    /// Enter on the selected row: select a bucket, open a folder or download.
    Activate,
    ParentPrefix,

    // Listing
    Sort { sort_by: SortBy },
    Refresh,

    // Delete confirmation
    RequestDelete,
    DeleteToggle,
    ConfirmDelete,

    // Share dialog
    Share,
    ShareFieldNext,
    ShareFieldPrev,
    ShareIncrement,
    ShareDecrement,
    HideShare,

    Download,

    // Uploads
    ShowAbort,
    AbortToggle,
    ConfirmAbort,
    HideAbort,

    DismissAlert,
    /// Text pasted into the terminal, which is how file managers drop files.
    Drop { text: String },
}
