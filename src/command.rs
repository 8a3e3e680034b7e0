use crate::transform::Transform;

/// Actions the user can trigger from the button panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Load,
    Save,
    /// Run one of the single-image transforms
    Transform(Transform),
    /// Ask for a second image and average it into the current one
    Merge,
    Quit,
}

/// What the app should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing visible changed (cancelled dialog, save, failed load)
    Unchanged,
    /// The image or selection changed and needs to be drawn again
    Redraw,
    /// Close the application
    Quit,
}

impl Command {
    /// Every button, in panel order
    pub const ALL: [Command; 11] = [
        Command::Load,
        Command::Save,
        Command::Transform(Transform::Lighten),
        Command::Transform(Transform::Fade),
        Command::Transform(Transform::FlipHorizontal),
        Command::Transform(Transform::ShiftVertical),
        Command::Transform(Transform::Rotate180),
        Command::Transform(Transform::Rotate90),
        Command::Transform(Transform::Expand),
        Command::Merge,
        Command::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Load => "Load",
            Command::Save => "Save",
            Command::Transform(transform) => transform.label(),
            Command::Merge => "Merge",
            Command::Quit => "Quit",
        }
    }
}
