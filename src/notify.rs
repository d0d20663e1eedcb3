use bevy_ecs::resource::Resource;

/// What a notification reports; determines its on-screen color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Startup summary of the active settings.
    Info,
    /// Captured settlement already matches the new owner's culture.
    AlreadyMatching,
    /// Conversion scheduled after the configured number of days.
    Scheduled,
    /// Conversion applied.
    Converted,
    /// Conversion blocked by the last-town guard.
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationColor {
    White,
    Green,
    Blue,
    Red,
}

impl NotificationKind {
    pub fn color(self) -> NotificationColor {
        match self {
            NotificationKind::Info => NotificationColor::White,
            NotificationKind::AlreadyMatching | NotificationKind::Converted => {
                NotificationColor::Green
            }
            NotificationKind::Scheduled => NotificationColor::Blue,
            NotificationKind::Blocked => NotificationColor::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

/// Accumulates user-facing messages between schedule runs; the host drains
/// the log and surfaces entries through its on-screen messaging facility.
#[derive(Resource, Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.entries.push(Notification {
            kind,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }

    pub fn count_of(&self, kind: NotificationKind) -> usize {
        self.entries.iter().filter(|n| n.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
