/// Glyphs available to navigation entries and top bar affordances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    Users,
    Folder,
    Calendar,
    DocumentDuplicate,
    ChartPie,
    Cog,
    Bars,
    Bell,
    XMark,
    ChevronDown,
    MagnifyingGlass,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Users => "👥",
            Icon::Folder => "📁",
            Icon::Calendar => "📅",
            Icon::DocumentDuplicate => "📑",
            Icon::ChartPie => "📊",
            Icon::Cog => "⚙️",
            Icon::Bars => "☰",
            Icon::Bell => "🔔",
            Icon::XMark => "✕",
            Icon::ChevronDown => "▾",
            Icon::MagnifyingGlass => "🔍",
        }
    }
}

/// One entry of the main navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

/// Team shortcut shown under "Your teams".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamEntry {
    pub id: u32,
    pub label: &'static str,
    pub path: &'static str,
    pub initial: &'static str,
    pub is_current: bool,
}

/// Entry of the profile dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserMenuEntry {
    pub label: &'static str,
    pub path: &'static str,
}
