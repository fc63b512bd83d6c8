//! Selector table for the translucent "glass" theme.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlassClass {
    Container,
    Navbar,
    Button,
    Input,
    /// Extra class the navbar stylesheet keys its blur off.
    Effect,
}

impl GlassClass {
    pub fn class_name(self) -> &'static str {
        match self {
            GlassClass::Container => "glass-container",
            GlassClass::Navbar => "glass-navbar",
            GlassClass::Button => "glass-button",
            GlassClass::Input => "glass-input",
            GlassClass::Effect => "glass-effect",
        }
    }
}

/// Which elements receive which glass class.
pub const GLASS_RULES: &[(&str, GlassClass)] = &[
    (".split-container", GlassClass::Container),
    (".modifications-container", GlassClass::Container),
    (".nav-container", GlassClass::Container),
    (".popup-content", GlassClass::Container),
    (".admin-panel", GlassClass::Container),
    (".modifications-menu", GlassClass::Container),
    (".hamburger-menu", GlassClass::Navbar),
    (".nav-icon", GlassClass::Navbar),
    (".user-info", GlassClass::Navbar),
    ("button", GlassClass::Button),
    (".file-button", GlassClass::Button),
    ("input", GlassClass::Input),
    (".password-input input", GlassClass::Input),
    (".modification-input", GlassClass::Input),
    (".modification-file", GlassClass::Input),
    (".nav-container", GlassClass::Effect),
    (".nav-icon", GlassClass::Effect),
    (".user-info", GlassClass::Effect),
    (".hamburger-menu", GlassClass::Effect),
];
