//! Compile-time configuration. Per the CLI contract there is no runtime config file: every
//! knob the core consults is a Rust constant or a static table declared here, the way the
//! reference window manager's `config.h` is a file full of `#define`s and struct literals.
//!
//! Keybindings use raw X keysyms from `x11::keysym` and modifier masks from `x11::xlib`.

use crate::layout::Mode;
use x11::keysym::*;
use x11::xlib::{Mod1Mask, Mod4Mask, ShiftMask};

/// Number of virtual desktops per monitor.
pub const DESKTOPS: usize = 4;
pub const DEFAULT_DESKTOP: usize = 0;
pub const DEFAULT_MONITOR: usize = 0;
pub const DEFAULT_MODE: Mode = Mode::Tile;

/// Fraction of the tiling axis the master area occupies, in (0, 1).
pub const MASTER_SIZE: f64 = 0.52;
pub const BORDER_WIDTH: i32 = 2;
pub const MINWSZ: i32 = 50;

pub const PANEL_HEIGHT: i32 = 0;
pub const TOP_PANEL: bool = true;
pub const SHOW_PANEL: bool = true;

pub const FOCUS_COLOR: &str = "#ebdbb2";
pub const UNFOCUS_COLOR: &str = "#3c3836";

pub const ATTACH_ASIDE: bool = false;
pub const FOLLOW_MOUSE: bool = false;
pub const FOLLOW_MONITOR: bool = true;
pub const FOLLOW_WINDOW: bool = false;
pub const CLICK_TO_FOCUS: bool = true;

/// Pixel amount `resize_master` grows or shrinks the master area by.
pub const RESIZE_STEP: i32 = 20;

/// Parses a `"#rrggbb"` string into the pixel value X expects. Malformed strings (a
/// configuration error, not a runtime one) fall back to black rather than panicking the
/// whole manager.
pub fn hex_to_pixel(s: &str) -> u64 {
    u64::from_str_radix(s.trim_start_matches('#'), 16).unwrap_or(0)
}

/// What a key or button binding invokes. Kept `Copy` so binding tables can be `'static`
/// arrays without allocation.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Spawn(&'static [&'static str]),
    KillClient,
    Quit,
    ChangeDesktop(usize),
    ClientToDesktop(usize),
    ClientToMonitor(usize),
    NextWindow,
    PrevWindow,
    MoveDown,
    MoveUp,
    SwapMaster,
    ResizeMaster(i32),
    SwitchMode(Mode),
    ToggleFloating,
    ToggleFullscreen,
    FocusUrgent,
    InteractiveMove,
    InteractiveResize,
}

#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub modifiers: u32,
    pub keysym: u32,
    pub action: Action,
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonBinding {
    pub modifiers: u32,
    pub button: u32,
    pub action: Action,
}

/// One entry in the app-rules table, consulted on `MapRequest` against `WM_CLASS`. The
/// first rule whose `class` or `instance` matches exactly wins; unmatched windows use the
/// compiled-in defaults (current desktop, tiled, no follow).
#[derive(Debug, Clone, Copy)]
pub struct AppRule {
    pub class: Option<&'static str>,
    pub instance: Option<&'static str>,
    pub desktop: usize,
    pub follow: bool,
    pub floating: bool,
}

const MOD: u32 = Mod1Mask;
const SUPER: u32 = Mod4Mask;

pub static KEYS: &[KeyBinding] = &[
    KeyBinding { modifiers: MOD, keysym: XK_Return, action: Action::Spawn(&["alacritty"]) },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_Return, action: Action::SwapMaster },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_q, action: Action::KillClient },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_e, action: Action::Quit },
    KeyBinding { modifiers: MOD, keysym: XK_j, action: Action::NextWindow },
    KeyBinding { modifiers: MOD, keysym: XK_k, action: Action::PrevWindow },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_j, action: Action::MoveDown },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_k, action: Action::MoveUp },
    KeyBinding { modifiers: MOD, keysym: XK_h, action: Action::ResizeMaster(-RESIZE_STEP) },
    KeyBinding { modifiers: MOD, keysym: XK_l, action: Action::ResizeMaster(RESIZE_STEP) },
    KeyBinding { modifiers: MOD, keysym: XK_t, action: Action::SwitchMode(Mode::Tile) },
    KeyBinding { modifiers: MOD, keysym: XK_m, action: Action::SwitchMode(Mode::Monocle) },
    KeyBinding { modifiers: MOD, keysym: XK_b, action: Action::SwitchMode(Mode::Bstack) },
    KeyBinding { modifiers: MOD, keysym: XK_g, action: Action::SwitchMode(Mode::Grid) },
    KeyBinding { modifiers: MOD, keysym: XK_space, action: Action::ToggleFloating },
    KeyBinding { modifiers: MOD, keysym: XK_f, action: Action::ToggleFullscreen },
    KeyBinding { modifiers: MOD, keysym: XK_u, action: Action::FocusUrgent },
    KeyBinding { modifiers: MOD, keysym: XK_1, action: Action::ChangeDesktop(0) },
    KeyBinding { modifiers: MOD, keysym: XK_2, action: Action::ChangeDesktop(1) },
    KeyBinding { modifiers: MOD, keysym: XK_3, action: Action::ChangeDesktop(2) },
    KeyBinding { modifiers: MOD, keysym: XK_4, action: Action::ChangeDesktop(3) },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_1, action: Action::ClientToDesktop(0) },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_2, action: Action::ClientToDesktop(1) },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_3, action: Action::ClientToDesktop(2) },
    KeyBinding { modifiers: MOD | ShiftMask, keysym: XK_4, action: Action::ClientToDesktop(3) },
    KeyBinding { modifiers: SUPER, keysym: XK_period, action: Action::ClientToMonitor(1) },
    KeyBinding { modifiers: SUPER, keysym: XK_comma, action: Action::ClientToMonitor(0) },
];

pub static BUTTONS: &[ButtonBinding] = &[
    ButtonBinding { modifiers: MOD, button: 1, action: Action::InteractiveMove },
    ButtonBinding { modifiers: MOD, button: 3, action: Action::InteractiveResize },
];

pub static APP_RULES: &[AppRule] = &[
    AppRule { class: Some("Gimp"), instance: None, desktop: 2, follow: false, floating: true },
    AppRule { class: None, instance: Some("scratchpad"), desktop: 0, follow: true, floating: true },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_pixel_parses_rrggbb() {
        assert_eq!(hex_to_pixel("#000000"), 0);
        assert_eq!(hex_to_pixel("#ffffff"), 0xffffff);
    }

    #[test]
    fn hex_to_pixel_falls_back_to_black_on_garbage() {
        assert_eq!(hex_to_pixel("#zzzzzz"), 0);
    }

    #[test]
    fn master_size_is_a_proper_fraction() {
        assert!(MASTER_SIZE > 0.0 && MASTER_SIZE < 1.0);
    }
}
