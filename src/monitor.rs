//! A physical output and the `DESKTOPS` virtual workspaces living on it. Discovery takes
//! plain numeric screen descriptions so it can be unit tested without an X connection; the
//! caller (`wm::Wm::init`) is responsible for turning Xinerama replies or the root screen's
//! dimensions into those descriptions.

use crate::client::Rect;
use crate::desktop::Desktop;
use crate::layout::Mode;

#[derive(Debug, Clone, Copy)]
pub struct ScreenInfo {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug)]
pub struct Monitor {
    pub rect: Rect,
    pub desktops: Vec<Desktop>,
    pub current_desktop: usize,
    pub prev_desktop: usize,
}

impl Monitor {
    fn new(rect: Rect, desktops_count: usize, default_desktop: usize, default_mode: Mode, master_size: i32, show_panel: bool) -> Self {
        let desktops = (0..desktops_count)
            .map(|_| Desktop::new(master_size, default_mode, show_panel))
            .collect();
        Monitor {
            rect,
            desktops,
            current_desktop: default_desktop,
            prev_desktop: default_desktop,
        }
    }

    pub fn current(&self) -> &Desktop {
        &self.desktops[self.current_desktop]
    }

    pub fn current_mut(&mut self) -> &mut Desktop {
        &mut self.desktops[self.current_desktop]
    }

    /// The rectangle tileable windows should be laid out within: `rect` widened back out by
    /// the panel reservation when this monitor's current desktop has the panel hidden.
    pub fn work_area(&self, panel_height: i32, top_panel: bool) -> Rect {
        if self.current().show_panel {
            self.rect
        } else if top_panel {
            Rect::new(self.rect.x, self.rect.y - panel_height, self.rect.w, self.rect.h + panel_height)
        } else {
            Rect::new(self.rect.x, self.rect.y, self.rect.w, self.rect.h + panel_height)
        }
    }

    /// Selects a new current desktop, recording the prior one. A no-op if `index` is already
    /// current.
    pub fn select_desktop(&mut self, index: usize) -> bool {
        if index >= self.desktops.len() || index == self.current_desktop {
            return false;
        }
        self.prev_desktop = self.current_desktop;
        self.current_desktop = index;
        true
    }
}

/// Builds one monitor per Xinerama screen, each already reduced by the panel reservation.
pub fn from_screens(
    screens: &[ScreenInfo],
    desktops_count: usize,
    default_desktop: usize,
    default_mode: Mode,
    master_size_fraction: f64,
    panel_height: i32,
    top_panel: bool,
    show_panel: bool,
) -> Vec<Monitor> {
    screens
        .iter()
        .map(|s| {
            let (x, y, h) = if top_panel {
                (s.x, s.y + panel_height, s.h - panel_height)
            } else {
                (s.x, s.y, s.h - panel_height)
            };
            let rect = Rect::new(x, y, s.w, h);
            let master_size = (s.w as f64 * master_size_fraction).round() as i32;
            Monitor::new(rect, desktops_count, default_desktop, default_mode, master_size, show_panel)
        })
        .collect()
}

/// The Xinerama-unavailable fallback: a single synthetic monitor spanning the root screen.
pub fn from_root_screen(
    width: i32,
    height: i32,
    desktops_count: usize,
    default_desktop: usize,
    default_mode: Mode,
    master_size_fraction: f64,
    panel_height: i32,
    top_panel: bool,
    show_panel: bool,
) -> Monitor {
    let screens = [ScreenInfo { x: 0, y: 0, w: width, h: height }];
    from_screens(
        &screens,
        desktops_count,
        default_desktop,
        default_mode,
        master_size_fraction,
        panel_height,
        top_panel,
        show_panel,
    )
    .remove(0)
}

/// Linear scan for the monitor whose rectangle strictly contains `(x, y)`, falling back to
/// `current` when none does.
pub fn point_to_monitor(monitors: &[Monitor], x: i32, y: i32, current: usize) -> usize {
    monitors
        .iter()
        .position(|m| m.rect.contains(x, y))
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_screens_reserves_top_panel() {
        let screens = [ScreenInfo { x: 0, y: 0, w: 1280, h: 800 }];
        let monitors = from_screens(&screens, 4, 0, Mode::Tile, 0.52, 20, true, true);
        assert_eq!(monitors[0].rect, Rect::new(0, 20, 1280, 780));
    }

    #[test]
    fn from_screens_reserves_bottom_panel() {
        let screens = [ScreenInfo { x: 0, y: 0, w: 1280, h: 800 }];
        let monitors = from_screens(&screens, 4, 0, Mode::Tile, 0.52, 20, false, true);
        assert_eq!(monitors[0].rect, Rect::new(0, 0, 1280, 780));
    }

    #[test]
    fn scenario_6_point_crossing_into_second_monitor() {
        let screens = [
            ScreenInfo { x: 0, y: 0, w: 1280, h: 800 },
            ScreenInfo { x: 1280, y: 0, w: 1280, h: 800 },
        ];
        let monitors = from_screens(&screens, 1, 0, Mode::Tile, 0.5, 0, false, true);
        assert_eq!(point_to_monitor(&monitors, 1300, 400, 0), 1);
    }

    #[test]
    fn point_outside_all_monitors_falls_back_to_current() {
        let screens = [ScreenInfo { x: 0, y: 0, w: 1280, h: 800 }];
        let monitors = from_screens(&screens, 1, 0, Mode::Tile, 0.5, 0, false, true);
        assert_eq!(point_to_monitor(&monitors, -5, -5, 0), 0);
    }

    #[test]
    fn select_desktop_records_previous_and_rejects_noop() {
        let mut m = from_root_screen(1280, 800, 4, 0, Mode::Tile, 0.5, 0, false, true);
        assert!(m.select_desktop(2));
        assert_eq!(m.current_desktop, 2);
        assert_eq!(m.prev_desktop, 0);
        assert!(!m.select_desktop(2));
    }

    #[test]
    fn work_area_widens_when_panel_hidden() {
        let mut m = from_root_screen(1280, 800, 1, 0, Mode::Tile, 0.5, 20, true, true);
        assert_eq!(m.work_area(20, true), m.rect);
        m.current_mut().show_panel = false;
        assert_eq!(m.work_area(20, true), Rect::new(0, 0, 1280, 800));
    }
}
