use x11::xlib::Window as XWindow;

/// A rectangle in root-window coordinates. `w`/`h` are the dimensions passed to
/// `XMoveResizeWindow`, i.e. they exclude the window's own border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// One managed top-level window.
///
/// Invariant upheld by every constructor and mutator in this module: a transient client
/// always has `floating` set.
#[derive(Debug, Clone)]
pub struct Client {
    pub window: XWindow,
    pub monitor: usize,
    pub floating: bool,
    pub transient: bool,
    pub urgent: bool,
    pub fullscreen: bool,
    /// Geometry a floating client occupies, maintained independently of the tiling engine.
    /// Also doubles as the "prior geometry" restored when fullscreen is cleared.
    pub floating_geom: Rect,
    /// `floating` value saved at the moment fullscreen was entered, restored on clear.
    saved_floating: Option<bool>,
}

impl Client {
    pub fn new(window: XWindow, monitor: usize, geom: Rect) -> Self {
        Client {
            window,
            monitor,
            floating: false,
            transient: false,
            urgent: false,
            fullscreen: false,
            floating_geom: geom,
            saved_floating: None,
        }
    }

    pub fn set_transient(&mut self, transient: bool) {
        self.transient = transient;
        if transient {
            self.floating = true;
        }
    }

    /// `tileable` clients are the ones the layout engine is allowed to place.
    pub fn is_tileable(&self) -> bool {
        !self.floating && !self.transient && !self.fullscreen
    }

    pub fn enter_fullscreen(&mut self) {
        if self.fullscreen {
            return;
        }
        self.saved_floating = Some(self.floating);
        self.fullscreen = true;
    }

    /// Returns the floating flag to restore to, if this client had entered fullscreen.
    pub fn exit_fullscreen(&mut self) -> bool {
        self.fullscreen = false;
        if let Some(was_floating) = self.saved_floating.take() {
            self.floating = was_floating;
        }
        self.floating
    }

    pub fn toggle_floating(&mut self) {
        if self.transient {
            return; // a transient window is always floating
        }
        self.floating = !self.floating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_implies_floating() {
        let mut c = Client::new(1, 0, Rect::default());
        assert!(!c.floating);
        c.set_transient(true);
        assert!(c.floating);
    }

    #[test]
    fn fullscreen_round_trip_restores_floating() {
        let mut c = Client::new(1, 0, Rect::new(10, 10, 200, 100));
        c.floating = true;
        c.enter_fullscreen();
        assert!(c.fullscreen);
        let restored = c.exit_fullscreen();
        assert!(restored);
        assert!(!c.fullscreen);
        assert!(c.floating);
    }

    #[test]
    fn fullscreen_round_trip_preserves_tiled_flag() {
        let mut c = Client::new(1, 0, Rect::default());
        assert!(!c.floating);
        c.enter_fullscreen();
        let restored = c.exit_fullscreen();
        assert!(!restored);
        assert!(!c.floating);
    }

    #[test]
    fn tileable_excludes_floating_transient_fullscreen() {
        let mut c = Client::new(1, 0, Rect::default());
        assert!(c.is_tileable());
        c.floating = true;
        assert!(!c.is_tileable());
        c.floating = false;
        c.fullscreen = true;
        assert!(!c.is_tileable());
    }
}
