//! Assigns input focus, raises floating/transient windows above the tiled ones, paints
//! borders and publishes `_NET_ACTIVE_WINDOW`. Runs after every operation that could change
//! what is focused or visible; `wm::Wm::retile` calls [`sync`] once geometry has settled.
//!
//! Border *width* for tileable clients is decided by the layout engine (it already knows
//! whether a client is the sole tileable one, or whether the desktop is in MONOCLE); this
//! module only owns width for floating/transient clients (layout never touches those) and
//! colour for every client, tileable or not.

use libc::c_long;
use x11::xlib::*;
use x11::xlib::Window as XWindow;

use crate::config;
use crate::wm::Wm;

/// Re-applies focus, raise order, border colour/width and `_NET_ACTIVE_WINDOW` for every
/// monitor's current desktop.
pub fn sync(wm: &mut Wm) {
    for m_idx in 0..wm.monitors.len() {
        paint_monitor(wm, m_idx);
    }
    install_button_grabs(wm);
    set_active_window(wm);
}

fn paint_monitor(wm: &mut Wm, m_idx: usize) {
    let is_current_monitor = m_idx == wm.cur_monitor;
    let monitor = &wm.monitors[m_idx];
    let desktop = monitor.current();
    let current = desktop.current;
    let solo = desktop.clients.len() == 1;

    let mut tileable_order = Vec::new();
    let mut floating_order = Vec::new();
    for (i, client) in desktop.clients.iter().enumerate() {
        let is_current = is_current_monitor && Some(i) == current;
        let pixel = if is_current { wm.focus_pixel } else { wm.unfocus_pixel };
        unsafe { XSetWindowBorder(wm.display, client.window, pixel) };

        if !client.is_tileable() {
            let width = if client.fullscreen || solo { 0 } else { config::BORDER_WIDTH };
            unsafe { XSetWindowBorderWidth(wm.display, client.window, width as u32) };
        }

        if client.is_tileable() {
            tileable_order.push(client.window);
        } else {
            floating_order.push((client.window, is_current));
        }
    }

    for w in tileable_order {
        unsafe { XRaiseWindow(wm.display, w) };
    }
    let mut raise_current_last = None;
    for (w, is_current) in floating_order {
        if is_current {
            raise_current_last = Some(w);
        } else {
            unsafe { XRaiseWindow(wm.display, w) };
        }
    }
    if let Some(w) = raise_current_last {
        unsafe { XRaiseWindow(wm.display, w) };
    }

    if is_current_monitor {
        let window = current.map(|i| wm.monitors[m_idx].current().clients[i].window);
        unsafe {
            match window {
                Some(w) => XSetInputFocus(wm.display, w, RevertToPointerRoot, CurrentTime),
                None => XSetInputFocus(wm.display, wm.root, RevertToPointerRoot, CurrentTime),
            };
        }
    }
}

/// Per §4.3: grabs are (re)installed so clicking an unfocused client transfers focus to it.
/// The currently focused client has its catch-all grab released so ordinary clicks pass
/// straight through to the application; the configured move/resize button bindings are
/// (re)installed on every client regardless of focus.
fn install_button_grabs(wm: &Wm) {
    for (m_idx, monitor) in wm.monitors.iter().enumerate() {
        let desktop = monitor.current();
        let is_current_monitor = m_idx == wm.cur_monitor;
        for (i, client) in desktop.clients.iter().enumerate() {
            let focused = is_current_monitor && Some(i) == desktop.current;
            grab_buttons(wm, client.window, focused);
        }
    }
}

fn grab_buttons(wm: &Wm, window: XWindow, focused: bool) {
    unsafe {
        XUngrabButton(wm.display, AnyButton as u32, AnyModifier, window);
        if config::CLICK_TO_FOCUS && !focused {
            XGrabButton(
                wm.display,
                AnyButton as u32,
                AnyModifier,
                window,
                False,
                (ButtonPressMask | ButtonReleaseMask) as u32,
                GrabModeSync,
                GrabModeAsync,
                0,
                0,
            );
        }
        for binding in config::BUTTONS {
            XGrabButton(
                wm.display,
                binding.button,
                binding.modifiers,
                window,
                False,
                (ButtonPressMask | ButtonReleaseMask | PointerMotionMask) as u32,
                GrabModeAsync,
                GrabModeAsync,
                0,
                0,
            );
        }
    }
}

fn set_active_window(wm: &Wm) {
    let monitor = &wm.monitors[wm.cur_monitor];
    let window = monitor.current().current_client().map(|c| c.window);
    unsafe {
        match window {
            Some(w) => {
                let data = [w as c_long];
                XChangeProperty(
                    wm.display,
                    wm.root,
                    wm.atoms.net_active_window,
                    XA_WINDOW,
                    32,
                    PropModeReplace,
                    data.as_ptr() as *const u8,
                    1,
                );
            }
            None => {
                XDeleteProperty(wm.display, wm.root, wm.atoms.net_active_window);
            }
        }
    }
}
