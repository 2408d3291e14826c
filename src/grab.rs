//! The interactive move/resize pointer-grab loop (§4.6). Entered on a configured button
//! press over a client, it owns the pointer until the button is released, translating
//! `MotionNotify` deltas into `XMoveWindow`/`XResizeWindow` calls and handing anything else
//! back to the ordinary dispatcher so a panel repaint or a new window mapping mid-drag still
//! gets serviced.

use libc::c_uint;
use x11::xlib::*;
use x11::xlib::Window as XWindow;

use crate::config;
use crate::events;
use crate::monitor;
use crate::wm::Wm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Move,
    Resize,
}

/// Grabs the pointer confined to `window`'s action and drives it until button release.
/// A floating client is moved/resized directly; a tileable one is lifted out of the tiling
/// order (switched to floating) first, since the layout engine only ever places the rectangle
/// it was given, never grows it interactively.
pub fn interactive(wm: &mut Wm, window: XWindow, mode: Mode) {
    if window == 0 {
        return;
    }
    let loc = match wm.locate(window) {
        Some(l) => l,
        None => return,
    };

    let grabbed = unsafe {
        XGrabPointer(
            wm.display,
            wm.root,
            False,
            (ButtonPressMask | ButtonReleaseMask | PointerMotionMask) as c_uint,
            GrabModeAsync,
            GrabModeAsync,
            0,
            0,
            CurrentTime,
        )
    };
    if grabbed != GrabSuccess {
        return;
    }

    let (start_x, start_y) = unsafe { query_pointer(wm, wm.root) };
    let geom = {
        let client = &mut wm.monitors[loc.monitor].desktops[loc.desktop].clients[loc.index];
        if !client.floating && !client.transient {
            client.floating = true;
        }
        client.floating_geom
    };
    wm.retile(loc.monitor);

    loop {
        if wm.locate(window).is_none() {
            break;
        }

        let mut event: XEvent = unsafe { std::mem::zeroed() };
        unsafe {
            XMaskEvent(
                wm.display,
                ButtonPressMask
                    | ButtonReleaseMask
                    | PointerMotionMask
                    | KeyPressMask
                    | KeyReleaseMask
                    | SubstructureRedirectMask,
                &mut event,
            )
        };

        match unsafe { event.get_type() } {
            MotionNotify => {
                let motion = unsafe { event.motion };
                let dx = motion.x_root - start_x;
                let dy = motion.y_root - start_y;
                apply_delta(wm, window, mode, geom, dx, dy);
                if mode == Mode::Move {
                    migrate_if_crossed_monitor(wm, window, motion.x_root, motion.y_root);
                }
            }
            ButtonPress | ButtonRelease | KeyPress | KeyRelease => break,
            ConfigureRequest | MapRequest => events::dispatch(wm, &event),
            _ => {}
        }
    }

    unsafe { XUngrabPointer(wm.display, CurrentTime) };

    let retile_monitor = wm.locate(window).map(|l| l.monitor).unwrap_or(loc.monitor);
    wm.retile(retile_monitor);
}

fn apply_delta(wm: &mut Wm, window: XWindow, mode: Mode, base: crate::client::Rect, dx: i32, dy: i32) {
    let loc = match wm.locate(window) {
        Some(l) => l,
        None => return,
    };
    let client = &mut wm.monitors[loc.monitor].desktops[loc.desktop].clients[loc.index];
    match mode {
        Mode::Move => {
            client.floating_geom.x = base.x + dx;
            client.floating_geom.y = base.y + dy;
            unsafe { XMoveWindow(wm.display, window, client.floating_geom.x, client.floating_geom.y) };
        }
        Mode::Resize => {
            let w = (base.w + dx).max(config::MINWSZ);
            let h = (base.h + dy).max(config::MINWSZ);
            client.floating_geom.w = w;
            client.floating_geom.h = h;
            unsafe { XResizeWindow(wm.display, window, w as c_uint, h as c_uint) };
        }
    }
}

/// During an interactive move, dragging the pointer into another monitor's rectangle carries
/// the client there too, so it ends up tiled/placed relative to the monitor it was dropped on.
fn migrate_if_crossed_monitor(wm: &mut Wm, window: XWindow, x_root: i32, y_root: i32) {
    let target = monitor::point_to_monitor(&wm.monitors, x_root, y_root, wm.cur_monitor);
    if target == wm.cur_monitor {
        return;
    }
    if wm.locate(window).map_or(false, |l| l.monitor != target) {
        wm.client_to_monitor(target);
    }
    wm.switch_monitor(target);
}

unsafe fn query_pointer(wm: &Wm, relative_to: XWindow) -> (i32, i32) {
    let mut root_ret: XWindow = 0;
    let mut child_ret: XWindow = 0;
    let (mut root_x, mut root_y, mut win_x, mut win_y) = (0, 0, 0, 0);
    let mut mask: c_uint = 0;
    XQueryPointer(
        wm.display,
        relative_to,
        &mut root_ret,
        &mut child_ret,
        &mut root_x,
        &mut root_y,
        &mut win_x,
        &mut win_y,
        &mut mask,
    );
    (root_x, root_y)
}
