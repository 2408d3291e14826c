//! Demultiplexes one X event to the handler named in §4.5, and resolves key/button
//! bindings against the compiled-in tables in [`config`].
//!
//! Every property query a handler needs (class hints, transient-for, WM_HINTS urgency,
//! `_NET_WM_STATE`) goes through `Wm`'s query helpers, which already treat a missing or
//! malformed reply as "no information" per §7 — handlers here never see that distinction,
//! they just get a default back.

use libc::c_uint;
use x11::xlib::*;
use x11::xlib::Window as XWindow;

use crate::client::Rect;
use crate::config;
use crate::grab;
use crate::layout;
use crate::monitor;
use crate::status;
use crate::wm::Wm;

/// Table-dispatches on the low bits of the event's response type (`XAnyEvent::type_`, via
/// `XEvent::get_type`). Unknown event kinds are dropped.
pub fn dispatch(wm: &mut Wm, event: &XEvent) {
    #[allow(non_upper_case_globals)]
    unsafe {
        match event.get_type() {
            KeyPress => on_key_press(wm, &event.key),
            ButtonPress => on_button_press(wm, &event.button),
            MapRequest => on_map_request(wm, &event.map_request),
            UnmapNotify => on_unmap_notify(wm, &event.unmap),
            DestroyNotify => on_destroy_notify(wm, &event.destroy_window),
            EnterNotify => on_enter_notify(wm, &event.crossing),
            MotionNotify => on_motion_notify(wm, &event.motion),
            PropertyNotify => on_property_notify(wm, &event.property),
            ClientMessage => on_client_message(wm, &event.client_message),
            ConfigureRequest => on_configure_request(wm, &event.configure_request),
            other => trace!("dropping unhandled event type {}", other),
        }
    }
}

/// §4.5 MapRequest: app-rule match, transient/fullscreen discovery, then either map+focus
/// on the current desktop or stash on the target desktop (optionally following it).
fn on_map_request(wm: &mut Wm, ev: &XMapRequestEvent) {
    trace!("MapRequest window={:?}", ev.window);
    let attrs = unsafe { wm.window_attributes(ev.window) };
    if attrs.as_ref().map_or(false, |a| a.override_redirect != 0) {
        return;
    }

    let monitor_idx = wm.cur_monitor;
    let original_desktop = wm.monitors[monitor_idx].current_desktop;

    let (instance, class) = unsafe { wm.class_hint(ev.window) }.unwrap_or_default();
    let rule = config::APP_RULES.iter().find(|r| {
        r.class.map_or(false, |c| c == class) || r.instance.map_or(false, |i| i == instance)
    });
    debug!(
        "MapRequest window={:?} class={:?} instance={:?} rule_matched={}",
        ev.window,
        class,
        instance,
        rule.is_some()
    );
    let target_desktop = rule.map(|r| r.desktop).filter(|&d| d < config::DESKTOPS).unwrap_or(original_desktop);
    let follow = rule.map(|r| r.follow).unwrap_or(false);
    let floating_rule = rule.map(|r| r.floating).unwrap_or(false);

    if target_desktop != original_desktop {
        wm.monitors[monitor_idx].select_desktop(target_desktop);
    }

    let (x, y, w, h) = attrs
        .map(|a| (a.x, a.y, a.width, a.height))
        .unwrap_or((0, 0, config::MINWSZ, config::MINWSZ));
    let idx = wm.add_client(monitor_idx, target_desktop, ev.window, Rect::new(x, y, w, h));

    unsafe {
        if wm.is_transient(ev.window) {
            wm.monitors[monitor_idx].desktops[target_desktop].clients[idx].set_transient(true);
        }
        XSelectInput(
            wm.display,
            ev.window,
            EnterWindowMask | PropertyChangeMask | StructureNotifyMask | FocusChangeMask,
        );
    }
    if floating_rule {
        wm.monitors[monitor_idx].desktops[target_desktop].clients[idx].floating = true;
    }
    let wants_fullscreen = unsafe { wm.net_wm_state_has(ev.window, wm.atoms.net_wm_state_fullscreen) };

    if target_desktop == original_desktop || follow {
        unsafe { XMapWindow(wm.display, ev.window) };
        if wants_fullscreen {
            wm.set_fullscreen(ev.window, 1);
        }
        wm.focus_window(ev.window);
    } else {
        wm.monitors[monitor_idx].select_desktop(original_desktop);
        if wants_fullscreen {
            wm.set_fullscreen(ev.window, 1);
        }
        wm.retile(monitor_idx);
    }
}

/// §4.5 UnmapNotify: a synthetic unmap (an EWMH pager asking a client to withdraw) is not
/// a real disappearance and is left to the client to act on; only a real unmap removes it
/// from the graph.
fn on_unmap_notify(wm: &mut Wm, ev: &XUnmapEvent) {
    if ev.send_event != 0 {
        return;
    }
    if let Some(client) = wm.remove_client(ev.window) {
        wm.retile(client.monitor);
    }
}

fn on_destroy_notify(wm: &mut Wm, ev: &XDestroyWindowEvent) {
    if let Some(client) = wm.remove_client(ev.window) {
        wm.retile(client.monitor);
    }
}

/// §4.5 ConfigureRequest: fullscreen clients have their request discarded and their
/// geometry re-asserted; everyone else is granted the requested geometry verbatim (offset
/// for a top panel, per §6's configuration surface).
fn on_configure_request(wm: &mut Wm, ev: &XConfigureRequestEvent) {
    if let Some(loc) = wm.locate(ev.window) {
        let fullscreen = wm.monitors[loc.monitor].desktops[loc.desktop].clients[loc.index].fullscreen;
        if fullscreen {
            let monitor_rect = wm.monitors[loc.monitor].rect;
            let geom = layout::fullscreen_geom(monitor_rect, config::PANEL_HEIGHT, config::TOP_PANEL);
            unsafe {
                XSetWindowBorderWidth(wm.display, ev.window, 0);
                XMoveResizeWindow(wm.display, ev.window, geom.x, geom.y, geom.w.max(1) as c_uint, geom.h.max(1) as c_uint);
            }
            return;
        }
    }

    let mut changes = XWindowChanges {
        x: ev.x,
        y: if config::TOP_PANEL { ev.y + config::PANEL_HEIGHT } else { ev.y },
        width: ev.width,
        height: ev.height,
        border_width: ev.border_width,
        sibling: ev.above,
        stack_mode: ev.detail,
    };
    unsafe { XConfigureWindow(wm.display, ev.window, ev.value_mask as u32, &mut changes) };

    if let Some(loc) = wm.locate(ev.window) {
        wm.retile(loc.monitor);
    }
}

/// §4.5 ClientMessage: the only type this manager honours is `_NET_WM_STATE` toggling
/// fullscreen (`action`: 0 clear, 1 set, 2 toggle, per EWMH).
fn on_client_message(wm: &mut Wm, ev: &XClientMessageEvent) {
    if ev.message_type != wm.atoms.net_wm_state {
        return;
    }
    let action = ev.data.get_long(0);
    let prop1 = ev.data.get_long(1) as Atom;
    let prop2 = ev.data.get_long(2) as Atom;
    if prop1 == wm.atoms.net_wm_state_fullscreen || prop2 == wm.atoms.net_wm_state_fullscreen {
        wm.set_fullscreen(ev.window, action);
    }
}

/// §4.5 PropertyNotify: only `WM_HINTS` (urgency) is watched.
fn on_property_notify(wm: &mut Wm, ev: &XPropertyEvent) {
    if ev.atom != wm.atoms.wm_hints {
        return;
    }
    if let Some(loc) = wm.locate(ev.window) {
        let urgent = unsafe { wm.is_urgent_hint(ev.window) };
        wm.monitors[loc.monitor].desktops[loc.desktop].clients[loc.index].urgent = urgent;
        status::emit(&wm.monitors, wm.cur_monitor);
    }
}

fn on_enter_notify(wm: &mut Wm, ev: &XCrossingEvent) {
    if !config::FOLLOW_MOUSE {
        return;
    }
    if ev.mode != NotifyNormal || ev.detail == NotifyInferior {
        return;
    }
    if wm.locate(ev.window).is_some() {
        wm.focus_window(ev.window);
    }
}

fn on_motion_notify(wm: &mut Wm, ev: &XMotionEvent) {
    if !config::FOLLOW_MONITOR {
        return;
    }
    let target = monitor::point_to_monitor(&wm.monitors, ev.x_root, ev.y_root, wm.cur_monitor);
    if target != wm.cur_monitor {
        wm.switch_monitor(target);
    }
}

fn on_key_press(wm: &mut Wm, ev: &XKeyEvent) {
    let keysym = unsafe { XKeycodeToKeysym(wm.display, ev.keycode as u8, 0) } as u32;
    let state = clean_mask(wm, ev.state);
    let action = config::KEYS.iter().find(|b| b.keysym == keysym && b.modifiers == state).map(|b| b.action);
    if let Some(action) = action {
        let context = current_window(wm).unwrap_or(0);
        invoke(wm, action, context);
    }
}

/// Button grabs are installed per client window (`focus::grab_buttons`), never on root, so
/// `ev.window` is the client the grab fired on — unlike `ev.subwindow`, which is 0 for a grab
/// taken directly on a leaf window with no children under the pointer.
fn on_button_press(wm: &mut Wm, ev: &XButtonEvent) {
    let state = clean_mask(wm, ev.state);
    let action = config::BUTTONS.iter().find(|b| b.button == ev.button as u32 && b.modifiers == state).map(|b| b.action);
    match action {
        Some(action) => invoke(wm, action, ev.window),
        None if config::CLICK_TO_FOCUS && wm.locate(ev.window).is_some() => wm.focus_window(ev.window),
        None => {}
    }
    unsafe { XAllowEvents(wm.display, ReplayPointer, CurrentTime) };
}

fn invoke(wm: &mut Wm, action: config::Action, context_window: XWindow) {
    use config::Action::*;
    match action {
        Spawn(argv) => Wm::spawn(argv),
        KillClient => {
            if let Some(w) = current_window(wm) {
                wm.kill_client(w);
            }
        }
        Quit => wm.quit(),
        ChangeDesktop(d) => wm.change_desktop(wm.cur_monitor, d),
        ClientToDesktop(d) => wm.client_to_desktop(d),
        ClientToMonitor(m) => wm.client_to_monitor(m),
        NextWindow => wm.next_win(),
        PrevWindow => wm.prev_win(),
        MoveDown => wm.move_down(),
        MoveUp => wm.move_up(),
        SwapMaster => wm.swap_master(),
        ResizeMaster(delta) => wm.resize_master(delta),
        SwitchMode(mode) => wm.switch_mode(mode),
        ToggleFloating => wm.toggle_floating(),
        ToggleFullscreen => {
            if let Some(w) = current_window(wm) {
                wm.set_fullscreen(w, 2);
            }
        }
        FocusUrgent => wm.focus_urgent(),
        InteractiveMove => grab::interactive(wm, context_window, grab::Mode::Move),
        InteractiveResize => grab::interactive(wm, context_window, grab::Mode::Resize),
    }
}

fn current_window(wm: &Wm) -> Option<XWindow> {
    wm.current_monitor().current().current_client().map(|c| c.window)
}

/// Strips numlock and caps-lock from a reported modifier state before comparing it against
/// the binding tables, per §4.5.
fn clean_mask(wm: &Wm, state: u32) -> u32 {
    let ignored = wm.numlock_mask | LockMask;
    state & !ignored & (ShiftMask | ControlMask | Mod1Mask | Mod2Mask | Mod3Mask | Mod4Mask | Mod5Mask)
}
