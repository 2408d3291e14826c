//! The global context: one X connection, the monitor/desktop/client graph, and the
//! higher-level operations (`add_client`, `move_down`, `change_desktop`, `setfullscreen`, ...)
//! that both the event handlers and the interactive grab loop call into.
//!
//! Per the simplification recorded in DESIGN.md, `Monitor`/`Desktop` are the sole source of
//! truth — there is no inline "working set" cache to save and restore when switching monitors
//! or desktops, which is why operations that inspect another desktop (urgent search, the
//! status emitter, `wintoclient`) need no save/select dance: they just index in.

use std::collections::HashMap;
use std::ffi::CString;
use std::sync::Mutex;

use libc::{c_int, c_uint};
use x11::xlib::*;
use x11::xlib::Window as XWindow;

lazy_static! {
    /// Guards the error-handler flag set when `XSelectInput`'s substructure redirect request
    /// is refused, meaning another window manager already owns the root window.
    static ref WM_DETECTED: Mutex<bool> = Mutex::new(false);
}

use crate::atoms::Atoms;
use crate::client::{Client, Rect};
use crate::config;
use crate::desktop::Attach;
use crate::layout::{self, Mode};
use crate::monitor::{self, Monitor, ScreenInfo};

/// Resolves a managed window id to where it lives, so handlers need not scan every desktop
/// of every monitor (§9's "wintoclient is O(desktops·n)" note).
#[derive(Debug, Clone, Copy)]
pub struct Locator {
    pub monitor: usize,
    pub desktop: usize,
    pub index: usize,
}

pub struct Wm {
    pub display: *mut Display,
    pub root: XWindow,
    pub atoms: Atoms,
    pub monitors: Vec<Monitor>,
    pub cur_monitor: usize,
    pub prev_monitor: usize,
    pub numlock_mask: u32,
    pub focus_pixel: u64,
    pub unfocus_pixel: u64,
    pub running: bool,
    locations: HashMap<XWindow, Locator>,
}

impl Wm {
    /// Opens the display, probes for a competing window manager, discovers monitors and
    /// interns atoms. Every failure here is startup-fatal per §7.
    pub fn init() -> Result<Self, String> {
        let display = unsafe {
            /* Safe: no side effects prior to this call. */
            XOpenDisplay(std::ptr::null())
        };
        if display.is_null() {
            return Err("could not open X display".into());
        }

        let root = unsafe { XDefaultRootWindow(display) };

        unsafe {
            XSetErrorHandler(Some(on_wm_detected));
            XSelectInput(
                display,
                root,
                SubstructureRedirectMask | SubstructureNotifyMask,
            );
            XSync(display, False);
        }
        if *WM_DETECTED.lock().unwrap() {
            unsafe { XCloseDisplay(display) };
            return Err("another window manager is already running".into());
        }

        let atoms = unsafe { Atoms::intern(display) };
        let numlock_mask = unsafe { discover_numlock_mask(display) };

        let monitors = unsafe { discover_monitors(display) };
        if monitors.is_empty() {
            unsafe { XCloseDisplay(display) };
            return Err("no usable screens found".into());
        }

        let focus_pixel = config::hex_to_pixel(config::FOCUS_COLOR);
        let unfocus_pixel = config::hex_to_pixel(config::UNFOCUS_COLOR);
        let default_monitor = config::DEFAULT_MONITOR.min(monitors.len() - 1);

        let mut wm = Wm {
            display,
            root,
            atoms,
            monitors,
            cur_monitor: default_monitor,
            prev_monitor: 0,
            numlock_mask,
            focus_pixel,
            unfocus_pixel,
            running: true,
            locations: HashMap::new(),
        };

        unsafe { wm.set_net_supported() };
        wm.grab_global_keys();

        info!("tdwm started: {} monitor(s) discovered", wm.monitors.len());
        Ok(wm)
    }

    unsafe fn set_net_supported(&self) {
        let list = self.atoms.supported();
        XChangeProperty(
            self.display,
            self.root,
            self.atoms.net_supported,
            XA_ATOM,
            32,
            PropModeReplace,
            list.as_ptr() as *const u8,
            list.len() as c_int,
        );
    }

    fn grab_global_keys(&mut self) {
        for binding in config::KEYS {
            self.grab_key(binding.modifiers, binding.keysym);
        }
    }

    fn grab_key(&self, modifiers: u32, keysym: u32) {
        unsafe {
            let code = XKeysymToKeycode(self.display, keysym as u64) as c_int;
            if code == 0 {
                return; // keysym not present on this keyboard layout; nothing to bind
            }
            for extra in ignored_modifier_combinations(self.numlock_mask) {
                XGrabKey(
                    self.display,
                    code,
                    modifiers | extra,
                    self.root,
                    True,
                    GrabModeAsync,
                    GrabModeAsync,
                );
            }
        }
    }

    /// Looks up which monitor/desktop/index a managed window occupies.
    pub fn locate(&self, window: XWindow) -> Option<Locator> {
        self.locations.get(&window).copied()
    }

    fn reindex(&mut self, monitor: usize, desktop: usize) {
        let clients = &self.monitors[monitor].desktops[desktop].clients;
        for (i, c) in clients.iter().enumerate() {
            self.locations.insert(c.window, Locator { monitor, desktop, index: i });
        }
    }

    /// Adds a newly mapped window to `(monitor, desktop)`'s client list.
    pub fn add_client(&mut self, monitor: usize, desktop: usize, window: XWindow, geom: Rect) -> usize {
        let attach = if config::ATTACH_ASIDE { Attach::Tail } else { Attach::Head };
        let client = Client::new(window, monitor, geom);
        let idx = self.monitors[monitor].desktops[desktop].add(client, attach);
        self.reindex(monitor, desktop);
        idx
    }

    /// Removes a managed window wherever it lives. Returns the removed client so the
    /// caller can react to its flags (e.g. decide whether a frame needs destroying).
    pub fn remove_client(&mut self, window: XWindow) -> Option<Client> {
        let loc = self.locate(window)?;
        self.locations.remove(&window);
        let removed = self.monitors[loc.monitor].desktops[loc.desktop].remove_at(loc.index);
        self.reindex(loc.monitor, loc.desktop);
        Some(removed)
    }

    pub fn current_monitor(&self) -> &Monitor {
        &self.monitors[self.cur_monitor]
    }

    pub fn current_monitor_mut(&mut self) -> &mut Monitor {
        &mut self.monitors[self.cur_monitor]
    }

    /// Applies the layout engine's placements to the current monitor's current desktop and
    /// re-asserts fullscreen geometry for any fullscreen client, then hands off to the focus
    /// manager for borders/raise/active-window bookkeeping.
    pub fn retile(&mut self, monitor_idx: usize) {
        let panel_height = config::PANEL_HEIGHT;
        let top_panel = config::TOP_PANEL;
        let border = config::BORDER_WIDTH;

        let work_area = self.monitors[monitor_idx].work_area(panel_height, top_panel);
        let monitor_rect = self.monitors[monitor_idx].rect;
        let desktop = self.monitors[monitor_idx].current_mut();
        let placements = layout::compute(desktop.mode, work_area, &desktop.clients, desktop.master_size, desktop.growth, border);

        for p in &placements {
            let win = desktop.clients[p.index].window;
            unsafe {
                XSetWindowBorderWidth(self.display, win, p.border as c_uint);
                XMoveResizeWindow(self.display, win, p.geom.x, p.geom.y, p.geom.w.max(1) as c_uint, p.geom.h.max(1) as c_uint);
            }
        }

        for client in desktop.clients.iter() {
            if client.fullscreen {
                let geom = layout::fullscreen_geom(monitor_rect, panel_height, top_panel);
                unsafe {
                    XSetWindowBorderWidth(self.display, client.window, 0);
                    XMoveResizeWindow(self.display, client.window, geom.x, geom.y, geom.w.max(1) as c_uint, geom.h.max(1) as c_uint);
                }
            } else if client.floating {
                let g = client.floating_geom;
                unsafe {
                    XMoveResizeWindow(self.display, client.window, g.x, g.y, g.w.max(1) as c_uint, g.h.max(1) as c_uint);
                }
            }
        }

        crate::focus::sync(self);
        crate::status::emit(&self.monitors, self.cur_monitor);
        unsafe { XSync(self.display, False) };
    }

    /// Selects `target` on `monitor_idx`, unmapping the outgoing desktop's clients and
    /// mapping/retiling the incoming one. A no-op when `target` is already current, matching
    /// the idempotence property in §8.
    pub fn change_desktop(&mut self, monitor_idx: usize, target: usize) {
        if target >= config::DESKTOPS {
            return; // out-of-range desktop index: silent no-op per §7
        }
        let monitor = &mut self.monitors[monitor_idx];
        if !monitor.select_desktop(target) {
            return;
        }

        let outgoing = monitor.prev_desktop;
        for c in monitor.desktops[outgoing].clients.iter() {
            unsafe { XUnmapWindow(self.display, c.window) };
        }
        for c in monitor.desktops[target].clients.iter() {
            unsafe { XMapWindow(self.display, c.window) };
        }

        self.retile(monitor_idx);
    }

    /// Moves the current client of the current monitor to `target` desktop on the same
    /// monitor. A no-op if `target` is the client's current desktop (§8 round-trip property).
    pub fn client_to_desktop(&mut self, target: usize) {
        if target >= config::DESKTOPS || target == self.current_monitor().current_desktop {
            return;
        }
        let monitor_idx = self.cur_monitor;
        let source = self.monitors[monitor_idx].current_desktop;
        let index = match self.monitors[monitor_idx].desktops[source].current {
            Some(i) => i,
            None => return,
        };

        let client = self.monitors[monitor_idx].desktops[source].remove_at(index);
        unsafe { XUnmapWindow(self.display, client.window) };
        self.locations.remove(&client.window);

        self.monitors[monitor_idx].desktops[target].clients.push(client);
        let new_index = self.monitors[monitor_idx].desktops[target].clients.len() - 1;
        self.monitors[monitor_idx].desktops[target].current = Some(new_index);
        self.reindex(monitor_idx, source);
        self.reindex(monitor_idx, target);

        if config::FOLLOW_WINDOW {
            self.change_desktop(monitor_idx, target);
        } else {
            self.retile(monitor_idx);
        }
    }

    /// Moves the current client of the current monitor to `target_monitor`, preserving its
    /// floating/fullscreen/transient flags (§4.7).
    pub fn client_to_monitor(&mut self, target_monitor: usize) {
        if target_monitor >= self.monitors.len() || target_monitor == self.cur_monitor {
            return;
        }
        let src_monitor = self.cur_monitor;
        let src_desktop = self.monitors[src_monitor].current_desktop;
        let index = match self.monitors[src_monitor].desktops[src_desktop].current {
            Some(i) => i,
            None => return,
        };

        let mut client = self.monitors[src_monitor].desktops[src_desktop].remove_at(index);
        unsafe { XUnmapWindow(self.display, client.window) };
        self.reindex(src_monitor, src_desktop);

        client.monitor = target_monitor;
        let window = client.window;
        let dst_desktop = self.monitors[target_monitor].current_desktop;
        self.monitors[target_monitor].desktops[dst_desktop].clients.push(client);
        let new_index = self.monitors[target_monitor].desktops[dst_desktop].clients.len() - 1;
        self.monitors[target_monitor].desktops[dst_desktop].current = Some(new_index);
        self.reindex(target_monitor, dst_desktop);
        unsafe { XMapWindow(self.display, window) };

        self.retile(src_monitor);
        self.retile(target_monitor);

        if config::FOLLOW_WINDOW {
            self.switch_monitor(target_monitor);
        }
    }

    pub fn switch_monitor(&mut self, target: usize) {
        if target >= self.monitors.len() || target == self.cur_monitor {
            return;
        }
        self.prev_monitor = self.cur_monitor;
        self.cur_monitor = target;
        crate::focus::sync(self);
        crate::status::emit(&self.monitors, self.cur_monitor);
    }

    pub fn move_down(&mut self) {
        self.current_monitor_mut().current_mut().move_down();
        let (m, d) = (self.cur_monitor, self.current_monitor().current_desktop);
        self.reindex(m, d);
        self.retile(m);
    }

    pub fn move_up(&mut self) {
        self.current_monitor_mut().current_mut().move_up();
        let (m, d) = (self.cur_monitor, self.current_monitor().current_desktop);
        self.reindex(m, d);
        self.retile(m);
    }

    pub fn swap_master(&mut self) {
        self.current_monitor_mut().current_mut().swap_master();
        let (m, d) = (self.cur_monitor, self.current_monitor().current_desktop);
        self.reindex(m, d);
        self.retile(m);
    }

    pub fn next_win(&mut self) {
        self.current_monitor_mut().current_mut().next_win();
        self.retile(self.cur_monitor);
    }

    pub fn prev_win(&mut self) {
        self.current_monitor_mut().current_mut().prev_win();
        self.retile(self.cur_monitor);
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        self.current_monitor_mut().current_mut().mode = mode;
        self.retile(self.cur_monitor);
    }

    /// Clamps `master_size + delta` strictly between `MINWSZ` and `axis - MINWSZ`, where
    /// `axis` is the monitor's width (TILE/GRID) or height (BSTACK).
    pub fn resize_master(&mut self, delta: i32) {
        let monitor_idx = self.cur_monitor;
        let axis = match self.monitors[monitor_idx].current().mode {
            Mode::Bstack => self.monitors[monitor_idx].rect.h,
            _ => self.monitors[monitor_idx].rect.w,
        };
        let desktop = self.monitors[monitor_idx].current_mut();
        let next = desktop.master_size + delta;
        desktop.master_size = next.clamp(config::MINWSZ + 1, axis - config::MINWSZ - 1);
        self.retile(monitor_idx);
    }

    /// Toggles/sets/clears fullscreen for the window named in a `_NET_WM_STATE` client
    /// message. `action`: 0 clear, 1 set, 2 toggle (EWMH `_NET_WM_STATE_*` convention).
    pub fn set_fullscreen(&mut self, window: XWindow, action: i64) {
        let loc = match self.locate(window) {
            Some(l) => l,
            None => return,
        };
        let client = &mut self.monitors[loc.monitor].desktops[loc.desktop].clients[loc.index];
        let want = match action {
            0 => false,
            1 => true,
            2 => !client.fullscreen,
            _ => return,
        };
        if want {
            client.enter_fullscreen();
        } else {
            client.exit_fullscreen();
        }
        self.retile(loc.monitor);
    }

    /// Scans every monitor and desktop for the first urgent client and focuses it,
    /// switching monitor/desktop as needed. No save/select bookkeeping is required: this is
    /// a plain read/write pass since there is no working-set cache to disturb.
    pub fn focus_urgent(&mut self) {
        for m_idx in 0..self.monitors.len() {
            for d_idx in 0..self.monitors[m_idx].desktops.len() {
                if let Some(c_idx) = self.monitors[m_idx].desktops[d_idx].clients.iter().position(|c| c.urgent) {
                    if m_idx != self.cur_monitor {
                        self.switch_monitor(m_idx);
                    }
                    self.change_desktop(m_idx, d_idx);
                    self.monitors[m_idx].desktops[d_idx].current = Some(c_idx);
                    self.retile(m_idx);
                    return;
                }
            }
        }
    }

    /// Gives input focus to `window` wherever it lives, switching monitor and/or desktop
    /// first if needed. A no-op if `window` is unmanaged.
    pub fn focus_window(&mut self, window: XWindow) {
        let loc = match self.locate(window) {
            Some(l) => l,
            None => return,
        };
        if loc.monitor != self.cur_monitor {
            self.switch_monitor(loc.monitor);
        }
        if loc.desktop != self.monitors[loc.monitor].current_desktop {
            self.change_desktop(loc.monitor, loc.desktop);
        }
        let desktop = self.monitors[loc.monitor].current_mut();
        if desktop.current != Some(loc.index) {
            desktop.prevfocus = desktop.current;
            desktop.current = Some(loc.index);
        }
        self.retile(loc.monitor);
    }

    // -- Window property queries -------------------------------------------------------
    // Every reply here is "protocol transient" per §7: a missing or malformed reply is
    // treated as "no information" and the caller proceeds with a sensible default, never
    // as a fatal condition.

    /// Safe provided `window` is a valid id; a destroyed window simply yields `None`.
    pub unsafe fn window_attributes(&self, window: XWindow) -> Option<XWindowAttributes> {
        let mut attrs: XWindowAttributes = std::mem::zeroed();
        if XGetWindowAttributes(self.display, window, &mut attrs) != 0 {
            Some(attrs)
        } else {
            None
        }
    }

    /// `WM_CLASS`: (instance, class), the order ICCCM specifies for `XGetClassHint`.
    pub unsafe fn class_hint(&self, window: XWindow) -> Option<(String, String)> {
        let mut hint: XClassHint = std::mem::zeroed();
        if XGetClassHint(self.display, window, &mut hint) == 0 {
            return None;
        }
        let instance = cstr_to_string(hint.res_name);
        let class = cstr_to_string(hint.res_class);
        if !hint.res_name.is_null() {
            XFree(hint.res_name as *mut _);
        }
        if !hint.res_class.is_null() {
            XFree(hint.res_class as *mut _);
        }
        Some((instance, class))
    }

    pub unsafe fn is_transient(&self, window: XWindow) -> bool {
        let mut owner: XWindow = 0;
        XGetTransientForHint(self.display, window, &mut owner) != 0
    }

    /// `WM_HINTS` urgency bit (ICCCM `XUrgencyHint`).
    pub unsafe fn is_urgent_hint(&self, window: XWindow) -> bool {
        let hints = XGetWMHints(self.display, window);
        if hints.is_null() {
            return false;
        }
        let urgent = (*hints).flags & XUrgencyHint != 0;
        XFree(hints as *mut _);
        urgent
    }

    /// Whether `_NET_WM_STATE` currently lists `atom` among `window`'s properties.
    pub unsafe fn net_wm_state_has(&self, window: XWindow, atom: Atom) -> bool {
        let mut actual_type: Atom = 0;
        let mut actual_format: c_int = 0;
        let mut nitems: libc::c_ulong = 0;
        let mut bytes_after: libc::c_ulong = 0;
        let mut prop: *mut u8 = std::ptr::null_mut();
        let status = XGetWindowProperty(
            self.display,
            window,
            self.atoms.net_wm_state,
            0,
            1024,
            False,
            XA_ATOM,
            &mut actual_type,
            &mut actual_format,
            &mut nitems,
            &mut bytes_after,
            &mut prop,
        );
        if status != Success as c_int || prop.is_null() {
            return false;
        }
        let atoms = std::slice::from_raw_parts(prop as *const Atom, nitems as usize);
        let found = atoms.iter().any(|&a| a == atom);
        XFree(prop as *mut _);
        found
    }

    pub fn toggle_floating(&mut self) {
        let monitor_idx = self.cur_monitor;
        let window = self.current_monitor().current().current_client().map(|c| c.window);
        if let Some(window) = window {
            let attrs = unsafe { self.window_attributes(window) };
            if let Some(c) = self.current_monitor_mut().current_mut().current_client_mut() {
                c.toggle_floating();
                if c.floating {
                    if let Some(a) = attrs {
                        c.floating_geom = Rect::new(a.x, a.y, a.width, a.height);
                    }
                }
            }
        }
        self.retile(monitor_idx);
    }

    pub fn kill_client(&mut self, window: XWindow) {
        let supports_delete = unsafe { self.supports_wm_delete(window) };
        if supports_delete {
            unsafe { self.send_delete(window) };
        } else {
            unsafe { XKillClient(self.display, window) };
        }
    }

    unsafe fn supports_wm_delete(&self, window: XWindow) -> bool {
        let mut protocols: *mut Atom = std::ptr::null_mut();
        let mut count: c_int = 0;
        if XGetWMProtocols(self.display, window, &mut protocols, &mut count) == 0 {
            return false;
        }
        let slice = std::slice::from_raw_parts(protocols, count as usize);
        let supports = slice.iter().any(|a| *a == self.atoms.wm_delete_window);
        XFree(protocols as *mut _);
        supports
    }

    unsafe fn send_delete(&self, window: XWindow) {
        let mut event: XClientMessageEvent = std::mem::zeroed();
        event.type_ = ClientMessage;
        event.window = window;
        event.message_type = self.atoms.wm_protocols;
        event.format = 32;
        event.data.set_long(0, self.atoms.wm_delete_window as i64);
        event.data.set_long(1, CurrentTime as i64);
        let mut xevent = XEvent { client_message: event };
        XSendEvent(self.display, window, False, NoEventMask, &mut xevent);
    }

    /// Forks and execs `argv`, detaching the child into its own session so it inherits
    /// nothing the manager needs (§5). The parent never waits on it; SIGCHLD reaping is
    /// installed once at startup.
    pub fn spawn(argv: &'static [&'static str]) {
        if argv.is_empty() {
            return;
        }
        unsafe {
            let pid = libc::fork();
            if pid < 0 {
                error!("fork failed while spawning {:?}", argv);
                return;
            }
            if pid != 0 {
                return; // parent: SIGCHLD handler reaps it
            }
            libc::setsid();
            let cstrs: Vec<CString> = argv.iter().map(|a| CString::new(*a).unwrap()).collect();
            let mut ptrs: Vec<*const libc::c_char> = cstrs.iter().map(|c| c.as_ptr()).collect();
            ptrs.push(std::ptr::null());
            libc::execvp(ptrs[0], ptrs.as_ptr());
            libc::_exit(1); // execvp only returns on failure
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Connection-loss check run once per main-loop iteration after the post-handler
    /// flush, per §5's ordering guarantee.
    pub fn connection_ok(&self) -> bool {
        unsafe { XConnectionNumber(self.display) >= 0 }
    }

    /// Ungrabs all keys, requests `WM_DELETE_WINDOW` on every managed window, and closes
    /// the display. Called once the event loop exits.
    pub fn shutdown(&mut self) {
        info!("shutting down");
        let windows: Vec<XWindow> = self
            .monitors
            .iter()
            .flat_map(|m| m.desktops.iter())
            .flat_map(|d| d.clients.iter())
            .map(|c| c.window)
            .collect();
        for w in windows {
            self.kill_client(w);
        }
        unsafe {
            XUngrabKey(self.display, AnyKey, AnyModifier, self.root);
            XSync(self.display, False);
        }
    }
}

impl Drop for Wm {
    fn drop(&mut self) {
        unsafe {
            /* Safe: this process owns the only connection to this display (§5). */
            XCloseDisplay(self.display);
        }
        info!("closed display");
    }
}

/// Installed only during the startup probe; `BadAccess` here means another client already
/// holds substructure redirection on the root window.
unsafe extern "C" fn on_wm_detected(_display: *mut Display, event: *mut XErrorEvent) -> c_int {
    if i32::from((*event).error_code) == BadAccess {
        *WM_DETECTED.lock().unwrap() = true;
    }
    0
}

/// Converts a possibly-null, possibly-non-UTF8 C string from an Xlib reply into an owned
/// `String`, losslessly enough for exact app-rule matching; a null pointer yields "".
unsafe fn cstr_to_string(ptr: *mut libc::c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Numlock's modifier mask varies by keyboard; discovered once so bindings can be grabbed
/// with and without it (§4.5's "masking out numlock and caps-lock").
unsafe fn discover_numlock_mask(display: *mut Display) -> u32 {
    let modmap = XGetModifierMapping(display);
    if modmap.is_null() {
        return 0;
    }
    let numlock_keycode = XKeysymToKeycode(display, x11::keysym::XK_Num_Lock as u64);
    let mut mask = 0u32;
    let per_mod = (*modmap).max_keypermod;
    for i in 0..8i32 {
        for j in 0..per_mod {
            let code = *(*modmap).modifiermap.offset((i * per_mod + j) as isize);
            if code == numlock_keycode {
                mask = 1u32 << (i as u32);
            }
        }
    }
    XFreeModifiermap(modmap);
    mask
}

/// The four masking combinations a binding must be grabbed under so it still fires
/// regardless of the live Num Lock / Caps Lock state (Caps Lock is always `LockMask`).
fn ignored_modifier_combinations(numlock_mask: u32) -> [u32; 4] {
    [0, LockMask, numlock_mask, numlock_mask | LockMask]
}

/// Builds one `Monitor` per Xinerama screen, or a single synthetic monitor from the root
/// screen's pixel dimensions when Xinerama is unavailable (§4.7).
unsafe fn discover_monitors(display: *mut Display) -> Vec<Monitor> {
    if x11::xinerama::XineramaIsActive(display) != 0 {
        let mut count: c_int = 0;
        let infos = x11::xinerama::XineramaQueryScreens(display, &mut count);
        if !infos.is_null() && count > 0 {
            let slice = std::slice::from_raw_parts(infos, count as usize);
            let screens: Vec<ScreenInfo> = slice
                .iter()
                .map(|s| ScreenInfo { x: s.x_org as i32, y: s.y_org as i32, w: s.width as i32, h: s.height as i32 })
                .collect();
            XFree(infos as *mut _);
            return monitor::from_screens(
                &screens,
                config::DESKTOPS,
                config::DEFAULT_DESKTOP,
                config::DEFAULT_MODE,
                config::MASTER_SIZE,
                config::PANEL_HEIGHT,
                config::TOP_PANEL,
                config::SHOW_PANEL,
            );
        }
    }

    let screen = XDefaultScreen(display);
    let width = XDisplayWidth(display, screen);
    let height = XDisplayHeight(display, screen);
    vec![monitor::from_root_screen(
        width,
        height,
        config::DESKTOPS,
        config::DEFAULT_DESKTOP,
        config::DEFAULT_MODE,
        config::MASTER_SIZE,
        config::PANEL_HEIGHT,
        config::TOP_PANEL,
        config::SHOW_PANEL,
    )]
}
