//! Interned ICCCM/EWMH atoms, queried once at startup.

use std::ffi::CString;
use x11::xlib::{Atom, Display, False, XInternAtom};

#[derive(Debug)]
pub struct Atoms {
    pub wm_protocols: Atom,
    pub wm_delete_window: Atom,
    pub wm_transient_for: Atom,
    pub wm_class: Atom,
    pub wm_hints: Atom,
    pub wm_state: Atom,
    pub net_supported: Atom,
    pub net_wm_state: Atom,
    pub net_wm_state_fullscreen: Atom,
    pub net_active_window: Atom,
}

impl Atoms {
    /// Safe provided `display` is a live, open connection (checked by the caller before
    /// this runs — every `XInternAtom` call below simply queries or creates an atom and
    /// cannot itself invalidate the connection).
    pub unsafe fn intern(display: *mut Display) -> Self {
        let get = |name: &str| -> Atom {
            let cname = CString::new(name).expect("atom name has no interior NUL");
            XInternAtom(display, cname.as_ptr(), False)
        };

        Atoms {
            wm_protocols: get("WM_PROTOCOLS"),
            wm_delete_window: get("WM_DELETE_WINDOW"),
            wm_transient_for: get("WM_TRANSIENT_FOR"),
            wm_class: get("WM_CLASS"),
            wm_hints: get("WM_HINTS"),
            wm_state: get("WM_STATE"),
            net_supported: get("_NET_SUPPORTED"),
            net_wm_state: get("_NET_WM_STATE"),
            net_wm_state_fullscreen: get("_NET_WM_STATE_FULLSCREEN"),
            net_active_window: get("_NET_ACTIVE_WINDOW"),
        }
    }

    /// The minimal `_NET_SUPPORTED` list this manager actually honours.
    pub fn supported(&self) -> [Atom; 3] {
        [self.net_wm_state, self.net_wm_state_fullscreen, self.net_active_window]
    }
}
