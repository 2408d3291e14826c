//! Line-oriented status emitted to standard output for a cooperating panel process.
//!
//! Because `Monitor`/`Desktop` are the sole source of truth (no inline working-set cache,
//! see DESIGN.md), collecting this snapshot is a read-only scan: there is no save/restore
//! dance to get wrong, and invariant §8.6 ("the emitter leaves current_monitor/current_desktop
//! unchanged") holds by construction.

use std::io::{self, Write};

use crate::layout::Mode;
use crate::monitor::Monitor;

fn mode_code(mode: Mode) -> i32 {
    match mode {
        Mode::Tile => 0,
        Mode::Monocle => 1,
        Mode::Bstack => 2,
        Mode::Grid => 3,
    }
}

/// Builds the space-separated, colon-delimited status line described in §4.8 from a live
/// monitor list. Pure with respect to its inputs — does not touch the X connection.
pub fn format(monitors: &[Monitor], current_monitor: usize) -> String {
    let mut records = Vec::new();
    for (m_idx, monitor) in monitors.iter().enumerate() {
        for (d_idx, desktop) in monitor.desktops.iter().enumerate() {
            records.push(format!(
                "{}:{}:{}:{}:{}:{}:{}",
                m_idx,
                (m_idx == current_monitor) as i32,
                d_idx,
                desktop.clients.len(),
                mode_code(desktop.mode),
                (d_idx == monitor.current_desktop) as i32,
                desktop.has_urgent() as i32,
            ));
        }
    }
    records.join(" ")
}

/// Writes the status line to stdout and flushes immediately, matching the reference
/// manager's "emit after every state change that could affect a panel" rule.
pub fn emit(monitors: &[Monitor], current_monitor: usize) {
    let line = format(monitors, current_monitor);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if writeln!(handle, "{}", line).is_ok() {
        let _ = handle.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Client, Rect};
    use crate::desktop::Attach;
    use crate::monitor::from_root_screen;

    #[test]
    fn formats_one_record_per_monitor_desktop_pair() {
        let mut monitor = from_root_screen(1280, 800, 2, 0, Mode::Tile, 0.5, 0, false, true);
        monitor.current_mut().add(Client::new(1, 0, Rect::default()), Attach::Tail);
        let monitors = vec![monitor];

        let line = format(&monitors, 0);
        let records: Vec<&str> = line.split(' ').collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], "0:1:0:1:0:1:0");
        assert_eq!(records[1], "0:1:1:0:0:0:0");
    }

    #[test]
    fn reports_urgent_flag() {
        let mut monitor = from_root_screen(1280, 800, 1, 0, Mode::Tile, 0.5, 0, false, true);
        monitor.current_mut().add(Client::new(1, 0, Rect::default()), Attach::Tail);
        monitor.current_mut().clients[0].urgent = true;
        let line = format(&[monitor], 0);
        assert_eq!(line, "0:1:0:1:0:1:1");
    }

    #[test]
    fn scenario_6_second_monitor_marked_current() {
        let m0 = from_root_screen(1280, 800, 1, 0, Mode::Tile, 0.5, 0, false, true);
        let m1 = from_root_screen(1280, 800, 1, 0, Mode::Tile, 0.5, 0, false, true);
        let line = format(&[m0, m1], 1);
        let records: Vec<&str> = line.split(' ').collect();
        assert!(records[0].starts_with("0:0:"));
        assert!(records[1].starts_with("1:1:"));
    }
}
