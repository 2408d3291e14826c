//! A per-monitor virtual workspace and the pure client-list surgery (`add`, `remove`,
//! `move_up`/`move_down`, `swap_master`, focus rotation) that the reference implementation
//! performs on a singly-linked list. Here the list is a plain `Vec<Client>` in tiling order;
//! `current`/`prevfocus` are indices into it rather than weak pointers, per the indexed-
//! container recommendation.

use crate::client::Client;
use crate::layout::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    Head,
    Tail,
}

#[derive(Debug, Clone)]
pub struct Desktop {
    pub master_size: i32,
    pub mode: Mode,
    pub growth: i32,
    pub clients: Vec<Client>,
    pub current: Option<usize>,
    pub prevfocus: Option<usize>,
    pub show_panel: bool,
}

impl Desktop {
    pub fn new(master_size: i32, mode: Mode, show_panel: bool) -> Self {
        Desktop {
            master_size,
            mode,
            growth: 0,
            clients: Vec::new(),
            current: None,
            prevfocus: None,
            show_panel,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn current_client(&self) -> Option<&Client> {
        self.current.and_then(|i| self.clients.get(i))
    }

    pub fn current_client_mut(&mut self) -> Option<&mut Client> {
        if let Some(i) = self.current {
            self.clients.get_mut(i)
        } else {
            None
        }
    }

    /// Inserts `client` at head (default) or tail and makes it the focus candidate.
    /// Returns the index it landed at.
    pub fn add(&mut self, client: Client, attach: Attach) -> usize {
        let index = match attach {
            Attach::Head => {
                self.clients.insert(0, client);
                self.shift_pointers_after_insert(0);
                0
            }
            Attach::Tail => {
                self.clients.push(client);
                self.clients.len() - 1
            }
        };
        self.current = Some(index);
        index
    }

    fn shift_pointers_after_insert(&mut self, at: usize) {
        if let Some(c) = self.current.as_mut() {
            if *c >= at {
                *c += 1;
            }
        }
        if let Some(p) = self.prevfocus.as_mut() {
            if *p >= at {
                *p += 1;
            }
        }
    }

    /// Removes the client at `index`, restoring focus to the previous one. Returns the
    /// removed client.
    pub fn remove_at(&mut self, index: usize) -> Client {
        let removed = self.clients.remove(index);

        let fix = |p: &mut Option<usize>| {
            if let Some(v) = *p {
                if v == index {
                    *p = None;
                } else if v > index {
                    *p = Some(v - 1);
                }
            }
        };
        fix(&mut self.current);
        fix(&mut self.prevfocus);

        if self.current.is_none() {
            self.current = self.prevfocus.take().or_else(|| {
                if self.clients.is_empty() {
                    None
                } else {
                    Some(index.min(self.clients.len() - 1))
                }
            });
        }
        removed
    }

    pub fn index_of(&self, window: x11::xlib::Window) -> Option<usize> {
        self.clients.iter().position(|c| c.window == window)
    }

    /// Swaps current with its successor, wrapping tail-to-head.
    pub fn move_down(&mut self) {
        let n = self.clients.len();
        if n < 2 {
            return;
        }
        if let Some(cur) = self.current {
            let next = if cur + 1 == n { 0 } else { cur + 1 };
            self.clients.swap(cur, next);
            self.current = Some(next);
        }
    }

    /// Swaps current with its predecessor, wrapping head-to-tail. Exact inverse of
    /// `move_down`.
    pub fn move_up(&mut self) {
        let n = self.clients.len();
        if n < 2 {
            return;
        }
        if let Some(cur) = self.current {
            let prev = if cur == 0 { n - 1 } else { cur - 1 };
            self.clients.swap(cur, prev);
            self.current = Some(prev);
        }
    }

    /// Makes current the head; if current is already head, swaps it with the next client.
    pub fn swap_master(&mut self) {
        let n = self.clients.len();
        if n < 2 {
            return;
        }
        let cur = match self.current {
            Some(c) => c,
            None => return,
        };
        if cur == 0 {
            self.clients.swap(0, 1);
            self.current = Some(1);
        } else {
            self.clients.swap(0, cur);
            self.current = Some(0);
        }
    }

    /// Rotates focus forward, wrapping tail-to-head.
    pub fn next_win(&mut self) {
        let n = self.clients.len();
        if n < 2 {
            return;
        }
        if let Some(cur) = self.current {
            self.prevfocus = Some(cur);
            self.current = Some(if cur + 1 == n { 0 } else { cur + 1 });
        }
    }

    /// Rotates focus backward, wrapping head-to-tail.
    pub fn prev_win(&mut self) {
        let n = self.clients.len();
        if n < 2 {
            return;
        }
        if let Some(cur) = self.current {
            self.prevfocus = Some(cur);
            self.current = Some(if cur == 0 { n - 1 } else { cur - 1 });
        }
    }

    pub fn has_urgent(&self) -> bool {
        self.clients.iter().any(|c| c.urgent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Rect;

    fn mk(window: x11::xlib::Window) -> Client {
        Client::new(window, 0, Rect::default())
    }

    #[test]
    fn add_at_head_becomes_current() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Head);
        d.add(mk(2), Attach::Head);
        assert_eq!(d.clients.iter().map(|c| c.window).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(d.current, Some(0));
    }

    #[test]
    fn add_at_tail_preserves_order() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Tail);
        d.add(mk(2), Attach::Tail);
        assert_eq!(d.clients.iter().map(|c| c.window).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn move_down_then_move_up_restores_order() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(3), Attach::Tail);
        d.add(mk(2), Attach::Tail);
        d.add(mk(1), Attach::Tail);
        let before: Vec<_> = d.clients.iter().map(|c| c.window).collect();
        d.current = Some(0);
        d.move_down();
        d.move_up();
        let after: Vec<_> = d.clients.iter().map(|c| c.window).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn move_down_wraps_tail_to_head() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Tail);
        d.add(mk(2), Attach::Tail);
        d.current = Some(1); // window 2, the tail
        d.move_down();
        assert_eq!(d.clients.iter().map(|c| c.window).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(d.current, Some(0));
    }

    #[test]
    fn swap_master_promotes_current() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Tail);
        d.add(mk(2), Attach::Tail);
        d.add(mk(3), Attach::Tail);
        d.current = Some(2);
        d.swap_master();
        assert_eq!(d.clients[0].window, 3);
        assert_eq!(d.current, Some(0));
    }

    #[test]
    fn swap_master_on_master_swaps_with_next() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Tail);
        d.add(mk(2), Attach::Tail);
        d.current = Some(0);
        d.swap_master();
        assert_eq!(d.clients[0].window, 2);
        assert_eq!(d.current, Some(1));
    }

    #[test]
    fn remove_sets_current_to_previous_focus() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Tail);
        d.add(mk(2), Attach::Tail);
        d.current = Some(1);
        d.prevfocus = Some(0);
        d.remove_at(1);
        assert_eq!(d.current, Some(0));
    }

    #[test]
    fn remove_shifts_indices_after_removed_slot() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Tail);
        d.add(mk(2), Attach::Tail);
        d.add(mk(3), Attach::Tail);
        d.current = Some(2);
        d.remove_at(0);
        assert_eq!(d.clients.iter().map(|c| c.window).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(d.current, Some(1));
    }

    #[test]
    fn next_and_prev_win_are_cyclic() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Tail);
        d.add(mk(2), Attach::Tail);
        d.add(mk(3), Attach::Tail);
        d.current = Some(2);
        d.next_win();
        assert_eq!(d.current, Some(0));
        d.prev_win();
        assert_eq!(d.current, Some(2));
    }

    #[test]
    fn has_urgent_scans_clients() {
        let mut d = Desktop::new(600, Mode::Tile, true);
        d.add(mk(1), Attach::Tail);
        assert!(!d.has_urgent());
        d.clients[0].urgent = true;
        assert!(d.has_urgent());
    }
}
