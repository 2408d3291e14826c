//! Pure geometry computation. Nothing in this module touches the X connection: it takes a
//! slice of `Client`s and hands back the rectangles the caller should apply with
//! `XMoveResizeWindow`. Kept pure so the tiling arithmetic can be exercised without a display.

use crate::client::{Client, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tile,
    Monocle,
    Bstack,
    Grid,
}

/// One tileable client's resolved placement, keyed by its index in the slice passed to
/// [`compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub geom: Rect,
    pub border: i32,
}

/// Computes placements for every tileable client in `clients`, in list order. Floating,
/// transient and fullscreen clients are skipped entirely — the caller is responsible for
/// leaving their geometry untouched.
pub fn compute(
    mode: Mode,
    work_area: Rect,
    clients: &[Client],
    master_size: i32,
    growth: i32,
    border_width: i32,
) -> Vec<Placement> {
    let tileable: Vec<usize> = clients
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_tileable())
        .map(|(i, _)| i)
        .collect();

    if tileable.is_empty() {
        return Vec::new();
    }

    if tileable.len() == 1 {
        return vec![Placement {
            index: tileable[0],
            geom: work_area,
            border: 0,
        }];
    }

    match mode {
        Mode::Monocle => monocle(work_area, &tileable),
        Mode::Tile => master_stack(work_area, &tileable, master_size, growth, border_width, Axis::Vertical),
        Mode::Bstack => master_stack(work_area, &tileable, master_size, growth, border_width, Axis::Horizontal),
        Mode::Grid => grid(work_area, &tileable, border_width),
    }
}

/// Geometry a fullscreen client is forced into: the full monitor rectangle, panel area
/// included, with no border.
pub fn fullscreen_geom(monitor: Rect, panel_reserve: i32, top_panel: bool) -> Rect {
    if top_panel {
        Rect::new(monitor.x, monitor.y - panel_reserve, monitor.w, monitor.h + panel_reserve)
    } else {
        Rect::new(monitor.x, monitor.y, monitor.w, monitor.h + panel_reserve)
    }
}

fn monocle(work_area: Rect, tileable: &[usize]) -> Vec<Placement> {
    tileable
        .iter()
        .map(|&index| Placement {
            index,
            geom: work_area,
            border: 0,
        })
        .collect()
}

#[derive(Clone, Copy)]
enum Axis {
    Vertical,   // TILE: master left column, stack arranged top-to-bottom on the right
    Horizontal, // BSTACK: master top band, stack arranged left-to-right below
}

fn master_stack(
    work_area: Rect,
    tileable: &[usize],
    master_size: i32,
    growth: i32,
    bw: i32,
    axis: Axis,
) -> Vec<Placement> {
    let n_stack = tileable.len() - 1;
    let mut placements = Vec::with_capacity(tileable.len());

    let master_geom = match axis {
        Axis::Vertical => Rect::new(
            work_area.x,
            work_area.y,
            master_size - bw,
            work_area.h - 2 * bw,
        ),
        Axis::Horizontal => Rect::new(
            work_area.x,
            work_area.y,
            work_area.w - 2 * bw,
            master_size - bw,
        ),
    };
    placements.push(Placement {
        index: tileable[0],
        geom: master_geom,
        border: bw,
    });

    let (stack_total, stack_origin, cross_size) = match axis {
        Axis::Vertical => (work_area.h, (work_area.x + master_size, work_area.y), work_area.w - master_size),
        Axis::Horizontal => (work_area.w, (work_area.x, work_area.y + master_size), work_area.h - master_size),
    };

    let slots = stack_slots(n_stack as i32, stack_total, growth);
    let mut pos = match axis {
        Axis::Vertical => stack_origin.1,
        Axis::Horizontal => stack_origin.0,
    };

    for (i, &slot) in slots.iter().enumerate() {
        let assigned = slot - 2 * bw;
        let geom = match axis {
            Axis::Vertical => Rect::new(stack_origin.0, pos, cross_size - 2 * bw, assigned),
            Axis::Horizontal => Rect::new(pos, stack_origin.1, assigned, cross_size - 2 * bw),
        };
        placements.push(Placement {
            index: tileable[i + 1],
            geom,
            border: bw,
        });
        pos += assigned + bw;
    }

    placements
}

/// Raw (pre-border) slot sizes for `n` stack windows sharing `total` pixels. The first slot
/// absorbs `growth` plus the integer-division remainder, matching the reference tiler's
/// stack-sizing rule.
fn stack_slots(n: i32, total: i32, growth: i32) -> Vec<i32> {
    if n <= 0 {
        return Vec::new();
    }
    let base = total / n;
    let rem = total % n;
    let mut slots = vec![base; n as usize];
    slots[0] += growth + rem;
    slots
}

/// The "fill shorter columns first" grid: smallest `cols` with `cols*cols >= n` (n=5 pinned
/// to 2 columns), remaining rows grown by one once the first `cols - n % cols` columns are
/// exhausted.
fn grid(work_area: Rect, tileable: &[usize], bw: i32) -> Vec<Placement> {
    let n = tileable.len() as i32;
    let mut cols = 0;
    while cols <= n / 2 {
        if cols * cols >= n {
            break;
        }
        cols += 1;
    }
    if n == 5 {
        cols = 2;
    }
    let cols = cols.max(1);
    let mut rows = n / cols;

    let mut placements = Vec::with_capacity(tileable.len());
    let mut ch = work_area.h / rows.max(1);
    let cw = work_area.w / cols;

    for (i, &index) in tileable.iter().enumerate() {
        let i = i as i32;
        if i / rows + 1 > cols - n % cols {
            rows = n / cols + 1;
            ch = work_area.h / rows.max(1);
        }
        let cx = work_area.x + (i / rows) * cw;
        let cy = work_area.y + (i % rows) * ch;
        placements.push(Placement {
            index,
            geom: Rect::new(cx, cy, cw - 2 * bw, ch - 2 * bw),
            border: bw,
        });
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(1, 0, Rect::default())
    }

    #[test]
    fn scenario_1_tile_master_and_two_stack() {
        let work_area = Rect::new(0, 0, 1280, 800);
        let clients = vec![client(), client(), client()];
        let master_px = (1280f64 * 0.52).round() as i32; // 666
        let placements = compute(Mode::Tile, work_area, &clients, master_px, 0, 2);

        assert_eq!(placements.len(), 3);
        assert_eq!(placements[0].geom, Rect::new(0, 0, 664, 796));
        assert_eq!(placements[1].geom, Rect::new(666, 0, 610, 396));
        assert_eq!(placements[2].geom, Rect::new(666, 398, 610, 396));
    }

    #[test]
    fn scenario_2_resize_master_grows_master_shrinks_stack() {
        let work_area = Rect::new(0, 0, 1280, 800);
        let clients = vec![client(), client(), client()];
        let master_px = (1280f64 * 0.52).round() as i32 + 20; // 686
        let placements = compute(Mode::Tile, work_area, &clients, master_px, 0, 2);

        assert_eq!(placements[0].geom.w, 684);
        assert_eq!(placements[1].geom.w, 590);
        assert_eq!(placements[2].geom.w, 590);
    }

    #[test]
    fn scenario_3_grid_four_clients_is_2x2() {
        let work_area = Rect::new(0, 0, 1280, 800);
        let clients = vec![client(), client(), client(), client()];
        let placements = compute(Mode::Grid, work_area, &clients, 0, 0, 1);

        let xs: std::collections::HashSet<i32> = placements.iter().map(|p| p.geom.x).collect();
        let ys: std::collections::HashSet<i32> = placements.iter().map(|p| p.geom.y).collect();
        assert_eq!(xs.len(), 2);
        assert_eq!(ys.len(), 2);
        for p in &placements {
            assert_eq!(p.geom.w, 640 - 2);
            assert_eq!(p.geom.h, 400 - 2);
        }
    }

    #[test]
    fn scenario_3_grid_five_clients_splits_3_and_2() {
        let work_area = Rect::new(0, 0, 1280, 800);
        let clients: Vec<Client> = (0..5).map(|_| client()).collect();
        let placements = compute(Mode::Grid, work_area, &clients, 0, 0, 0);

        let col0: Vec<_> = placements.iter().filter(|p| p.geom.x == 0).collect();
        let col1: Vec<_> = placements.iter().filter(|p| p.geom.x != 0).collect();
        assert_eq!(col0.len(), 3);
        assert_eq!(col1.len(), 2);
    }

    #[test]
    fn single_tileable_fills_work_area_with_zero_border() {
        let work_area = Rect::new(0, 0, 1280, 800);
        let clients = vec![client()];
        let placements = compute(Mode::Tile, work_area, &clients, 600, 0, 2);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].geom, work_area);
        assert_eq!(placements[0].border, 0);
    }

    #[test]
    fn monocle_stacks_everyone_at_origin_zero_border() {
        let work_area = Rect::new(0, 0, 1280, 800);
        let clients = vec![client(), client(), client()];
        let placements = compute(Mode::Monocle, work_area, &clients, 0, 0, 2);
        assert_eq!(placements.len(), 3);
        for p in placements {
            assert_eq!(p.geom, work_area);
            assert_eq!(p.border, 0);
        }
    }

    #[test]
    fn floating_and_fullscreen_clients_are_skipped() {
        let work_area = Rect::new(0, 0, 1280, 800);
        let mut floating = client();
        floating.floating = true;
        let mut fullscreen = client();
        fullscreen.fullscreen = true;
        let clients = vec![client(), floating, fullscreen, client()];
        let placements = compute(Mode::Tile, work_area, &clients, 600, 0, 2);
        let indices: Vec<usize> = placements.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn no_tileable_clients_yields_no_placements() {
        let work_area = Rect::new(0, 0, 1280, 800);
        let mut floating = client();
        floating.floating = true;
        let placements = compute(Mode::Tile, work_area, &[floating], 600, 0, 2);
        assert!(placements.is_empty());
    }
}
