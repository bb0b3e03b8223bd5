//! Shape rasterization for the tile editor
//!
//! Contains point generators for:
//! - Lines (Bresenham's algorithm)
//! - Line clipping (Cohen–Sutherland)
//! - Filled rectangles
//! - Flood fill (4-connected, explicit stack)
//!
//! None of these touch a tile. Commands use them to find the pixels they will change.

use std::collections::HashSet;

// ═══════════════════════════════════════════════════════════════════════════
// Bresenham Line Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Bresenham's line algorithm - returns points along the line
///
/// Walks from (x0, y0) to (x1, y1), both endpoints included, in walk order.
/// The walk visits every point between the endpoints, so callers drawing onto
/// a bounded grid should pass the segment through [`clip_line`] first.
pub fn bresenham_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (i64::from(x1) - i64::from(x0)).abs();
    let dy = (i64::from(y1) - i64::from(y0)).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::new();
    let (mut x, mut y) = (x0, y0);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// Cohen–Sutherland clip of the segment (x0, y0)-(x1, y1) against a `width`×`height` grid
///
/// Returns the part of the segment inside the grid with its endpoints rounded to
/// grid points, or `None` if the segment misses the grid. Endpoints already
/// inside are returned unchanged.
pub fn clip_line(x0: i32, y0: i32, x1: i32, y1: i32, width: i32, height: i32) -> Option<(i32, i32, i32, i32)> {
    if width <= 0 || height <= 0 {
        return None;
    }
    let (max_x, max_y) = (f64::from(width - 1), f64::from(height - 1));
    let outcode = |x: f64, y: f64| {
        let mut code = INSIDE;
        if x < 0.0 {
            code |= LEFT;
        } else if x > max_x {
            code |= RIGHT;
        }
        if y < 0.0 {
            code |= BOTTOM;
        } else if y > max_y {
            code |= TOP;
        }
        code
    };

    let (mut ax, mut ay) = (f64::from(x0), f64::from(y0));
    let (mut bx, mut by) = (f64::from(x1), f64::from(y1));
    let mut code_a = outcode(ax, ay);
    let mut code_b = outcode(bx, by);

    loop {
        if code_a | code_b == INSIDE {
            break;
        }
        if code_a & code_b != INSIDE {
            return None;
        }

        let code = if code_a == INSIDE { code_b } else { code_a };
        // the divisors are non-zero: both endpoints on the same side was rejected above
        let (x, y) = if code & TOP != 0 {
            (ax + (bx - ax) * (max_y - ay) / (by - ay), max_y)
        } else if code & BOTTOM != 0 {
            (ax + (bx - ax) * (0.0 - ay) / (by - ay), 0.0)
        } else if code & RIGHT != 0 {
            (max_x, ay + (by - ay) * (max_x - ax) / (bx - ax))
        } else {
            (0.0, ay + (by - ay) * (0.0 - ax) / (bx - ax))
        };

        if code == code_a {
            (ax, ay) = (x, y);
            code_a = outcode(ax, ay);
        } else {
            (bx, by) = (x, y);
            code_b = outcode(bx, by);
        }
    }

    let snap = |v: f64, max: i32| (v.round() as i32).clamp(0, max);
    Some((snap(ax, width - 1), snap(ay, height - 1), snap(bx, width - 1), snap(by, height - 1)))
}

// ═══════════════════════════════════════════════════════════════════════════
// Rectangle Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Get points for a filled rectangle
///
/// Corner order does not matter. Points are produced row by row.
pub fn rectangle_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let min_x = x0.min(x1);
    let max_x = x0.max(x1);
    let min_y = y0.min(y1);
    let max_y = y0.max(y1);

    let mut points = Vec::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            points.push((x, y));
        }
    }

    points
}

// ═══════════════════════════════════════════════════════════════════════════
// Flood Fill Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Compute flood fill points for the 4-connected region around the start point
///
/// Uses an explicit stack, so the region size never affects call depth.
/// Points are returned in visit order. The region is every pixel reachable
/// through N/E/S/W neighbours that has the same value as the start pixel.
///
/// # Arguments
/// * `start_x`, `start_y` - Seed coordinates
/// * `width`, `height` - Bounds of the pixel grid
/// * `get_pixel` - Reads the current value at (x, y)
pub fn flood_fill_points<F>(start_x: i32, start_y: i32, width: i32, height: i32, get_pixel: F) -> Vec<(i32, i32)>
where
    F: Fn(i32, i32) -> u8,
{
    let in_bounds = |x: i32, y: i32| x >= 0 && x < width && y >= 0 && y < height;
    let mut result = Vec::new();
    if !in_bounds(start_x, start_y) {
        return result;
    }

    let target = get_pixel(start_x, start_y);
    let mut visited = HashSet::new();
    let mut stack = vec![(start_x, start_y)];

    while let Some((x, y)) = stack.pop() {
        if !in_bounds(x, y) || visited.contains(&(x, y)) || get_pixel(x, y) != target {
            continue;
        }
        visited.insert((x, y));
        result.push((x, y));

        stack.push((x, y - 1));
        stack.push((x + 1, y));
        stack.push((x, y + 1));
        stack.push((x - 1, y));
    }

    result
}
