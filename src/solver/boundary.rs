use crate::state::idx;

/// Field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Density, pressure, divergence: mirror the neighbor.
    Scalar,
    /// Horizontal velocity: negated across the left/right walls.
    Vx,
    /// Vertical velocity: negated across the top/bottom walls.
    Vy,
}

/// Closed-box boundary conditions.
///   - top/bottom rows copy row 1 / row N-2, negated for `FieldType::Vy`
///   - left/right columns copy col 1 / col N-2, negated for `FieldType::Vx`
///   - corners average their two adjacent edge cells
pub fn set_bnd(field_type: FieldType, x: &mut [f64], n: usize) {
    let last = n - 1;
    let flip_y = if field_type == FieldType::Vy { -1.0 } else { 1.0 };
    let flip_x = if field_type == FieldType::Vx { -1.0 } else { 1.0 };

    for i in 1..last {
        x[idx(i, 0, n)] = flip_y * x[idx(i, 1, n)];
        x[idx(i, last, n)] = flip_y * x[idx(i, last - 1, n)];
    }
    for j in 1..last {
        x[idx(0, j, n)] = flip_x * x[idx(1, j, n)];
        x[idx(last, j, n)] = flip_x * x[idx(last - 1, j, n)];
    }

    x[idx(0, 0, n)] = 0.5 * (x[idx(1, 0, n)] + x[idx(0, 1, n)]);
    x[idx(0, last, n)] = 0.5 * (x[idx(1, last, n)] + x[idx(0, last - 1, n)]);
    x[idx(last, 0, n)] = 0.5 * (x[idx(last - 1, 0, n)] + x[idx(last, 1, n)]);
    x[idx(last, last, n)] = 0.5 * (x[idx(last - 1, last, n)] + x[idx(last, last - 1, n)]);
}
