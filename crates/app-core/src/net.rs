use crate::transform::ProjectedPoint;

/// Sort the frame's projected points by screen x so neighbor discovery can
/// sweep a bounded window instead of scanning all pairs. Projected positions
/// change every frame, so this runs every frame.
pub fn sort_by_screen_x(points: &mut [ProjectedPoint]) {
    points.sort_unstable_by(|a, b| a.x.total_cmp(&b.x));
}

/// Visit every pair of points within `max_distance` of each other on screen.
/// `points` must already be sorted by x. The forward sweep stops as soon as
/// the x gap alone exceeds the distance, which under the sort invariant
/// yields exactly the brute-force pair set, in near-linear time for roughly
/// uniform fields.
pub fn for_each_connection(
    points: &[ProjectedPoint],
    max_distance: f32,
    mut visit: impl FnMut(usize, usize),
) {
    let max_sq = max_distance * max_distance;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dx = points[j].x - points[i].x;
            if dx > max_distance {
                break;
            }
            let dy = points[j].y - points[i].y;
            if dy.abs() > max_distance {
                continue;
            }
            if dx * dx + dy * dy <= max_sq {
                visit(i, j);
            }
        }
    }
}
