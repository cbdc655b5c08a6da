use crate::{traits::PointSequencer, types::XyPoint};

/// Greedy nearest-neighbour path through a frame's points, culled to every
/// `cull_modulus`-th visited point.
///
/// The walk starts at the first point. A point is kept when the running count
/// of visited points is a multiple of the modulus, so `n` points always yield
/// `n / cull_modulus` path points.
#[derive(Debug, Clone)]
pub struct NearestNeighborSequencer {
    pub cull_modulus: usize,
}

impl Default for NearestNeighborSequencer {
    fn default() -> Self {
        Self { cull_modulus: 12 }
    }
}

impl NearestNeighborSequencer {
    pub fn new(cull_modulus: usize) -> Self {
        Self { cull_modulus }
    }
}

/// Closest unvisited point to `points[from]`, lowest index on ties
fn nearest_unvisited(points: &[XyPoint], from: usize, visited: &[bool]) -> Option<usize> {
    let origin = points[from];
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| !visited[*i])
        .min_by_key(|(_, p)| origin.distance_squared(p))
        .map(|(i, _)| i)
}

impl PointSequencer for NearestNeighborSequencer {
    fn sequence(&self, points: &[XyPoint]) -> Vec<XyPoint> {
        if points.is_empty() {
            return Vec::new();
        }

        let modulus = self.cull_modulus.max(1);
        let mut visited = vec![false; points.len()];
        let mut path = Vec::with_capacity(points.len() / modulus);

        visited[0] = true;
        let mut visited_count = 1;
        let mut current = 0;
        if modulus == 1 {
            path.push(points[0]);
        }

        while visited_count < points.len() {
            let Some(next) = nearest_unvisited(points, current, &visited) else {
                break;
            };
            visited[next] = true;
            visited_count += 1;
            current = next;

            if visited_count % modulus == 0 {
                path.push(points[next]);
            }
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<XyPoint> {
        coords.iter().map(|&(x, y)| XyPoint::new(x, y)).collect()
    }

    #[test]
    fn test_empty_frame() {
        let sequencer = NearestNeighborSequencer::default();
        assert!(sequencer.sequence(&[]).is_empty());
    }

    #[test]
    fn test_walks_nearest_first() {
        let sequencer = NearestNeighborSequencer::new(1);
        let path = sequencer.sequence(&pts(&[(0, 0), (10, 0), (1, 0), (5, 0)]));
        assert_eq!(path, pts(&[(0, 0), (1, 0), (5, 0), (10, 0)]));
    }

    #[test]
    fn test_ties_prefer_lowest_index() {
        let sequencer = NearestNeighborSequencer::new(1);
        let path = sequencer.sequence(&pts(&[(0, 0), (0, 3), (3, 0)]));
        assert_eq!(path, pts(&[(0, 0), (0, 3), (3, 0)]));
    }

    #[test]
    fn test_culling_keeps_every_nth_visit() {
        let sequencer = NearestNeighborSequencer::new(2);
        let path = sequencer.sequence(&pts(&[(0, 0), (10, 0), (1, 0), (5, 0)]));
        // visits: (0,0)=1 (1,0)=2 (5,0)=3 (10,0)=4
        assert_eq!(path, pts(&[(1, 0), (10, 0)]));
    }

    #[test]
    fn test_culled_length() {
        let sequencer = NearestNeighborSequencer::default();
        for n in 0..40 {
            let points: Vec<XyPoint> = (0..n).map(|i| XyPoint::new(i * 3 % 17, i)).collect();
            assert_eq!(sequencer.sequence(&points).len(), n as usize / 12);
        }
    }
}
