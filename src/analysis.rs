use crate::boundary::{Boundary, Edge, EdgeClearances};
use crate::obstacle::{Obstacle, Scale, ScaledObstacle};
use crate::util::keep_smaller;
use itertools::Itertools;
use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Settings for an [Analyzer].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalyzerConfig {
    /// Converts obstacles to the working plane.
    pub scale: Scale,
    /// The square the obstacles are placed in, in working plane units.
    pub boundary: Boundary,
}

/// The gap between a pair of obstacles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairGap {
    /// Index of the first obstacle.
    pub i: usize,
    /// Index of the second obstacle, always greater than `i`.
    pub j: usize,
    /// The distance between the perimeters; negative if they overlap.
    pub gap: f64,
}

/// The obstacle closest to one edge of the boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeResult {
    pub obstacle_index: usize,
    pub distance: f64,
}

/// The closest obstacle to each edge, if there are any obstacles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeProximity([Option<EdgeResult>; 4]);

/// Measures the distances between a set of obstacles and the boundary they're placed in.
pub struct Analyzer<'a> {
    obstacles: &'a [Obstacle],
    config: AnalyzerConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            scale: Scale::REFERENCE,
            boundary: Boundary::new(1000.0),
        }
    }
}

impl EdgeProximity {
    /// The closest obstacle to the given edge.
    pub fn get(&self, edge: Edge) -> Option<EdgeResult> {
        self.0[edge.index()]
    }

    /// Iterates over the results in [Edge::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, Option<EdgeResult>)> + '_ {
        Edge::ALL.into_iter().map(|edge| (edge, self.get(edge)))
    }

    fn include(self, obstacle_index: usize, clearances: &EdgeClearances) -> Self {
        Self(Edge::ALL.map(|edge| {
            let candidate = EdgeResult {
                obstacle_index,
                distance: clearances.get(edge),
            };
            keep_smaller(self.get(edge), candidate, |r| r.distance)
        }))
    }
}

impl<'a> Analyzer<'a> {
    /// Creates an analyzer over the given obstacles.
    ///
    /// Obstacles are never rejected, but any with a negative radius
    /// or that cross the boundary are reported as warnings.
    pub fn new(obstacles: &'a [Obstacle], config: AnalyzerConfig) -> Self {
        let analyzer = Self { obstacles, config };
        for (idx, scaled) in analyzer.scaled().enumerate() {
            if scaled.radius < 0.0 {
                warn!("Obstacle {} has a negative radius ({})", idx, scaled.radius);
            }
            if !config.boundary.clearances(&scaled).is_inside() {
                warn!("Obstacle {} extends outside the boundary", idx);
            }
        }
        analyzer
    }

    /// The obstacles being analysed.
    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Iterates over the obstacles in working plane coordinates.
    pub fn scaled(&self) -> impl Iterator<Item = ScaledObstacle> + '_ {
        self.obstacles
            .iter()
            .map(move |obstacle| obstacle.scaled(&self.config.scale))
    }

    /// The gap between every unordered pair of obstacles, ordered by `i` then `j`.
    pub fn pair_gaps(&self) -> impl Iterator<Item = PairGap> + '_ {
        let scaled: Vec<_> = self.scaled().collect();
        (0..scaled.len())
            .tuple_combinations::<(usize, usize)>()
            .map(move |(i, j)| PairGap {
                i,
                j,
                gap: scaled[i].gap_to(&scaled[j]),
            })
    }

    /// Finds the pair of obstacles with the smallest gap, passing every pair to `visit` along the way.
    /// If several pairs share the smallest gap, the first one visited is returned.
    ///
    /// # Returns
    /// The closest pair, or `None` if there are fewer than two obstacles.
    /// Any error returned by `visit` stops the scan.
    pub fn scan_pairs<E>(
        &self,
        mut visit: impl FnMut(&PairGap) -> Result<(), E>,
    ) -> Result<Option<PairGap>, E> {
        let closest = self.pair_gaps().try_fold(None, |best, pair| {
            visit(&pair)?;
            Ok::<_, E>(keep_smaller(best, pair, |p| p.gap))
        })?;
        debug!("Closest pair of {} obstacles: {:?}", self.obstacles.len(), closest);
        Ok(closest)
    }

    /// Finds the pair of obstacles with the smallest gap.
    pub fn closest_pair(&self) -> Option<PairGap> {
        self.scan_pairs(|_| Ok::<_, Infallible>(()))
            .unwrap_or_else(|never| match never {})
    }

    /// The clearance from every obstacle to each edge of the boundary.
    pub fn clearances(&self) -> impl Iterator<Item = EdgeClearances> + '_ {
        self.scaled()
            .map(move |scaled| self.config.boundary.clearances(&scaled))
    }

    /// Finds the closest obstacle to each edge, passing every obstacle's
    /// clearances to `visit` along the way.
    /// Each edge is tracked independently and ties go to the lowest index.
    pub fn scan_edges<E>(
        &self,
        mut visit: impl FnMut(usize, &EdgeClearances) -> Result<(), E>,
    ) -> Result<EdgeProximity, E> {
        let proximity = self.clearances().enumerate().try_fold(
            EdgeProximity::default(),
            |proximity, (idx, clearances)| {
                visit(idx, &clearances)?;
                Ok::<_, E>(proximity.include(idx, &clearances))
            },
        )?;
        debug!("Closest to edges: {:?}", proximity);
        Ok(proximity)
    }

    /// Finds the closest obstacle to each edge of the boundary.
    pub fn closest_to_edges(&self) -> EdgeProximity {
        self.scan_edges(|_, _| Ok::<_, Infallible>(()))
            .unwrap_or_else(|never| match never {})
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::obstacle::REFERENCE_OBSTACLES;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn random_obstacles(rng: &mut impl Rng, count: usize) -> Vec<Obstacle> {
        (0..count)
            .map(|_| {
                Obstacle::new(
                    rng.gen_range(0.0..5.0),
                    rng.gen_range(0.0..5.0),
                    rng.gen_range(0.0..40.0),
                )
            })
            .collect()
    }

    #[test]
    fn reference_closest_pair() {
        let analyzer = Analyzer::new(&REFERENCE_OBSTACLES, AnalyzerConfig::default());
        let closest = analyzer.closest_pair().unwrap();
        assert_eq!((closest.i, closest.j), (0, 1));
        assert_approx_eq!(closest.gap, 170.0);
    }

    #[test]
    fn reference_closest_to_edges() {
        let analyzer = Analyzer::new(&REFERENCE_OBSTACLES, AnalyzerConfig::default());
        let proximity = analyzer.closest_to_edges();
        let expected = [
            (Edge::Front, 2, 80.0),
            (Edge::Back, 8, 40.0),
            (Edge::Left, 2, 80.0),
            (Edge::Right, 5, 90.0),
        ];
        for (edge, idx, distance) in expected {
            let result = proximity.get(edge).unwrap();
            assert_eq!(result.obstacle_index, idx, "{:?}", edge);
            assert_approx_eq!(result.distance, distance);
        }
    }

    #[test]
    fn visits_every_pair_in_order() {
        let analyzer = Analyzer::new(&REFERENCE_OBSTACLES, AnalyzerConfig::default());
        let mut visited = vec![];
        analyzer
            .scan_pairs(|pair| {
                visited.push((pair.i, pair.j));
                Ok::<_, Infallible>(())
            })
            .unwrap();
        assert_eq!(visited.len(), 36);
        assert_eq!(visited[0], (0, 1));
        assert_eq!(visited[8], (1, 2));
        assert_eq!(visited[35], (7, 8));
        assert!(visited.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn visitor_error_stops_scan() {
        let analyzer = Analyzer::new(&REFERENCE_OBSTACLES, AnalyzerConfig::default());
        let mut count = 0;
        let result = analyzer.scan_pairs(|_| {
            count += 1;
            if count == 3 {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(count, 3);
    }

    #[test]
    fn empty() {
        let analyzer = Analyzer::new(&[], AnalyzerConfig::default());
        assert_eq!(analyzer.closest_pair(), None);
        assert!(analyzer.closest_to_edges().iter().all(|(_, r)| r.is_none()));
    }

    #[test]
    fn single_obstacle() {
        let obstacles = [Obstacle::new(1.0, 3.0, 5.0)];
        let analyzer = Analyzer::new(&obstacles, AnalyzerConfig::default());
        assert_eq!(analyzer.closest_pair(), None);
        for (_, result) in analyzer.closest_to_edges().iter() {
            assert_eq!(result.unwrap().obstacle_index, 0);
        }
    }

    #[test]
    fn ties_go_to_first() {
        // Three equally spaced obstacles along the horizontal centre line.
        let obstacles = [
            Obstacle::new(1.0, 2.5, 10.0),
            Obstacle::new(2.5, 2.5, 10.0),
            Obstacle::new(4.0, 2.5, 10.0),
        ];
        let analyzer = Analyzer::new(&obstacles, AnalyzerConfig::default());
        let closest = analyzer.closest_pair().unwrap();
        assert_eq!((closest.i, closest.j), (0, 1));

        let proximity = analyzer.closest_to_edges();
        assert_eq!(proximity.get(Edge::Front).unwrap().obstacle_index, 0);
        assert_eq!(proximity.get(Edge::Back).unwrap().obstacle_index, 0);
        assert_eq!(proximity.get(Edge::Left).unwrap().obstacle_index, 0);
        assert_eq!(proximity.get(Edge::Right).unwrap().obstacle_index, 2);
    }

    #[test]
    fn overlapping_and_out_of_bounds_are_accepted() {
        let obstacles = [
            Obstacle::new(1.0, 1.0, 150.0),
            Obstacle::new(1.5, 1.0, 150.0),
            Obstacle::new(6.0, 1.0, -10.0),
        ];
        let analyzer = Analyzer::new(&obstacles, AnalyzerConfig::default());
        let closest = analyzer.closest_pair().unwrap();
        assert_eq!((closest.i, closest.j), (0, 1));
        assert_approx_eq!(closest.gap, -200.0);

        let right = analyzer.closest_to_edges().get(Edge::Right).unwrap();
        assert_eq!(right.obstacle_index, 2);
        assert_approx_eq!(right.distance, -190.0);
    }

    #[test]
    fn gaps_above_boundary_size_still_found() {
        let obstacles = [Obstacle::new(0.0, 0.0, 0.0), Obstacle::new(10.0, 0.0, 0.0)];
        let analyzer = Analyzer::new(&obstacles, AnalyzerConfig::default());
        let closest = analyzer.closest_pair().unwrap();
        assert_approx_eq!(closest.gap, 2000.0);
    }

    #[test]
    fn closest_pair_is_minimal() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for count in 2..30 {
            let obstacles = random_obstacles(&mut rng, count);
            let analyzer = Analyzer::new(&obstacles, AnalyzerConfig::default());
            let closest = analyzer.closest_pair().unwrap();
            assert!(closest.i < closest.j && closest.j < count);
            for pair in analyzer.pair_gaps() {
                assert!(pair.gap >= closest.gap);
            }
        }
    }

    #[test]
    fn closest_to_edges_is_minimal() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for count in 1..30 {
            let obstacles = random_obstacles(&mut rng, count);
            let analyzer = Analyzer::new(&obstacles, AnalyzerConfig::default());
            let proximity = analyzer.closest_to_edges();
            for (edge, result) in proximity.iter() {
                let result = result.unwrap();
                assert!(result.obstacle_index < count);
                for clearances in analyzer.clearances() {
                    assert!(clearances.get(edge) >= result.distance);
                }
            }
        }
    }

    #[test]
    fn gaps_are_symmetric() {
        let analyzer = Analyzer::new(&REFERENCE_OBSTACLES, AnalyzerConfig::default());
        let scaled: Vec<_> = analyzer.scaled().collect();
        for pair in analyzer.pair_gaps() {
            assert_eq!(pair.gap, scaled[pair.j].gap_to(&scaled[pair.i]));
        }
    }

    #[test]
    fn gap_ordering_is_scale_invariant() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        let obstacles = random_obstacles(&mut rng, 12);
        let base = AnalyzerConfig::default();
        let doubled = AnalyzerConfig {
            scale: Scale::new(2.0 * base.scale.x, 2.0 * base.scale.y, 2.0 * base.scale.r),
            ..base
        };

        let order = |config| {
            let analyzer = Analyzer::new(&obstacles, config);
            let mut pairs: Vec<_> = analyzer.pair_gaps().collect();
            pairs.sort_by(|a, b| a.gap.partial_cmp(&b.gap).unwrap());
            pairs.into_iter().map(|p| (p.i, p.j)).collect::<Vec<_>>()
        };
        assert_eq!(order(base), order(doubled));
    }
}
