//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! A binary tree over scene objects providing sub-linear expected
//! intersection cost. Built once before rendering, immutable thereafter.

use crate::hittable::{HitRecord, Hittable};
use ember_math::{Aabb, Interval, Ray};
use rand::{Rng, RngCore};

/// One or two objects stop the recursion and become a leaf.
const LEAF_MAX_SIZE: usize = 2;

/// How a node picks the axis to split along.
///
/// The default random choice is a deliberate build-simplicity tradeoff, not
/// a surface-area-optimal partition; the longest-axis variant is a drop-in
/// alternative with the same external contract.
#[derive(Debug, Clone, Copy, Default)]
pub enum SplitHeuristic {
    /// Pick one of the three axes uniformly at random per node.
    #[default]
    RandomAxis,
    /// Pick the axis with the widest spread of object centroids.
    LongestAxis,
}

/// BVH node: a branch with two subtrees or a leaf with its objects.
pub enum BvhNode {
    /// Internal node with two children; its box is the union of theirs.
    Branch {
        left: Box<BvhNode>,
        right: Box<BvhNode>,
        bbox: Aabb,
    },
    /// Leaf node holding one or two objects directly.
    Leaf {
        objects: Vec<Box<dyn Hittable>>,
        bbox: Aabb,
    },
    /// Empty scene.
    Empty,
}

impl BvhNode {
    /// Build a BVH over the given objects with the default split heuristic.
    ///
    /// The time interval is what the objects' bounding boxes are queried
    /// over, so moving primitives stay enclosed for the whole render.
    pub fn new(
        objects: Vec<Box<dyn Hittable>>,
        time0: f32,
        time1: f32,
        rng: &mut dyn RngCore,
    ) -> Self {
        Self::with_heuristic(objects, time0, time1, SplitHeuristic::default(), rng)
    }

    /// Build a BVH over the contents of a hittable list.
    pub fn from_list(list: crate::HittableList, time0: f32, time1: f32, rng: &mut dyn RngCore) -> Self {
        Self::new(list.into_objects(), time0, time1, rng)
    }

    /// Build a BVH with an explicit split heuristic.
    pub fn with_heuristic(
        objects: Vec<Box<dyn Hittable>>,
        time0: f32,
        time1: f32,
        heuristic: SplitHeuristic,
        rng: &mut dyn RngCore,
    ) -> Self {
        if objects.is_empty() {
            return BvhNode::Empty;
        }
        log::debug!("building BVH over {} objects", objects.len());
        Self::build(objects, time0, time1, heuristic, rng)
    }

    /// Recursive BVH construction.
    ///
    /// Sort objects by bounding-box minimum on the chosen axis, split at the
    /// midpoint, recurse; each node's box is computed bottom-up as the union
    /// of its children's.
    fn build(
        mut objects: Vec<Box<dyn Hittable>>,
        time0: f32,
        time1: f32,
        heuristic: SplitHeuristic,
        rng: &mut dyn RngCore,
    ) -> Self {
        let n = objects.len();

        let bounds = objects.iter().fold(Aabb::EMPTY, |acc, object| {
            Aabb::surrounding(&acc, &object.bounding_box(time0, time1))
        });

        if n <= LEAF_MAX_SIZE {
            return BvhNode::Leaf {
                objects,
                bbox: bounds,
            };
        }

        let axis = match heuristic {
            SplitHeuristic::RandomAxis => rng.gen_range(0..3),
            SplitHeuristic::LongestAxis => {
                let centroid_bounds = objects.iter().fold(Aabb::EMPTY, |acc, object| {
                    let c = object.bounding_box(time0, time1).centroid();
                    Aabb::surrounding(&acc, &Aabb::from_points(c, c))
                });
                centroid_bounds.longest_axis()
            }
        };

        objects.sort_unstable_by(|a, b| {
            let a_min = a.bounding_box(time0, time1).axis_interval(axis).min;
            let b_min = b.bounding_box(time0, time1).axis_interval(axis).min;
            a_min.partial_cmp(&b_min).unwrap_or(std::cmp::Ordering::Equal)
        });

        let mid = n / 2;
        let right_objects = objects.split_off(mid);
        let left_objects = objects;

        let left = Self::build(left_objects, time0, time1, heuristic, rng);
        let right = Self::build(right_objects, time0, time1, heuristic, rng);

        BvhNode::Branch {
            left: Box::new(left),
            right: Box::new(right),
            bbox: bounds,
        }
    }
}

impl Hittable for BvhNode {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        match self {
            BvhNode::Empty => false,

            BvhNode::Leaf { objects, bbox } => {
                if !bbox.hit(ray, ray_t) {
                    return false;
                }

                let mut hit_anything = false;
                let mut closest = ray_t.max;

                for object in objects {
                    let interval = Interval::new(ray_t.min, closest);
                    if object.hit(ray, interval, rec) {
                        hit_anything = true;
                        closest = rec.t;
                    }
                }
                hit_anything
            }

            BvhNode::Branch { left, right, bbox } => {
                // Prune the whole subtree on a box miss.
                if !bbox.hit(ray, ray_t) {
                    return false;
                }

                let hit_left = left.hit(ray, ray_t, rec);

                // Only check right up to the closest hit so far; this keeps
                // the result the globally nearest hit across the subtree.
                let right_max = if hit_left { rec.t } else { ray_t.max };
                let hit_right = right.hit(ray, Interval::new(ray_t.min, right_max), rec);

                hit_left || hit_right
            }
        }
    }

    fn bounding_box(&self, _time0: f32, _time1: f32) -> Aabb {
        match self {
            BvhNode::Empty => Aabb::EMPTY,
            BvhNode::Leaf { bbox, .. } => *bbox,
            BvhNode::Branch { bbox, .. } => *bbox,
        }
    }
}
