//! Arena-based CART decision tree with Gini impurity splits.
//!
//! Nodes are stored contiguously in a `Vec` and reference their children by
//! index. Children are pushed before their parent, so the root is always the
//! last node in the arena.
//!
//! Each split considers a random subset of features (see [`MaxFeatures`]) and
//! picks the threshold that minimises the weighted Gini impurity of the two
//! children. Thresholds sit halfway between adjacent distinct values.

use nalgebra::DMatrix;
use rand::Rng;
use rand::seq::index::sample;
use serde::{Deserialize, Serialize};

/// Number of features examined at each split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    /// Every feature
    All,
    /// √n features, rounded down
    #[default]
    Sqrt,
    /// log₂ n features, rounded down
    Log2,
    /// A fixed count, capped at n
    Count(usize),
}

impl MaxFeatures {
    /// Resolve to a concrete feature count for `n_features` columns (at least 1)
    pub fn resolve(&self, n_features: usize) -> usize {
        let count = match self {
            Self::All => n_features,
            Self::Sqrt => (n_features as f64).sqrt() as usize,
            Self::Log2 => (n_features as f64).log2() as usize,
            Self::Count(count) => *count,
        };
        count.clamp(1, n_features.max(1))
    }
}

/// Growth limits for a single tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth; `None` grows until leaves are pure
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Minimum samples a node needs before it may split
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    /// Features examined per split
    #[serde(default)]
    pub max_features: MaxFeatures,
}

fn default_min_samples_split() -> usize {
    2
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            max_features: MaxFeatures::default(),
        }
    }
}

/// Index into the node arena
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(u32);

impl NodeId {
    fn new(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "NodeId overflow");
        NodeId(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the tree arena
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Terminal node holding the class distribution of its training samples
    Leaf {
        /// Fraction of samples per class, sums to 1
        distribution: Vec<f64>,
    },

    /// Binary split on one feature
    Split {
        /// Feature column tested
        feature: usize,
        /// Samples with `value <= threshold` go left
        threshold: f64,
        /// Left child
        left: NodeId,
        /// Right child
        right: NodeId,
    },
}

/// Best split found for a node
struct Candidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

/// Shared read-only state while growing a tree
struct Grower<'a, R: Rng> {
    features: &'a DMatrix<f64>,
    labels: &'a [usize],
    n_classes: usize,
    n_split_features: usize,
    config: &'a TreeConfig,
    rng: &'a mut R,
    arena: Vec<Node>,
}

/// A fitted classification tree
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<Node>,
    root: NodeId,
    n_classes: usize,
}

impl DecisionTree {
    /// Grow a tree on the given sample indices
    ///
    /// Indices may repeat (bootstrap samples), in which case repeated rows
    /// count multiple times toward impurity and leaf distributions.
    ///
    /// # Arguments
    /// * `features` - Full feature matrix
    /// * `labels` - Class label per row of `features`
    /// * `n_classes` - Number of classes
    /// * `samples` - Row indices to train on
    /// * `config` - Growth limits
    /// * `rng` - Source for per-split feature subsets
    pub fn fit<R: Rng>(
        features: &DMatrix<f64>,
        labels: &[usize],
        n_classes: usize,
        samples: &[usize],
        config: &TreeConfig,
        rng: &mut R,
    ) -> Self {
        let mut grower = Grower {
            features,
            labels,
            n_classes,
            n_split_features: config.max_features.resolve(features.ncols()),
            config,
            rng,
            arena: Vec::with_capacity(samples.len()),
        };
        let root = grower.grow(samples.to_vec(), 0);

        DecisionTree {
            nodes: grower.arena,
            root,
            n_classes,
        }
    }

    /// Class distribution of the leaf the row falls into
    pub fn predict_proba(&self, row: &[f64]) -> &[f64] {
        let mut id = self.root;
        loop {
            match &self.nodes[id.index()] {
                Node::Leaf { distribution } => return distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    id = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Most probable class for the row
    pub fn predict(&self, row: &[f64]) -> usize {
        argmax(self.predict_proba(row))
    }

    /// Number of classes the tree was fitted for
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Total node count
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }

    /// Depth of the deepest leaf (a single leaf has depth 0)
    pub fn depth(&self) -> usize {
        self.depth_of(self.root)
    }

    fn depth_of(&self, id: NodeId) -> usize {
        match &self.nodes[id.index()] {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => 1 + self.depth_of(*left).max(self.depth_of(*right)),
        }
    }
}

impl<R: Rng> Grower<'_, R> {
    /// Recursively grow the subtree over `samples` and return its root
    fn grow(&mut self, samples: Vec<usize>, depth: usize) -> NodeId {
        let counts = self.class_counts(&samples);
        let is_pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let at_depth_limit = self.config.max_depth.is_some_and(|max| depth >= max);

        if is_pure || at_depth_limit || samples.len() < self.config.min_samples_split {
            return self.push_leaf(&counts, samples.len());
        }

        let Some(split) = self.best_split(&samples, &counts) else {
            return self.push_leaf(&counts, samples.len());
        };

        let (left_samples, right_samples): (Vec<usize>, Vec<usize>) = samples
            .into_iter()
            .partition(|&i| self.features[(i, split.feature)] <= split.threshold);

        let left = self.grow(left_samples, depth + 1);
        let right = self.grow(right_samples, depth + 1);

        let id = NodeId::new(self.arena.len());
        self.arena.push(Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        });
        id
    }

    fn push_leaf(&mut self, counts: &[usize], total: usize) -> NodeId {
        let total = total.max(1) as f64;
        let id = NodeId::new(self.arena.len());
        self.arena.push(Node::Leaf {
            distribution: counts.iter().map(|&c| c as f64 / total).collect(),
        });
        id
    }

    fn class_counts(&self, samples: &[usize]) -> Vec<usize> {
        let mut counts = vec![0; self.n_classes];
        for &i in samples {
            counts[self.labels[i]] += 1;
        }
        counts
    }

    /// Lowest weighted-impurity split over a random feature subset
    ///
    /// Returns `None` when every candidate feature is constant over `samples`.
    fn best_split(&mut self, samples: &[usize], counts: &[usize]) -> Option<Candidate> {
        let n_features = self.features.ncols();
        let candidates = sample(&mut *self.rng, n_features, self.n_split_features);
        let total = samples.len() as f64;
        let mut best: Option<Candidate> = None;

        let mut sorted = samples.to_vec();
        for feature in candidates.iter() {
            sorted.sort_by(|&a, &b| {
                self.features[(a, feature)].total_cmp(&self.features[(b, feature)])
            });

            let mut left = vec![0usize; self.n_classes];
            let mut right = counts.to_vec();

            for position in 0..sorted.len() - 1 {
                let label = self.labels[sorted[position]];
                left[label] += 1;
                right[label] -= 1;

                let value = self.features[(sorted[position], feature)];
                let next = self.features[(sorted[position + 1], feature)];
                if value >= next {
                    continue;
                }

                let n_left = (position + 1) as f64;
                let n_right = total - n_left;
                let impurity =
                    (n_left * gini(&left, n_left) + n_right * gini(&right, n_right)) / total;

                if best.as_ref().is_none_or(|b| impurity < b.impurity) {
                    best = Some(Candidate {
                        feature,
                        threshold: value + (next - value) / 2.0,
                        impurity,
                    });
                }
            }
        }

        best
    }
}

/// Gini impurity of a class-count vector holding `total` samples
pub fn gini(counts: &[usize], total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

/// Index of the largest value; the first one wins ties
pub fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best_i, best_v), (i, &v)| {
            if v > best_v { (i, v) } else { (best_i, best_v) }
        })
        .0
}
