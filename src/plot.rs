//! Scatter plot geometry and the keyed point set.
//!
//! Both axes are scaled from the full dataset extent, so a point's position
//! depends only on its record and never on the active filter. Points are
//! keyed by title: a record that stays in the view keeps its [`PointId`].

use crate::config::PlotGeometry;
use crate::data::Dataset;
use std::collections::HashMap;

/// Observed min/max of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Extent {
    /// Extent of the finite values, or `None` if there are none.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(e) => Some(Self {
                    min: e.min.min(v),
                    max: e.max.max(v),
                }),
            })
    }
}

/// Linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale from `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale over an extent; an empty axis gets the unit domain.
    pub fn from_extent(extent: Option<Extent>, range: (f64, f64)) -> Self {
        let domain = extent.map(|e| (e.min, e.max)).unwrap_or((0.0, 1.0));
        Self::new(domain, range)
    }

    /// Data domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Pixel range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a data value to pixels. A zero-width domain maps to the range midpoint.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Map pixels back to a data value.
    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (pixel - r0) / span * (d1 - d0)
    }
}

/// Stable identity of a rendered point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u64);

/// A rendered point.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    /// Visual identity.
    pub id: PointId,
    /// Dataset index of the record.
    pub record: usize,
    /// Title key.
    pub title: String,
    /// Horizontal pixel position.
    pub cx: f64,
    /// Vertical pixel position (0 at the top).
    pub cy: f64,
}

/// What an update did to the point set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointDiff {
    /// Points created for records entering the view.
    pub entered: Vec<PointId>,
    /// Points reused for records that stayed.
    pub kept: Vec<PointId>,
    /// Points removed for records leaving the view.
    pub exited: Vec<PointId>,
}

impl PointDiff {
    /// Whether nothing was created or removed.
    pub fn is_unchanged(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Title-keyed collection of rendered points.
#[derive(Debug, Clone)]
pub struct PointSet {
    x_scale: LinearScale,
    y_scale: LinearScale,
    points: Vec<PlotPoint>,
    next_id: u64,
}

impl PointSet {
    /// Build scales from the full dataset and create one point per record.
    pub fn new(dataset: &Dataset, geometry: &PlotGeometry) -> Self {
        let records = dataset.records();
        let x_scale = LinearScale::from_extent(
            Extent::of(records.iter().map(|r| r.x)),
            (0.0, geometry.inner_width()),
        );
        let y_scale = LinearScale::from_extent(
            Extent::of(records.iter().map(|r| r.y)),
            (geometry.inner_height(), 0.0),
        );

        let mut set = Self {
            x_scale,
            y_scale,
            points: Vec::new(),
            next_id: 0,
        };
        let all: Vec<usize> = (0..dataset.len()).collect();
        set.update(dataset, &all);
        set
    }

    /// Horizontal scale.
    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    /// Vertical scale.
    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    /// Points in view order.
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    /// Point for a title, if it is currently shown.
    pub fn get(&self, title: &str) -> Option<&PlotPoint> {
        self.points.iter().find(|p| p.title == title)
    }

    /// Number of shown points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points are shown.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bring the point set in line with `view` (dataset indices).
    pub fn update(&mut self, dataset: &Dataset, view: &[usize]) -> PointDiff {
        let mut existing: HashMap<String, PlotPoint> = self
            .points
            .drain(..)
            .map(|p| (p.title.clone(), p))
            .collect();

        let mut diff = PointDiff::default();
        let mut points = Vec::with_capacity(view.len());
        for &idx in view {
            let Some(record) = dataset.get(idx) else {
                continue;
            };

            let mut point = match existing.remove(&record.title) {
                Some(point) => {
                    diff.kept.push(point.id);
                    point
                },
                None => {
                    let id = PointId(self.next_id);
                    self.next_id += 1;
                    diff.entered.push(id);
                    PlotPoint {
                        id,
                        record: idx,
                        title: record.title.clone(),
                        cx: 0.0,
                        cy: 0.0,
                    }
                },
            };
            point.cx = self.x_scale.scale(record.x);
            point.cy = self.y_scale.scale(record.y);
            points.push(point);
        }

        let mut exited: Vec<PointId> = existing.into_values().map(|p| p.id).collect();
        exited.sort();
        diff.exited = exited;

        self.points = points;
        diff
    }
}
