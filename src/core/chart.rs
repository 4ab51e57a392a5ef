use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    BinningResult, GroupedContainer, PathCollection, PointCollection, ShapePrimitive,
};
use crate::core::types::AxisMetadata;
use crate::error::ChartResult;

/// Read-only capability view over a rendered chart.
///
/// Rendering engines implement the four collection accessors and the metadata
/// accessor; the provided capability queries are what the classifier rules are
/// written against. Implementations must not change while a conversion is in
/// progress.
pub trait ChartSource {
    fn point_collections(&self) -> &[PointCollection];

    fn path_collections(&self) -> &[PathCollection];

    fn shapes(&self) -> &[ShapePrimitive];

    fn grouped_containers(&self) -> &[GroupedContainer];

    fn metadata(&self) -> AxisMetadata;

    /// Binning output kept by the engine, when it can supply one.
    fn retained_binning(&self) -> Option<&BinningResult> {
        None
    }

    fn has_point_collections(&self) -> bool {
        !self.point_collections().is_empty()
    }

    fn has_path_collections(&self) -> bool {
        !self.path_collections().is_empty()
    }

    fn has_shapes(&self) -> bool {
        !self.shapes().is_empty()
    }

    fn all_shapes_rectangles(&self) -> bool {
        self.shapes().iter().all(|shape| shape.is_rectangle())
    }

    fn shape_widths(&self) -> Vec<f64> {
        self.shapes().iter().map(|shape| shape.width).collect()
    }

    fn has_histogram_container(&self) -> bool {
        self.grouped_containers()
            .iter()
            .any(GroupedContainer::is_histogram_like)
    }

    fn has_retained_binning(&self) -> bool {
        self.retained_binning().is_some()
    }
}

/// Owned chart snapshot.
///
/// Hosts that cannot expose their engine's object graph directly dump it into
/// a `SceneChart`; it is also the persisted form read by `scene_to_vega`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneChart {
    #[serde(default)]
    pub point_collections: Vec<PointCollection>,
    #[serde(default)]
    pub path_collections: Vec<PathCollection>,
    #[serde(default)]
    pub shapes: Vec<ShapePrimitive>,
    #[serde(default)]
    pub grouped_containers: Vec<GroupedContainer>,
    #[serde(default)]
    pub retained_binning: Option<BinningResult>,
    #[serde(default)]
    pub metadata: AxisMetadata,
}

impl SceneChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks styling that cannot be inferred from geometry alone.
    pub fn validate(&self) -> ChartResult<()> {
        for color in self
            .point_collections
            .iter()
            .flat_map(|collection| collection.colors.iter())
        {
            color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn with_point_collection(mut self, collection: PointCollection) -> Self {
        self.point_collections.push(collection);
        self
    }

    #[must_use]
    pub fn with_path_collection(mut self, collection: PathCollection) -> Self {
        self.path_collections.push(collection);
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: ShapePrimitive) -> Self {
        self.shapes.push(shape);
        self
    }

    #[must_use]
    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = ShapePrimitive>) -> Self {
        self.shapes.extend(shapes);
        self
    }

    #[must_use]
    pub fn with_grouped_container(mut self, container: GroupedContainer) -> Self {
        self.grouped_containers.push(container);
        self
    }

    #[must_use]
    pub fn with_retained_binning(mut self, binning: BinningResult) -> Self {
        self.retained_binning = Some(binning);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: AxisMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.metadata.x_label = x_label.into();
        self.metadata.y_label = y_label.into();
        self
    }
}

impl ChartSource for SceneChart {
    fn point_collections(&self) -> &[PointCollection] {
        &self.point_collections
    }

    fn path_collections(&self) -> &[PathCollection] {
        &self.path_collections
    }

    fn shapes(&self) -> &[ShapePrimitive] {
        &self.shapes
    }

    fn grouped_containers(&self) -> &[GroupedContainer] {
        &self.grouped_containers
    }

    fn metadata(&self) -> AxisMetadata {
        self.metadata.clone()
    }

    fn retained_binning(&self) -> Option<&BinningResult> {
        self.retained_binning.as_ref()
    }
}
