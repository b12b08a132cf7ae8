//! Canvas metadata: component tallies, dependencies, and the `input.json` record.

use std::collections::BTreeMap;

use hydra_host_core::{CanvasObject, ObjectKind};
use serde::{Deserialize, Serialize};

use crate::target::THUMBNAIL_FILE;

/// Components that say nothing about what an example does: UI widgets,
/// primitive geometry, and the exporter's own components.
pub const TRIVIAL_COMPONENTS: &[&str] = &[
    "Hydra",
    "Scribble",
    "Hydra_ExportFile",
    "Hydra_ImportFile",
    "Group",
    "Panel",
    "Slider",
    "Boolean Toggle",
    "Custom Preview",
    "Colour Swatch",
    "Button",
    "Control Knob",
    "Digit Scroller",
    "MD Slider",
    "Value List",
    "Point",
    "Vector",
    "Circle",
    "Circular Arc",
    "Curve",
    "Line",
    "Plane",
    "Rectangle",
    "Box",
    "Mesh",
    "Mesh Face",
    "Surface",
    "Twisted Box",
    "Field",
    "Geometry",
    "Geometry Cache",
    "Geometry Pipeline",
    "Transform",
];

/// Categories that ship with the host and are never reported as dependencies.
pub const NATIVE_CATEGORIES: &[&str] = &[
    "Params",
    "Maths",
    "Sets",
    "Vector",
    "Curve",
    "Surface",
    "Mesh",
    "Intersect",
    "Transform",
    "Display",
    "Hydra",
];

/// Catch-all categories where plugins live; their subcategory names the plugin.
pub const GENERIC_CATEGORIES: &[&str] = &["Extra", "User"];

pub const CANVAS_IMAGE_LABEL: &str = "Grasshopper Definition";
pub const VIEWPORT_IMAGE_LABEL: &str = "Rhino Viewport Screenshot";
pub const ADDITIONAL_IMAGE_LABEL: &str = "Additional Image";

/// Occurrence count per component display name.
pub type ComponentTally = BTreeMap<String, u32>;

/// Keep every object, or only script components.
pub fn filter_objects(objects: &[CanvasObject], only_scripts: bool) -> Vec<CanvasObject> {
    objects
        .iter()
        .filter(|o| !only_scripts || o.kind == ObjectKind::ScriptComponent)
        .cloned()
        .collect()
}

/// Count non-trivial components by display name.
pub fn tally_components(objects: &[CanvasObject]) -> ComponentTally {
    objects
        .iter()
        .filter(|o| !TRIVIAL_COMPONENTS.contains(&o.name.as_str()))
        .fold(ComponentTally::new(), |mut tally, o| {
            *tally.entry(o.name.clone()).or_insert(0) += 1;
            tally
        })
}

/// Category an object is attributed to: the subcategory for generic
/// categories, the category otherwise.
pub fn effective_category(object: &CanvasObject) -> &str {
    if GENERIC_CATEGORIES.contains(&object.category.as_str()) {
        &object.subcategory
    } else {
        &object.category
    }
}

/// Non-native categories in first-seen order, without duplicates.
pub fn collect_dependencies(objects: &[CanvasObject]) -> Vec<String> {
    objects
        .iter()
        .map(effective_category)
        .filter(|category| !NATIVE_CATEGORIES.contains(category))
        .fold(Vec::new(), |mut deps: Vec<String>, category| {
            if !deps.iter().any(|d| d == category) {
                deps.push(category.to_string());
            }
            deps
        })
}

/// One published image, serialized as `{ "<filename>": "<label>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct ImageEntry {
    pub filename: String,
    pub label: String,
}

impl ImageEntry {
    pub fn new(filename: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            label: label.into(),
        }
    }

    pub fn canvas(filename: impl Into<String>) -> Self {
        Self::new(filename, CANVAS_IMAGE_LABEL)
    }

    pub fn viewport(filename: impl Into<String>) -> Self {
        Self::new(filename, VIEWPORT_IMAGE_LABEL)
    }

    pub fn additional(filename: impl Into<String>) -> Self {
        Self::new(filename, ADDITIONAL_IMAGE_LABEL)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("image entry must have exactly one key, found {0}")]
pub struct ImageEntryError(usize);

impl TryFrom<BTreeMap<String, String>> for ImageEntry {
    type Error = ImageEntryError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(ImageEntryError(map.len()));
        }
        let (filename, label) = map
            .into_iter()
            .next()
            .ok_or(ImageEntryError(0))?;
        Ok(Self { filename, label })
    }
}

impl From<ImageEntry> for BTreeMap<String, String> {
    fn from(entry: ImageEntry) -> Self {
        BTreeMap::from([(entry.filename, entry.label)])
    }
}

/// The `input.json` record describing an exported example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub components: ComponentTally,
    pub images: Vec<ImageEntry>,
    /// Reserved; always empty.
    pub videos: BTreeMap<String, String>,
    pub dependencies: Vec<String>,
    pub tags: Vec<String>,
    pub thumbnail: String,
    /// Archive file name.
    pub file: String,
}

impl MetadataRecord {
    /// Build the record from the canvas objects and the published files.
    pub fn build(
        objects: &[CanvasObject],
        images: Vec<ImageEntry>,
        tags: Vec<String>,
        archive_name: impl Into<String>,
    ) -> Self {
        Self {
            components: tally_components(objects),
            images,
            videos: BTreeMap::new(),
            dependencies: collect_dependencies(objects),
            tags,
            thumbnail: THUMBNAIL_FILE.to_string(),
            file: archive_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Vec<CanvasObject> {
        vec![
            CanvasObject::new("Slider", "Params", "Input"),
            CanvasObject::new("Loft", "Surface", "Freeform"),
            CanvasObject::new("Sunpath", "Extra", "Ladybug"),
            CanvasObject::new("Loft", "Surface", "Freeform"),
            CanvasObject::new("Radiation Analysis", "Extra", "Ladybug"),
            CanvasObject::new("Kangaroo Solver", "Kangaroo2", "Main"),
            CanvasObject::new("Panel", "Params", "Input"),
            CanvasObject::new("Honeybee Zone", "User", "Honeybee"),
            CanvasObject::new("Sunpath", "Extra", "Ladybug"),
        ]
    }

    #[test]
    fn tally_skips_trivial_components() {
        let tally = tally_components(&canvas());
        assert_eq!(tally.get("Loft"), Some(&2));
        assert_eq!(tally.get("Sunpath"), Some(&2));
        assert_eq!(tally.get("Kangaroo Solver"), Some(&1));
        assert!(!tally.contains_key("Slider"));
        assert!(!tally.contains_key("Panel"));
    }

    #[test]
    fn dependencies_are_unique_in_first_seen_order() {
        assert_eq!(
            collect_dependencies(&canvas()),
            vec!["Ladybug", "Kangaroo2", "Honeybee"]
        );
    }

    #[test]
    fn many_objects_in_one_category_yield_one_dependency() {
        let objects: Vec<_> = (0..25)
            .map(|i| CanvasObject::new(format!("Goal {i}"), "Kangaroo2", "Goals"))
            .collect();
        assert_eq!(collect_dependencies(&objects), vec!["Kangaroo2"]);
    }

    #[test]
    fn trivial_components_still_count_towards_dependencies() {
        let objects = vec![CanvasObject::new("Panel", "Extra", "Human")];
        assert!(tally_components(&objects).is_empty());
        assert_eq!(collect_dependencies(&objects), vec!["Human"]);
    }

    #[test]
    fn script_filter_keeps_only_script_components() {
        let mut objects = canvas();
        objects.push(
            CanvasObject::new("Python", "Maths", "Script").with_kind(ObjectKind::ScriptComponent),
        );
        let scripts = filter_objects(&objects, true);
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].name, "Python");
        assert_eq!(filter_objects(&objects, false).len(), objects.len());
    }

    #[test]
    fn record_serializes_with_fixed_keys() {
        let record = MetadataRecord::build(
            &canvas(),
            vec![
                ImageEntry::canvas("MyTest_GH.png"),
                ImageEntry::viewport("MyTest_Rhino.png"),
            ],
            vec!["MyTest".to_string(), "Grasshopper".to_string()],
            "MyTest.zip",
        );
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["images"][0]["MyTest_GH.png"], "Grasshopper Definition");
        assert_eq!(
            json["images"][1]["MyTest_Rhino.png"],
            "Rhino Viewport Screenshot"
        );
        assert_eq!(json["videos"], serde_json::json!({}));
        assert_eq!(json["thumbnail"], "thumbnail.png");
        assert_eq!(json["file"], "MyTest.zip");
        assert_eq!(json["components"]["Loft"], 2);

        let parsed: MetadataRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn image_entry_rejects_multiple_keys() {
        let result: Result<ImageEntry, _> =
            serde_json::from_str(r#"{ "a.png": "A", "b.png": "B" }"#);
        assert!(result.is_err());
    }
}
