//! Shared fixtures: a fake host and a fork checkout in a temp directory.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use hydra_common::config::ExporterConfig;
use hydra_common::error::{HydraError, HydraResult};
use hydra_export_model::ExportInputs;
use hydra_exporter::Exporter;
use hydra_host_core::{
    CanvasBounds, CanvasObject, HostContext, HostMessage, MessageLevel, TiledCapture,
};
use image::{DynamicImage, Rgb, RgbImage};
use tempfile::TempDir;

pub const TILE: u32 = 10;
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

pub const ORIGIN_CONFIG: &str = r#"[core]
	bare = false
[remote "upstream"]
	url = https://github.com/hydrashare/hydra.git
[remote "origin"]
	url = https://github.com/alice/hydra-fork.git
	fetch = +refs/heads/*:refs/remotes/origin/*
"#;

/// In-memory host with a 2x2 tile canvas.
pub struct FakeHost {
    pub document: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub objects: Vec<CanvasObject>,
    pub tiles: Vec<PathBuf>,
    pub viewport: RgbImage,
    pub messages: RefCell<Vec<HostMessage>>,
}

impl FakeHost {
    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .map(|m| m.message.clone())
            .collect()
    }
}

impl HostContext for FakeHost {
    fn current_document_path(&self) -> Option<PathBuf> {
        self.document.clone()
    }

    fn model_document_path(&self) -> Option<PathBuf> {
        self.model.clone()
    }

    fn list_canvas_objects(&self) -> Vec<CanvasObject> {
        self.objects.clone()
    }

    fn canvas_bounds(&self) -> CanvasBounds {
        CanvasBounds {
            x: 0,
            y: 0,
            width: 2 * TILE,
            height: 2 * TILE,
        }
    }

    fn capture_canvas_tiles(&self, bounds: CanvasBounds) -> HydraResult<TiledCapture> {
        if self.tiles.is_empty() {
            return Err(HydraError::host("no tiles"));
        }
        Ok(TiledCapture {
            tiles: self.tiles.clone(),
            width: bounds.width,
            height: bounds.height,
            tile_width: TILE,
            tile_height: TILE,
        })
    }

    fn capture_viewport(&self) -> HydraResult<DynamicImage> {
        Ok(DynamicImage::ImageRgb8(self.viewport.clone()))
    }

    fn report(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push(HostMessage {
            level,
            message: message.to_string(),
        });
    }
}

/// A temp directory holding `GitHub/hydra-fork` (with git config), a saved
/// canvas document, and canvas tiles.
pub struct Fixture {
    pub dir: TempDir,
    pub search_root: PathBuf,
    pub repo: PathBuf,
    pub host: FakeHost,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let search_root = dir.path().join("GitHub");
        let repo = search_root.join("hydra-fork");
        std::fs::create_dir_all(repo.join(".git")).unwrap();
        std::fs::write(repo.join(".git").join("config"), ORIGIN_CONFIG).unwrap();

        let docs = dir.path().join("docs");
        std::fs::create_dir_all(&docs).unwrap();
        let document = docs.join("working copy.gh");
        std::fs::write(&document, "grasshopper document").unwrap();

        let tiles_dir = dir.path().join("tiles");
        std::fs::create_dir_all(&tiles_dir).unwrap();
        let tiles = [("0;0", RED), ("0;1", GREEN), ("1;0", BLUE), ("1;1", BLACK)]
            .into_iter()
            .map(|(name, color)| {
                write_png(&tiles_dir.join(format!("{name}.png")), TILE, TILE, color)
            })
            .collect();

        let host = FakeHost {
            document: Some(document),
            model: None,
            objects: vec![
                CanvasObject::new("Slider", "Params", "Input"),
                CanvasObject::new("Loft", "Surface", "Freeform"),
                CanvasObject::new("Sunpath", "Extra", "Ladybug"),
                CanvasObject::new("Sunpath", "Extra", "Ladybug"),
                CanvasObject::new("Hydra_ExportFile", "Extra", "Hydra"),
            ],
            tiles,
            viewport: RgbImage::from_pixel(1600, 800, BLUE),
            messages: RefCell::new(Vec::new()),
        };

        Self {
            dir,
            search_root,
            repo,
            host,
        }
    }

    /// Exporter that discovers the fork under the fixture's search root.
    pub fn exporter(&self) -> Exporter {
        let mut config = ExporterConfig::default();
        config.repository.search_root = self.search_root.clone();
        Exporter::new(config)
    }

    /// Save a model document and attach it to the host.
    pub fn save_model(&mut self) -> PathBuf {
        let model = self.dir.path().join("docs").join("scene.3dm");
        std::fs::write(&model, "rhino model").unwrap();
        self.host.model = Some(model.clone());
        model
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Inputs with the mandatory fields set and the trigger on.
pub fn inputs(file_name: &str) -> ExportInputs {
    ExportInputs {
        file_name: file_name.to_string(),
        description: vec!["A test file.".to_string()],
        export: true,
        ..ExportInputs::default()
    }
}

pub fn write_png(path: &Path, width: u32, height: u32, color: Rgb<u8>) -> PathBuf {
    RgbImage::from_pixel(width, height, color).save(path).unwrap();
    path.to_path_buf()
}
