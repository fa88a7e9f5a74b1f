//! Application configuration.
//!
//! Everything has a code default so the clock runs with no config file at
//! all; a `cogwork.toml` next to the working directory (or a path given as
//! the first CLI argument) overrides the defaults. Shader locations live
//! here rather than as compiled-in path literals.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use cogwork_renderer::ShaderSet;

/// Default config file looked up when no path is given on the CLI.
const DEFAULT_CONFIG_FILE: &str = "cogwork.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Background color as linear RGBA.
    pub clear_color: [f64; 4],
    /// Directory holding `flat.wgsl` / `model.wgsl`. When unset the embedded
    /// shaders are used.
    pub shader_dir: Option<PathBuf>,
    /// glTF file whose first mesh is drawn behind the clock face.
    pub model_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Cogwork".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            shader_dir: None,
            model_path: None,
        }
    }
}

impl AppConfig {
    /// Parses a config file. Any read or parse problem is a hard error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Loads the config from `path` if given, otherwise from the default
    /// file when present, otherwise falls back to the code defaults.
    ///
    /// An explicitly given path must exist; the implicit default file is
    /// optional.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.exists() {
            Self::load(default)
        } else {
            log::info!("no {DEFAULT_CONFIG_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color { r, g, b, a }
    }

    /// Resolves the shader sources: embedded defaults, overridden by
    /// `<shader_dir>/flat.wgsl` and `<shader_dir>/model.wgsl` when a shader
    /// directory is configured. A configured-but-unreadable file is a hard
    /// error rather than a silently broken pipeline.
    pub fn shader_set(&self) -> anyhow::Result<ShaderSet> {
        let mut shaders = ShaderSet::default();
        if let Some(dir) = &self.shader_dir {
            let read = |name: &str| {
                let path = dir.join(name);
                fs::read_to_string(&path)
                    .with_context(|| format!("reading shader {}", path.display()))
            };
            shaders.flat = read("flat.wgsl")?;
            shaders.model = read("model.wgsl")?;
            log::info!("loaded shaders from {}", dir.display());
        }
        Ok(shaders)
    }
}
