//! Gallery configuration: viewport, grid metrics, frame rate, and items.
//!
//! Configs are YAML or TOML, picked by file extension. Every section is
//! optional; a missing `items` list yields the built-in showcase.
//!
//! ```yaml
//! viewport: { width: 400, height: 800 }
//! grid: { min_cell_width: 150, spacing: 16, padding: 16 }
//! frame_rate: 60
//! items:
//!   - type: TextSwitch
//!     span: 2
//!   - type: CustomISwitch
//!     positive: { icon: Done }
//!     negative: "OFF"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use switchy::widgets::native::NativePlatform;
use switchy::{Icon, SwitchContent};

/// Highest accepted simulation frame rate.
pub const MAX_FRAME_RATE: u32 = 240;

/// Root of a gallery config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Simulated window size
    pub viewport: Viewport,
    /// Adaptive grid metrics
    pub grid: GridMetrics,
    /// Frames per simulated second
    pub frame_rate: u32,
    /// Gallery items in display order
    pub items: Vec<ItemConfig>,
}

/// Simulated window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        // Phone frame at a 1:2 aspect ratio.
        Self {
            width: 400.0,
            height: 800.0,
        }
    }
}

/// Metrics of the adaptive grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridMetrics {
    /// Columns are added while each stays at least this wide
    pub min_cell_width: f32,
    /// Gap between rows and between columns
    pub spacing: f32,
    /// Padding around the whole grid
    pub padding: f32,
    /// Padding inside each cell, around caption and switch
    pub cell_padding: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            min_cell_width: 150.0,
            spacing: 16.0,
            padding: 16.0,
            cell_padding: 8.0,
        }
    }
}

/// One gallery cell: a captioned switch with its own state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemConfig {
    /// Variant name, e.g. `ISwitch` or `heart-switch`
    #[serde(rename = "type")]
    pub kind: String,
    /// Caption shown above the switch (defaults to the variant name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Test id used by `--click` (defaults to the variant slug)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Initial state
    #[serde(default)]
    pub checked: bool,
    /// Whether the switch accepts input
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Number of grid columns to occupy
    #[serde(default = "default_span")]
    pub span: usize,
    /// Content shown when checked (custom variants only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive: Option<ContentConfig>,
    /// Content shown when unchecked (custom variants only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<ContentConfig>,
    /// Native control family (`NativeSwitch` only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

const fn default_enabled() -> bool {
    true
}

const fn default_span() -> usize {
    1
}

/// Switch content written in a config: an icon table or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentConfig {
    /// `{ icon: Done }`
    Icon {
        /// Built-in icon
        icon: Icon,
    },
    /// A text label
    Text(String),
}

impl From<&ContentConfig> for SwitchContent {
    fn from(content: &ContentConfig) -> Self {
        match content {
            ContentConfig::Icon { icon } => Self::Icon(*icon),
            ContentConfig::Text(text) => Self::text(text.clone()),
        }
    }
}

/// The switch variants a gallery can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// [`switchy::TextSwitch`]
    TextSwitch,
    /// [`switchy::ColoredSwitch`]
    ColoredSwitch,
    /// [`switchy::ISwitch`]
    ISwitch,
    /// [`switchy::IconISwitch`]
    IconISwitch,
    /// [`switchy::CustomISwitch`]
    CustomISwitch,
    /// [`switchy::HeartSwitch`]
    HeartSwitch,
    /// [`switchy::CustomSwitch`]
    CustomSwitch,
    /// [`switchy::SquareSwitch`]
    SquareSwitch,
    /// [`switchy::NativeSwitch`]
    NativeSwitch,
    /// [`switchy::MorphingSwitch`]
    MorphingSwitch,
}

impl Variant {
    /// Every variant, in showcase order.
    pub const ALL: [Self; 10] = [
        Self::TextSwitch,
        Self::ColoredSwitch,
        Self::ISwitch,
        Self::IconISwitch,
        Self::CustomISwitch,
        Self::HeartSwitch,
        Self::CustomSwitch,
        Self::SquareSwitch,
        Self::NativeSwitch,
        Self::MorphingSwitch,
    ];

    /// Type name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TextSwitch => "TextSwitch",
            Self::ColoredSwitch => "ColoredSwitch",
            Self::ISwitch => "ISwitch",
            Self::IconISwitch => "IconISwitch",
            Self::CustomISwitch => "CustomISwitch",
            Self::HeartSwitch => "HeartSwitch",
            Self::CustomSwitch => "CustomSwitch",
            Self::SquareSwitch => "SquareSwitch",
            Self::NativeSwitch => "NativeSwitch",
            Self::MorphingSwitch => "MorphingSwitch",
        }
    }

    /// Kebab-case name, also the default test id.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::TextSwitch => "text-switch",
            Self::ColoredSwitch => "colored-switch",
            Self::ISwitch => "iswitch",
            Self::IconISwitch => "icon-iswitch",
            Self::CustomISwitch => "custom-iswitch",
            Self::HeartSwitch => "heart-switch",
            Self::CustomSwitch => "custom-switch",
            Self::SquareSwitch => "square-switch",
            Self::NativeSwitch => "native-switch",
            Self::MorphingSwitch => "morphing-switch",
        }
    }

    /// Whether `positive`/`negative` content applies.
    pub const fn takes_content(self) -> bool {
        matches!(self, Self::CustomISwitch | Self::CustomSwitch)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s || v.slug() == s)
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

/// Parse a native platform name.
pub fn parse_platform(name: &str) -> Option<NativePlatform> {
    match name.to_ascii_lowercase().as_str() {
        "cupertino" | "ios" => Some(NativePlatform::Cupertino),
        "desktop" => Some(NativePlatform::Desktop),
        "material" | "android" | "web" => Some(NativePlatform::Material),
        "current" => Some(NativePlatform::current()),
        _ => None,
    }
}

impl ItemConfig {
    /// Item of the given variant with default props.
    pub fn new(variant: Variant) -> Self {
        Self {
            kind: variant.name().to_string(),
            caption: None,
            id: None,
            checked: false,
            enabled: true,
            span: 1,
            positive: None,
            negative: None,
            platform: None,
        }
    }

    /// Set the caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the test id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the column span.
    pub const fn span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Set both content slots.
    pub fn content(mut self, positive: ContentConfig, negative: ContentConfig) -> Self {
        self.positive = Some(positive);
        self.negative = Some(negative);
        self
    }

    /// Resolve the variant name.
    pub fn variant(&self) -> Result<Variant, ConfigError> {
        self.kind.parse()
    }

    /// Caption, falling back to the type name as written.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or(&self.kind)
    }

    /// Native platform, falling back to the compilation target's.
    pub fn native_platform(&self) -> Result<NativePlatform, ConfigError> {
        match &self.platform {
            None => Ok(NativePlatform::current()),
            Some(name) => parse_platform(name).ok_or_else(|| {
                ConfigError::invalid(
                    "platform",
                    format!("unknown platform '{name}' (expected cupertino, desktop or material)"),
                )
            }),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let done = || ContentConfig::Icon { icon: Icon::Done };
        Self {
            viewport: Viewport::default(),
            grid: GridMetrics::default(),
            frame_rate: 60,
            items: vec![
                ItemConfig::new(Variant::TextSwitch).span(2),
                ItemConfig::new(Variant::ColoredSwitch),
                ItemConfig::new(Variant::ISwitch),
                ItemConfig::new(Variant::IconISwitch),
                ItemConfig::new(Variant::CustomISwitch)
                    .content(done(), ContentConfig::Text("OFF".to_string())),
                ItemConfig::new(Variant::HeartSwitch),
                ItemConfig::new(Variant::CustomSwitch)
                    .span(2)
                    .content(done(), ContentConfig::Text("False".to_string())),
                ItemConfig::new(Variant::SquareSwitch).caption("Square Switch"),
                ItemConfig::new(Variant::NativeSwitch).caption("Native Switch"),
                ItemConfig::new(Variant::CustomISwitch)
                    .content(done(), ContentConfig::Text("OFF".to_string())),
                ItemConfig::new(Variant::MorphingSwitch),
            ],
        }
    }
}

/// Config file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnknownFormat(path.to_path_buf())),
        }
    }
}

impl GalleryConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, format)
    }

    /// Parse and validate config text.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: Self = match format {
            ConfigFormat::Yaml => serde_yaml_ng::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate YAML.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, ConfigFormat::Yaml)
    }

    /// Parse and validate TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, ConfigFormat::Toml)
    }

    /// Simulated seconds per frame.
    pub fn frame_dt(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }

    /// Test id of every item: explicit ids as written, otherwise the
    /// variant slug, suffixed `-2`, `-3`, ... when already taken.
    pub fn item_ids(&self) -> Vec<String> {
        let mut taken: HashSet<String> = self.items.iter().filter_map(|i| i.id.clone()).collect();
        self.items
            .iter()
            .map(|item| {
                if let Some(id) = &item.id {
                    return id.clone();
                }
                let base = item
                    .variant()
                    .map_or_else(|_| item.kind.to_ascii_lowercase(), |v| v.slug().to_string());
                let mut id = base.clone();
                let mut n = 2;
                while taken.contains(&id) {
                    id = format!("{base}-{n}");
                    n += 1;
                }
                taken.insert(id.clone());
                id
            })
            .collect()
    }

    /// Check ranges and cross-field rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("viewport.width", self.viewport.width)?;
        positive("viewport.height", self.viewport.height)?;
        positive("grid.min_cell_width", self.grid.min_cell_width)?;
        non_negative("grid.spacing", self.grid.spacing)?;
        non_negative("grid.padding", self.grid.padding)?;
        non_negative("grid.cell_padding", self.grid.cell_padding)?;
        if !(1..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(ConfigError::invalid(
                "frame_rate",
                format!("must be between 1 and {MAX_FRAME_RATE}"),
            ));
        }
        if self.items.is_empty() {
            return Err(ConfigError::invalid("items", "at least one item is required"));
        }

        for (index, item) in self.items.iter().enumerate() {
            let field = |name: &str| format!("items[{index}].{name}");
            let variant = item.variant()?;
            if item.span == 0 {
                return Err(ConfigError::invalid(field("span"), "must be at least 1"));
            }
            if !variant.takes_content() && (item.positive.is_some() || item.negative.is_some()) {
                let slot = if item.positive.is_some() { "positive" } else { "negative" };
                return Err(ConfigError::invalid(
                    field(slot),
                    format!("{variant} has no content slots"),
                ));
            }
            if item.platform.is_some() && variant != Variant::NativeSwitch {
                return Err(ConfigError::invalid(
                    field("platform"),
                    format!("{variant} is not a native switch"),
                ));
            }
            item.native_platform()
                .map_err(|_| ConfigError::invalid(field("platform"), "unknown platform"))?;
            if let Some(id) = &item.id {
                if id.is_empty()
                    || !id
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
                {
                    return Err(ConfigError::invalid(
                        field("id"),
                        "use letters, digits, '-' and '_' only",
                    ));
                }
            }
        }

        let mut seen = HashSet::new();
        for (index, id) in self.item_ids().into_iter().enumerate() {
            if !seen.insert(id.clone()) {
                return Err(ConfigError::invalid(
                    format!("items[{index}].id"),
                    format!("duplicate test id '{id}'"),
                ));
            }
        }
        Ok(())
    }
}

fn positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be a positive number"))
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must not be negative"))
    }
}
