//! Font registry: logical family keys mapped to bundled font files, plus the fallback chain
//! used when a family (or the whole font directory) is unavailable.

use crate::foundation::error::{CreditsError, CreditsResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

macro_rules! font_families {
    ($( $variant:ident => $key:literal, $regular:literal, $bold:literal; )+) => {
        /// Logical font family selectable from a request style.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
        pub enum FontFamily {
            /// Noto Sans CJK (Latin + CJK), the bundled default.
            #[default]
            NotoSans,
            $(
                #[doc = concat!("`", $key, "`")]
                $variant,
            )+
        }

        impl FontFamily {
            /// Every registered family, default first.
            pub const ALL: &'static [FontFamily] = &[FontFamily::NotoSans, $(FontFamily::$variant,)+];

            /// Stable key used in requests.
            pub fn key(self) -> &'static str {
                match self {
                    FontFamily::NotoSans => "noto_sans",
                    $(FontFamily::$variant => $key,)+
                }
            }

            /// `(regular, bold)` file names inside the font directory.
            pub fn files(self) -> (&'static str, &'static str) {
                match self {
                    FontFamily::NotoSans => (DEFAULT_REGULAR, DEFAULT_BOLD),
                    $(FontFamily::$variant => ($regular, $bold),)+
                }
            }
        }
    };
}

const DEFAULT_REGULAR: &str = "NotoSansCJKsc-Regular.otf";
const DEFAULT_BOLD: &str = "NotoSansCJKsc-Bold.otf";

font_families! {
    NotoSerifCjk => "noto_serif_cjk", "NotoSerifCJKsc-Regular.otf", "NotoSerifCJKsc-Bold.otf";
    LxgwWenkai => "lxgw_wenkai", "LXGWWenKai-Regular.ttf", "LXGWWenKai-Bold.ttf";
    ZenMaruGothic => "zen_maru_gothic", "ZenMaruGothic-Regular.ttf", "ZenMaruGothic-Bold.ttf";
    MplusRounded => "mplus_rounded", "MPLUSRounded1c-Regular.ttf", "MPLUSRounded1c-Bold.ttf";
    ShipporiMincho => "shippori_mincho", "ShipporiMincho-Regular.ttf", "ShipporiMincho-Bold.ttf";
    Inter => "inter", "Inter-Regular.ttf", "Inter-Bold.ttf";
    Roboto => "roboto", "Roboto-Regular.ttf", "Roboto-Bold.ttf";
    OpenSans => "open_sans", "OpenSans-Regular.ttf", "OpenSans-Bold.ttf";
    Poppins => "poppins", "Poppins-Regular.ttf", "Poppins-Bold.ttf";
    Montserrat => "montserrat", "Montserrat-Regular.ttf", "Montserrat-Bold.ttf";
    Raleway => "raleway", "Raleway-Regular.ttf", "Raleway-Bold.ttf";
    Quicksand => "quicksand", "Quicksand-Regular.ttf", "Quicksand-Bold.ttf";
    SourceSans => "source_sans", "SourceSans3-Regular.ttf", "SourceSans3-Bold.ttf";
    Lato => "lato", "Lato-Regular.ttf", "Lato-Bold.ttf";
    Nunito => "nunito", "Nunito-Regular.ttf", "Nunito-Bold.ttf";
    Rubik => "rubik", "Rubik-Regular.ttf", "Rubik-Bold.ttf";
    DmSans => "dm_sans", "DMSans-Regular.ttf", "DMSans-Bold.ttf";
    JosefinSans => "josefin_sans", "JosefinSans-Regular.ttf", "JosefinSans-Bold.ttf";
    Ubuntu => "ubuntu", "Ubuntu-Regular.ttf", "Ubuntu-Bold.ttf";
    Oswald => "oswald", "Oswald-Regular.ttf", "Oswald-Bold.ttf";
    BebasNeue => "bebas_neue", "BebasNeue-Regular.ttf", "BebasNeue-Regular.ttf";
    Cinzel => "cinzel", "Cinzel-Regular.ttf", "Cinzel-Bold.ttf";
    PlayfairDisplay => "playfair_display", "PlayfairDisplay-Regular.ttf", "PlayfairDisplay-Bold.ttf";
    Merriweather => "merriweather", "Merriweather-Regular.ttf", "Merriweather-Bold.ttf";
    CrimsonText => "crimson_text", "CrimsonText-Regular.ttf", "CrimsonText-Bold.ttf";
    Lora => "lora", "Lora-Regular.ttf", "Lora-Bold.ttf";
    LibreBaskerville => "libre_baskerville", "LibreBaskerville-Regular.ttf", "LibreBaskerville-Bold.ttf";
    Arvo => "arvo", "Arvo-Regular.ttf", "Arvo-Bold.ttf";
    Neuton => "neuton", "Neuton-Regular.ttf", "Neuton-Bold.ttf";
    AlfaSlabOne => "alfa_slab_one", "AlfaSlabOne-Regular.ttf", "AlfaSlabOne-Regular.ttf";
    Bangers => "bangers", "Bangers-Regular.ttf", "Bangers-Regular.ttf";
    PermanentMarker => "permanent_marker", "PermanentMarker-Regular.ttf", "PermanentMarker-Regular.ttf";
    Pacifico => "pacifico", "Pacifico-Regular.ttf", "Pacifico-Regular.ttf";
    Playwrite => "playwrite", "PlaywriteDEGrund-Regular.ttf", "PlaywriteDEGrund-Regular.ttf";
}

impl FontFamily {
    /// Look up a family by its request key.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// File name for the requested weight.
    pub fn file_for(self, bold: bool) -> &'static str {
        let (regular, bold_file) = self.files();
        if bold { bold_file } else { regular }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl serde::Serialize for FontFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> serde::Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key).unwrap_or_else(|| {
            tracing::warn!(font = %key, "unknown font family, using {}", FontFamily::default());
            FontFamily::default()
        }))
    }
}

/// Platform font files tried after the bundled default.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/mnt/c/Windows/Fonts/msyh.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/mnt/c/Windows/Fonts/arial.ttf",
];

/// Parsed outline font bytes plus the family name parley registered them under.
#[derive(Clone)]
pub struct OutlineFont {
    pub(crate) family_name: String,
    pub(crate) bytes: Arc<Vec<u8>>,
}

impl fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFont")
            .field("family_name", &self.family_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl OutlineFont {
    /// Validate font bytes by registering them with a scratch parley collection.
    pub fn from_bytes(bytes: Vec<u8>) -> CreditsResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CreditsError::font("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CreditsError::font("registered font family has no name"))?
            .to_string();
        Ok(Self {
            family_name,
            bytes: Arc::new(bytes),
        })
    }

    /// Read and validate a font file.
    pub fn from_path(path: &Path) -> CreditsResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            CreditsError::font(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes)
    }

    /// Family name reported by the font itself.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A font handle capable of measuring and rendering text.
#[derive(Clone, Debug)]
pub enum FontFace {
    /// TrueType/OpenType font shaped by parley and rasterized by `vello_cpu`.
    Outline(OutlineFont),
    /// Built-in 5×7 bitmap font.
    Builtin,
}

/// Where a resolved face came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// The requested family's own file.
    Family(PathBuf),
    /// Bundled default family, used when the requested one is missing.
    BundledDefault(PathBuf),
    /// A platform font file.
    System(PathBuf),
    /// The built-in bitmap font.
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Family(p) => write!(f, "family file {}", p.display()),
            Self::BundledDefault(p) => write!(f, "bundled default {}", p.display()),
            Self::System(p) => write!(f, "system font {}", p.display()),
            Self::Builtin => f.write_str("built-in bitmap font"),
        }
    }
}

/// Result of [`FontRegistry::resolve`].
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    /// Loaded face.
    pub face: FontFace,
    /// Origin of the face.
    pub source: FontSource,
}

/// Maps family keys to files under a font directory and applies the fallback chain.
#[derive(Clone, Debug)]
pub struct FontRegistry {
    font_dir: PathBuf,
    system_paths: Vec<PathBuf>,
}

impl FontRegistry {
    /// Registry reading family files from `font_dir`, with the platform fallbacks enabled.
    pub fn new(font_dir: impl Into<PathBuf>) -> Self {
        Self {
            font_dir: font_dir.into(),
            system_paths: SYSTEM_FONT_PATHS.iter().map(PathBuf::from).collect(),
        }
    }

    /// Replace the platform fallback list.
    pub fn with_system_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.system_paths = paths;
        self
    }

    /// Registry that always resolves to the built-in font.
    pub fn builtin_only() -> Self {
        Self {
            font_dir: PathBuf::new(),
            system_paths: Vec::new(),
        }
    }

    /// Directory family files are read from.
    pub fn font_dir(&self) -> &Path {
        &self.font_dir
    }

    /// Resolve `family` at the requested weight. Never fails.
    #[tracing::instrument(skip(self), fields(dir = %self.font_dir.display()))]
    pub fn resolve(&self, family: FontFamily, bold: bool) -> ResolvedFont {
        let mut candidates = Vec::<FontSource>::new();
        if !self.font_dir.as_os_str().is_empty() {
            candidates.push(FontSource::Family(
                self.font_dir.join(family.file_for(bold)),
            ));
            if family != FontFamily::default() {
                candidates.push(FontSource::BundledDefault(
                    self.font_dir.join(FontFamily::default().file_for(bold)),
                ));
            }
        }
        candidates.extend(self.system_paths.iter().cloned().map(FontSource::System));

        for source in candidates {
            let path = match &source {
                FontSource::Family(p) | FontSource::BundledDefault(p) | FontSource::System(p) => p,
                FontSource::Builtin => continue,
            };
            if !path.is_file() {
                continue;
            }
            match OutlineFont::from_path(path) {
                Ok(font) => {
                    if !matches!(source, FontSource::Family(_)) {
                        tracing::warn!(%family, bold, %source, "font family unavailable, falling back");
                    }
                    tracing::debug!(%family, bold, %source, name = font.family_name(), "resolved font");
                    return ResolvedFont {
                        face: FontFace::Outline(font),
                        source,
                    };
                }
                Err(e) => {
                    tracing::warn!(%family, path = %path.display(), error = %e, "skipping unusable font file");
                }
            }
        }

        tracing::warn!(%family, bold, "no font file usable, using built-in bitmap font");
        ResolvedFont {
            face: FontFace::Builtin,
            source: FontSource::Builtin,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
