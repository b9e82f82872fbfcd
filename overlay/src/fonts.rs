//! Font loading for overlay text
//!
//! Fonts named in the config are looked up in a cosmic-text font database and
//! handed out as small copyable [`FontHandle`]s. The renderer turns a handle back
//! into cosmic-text `Attrs` and `Metrics` when it shapes text.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cosmic_text::fontdb::{self, Database, FaceInfo, Query, ID};
use cosmic_text::{Attrs, Family, FontSystem, Metrics};
use hudstyle_types::FontSpec;
use tracing::debug;

use crate::error::FontError;

/// Line height relative to font size, same ratio the renderer shapes with
const LINE_HEIGHT_RATIO: f32 = 1.2;

/// Opaque reference to a font loaded in a [`FontLibrary`].
///
/// Only meaningful for the library that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(usize);

impl FontHandle {
    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

struct LoadedFont {
    spec: FontSpec,
    face: ID,
    /// Family name as reported by the face, used for shaping
    family: String,
}

/// Owns the font database and every font loaded from config
pub struct FontLibrary {
    font_system: FontSystem,
    fonts: Vec<LoadedFont>,
    /// Faces each font file added to the database. A file is only read once.
    file_faces: HashMap<PathBuf, Vec<ID>>,
}

impl FontLibrary {
    /// Create a library backed by the installed system fonts
    pub fn new() -> Self {
        Self::from_font_system(FontSystem::new())
    }

    /// Create a library over a caller-provided font database
    pub fn with_database(db: Database) -> Self {
        let locale = sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string());
        Self::from_font_system(FontSystem::new_with_locale_and_db(locale, db))
    }

    fn from_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system,
            fonts: Vec::new(),
            file_faces: HashMap::new(),
        }
    }

    /// Load a font, reusing the existing handle if this spec was loaded before.
    ///
    /// With `spec.path` set, only faces from that file are considered for
    /// `spec.family`, even when an installed font has the same family name.
    pub fn load(&mut self, spec: &FontSpec) -> Result<FontHandle, FontError> {
        if !spec.size.is_finite() || spec.size <= 0.0 {
            return Err(FontError::InvalidSize {
                family: spec.family.clone(),
                size: spec.size,
            });
        }

        if let Some(index) = self.fonts.iter().position(|f| f.spec == *spec) {
            return Ok(FontHandle(index));
        }

        let face = match &spec.path {
            Some(path) => self.face_from_file(path, &spec.family)?,
            None => self.query_installed(&spec.family)?,
        };
        let family = self
            .font_system
            .db()
            .face(face)
            .and_then(|info| info.families.first())
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| spec.family.clone());

        debug!(
            requested = %spec.family,
            resolved = %family,
            size = spec.size,
            "Loaded font"
        );
        Ok(self.register(spec.clone(), face, family))
    }

    fn query_installed(&self, family: &str) -> Result<ID, FontError> {
        let families = [family_from_name(family)];
        let query = Query {
            families: &families,
            ..Query::default()
        };
        self.font_system
            .db()
            .query(&query)
            .ok_or_else(|| FontError::FamilyNotFound {
                family: family.to_string(),
            })
    }

    fn face_from_file(&mut self, path: &Path, family: &str) -> Result<ID, FontError> {
        let newly_loaded = !self.file_faces.contains_key(path);
        if newly_loaded {
            let db = self.font_system.db_mut();
            let before: Vec<ID> = db.faces().map(|info| info.id).collect();
            db.load_font_file(path)
                .map_err(|source| FontError::LoadFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            let added: Vec<ID> = db
                .faces()
                .map(|info| info.id)
                .filter(|id| !before.contains(id))
                .collect();
            debug!(path = %path.display(), faces = added.len(), "Registered font file");
            self.file_faces.insert(path.to_path_buf(), added);
        }

        let faces = self.file_faces.get(path).map(Vec::as_slice).unwrap_or_default();
        let db = self.font_system.db();
        let matched = faces.iter().copied().find(|&id| {
            db.face(id)
                .is_some_and(|info| face_matches_family(info, family))
        });

        match matched {
            Some(id) => Ok(id),
            None => {
                // A file nothing else uses should not leave faces behind
                let unused = if newly_loaded {
                    self.file_faces.remove(path)
                } else {
                    None
                };
                let db = self.font_system.db_mut();
                for id in unused.into_iter().flatten() {
                    db.remove_face(id);
                }
                Err(FontError::FamilyNotFound {
                    family: family.to_string(),
                })
            }
        }
    }

    fn register(&mut self, spec: FontSpec, face: ID, family: String) -> FontHandle {
        self.fonts.push(LoadedFont { spec, face, family });
        FontHandle(self.fonts.len() - 1)
    }

    /// Number of distinct fonts loaded
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn family(&self, handle: FontHandle) -> Option<&str> {
        self.fonts.get(handle.0).map(|f| f.family.as_str())
    }

    pub fn size(&self, handle: FontHandle) -> Option<f32> {
        self.fonts.get(handle.0).map(|f| f.spec.size)
    }

    /// Face id in the underlying font database
    pub fn face_id(&self, handle: FontHandle) -> Option<ID> {
        self.fonts.get(handle.0).map(|f| f.face)
    }

    pub fn metrics(&self, handle: FontHandle) -> Option<Metrics> {
        self.size(handle)
            .map(|size| Metrics::new(size, size * LINE_HEIGHT_RATIO))
    }

    /// Shaping attributes for text drawn with this font
    pub fn attrs(&self, handle: FontHandle) -> Option<Attrs<'_>> {
        self.family(handle)
            .map(|family| Attrs::new().family(Family::Name(family)))
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontLibrary")
            .field("fonts", &self.fonts.len())
            .finish_non_exhaustive()
    }
}

/// Generic family names accept any face from the file
fn face_matches_family(info: &FaceInfo, family: &str) -> bool {
    match family_from_name(family) {
        fontdb::Family::Name(name) => info
            .families
            .iter()
            .any(|(face_family, _)| face_family.eq_ignore_ascii_case(name)),
        _ => true,
    }
}

/// Map generic CSS-style names onto fontdb's generic families
fn family_from_name(name: &str) -> fontdb::Family<'_> {
    match name {
        "sans-serif" => fontdb::Family::SansSerif,
        "serif" => fontdb::Family::Serif,
        "monospace" => fontdb::Family::Monospace,
        "cursive" => fontdb::Family::Cursive,
        "fantasy" => fontdb::Family::Fantasy,
        _ => fontdb::Family::Name(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_library() -> FontLibrary {
        FontLibrary::with_database(Database::new())
    }

    #[test]
    fn test_missing_family_is_reported() {
        let mut fonts = empty_library();
        let err = fonts
            .load(&FontSpec::new("Nonexistent Sans", 18.0))
            .unwrap_err();
        assert!(
            matches!(err, FontError::FamilyNotFound { family } if family == "Nonexistent Sans")
        );
        assert!(fonts.is_empty());
    }

    #[test]
    fn test_invalid_size_rejected() {
        let mut fonts = empty_library();
        for size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
            let err = fonts.load(&FontSpec::new("Noto Sans", size)).unwrap_err();
            assert!(matches!(err, FontError::InvalidSize { .. }));
        }
    }

    #[test]
    fn test_missing_font_file_is_reported() {
        let mut fonts = empty_library();
        let spec = FontSpec {
            path: Some("/nonexistent/hudstyle/font.ttf".into()),
            ..FontSpec::default()
        };
        assert!(matches!(
            fonts.load(&spec).unwrap_err(),
            FontError::LoadFile { .. }
        ));
    }

    #[test]
    fn test_same_spec_reuses_handle() {
        let mut fonts = empty_library();
        let spec = FontSpec::new("Noto Sans", 20.0);
        let handle = fonts.register(spec.clone(), ID::dummy(), "Noto Sans".to_string());

        assert_eq!(fonts.load(&spec).unwrap(), handle);
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts.family(handle), Some("Noto Sans"));
        assert_eq!(fonts.size(handle), Some(20.0));
        assert_eq!(fonts.face_id(handle), Some(ID::dummy()));
        assert!(fonts.attrs(handle).is_some());

        let metrics = fonts.metrics(handle).unwrap();
        assert_eq!(metrics.font_size, 20.0);
        assert!((metrics.line_height - 24.0).abs() < 1e-4);
    }

    /// First installed font that lives in a file, with its family name
    fn installed_font_file() -> Option<(PathBuf, String)> {
        let mut db = Database::new();
        db.load_system_fonts();
        db.faces().find_map(|info| match &info.source {
            fontdb::Source::File(path) => {
                let (family, _) = info.families.first()?;
                Some((path.clone(), family.clone()))
            }
            _ => None,
        })
    }

    #[test]
    fn test_font_file_read_once_across_sizes() {
        let Some((path, family)) = installed_font_file() else {
            eprintln!("no installed font files, skipping");
            return;
        };
        let mut fonts = empty_library();
        let small = FontSpec {
            path: Some(path.clone()),
            ..FontSpec::new(family.clone(), 10.0)
        };
        let large = FontSpec {
            path: Some(path),
            ..FontSpec::new(family, 11.0)
        };

        let first = fonts.load(&small).unwrap();
        let faces_after_first = fonts.font_system.db().len();
        let second = fonts.load(&large).unwrap();

        assert_ne!(first, second);
        assert_eq!(fonts.font_system.db().len(), faces_after_first);
        assert_eq!(fonts.face_id(first), fonts.face_id(second));
    }

    #[test]
    fn test_font_file_wins_over_installed_family() {
        let Some((path, family)) = installed_font_file() else {
            eprintln!("no installed font files, skipping");
            return;
        };
        let mut fonts = FontLibrary::new();
        let installed: Vec<ID> = fonts.font_system.db().faces().map(|info| info.id).collect();
        let spec = FontSpec {
            path: Some(path),
            ..FontSpec::new(family, 14.0)
        };

        let handle = fonts.load(&spec).unwrap();
        let face = fonts.face_id(handle).unwrap();
        assert!(!installed.contains(&face));
    }

    #[test]
    fn test_font_file_without_family_leaves_no_faces() {
        let Some((path, _)) = installed_font_file() else {
            eprintln!("no installed font files, skipping");
            return;
        };
        let mut fonts = empty_library();
        let spec = FontSpec {
            path: Some(path),
            ..FontSpec::new("No Such Family In This File", 12.0)
        };

        let err = fonts.load(&spec).unwrap_err();
        assert!(matches!(err, FontError::FamilyNotFound { .. }));
        assert_eq!(fonts.font_system.db().len(), 0);
        assert!(fonts.file_faces.is_empty());
    }

    #[test]
    fn test_unknown_handle_yields_nothing() {
        let fonts = empty_library();
        let handle = FontHandle::from_index(3);
        assert!(fonts.family(handle).is_none());
        assert!(fonts.metrics(handle).is_none());
        assert!(fonts.attrs(handle).is_none());
    }

    #[test]
    fn test_generic_family_names() {
        assert_eq!(family_from_name("monospace"), fontdb::Family::Monospace);
        assert_eq!(family_from_name("Noto Sans"), fontdb::Family::Name("Noto Sans"));
    }
}
