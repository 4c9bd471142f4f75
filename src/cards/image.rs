//! Image identities and the manifest that resolves them to assets.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Opaque identifier for one source picture.
///
/// `ImageId(i)` names entry `i` of the game's `ImageManifest`. The engine
/// only compares identities; the presentation layer resolves them to assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(pub u16);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// Photo paths for the reference game, in manifest order.
const REFERENCE_PHOTOS: [&str; 18] = [
    "/game-photos/1.jpeg",
    "/game-photos/3.jpeg",
    "/game-photos/2.jpeg",
    "/game-photos/6.jpeg",
    "/game-photos/7.jpeg",
    "/game-photos/8.jpeg",
    "/game-photos/10.jpeg",
    "/game-photos/12.jpeg",
    "/game-photos/14.jpeg",
    "/game-photos/15.jpeg",
    "/game-photos/17.jpeg",
    "/game-photos/19.jpeg",
    "/game-photos/20.jpeg",
    "/game-photos/21.jpeg",
    "/game-photos/23.jpeg",
    "/game-photos/24.jpeg",
    "/game-photos/25.jpeg",
    "/game-photos/18.jpeg",
];

/// Ordered list of unique image assets.
///
/// ## Example
///
/// ```
/// use heart_pairs::cards::{ImageId, ImageManifest};
///
/// let manifest = ImageManifest::new(["a.png", "b.png"]);
/// assert_eq!(manifest.len(), 2);
/// assert_eq!(manifest.path(ImageId::new(1)), Some("b.png"));
/// assert!(manifest.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageManifest {
    paths: Vec<String>,
}

impl ImageManifest {
    /// Create a manifest from asset paths.
    ///
    /// Not validated here; `validate` (or `GameConfig::validate`) rejects
    /// empty and duplicated manifests.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The 18 photos of the reference game.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(REFERENCE_PHOTOS)
    }

    /// Number of unique images (N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the manifest is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Resolve an image to its asset path.
    #[must_use]
    pub fn path(&self, image: ImageId) -> Option<&str> {
        self.paths.get(usize::from(image.raw())).map(String::as_str)
    }

    /// Check whether an image belongs to this manifest.
    #[must_use]
    pub fn contains(&self, image: ImageId) -> bool {
        usize::from(image.raw()) < self.paths.len()
    }

    /// All image identities, in manifest order.
    pub fn ids(&self) -> impl Iterator<Item = ImageId> + '_ {
        (0..self.paths.len()).map(|i| ImageId::new(i as u16))
    }

    /// Reject empty manifests and repeated paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.is_empty() {
            return Err(ConfigError::NoImages);
        }

        // Two slots per image must fit in a u16 slot index.
        let max = usize::from(u16::MAX) / 2;
        if self.paths.len() > max {
            return Err(ConfigError::TooManyImages {
                count: self.paths.len(),
                max,
            });
        }

        let mut seen = FxHashSet::default();
        for path in &self.paths {
            if !seen.insert(path.as_str()) {
                return Err(ConfigError::DuplicateImage { path: path.clone() });
            }
        }

        Ok(())
    }
}
