// SPDX-License-Identifier: MPL-2.0
//! Deferred images.
//!
//! Pictures are resolved against the media directory once at startup. A file
//! that cannot be read is hidden for the rest of the session. The others are
//! only handed to the view after the block holding them came near the
//! viewport.

use crate::content::{image_path, SiteContent};
use crate::ui::layout::Block;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Every place a picture can appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Logo,
    Hero,
    Portrait,
    Specialty(usize),
}

impl ImageSlot {
    /// Block whose visibility triggers loading; `None` for pictures shown
    /// from the start.
    #[must_use]
    pub fn block(self) -> Option<Block> {
        match self {
            ImageSlot::Logo | ImageSlot::Hero => None,
            ImageSlot::Portrait => Some(Block::About),
            ImageSlot::Specialty(_) => Some(Block::Carousel),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    available: HashMap<ImageSlot, PathBuf>,
    loaded: HashSet<ImageSlot>,
}

impl ImageLibrary {
    /// Resolves every picture named by `content`. Unreadable files are
    /// dropped with a warning.
    #[must_use]
    pub fn resolve(content: &SiteContent, media_dir: Option<&Path>) -> Self {
        let mut wanted: Vec<(ImageSlot, &str)> = Vec::new();
        if let Some(file) = content.firm.logo.as_deref() {
            wanted.push((ImageSlot::Logo, file));
        }
        if let Some(file) = content.firm.hero_image.as_deref() {
            wanted.push((ImageSlot::Hero, file));
        }
        if let Some(file) = content.firm.portrait.as_deref() {
            wanted.push((ImageSlot::Portrait, file));
        }
        for (index, specialty) in content.specialties.iter().enumerate() {
            if let Some(file) = specialty.image.as_deref() {
                wanted.push((ImageSlot::Specialty(index), file));
            }
        }

        let mut library = Self::default();
        for (slot, file) in wanted {
            let Some(path) = image_path(media_dir, file) else {
                continue;
            };
            if path.is_file() {
                library.available.insert(slot, path);
            } else {
                tracing::warn!(path = %path.display(), "image unavailable, hiding it");
            }
        }

        let eager: Vec<ImageSlot> = library
            .available
            .keys()
            .copied()
            .filter(|slot| slot.block().is_none())
            .collect();
        library.loaded.extend(eager);
        library
    }

    /// Loads every picture held by `block`.
    pub fn load_block(&mut self, block: Block) {
        let slots: Vec<ImageSlot> = self
            .available
            .keys()
            .copied()
            .filter(|slot| slot.block() == Some(block))
            .collect();
        self.loaded.extend(slots);
    }

    /// Blocks still holding pictures that are not loaded yet.
    #[must_use]
    pub fn pending_blocks(&self) -> Vec<Block> {
        let mut blocks: Vec<Block> = Vec::new();
        for block in self
            .available
            .keys()
            .filter(|slot| !self.loaded.contains(slot))
            .filter_map(|slot| slot.block())
        {
            if !blocks.contains(&block) {
                blocks.push(block);
            }
        }
        blocks
    }

    /// Path of a loaded picture.
    #[must_use]
    pub fn get(&self, slot: ImageSlot) -> Option<&Path> {
        if self.loaded.contains(&slot) {
            self.available.get(&slot).map(PathBuf::as_path)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_available(&self, slot: ImageSlot) -> bool {
        self.available.contains_key(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FirmInfo, Specialty};
    use std::fs;
    use tempfile::tempdir;

    fn content() -> SiteContent {
        SiteContent {
            firm: FirmInfo {
                name: "Firm".into(),
                logo: Some("logo.png".into()),
                portrait: Some("portrait.png".into()),
                hero_image: Some("missing.jpg".into()),
                ..FirmInfo::default()
            },
            specialties: vec![Specialty {
                title: "A".into(),
                summary: "B".into(),
                image: Some("card.png".into()),
            }],
            ..SiteContent::default()
        }
    }

    #[test]
    fn missing_files_are_hidden() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("logo.png"), b"png").expect("write failed");

        let library = ImageLibrary::resolve(&content(), Some(dir.path()));

        assert!(library.is_available(ImageSlot::Logo));
        assert!(!library.is_available(ImageSlot::Hero));
        assert!(library.get(ImageSlot::Hero).is_none());
    }

    #[test]
    fn deferred_pictures_wait_for_their_block() {
        let dir = tempdir().expect("failed to create temp dir");
        for file in ["logo.png", "portrait.png", "card.png"] {
            fs::write(dir.path().join(file), b"png").expect("write failed");
        }

        let mut library = ImageLibrary::resolve(&content(), Some(dir.path()));
        assert!(library.get(ImageSlot::Logo).is_some());
        assert!(library.get(ImageSlot::Portrait).is_none());
        assert!(library.pending_blocks().contains(&Block::About));

        library.load_block(Block::About);
        assert!(library.get(ImageSlot::Portrait).is_some());
        assert!(library.get(ImageSlot::Specialty(0)).is_none());
        assert_eq!(library.pending_blocks(), vec![Block::Carousel]);
    }

    #[test]
    fn without_media_dir_nothing_is_shown() {
        let library = ImageLibrary::resolve(&content(), None);
        assert!(library.get(ImageSlot::Logo).is_none());
        assert!(library.pending_blocks().is_empty());
    }
}
