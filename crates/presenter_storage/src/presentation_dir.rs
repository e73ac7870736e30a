//! Directory-per-run artifact store.

use crate::layout::{
    AUDIO_FILE, AUDIO_STAGING_FILE, CLIP_FILE, CONTENT_FILE, DECK_FILE, IMAGE_FILE, NARRATION_FILE, STRUCTURE_FILE,
};
use presenter_core::{ComposedSlide, PresentationPlan, Topic};
use presenter_error::{JsonError, PresenterResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Artifact directory for one presentation.
///
/// # Layout
///
/// ```text
/// <output_root>/<topic_folder>/
/// ├── structure.json
/// ├── presentation.md
/// ├── slide_0/
/// │   ├── content.md
/// │   ├── narration.txt
/// │   ├── narration.mp3
/// │   ├── slide.png
/// │   └── clip.mp4
/// └── slide_1/
///     └── ...
/// ```
///
/// Files are written to a temporary sibling and renamed into place, so a
/// reader never sees a half-written file. Nothing guards against two runs
/// writing the same slide at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationDir {
    root: PathBuf,
}

impl PresentationDir {
    /// Wrap an existing or future directory without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory for `topic` under `output_root`.
    ///
    /// ```
    /// use presenter_core::Topic;
    /// use presenter_storage::PresentationDir;
    ///
    /// let topic = Topic::new("Memory Safety").unwrap();
    /// let dir = PresentationDir::for_topic("out", &topic);
    /// assert!(dir.root().ends_with("memory_safety"));
    /// assert!(dir.content_path(2).ends_with("slide_2/content.md"));
    /// ```
    pub fn for_topic(output_root: impl AsRef<Path>, topic: &Topic) -> Self {
        Self::new(output_root.as_ref().join(topic.folder_name()))
    }

    /// Root directory of this presentation.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory. Succeeds if it already exists.
    #[tracing::instrument(skip(self), fields(path = %self.root.display()))]
    pub async fn create(&self) -> PresenterResult<()> {
        create_dir(&self.root).await?;
        tracing::debug!("Presentation directory ready");
        Ok(())
    }

    /// Directory holding artifacts for slide `index`.
    pub fn slide_dir(&self, index: usize) -> PathBuf {
        self.root.join(format!("slide_{}", index))
    }

    /// Markdown content of slide `index`.
    pub fn content_path(&self, index: usize) -> PathBuf {
        self.slide_dir(index).join(CONTENT_FILE)
    }

    /// Narration script of slide `index`.
    pub fn narration_path(&self, index: usize) -> PathBuf {
        self.slide_dir(index).join(NARRATION_FILE)
    }

    /// Narration audio of slide `index`.
    pub fn audio_path(&self, index: usize) -> PathBuf {
        self.slide_dir(index).join(AUDIO_FILE)
    }

    /// Where a narrator writes audio for slide `index` before it is committed.
    pub fn staged_audio_path(&self, index: usize) -> PathBuf {
        self.slide_dir(index).join(AUDIO_STAGING_FILE)
    }

    /// Still image of slide `index`.
    pub fn image_path(&self, index: usize) -> PathBuf {
        self.slide_dir(index).join(IMAGE_FILE)
    }

    /// Video clip of slide `index`.
    pub fn clip_path(&self, index: usize) -> PathBuf {
        self.slide_dir(index).join(CLIP_FILE)
    }

    /// Plan snapshot.
    pub fn structure_path(&self) -> PathBuf {
        self.root.join(STRUCTURE_FILE)
    }

    /// Assembled deck.
    pub fn deck_path(&self) -> PathBuf {
        self.root.join(DECK_FILE)
    }

    /// Whether `path` exists. I/O errors count as absent.
    pub async fn exists(path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    /// Cached slide `index`, if both its content and narration are on disk.
    #[tracing::instrument(skip(self), fields(path = %self.root.display()))]
    pub async fn read_slide(&self, index: usize) -> PresenterResult<Option<ComposedSlide>> {
        let content_path = self.content_path(index);
        let narration_path = self.narration_path(index);

        if !(Self::exists(&content_path).await && Self::exists(&narration_path).await) {
            tracing::debug!(slide_index = index, "Slide not cached");
            return Ok(None);
        }

        let content = read_text(&content_path).await?;
        let narration = read_text(&narration_path).await?;
        tracing::debug!(slide_index = index, "Slide cache hit");
        Ok(Some(ComposedSlide::new(index, content, narration)))
    }

    /// Persist content and narration of `slide`.
    #[tracing::instrument(skip(self, slide), fields(path = %self.root.display(), slide_index = slide.index()))]
    pub async fn write_slide(&self, slide: &ComposedSlide) -> PresenterResult<()> {
        let index = *slide.index();
        create_dir(&self.slide_dir(index)).await?;
        write_atomic(&self.content_path(index), slide.content().as_bytes()).await?;
        write_atomic(&self.narration_path(index), slide.narration().as_bytes()).await?;
        tracing::info!("Stored slide");
        Ok(())
    }

    /// Narration script of slide `index`. Missing is an error.
    pub async fn read_narration(&self, index: usize) -> PresenterResult<String> {
        read_text(&self.narration_path(index)).await
    }

    /// Move staged audio of slide `index` to its final path.
    ///
    /// Until this succeeds the slide counts as not narrated, so audio cut
    /// short by an interrupted run is synthesized again.
    #[tracing::instrument(skip(self), fields(path = %self.root.display()))]
    pub async fn commit_audio(&self, index: usize) -> PresenterResult<()> {
        let staged = self.staged_audio_path(index);
        let audio = self.audio_path(index);
        tokio::fs::rename(&staged, &audio).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(staged.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "rename {} to {}: {}",
                    staged.display(),
                    audio.display(),
                    e
                )))
            }
        })?;
        tracing::debug!(slide_index = index, "Committed narration audio");
        Ok(())
    }

    /// Persist the plan snapshot.
    #[tracing::instrument(skip(self, plan), fields(path = %self.root.display(), slides = plan.len()))]
    pub async fn write_structure(&self, plan: &PresentationPlan) -> PresenterResult<()> {
        let json = serde_json::to_string_pretty(plan)
            .map_err(|e| JsonError::new("structure snapshot", e.to_string()))?;
        write_atomic(&self.structure_path(), json.as_bytes()).await
    }

    /// The plan snapshot, or `None` when no structure has been written.
    #[tracing::instrument(skip(self), fields(path = %self.root.display()))]
    pub async fn read_structure(&self) -> PresenterResult<Option<PresentationPlan>> {
        let path = self.structure_path();
        if !Self::exists(&path).await {
            return Ok(None);
        }
        let text = read_text(&path).await?;
        let plan = serde_json::from_str(&text).map_err(|e| {
            JsonError::new(path.display().to_string(), format!("failed to parse: {}", e))
        })?;
        Ok(Some(plan))
    }

    /// Persist the assembled deck.
    pub async fn write_deck(&self, deck: &str) -> PresenterResult<()> {
        write_atomic(&self.deck_path(), deck.as_bytes()).await
    }
}

async fn create_dir(path: &Path) -> PresenterResult<()> {
    tokio::fs::create_dir_all(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::DirectoryCreation(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    Ok(())
}

async fn read_text(path: &Path) -> PresenterResult<String> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
        } else {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        }
    })?;
    Ok(text)
}

// Write to a temp sibling, then rename into place
async fn write_atomic(path: &Path, data: &[u8]) -> PresenterResult<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    tokio::fs::write(&temp_path, data).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    Ok(())
}
