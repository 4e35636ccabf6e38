//! The review controller: one owned aggregate holding queue, log, staging
//! area and counters, driven by the display surface's button events.

use crate::action::{Action, ActionLog};
use crate::config::ReviewConfig;
use crate::error::Result;
use crate::queue::{ImageQueue, ImageRef};
use crate::staging::{StagingArea, sweep_stale};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    AwaitingDirectory,
    /// An image is on screen, waiting for Keep or Delete.
    Reviewing,
    /// Queue exhausted. Only Undo leads back to `Reviewing`.
    Finished,
}

/// Notifications sent to the display surface. Every method defaults to a
/// no-op so surfaces only implement what they render.
pub trait ReviewObserver {
    /// A new image is current, or `None` when the queue ran out.
    fn on_advance(&mut self, _current: Option<&Path>) {}
    fn on_finished(&mut self) {}
    fn on_counter_changed(&mut self, _reviewed: usize, _total: usize) {}
    fn on_undo_available(&mut self, _available: bool) {}
}

impl ReviewObserver for () {}

#[derive(Debug)]
pub struct ReviewSession {
    state: ReviewState,
    working_dir: Option<PathBuf>,
    queue: ImageQueue,
    log: ActionLog,
    current: Option<ImageRef>,
    initial_total: usize,
    staging: StagingArea,
}

impl ReviewSession {
    /// Sweeps leftovers from earlier runs (if configured) and creates this
    /// session's staging area. Fails when no staging directory can be made.
    pub fn start(config: &ReviewConfig) -> Result<Self> {
        if config.sweep_stale {
            sweep_stale(&config.staging_root, &config.staging_prefix);
        }
        let staging = StagingArea::init_in(&config.staging_root, &config.staging_prefix)?;
        Ok(Self::with_staging(staging))
    }

    pub fn with_staging(staging: StagingArea) -> Self {
        Self {
            state: ReviewState::AwaitingDirectory,
            working_dir: None,
            queue: ImageQueue::default(),
            log: ActionLog::new(),
            current: None,
            initial_total: 0,
            staging,
        }
    }

    /// Loads the queue from `dir` and shows the first image. `None` (no
    /// directory picked) or an unreadable directory leads straight to
    /// `Finished`. Ignored once a directory has been opened.
    pub fn open_directory(&mut self, dir: Option<&Path>, observer: &mut impl ReviewObserver) {
        if self.state != ReviewState::AwaitingDirectory {
            tracing::warn!("directory already chosen; ignoring");
            return;
        }
        self.queue = dir.map(ImageQueue::discover).unwrap_or_default();
        self.working_dir = dir.map(Path::to_path_buf);
        self.initial_total = self.queue.len();
        self.state = ReviewState::Reviewing;
        tracing::info!(
            "reviewing {} images in {}",
            self.initial_total,
            dir.map(|d| d.display().to_string())
                .unwrap_or_else(|| "<none>".to_string())
        );
        observer.on_undo_available(false);
        self.advance(observer);
    }

    pub fn commit_keep(&mut self, observer: &mut impl ReviewObserver) -> Result<()> {
        let Some(image) = self.current.clone() else {
            tracing::debug!("keep ignored: no current image");
            return Ok(());
        };
        tracing::info!("keep {image}");
        self.log.push(Action::Kept { image });
        self.advance(observer);
        observer.on_undo_available(true);
        Ok(())
    }

    /// Moves the current image into staging. On failure nothing is recorded
    /// and the same image stays on screen.
    pub fn commit_delete(&mut self, observer: &mut impl ReviewObserver) -> Result<()> {
        let (Some(image), Some(dir)) = (self.current.clone(), self.working_dir.as_deref()) else {
            tracing::debug!("delete ignored: no current image");
            return Ok(());
        };
        self.staging.stage(&dir.join(image.name()))?;
        tracing::info!("delete {image}");
        self.log.push(Action::Deleted { image });
        self.advance(observer);
        observer.on_undo_available(true);
        Ok(())
    }

    /// Reverts the most recent action and shows its image again. The image
    /// that was on screen goes back to the head of the queue, right behind
    /// it. A failed restore leaves the log and queue untouched.
    pub fn undo(&mut self, observer: &mut impl ReviewObserver) -> Result<()> {
        let Some(action) = self.log.peek().cloned() else {
            tracing::debug!("undo ignored: nothing to undo");
            return Ok(());
        };
        if action.is_delete()
            && let Some(dir) = self.working_dir.as_deref()
        {
            self.staging.restore(action.image().name(), dir)?;
        }
        self.log.pop();
        tracing::info!("undo {action:?}");

        if let Some(on_screen) = self.current.take() {
            self.queue.push_front(on_screen);
        }
        let (Action::Kept { image } | Action::Deleted { image }) = action;
        self.queue.push_front(image);
        self.advance(observer);
        observer.on_undo_available(!self.log.is_empty());
        Ok(())
    }

    /// Removes the staging area and everything still in it.
    pub fn close(self) -> Result<()> {
        tracing::info!(
            "closing session after {} of {} decisions",
            self.reviewed_count(),
            self.initial_total
        );
        self.staging.dispose()
    }

    fn advance(&mut self, observer: &mut impl ReviewObserver) {
        match self.queue.pop_front() {
            Some(next) => {
                self.current = Some(next);
                self.state = ReviewState::Reviewing;
                let path = self.current_path();
                observer.on_advance(path.as_deref());
            }
            None => {
                self.current = None;
                self.state = ReviewState::Finished;
                tracing::debug!("no more images");
                observer.on_advance(None);
                observer.on_finished();
            }
        }
        observer.on_counter_changed(self.reviewed_count(), self.initial_total);
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    pub fn current(&self) -> Option<&ImageRef> {
        self.current.as_ref()
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        let dir = self.working_dir.as_deref()?;
        self.current.as_ref().map(|image| dir.join(image.name()))
    }

    pub fn queue(&self) -> &ImageQueue {
        &self.queue
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    /// Decisions currently standing; equals
    /// `initial_total - queue.len() - (current ? 1 : 0)`.
    pub fn reviewed_count(&self) -> usize {
        self.log.len()
    }

    pub fn initial_total(&self) -> usize {
        self.initial_total
    }

    pub fn can_decide(&self) -> bool {
        self.current.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }
}
