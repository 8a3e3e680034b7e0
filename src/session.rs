//! The processing session: the one current image plus the selected pixel.
//!
//! The app owns a single `Session` and routes every button, pointer release
//! and dropped file through it. Codec failures never replace the image;
//! they are logged and kept as a status line for the user.

use std::path::Path;

use crate::codec;
use crate::command::{Command, CommandOutcome};
use crate::error::{CodecError, CodecResult};
use crate::file_handler::{DropSource, DroppedImage, FilePicker};
use crate::image::GreyImage;
use crate::selection::Selection;
use crate::transform::{self, Transform};

#[derive(Debug, Default)]
pub struct Session {
    image: GreyImage,
    selection: Selection,
    /// Bumped whenever the image or selection changes
    revision: u64,
    status: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given image instead of the built-in one
    pub fn with_image(image: GreyImage) -> Self {
        Self {
            image,
            ..Self::default()
        }
    }

    pub fn image(&self) -> &GreyImage {
        &self.image
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Last message worth showing the user
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Swap in a new current image, keeping the selection inside it
    pub fn replace_image(&mut self, image: GreyImage) {
        self.selection = self.selection.clamped_to(&image);
        self.image = image;
        self.revision += 1;
    }

    pub fn apply(&mut self, transform: Transform) {
        log::debug!("Applying {:?} to {:?}", transform, self.image);
        let image = std::mem::take(&mut self.image);
        self.replace_image(transform.apply(image));
    }

    /// Average `other` into the current image; `None` leaves it unchanged.
    pub fn merge_with(&mut self, other: Option<&GreyImage>) -> bool {
        let Some(other) = other else {
            return false;
        };
        let image = std::mem::take(&mut self.image);
        self.replace_image(transform::merge(image, Some(other)));
        true
    }

    pub fn load_from(&mut self, path: &Path) -> CodecResult<()> {
        let image = codec::decode(path).map_err(|err| self.report(err))?;
        self.set_status(format!(
            "Loaded {} ({} rows x {} cols)",
            path.display(),
            image.rows(),
            image.cols()
        ));
        self.replace_image(image);
        Ok(())
    }

    pub fn load_from_memory(&mut self, name: &str, bytes: &[u8]) -> CodecResult<()> {
        let image = codec::decode_from_memory(bytes).map_err(|err| self.report(err))?;
        self.set_status(format!(
            "Loaded {} ({} rows x {} cols)",
            name,
            image.rows(),
            image.cols()
        ));
        self.replace_image(image);
        Ok(())
    }

    pub fn load_dropped(&mut self, dropped: &DroppedImage) -> CodecResult<()> {
        log::info!("Loading dropped image: {}", dropped.name);
        match &dropped.source {
            DropSource::Path(path) => self.load_from(path),
            DropSource::Bytes(bytes) => self.load_from_memory(&dropped.name, bytes),
        }
    }

    /// Write the current image as PNG; the image itself is never touched
    pub fn save_to(&mut self, path: &Path) -> CodecResult<()> {
        codec::encode(&self.image, path).map_err(|err| self.report(err))?;
        self.set_status(format!("Saved {}", path.display()));
        Ok(())
    }

    pub fn select(&mut self, selection: Selection) -> bool {
        if !self.image.contains(selection.row, selection.col) {
            return false;
        }
        self.selection = selection;
        self.revision += 1;
        true
    }

    /// Select the pixel under a pointer release at `(x, y)` canvas coordinates
    pub fn select_at(&mut self, x: f32, y: f32, pixel_size: f32) -> bool {
        Selection::from_position(x, y, pixel_size, &self.image)
            .is_some_and(|selection| self.select(selection))
    }

    /// Run one button action, asking `picker` for any file it needs
    pub fn execute(&mut self, command: Command, picker: &dyn FilePicker) -> CommandOutcome {
        log::info!("Command: {}", command.label());
        match command {
            Command::Load => {
                let Some(path) = picker.pick_open("Load image") else {
                    return CommandOutcome::Unchanged;
                };
                match self.load_from(&path) {
                    Ok(()) => CommandOutcome::Redraw,
                    Err(_) => CommandOutcome::Unchanged,
                }
            }
            Command::Save => {
                if let Some(path) = picker.pick_save("save to png image file") {
                    // Failure is already reported in the status line
                    let _ = self.save_to(&path);
                }
                CommandOutcome::Unchanged
            }
            Command::Transform(transform) => {
                self.apply(transform);
                CommandOutcome::Redraw
            }
            Command::Merge => {
                let other = picker
                    .pick_open("Merge with image")
                    .and_then(|path| codec::decode(&path).map_err(|err| self.report(err)).ok());
                if self.merge_with(other.as_ref()) {
                    CommandOutcome::Redraw
                } else {
                    CommandOutcome::Unchanged
                }
            }
            Command::Quit => CommandOutcome::Quit,
        }
    }

    fn set_status(&mut self, message: String) {
        log::info!("{}", message);
        self.status = Some(message);
    }

    fn report(&mut self, err: CodecError) -> CodecError {
        log::error!("{}", err);
        self.status = Some(err.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_uses_startup_image() {
        let session = Session::new();
        assert_eq!(session.image(), &GreyImage::default());
        assert_eq!(session.selection(), Selection::new(0, 0));
        assert_eq!(session.status(), None);
    }

    #[test]
    fn test_rotate_clamps_selection() {
        let image = GreyImage::filled(2, 5, 10).unwrap();
        let mut session = Session::with_image(image);
        assert!(session.select(Selection::new(1, 4)));

        session.apply(Transform::Rotate90);
        assert_eq!(session.image().dimensions(), (5, 2));
        assert_eq!(session.selection(), Selection::new(1, 1));
    }

    #[test]
    fn test_select_outside_keeps_previous() {
        let mut session = Session::new();
        assert!(session.select_at(2.5, 1.5, 1.0));
        assert_eq!(session.selection(), Selection::new(1, 2));

        let revision = session.revision();
        assert!(!session.select_at(3.0, 0.0, 1.0));
        assert_eq!(session.selection(), Selection::new(1, 2));
        assert_eq!(session.revision(), revision);
    }

    #[test]
    fn test_transform_bumps_revision() {
        let mut session = Session::new();
        let before = session.revision();
        session.apply(Transform::Lighten);
        assert!(session.revision() > before);
    }
}
