use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::path::PathBuf;

use crate::exiffill_error::{ExifFillError, Result};
use crate::photo::PhotoRecord;

/// One line per record: `[flag] file -> YYYY-MM-DD HH:MM:SS`.
pub fn render_preview(records: &[PhotoRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| match &r.captured_at {
            Some(date) => format!("[{}] {}  ->  {}", date.label(), r.filename, date.display()),
            None => format!("[no date] {}  ->  -", r.filename),
        })
        .collect()
}

/// Yes/no gate in front of the writer.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Supplies the folder to work on, or `None` when the user picked nothing.
pub trait FolderPicker {
    fn pick_folder(&self) -> Result<Option<PathBuf>>;
}

pub struct PromptConfirmer;

impl Confirmer for PromptConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| ExifFillError::Prompt(e.to_string()))
    }
}

/// Used for `--yes`.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

pub struct PromptFolderPicker;

impl FolderPicker for PromptFolderPicker {
    fn pick_folder(&self) -> Result<Option<PathBuf>> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Folder containing the .jpg photos")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ExifFillError::Prompt(e.to_string()))?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }
}
