/// Holds the saved copy of a settings document next to the draft being edited
#[derive(Clone, Debug)]
pub struct SettingsEditor<T> {
    saved: T,
    draft: T,
    changed: bool,
}

impl<T: Clone + Default> SettingsEditor<T> {
    pub fn new(saved: T) -> Self {
        Self {
            draft: saved.clone(),
            saved,
            changed: false,
        }
    }

    pub fn saved(&self) -> &T {
        &self.saved
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// True once the draft has been edited and not yet saved, reset or refreshed
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn change<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut T),
    {
        edit(&mut self.draft);
        self.changed = true;
    }

    pub fn save(&mut self) -> &T {
        self.saved = self.draft.clone();
        self.changed = false;

        log::info!("Settings saved");

        &self.saved
    }

    /// Goes back to the default values
    pub fn reset(&mut self) {
        self.saved = T::default();
        self.draft = T::default();
        self.changed = false;

        log::info!("Settings reset to defaults");
    }

    /// Throws away unsaved edits
    pub fn refresh(&mut self) {
        self.draft = self.saved.clone();
        self.changed = false;
    }
}

impl<T: Clone + Default> Default for SettingsEditor<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Sample {
        name: String,
        timeout: u32,
    }

    #[test]
    fn change_marks_editor_as_changed() {
        let mut editor = SettingsEditor::<Sample>::default();

        editor.change(|sample| sample.timeout = 45);

        assert!(editor.is_changed());
        assert_eq!(editor.draft().timeout, 45);
        assert_eq!(editor.saved().timeout, 0);
    }

    #[test]
    fn save_commits_draft() {
        let mut editor = SettingsEditor::<Sample>::default();

        editor.change(|sample| sample.name = "LeadFlow".to_string());
        editor.save();

        assert!(!editor.is_changed());
        assert_eq!(editor.saved().name, "LeadFlow");
    }

    #[test]
    fn refresh_discards_unsaved_edits() {
        let mut editor = SettingsEditor::new(Sample {
            name: "Saved".to_string(),
            timeout: 30,
        });

        editor.change(|sample| sample.timeout = 5);
        editor.refresh();

        assert!(!editor.is_changed());
        assert_eq!(editor.draft(), editor.saved());
        assert_eq!(editor.draft().timeout, 30);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut editor = SettingsEditor::new(Sample {
            name: "Saved".to_string(),
            timeout: 30,
        });

        editor.change(|sample| sample.timeout = 5);
        editor.reset();

        assert_eq!(editor.saved(), &Sample::default());
        assert_eq!(editor.draft(), &Sample::default());
    }
}
