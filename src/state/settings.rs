//! Settings modal state with inline field editing.
//!
//! Two editable text fields (API key and client secret). The fields are
//! inert buffers: nothing reads them back, no credentials are stored or
//! sent anywhere. The interesting part is the edit-mode state machine.

// ===== SettingsField =====

/// One of the two editable settings fields. Using a sum type for both the
/// field cursor and the editing indicator makes "editing a nonexistent
/// field" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    /// First field.
    #[default]
    ApiKey,
    /// Second field.
    ClientSecret,
}

// ===== SettingsState =====

/// Settings modal state.
///
/// # State Transitions
///
/// - Closed → Open (Settings sidebar entry; cursor and edit mode reset)
/// - Field selection: cursor moves ApiKey ⇄ ClientSecret, clamped
/// - Enter toggles edit mode for the field under the cursor
/// - Esc or Enter leaves edit mode without discarding the buffer
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Whether the modal is shown over the post list pane.
    pub visible: bool,
    /// Field the selection cursor is on.
    pub cursor: SettingsField,
    /// Field currently in edit mode, if any. While `Some`, printable
    /// characters and backspace target that field's buffer.
    pub editing: Option<SettingsField>,
    /// API key field buffer.
    pub api_key: String,
    /// Client secret field buffer.
    pub client_secret: String,
}

impl SettingsState {
    /// Open the modal, resetting cursor and edit mode. Buffers persist.
    pub fn open(&mut self) {
        self.visible = true;
        self.cursor = SettingsField::ApiKey;
        self.editing = None;
    }

    /// Close the modal, leaving any edit mode.
    pub fn close(&mut self) {
        self.visible = false;
        self.editing = None;
    }

    /// Move the field cursor up, clamped at the first field.
    pub fn cursor_up(&mut self) {
        self.cursor = SettingsField::ApiKey;
    }

    /// Move the field cursor down, clamped at the last field.
    pub fn cursor_down(&mut self) {
        self.cursor = SettingsField::ClientSecret;
    }

    /// Toggle edit mode for the field under the cursor.
    pub fn toggle_edit(&mut self) {
        self.editing = match self.editing {
            None => Some(self.cursor),
            Some(_) => None,
        };
    }

    /// Leave edit mode. Buffer contents are kept.
    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    /// Mutable access to a field's buffer.
    pub fn buffer_mut(&mut self, field: SettingsField) -> &mut String {
        match field {
            SettingsField::ApiKey => &mut self.api_key,
            SettingsField::ClientSecret => &mut self.client_secret,
        }
    }

    /// Read access to a field's buffer.
    pub fn buffer(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::ApiKey => &self.api_key,
            SettingsField::ClientSecret => &self.client_secret,
        }
    }
}

// ===== Tests =====
