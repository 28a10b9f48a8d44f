// Create-collection form dialog.
// Holds field values, focus, and validation for the modal. Submitting never
// reaches the backend: valid values are logged and the dialog closes.

use serde::Serialize;

pub const TITLE_REQUIRED: &str = "Please input the title of collection!";

/// Collection visibility radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        }
    }
}

/// Focusable fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Modifier,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Modifier,
            FormField::Modifier => FormField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::Modifier,
            FormField::Description => FormField::Title,
            FormField::Modifier => FormField::Description,
        }
    }
}

/// Values captured by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    pub modifier: Visibility,
}

/// Modal form state, owned by the listings view.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    visible: bool,
    pub title: String,
    pub description: String,
    pub modifier: Visibility,
    pub focus: FormField,
    /// Validation message for the title field.
    pub title_error: Option<&'static str>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hide without touching field values.
    pub fn cancel(&mut self) {
        self.visible = false;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused text field.
    pub fn input(&mut self, c: char) {
        match self.focus {
            FormField::Title => {
                self.title.push(c);
                self.title_error = None;
            }
            FormField::Description => self.description.push(c),
            FormField::Modifier => {
                if c == ' ' {
                    self.modifier = self.modifier.toggle();
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Modifier => {}
        }
    }

    pub fn toggle_modifier(&mut self) {
        if self.focus == FormField::Modifier {
            self.modifier = self.modifier.toggle();
        }
    }

    /// Validate fields. On failure the dialog stays open with a message.
    pub fn validate(&mut self) -> Option<FormValues> {
        if self.title.trim().is_empty() {
            self.title_error = Some(TITLE_REQUIRED);
            self.focus = FormField::Title;
            return None;
        }

        self.title_error = None;
        Some(FormValues {
            title: self.title.clone(),
            description: self.description.clone(),
            modifier: self.modifier,
        })
    }

    /// Submit the dialog. Valid values are logged, fields reset, and the
    /// dialog hidden. No mutation is issued.
    pub fn submit(&mut self) -> Option<FormValues> {
        tracing::debug!("create form submit is not wired to a mutation");
        let values = self.validate()?;

        tracing::info!(
            values = %serde_json::to_string(&values).unwrap_or_default(),
            "received values of form"
        );
        self.reset();
        self.visible = false;
        Some(values)
    }

    /// Restore initial field values.
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.modifier = Visibility::default();
        self.focus = FormField::default();
        self.title_error = None;
    }
}
