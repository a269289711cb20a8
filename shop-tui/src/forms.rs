//! Form state for the checkout and admin screens
//!
//! 每个表单是一组带标签的输入框加一个焦点下标；按键转发给
//! 聚焦的输入框，Tab/方向键在字段间移动。

use tui_input::Input;

/// One labelled input field
pub struct FormField {
    pub label: &'static str,
    pub input: Input,
}

impl FormField {
    fn new(label: &'static str, value: &str) -> Self {
        Self {
            label,
            input: Input::new(value.to_string()),
        }
    }
}

/// A vertical form with one focused field
pub struct Form {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl Form {
    pub fn new(labels: &[&'static str]) -> Self {
        Self::with_values(&labels.iter().map(|l| (*l, String::new())).collect::<Vec<_>>())
    }

    /// Build a form with pre-filled values (admin edit)
    pub fn with_values(fields: &[(&'static str, String)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(label, value)| FormField::new(label, value))
                .collect(),
            focus: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn focused_input_mut(&mut self) -> &mut Input {
        &mut self.fields[self.focus].input
    }

    /// Field value by position
    pub fn value(&self, index: usize) -> &str {
        self.fields[index].input.value()
    }

    /// Presence check: every field non-blank
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|f| !f.input.value().trim().is_empty())
    }
}
