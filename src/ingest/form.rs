use chrono::NaiveDate;

use super::TransactionDraft;
use crate::models::{CategoryInfo, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Kind,
    Amount,
    Category,
    Description,
    Date,
    Notes,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Kind,
            Self::Amount,
            Self::Category,
            Self::Description,
            Self::Date,
            Self::Notes,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Kind => "Type",
            Self::Amount => "Amount *",
            Self::Category => "Category *",
            Self::Description => "Description *",
            Self::Date => "Date",
            Self::Notes => "Notes (Optional)",
        }
    }

    /// Fields edited by typing, as opposed to cycling through choices.
    pub(crate) fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Amount | Self::Description | Self::Date | Self::Notes
        )
    }
}

/// State of the "Add Transaction" view.
#[derive(Debug, Clone)]
pub(crate) struct TransactionForm {
    pub(crate) kind: TransactionType,
    pub(crate) amount: String,
    /// Catalog value key of the selected category, if any.
    pub(crate) category: Option<&'static str>,
    pub(crate) description: String,
    pub(crate) date: String,
    pub(crate) notes: String,
    pub(crate) focus: usize,
}

impl TransactionForm {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            amount: String::new(),
            category: None,
            description: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            notes: String::new(),
            focus: 0,
        }
    }

    pub(crate) fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub(crate) fn focused(&self) -> FormField {
        let fields = FormField::all();
        fields[self.focus % fields.len()]
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FormField::all().len();
    }

    pub(crate) fn focus_prev(&mut self) {
        let len = FormField::all().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Switching between income and expense clears the category, since the
    /// two offer different lists.
    pub(crate) fn set_kind(&mut self, kind: TransactionType) {
        if self.kind != kind {
            self.kind = kind;
            self.category = None;
        }
    }

    pub(crate) fn categories(&self) -> Vec<&'static CategoryInfo> {
        CategoryInfo::for_type(self.kind)
    }

    pub(crate) fn selected_category(&self) -> Option<&'static CategoryInfo> {
        self.category.and_then(CategoryInfo::find)
    }

    /// Step through the type-filtered category list; `None` wraps to the first entry.
    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let cats = self.categories();
        if cats.is_empty() {
            return;
        }
        let len = cats.len() as i32;
        let next = match self.category.and_then(|v| cats.iter().position(|c| c.value == v)) {
            Some(idx) => (idx as i32 + delta).rem_euclid(len),
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.category = Some(cats[next as usize].value);
    }

    pub(crate) fn suggestions(&self) -> &'static [&'static str] {
        self.selected_category()
            .map(|c| c.suggested_descriptions())
            .unwrap_or(&[])
    }

    pub(crate) fn apply_suggestion(&mut self, index: usize) -> bool {
        match self.suggestions().get(index) {
            Some(s) => {
                self.description = (*s).to_string();
                true
            }
            None => false,
        }
    }

    /// Text buffer behind the focused field, if it is a text field.
    pub(crate) fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::Amount => Some(&mut self.amount),
            FormField::Description => Some(&mut self.description),
            FormField::Date => Some(&mut self.date),
            FormField::Notes => Some(&mut self.notes),
            FormField::Kind | FormField::Category => None,
        }
    }

    pub(crate) fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: self.kind,
            amount: self.amount.clone(),
            category: self.category.unwrap_or_default().to_string(),
            description: self.description.clone(),
            date: self.date.clone(),
            notes: self.notes.clone(),
        }
    }
}
