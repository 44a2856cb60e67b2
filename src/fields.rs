//! Form storage for the add-item screen: five labeled fields, each backed by
//! a small single-line editor. No validation lives here; the state machine
//! decides what a value means at commit time.

/// Single-line editor state: raw text plus a byte cursor.
///
/// The cursor always sits on a char boundary, so every edit walks whole
/// chars rather than bytes.
#[derive(Clone, Default)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// One entry of the add-item form.
pub struct Field {
    pub label: &'static str,
    pub editor: TextField,
    /// Numeric fields must parse as a finite number before the form can
    /// advance past them; the check itself happens in the state machine.
    pub numeric: bool,
}

/// The form fields in entry order.
/// 0 name, 1 quantity, 2 waste type, 3 location, 4 disposal method.
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        let field = |label, numeric| Field {
            label,
            editor: TextField::default(),
            numeric,
        };
        Self {
            fields: vec![
                field("Waste Name", false),
                field("Waste Quantity", true),
                field("Waste Type", false),
                field("Waste Location", false),
                field("Disposal Method", false),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn text(&self, idx: usize) -> &str {
        &self.fields[idx].editor.text
    }

    pub fn is_numeric(&self, idx: usize) -> bool {
        self.fields[idx].numeric
    }

    pub fn editor_mut(&mut self, idx: usize) -> &mut TextField {
        &mut self.fields[idx].editor
    }

    pub fn clear_all(&mut self) {
        for field in &mut self.fields {
            field.editor.clear();
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}
