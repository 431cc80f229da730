use crate::profiles::{Profile, DEFAULT_FLAGS, NO_PROXY};

/// The four editable profile fields, addressed by the digit keys 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Proxy,
    ProxyType,
    Flags,
}

impl Field {
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Name),
            '2' => Some(Self::Proxy),
            '3' => Some(Self::ProxyType),
            '4' => Some(Self::Flags),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Proxy => "Proxy",
            Self::ProxyType => "Proxy Type",
            Self::Flags => "Flags",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Self::Name => "Unique profile name",
            Self::Proxy => "Enter 'none' for no proxy, or a server address (e.g. 127.0.0.1:8080)",
            Self::ProxyType => "Enter 'none', 'http', or 'socks5'",
            Self::Flags => "Browser command-line flags, separated by spaces",
        }
    }
}

/// Working copy of a profile while adding or editing. `original_name` is
/// `None` in add mode; in edit mode it holds the pre-edit name so a rename
/// can be detected on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub original_name: Option<String>,
    pub name: String,
    pub proxy: String,
    pub proxy_type: String,
    pub flags: String,
}

impl EditBuffer {
    pub fn for_add() -> Self {
        Self {
            original_name: None,
            name: String::new(),
            proxy: NO_PROXY.to_string(),
            proxy_type: NO_PROXY.to_string(),
            flags: DEFAULT_FLAGS.to_string(),
        }
    }

    pub fn for_edit(profile: &Profile) -> Self {
        Self {
            original_name: Some(profile.name.clone()),
            name: profile.name.clone(),
            proxy: profile.proxy.clone(),
            proxy_type: profile.proxy_type.clone(),
            flags: profile.flags.clone(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Proxy => &self.proxy,
            Field::ProxyType => &self.proxy_type,
            Field::Flags => &self.flags,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Proxy => &mut self.proxy,
            Field::ProxyType => &mut self.proxy_type,
            Field::Flags => &mut self.flags,
        }
    }

    pub fn to_profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            proxy: self.proxy.clone(),
            proxy_type: self.proxy_type.clone(),
            flags: self.flags.clone(),
        }
    }
}

/// What a profile picker does with the chosen name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPurpose {
    Launch,
    Edit,
    Delete,
    Clean,
}

impl PickerPurpose {
    pub fn title(self) -> &'static str {
        match self {
            Self::Launch => "Select Profile",
            Self::Edit => "Select Profile to Edit",
            Self::Delete => "Select Profile to Delete",
            Self::Clean => "Select Profile to Clean",
        }
    }
}

/// Current screen. Each variant carries exactly the state it needs, so a
/// field editor without a buffer is unrepresentable.
#[derive(Debug)]
pub enum View {
    Main {
        selected: usize,
    },
    Manage {
        selected: usize,
    },
    Picker {
        purpose: PickerPurpose,
        names: Vec<String>,
        selected: usize,
    },
    ConfirmDelete {
        name: String,
    },
    /// Add/edit overview when `field` is `None`; a single-field line editor
    /// when `field` is set. Add vs. edit is decided by the buffer's
    /// `original_name`.
    Editor {
        buffer: EditBuffer,
        field: Option<Field>,
    },
}

impl View {
    pub fn main() -> Self {
        View::Main { selected: 0 }
    }

    /// Short view name shown in the status bar.
    pub fn name(&self) -> &'static str {
        match self {
            View::Main { .. } => "main",
            View::Manage { .. } => "manage",
            View::Picker { purpose, .. } => match purpose {
                PickerPurpose::Launch => "select_profile",
                PickerPurpose::Edit => "select_edit",
                PickerPurpose::Delete => "select_delete",
                PickerPurpose::Clean => "select_clean",
            },
            View::ConfirmDelete { .. } => "confirm_delete",
            View::Editor { buffer, field } => match (field, &buffer.original_name) {
                (Some(Field::Name), _) => "edit_name",
                (Some(Field::Proxy), _) => "edit_proxy",
                (Some(Field::ProxyType), _) => "edit_type",
                (Some(Field::Flags), _) => "edit_flags",
                (None, Some(_)) => "edit_profile",
                (None, None) => "add_profile",
            },
        }
    }
}
