use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

/// Identifier assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// What kind of entry an item is.
///
/// The store keeps this as a free-form, nullable string. Null and values
/// outside the known set decode as [`ItemType::Inbox`], which keeps them out
/// of both board views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
#[strum(serialize_all = "lowercase")]
pub enum ItemType {
    #[default]
    Inbox,
    Todo,
    Note,
    Idea,
}

impl ItemType {
    /// Items shown in the actions column.
    pub fn is_action(self) -> bool {
        matches!(self, Self::Todo)
    }

    /// Items shown in the reflections column.
    pub fn is_reflection(self) -> bool {
        matches!(self, Self::Note | Self::Idea)
    }
}

impl From<Option<String>> for ItemType {
    fn from(value: Option<String>) -> Self {
        let Some(value) = value else {
            return Self::Inbox;
        };
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, "Unknown item type, treating as inbox");
            Self::Inbox
        })
    }
}

/// Lifecycle status. `Archived` is terminal.
///
/// Null and unknown values decode as [`ItemStatus::Inbox`] so the row stays visible,
/// matching how the board only ever hides explicitly archived rows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
#[strum(serialize_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Inbox,
    Archived,
}

impl From<Option<String>> for ItemStatus {
    fn from(value: Option<String>) -> Self {
        let Some(value) = value else {
            return Self::Inbox;
        };
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, "Unknown item status, treating as inbox");
            Self::Inbox
        })
    }
}

/// A row of the `items` table as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default)]
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    pub fn is_archived(&self) -> bool {
        self.status == ItemStatus::Archived
    }
}

/// Insert shape for a new row. `id` and `created_at` come from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub status: ItemStatus,
}

impl NewItem {
    /// A task or note typed into the board's input field.
    ///
    /// Content is left unset so the store applies its own default.
    pub fn quick(title: impl Into<String>, kind: QuickKind) -> Self {
        Self {
            title: title.into(),
            content: None,
            item_type: kind.into(),
            status: ItemStatus::Inbox,
        }
    }
}

/// The two kinds the board lets a user create directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QuickKind {
    #[default]
    Todo,
    Note,
}

impl From<QuickKind> for ItemType {
    fn from(kind: QuickKind) -> Self {
        match kind {
            QuickKind::Todo => Self::Todo,
            QuickKind::Note => Self::Note,
        }
    }
}
