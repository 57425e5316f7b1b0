//! Strongly-typed selector and entry-state enums
//!
//! The checklist has five rows and a host entry has one of three states.
//! Both are closed sets, so they are enums with `strum` string forms rather
//! than raw integers and strings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One row of the bundle checklist.
///
/// `AdsMalware` is the master row: it gates every other category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[strum(to_string = "adsmalware", serialize = "ads")]
    AdsMalware,
    Fakenews,
    Gambling,
    Porn,
    Social,
}

impl Category {
    /// Number of checklist rows (master included)
    pub const COUNT: usize = 5;

    /// The four non-master categories, in catalog order
    pub const CATEGORIES: [Category; 4] = [
        Category::Fakenews,
        Category::Gambling,
        Category::Porn,
        Category::Social,
    ];

    /// Position of this row in a selector vector
    pub fn index(self) -> usize {
        match self {
            Self::AdsMalware => 0,
            Self::Fakenews => 1,
            Self::Gambling => 2,
            Self::Porn => 3,
            Self::Social => 4,
        }
    }

    /// Inverse of [`Category::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::AdsMalware),
            1 => Some(Self::Fakenews),
            2 => Some(Self::Gambling),
            3 => Some(Self::Porn),
            4 => Some(Self::Social),
            _ => None,
        }
    }

    pub fn is_master(self) -> bool {
        self == Self::AdsMalware
    }

    /// Checklist caption
    pub fn label(self) -> &'static str {
        match self {
            Self::AdsMalware => "Ads and malware",
            Self::Fakenews => "Fake news",
            Self::Gambling => "Gambling",
            Self::Porn => "Porn",
            Self::Social => "Social",
        }
    }
}

/// State of one host entry in the configuration list.
///
/// Only `Deny` means the entry is actively blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    #[default]
    Deny,
    Allow,
    Ignore,
}

impl EntryState {
    pub fn is_active(self) -> bool {
        self == Self::Deny
    }
}
