use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Which list a folder belongs to. Stored on disk as the `is_stock` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    Stock,
    Shopping,
}

impl FolderKind {
    pub fn from_flag(is_stock: bool) -> Self {
        if is_stock {
            FolderKind::Stock
        } else {
            FolderKind::Shopping
        }
    }

    pub fn is_stock(self) -> bool {
        matches!(self, FolderKind::Stock)
    }
}

impl fmt::Display for FolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderKind::Stock => write!(f, "stock"),
            FolderKind::Shopping => write!(f, "shopping"),
        }
    }
}

impl FromStr for FolderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stock" => Ok(FolderKind::Stock),
            "shopping" | "shop" => Ok(FolderKind::Shopping),
            other => Err(format!(
                "Unknown folder kind '{}' (expected stock or shopping)",
                other
            )),
        }
    }
}

/// The fixed set of symbols a folder can be shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderIcon {
    #[default]
    House,
    Cart,
    Refrigerator,
    Archivebox,
    Bag,
    Gift,
    Leaf,
    Pills,
    Shippingbox,
    Star,
}

impl FolderIcon {
    pub const ALL: [FolderIcon; 10] = [
        FolderIcon::House,
        FolderIcon::Cart,
        FolderIcon::Refrigerator,
        FolderIcon::Archivebox,
        FolderIcon::Bag,
        FolderIcon::Gift,
        FolderIcon::Leaf,
        FolderIcon::Pills,
        FolderIcon::Shippingbox,
        FolderIcon::Star,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            FolderIcon::House => "house",
            FolderIcon::Cart => "cart",
            FolderIcon::Refrigerator => "refrigerator",
            FolderIcon::Archivebox => "archivebox",
            FolderIcon::Bag => "bag",
            FolderIcon::Gift => "gift",
            FolderIcon::Leaf => "leaf",
            FolderIcon::Pills => "pills",
            FolderIcon::Shippingbox => "shippingbox",
            FolderIcon::Star => "star",
        }
    }
}

impl fmt::Display for FolderIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FolderIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        FolderIcon::ALL
            .iter()
            .copied()
            .find(|icon| icon.symbol() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = FolderIcon::ALL.iter().map(|i| i.symbol()).collect();
                format!("Unknown icon '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub icon: FolderIcon,
    pub is_stock: bool,
}

impl Folder {
    pub fn new(name: impl Into<String>, icon: FolderIcon, is_stock: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon,
            is_stock,
        }
    }

    pub fn kind(&self) -> FolderKind {
        FolderKind::from_flag(self.is_stock)
    }
}

/// Orders folders the way every listing presents them: by id, descending.
pub fn sort_folders(folders: &mut [Folder]) {
    folders.sort_by(|a, b| b.id.cmp(&a.id));
}

/// A product found by barcode lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductHit {
    pub item_name: String,
    pub image_url: Option<String>,
    pub image: Option<Vec<u8>>,
    pub fetched_at: DateTime<Utc>,
}

/// The three-way outcome reported to a lookup caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Success,
    /// The service answered, but not with a usable product.
    Failure,
    /// The service could not be reached, including timeouts.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_parses_case_insensitively() {
        assert_eq!("Cart".parse::<FolderIcon>().unwrap(), FolderIcon::Cart);
        assert!("teapot".parse::<FolderIcon>().is_err());
    }

    #[test]
    fn icon_serializes_as_symbol_name() {
        let json = serde_json::to_string(&FolderIcon::Shippingbox).unwrap();
        assert_eq!(json, "\"shippingbox\"");
    }

    #[test]
    fn kind_follows_stock_flag() {
        let folder = Folder::new("Pantry", FolderIcon::House, false);
        assert_eq!(folder.kind(), FolderKind::Shopping);
        assert!(FolderKind::Stock.is_stock());
        assert_eq!("shop".parse::<FolderKind>().unwrap(), FolderKind::Shopping);
    }

    #[test]
    fn sorts_by_descending_id() {
        let mut folders: Vec<Folder> = (0..5)
            .map(|i| Folder::new(format!("F{}", i), FolderIcon::Star, true))
            .collect();
        sort_folders(&mut folders);
        assert!(folders.windows(2).all(|w| w[0].id > w[1].id));
    }
}
