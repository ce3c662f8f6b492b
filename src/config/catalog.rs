use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::model::Service;
use crate::domain::ports::ServiceLookup;
use crate::utils::error::Result;

/// The known streaming services. Read-only once constructed; planning
/// code only ever sees it through the `ServiceLookup` port.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    entries: Vec<Service>,
}

/// On-disk catalog format:
///
/// ```toml
/// [services.netflix]
/// name = "Netflix"
/// account_url = "https://www.netflix.com/youraccount"
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    services: BTreeMap<String, CatalogEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogEntry {
    name: String,
    account_url: Option<String>,
}

impl ServiceCatalog {
    /// The default catalog, matching the services the original site
    /// offered.
    pub fn builtin() -> Self {
        let entries = [
            ("netflix", "Netflix", "https://www.netflix.com/youraccount"),
            ("viaplay", "Viaplay", "https://viaplay.se/account"),
            ("disney", "Disney+", "https://www.disneyplus.com/account"),
            ("prime", "Amazon Prime", "https://www.amazon.com/mc/account"),
            ("max", "Max", "https://www.hbomax.com/account"),
            ("apple", "Apple TV+", "https://tv.apple.com/account"),
            ("skyshowtime", "SkyShowtime", "https://www.skyshowtime.com/account"),
            ("tv4play", "TV4 Play", "https://www.tv4play.se/account"),
            ("discovery", "Discovery+", "https://www.discoveryplus.com/se/account"),
        ]
        .into_iter()
        .map(|(id, name, url)| Service {
            id: id.to_string(),
            name: name.to_string(),
            account_url: Some(url.to_string()),
        })
        .collect();

        Self { entries }
    }

    /// Loads a catalog from a TOML file, replacing the built-in one.
    /// Entries are ordered by id.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(raw)?;
        let entries = file
            .services
            .into_iter()
            .map(|(id, entry)| Service {
                id,
                name: entry.name,
                account_url: entry.account_url,
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ServiceLookup for ServiceCatalog {
    fn service(&self, id: &str) -> Option<Service> {
        self.entries.iter().find(|s| s.id == id).cloned()
    }

    fn services(&self) -> Vec<Service> {
        self.entries.clone()
    }
}
